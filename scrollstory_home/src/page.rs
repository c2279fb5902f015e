// Copyright 2025 the Scrollstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The home page: section controllers wired to one dispatcher and one
//! threshold registry for the lifetime of the page.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use scrollstory_scroll::{
    AnimationHandle, ScrollDispatcher, ScrollEngine, ScrollEvent, Subscription,
};
use scrollstory_threshold::SharedThresholds;

use crate::{
    FeatureCardsSection, HeroSection, HomeLayout, HomeThresholds, InUseReveal, IntroGate,
    Theme, ZoomSection,
};

/// Sections that react to every scroll tick.
#[derive(Debug)]
struct TickSections<H> {
    hero: HeroSection,
    zoom: ZoomSection<H>,
    cards: FeatureCardsSection<H>,
}

impl<H: AnimationHandle> TickSections<H> {
    fn on_scroll(&mut self, event: &ScrollEvent) {
        self.hero.on_scroll(event.scroll);
        self.zoom.on_scroll(event.scroll);
        self.cards.on_scroll(event.scroll);
    }

    fn set_layout(&mut self, layout: &HomeLayout) {
        let vh = layout.viewport_height();
        self.zoom.set_layout(layout.zoom, vh);
        self.cards.set_layout(layout.features, vh);
    }
}

/// The home page controller.
///
/// `H` is the animation handle type of the zoom wrapper and the card stack.
///
/// ```rust
/// use kurbo::Size;
/// use scrollstory_home::{HomeLayout, HomePage, Theme};
/// use scrollstory_scroll::{MeasuredRect, ScrollDispatcher, ScrollEvent, StyleVariables};
/// use scrollstory_threshold::SharedThresholds;
///
/// let dispatcher = ScrollDispatcher::new();
/// let thresholds = SharedThresholds::new();
/// let mut page = HomePage::new(
///     dispatcher.clone(),
///     thresholds.clone(),
///     StyleVariables::new(),
///     StyleVariables::new(),
/// );
///
/// let mut layout = HomeLayout::new(Size::new(1280.0, 800.0));
/// layout.zoom = Some(MeasuredRect::new(800.0, 1280.0, 3000.0));
/// page.set_layout(layout, Some(12_000.0));
/// page.mount();
///
/// dispatcher.dispatch(ScrollEvent::at(3000.0));
/// assert_eq!(page.theme(), Theme::Light);
/// assert!(page.has_scrolled());
///
/// page.unmount();
/// assert!(thresholds.is_empty());
/// ```
pub struct HomePage<H> {
    dispatcher: ScrollDispatcher,
    thresholds: SharedThresholds,
    sections: Rc<RefCell<TickSections<H>>>,
    layout: HomeLayout,
    limit: Option<f64>,
    in_use: InUseReveal,
    intro: IntroGate,
    subscription: Option<Subscription>,
}

impl<H: AnimationHandle + 'static> HomePage<H> {
    /// Creates an unmounted page.
    ///
    /// `zoom` receives the zoom section's variables and `cards` the feature
    /// card stack's.
    pub fn new(
        dispatcher: ScrollDispatcher,
        thresholds: SharedThresholds,
        zoom: H,
        cards: H,
    ) -> Self {
        Self {
            dispatcher,
            thresholds,
            sections: Rc::new(RefCell::new(TickSections {
                hero: HeroSection::new(),
                zoom: ZoomSection::new(zoom),
                cards: FeatureCardsSection::new(cards),
            })),
            layout: HomeLayout::default(),
            limit: None,
            in_use: InUseReveal::new(),
            intro: IntroGate::default(),
            subscription: None,
        }
    }

    /// Subscribes to scroll ticks and publishes the page thresholds.
    ///
    /// Mounting a mounted page does nothing.
    pub fn mount(&mut self) {
        if self.subscription.is_some() {
            return;
        }
        let sections = self.sections.clone();
        self.subscription = Some(
            self.dispatcher
                .subscribe(move |event: &ScrollEvent| sections.borrow_mut().on_scroll(event)),
        );
        self.publish();
        tracing::debug!("home page mounted");
    }

    /// Returns `true` between [`mount`](Self::mount) and [`unmount`](Self::unmount).
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Replaces the measured layout and scroll limit.
    ///
    /// While mounted, thresholds are republished and the sections are brought
    /// up to date with the last dispatched tick.
    pub fn set_layout(&mut self, layout: HomeLayout, limit: Option<f64>) {
        self.layout = layout;
        self.limit = limit;
        self.sections.borrow_mut().set_layout(&self.layout);
        if self.is_mounted() {
            self.publish();
            self.refresh();
        }
    }

    /// Replaces the scroll limit only.
    pub fn set_limit(&mut self, limit: f64) {
        self.set_layout(self.layout, Some(limit));
    }

    /// Reads the limit from `engine`.
    pub fn sync_limit<E: ScrollEngine + ?Sized>(&mut self, engine: &E) {
        self.set_limit(engine.limit());
    }

    fn publish(&self) {
        HomeThresholds::from_layout(&self.layout, self.limit).register(&self.thresholds);
    }

    fn refresh(&self) {
        if let Some(event) = self.dispatcher.last_event() {
            self.sections.borrow_mut().on_scroll(&event);
        }
    }

    /// Page theme set by the zoom section.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.sections.borrow().zoom.theme()
    }

    /// Returns `true` once the page is scrolled past the hero's hint offset.
    #[must_use]
    pub fn has_scrolled(&self) -> bool {
        self.sections.borrow().hero.has_scrolled()
    }

    /// Current step of the feature card stack.
    #[must_use]
    pub fn card_step(&self) -> Option<usize> {
        self.sections.borrow().cards.step()
    }

    /// See [`FeatureCardsSection::is_card_current`].
    #[must_use]
    pub fn is_card_current(&self, index: usize) -> bool {
        self.sections.borrow().cards.is_card_current(index)
    }

    /// Runs `f` with the zoom section.
    pub fn with_zoom<R>(&self, f: impl FnOnce(&ZoomSection<H>) -> R) -> R {
        f(&self.sections.borrow().zoom)
    }

    /// Runs `f` with the feature card stack.
    pub fn with_cards<R>(&self, f: impl FnOnce(&FeatureCardsSection<H>) -> R) -> R {
        f(&self.sections.borrow().cards)
    }

    /// Records an intersection ratio of the in-use section.
    pub fn observe_in_use(&mut self, ratio: f64) -> bool {
        self.in_use.observe(ratio)
    }

    /// Returns `true` once the in-use section has been revealed.
    #[must_use]
    pub fn in_use_visible(&self) -> bool {
        self.in_use.is_visible()
    }

    /// The intro gate.
    #[must_use]
    pub fn intro(&self) -> &IntroGate {
        &self.intro
    }

    /// Mutable access to the intro gate, to report load and transitions.
    pub fn intro_mut(&mut self) -> &mut IntroGate {
        &mut self.intro
    }

    /// See [`IntroGate::apply`].
    pub fn apply_intro<E: ScrollEngine + ?Sized>(&self, engine: &mut E) -> bool {
        self.intro.apply(engine)
    }

    /// The registry this page publishes to.
    #[must_use]
    pub fn thresholds(&self) -> &SharedThresholds {
        &self.thresholds
    }
}

impl<H> HomePage<H> {
    /// Drops the scroll subscription and clears the page thresholds.
    ///
    /// Unmounting an unmounted page does nothing.
    pub fn unmount(&mut self) {
        if self.subscription.take().is_none() {
            return;
        }
        self.thresholds.reset();
        tracing::debug!("home page unmounted");
    }
}

impl<H> Drop for HomePage<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<H> fmt::Debug for HomePage<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HomePage")
            .field("mounted", &self.subscription.is_some())
            .field("layout", &self.layout)
            .field("limit", &self.limit)
            .field("in_use", &self.in_use)
            .field("intro", &self.intro)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;
    use scrollstory_scroll::{MeasuredRect, StyleVariables};

    use super::*;
    use crate::thresholds::ids;

    fn page(dispatcher: &ScrollDispatcher) -> HomePage<StyleVariables> {
        HomePage::new(
            dispatcher.clone(),
            SharedThresholds::new(),
            StyleVariables::new(),
            StyleVariables::new(),
        )
    }

    #[test]
    fn mount_is_idempotent() {
        let dispatcher = ScrollDispatcher::new();
        let mut page = page(&dispatcher);
        assert!(!page.is_mounted());
        page.mount();
        page.mount();
        assert_eq!(dispatcher.subscriber_count(), 1);
        assert_eq!(page.thresholds().get(ids::TOP), Some(0.0));
        assert_eq!(page.thresholds().len(), 1);
    }

    #[test]
    fn mount_publishes_exactly_the_derived_thresholds() {
        let dispatcher = ScrollDispatcher::new();
        let mut page = page(&dispatcher);
        let mut layout = HomeLayout::new(Size::new(1280.0, 800.0));
        layout.features = Some(MeasuredRect::new(5000.0, 1280.0, 2000.0));
        page.set_layout(layout, Some(9000.0));
        page.mount();

        let derived = HomeThresholds::from_layout(&layout, Some(9000.0));
        assert!(page.thresholds().with(|r| r.iter().eq(derived.iter())));
        assert_eq!(page.thresholds().with(|r| r.revision()), 3);
    }

    #[test]
    fn unmount_releases_subscription_and_registry() {
        let dispatcher = ScrollDispatcher::new();
        let mut page = page(&dispatcher);
        page.mount();
        page.unmount();
        assert_eq!(dispatcher.subscriber_count(), 0);
        assert!(page.thresholds().is_empty());

        dispatcher.dispatch(ScrollEvent::at(500.0));
        assert!(!page.has_scrolled());
    }

    #[test]
    fn dropping_page_unsubscribes() {
        let dispatcher = ScrollDispatcher::new();
        let thresholds = {
            let mut page = page(&dispatcher);
            page.mount();
            page.thresholds().clone()
        };
        assert_eq!(dispatcher.subscriber_count(), 0);
        assert!(thresholds.is_empty());
    }

    #[test]
    fn relayout_catches_up_with_last_tick() {
        let dispatcher = ScrollDispatcher::new();
        let mut page = page(&dispatcher);
        page.mount();

        // Zoom window 1200..3000; the tick lands before the section is measured.
        dispatcher.dispatch(ScrollEvent::at(3000.0));
        assert_eq!(page.theme(), Theme::Dark);

        let mut layout = HomeLayout::new(Size::new(1280.0, 800.0));
        layout.zoom = Some(MeasuredRect::new(800.0, 1280.0, 3000.0));
        page.set_layout(layout, Some(9000.0));

        assert_eq!(page.theme(), Theme::Light);
        assert_eq!(page.thresholds().get(ids::END), Some(9000.0));
        page.with_zoom(|zoom| {
            assert_eq!(zoom.handle().keyword("background-color"), Some("currentColor"));
        });
    }
}
