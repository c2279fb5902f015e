// Copyright 2025 the Scrollstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named scroll milestones of the home page.

use alloc::vec::Vec;

use kurbo::Size;
use scrollstory_scroll::MeasuredRect;
use scrollstory_threshold::{SharedThresholds, Threshold};

/// Threshold ids registered by the home page.
pub mod ids {
    /// The top of the page.
    pub const TOP: &str = "top";
    /// The "why" slides reach mid-viewport.
    pub const WHY_START: &str = "why-start";
    /// The "why" slides have scrolled through.
    pub const WHY_END: &str = "why-end";
    /// The card slides reach mid-viewport.
    pub const CARDS_START: &str = "cards-start";
    /// The card slides have scrolled through.
    pub const CARDS_END: &str = "cards-end";
    /// One viewport past [`CARDS_END`]; the red backdrop ends here.
    pub const RED_END: &str = "red-end";
    /// The light section enters the viewport.
    pub const LIGHT_START: &str = "light-start";
    /// The features section reaches the top.
    pub const FEATURES: &str = "features";
    /// The in-use section reaches the top.
    pub const IN_USE: &str = "in-use";
    /// The scroll limit.
    pub const END: &str = "end";
}

/// Measured geometry of the home page sections.
///
/// Each rectangle is `None` until the host has measured that section.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct HomeLayout {
    /// Viewport size.
    pub viewport: Size,
    /// The zoom section wrapper.
    pub zoom: Option<MeasuredRect>,
    /// The "why" horizontal slides.
    pub why: Option<MeasuredRect>,
    /// The card horizontal slides.
    pub cards: Option<MeasuredRect>,
    /// The light section.
    pub white: Option<MeasuredRect>,
    /// The feature cards section.
    pub features: Option<MeasuredRect>,
    /// The in-use section.
    pub in_use: Option<MeasuredRect>,
}

impl HomeLayout {
    /// Creates a layout with no measured sections.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Viewport height.
    #[must_use]
    pub fn viewport_height(&self) -> f64 {
        self.viewport.height
    }
}

/// The page milestones derived from a [`HomeLayout`].
///
/// ```rust
/// use kurbo::Size;
/// use scrollstory_home::{HomeLayout, HomeThresholds, ids};
/// use scrollstory_scroll::MeasuredRect;
///
/// let mut layout = HomeLayout::new(Size::new(1280.0, 800.0));
/// layout.why = Some(MeasuredRect::new(2000.0, 1280.0, 1500.0));
///
/// let thresholds = HomeThresholds::from_layout(&layout, None);
/// assert_eq!(thresholds.get(ids::WHY_START), Some(1600.0));
/// assert_eq!(thresholds.get(ids::WHY_END), Some(3100.0));
/// assert_eq!(thresholds.get(ids::FEATURES), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HomeThresholds {
    entries: Vec<Threshold>,
}

impl HomeThresholds {
    /// Derives milestones from `layout` and the engine's scroll `limit`.
    ///
    /// Sections that are not measured yet contribute nothing.
    #[must_use]
    pub fn from_layout(layout: &HomeLayout, limit: Option<f64>) -> Self {
        let vh = layout.viewport_height();
        let mut entries = Vec::with_capacity(10);
        entries.push(Threshold::new(ids::TOP, 0.0));

        if let Some(why) = layout.why {
            let start = why.top() - vh / 2.0;
            entries.push(Threshold::new(ids::WHY_START, start));
            entries.push(Threshold::new(ids::WHY_END, start + why.height()));
        }
        if let Some(cards) = layout.cards {
            let start = cards.top() - vh / 2.0;
            let end = start + cards.height();
            entries.push(Threshold::new(ids::CARDS_START, start));
            entries.push(Threshold::new(ids::CARDS_END, end));
            entries.push(Threshold::new(ids::RED_END, end + vh));
        }
        if let Some(white) = layout.white {
            entries.push(Threshold::new(ids::LIGHT_START, white.top() - vh));
        }
        if let Some(features) = layout.features {
            entries.push(Threshold::new(ids::FEATURES, features.top()));
        }
        if let Some(in_use) = layout.in_use {
            entries.push(Threshold::new(ids::IN_USE, in_use.top()));
        }
        if let Some(limit) = limit {
            entries.push(Threshold::new(ids::END, limit));
        }
        Self { entries }
    }

    /// Value of the milestone `id`, if derived.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<f64> {
        self.entries.iter().find(|t| t.id == id).map(|t| t.value)
    }

    /// Milestones in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Threshold> + '_ {
        self.entries.iter()
    }

    /// Number of milestones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no milestone was derived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes every milestone into `registry`, returning how many were accepted.
    ///
    /// Rejected entries (for example non-finite values from a degenerate
    /// layout) are logged by the registry and skipped.
    pub fn register(&self, registry: &SharedThresholds) -> usize {
        let mut accepted = 0;
        for threshold in &self.entries {
            if registry.add_threshold(threshold.clone()).is_ok() {
                accepted += 1;
            }
        }
        tracing::debug!(accepted, derived = self.entries.len(), "home thresholds registered");
        accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_layout() -> HomeLayout {
        HomeLayout {
            viewport: Size::new(1280.0, 800.0),
            zoom: Some(MeasuredRect::new(800.0, 1280.0, 3000.0)),
            why: Some(MeasuredRect::new(4000.0, 1280.0, 2000.0)),
            cards: Some(MeasuredRect::new(7000.0, 1280.0, 2500.0)),
            white: Some(MeasuredRect::new(10_500.0, 1280.0, 900.0)),
            features: Some(MeasuredRect::new(11_400.0, 1280.0, 4000.0)),
            in_use: Some(MeasuredRect::new(15_400.0, 1280.0, 1200.0)),
        }
    }

    #[test]
    fn derives_every_milestone() {
        let t = HomeThresholds::from_layout(&full_layout(), Some(17_000.0));
        let expected = [
            (ids::TOP, 0.0),
            (ids::WHY_START, 3600.0),
            (ids::WHY_END, 5600.0),
            (ids::CARDS_START, 6600.0),
            (ids::CARDS_END, 9100.0),
            (ids::RED_END, 9900.0),
            (ids::LIGHT_START, 9700.0),
            (ids::FEATURES, 11_400.0),
            (ids::IN_USE, 15_400.0),
            (ids::END, 17_000.0),
        ];
        let got: Vec<(&str, f64)> = t.iter().map(|t| (t.id.as_str(), t.value)).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn unmeasured_page_has_only_top() {
        let t = HomeThresholds::from_layout(&HomeLayout::new(Size::new(390.0, 844.0)), None);
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(ids::TOP), Some(0.0));
    }

    #[test]
    fn register_skips_rejected_values() {
        let mut layout = HomeLayout::new(Size::new(1280.0, 800.0));
        layout.features = Some(MeasuredRect::new(5000.0, 1280.0, 100.0));
        let t = HomeThresholds::from_layout(&layout, Some(f64::NAN));

        let registry = SharedThresholds::new();
        assert_eq!(t.register(&registry), 2);
        assert_eq!(registry.get(ids::FEATURES), Some(5000.0));
        assert!(registry.get(ids::END).is_none());
    }

    #[test]
    fn re_registering_overwrites() {
        let registry = SharedThresholds::new();
        let mut layout = full_layout();
        HomeThresholds::from_layout(&layout, Some(17_000.0)).register(&registry);

        layout.in_use = Some(MeasuredRect::new(15_000.0, 1280.0, 1200.0));
        HomeThresholds::from_layout(&layout, Some(17_000.0)).register(&registry);

        assert_eq!(registry.len(), 10);
        assert_eq!(registry.get(ids::IN_USE), Some(15_000.0));
    }
}
