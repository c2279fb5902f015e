// Copyright 2025 the Scrollstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use scrollstory_range::Progress;
use scrollstory_scroll::{
    Anchor, AnimationHandle, DiscreteState, MeasuredRect, ScrollWindow, WindowAnchors,
};

/// Custom property carrying the stack progress.
pub const PROGRESS: &str = "--progress";

/// Window driving the step index: from two viewports above the section to one
/// viewport before its bottom edge.
pub const STEP_ANCHORS: WindowAnchors = WindowAnchors::new(
    Anchor::TOP.viewport(-2.0),
    Anchor::TOP.height(1.0).viewport(-1.0),
);

/// Window driving [`PROGRESS`]: from the section's top to the same end as
/// [`STEP_ANCHORS`].
pub const PROGRESS_ANCHORS: WindowAnchors =
    WindowAnchors::new(Anchor::TOP, Anchor::TOP.height(1.0).viewport(-1.0));

/// Shape of the card stack.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FeatureCardsConfig {
    /// Number of discrete steps the window is divided into.
    pub steps: usize,
    /// Number of cards in the stack.
    pub cards: usize,
}

impl FeatureCardsConfig {
    /// Ten steps over nine cards.
    #[must_use]
    pub const fn new() -> Self {
        Self { steps: 10, cards: 9 }
    }

    /// Sets [`steps`](Self::steps).
    #[must_use]
    pub const fn steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Sets [`cards`](Self::cards).
    #[must_use]
    pub const fn cards(mut self, cards: usize) -> Self {
        self.cards = cards;
        self
    }
}

impl Default for FeatureCardsConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Values derived for one tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CardsFrame {
    /// Value written to [`PROGRESS`].
    pub progress: Progress,
    /// Current step, `floor(step_progress * steps)`.
    pub step: usize,
    /// Whether `step` differs from the previous frame.
    pub step_changed: bool,
}

/// Controller for the stacked feature cards.
///
/// The step index is render state (it decides which cards carry the
/// `current` class); the stack progress goes straight to the handle.
#[derive(Debug)]
pub struct FeatureCardsSection<H> {
    handle: H,
    rect: Option<MeasuredRect>,
    viewport_height: f64,
    config: FeatureCardsConfig,
    step: DiscreteState<usize>,
}

impl<H: AnimationHandle> FeatureCardsSection<H> {
    /// Creates an unmeasured section writing to `handle`.
    pub fn new(handle: H) -> Self {
        Self {
            handle,
            rect: None,
            viewport_height: 0.0,
            config: FeatureCardsConfig::default(),
            step: DiscreteState::new(),
        }
    }

    /// Replaces the stack shape.
    #[must_use]
    pub fn with_config(mut self, config: FeatureCardsConfig) -> Self {
        self.config = config;
        self
    }

    /// Stores the latest measurement of the section.
    pub fn set_layout(&mut self, rect: Option<MeasuredRect>, viewport_height: f64) {
        self.rect = rect;
        self.viewport_height = viewport_height;
    }

    /// Derives and applies the frame for `scroll`.
    ///
    /// Returns `None` without touching the handle while unmeasured.
    pub fn on_scroll(&mut self, scroll: f64) -> Option<CardsFrame> {
        let rect = self.rect?;
        let vh = self.viewport_height;
        let steps = ScrollWindow::from_rect(rect, vh, STEP_ANCHORS).progress(scroll);
        let progress = ScrollWindow::from_rect(rect, vh, PROGRESS_ANCHORS).progress(scroll);

        let step = steps.step_index(self.config.steps);
        let step_changed = self.step.set(step);
        self.handle.set_variable(PROGRESS, progress.into());

        if step_changed {
            tracing::trace!(scroll, step, "feature cards step changed");
        }
        Some(CardsFrame {
            progress,
            step,
            step_changed,
        })
    }

    /// The step of the most recent frame, if any.
    #[must_use]
    pub fn step(&self) -> Option<usize> {
        self.step.get().copied()
    }

    /// Returns `true` if card `index` (0-based) is stacked at the current step.
    ///
    /// Card `i` is current once the step exceeds `i`. No card is current
    /// before the first frame.
    #[must_use]
    pub fn is_card_current(&self, index: usize) -> bool {
        index < self.config.cards && self.step().is_some_and(|step| index < step)
    }

    /// Number of cards currently stacked.
    #[must_use]
    pub fn current_cards(&self) -> usize {
        self.step().unwrap_or(0).min(self.config.cards)
    }

    /// Number of cards in the stack.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.config.cards
    }

    /// The animation handle.
    pub fn handle(&self) -> &H {
        &self.handle
    }
}
