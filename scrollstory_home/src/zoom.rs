// Copyright 2025 the Scrollstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The zoom narrative: one scroll window drives two staggered transitions and
//! flips the page theme once the second one completes.

use scrollstory_range::Progress;
use scrollstory_scroll::{
    Anchor, AnimationHandle, DiscreteState, MeasuredRect, ScrollWindow, WindowAnchors,
};

use crate::Theme;

/// Custom property carrying the first transition.
pub const PROGRESS1: &str = "--progress1";
/// Custom property carrying the second transition.
pub const PROGRESS2: &str = "--progress2";
/// Property filled with `currentColor` once the zoom is complete.
pub const BACKGROUND_COLOR: &str = "background-color";

/// The zoom window starts half a viewport into the section and ends one
/// viewport before its bottom edge.
pub const ZOOM_ANCHORS: WindowAnchors = WindowAnchors::new(
    Anchor::TOP.viewport(0.5),
    Anchor::TOP.height(1.0).viewport(-1.0),
);

/// Split of the zoom progress into its two transitions.
///
/// ```rust
/// use scrollstory_home::ZoomConfig;
///
/// let config = ZoomConfig::new().center(0.5);
/// assert_eq!(config.center, 0.5);
/// assert_eq!(config.overlap, ZoomConfig::default().overlap);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Where the first transition completes.
    pub center: f64,
    /// How far before `center` the second transition begins.
    pub overlap: f64,
}

impl ZoomConfig {
    /// Center `0.6`, overlap `0.055`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            center: 0.6,
            overlap: 0.055,
        }
    }

    /// Sets [`center`](Self::center).
    #[must_use]
    pub const fn center(mut self, center: f64) -> Self {
        self.center = center;
        self
    }

    /// Sets [`overlap`](Self::overlap).
    #[must_use]
    pub const fn overlap(mut self, overlap: f64) -> Self {
        self.overlap = overlap;
        self
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Values derived for one tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ZoomFrame {
    /// Progress through the whole zoom window.
    pub progress: Progress,
    /// First transition, `[0, center]` of `progress`.
    pub progress1: Progress,
    /// Second transition, `[center - overlap, 1]` of `progress`.
    pub progress2: Progress,
    /// Page theme implied by `progress2`.
    pub theme: Theme,
    /// Whether `theme` differs from the previous frame.
    pub theme_changed: bool,
}

/// Controller for the zoom section.
///
/// Writes [`PROGRESS1`] and [`PROGRESS2`] on its handle every tick and keeps
/// [`BACKGROUND_COLOR`] set only while the zoom is complete.
#[derive(Debug)]
pub struct ZoomSection<H> {
    handle: H,
    rect: Option<MeasuredRect>,
    viewport_height: f64,
    config: ZoomConfig,
    theme: DiscreteState<Theme>,
}

impl<H: AnimationHandle> ZoomSection<H> {
    /// Creates an unmeasured section writing to `handle`.
    pub fn new(handle: H) -> Self {
        Self {
            handle,
            rect: None,
            viewport_height: 0.0,
            config: ZoomConfig::default(),
            theme: DiscreteState::with_value(Theme::Dark),
        }
    }

    /// Replaces the transition split.
    #[must_use]
    pub fn with_config(mut self, config: ZoomConfig) -> Self {
        self.config = config;
        self
    }

    /// Stores the latest measurement of the section wrapper.
    pub fn set_layout(&mut self, rect: Option<MeasuredRect>, viewport_height: f64) {
        self.rect = rect;
        self.viewport_height = viewport_height;
    }

    /// The scroll window, once the section has been measured.
    #[must_use]
    pub fn window(&self) -> Option<ScrollWindow> {
        self.rect
            .map(|rect| ScrollWindow::from_rect(rect, self.viewport_height, ZOOM_ANCHORS))
    }

    /// Derives and applies the frame for `scroll`.
    ///
    /// Returns `None` without touching the handle while unmeasured.
    pub fn on_scroll(&mut self, scroll: f64) -> Option<ZoomFrame> {
        let Some(window) = self.window() else {
            tracing::trace!(scroll, "zoom section not measured yet");
            return None;
        };

        let progress = window.progress(scroll);
        let progress1 = progress.sub_window(0.0, self.config.center);
        let progress2 = progress.sub_window(self.config.center - self.config.overlap, 1.0);
        let theme = if progress2.is_complete() {
            Theme::Light
        } else {
            Theme::Dark
        };
        let theme_changed = self.theme.set(theme);

        self.handle.set_variable(PROGRESS1, progress1.into());
        self.handle.set_variable(PROGRESS2, progress2.into());
        if progress.is_complete() {
            self.handle.set_variable(BACKGROUND_COLOR, "currentColor".into());
        } else {
            self.handle.remove_variable(BACKGROUND_COLOR);
        }

        if theme_changed {
            tracing::debug!(scroll, ?theme, "zoom theme changed");
        }
        Some(ZoomFrame {
            progress,
            progress1,
            progress2,
            theme,
            theme_changed,
        })
    }

    /// The theme of the most recent frame; dark before the first one.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.get().copied().unwrap_or_default()
    }

    /// The animation handle.
    pub fn handle(&self) -> &H {
        &self.handle
    }
}
