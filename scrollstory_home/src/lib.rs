// Copyright 2025 the Scrollstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=scrollstory_home --heading-base-level=0

//! Scrollstory Home: scroll-driven section controllers for a marketing home page.
//!
//! Each controller turns scroll offsets and measured geometry into the values
//! its section renders:
//! - [`HeroSection`]: hides the scroll hint once the page moves.
//! - [`ZoomSection`]: two staggered transitions over one window, plus the
//!   page [`Theme`].
//! - [`FeatureCardsSection`]: a stepped card stack with a continuous
//!   `--progress`.
//! - [`InUseReveal`]: a one-way reveal from intersection ratios.
//! - [`IntroGate`]: keeps the scroll engine stopped while the intro plays.
//! - [`HomeThresholds`]: named page milestones published to a
//!   [`SharedThresholds`](scrollstory_threshold::SharedThresholds) registry.
//!
//! [`HomePage`] owns all of them, subscribes to a
//! [`ScrollDispatcher`](scrollstory_scroll::ScrollDispatcher) on
//! [`mount`](HomePage::mount), and releases everything on
//! [`unmount`](HomePage::unmount) or drop.
//!
//! Controllers never read the DOM. Geometry arrives as
//! [`MeasuredRect`](scrollstory_scroll::MeasuredRect) snapshots, and per-tick
//! values leave through an [`AnimationHandle`](scrollstory_scroll::AnimationHandle).
//!
//! This crate is `no_std` + `alloc`; enable `std` (default) or `libm` for Kurbo.

#![no_std]

extern crate alloc;

use core::fmt;

mod feature_cards;
mod hero;
mod intro;
mod page;
mod reveal;
mod thresholds;
mod zoom;

pub use feature_cards::{
    CardsFrame, FeatureCardsConfig, FeatureCardsSection, PROGRESS, PROGRESS_ANCHORS, STEP_ANCHORS,
};
pub use hero::{HeroSection, SCROLL_HINT_OFFSET};
pub use intro::{INTRO_CLASS, IntroGate, IntroTransition};
pub use page::HomePage;
pub use reveal::{InUseReveal, REVEAL_THRESHOLD};
pub use thresholds::{HomeLayout, HomeThresholds, ids};
pub use zoom::{
    BACKGROUND_COLOR, PROGRESS1, PROGRESS2, ZOOM_ANCHORS, ZoomConfig, ZoomFrame, ZoomSection,
};

/// Color scheme of the page layout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Light text on a dark background.
    #[default]
    Dark,
    /// Dark text on a light background.
    Light,
}

impl Theme {
    /// The theme's name as used in class names and data attributes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
