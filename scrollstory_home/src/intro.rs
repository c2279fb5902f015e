// Copyright 2025 the Scrollstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll gating while the intro animation plays.
//!
//! On desktop the page must not scroll until the intro has moved out of the
//! way. The host reports the intro's transitions; the gate decides whether the
//! engine runs and whether the document root carries the `intro` class.

use scrollstory_scroll::ScrollEngine;

/// Root class applied while the intro blocks scrolling.
pub const INTRO_CLASS: &str = "intro";

/// A finished CSS transition of the intro overlay.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IntroTransition {
    /// The overlay has moved out; scrolling may begin.
    Out,
    /// The hero title has been shown; hero copy may appear.
    Show,
}

/// Intro state and the scroll lock it implies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct IntroGate {
    mobile: bool,
    loaded: bool,
    scroll_enabled: bool,
    intro_out: bool,
}

impl IntroGate {
    /// Creates a gate for a desktop or mobile viewport.
    #[must_use]
    pub fn new(mobile: bool) -> Self {
        Self {
            mobile,
            ..Self::default()
        }
    }

    /// Updates the viewport class, for example after a resize.
    pub fn set_mobile(&mut self, mobile: bool) {
        self.mobile = mobile;
    }

    /// Returns `true` for a mobile viewport.
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    /// Marks the intro assets as loaded, which starts the overlay's exit.
    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    /// Returns `true` once [`mark_loaded`](Self::mark_loaded) was called.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Records a finished transition.
    ///
    /// [`IntroTransition::Out`] only counts after the intro has loaded, since
    /// the overlay cannot have left before then.
    pub fn on_transition_end(&mut self, transition: IntroTransition) {
        match transition {
            IntroTransition::Out if !self.loaded => {
                tracing::trace!("ignoring intro exit before load");
            }
            IntroTransition::Out => self.scroll_enabled = true,
            IntroTransition::Show => self.intro_out = true,
        }
    }

    /// Returns `true` once the overlay has left.
    #[must_use]
    pub fn scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    /// Returns `true` once the hero title has been shown.
    #[must_use]
    pub fn intro_out(&self) -> bool {
        self.intro_out
    }

    /// Returns `true` while the engine must stay stopped.
    #[must_use]
    pub fn blocks_scroll(&self) -> bool {
        !self.mobile && !self.scroll_enabled
    }

    /// Brings `engine` in line with the gate.
    ///
    /// Starts or stops the engine only when its state differs. Returns whether
    /// the root should carry [`INTRO_CLASS`].
    pub fn apply<E: ScrollEngine + ?Sized>(&self, engine: &mut E) -> bool {
        let blocked = self.blocks_scroll();
        if blocked && !engine.is_stopped() {
            tracing::debug!("intro playing, stopping scroll");
            engine.stop();
        } else if !blocked && engine.is_stopped() {
            tracing::debug!(mobile = self.mobile, "intro done, starting scroll");
            engine.start();
        }
        blocked
    }
}

#[cfg(test)]
mod tests {
    use scrollstory_scroll::{EngineCall, RecordingEngine};

    use super::*;

    #[test]
    fn desktop_waits_for_overlay_exit() {
        let mut gate = IntroGate::new(false);
        let mut engine = RecordingEngine::new(10_000.0);

        assert!(gate.apply(&mut engine));
        assert!(engine.is_stopped());

        gate.on_transition_end(IntroTransition::Out);
        assert!(gate.apply(&mut engine), "exit before load is ignored");

        gate.mark_loaded();
        gate.on_transition_end(IntroTransition::Out);
        assert!(!gate.apply(&mut engine));
        assert!(!engine.is_stopped());
        assert_eq!(engine.calls(), &[EngineCall::Stop, EngineCall::Start]);
    }

    #[test]
    fn mobile_never_blocks() {
        let gate = IntroGate::new(true);
        let mut engine = RecordingEngine::new(10_000.0);
        engine.stop();
        engine.clear_calls();

        assert!(!gate.apply(&mut engine));
        assert!(!gate.apply(&mut engine));
        assert_eq!(engine.calls(), &[EngineCall::Start]);
    }

    #[test]
    fn show_transition_flips_intro_out() {
        let mut gate = IntroGate::new(false);
        assert!(!gate.intro_out());
        gate.on_transition_end(IntroTransition::Show);
        assert!(gate.intro_out());
        assert!(gate.blocks_scroll());
    }

    #[test]
    fn switching_to_mobile_releases_lock() {
        let mut gate = IntroGate::new(false);
        let mut engine = RecordingEngine::new(500.0);
        gate.apply(&mut engine);
        gate.set_mobile(true);
        assert!(!gate.apply(&mut engine));
        assert!(!engine.is_stopped());
    }
}
