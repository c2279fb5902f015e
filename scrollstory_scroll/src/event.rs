// Copyright 2025 the Scrollstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// One scroll tick as reported by the smooth-scroll engine.
///
/// The engine snapshots these values once per tick; every subscriber of that
/// tick observes the same event.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollEvent {
    /// Current scroll offset in pixels from the top of the scrollable content.
    pub scroll: f64,
    /// Whether the engine is currently animating toward a target.
    pub is_scrolling: bool,
    /// Signed scroll velocity in pixels per tick.
    pub velocity: f64,
    /// Whether user input is locked out by a locked `scroll_to`.
    pub is_locked: bool,
}

impl ScrollEvent {
    /// Creates an idle event at the given offset.
    #[must_use]
    pub const fn at(scroll: f64) -> Self {
        Self {
            scroll,
            is_scrolling: false,
            velocity: 0.0,
            is_locked: false,
        }
    }

    /// Returns this event with the given velocity and `is_scrolling` derived from it.
    #[must_use]
    pub fn with_velocity(mut self, velocity: f64) -> Self {
        self.velocity = velocity;
        self.is_scrolling = velocity != 0.0;
        self
    }

    /// Returns this event with `is_locked` set.
    #[must_use]
    pub const fn locked(mut self, is_locked: bool) -> Self {
        self.is_locked = is_locked;
        self
    }
}
