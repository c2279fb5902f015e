// Copyright 2025 the Scrollstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::{Scalar, clamp, map_range};

/// How far a scroll position is through an interval, in `[0, 1]`.
///
/// A `Progress` is always clamped: constructing one from an out-of-range value
/// saturates at the nearest bound, and NaN becomes `0`. Because of this,
/// re-clamping an existing progress is a no-op.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct Progress(f64);

impl Progress {
    /// Progress at the start of an interval.
    pub const ZERO: Self = Self(0.0);
    /// Progress at the end of an interval.
    pub const ONE: Self = Self(1.0);

    /// Creates a progress value, clamping `value` into `[0, 1]`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(clamp(0.0, value, 1.0))
    }

    /// Computes progress of `scroll` through the window `[start, end]`.
    ///
    /// This is `clamp(0, map_range(start, end, scroll, 0, 1), 1)`. A window of
    /// zero width stays at `0`, since [`map_range`] returns `out_start` there.
    ///
    /// ```rust
    /// use scrollstory_range::Progress;
    ///
    /// assert_eq!(Progress::from_scroll(0.0, 100.0, 25.0).get(), 0.25);
    /// assert_eq!(Progress::from_scroll(0.0, 100.0, 250.0), Progress::ONE);
    /// assert_eq!(Progress::from_scroll(40.0, 40.0, 50.0), Progress::ZERO);
    /// ```
    #[must_use]
    pub fn from_scroll(start: f64, end: f64, scroll: f64) -> Self {
        Self::new(map_range(start, end, scroll, 0.0, 1.0))
    }

    /// Returns the raw value in `[0, 1]`.
    #[must_use]
    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Re-maps this progress through the sub-interval `[from, to]` of `[0, 1]`.
    ///
    /// The result is `0` until this progress reaches `from` and `1` once it
    /// reaches `to`. Several sub-windows of one progress may overlap, which is
    /// how staggered transitions are driven from a single scroll offset.
    #[must_use]
    pub fn sub_window(self, from: f64, to: f64) -> Self {
        Self::from_scroll(from, to, self.0)
    }

    /// Returns `floor(progress * steps)`, saturating at `steps`.
    ///
    /// ```rust
    /// use scrollstory_range::Progress;
    ///
    /// assert_eq!(Progress::new(0.0).step_index(10), 0);
    /// assert_eq!(Progress::new(0.35).step_index(10), 3);
    /// assert_eq!(Progress::new(1.0).step_index(10), 10);
    /// ```
    #[must_use]
    pub fn step_index(self, steps: usize) -> usize {
        (self.0 * f64::from_usize(steps)).floor_to_usize().min(steps)
    }

    /// Interpolates linearly between `from` and `to` at this progress.
    #[must_use]
    pub fn lerp(self, from: f64, to: f64) -> f64 {
        map_range(0.0, 1.0, self.0, from, to)
    }

    /// Returns `true` at exactly `0`.
    #[must_use]
    pub fn is_start(self) -> bool {
        self.0 == 0.0
    }

    /// Returns `true` at exactly `1`.
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 == 1.0
    }
}

impl fmt::Debug for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Progress").field(&self.0).finish()
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Progress> for f64 {
    fn from(progress: Progress) -> Self {
        progress.0
    }
}
