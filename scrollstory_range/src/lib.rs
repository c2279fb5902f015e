// Copyright 2025 the Scrollstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=scrollstory_range --heading-base-level=0

//! Scrollstory Range: clamp and linear range mapping for scroll progress.
//!
//! This crate provides the small numeric core used by scroll-driven page
//! sections:
//! - [`clamp`] restricts a value to a closed interval.
//! - [`map_range`] linearly maps a value from one interval into another,
//!   **without** clamping (values outside the domain extrapolate).
//! - [`Progress`] is a `[0, 1]` value derived from a scroll window, with
//!   helpers to compose sub-windows and derive discrete step indices.
//!
//! Keeping [`map_range`] unclamped lets callers derive several progress
//! values from one scroll offset and saturate each of them at a different
//! point.
//!
//! ## Minimal example
//!
//! ```rust
//! use scrollstory_range::{Progress, clamp, map_range};
//!
//! assert_eq!(map_range(0.0, 100.0, 50.0, 0.0, 1.0), 0.5);
//! assert_eq!(map_range(100.0, 200.0, 50.0, 0.0, 1.0), -0.5);
//! assert_eq!(clamp(0.0, 1.5, 1.0), 1.0);
//!
//! // Section spans scroll offsets 1000..3000; the page is at 2500.
//! let progress = Progress::from_scroll(1000.0, 3000.0, 2500.0);
//! assert_eq!(progress.get(), 0.75);
//!
//! // Two overlapping windows derived from the same progress.
//! let early = progress.sub_window(0.0, 0.6);
//! let late = progress.sub_window(0.545, 1.0);
//! assert!(early.is_complete());
//! assert!(!late.is_complete());
//! ```
//!
//! ## Degenerate inputs
//!
//! - [`clamp`] with `min > max` swaps the bounds.
//! - [`map_range`] with `in_start == in_end` returns `out_start` instead of
//!   dividing by zero. Use [`try_map_range`] to observe that case as an error.
//!
//! This crate is `no_std`.

#![no_std]

mod progress;
mod scalar;

use core::fmt;

pub use progress::Progress;
pub use scalar::Scalar;

/// Error returned by [`try_map_range`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RangeError {
    /// The input domain has zero width (`in_start == in_end`).
    EmptyDomain,
    /// At least one input is NaN or infinite.
    NonFinite,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDomain => f.write_str("input range has zero width"),
            Self::NonFinite => f.write_str("range mapping input is not finite"),
        }
    }
}

impl core::error::Error for RangeError {}

/// Restricts `value` to the closed interval between `min` and `max`.
///
/// If `min > max` the bounds are swapped, so the result always lies between
/// the two bounds. A NaN `value` is returned unchanged.
///
/// ```rust
/// use scrollstory_range::clamp;
///
/// assert_eq!(clamp(0.0, -0.2, 1.0), 0.0);
/// assert_eq!(clamp(0.0, 0.4, 1.0), 0.4);
/// // Inverted bounds behave like `clamp(0.0, 2.0, 1.0)`.
/// assert_eq!(clamp(1.0, 2.0, 0.0), 1.0);
/// ```
#[must_use]
#[inline]
pub fn clamp<S: Scalar>(min: S, value: S, max: S) -> S {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Linearly maps `value` from `[in_start, in_end]` into `[out_start, out_end]`.
///
/// The result is not clamped: inputs outside the domain extrapolate along the
/// same line. Both endpoints map exactly (`in_start` to `out_start`, `in_end`
/// to `out_end`).
///
/// A zero-width domain returns `out_start`.
#[must_use]
#[inline]
pub fn map_range<S: Scalar>(in_start: S, in_end: S, value: S, out_start: S, out_end: S) -> S {
    let span = in_end - in_start;
    if span == S::zero() {
        return out_start;
    }
    if value == in_start {
        return out_start;
    }
    if value == in_end {
        return out_end;
    }
    let t = (value - in_start) / span;
    out_start + (out_end - out_start) * t
}

/// Like [`map_range`], but reports degenerate inputs instead of substituting a default.
///
/// ```rust
/// use scrollstory_range::{RangeError, try_map_range};
///
/// assert_eq!(try_map_range(0.0, 10.0, 5.0, 0.0, 2.0), Ok(1.0));
/// assert_eq!(try_map_range(3.0, 3.0, 5.0, 0.0, 1.0), Err(RangeError::EmptyDomain));
/// assert_eq!(try_map_range(0.0, 1.0, f64::NAN, 0.0, 1.0), Err(RangeError::NonFinite));
/// ```
pub fn try_map_range<S: Scalar>(
    in_start: S,
    in_end: S,
    value: S,
    out_start: S,
    out_end: S,
) -> Result<S, RangeError> {
    if ![in_start, in_end, value, out_start, out_end]
        .iter()
        .all(|v| v.is_finite())
    {
        return Err(RangeError::NonFinite);
    }
    if in_end - in_start == S::zero() {
        return Err(RangeError::EmptyDomain);
    }
    Ok(map_range(in_start, in_end, value, out_start, out_end))
}

/// Maps `value` like [`map_range`] and clamps the result into the output range.
///
/// The output bounds may be given in either order.
#[must_use]
#[inline]
pub fn map_clamped<S: Scalar>(in_start: S, in_end: S, value: S, out_start: S, out_end: S) -> S {
    clamp(
        out_start,
        map_range(in_start, in_end, value, out_start, out_end),
        out_end,
    )
}
