// Copyright 2025 the Scrollstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=scrollstory_threshold --heading-base-level=0

//! Scrollstory Threshold: a page-scoped registry of named scroll breakpoints.
//!
//! Page sections measure themselves and publish named milestones ("why-start",
//! "cards-end", ...) as scroll offsets. The registry is an explicit object
//! owned by the page rather than an ambient global: it is created when the
//! page mounts, passed to every section that writes into it, and cleared with
//! [`ThresholdRegistry::reset`] when the page is torn down.
//!
//! ## Write contract
//!
//! - [`ThresholdRegistry::add_threshold`] upserts by id. The last write wins;
//!   an overwritten entry keeps its original iteration position.
//! - There is no removal of single entries. Entries live until [`reset`].
//! - Non-finite values (for example, derived from a rectangle that has not
//!   been measured yet) and empty ids are rejected and leave the registry
//!   unchanged. Rejections are logged and never fatal.
//!
//! [`reset`]: ThresholdRegistry::reset
//!
//! ## Example
//!
//! ```rust
//! use scrollstory_threshold::{Threshold, ThresholdRegistry};
//!
//! let mut thresholds = ThresholdRegistry::new();
//! thresholds.add_threshold(Threshold::new("top", 0.0)).unwrap();
//! thresholds.add_threshold(Threshold::new("end", 5000.0)).unwrap();
//!
//! assert_eq!(thresholds.len(), 2);
//! assert_eq!(thresholds.get("end"), Some(5000.0));
//!
//! // Re-registering an id overwrites it.
//! thresholds.add_threshold(Threshold::new("end", 5200.0)).unwrap();
//! assert_eq!(thresholds.len(), 2);
//! assert_eq!(thresholds.get("end"), Some(5200.0));
//! ```
//!
//! For several writers sharing one registry, see [`SharedThresholds`].
//!
//! This crate is `no_std` + `alloc`.

#![no_std]

extern crate alloc;

mod registry;
mod shared;

use alloc::string::String;
use core::fmt;

pub use registry::{Registration, Threshold, ThresholdRegistry};
pub use shared::SharedThresholds;

/// Error returned when a threshold is rejected by [`ThresholdRegistry::add_threshold`].
#[derive(Clone, Debug, PartialEq)]
pub enum ThresholdError {
    /// The threshold id was empty.
    EmptyId,
    /// The threshold value was NaN or infinite.
    NonFinite {
        /// Id of the rejected threshold.
        id: String,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ThresholdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => f.write_str("threshold id is empty"),
            Self::NonFinite { id, value } => {
                write!(f, "threshold `{id}` has non-finite value {value}")
            }
        }
    }
}

impl core::error::Error for ThresholdError {}
