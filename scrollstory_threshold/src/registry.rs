// Copyright 2025 the Scrollstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Threshold registry.
//!
//! This module provides [`ThresholdRegistry`] for publishing named scroll
//! breakpoints and looking them up.

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::ThresholdError;

/// A named scroll breakpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct Threshold {
    /// Unique name of the milestone within one page.
    pub id: String,
    /// Scroll offset in pixels from the top of the scrollable content.
    pub value: f64,
}

impl Threshold {
    /// Creates a threshold.
    #[must_use]
    pub fn new(id: impl Into<String>, value: f64) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }
}

/// Outcome of an accepted [`ThresholdRegistry::add_threshold`] call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Registration {
    /// The id was not registered before.
    Inserted,
    /// The id existed and its value was replaced.
    Updated {
        /// The value before this write.
        previous: f64,
    },
    /// The id existed with exactly this value.
    Unchanged,
}

/// A registry of named scroll breakpoints for the lifetime of one page.
///
/// Entries are kept in first-registration order. Lookup by id is a hash map
/// access.
///
/// # Example
///
/// ```rust
/// use scrollstory_threshold::{Registration, Threshold, ThresholdRegistry};
///
/// let mut registry = ThresholdRegistry::new();
/// assert_eq!(
///     registry.add_threshold(Threshold::new("x", 10.0)),
///     Ok(Registration::Inserted)
/// );
/// assert_eq!(
///     registry.add_threshold(Threshold::new("x", 20.0)),
///     Ok(Registration::Updated { previous: 10.0 })
/// );
/// assert_eq!(registry.len(), 1);
/// assert_eq!(registry.get("x"), Some(20.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ThresholdRegistry {
    entries: Vec<Threshold>,
    by_id: HashMap<String, usize>,
    revision: u64,
    generation: u64,
}

impl ThresholdRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts a named breakpoint.
    ///
    /// The last write for an id wins. Writing the value an id already holds is
    /// reported as [`Registration::Unchanged`] and does not bump the revision.
    ///
    /// # Errors
    ///
    /// Returns [`ThresholdError::EmptyId`] for an empty id and
    /// [`ThresholdError::NonFinite`] for a NaN or infinite value. The registry
    /// is not modified in either case.
    pub fn add_threshold(&mut self, threshold: Threshold) -> Result<Registration, ThresholdError> {
        let Threshold { id, value } = threshold;
        if id.is_empty() {
            tracing::warn!(value, "rejecting scroll threshold with empty id");
            return Err(ThresholdError::EmptyId);
        }
        if !value.is_finite() {
            tracing::warn!(id = %id, value, "rejecting non-finite scroll threshold");
            return Err(ThresholdError::NonFinite { id, value });
        }

        if let Some(&index) = self.by_id.get(id.as_str()) {
            let entry = &mut self.entries[index];
            if entry.value == value {
                return Ok(Registration::Unchanged);
            }
            let previous = core::mem::replace(&mut entry.value, value);
            self.revision += 1;
            tracing::trace!(id = %entry.id, previous, value, "updated scroll threshold");
            return Ok(Registration::Updated { previous });
        }

        tracing::trace!(id = %id, value, "registered scroll threshold");
        self.by_id.insert(id.clone(), self.entries.len());
        self.entries.push(Threshold { id, value });
        self.revision += 1;
        Ok(Registration::Inserted)
    }

    /// Returns the value registered for `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<f64> {
        self.by_id.get(id).map(|&index| self.entries[index].value)
    }

    /// Returns `true` if `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Returns the number of registered thresholds.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no thresholds are registered.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates thresholds in first-registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Threshold> + '_ {
        self.entries.iter()
    }

    /// Returns `(id, value)` pairs sorted by ascending value.
    ///
    /// Thresholds with equal values keep their registration order.
    #[must_use]
    pub fn sorted_by_value(&self) -> Vec<(&str, f64)> {
        let mut sorted: Vec<(&str, f64)> = self
            .entries
            .iter()
            .map(|t| (t.id.as_str(), t.value))
            .collect();
        // Values are finite, so `total_cmp` agrees with numeric order.
        sorted.sort_by(|a, b| a.1.total_cmp(&b.1));
        sorted
    }

    /// Returns the id of the furthest milestone at or before `scroll`.
    ///
    /// Returns `None` if `scroll` is before every registered threshold.
    #[must_use]
    pub fn last_passed(&self, scroll: f64) -> Option<&str> {
        self.entries
            .iter()
            .filter(|t| t.value <= scroll)
            .fold(None::<&Threshold>, |best, t| match best {
                Some(b) if b.value > t.value => Some(b),
                _ => Some(t),
            })
            .map(|t| t.id.as_str())
    }

    /// Removes every threshold.
    ///
    /// Call this when the page is torn down. Bumps [`generation`](Self::generation).
    pub fn reset(&mut self) {
        tracing::debug!(
            count = self.entries.len(),
            generation = self.generation,
            "resetting scroll thresholds"
        );
        self.entries.clear();
        self.by_id.clear();
        self.generation += 1;
        self.revision += 1;
    }

    /// Number of accepted writes that changed the registry, plus resets.
    #[must_use]
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of times the registry has been reset.
    #[must_use]
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl<'a> IntoIterator for &'a ThresholdRegistry {
    type Item = &'a Threshold;
    type IntoIter = core::slice::Iter<'a, Threshold>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
