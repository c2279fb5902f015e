// Copyright 2025 the Scrollstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use core::cell::RefCell;

use crate::{Registration, Threshold, ThresholdError, ThresholdRegistry};

/// A cheaply clonable handle to one [`ThresholdRegistry`] shared by several sections.
///
/// All clones observe the same entries. Writes from different sections to the
/// same id follow last-write-wins; no ordering between sections is implied.
///
/// The handle is single-threaded (`!Send`), matching the event model of the
/// page it serves.
///
/// ```rust
/// use scrollstory_threshold::{SharedThresholds, Threshold};
///
/// let page = SharedThresholds::new();
/// let section = page.clone();
///
/// section.add_threshold(Threshold::new("features", 4200.0)).unwrap();
/// assert_eq!(page.get("features"), Some(4200.0));
///
/// page.reset();
/// assert!(section.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedThresholds {
    inner: Rc<RefCell<ThresholdRegistry>>,
}

impl SharedThresholds {
    /// Creates a handle to a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`ThresholdRegistry::add_threshold`].
    ///
    /// # Errors
    ///
    /// Same as [`ThresholdRegistry::add_threshold`].
    pub fn add_threshold(&self, threshold: Threshold) -> Result<Registration, ThresholdError> {
        self.inner.borrow_mut().add_threshold(threshold)
    }

    /// See [`ThresholdRegistry::get`].
    #[must_use]
    pub fn get(&self, id: &str) -> Option<f64> {
        self.inner.borrow().get(id)
    }

    /// See [`ThresholdRegistry::len`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// See [`ThresholdRegistry::is_empty`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// See [`ThresholdRegistry::generation`].
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.inner.borrow().generation()
    }

    /// See [`ThresholdRegistry::reset`].
    pub fn reset(&self) {
        self.inner.borrow_mut().reset();
    }

    /// Runs `f` with read access to the underlying registry.
    ///
    /// `f` must not write through another clone of this handle.
    pub fn with<R>(&self, f: impl FnOnce(&ThresholdRegistry) -> R) -> R {
        f(&self.inner.borrow())
    }

    /// Returns `true` if both handles refer to the same registry.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl From<ThresholdRegistry> for SharedThresholds {
    fn from(registry: ThresholdRegistry) -> Self {
        Self {
            inner: Rc::new(RefCell::new(registry)),
        }
    }
}
