// Copyright 2025 the Scrollstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Applying progress to the visual tree.
//!
//! A section can apply a derived value in two ways:
//!
//! - **Discrete state** ([`DiscreteState`]): for values that gate a re-render
//!   (a step index, a theme flag). Only changes are reported, so the renderer
//!   sees one update per transition rather than one per tick.
//! - **Imperative variables** ([`AnimationHandle`]): for values that change
//!   every tick (CSS custom properties such as `--progress`). Writes go
//!   straight to the element and bypass any render pass.
//!
//! The progress computation does not depend on which branch is used; it only
//! needs something implementing [`AnimationHandle`].

use alloc::borrow::Cow;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;
use core::fmt;

use hashbrown::HashMap;
use scrollstory_range::Progress;

/// A value written to a style property.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    /// A unitless number, such as a progress value.
    Number(f64),
    /// A CSS keyword or literal, such as `currentColor`.
    Keyword(Cow<'static, str>),
}

impl StyleValue {
    /// Returns the number, if this is [`StyleValue::Number`].
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Keyword(_) => None,
        }
    }

    /// Returns the keyword, if this is [`StyleValue::Keyword`].
    #[must_use]
    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Keyword(k) => Some(&**k),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Progress> for StyleValue {
    fn from(value: Progress) -> Self {
        Self::Number(value.get())
    }
}

impl From<&'static str> for StyleValue {
    fn from(value: &'static str) -> Self {
        Self::Keyword(Cow::Borrowed(value))
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Keyword(Cow::Owned(value))
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => fmt::Display::fmt(n, f),
            Self::Keyword(k) => f.write_str(k),
        }
    }
}

/// Imperative access to an element's style properties.
///
/// Implemented by whatever owns the visual tree: a DOM binding, a retained
/// scene, or [`StyleVariables`] for headless use.
pub trait AnimationHandle {
    /// Sets a style property or CSS custom property (for example `--progress`).
    fn set_variable(&mut self, name: &str, value: StyleValue);

    /// Removes a style property so that the stylesheet value applies again.
    fn remove_variable(&mut self, name: &str);
}

/// A handle shared with the host, which keeps reading the element's style.
impl<H: AnimationHandle + ?Sized> AnimationHandle for Rc<RefCell<H>> {
    fn set_variable(&mut self, name: &str, value: StyleValue) {
        self.borrow_mut().set_variable(name, value);
    }

    fn remove_variable(&mut self, name: &str) {
        self.borrow_mut().remove_variable(name);
    }
}

/// In-memory style properties of one element.
///
/// ```rust
/// use scrollstory_scroll::{AnimationHandle, StyleVariables};
///
/// let mut style = StyleVariables::new();
/// style.set_variable("--progress1", 0.25.into());
/// style.set_variable("background-color", "currentColor".into());
/// assert_eq!(style.number("--progress1"), Some(0.25));
/// assert_eq!(style.keyword("background-color"), Some("currentColor"));
///
/// style.remove_variable("background-color");
/// assert!(!style.contains("background-color"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StyleVariables {
    values: HashMap<String, StyleValue>,
    writes: u64,
}

impl StyleVariables {
    /// Creates an empty property set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.values.get(name)
    }

    /// Returns a numeric property.
    #[must_use]
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(StyleValue::as_number)
    }

    /// Returns a keyword property.
    #[must_use]
    pub fn keyword(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(StyleValue::as_keyword)
    }

    /// Returns `true` if the property is set.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of properties currently set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of set/remove calls that changed something.
    #[must_use]
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl AnimationHandle for StyleVariables {
    fn set_variable(&mut self, name: &str, value: StyleValue) {
        if self.values.get(name) == Some(&value) {
            return;
        }
        self.values.insert(name.into(), value);
        self.writes += 1;
    }

    fn remove_variable(&mut self, name: &str) {
        if self.values.remove(name).is_some() {
            self.writes += 1;
        }
    }
}

/// The last value of a piece of render state, with change detection.
///
/// ```rust
/// use scrollstory_scroll::DiscreteState;
///
/// let mut step = DiscreteState::new();
/// assert!(step.set(3_usize));
/// assert!(!step.set(3));
/// assert!(step.set(4));
/// assert_eq!(step.get(), Some(&4));
/// assert_eq!(step.changes(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct DiscreteState<T> {
    value: Option<T>,
    changes: u64,
}

impl<T> Default for DiscreteState<T> {
    fn default() -> Self {
        Self {
            value: None,
            changes: 0,
        }
    }
}

impl<T: PartialEq> DiscreteState<T> {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state holding `value`.
    #[must_use]
    pub fn with_value(value: T) -> Self {
        Self {
            value: Some(value),
            changes: 0,
        }
    }

    /// Stores `value`, returning `true` if it differs from the previous one.
    ///
    /// The first value stored in an empty state counts as a change.
    pub fn set(&mut self, value: T) -> bool {
        if self.value.as_ref() == Some(&value) {
            return false;
        }
        self.value = Some(value);
        self.changes += 1;
        true
    }

    /// Returns the current value.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Number of times [`set`](Self::set) reported a change.
    #[must_use]
    pub fn changes(&self) -> u64 {
        self.changes
    }
}
