// Copyright 2025 the Scrollstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Visible fraction at which the in-use section reveals itself.
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// One-way reveal driven by intersection observations.
///
/// ```rust
/// use scrollstory_home::InUseReveal;
///
/// let mut reveal = InUseReveal::new();
/// assert!(!reveal.observe(0.1));
/// assert!(reveal.observe(0.25));
/// assert!(!reveal.observe(0.0));
/// assert!(reveal.is_visible());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InUseReveal {
    threshold: f64,
    visible: bool,
}

impl Default for InUseReveal {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            visible: false,
        }
    }
}

impl InUseReveal {
    /// Creates a hidden reveal with [`REVEAL_THRESHOLD`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the visible fraction required to reveal.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Records an intersection ratio in `[0, 1]`.
    ///
    /// Returns `true` only on the observation that reveals the section. Once
    /// visible, the section stays visible.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.visible || !(ratio > 0.0 && ratio >= self.threshold) {
            return false;
        }
        self.visible = true;
        tracing::debug!(ratio, "in-use section revealed");
        true
    }

    /// Returns `true` once revealed.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latches_at_threshold() {
        let mut reveal = InUseReveal::new();
        assert!(!reveal.observe(0.19));
        assert!(!reveal.is_visible());
        assert!(reveal.observe(0.2));
        assert!(!reveal.observe(1.0));
        assert!(!reveal.observe(0.0));
        assert!(reveal.is_visible());
    }

    #[test]
    fn nan_and_zero_never_reveal() {
        let mut reveal = InUseReveal::new().with_threshold(0.0);
        assert!(!reveal.observe(f64::NAN));
        assert!(!reveal.observe(0.0));
        assert!(reveal.observe(0.01));
    }
}
