// Copyright 2025 the Scrollstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use scrollstory_scroll::DiscreteState;

/// Scroll offset past which the hero's scroll hint is hidden.
pub const SCROLL_HINT_OFFSET: f64 = 10.0;

/// The hero section: tracks whether the page has been scrolled at all.
#[derive(Clone, Debug)]
pub struct HeroSection {
    scrolled: DiscreteState<bool>,
}

impl Default for HeroSection {
    fn default() -> Self {
        Self {
            scrolled: DiscreteState::with_value(false),
        }
    }
}

impl HeroSection {
    /// Creates a hero section at the top of the page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates from a scroll offset. Returns `true` if [`has_scrolled`](Self::has_scrolled) changed.
    pub fn on_scroll(&mut self, scroll: f64) -> bool {
        let changed = self.scrolled.set(scroll > SCROLL_HINT_OFFSET);
        if changed {
            tracing::trace!(scroll, scrolled = self.has_scrolled(), "hero scroll hint toggled");
        }
        changed
    }

    /// Returns `true` once the page is scrolled past [`SCROLL_HINT_OFFSET`].
    #[must_use]
    pub fn has_scrolled(&self) -> bool {
        self.scrolled.get().copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_hides_past_offset_and_returns() {
        let mut hero = HeroSection::new();
        assert!(!hero.on_scroll(0.0));
        assert!(!hero.on_scroll(10.0));
        assert!(!hero.has_scrolled());

        assert!(hero.on_scroll(10.5));
        assert!(hero.has_scrolled());
        assert!(!hero.on_scroll(400.0));

        assert!(hero.on_scroll(3.0));
        assert!(!hero.has_scrolled());
    }
}
