// Copyright 2025 the Scrollstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll windows derived from measured geometry.

use kurbo::{Rect, Size};

use scrollstory_range::Progress;

/// Snapshot of an element's rectangle in scroll coordinates.
///
/// `top` is the distance in pixels from the top of the scrollable content, not
/// from the top of the viewport. Supplied by an external layout measurement and
/// replaced wholesale whenever layout changes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MeasuredRect {
    rect: Rect,
}

impl MeasuredRect {
    /// Creates a rectangle at horizontal offset `0` with the given top and size.
    #[must_use]
    pub fn new(top: f64, width: f64, height: f64) -> Self {
        Self {
            rect: Rect::new(0.0, top, width, top + height),
        }
    }

    /// Wraps a Kurbo rectangle expressed in scroll coordinates.
    ///
    /// Returns `None` if any coordinate is not finite, which is how an element
    /// that has not been laid out yet is reported by some measurement sources.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Option<Self> {
        let finite = [rect.x0, rect.y0, rect.x1, rect.y1]
            .iter()
            .all(|v| v.is_finite());
        finite.then_some(Self { rect })
    }

    /// Distance from the top of the scrollable content.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.rect.y0
    }

    /// Offset of the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.rect.y1
    }

    /// Height of the element.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    /// Width of the element.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// Size of the element.
    #[must_use]
    pub fn size(&self) -> Size {
        self.rect.size()
    }

    /// The underlying Kurbo rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

/// An affine function of a measured rectangle and the viewport height.
///
/// Resolves to `rect_top * rect.top + rect_height * rect.height +
/// viewport_height * viewport + offset`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Anchor {
    /// Coefficient applied to the rectangle's top.
    pub rect_top: f64,
    /// Coefficient applied to the rectangle's height.
    pub rect_height: f64,
    /// Coefficient applied to the viewport height.
    pub viewport_height: f64,
    /// Constant offset in pixels.
    pub offset: f64,
}

impl Anchor {
    /// The rectangle's top edge.
    pub const TOP: Self = Self {
        rect_top: 1.0,
        rect_height: 0.0,
        viewport_height: 0.0,
        offset: 0.0,
    };

    /// A fixed scroll offset, independent of geometry.
    #[must_use]
    pub const fn fixed(offset: f64) -> Self {
        Self {
            rect_top: 0.0,
            rect_height: 0.0,
            viewport_height: 0.0,
            offset,
        }
    }

    /// Returns this anchor with the rectangle-height coefficient set to `k`.
    #[must_use]
    pub const fn height(mut self, k: f64) -> Self {
        self.rect_height = k;
        self
    }

    /// Returns this anchor with the viewport-height coefficient set to `k`.
    #[must_use]
    pub const fn viewport(mut self, k: f64) -> Self {
        self.viewport_height = k;
        self
    }

    /// Returns this anchor with the constant offset set to `px`.
    #[must_use]
    pub const fn offset(mut self, px: f64) -> Self {
        self.offset = px;
        self
    }

    /// Resolves the anchor to a scroll offset.
    #[must_use]
    pub fn resolve(&self, rect: &MeasuredRect, viewport_height: f64) -> f64 {
        self.rect_top * rect.top()
            + self.rect_height * rect.height()
            + self.viewport_height * viewport_height
            + self.offset
    }
}

/// Start and end anchors of a [`ScrollWindow`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WindowAnchors {
    /// Where progress is `0`.
    pub start: Anchor,
    /// Where progress is `1`.
    pub end: Anchor,
}

impl WindowAnchors {
    /// Creates a pair of anchors.
    #[must_use]
    pub const fn new(start: Anchor, end: Anchor) -> Self {
        Self { start, end }
    }
}

/// The scroll offsets between which a section animates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollWindow {
    /// Scroll offset at which progress starts leaving `0`.
    pub start: f64,
    /// Scroll offset at which progress reaches `1`.
    pub end: f64,
}

impl ScrollWindow {
    /// Creates a window from explicit offsets.
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Resolves `anchors` against a measured rectangle and viewport height.
    #[must_use]
    pub fn from_rect(rect: MeasuredRect, viewport_height: f64, anchors: WindowAnchors) -> Self {
        Self {
            start: anchors.start.resolve(&rect, viewport_height),
            end: anchors.end.resolve(&rect, viewport_height),
        }
    }

    /// Returns `clamp(0, map_range(start, end, scroll, 0, 1), 1)`.
    ///
    /// A window whose ends coincide never leaves `0`.
    #[must_use]
    pub fn progress(&self, scroll: f64) -> Progress {
        Progress::from_scroll(self.start, self.end, scroll)
    }

    /// Returns `true` if `scroll` lies between the two ends (inclusive).
    #[must_use]
    pub fn contains(&self, scroll: f64) -> bool {
        let (lo, hi) = if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };
        lo <= scroll && scroll <= hi
    }

    /// Distance between the ends.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measured_rect_accessors() {
        let r = MeasuredRect::new(1500.0, 1280.0, 900.0);
        assert_eq!(r.top(), 1500.0);
        assert_eq!(r.bottom(), 2400.0);
        assert_eq!(r.height(), 900.0);
        assert_eq!(r.width(), 1280.0);
        assert_eq!(r.size(), Size::new(1280.0, 900.0));
    }

    #[test]
    fn from_rect_rejects_unmeasured_geometry() {
        assert!(MeasuredRect::from_rect(Rect::new(0.0, f64::NAN, 10.0, 10.0)).is_none());
        assert!(MeasuredRect::from_rect(Rect::new(0.0, 0.0, 10.0, 10.0)).is_some());
    }

    #[test]
    fn anchors_resolve_affinely() {
        let rect = MeasuredRect::new(1000.0, 800.0, 2000.0);
        let vh = 600.0;

        assert_eq!(Anchor::TOP.resolve(&rect, vh), 1000.0);
        assert_eq!(Anchor::TOP.viewport(0.5).resolve(&rect, vh), 1300.0);
        assert_eq!(
            Anchor::TOP.height(1.0).viewport(-1.0).resolve(&rect, vh),
            2400.0
        );
        assert_eq!(Anchor::TOP.viewport(-2.0).resolve(&rect, vh), -200.0);
        assert_eq!(Anchor::fixed(42.0).resolve(&rect, vh), 42.0);
        assert_eq!(Anchor::TOP.offset(-10.0).resolve(&rect, vh), 990.0);
    }

    #[test]
    fn window_progress_clamps() {
        let w = ScrollWindow::new(1000.0, 2000.0);
        assert_eq!(w.progress(500.0), Progress::ZERO);
        assert_eq!(w.progress(1250.0).get(), 0.25);
        assert_eq!(w.progress(9000.0), Progress::ONE);
        assert!(w.contains(1000.0) && w.contains(2000.0) && !w.contains(2000.5));
        assert_eq!(w.length(), 1000.0);
    }

    #[test]
    fn collapsed_window_never_advances() {
        let rect = MeasuredRect::new(1200.0, 1280.0, 800.0);
        let anchors = WindowAnchors::new(Anchor::TOP, Anchor::TOP.height(1.0).viewport(-1.0));
        let w = ScrollWindow::from_rect(rect, 800.0, anchors);
        assert_eq!(w, ScrollWindow::new(1200.0, 1200.0));
        assert_eq!(w.length(), 0.0);

        for scroll in [0.0, 1199.0, 1200.0, 1201.0, 50_000.0] {
            assert_eq!(w.progress(scroll), Progress::ZERO, "scroll {scroll}");
        }
        assert!(w.contains(1200.0) && !w.contains(1200.5));
    }
}
