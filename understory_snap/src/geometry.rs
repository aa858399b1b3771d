// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport geometry: the probe trait the snapping components read, and a stacked layout that implements it.
//!
//! ## Coordinates
//!
//! All rectangles handed out by a [`ViewportProbe`] are in viewport space: `y = 0` is the top edge of the
//! viewport and `y` grows downward, matching `getBoundingClientRect` on the web.
//! The scroll offset is never read directly; it is only visible through the section edges.
//!
//! Edges are re-read on every query and never cached across refreshes.

use alloc::vec::Vec;
use kurbo::{Rect, Size, Vec2};

use crate::jump::{ScrollHint, ScrollTo};

/// Read-only view of the sections and the viewport.
///
/// Implement this over your platform's layout queries (for example bounding client rects of the
/// section elements and `innerHeight`).
pub trait ViewportProbe {
    /// Number of sections in the run. Fixed for the lifetime of a region.
    fn section_count(&self) -> usize;

    /// Current bounding box of section `index` in viewport space.
    ///
    /// Callers only pass `index < section_count()`.
    fn section_rect(&self, index: usize) -> Rect;

    /// Current viewport height.
    fn viewport_height(&self) -> f64;
}

impl<P: ViewportProbe + ?Sized> ViewportProbe for &P {
    #[inline]
    fn section_count(&self) -> usize {
        (**self).section_count()
    }

    #[inline]
    fn section_rect(&self, index: usize) -> Rect {
        (**self).section_rect(index)
    }

    #[inline]
    fn viewport_height(&self) -> f64 {
        (**self).viewport_height()
    }
}

/// The horizontal midline of a viewport of the given height.
#[inline]
pub fn midline(viewport_height: f64) -> f64 {
    viewport_height / 2.0
}

/// Fraction of `rect`'s height that lies inside `[0, viewport_height]`.
///
/// Returns `0.0` for rectangles without height.
pub fn visible_fraction(rect: Rect, viewport_height: f64) -> f64 {
    let height = rect.height();
    if height.is_nan() || height <= 0.0 {
        return 0.0;
    }
    let viewport = Rect::new(rect.x0, 0.0, rect.x1, viewport_height);
    let visible = rect.intersect(viewport).height();
    (visible / height).clamp(0.0, 1.0)
}

/// A vertical run of sections laid out in document space with a scroll offset.
///
/// This is the probe to use when the host already knows where its sections sit in the document,
/// and it is what the tests and demos drive. It also implements [`ScrollTo`] by jumping straight to
/// the start-aligned offset of the target, without animation.
///
/// ```
/// use understory_snap::geometry::{StackedLayout, ViewportProbe};
///
/// let mut layout = StackedLayout::stacked(3, 800.0, 800.0);
/// layout.set_scroll_offset(200.0);
/// assert_eq!(layout.section_rect(0).y0, -200.0);
/// assert_eq!(layout.section_rect(2).y1, 2200.0);
/// ```
#[derive(Clone, Debug)]
pub struct StackedLayout {
    sections: Vec<Rect>,
    viewport: Size,
    content_height: f64,
    scroll_offset: f64,
}

impl StackedLayout {
    /// Build from document-space section rectangles and a viewport size.
    ///
    /// The content ends at the bottom-most section; the document is at least as tall as the viewport.
    pub fn new(viewport: Size, sections: Vec<Rect>) -> Self {
        let bottom = sections.iter().fold(0.0_f64, |acc, r| acc.max(r.y1));
        Self {
            sections,
            viewport,
            content_height: bottom,
            scroll_offset: 0.0,
        }
    }

    /// `count` contiguous sections of `section_height`, starting at document offset 0.
    ///
    /// Sections span the full viewport width, which is set equal to the viewport height.
    pub fn stacked(count: usize, section_height: f64, viewport_height: f64) -> Self {
        let width = viewport_height;
        let sections = (0..count)
            .map(|i| {
                let y = i as f64 * section_height;
                Rect::new(0.0, y, width, y + section_height)
            })
            .collect();
        Self::new(Size::new(width, viewport_height), sections)
    }

    /// Insert `height` of unrelated content above the run.
    pub fn with_leading(mut self, height: f64) -> Self {
        let shift = Vec2::new(0.0, height);
        self.sections = self.sections.iter().map(|r| *r + shift).collect();
        self.content_height += height;
        self
    }

    /// Append `height` of unrelated content below the run.
    pub fn with_trailing(mut self, height: f64) -> Self {
        self.content_height += height;
        self
    }

    /// Current scroll offset (distance of the viewport top from the document top).
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport.height).max(0.0)
    }

    /// Total document height: the content, or the viewport if that is taller.
    pub fn document_height(&self) -> f64 {
        self.content_height.max(self.viewport.height)
    }

    /// Viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Scroll to `offset`, clamped to the reachable range.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset.clamp(0.0, self.max_scroll());
    }

    /// Scroll by `delta` (positive is down), clamped to the reachable range.
    pub fn scroll_by(&mut self, delta: f64) {
        self.set_scroll_offset(self.scroll_offset + delta);
    }

    /// Resize the viewport, keeping the scroll offset inside the reachable range.
    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.set_scroll_offset(self.scroll_offset);
    }

    /// The offset that aligns the top of section `index` with the top of the viewport.
    ///
    /// Clamped to the reachable range, as a start-aligned scroll-into-view would be.
    /// Returns `None` for an unknown section.
    pub fn scroll_offset_for(&self, index: usize) -> Option<f64> {
        let r = self.sections.get(index)?;
        Some(r.y0.clamp(0.0, self.max_scroll()))
    }
}

impl ViewportProbe for StackedLayout {
    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn section_rect(&self, index: usize) -> Rect {
        self.sections[index] - Vec2::new(0.0, self.scroll_offset)
    }

    fn viewport_height(&self) -> f64 {
        self.viewport.height
    }
}

impl ScrollTo for StackedLayout {
    fn scroll_to(&mut self, index: usize, _hint: ScrollHint) {
        if let Some(offset) = self.scroll_offset_for(index) {
            self.scroll_offset = offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use core::time::Duration;

    use crate::jump::Align;

    #[test]
    fn stacked_layout_reports_viewport_space_edges() {
        let mut layout = StackedLayout::stacked(3, 800.0, 800.0);
        assert_eq!(layout.section_count(), 3);
        assert_eq!(layout.document_height(), 2400.0);
        assert_eq!(layout.max_scroll(), 1600.0);

        assert_eq!(layout.section_rect(0), Rect::new(0.0, 0.0, 800.0, 800.0));
        layout.set_scroll_offset(1000.0);
        assert_eq!(layout.section_rect(1).y0, -200.0);
        assert_eq!(layout.section_rect(2).y1, 1400.0);
    }

    #[test]
    fn scroll_offset_is_clamped() {
        let mut layout = StackedLayout::stacked(2, 500.0, 500.0);
        layout.set_scroll_offset(-40.0);
        assert_eq!(layout.scroll_offset(), 0.0);
        layout.scroll_by(10_000.0);
        assert_eq!(layout.scroll_offset(), 500.0);
    }

    #[test]
    fn leading_and_trailing_content_extend_the_document() {
        let layout = StackedLayout::stacked(2, 400.0, 400.0)
            .with_leading(300.0)
            .with_trailing(200.0);
        assert_eq!(layout.document_height(), 1300.0);
        assert_eq!(layout.section_rect(0).y0, 300.0);
        assert_eq!(layout.scroll_offset_for(1), Some(700.0));
        assert_eq!(layout.scroll_offset_for(2), None);
    }

    #[test]
    fn scroll_to_aligns_section_start() {
        let mut layout = StackedLayout::stacked(3, 800.0, 800.0);
        let hint = ScrollHint {
            align: Align::Start,
            duration: Duration::from_millis(800),
        };
        layout.scroll_to(2, hint);
        assert_eq!(layout.scroll_offset(), 1600.0);
        assert_eq!(layout.section_rect(2).y0, 0.0);
        // Unknown sections leave the offset alone.
        layout.scroll_to(7, hint);
        assert_eq!(layout.scroll_offset(), 1600.0);
    }

    #[test]
    fn resize_keeps_offset_reachable() {
        let mut layout = StackedLayout::new(
            Size::new(800.0, 600.0),
            vec![
                Rect::new(0.0, 0.0, 800.0, 600.0),
                Rect::new(0.0, 600.0, 800.0, 1200.0),
            ],
        );
        layout.set_scroll_offset(600.0);
        layout.resize(Size::new(800.0, 1000.0));
        assert_eq!(layout.scroll_offset(), 200.0);
        assert_eq!(layout.viewport_height(), 1000.0);
    }

    #[test]
    fn shrinking_viewport_restores_content_height() {
        let mut layout = StackedLayout::stacked(2, 600.0, 600.0);
        layout.resize(Size::new(600.0, 1500.0));
        assert_eq!(layout.document_height(), 1500.0);
        assert_eq!(layout.max_scroll(), 0.0);

        layout.resize(Size::new(600.0, 600.0));
        assert_eq!(layout.document_height(), 1200.0);
        assert_eq!(layout.max_scroll(), 600.0);

        layout.set_scroll_offset(900.0);
        assert_eq!(layout.scroll_offset(), 600.0);
        assert_eq!(layout.section_rect(1).y1, 600.0);
    }

    #[test]
    fn visible_fraction_of_partially_scrolled_rect() {
        assert_eq!(
            visible_fraction(Rect::new(0.0, -200.0, 10.0, 600.0), 800.0),
            0.75
        );
        assert_eq!(
            visible_fraction(Rect::new(0.0, 0.0, 10.0, 800.0), 800.0),
            1.0
        );
        assert_eq!(
            visible_fraction(Rect::new(0.0, 900.0, 10.0, 1700.0), 800.0),
            0.0
        );
        assert_eq!(
            visible_fraction(Rect::new(0.0, 10.0, 10.0, 10.0), 800.0),
            0.0
        );
    }

    #[test]
    fn midline_is_half_height() {
        assert_eq!(midline(800.0), 400.0);
    }
}
