// SPDX-License-Identifier: MPL-2.0
//! Pager sub-component: keeps the current page index and the scroll offset
//! of the vertical reel in sync.
//!
//! Pages are exactly one viewport tall, so the page covering the majority of
//! the viewport (the ≥50% visibility rule) is `round(offset / height)`. When
//! that page differs from the tracked one the pager reports a settle; the
//! orchestrator then snaps the scrollable to the exact page boundary.

use iced::widget::scrollable::RelativeOffset;

/// Pager sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Height of one page (the scrollable viewport), in logical pixels.
    viewport_height: f32,
    /// Latest absolute vertical scroll offset.
    offset_y: f32,
    /// Page currently considered visible.
    current_page: usize,
    /// Number of pages in the reel.
    page_count: usize,
}

/// Messages for the pager sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// The scrollable reported new geometry (scroll or resize).
    ViewportChanged { height: f32, offset_y: f32 },
    /// Jump straight to a page (keyboard, initial index, post-delete clamp).
    JumpTo(usize),
}

/// Effects produced by pager changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// A new page settled as current; the view should snap to its boundary.
    Settled { page: usize },
}

impl State {
    /// Creates a pager over `page_count` pages, positioned at `initial_page`
    /// (clamped).
    #[must_use]
    pub fn new(page_count: usize, initial_page: usize) -> Self {
        let current_page = if page_count == 0 {
            0
        } else {
            initial_page.min(page_count - 1)
        };
        Self {
            viewport_height: 0.0,
            offset_y: 0.0,
            current_page,
            page_count,
        }
    }

    /// Handle a pager message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::ViewportChanged { height, offset_y } => {
                self.viewport_height = height;
                self.offset_y = offset_y;

                if height <= f32::EPSILON || self.page_count == 0 {
                    return Effect::None;
                }

                let nearest = self.nearest_page();
                if nearest != self.current_page {
                    self.current_page = nearest;
                    Effect::Settled { page: nearest }
                } else {
                    Effect::None
                }
            }
            Message::JumpTo(page) => {
                if self.page_count == 0 {
                    return Effect::None;
                }
                let target = page.min(self.page_count - 1);
                self.current_page = target;
                Effect::Settled { page: target }
            }
        }
    }

    /// Updates the page count after a removal, clamping the current page.
    pub fn set_page_count(&mut self, page_count: usize) {
        self.page_count = page_count;
        if page_count == 0 {
            self.current_page = 0;
        } else {
            self.current_page = self.current_page.min(page_count - 1);
        }
    }

    /// The relative scroll offset that aligns the given page with the
    /// viewport. With uniform full-height pages the maximum scroll offset is
    /// `(count - 1)` pages, so page `i` sits at `i / (count - 1)`.
    #[must_use]
    pub fn relative_offset_for(&self, page: usize) -> RelativeOffset {
        let y = if self.page_count <= 1 {
            0.0
        } else {
            let last = (self.page_count - 1) as f32;
            (page.min(self.page_count - 1)) as f32 / last
        };
        RelativeOffset { x: 0.0, y }
    }

    /// Page covering the majority of the viewport at the current offset.
    fn nearest_page(&self) -> usize {
        let raw = (self.offset_y / self.viewport_height + 0.5).floor();
        let clamped = raw.max(0.0) as usize;
        clamped.min(self.page_count.saturating_sub(1))
    }

    /// Returns the page currently considered visible.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Checks if a page follows the current one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page + 1 < self.page_count
    }

    /// Checks if a page precedes the current one.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const PAGE: f32 = 800.0;

    fn scrolled(offset_y: f32) -> Message {
        Message::ViewportChanged {
            height: PAGE,
            offset_y,
        }
    }

    #[test]
    fn new_pager_clamps_initial_page() {
        let pager = State::new(3, 99);
        assert_eq!(pager.current_page(), 2);
    }

    #[test]
    fn offset_below_half_page_keeps_current_page() {
        let mut pager = State::new(5, 0);
        let effect = pager.handle(scrolled(PAGE * 0.49));
        assert_eq!(effect, Effect::None);
        assert_eq!(pager.current_page(), 0);
    }

    #[test]
    fn offset_past_half_page_settles_on_next_page() {
        let mut pager = State::new(5, 0);
        let effect = pager.handle(scrolled(PAGE * 0.51));
        assert_eq!(effect, Effect::Settled { page: 1 });
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn large_offset_settles_on_distant_page() {
        let mut pager = State::new(5, 0);
        let effect = pager.handle(scrolled(PAGE * 3.2));
        assert_eq!(effect, Effect::Settled { page: 3 });
    }

    #[test]
    fn offset_is_clamped_to_last_page() {
        let mut pager = State::new(3, 0);
        let effect = pager.handle(scrolled(PAGE * 10.0));
        assert_eq!(effect, Effect::Settled { page: 2 });
    }

    #[test]
    fn exact_boundary_after_snap_is_quiet() {
        let mut pager = State::new(5, 0);
        pager.handle(scrolled(PAGE * 0.6));
        // The follow-up scroll event from the snap lands exactly on the page.
        let effect = pager.handle(scrolled(PAGE));
        assert_eq!(effect, Effect::None);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn zero_height_viewport_is_ignored() {
        let mut pager = State::new(5, 0);
        let effect = pager.handle(Message::ViewportChanged {
            height: 0.0,
            offset_y: 1234.0,
        });
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn jump_settles_on_clamped_target() {
        let mut pager = State::new(4, 0);
        assert_eq!(pager.handle(Message::JumpTo(2)), Effect::Settled { page: 2 });
        assert_eq!(pager.handle(Message::JumpTo(99)), Effect::Settled { page: 3 });
    }

    #[test]
    fn relative_offset_spreads_pages_evenly() {
        let pager = State::new(5, 0);
        assert_abs_diff_eq!(pager.relative_offset_for(0).y, 0.0);
        assert_abs_diff_eq!(pager.relative_offset_for(2).y, 0.5);
        assert_abs_diff_eq!(pager.relative_offset_for(4).y, 1.0);
    }

    #[test]
    fn relative_offset_for_single_page_is_origin() {
        let pager = State::new(1, 0);
        assert_abs_diff_eq!(pager.relative_offset_for(0).y, 0.0);
    }

    #[test]
    fn set_page_count_clamps_current_page() {
        let mut pager = State::new(5, 4);
        pager.set_page_count(3);
        assert_eq!(pager.current_page(), 2);

        pager.set_page_count(0);
        assert_eq!(pager.current_page(), 0);
    }

    #[test]
    fn neighbor_queries_respect_bounds() {
        let mut pager = State::new(3, 0);
        assert!(pager.has_next());
        assert!(!pager.has_previous());

        pager.handle(Message::JumpTo(2));
        assert!(!pager.has_next());
        assert!(pager.has_previous());
    }
}
