//! Vertical scroll container.
//!
//! Owns the viewport offset and the math for the "bring this row fully into
//! view" command; rendering draws the visible window of caller-supplied rows
//! and keeps the integrated scroll bar in step with every offset change.

use std::ops::Range;

use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::Paragraph,
};

use onyx_core::ScrollBounds;

use super::UiContext;
use super::scroll_bar::{ScrollBar, ScrollButton};

#[derive(Default)]
pub struct Scroller {
    offset: u32,
    viewport: u32,
    content: u32,
    bar: ScrollBar,
    bar_area: Option<Rect>,
}

impl Scroller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn bounds(&self) -> ScrollBounds {
        ScrollBounds::new(self.viewport, self.content, self.offset)
    }

    /// Record the viewport and content extent for this cycle. Must run
    /// before any scroll command so clamping sees real geometry.
    pub fn set_extent(&mut self, viewport: u32, content: u32) {
        self.viewport = viewport;
        self.content = content;
        self.offset = self.offset.min(self.bounds().max_position());
    }

    pub fn scroll_to(&mut self, position: u32) {
        self.offset = position.min(self.bounds().max_position());
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = self.offset.saturating_add_signed(delta);
        self.scroll_to(target);
    }

    /// Scroll the minimal amount that brings `row` fully inside the
    /// viewport; already-visible rows leave the offset untouched.
    pub fn scroll_into_view(&mut self, row: u32) {
        if self.viewport == 0 {
            return;
        }
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + self.viewport {
            self.offset = row + 1 - self.viewport;
        }
        self.offset = self.offset.min(self.bounds().max_position());
    }

    /// Content rows visible at the current offset.
    pub fn window(&self) -> Range<usize> {
        let start = self.offset.min(self.content) as usize;
        let end = (self.offset + self.viewport).min(self.content) as usize;
        start..end
    }

    /// Forward a scroll-bar button press from pointer interaction.
    pub fn press_button(&mut self, button: ScrollButton) {
        match button {
            ScrollButton::Up => self.scroll_by(-1),
            ScrollButton::Down => self.scroll_by(1),
        }
    }

    /// Which scroll-bar button a click landed on, if the bar was rendered.
    pub fn hit_button(&self, x: u16, y: u16) -> Option<ScrollButton> {
        let area = self.bar_area?;
        self.bar.hit(area, x, y)
    }

    /// Draw the visible slice of `rows`. The scroll bar claims the right
    /// column when the content overflows.
    pub fn render(&mut self, frame: &mut Frame<'_>, area: Rect, rows: Vec<Line<'_>>, ctx: &mut UiContext<'_>) {
        self.set_extent(u32::from(area.height), rows.len() as u32);
        let bounds = self.bounds();

        let (list_area, bar_area) = if bounds.scrollable() && area.width > 1 {
            (
                Rect { width: area.width - 1, ..area },
                Some(Rect {
                    x: area.x + area.width - 1,
                    width: 1,
                    ..area
                }),
            )
        } else {
            (area, None)
        };
        self.bar_area = bar_area;

        let window = self.window();
        let visible: Vec<Line<'_>> = rows
            .into_iter()
            .skip(window.start)
            .take(window.len())
            .collect();
        frame.render_widget(Paragraph::new(visible), list_area);

        if let Some(bar_area) = bar_area {
            // Thumb and buttons refresh together, never separately.
            self.bar.update(&bounds);
            self.bar.render(frame, bar_area, ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroller(viewport: u32, content: u32, offset: u32) -> Scroller {
        let mut s = Scroller::new();
        s.set_extent(viewport, content);
        s.scroll_to(offset);
        s
    }

    #[test]
    fn scroll_to_clamps_to_content() {
        let mut s = scroller(5, 20, 0);
        s.scroll_to(99);
        assert_eq!(s.offset(), 15);
    }

    #[test]
    fn scroll_by_saturates_at_zero() {
        let mut s = scroller(5, 20, 2);
        s.scroll_by(-10);
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn into_view_above_scrolls_up_to_row() {
        let mut s = scroller(5, 20, 10);
        s.scroll_into_view(3);
        assert_eq!(s.offset(), 3);
    }

    #[test]
    fn into_view_below_reveals_row_at_bottom() {
        let mut s = scroller(5, 20, 0);
        s.scroll_into_view(9);
        assert_eq!(s.offset(), 5);
        assert!(s.window().contains(&9));
    }

    #[test]
    fn into_view_visible_row_is_noop() {
        let mut s = scroller(5, 20, 4);
        s.scroll_into_view(6);
        assert_eq!(s.offset(), 4);
    }

    #[test]
    fn shrinking_content_pulls_offset_back() {
        let mut s = scroller(5, 20, 15);
        s.set_extent(5, 8);
        assert_eq!(s.offset(), 3);
    }

    #[test]
    fn window_covers_viewport() {
        let s = scroller(5, 20, 7);
        assert_eq!(s.window(), 7..12);

        let short = scroller(5, 3, 0);
        assert_eq!(short.window(), 0..3);
    }
}
