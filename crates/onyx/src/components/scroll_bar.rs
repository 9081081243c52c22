//! Vertical scroll bar with paging buttons.
//!
//! Thumb geometry and button enablement come from one
//! [`ScrollbarState::update`] call so they can never disagree for a frame.

use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::Paragraph,
};

use onyx_core::{ScrollBounds, ScrollbarState};

use super::UiContext;

const UP_ARROW: &str = "▲";
const DOWN_ARROW: &str = "▼";
const THUMB: &str = "█";
const TRACK: &str = "│";

/// Paging buttons a pointer click can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollButton {
    Up,
    Down,
}

/// One-column scroll bar: up button, track with thumb, down button.
#[derive(Debug, Default)]
pub struct ScrollBar {
    state: ScrollbarState,
}

impl ScrollBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh thumb and buttons from the current scroll bounds, atomically.
    pub fn update(&mut self, bounds: &ScrollBounds) {
        self.state.update(bounds);
    }

    pub fn state(&self) -> &ScrollbarState {
        &self.state
    }

    /// Which button, if any, sits at the clicked position.
    pub fn hit(&self, area: Rect, x: u16, y: u16) -> Option<ScrollButton> {
        if area.height < 2 || x < area.x || x >= area.x + area.width {
            return None;
        }
        if y == area.y {
            Some(ScrollButton::Up)
        } else if y == area.y + area.height - 1 {
            Some(ScrollButton::Down)
        } else {
            None
        }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, ctx: &mut UiContext<'_>) {
        if area.height < 3 || area.width == 0 {
            return;
        }

        let buttons = self.state.buttons();
        let thumb = self.state.thumb();
        let track_rows = area.height - 2;

        // Map ratios onto the character track, keeping at least one thumb
        // cell and pinning the thumb to the ends exactly at the bounds.
        let thumb_len = ((thumb.size_ratio * track_rows as f32).round() as u16)
            .clamp(1, track_rows);
        let free = track_rows - thumb_len;
        let thumb_start = if free == 0 {
            0
        } else {
            let span = 1.0 - thumb.size_ratio;
            let fraction = if span <= f32::EPSILON {
                0.0
            } else {
                thumb.offset_ratio / span
            };
            (fraction * free as f32).round() as u16
        };

        let mut lines = Vec::with_capacity(area.height as usize);
        let button_style = |enabled: bool| {
            if enabled {
                ctx.skin.accent
            } else {
                ctx.skin.disabled
            }
        };
        lines.push(Line::styled(UP_ARROW, button_style(buttons.up_enabled)));
        for row in 0..track_rows {
            if row >= thumb_start && row < thumb_start + thumb_len {
                lines.push(Line::styled(THUMB, ctx.skin.accent));
            } else {
                lines.push(Line::styled(TRACK, ctx.skin.border));
            }
        }
        lines.push(Line::styled(DOWN_ARROW, button_style(buttons.down_enabled)));

        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_maps_edges_to_buttons() {
        let bar = ScrollBar::new();
        let area = Rect::new(10, 2, 1, 8);

        assert_eq!(bar.hit(area, 10, 2), Some(ScrollButton::Up));
        assert_eq!(bar.hit(area, 10, 9), Some(ScrollButton::Down));
        assert_eq!(bar.hit(area, 10, 5), None);
        assert_eq!(bar.hit(area, 11, 2), None);
    }

    #[test]
    fn update_is_atomic_across_views() {
        let mut bar = ScrollBar::new();
        bar.update(&ScrollBounds::new(4, 20, 16));

        let buttons = bar.state().buttons();
        let thumb = bar.state().thumb();
        assert!(buttons.up_enabled);
        assert!(!buttons.down_enabled);
        assert!((thumb.offset_ratio + thumb.size_ratio - 1.0).abs() < 1e-6);
    }
}
