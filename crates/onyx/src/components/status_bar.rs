use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Component, EventResult, UiContext};

/// Bottom status line: input mode, active skin, key hints.
pub struct StatusBar {
    hints: String,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            hints: String::new(),
        }
    }

    pub fn set_hints(&mut self, hints: impl Into<String>) {
        self.hints = hints.into();
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _ctx: &mut UiContext<'_>) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame<'_>, area: Rect, ctx: &mut UiContext<'_>) {
        let mode = if ctx.spotlight.pointer_mode() {
            "pointer"
        } else {
            "5-way"
        };

        let line = Line::from(vec![
            Span::styled(format!(" {mode} "), ctx.skin.accent),
            Span::styled(format!("· {} ", ctx.skin.name.label()), ctx.skin.item),
            Span::styled(format!("· {}", self.hints), ctx.skin.disabled),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
