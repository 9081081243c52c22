//! Toggle button.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::UiContext;

pub struct ToggleButton {
    label: String,
    on_label: String,
    off_label: String,
    on: bool,
}

impl ToggleButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_label: "On".to_string(),
            off_label: "Off".to_string(),
            on: false,
        }
    }

    /// Per-state captions shown next to the switch.
    pub fn labels(mut self, on_label: impl Into<String>, off_label: impl Into<String>) -> Self {
        self.on_label = on_label.into();
        self.off_label = off_label.into();
        self
    }

    pub fn with_state(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn toggle(&mut self) -> bool {
        self.on = !self.on;
        self.on
    }

    /// Returns `true` when the key flipped the switch.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle();
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, focused: bool, ctx: &mut UiContext<'_>) {
        let (knob, caption, style) = if self.on {
            ("[■]", self.on_label.as_str(), ctx.skin.accent)
        } else {
            ("[ ]", self.off_label.as_str(), ctx.skin.disabled)
        };

        let mut knob_style = style;
        if focused {
            knob_style = knob_style.patch(ctx.skin.focus);
        }

        let line = Line::from(vec![
            Span::styled(format!("{}: ", self.label), ctx.skin.item),
            Span::styled(knob.to_string(), knob_style),
            Span::styled(format!(" {caption}"), style),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn enter_and_space_flip_state() {
        let mut toggle = ToggleButton::new("Loudness");
        assert!(!toggle.is_on());

        assert!(toggle.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(toggle.is_on());

        assert!(toggle.handle_key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)));
        assert!(!toggle.is_on());
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut toggle = ToggleButton::new("Loudness").with_state(true);
        assert!(!toggle.handle_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)));
        assert!(toggle.is_on());
    }
}
