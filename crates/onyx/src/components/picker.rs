//! Horizontal value picker.
//!
//! Cycles through a fixed set of entries with Left/Right. Wrapping is
//! opt-in; without it the arrows dim at the ends.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use onyx_core::{Entry, Key};

use super::UiContext;

pub struct Picker {
    label: String,
    items: Vec<Entry>,
    index: usize,
    wrap: bool,
}

impl Picker {
    pub fn new(label: impl Into<String>, items: Vec<Entry>) -> Self {
        Self {
            label: label.into(),
            items,
            index: 0,
            wrap: false,
        }
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index.min(self.items.len().saturating_sub(1));
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Entry> {
        self.items.get(self.index)
    }

    pub fn current_key(&self) -> Option<&Key> {
        self.current().map(|entry| &entry.key)
    }

    pub fn next(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        if self.index + 1 < self.items.len() {
            self.index += 1;
            true
        } else if self.wrap {
            self.index = 0;
            true
        } else {
            false
        }
    }

    pub fn prev(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        if self.index > 0 {
            self.index -= 1;
            true
        } else if self.wrap {
            self.index = self.items.len() - 1;
            true
        } else {
            false
        }
    }

    /// Returns `true` when the key changed the value.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => self.next(),
            KeyCode::Left | KeyCode::Char('h') => self.prev(),
            _ => false,
        }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, focused: bool, ctx: &mut UiContext<'_>) {
        let value = self
            .current()
            .map(|entry| entry.label.as_str())
            .unwrap_or("—");

        let arrow_style = |active: bool| {
            if active {
                ctx.skin.accent
            } else {
                ctx.skin.disabled
            }
        };
        let left_active = self.wrap || self.index > 0;
        let right_active = self.wrap || self.index + 1 < self.items.len();

        let mut value_style = ctx.skin.selected;
        if focused {
            value_style = value_style.patch(ctx.skin.focus);
        }

        let line = Line::from(vec![
            Span::styled(format!("{}: ", self.label), ctx.skin.item),
            Span::styled("◀ ", arrow_style(left_active)),
            Span::styled(value.to_string(), value_style),
            Span::styled(" ▶", arrow_style(right_active)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn entries(labels: &[&str]) -> Vec<Entry> {
        labels.iter().map(|l| Entry::new(*l, *l)).collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn right_advances_until_end() {
        let mut picker = Picker::new("Fan", entries(&["low", "medium", "high"]));
        assert!(picker.handle_key(key(KeyCode::Right)));
        assert!(picker.handle_key(key(KeyCode::Right)));
        assert_eq!(picker.index(), 2);
        assert!(!picker.handle_key(key(KeyCode::Right)));
        assert_eq!(picker.index(), 2);
    }

    #[test]
    fn wrap_cycles_both_directions() {
        let mut picker = Picker::new("Fan", entries(&["low", "high"])).wrap(true);
        assert!(picker.prev());
        assert_eq!(picker.index(), 1);
        assert!(picker.next());
        assert_eq!(picker.index(), 0);
    }

    #[test]
    fn empty_picker_never_moves() {
        let mut picker = Picker::new("Fan", Vec::new());
        assert!(!picker.next());
        assert!(!picker.prev());
        assert_eq!(picker.current(), None);
    }

    #[test]
    fn with_index_clamps() {
        let picker = Picker::new("Fan", entries(&["low", "high"])).with_index(9);
        assert_eq!(picker.index(), 1);
    }
}
