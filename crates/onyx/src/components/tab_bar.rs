use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

use super::{Component, EventResult, UiContext};

/// Selected-index tab strip. Number keys jump straight to a tab, Tab and
/// BackTab cycle.
pub struct TabBar {
    titles: Vec<String>,
    selected: usize,
}

impl TabBar {
    pub fn new(titles: Vec<String>) -> Self {
        Self {
            titles,
            selected: 0,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize) {
        if index < self.titles.len() {
            self.selected = index;
        }
    }

    pub fn next(&mut self) {
        if !self.titles.is_empty() {
            self.selected = (self.selected + 1) % self.titles.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.titles.is_empty() {
            self.selected = if self.selected == 0 {
                self.titles.len() - 1
            } else {
                self.selected - 1
            };
        }
    }
}

impl Component for TabBar {
    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut UiContext<'_>) -> EventResult {
        match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                if index < self.titles.len() {
                    self.select(index);
                    EventResult::Handled
                } else {
                    EventResult::NotHandled
                }
            }
            KeyCode::Tab => {
                self.next();
                EventResult::Handled
            }
            KeyCode::BackTab => {
                self.prev();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame<'_>, area: Rect, ctx: &mut UiContext<'_>) {
        let titles: Vec<Line<'_>> = self
            .titles
            .iter()
            .enumerate()
            .map(|(index, title)| {
                let content = format!("[{}] {}", index + 1, title);
                if index == self.selected {
                    Line::from(Span::styled(content, ctx.skin.selected))
                } else {
                    Line::from(Span::styled(content, ctx.skin.item))
                }
            })
            .collect();

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM).border_style(ctx.skin.border))
            .select(self.selected)
            .highlight_style(ctx.skin.selected);

        frame.render_widget(tabs, area);
    }
}
