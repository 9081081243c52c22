//! Audio screen: volume, input source, loudness.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
};

use onyx_core::{Entry, Spotlight};

use crate::components::dropdown::{DropdownList, DropdownResult};
use crate::components::picker::Picker;
use crate::components::toggle::ToggleButton;
use crate::components::{Component, EventResult, PanelCycle, UiContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum AudioPanel {
    #[default]
    Volume,
    Source,
    Loudness,
}

impl PanelCycle for AudioPanel {
    fn next(self) -> Self {
        match self {
            Self::Volume => Self::Source,
            Self::Source => Self::Loudness,
            Self::Loudness => Self::Volume,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Volume => Self::Loudness,
            Self::Source => Self::Volume,
            Self::Loudness => Self::Source,
        }
    }
}

pub struct AudioScreen {
    focus: AudioPanel,
    volume: Picker,
    source: DropdownList,
    loudness: ToggleButton,
}

impl AudioScreen {
    pub fn new(spotlight: &mut Spotlight) -> Self {
        let levels = (0..=10)
            .map(|step| Entry::new(step as u64, format!("{}%", step * 10)))
            .collect();
        let sources = vec![
            Entry::new("am", "AM"),
            Entry::new("fm", "FM"),
            Entry::new("aux", "Aux"),
            Entry::new("bt", "Bluetooth"),
            Entry::new("usb", "USB"),
        ];

        Self {
            focus: AudioPanel::default(),
            volume: Picker::new("Volume", levels).with_index(3),
            source: DropdownList::new(spotlight, "Source", sources).with_selected(1),
            loudness: ToggleButton::new("Loudness").labels("On", "Off"),
        }
    }

    pub fn handle_click(&mut self, x: u16, y: u16, ctx: &mut UiContext<'_>) -> EventResult {
        match self.source.handle_click(x, y, ctx) {
            DropdownResult::Ignored => EventResult::NotHandled,
            _ => EventResult::Handled,
        }
    }

    pub fn handle_wheel(&mut self, delta: i32, _ctx: &mut UiContext<'_>) -> EventResult {
        match self.source.handle_wheel(delta) {
            DropdownResult::Ignored => EventResult::NotHandled,
            _ => EventResult::Handled,
        }
    }

    pub fn render_overlays(&mut self, frame: &mut Frame<'_>, screen: Rect, ctx: &mut UiContext<'_>) {
        self.source.render_overlay(frame, screen, ctx);
    }
}

impl Component for AudioScreen {
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut UiContext<'_>) -> EventResult {
        if self.source.is_open() {
            self.source.handle_key(key, ctx);
            return EventResult::Handled;
        }

        match key.code {
            KeyCode::Up => {
                self.focus = self.focus.prev();
                EventResult::Handled
            }
            KeyCode::Down => {
                self.focus = self.focus.next();
                EventResult::Handled
            }
            _ => {
                let handled = match self.focus {
                    AudioPanel::Volume => self.volume.handle_key(key),
                    AudioPanel::Source => {
                        self.source.handle_key(key, ctx) != DropdownResult::Ignored
                    }
                    AudioPanel::Loudness => self.loudness.handle_key(key),
                };
                if handled {
                    EventResult::Handled
                } else {
                    EventResult::NotHandled
                }
            }
        }
    }

    fn render(&mut self, frame: &mut Frame<'_>, area: Rect, ctx: &mut UiContext<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(ctx.skin.border)
            .title(" Audio ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Volume
                Constraint::Length(1), // Spacing
                Constraint::Length(3), // Source dropdown face
                Constraint::Length(1), // Loudness
                Constraint::Min(0),
            ])
            .split(inner);

        let open = self.source.is_open();
        let focus = self.focus;
        self.volume
            .render(frame, chunks[0], focus == AudioPanel::Volume && !open, ctx);
        self.source
            .render(frame, chunks[2], focus == AudioPanel::Source && !open, ctx);
        self.loudness
            .render(frame, chunks[3], focus == AudioPanel::Loudness && !open, ctx);
    }
}
