//! Climate control screen: cabin temperature, fan speed, HVAC mode.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
};

use onyx_core::{Entry, Spotlight};

use crate::components::dropdown::{DropdownList, DropdownResult};
use crate::components::picker::Picker;
use crate::components::temperature::TemperatureControl;
use crate::components::{Component, EventResult, PanelCycle, UiContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ClimatePanel {
    #[default]
    Temperature,
    Fan,
    Mode,
}

impl PanelCycle for ClimatePanel {
    fn next(self) -> Self {
        match self {
            Self::Temperature => Self::Fan,
            Self::Fan => Self::Mode,
            Self::Mode => Self::Temperature,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Temperature => Self::Mode,
            Self::Fan => Self::Temperature,
            Self::Mode => Self::Fan,
        }
    }
}

pub struct ClimateScreen {
    focus: ClimatePanel,
    temperature: TemperatureControl,
    fan: Picker,
    mode: DropdownList,
}

impl ClimateScreen {
    pub fn new(spotlight: &mut Spotlight) -> Self {
        let fan_speeds = vec![
            Entry::new("low", "Low"),
            Entry::new("medium", "Medium"),
            Entry::new("high", "High"),
            Entry::new("auto", "Auto"),
        ];
        let modes = vec![
            Entry::new("auto", "Auto"),
            Entry::new("cool", "Cool"),
            Entry::new("heat", "Heat"),
            Entry::new("fan", "Fan only"),
            Entry::new("defrost", "Defrost"),
        ];

        Self {
            focus: ClimatePanel::default(),
            temperature: TemperatureControl::new("Cabin", 16, 30).with_value(21),
            fan: Picker::new("Fan", fan_speeds).wrap(true),
            mode: DropdownList::new(spotlight, "Mode", modes).max_visible(4),
        }
    }

    pub fn handle_click(&mut self, x: u16, y: u16, ctx: &mut UiContext<'_>) -> EventResult {
        match self.mode.handle_click(x, y, ctx) {
            DropdownResult::Ignored => EventResult::NotHandled,
            _ => EventResult::Handled,
        }
    }

    pub fn handle_wheel(&mut self, delta: i32, _ctx: &mut UiContext<'_>) -> EventResult {
        match self.mode.handle_wheel(delta) {
            DropdownResult::Ignored => EventResult::NotHandled,
            _ => EventResult::Handled,
        }
    }

    /// Overlays paint after everything else on the frame.
    pub fn render_overlays(&mut self, frame: &mut Frame<'_>, screen: Rect, ctx: &mut UiContext<'_>) {
        self.mode.render_overlay(frame, screen, ctx);
    }
}

impl Component for ClimateScreen {
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut UiContext<'_>) -> EventResult {
        // An open dropdown traps all input (self-only spotlight restriction).
        if self.mode.is_open() {
            self.mode.handle_key(key, ctx);
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
                    ClimatePanel::Temperature => self.temperature.handle_key(key),
                    ClimatePanel::Fan => self.fan.handle_key(key),
                    ClimatePanel::Mode => {
                        self.mode.handle_key(key, ctx) != DropdownResult::Ignored
                    }
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
            .title(" Climate ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Temperature
                Constraint::Length(1), // Spacing
                Constraint::Length(1), // Fan
                Constraint::Length(1), // Spacing
                Constraint::Length(3), // Mode dropdown face
                Constraint::Min(0),
            ])
            .split(inner);

        let open = self.mode.is_open();
        let focus = self.focus;
        self.temperature
            .render(frame, chunks[0], focus == ClimatePanel::Temperature && !open, ctx);
        self.fan
            .render(frame, chunks[2], focus == ClimatePanel::Fan && !open, ctx);
        self.mode
            .render(frame, chunks[4], focus == ClimatePanel::Mode && !open, ctx);
    }
}
