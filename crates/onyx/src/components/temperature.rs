//! Temperature control.
//!
//! Bounded numeric control with a cold/heat zone split at the midpoint of
//! its range. The value logic mirrors an appliance thermostat: step keys,
//! hard clamping at the limits, and a zone-colored readout.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::UiContext;

/// Which half of the range the current value sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Cold,
    Heat,
}

pub struct TemperatureControl {
    label: String,
    min: i32,
    max: i32,
    step: i32,
    value: i32,
}

impl TemperatureControl {
    /// New control over `min..=max`, starting at the low end.
    pub fn new(label: impl Into<String>, min: i32, max: i32) -> Self {
        let max = max.max(min);
        Self {
            label: label.into(),
            min,
            max,
            step: 1,
            value: min,
        }
    }

    pub fn step(mut self, step: i32) -> Self {
        self.step = step.max(1);
        self
    }

    pub fn with_value(mut self, value: i32) -> Self {
        self.value = value.clamp(self.min, self.max);
        self
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn set_value(&mut self, value: i32) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Cold below the midpoint of the range, heat at or above it.
    pub fn zone(&self) -> Zone {
        if self.value < self.min + (self.max - self.min) / 2 {
            Zone::Cold
        } else {
            Zone::Heat
        }
    }

    pub fn increment(&mut self) -> bool {
        let next = (self.value + self.step).min(self.max);
        let changed = next != self.value;
        self.value = next;
        changed
    }

    pub fn decrement(&mut self) -> bool {
        let next = (self.value - self.step).max(self.min);
        let changed = next != self.value;
        self.value = next;
        changed
    }

    /// Returns `true` when the key changed the value.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Right | KeyCode::Char('+') => self.increment(),
            KeyCode::Down | KeyCode::Left | KeyCode::Char('-') => self.decrement(),
            _ => false,
        }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, focused: bool, ctx: &mut UiContext<'_>) {
        let zone_style = match self.zone() {
            Zone::Cold => ctx.skin.cold,
            Zone::Heat => ctx.skin.heat,
        };

        // Fixed-width bar filled proportionally to the value's position in
        // the range.
        let track = 20usize;
        let span = (self.max - self.min).max(1);
        let filled = ((self.value - self.min) as usize * track) / span as usize;
        let bar: String = "█".repeat(filled) + &"░".repeat(track - filled);

        let mut readout_style = zone_style;
        if focused {
            readout_style = readout_style.patch(ctx.skin.focus);
        }

        let line = Line::from(vec![
            Span::styled(format!("{}: ", self.label), ctx.skin.item),
            Span::styled(bar, zone_style),
            Span::styled(format!(" {}°C", self.value), readout_style),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
