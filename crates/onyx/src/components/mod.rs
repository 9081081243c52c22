pub mod dropdown;
pub mod picker;
pub mod scroll_bar;
pub mod scroller;
pub mod status_bar;
pub mod tab_bar;
pub mod temperature;
pub mod toggle;

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use onyx_core::Spotlight;

use crate::theme::Skin;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult {
    /// Event was handled, continue
    Handled,
    /// Event was not handled, pass to parent
    NotHandled,
    /// Request app exit
    Exit,
}

/// Per-cycle context every component receives: the application's spotlight
/// manager and the active skin.
pub struct UiContext<'a> {
    pub spotlight: &'a mut Spotlight,
    pub skin: &'a Skin,
}

/// Trait for components that can handle input and render
pub trait Component {
    /// Handle a key event
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut UiContext<'_>) -> EventResult;

    /// Render the component; rendering is also the synchronizer's update
    /// cycle, so implementations may move focus and scroll state here.
    fn render(&mut self, frame: &mut Frame<'_>, area: Rect, ctx: &mut UiContext<'_>);
}

/// Trait for panel enums that cycle focus between a screen's widgets.
pub trait PanelCycle: Copy + Eq {
    /// Get the next panel in the cycle.
    fn next(self) -> Self;
    /// Get the previous panel in the cycle.
    fn prev(self) -> Self;
}
