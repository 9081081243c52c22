//! Input events and input-mode bookkeeping.
//!
//! The widgets only distinguish two input regimes: 5-way key navigation and
//! pointer interaction. Every incoming terminal event flips the spotlight
//! manager into the matching mode before it is routed, which is what the
//! synchronizer's pointer-mode guards observe.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use onyx_core::Spotlight;

/// Terminal input reduced to what the demo app routes.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key(KeyEvent),
    /// Pointer click at terminal coordinates.
    Click { x: u16, y: u16 },
    /// Pointer wheel movement; positive scrolls down.
    Wheel { delta: i32 },
    /// Poll timeout; drives the synchronizer's follow-up update cycles.
    Tick,
}

/// Wait up to `timeout` for the next event. Returns `Tick` on timeout so the
/// render loop keeps cycling while the scroll-then-focus sequence drains.
pub fn next_event(timeout: Duration) -> io::Result<InputEvent> {
    if !event::poll(timeout)? {
        return Ok(InputEvent::Tick);
    }
    loop {
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                return Ok(InputEvent::Key(key));
            }
            Event::Mouse(mouse) => {
                if let Some(reduced) = reduce_mouse(mouse) {
                    return Ok(reduced);
                }
            }
            _ => {
                if !event::poll(Duration::ZERO)? {
                    return Ok(InputEvent::Tick);
                }
            }
        }
    }
}

fn reduce_mouse(mouse: MouseEvent) -> Option<InputEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::Click {
            x: mouse.column,
            y: mouse.row,
        }),
        MouseEventKind::ScrollUp => Some(InputEvent::Wheel { delta: -1 }),
        MouseEventKind::ScrollDown => Some(InputEvent::Wheel { delta: 1 }),
        _ => None,
    }
}

/// Flip the spotlight input mode to match the event source: any pointer
/// event enters pointer mode, any key returns to 5-way navigation. Ticks
/// leave the mode untouched.
pub fn note_input_mode(event: &InputEvent, spotlight: &mut Spotlight) {
    match event {
        InputEvent::Key(_) => spotlight.set_pointer_mode(false),
        InputEvent::Click { .. } | InputEvent::Wheel { .. } => spotlight.set_pointer_mode(true),
        InputEvent::Tick => {}
    }
}
