//! Focus, scroll and selection synchronization for spatially-navigated lists
//!
//! This crate is the render-free core of the onyx widget toolkit. It
//! coordinates three independently-updating concerns for a vertically
//! scrollable, 5-way-navigated list of selectable items:
//! - Selection tracking by stable item identity rather than index
//! - A scroll sequencer that orders "scroll to the selection" strictly
//!   before "move focus there", across separate update cycles
//! - A focus rebinder that remembers the identity of the last user-focused
//!   item and re-resolves it after structural changes
//!
//! All side effects are expressed as command values returned from the
//! transition function; nothing here touches a terminal, so the state
//! machine tests run without a rendering environment.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod scrollbar;
pub mod selection;
pub mod sync;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod item;
pub mod spotlight;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use item::{Entry, Key, SlotItem};
pub use scrollbar::{ButtonState, ScrollBounds, ScrollbarState, ThumbMetrics};
pub use selection::{SelectionState, content_equals, index_of_key, is_selected_valid, key_of};
pub use spotlight::{ContainerId, ContainerRule, EnterTo, FocusTarget, Spotlight};
pub use sync::{Effect, InputMode, ListSync, ReadyState, UpdateContext};
