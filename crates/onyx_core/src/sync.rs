//! Focus/scroll/selection synchronizer for spatially-navigated lists.
//!
//! Three concerns update independently in a scrollable list of selectable
//! items: which item is selected, where the viewport is scrolled, and which
//! item holds the input focus ring. Scroll completion is not synchronously
//! observable from the cycle that requests it, so issuing a scroll and a
//! focus move in the same cycle lands focus on a row that is not yet in the
//! viewport. [`ListSync`] spreads the two across consecutive update cycles
//! with a small state machine and re-runs the sequence whenever the
//! collection or the selected identity changes structurally.
//!
//! The machine is pure: each cycle takes an [`UpdateContext`] and returns the
//! [`Effect`]s to execute. The owning widget is the only thing that touches
//! the terminal.

use crate::item::{Key, SlotItem};
use crate::selection::{content_equals, index_of_key, is_selected_valid, key_of};

/// Progress of the scroll-then-focus sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    /// Initial state. Scrolling and focusing pending.
    Init,
    /// Scroll requested.
    Scrolled,
    /// Focus completed or not required.
    Done,
}

/// Input flags sampled from the spotlight manager for one update cycle.
///
/// Passed in explicitly so the transition function never reads global state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputMode {
    /// Focus is being driven by the pointer rather than 5-way navigation.
    pub pointer: bool,
    /// Spotlight focus moves are suspended.
    pub paused: bool,
}

/// One update cycle's view of the caller-owned widget state.
#[derive(Debug)]
pub struct UpdateContext<'a, T> {
    /// The collection, supplied fresh every cycle.
    pub items: &'a [T],
    /// Externally supplied selected index.
    pub selected: Option<usize>,
    pub input: InputMode,
    /// Index of the list item currently holding input focus, if any.
    pub focus_within: Option<usize>,
}

/// Side-effecting command returned from an update cycle for the owning
/// widget to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Bring the item at this index fully into the viewport.
    ScrollIntoView(usize),
    /// Move input focus to the item at this index. Only ever issued from the
    /// `Scrolled` state, one cycle after the matching scroll.
    FocusIndex(usize),
    /// Focus-reveal correction: focus the selected item because nothing in
    /// the list holds focus.
    RevealSelected(usize),
    /// Focus-reveal correction fallback: focus the first focusable item.
    RevealFirst,
}

/// The synchronizer. Owns the sequencer state and the snapshots taken at the
/// last resync decision point; the collection itself stays caller-owned.
#[derive(Debug)]
pub struct ListSync<T> {
    ready: ReadyState,
    prev_items: Vec<T>,
    prev_selected: Option<usize>,
    prev_selected_key: Option<Key>,
    /// Focus target resolved from `last_focused_key` at the last resync,
    /// taking precedence over the supplied selected index.
    prev_focused: Option<usize>,
    /// Identity of the item that last received genuine user focus. A lookup
    /// key only, never a reference into the collection.
    last_focused_key: Option<Key>,
}

impl<T: SlotItem + Clone> ListSync<T> {
    /// Create the synchronizer at widget mount. Starts in `Init` when an
    /// initial selection exists so the first cycles scroll and focus it,
    /// otherwise there is nothing to sequence and the machine rests in
    /// `Done`.
    pub fn new(items: &[T], selected: Option<usize>) -> Self {
        Self {
            ready: if is_selected_valid(items, selected) {
                ReadyState::Init
            } else {
                ReadyState::Done
            },
            prev_items: items.to_vec(),
            prev_selected: selected,
            prev_selected_key: key_of(items, selected),
            prev_focused: None,
            last_focused_key: None,
        }
    }

    pub fn ready(&self) -> ReadyState {
        self.ready
    }

    pub fn last_focused_key(&self) -> Option<&Key> {
        self.last_focused_key.as_ref()
    }

    /// Run one update cycle and return the effects to execute.
    ///
    /// At most one sequencer command (scroll or focus) is issued per cycle;
    /// the focus-reveal correction may accompany it and is idempotent.
    pub fn on_update(&mut self, ctx: &UpdateContext<'_, T>) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.reveal_focus(ctx, &mut effects);

        match self.ready {
            ReadyState::Init => {
                if let Some(index) = self.target_index(ctx) {
                    effects.push(Effect::ScrollIntoView(index));
                }
                // Advance even when the target could not be resolved this
                // cycle; the effect is a no-op and the next resync restarts
                // the sequence if the target reappears.
                self.ready = ReadyState::Scrolled;
            }
            ReadyState::Scrolled => {
                if let Some(index) = self.target_index(ctx) {
                    effects.push(Effect::FocusIndex(index));
                }
                self.ready = ReadyState::Done;
            }
            ReadyState::Done => {
                let key = key_of(ctx.items, ctx.selected);
                let keys_differ = key.is_some()
                    && self.prev_selected_key.is_some()
                    && key != self.prev_selected_key;
                let content_changed = !content_equals(&self.prev_items, ctx.items);

                if keys_differ
                    || (key.is_none()
                        && self.prev_selected_key.is_none()
                        && self.prev_selected != ctx.selected)
                    || content_changed
                {
                    // An identity change on an unchanged collection is the
                    // caller explicitly re-selecting; an identity change
                    // caused by the collection shifting underneath the same
                    // index is structural and keeps the focus memory.
                    self.reset_focus(keys_differ && !content_changed, ctx);
                }
            }
        }

        effects
    }

    /// Record the identity of a genuinely user-focused item.
    ///
    /// Focus events during an in-flight resync would poison the memory with
    /// transient states, pointer-driven focus is hover noise, and an index
    /// outside the collection means the event came from outside this
    /// widget's subtree; all three are ignored.
    pub fn on_focus(&mut self, index: usize, ctx: &UpdateContext<'_, T>) {
        if self.ready == ReadyState::Done && !ctx.input.pointer && index < ctx.items.len() {
            self.last_focused_key = key_of(ctx.items, Some(index));
        }
    }

    /// Effective target for the current scroll/focus pass: the remembered
    /// focus position resolved at the last resync when it still exists,
    /// else the externally supplied selection.
    fn target_index(&self, ctx: &UpdateContext<'_, T>) -> Option<usize> {
        if let Some(focused) = self.prev_focused {
            if focused < ctx.items.len() {
                return Some(focused);
            }
        }
        ctx.selected.filter(|&index| index < ctx.items.len())
    }

    /// Focus-reveal correction, run every cycle independent of sequencer
    /// state: when 5-way navigation is active and nothing inside the list
    /// holds focus, put the focus ring back on the selected item, or the
    /// first item when the selection is invalid. Guards against focus being
    /// silently dropped when the focused row is removed from the collection.
    fn reveal_focus(&self, ctx: &UpdateContext<'_, T>, effects: &mut Vec<Effect>) {
        if ctx.input.pointer || ctx.input.paused || ctx.focus_within.is_some() {
            return;
        }
        if ctx.items.is_empty() {
            return;
        }
        match ctx.selected {
            Some(index) if index < ctx.items.len() => {
                effects.push(Effect::RevealSelected(index));
            }
            _ => effects.push(Effect::RevealFirst),
        }
    }

    /// Restart the scroll-then-focus sequence and snapshot the decision
    /// point. An explicit re-selection supersedes the user's focus memory;
    /// structural changes instead try to keep the focus ring on the item the
    /// user last focused, wherever it moved to.
    fn reset_focus(&mut self, explicit_reselect: bool, ctx: &UpdateContext<'_, T>) {
        let mut adjusted_focus = None;

        if explicit_reselect {
            self.last_focused_key = None;
        } else {
            adjusted_focus = index_of_key(ctx.items, self.last_focused_key.as_ref());
        }

        self.prev_items = ctx.items.to_vec();
        self.prev_focused = adjusted_focus;
        self.prev_selected = ctx.selected;
        self.prev_selected_key = key_of(ctx.items, ctx.selected);
        self.ready = ReadyState::Init;
    }
}
