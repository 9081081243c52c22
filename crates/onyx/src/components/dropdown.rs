//! Dropdown list.
//!
//! The closed widget is a one-line button face; opening it overlays a
//! scrollable list of entries. The open list is where the synchronizer
//! earns its keep: every render is one update cycle of the
//! [`ListSync`] machine, and all focus/scroll movement happens by executing
//! the effects it returns. Opening the list is its mount: the sequencer is
//! re-armed so the selection is scrolled into view before focus lands on it.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tracing::debug;

use onyx_core::{
    ContainerId, ContainerRule, Effect, EnterTo, Entry, FocusTarget, Key, ListSync, Spotlight,
    UpdateContext,
};

use super::UiContext;
use super::scroller::Scroller;

pub type SelectHandler = Box<dyn FnMut(usize, &Key)>;
pub type FocusHandler = Box<dyn FnMut(usize)>;
pub type ScrollHandler = Box<dyn FnMut(usize)>;

/// Result of handling input on a dropdown
#[derive(Debug, Clone, PartialEq)]
pub enum DropdownResult {
    /// Input consumed, state unchanged for the caller
    Continue,
    /// An item was chosen; the list closed
    Selected(usize, Key),
    /// The open list was dismissed without choosing
    Dismissed,
    /// Input was not for this widget
    Ignored,
}

pub struct DropdownList {
    title: String,
    items: Vec<Entry>,
    selected: Option<usize>,
    open: bool,
    sync: ListSync<Entry>,
    container: ContainerId,
    scroller: Scroller,
    /// Inner list area of the last rendered overlay, for pointer hits.
    list_area: Option<Rect>,
    face_area: Option<Rect>,
    max_visible: u16,
    on_select: Option<SelectHandler>,
    on_focus: Option<FocusHandler>,
    scroll_hook: Option<ScrollHandler>,
}

impl DropdownList {
    /// Create the dropdown and register its spotlight container. The open
    /// list traps 5-way focus and enters on its selected item.
    pub fn new(spotlight: &mut Spotlight, title: impl Into<String>, items: Vec<Entry>) -> Self {
        let container = spotlight.register(ContainerRule {
            enter_to: EnterTo::DefaultElement,
            self_only: true,
        });
        let selected = Some(0);
        Self {
            title: title.into(),
            sync: ListSync::new(&items, selected),
            items,
            selected,
            open: false,
            container,
            scroller: Scroller::new(),
            list_area: None,
            face_area: None,
            max_visible: 6,
            on_select: None,
            on_focus: None,
            scroll_hook: None,
        }
    }

    pub fn with_selected(mut self, selected: usize) -> Self {
        self.selected = Some(selected);
        self.sync = ListSync::new(&self.items, self.selected);
        self
    }

    pub fn max_visible(mut self, rows: u16) -> Self {
        self.max_visible = rows.max(1);
        self
    }

    /// Called with the newly chosen index and key.
    pub fn on_select(mut self, handler: SelectHandler) -> Self {
        self.on_select = Some(handler);
        self
    }

    /// Called after internal focus bookkeeping with the focused index.
    pub fn on_focus(mut self, handler: FocusHandler) -> Self {
        self.on_focus = Some(handler);
        self
    }

    /// External scroll-to command; replaces the built-in scroller as the
    /// executor of scroll effects.
    pub fn with_scroll_hook(mut self, handler: ScrollHandler) -> Self {
        self.scroll_hook = Some(handler);
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selected.and_then(|index| self.items.get(index))
    }

    pub fn container(&self) -> ContainerId {
        self.container
    }

    /// Replace the collection. The synchronizer compares content, not
    /// references, on its next update cycle, so passing an identical list
    /// is free.
    pub fn set_items(&mut self, items: Vec<Entry>) {
        self.items = items;
    }

    pub fn set_selected(&mut self, selected: Option<usize>) {
        self.selected = selected;
    }

    /// Open the list. This is the list's mount: the sequencer re-arms so
    /// the next cycles scroll to the selection and then focus it.
    pub fn open(&mut self) {
        if !self.open {
            debug!(title = %self.title, "dropdown opened");
            self.open = true;
            self.sync = ListSync::new(&self.items, self.selected);
        }
    }

    pub fn close(&mut self, spotlight: &mut Spotlight) {
        if self.open {
            debug!(title = %self.title, "dropdown closed");
            self.open = false;
            self.list_area = None;
            if spotlight.focus_within(self.container).is_some() {
                spotlight.set_current(None);
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, ctx: &mut UiContext<'_>) -> DropdownResult {
        if !self.open {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.open();
                    DropdownResult::Continue
                }
                _ => DropdownResult::Ignored,
            };
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_focus(-1, ctx);
                DropdownResult::Continue
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_focus(1, ctx);
                DropdownResult::Continue
            }
            KeyCode::Enter => {
                let target = ctx
                    .spotlight
                    .focus_within(self.container)
                    .or(self.selected)
                    .unwrap_or(0);
                self.choose(target, ctx)
            }
            KeyCode::Esc => {
                self.close(ctx.spotlight);
                DropdownResult::Dismissed
            }
            _ => DropdownResult::Ignored,
        }
    }

    /// Pointer wheel over the open list.
    pub fn handle_wheel(&mut self, delta: i32) -> DropdownResult {
        if !self.open {
            return DropdownResult::Ignored;
        }
        self.scroller.scroll_by(delta);
        DropdownResult::Continue
    }

    /// Pointer interaction: row clicks choose, scroll-button clicks page,
    /// clicks outside the open list dismiss it.
    pub fn handle_click(&mut self, x: u16, y: u16, ctx: &mut UiContext<'_>) -> DropdownResult {
        if !self.open {
            if self.face_area.is_some_and(|area| contains(area, x, y)) {
                self.open();
                return DropdownResult::Continue;
            }
            return DropdownResult::Ignored;
        }

        if let Some(button) = self.scroller.hit_button(x, y) {
            self.scroller.press_button(button);
            return DropdownResult::Continue;
        }

        let Some(area) = self.list_area else {
            return DropdownResult::Ignored;
        };
        if !contains(area, x, y) {
            self.close(ctx.spotlight);
            return DropdownResult::Dismissed;
        }

        let row = self.scroller.offset() as usize + (y - area.y) as usize;
        if row < self.items.len() {
            self.choose(row, ctx)
        } else {
            DropdownResult::Continue
        }
    }

    /// Render the closed button face into `area`.
    pub fn render(&mut self, frame: &mut Frame<'_>, area: Rect, focused: bool, ctx: &mut UiContext<'_>) {
        self.face_area = Some(area);
        let label = self
            .selected_entry()
            .map(|entry| entry.label.as_str())
            .unwrap_or("—");
        let arrow = if self.open { "▲" } else { "▼" };
        let face_style = if focused { ctx.skin.focus } else { ctx.skin.item };

        let line = Line::from(vec![
            Span::styled(format!("{}: ", self.title), ctx.skin.item),
            Span::styled(label.to_string(), ctx.skin.selected),
            Span::raw(" "),
            Span::styled(arrow, ctx.skin.accent),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if focused { ctx.skin.accent } else { ctx.skin.border });
        frame.render_widget(Paragraph::new(line).style(face_style).block(block), area);
    }

    /// Render the open list as an overlay anchored under the button face.
    /// Call after everything else so the list paints on top. This is also
    /// the synchronizer's update cycle.
    pub fn render_overlay(&mut self, frame: &mut Frame<'_>, screen: Rect, ctx: &mut UiContext<'_>) {
        if !self.open {
            return;
        }
        let Some(face) = self.face_area else {
            return;
        };

        let rows = (self.items.len() as u16).clamp(1, self.max_visible);
        let height = (rows + 2).min(screen.height);
        let width = face.width.min(screen.width);
        let x = face.x.min(screen.x + screen.width.saturating_sub(width));
        let below = face.y + face.height;
        let y = if below + height <= screen.y + screen.height {
            below
        } else {
            // Not enough room below the face: open upward.
            face.y.saturating_sub(height)
        };
        let overlay = Rect { x, y, width, height };

        frame.render_widget(Clear, overlay);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(ctx.skin.accent);
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);
        self.list_area = Some(inner);

        self.run_cycle(u32::from(inner.height), ctx);

        let focused = ctx.spotlight.focus_within(self.container);
        let lines: Vec<Line<'_>> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let is_selected = self.selected == Some(index);
                let marker = if ctx.skin.radio_markers {
                    if is_selected { "◉ " } else { "○ " }
                } else if is_selected {
                    "✓ "
                } else {
                    "  "
                };
                let mut style = if is_selected {
                    ctx.skin.selected
                } else {
                    ctx.skin.item
                };
                if focused == Some(index) {
                    style = style.patch(ctx.skin.focus);
                }
                Line::from(vec![
                    Span::styled(marker.to_string(), style),
                    Span::styled(entry.label.clone(), style),
                ])
            })
            .collect();

        self.scroller.render(frame, inner, lines, ctx);
    }

    /// One synchronizer update cycle: feed the machine the fresh collection
    /// and input flags, execute whatever it returns.
    fn run_cycle(&mut self, viewport: u32, ctx: &mut UiContext<'_>) {
        self.scroller.set_extent(viewport, self.items.len() as u32);

        let effects = {
            let cycle = UpdateContext {
                items: &self.items,
                selected: self.selected,
                input: ctx.spotlight.input_mode(),
                focus_within: ctx.spotlight.focus_within(self.container),
            };
            self.sync.on_update(&cycle)
        };

        for effect in effects {
            debug!(title = %self.title, ?effect, "dropdown effect");
            match effect {
                Effect::ScrollIntoView(index) => {
                    if let Some(hook) = self.scroll_hook.as_mut() {
                        hook(index);
                    } else {
                        self.scroller.scroll_into_view(index as u32);
                    }
                }
                Effect::FocusIndex(index) | Effect::RevealSelected(index) => {
                    ctx.spotlight.set_current(Some(FocusTarget {
                        container: self.container,
                        index,
                    }));
                }
                Effect::RevealFirst => {
                    if !self.items.is_empty() {
                        ctx.spotlight.set_current(Some(FocusTarget {
                            container: self.container,
                            index: 0,
                        }));
                    }
                }
            }
        }
    }

    /// Move the 5-way focus ring, report the move to the rebinder, keep the
    /// row visible, and forward the event to the external callback.
    fn move_focus(&mut self, delta: i32, ctx: &mut UiContext<'_>) {
        if self.items.is_empty() {
            return;
        }
        let current = ctx
            .spotlight
            .focus_within(self.container)
            .or(self.selected)
            .unwrap_or(0);
        let target = current
            .saturating_add_signed(delta as isize)
            .min(self.items.len() - 1);

        ctx.spotlight.set_current(Some(FocusTarget {
            container: self.container,
            index: target,
        }));

        let cycle = UpdateContext {
            items: &self.items,
            selected: self.selected,
            input: ctx.spotlight.input_mode(),
            focus_within: Some(target),
        };
        self.sync.on_focus(target, &cycle);

        self.scroller.scroll_into_view(target as u32);
        if let Some(handler) = self.on_focus.as_mut() {
            handler(target);
        }
    }

    fn choose(&mut self, index: usize, ctx: &mut UiContext<'_>) -> DropdownResult {
        let Some(entry) = self.items.get(index) else {
            return DropdownResult::Continue;
        };
        let key = entry.key.clone();
        self.selected = Some(index);
        debug!(title = %self.title, index, key = %key, "dropdown selection");
        if let Some(handler) = self.on_select.as_mut() {
            handler(index, &key);
        }
        self.close(ctx.spotlight);
        DropdownResult::Selected(index, key)
    }
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Skin, SkinName};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use onyx_core::ReadyState;

    fn entries(keys: &[&str]) -> Vec<Entry> {
        keys.iter().map(|k| Entry::new(*k, k.to_uppercase())).collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn harness() -> (Spotlight, Skin) {
        (Spotlight::new(), Skin::builtin(SkinName::Carbon))
    }

    #[test]
    fn enter_opens_and_rearms_sequencer() {
        let (mut spotlight, skin) = harness();
        let mut dropdown =
            DropdownList::new(&mut spotlight, "Mode", entries(&["auto", "cool", "heat"]))
                .with_selected(2);

        // Steady state reached, then closed and reopened.
        dropdown.open();
        {
            let mut ctx = UiContext { spotlight: &mut spotlight, skin: &skin };
            dropdown.run_cycle(3, &mut ctx);
            dropdown.run_cycle(3, &mut ctx);
        }
        assert_eq!(dropdown.sync.ready(), ReadyState::Done);

        dropdown.close(&mut spotlight);
        {
            let mut ctx = UiContext { spotlight: &mut spotlight, skin: &skin };
            assert_eq!(dropdown.handle_key(key(KeyCode::Enter), &mut ctx), DropdownResult::Continue);
        }
        assert!(dropdown.is_open());
        assert_eq!(dropdown.sync.ready(), ReadyState::Init);
    }

    #[test]
    fn five_way_moves_focus_and_enter_selects() {
        let (mut spotlight, skin) = harness();
        let mut dropdown =
            DropdownList::new(&mut spotlight, "Fan", entries(&["low", "medium", "high"]));
        dropdown.open();

        let mut ctx = UiContext { spotlight: &mut spotlight, skin: &skin };
        dropdown.run_cycle(3, &mut ctx);
        dropdown.run_cycle(3, &mut ctx);

        dropdown.handle_key(key(KeyCode::Down), &mut ctx);
        dropdown.handle_key(key(KeyCode::Down), &mut ctx);
        let result = dropdown.handle_key(key(KeyCode::Enter), &mut ctx);

        assert_eq!(result, DropdownResult::Selected(2, Key::from("high")));
        assert!(!dropdown.is_open());
        assert_eq!(dropdown.selected(), Some(2));
    }

    #[test]
    fn focus_stays_clamped_at_list_edges() {
        let (mut spotlight, skin) = harness();
        let mut dropdown = DropdownList::new(&mut spotlight, "Fan", entries(&["low", "high"]));
        dropdown.open();

        let mut ctx = UiContext { spotlight: &mut spotlight, skin: &skin };
        dropdown.run_cycle(2, &mut ctx);
        dropdown.run_cycle(2, &mut ctx);

        dropdown.handle_key(key(KeyCode::Up), &mut ctx);
        let container = dropdown.container();
        assert_eq!(ctx.spotlight.focus_within(container), Some(0));

        for _ in 0..5 {
            dropdown.handle_key(key(KeyCode::Down), &mut ctx);
        }
        assert_eq!(ctx.spotlight.focus_within(container), Some(1));
    }

    #[test]
    fn esc_dismisses_without_selecting() {
        let (mut spotlight, skin) = harness();
        let mut dropdown = DropdownList::new(&mut spotlight, "Fan", entries(&["low", "high"]));
        dropdown.open();

        let mut ctx = UiContext { spotlight: &mut spotlight, skin: &skin };
        let result = dropdown.handle_key(key(KeyCode::Esc), &mut ctx);
        assert_eq!(result, DropdownResult::Dismissed);
        assert_eq!(dropdown.selected(), Some(0));
        assert!(!dropdown.is_open());
    }

    #[test]
    fn select_callback_receives_index_and_key() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let (mut spotlight, skin) = harness();
        let chosen: Rc<RefCell<Option<(usize, Key)>>> = Rc::new(RefCell::new(None));
        let sink = chosen.clone();
        let mut dropdown = DropdownList::new(&mut spotlight, "Fan", entries(&["low", "high"]))
            .on_select(Box::new(move |index, key| {
                *sink.borrow_mut() = Some((index, key.clone()));
            }));
        dropdown.open();

        let mut ctx = UiContext { spotlight: &mut spotlight, skin: &skin };
        dropdown.run_cycle(2, &mut ctx);
        dropdown.run_cycle(2, &mut ctx);
        dropdown.handle_key(key(KeyCode::Down), &mut ctx);
        dropdown.handle_key(key(KeyCode::Enter), &mut ctx);

        assert_eq!(*chosen.borrow(), Some((1, Key::from("high"))));
    }

    #[test]
    fn structural_change_while_open_resyncs_to_followed_key() {
        let (mut spotlight, skin) = harness();
        let mut dropdown =
            DropdownList::new(&mut spotlight, "Source", entries(&["am", "fm", "aux"]));
        dropdown.open();

        let mut ctx = UiContext { spotlight: &mut spotlight, skin: &skin };
        dropdown.run_cycle(3, &mut ctx);
        dropdown.run_cycle(3, &mut ctx);

        // User parks focus on 'aux', then 'am' disappears.
        dropdown.handle_key(key(KeyCode::Down), &mut ctx);
        dropdown.handle_key(key(KeyCode::Down), &mut ctx);
        dropdown.set_items(entries(&["fm", "aux"]));

        // Resync cycle, scroll cycle, focus cycle.
        dropdown.run_cycle(2, &mut ctx);
        dropdown.run_cycle(2, &mut ctx);
        dropdown.run_cycle(2, &mut ctx);

        let container = dropdown.container();
        assert_eq!(ctx.spotlight.focus_within(container), Some(1));
    }
}
