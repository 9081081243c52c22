//! Synchronizer driven the way a widget adapter drives it: the spotlight
//! manager supplies the input flags and the focus owner, and every effect is
//! executed against it.

use crate::item::Entry;
use crate::spotlight::{ContainerRule, EnterTo, FocusTarget, Spotlight};
use crate::sync::{Effect, ListSync, ReadyState, UpdateContext};

fn items(keys: &[&str]) -> Vec<Entry> {
    keys.iter().map(|k| Entry::new(*k, k.to_uppercase())).collect()
}

struct Harness {
    spotlight: Spotlight,
    container: crate::spotlight::ContainerId,
    sync: ListSync<Entry>,
    scrolled_to: Vec<usize>,
}

impl Harness {
    fn new(list: &[Entry], selected: Option<usize>) -> Self {
        let mut spotlight = Spotlight::new();
        let container = spotlight.register(ContainerRule {
            enter_to: EnterTo::DefaultElement,
            self_only: true,
        });
        Self {
            spotlight,
            container,
            sync: ListSync::new(list, selected),
            scrolled_to: Vec::new(),
        }
    }

    /// One render pass: run the transition function, execute the returned
    /// commands.
    fn cycle(&mut self, list: &[Entry], selected: Option<usize>) {
        let ctx = UpdateContext {
            items: list,
            selected,
            input: self.spotlight.input_mode(),
            focus_within: self.spotlight.focus_within(self.container),
        };
        for effect in self.sync.on_update(&ctx) {
            match effect {
                Effect::ScrollIntoView(index) => self.scrolled_to.push(index),
                Effect::FocusIndex(index)
                | Effect::RevealSelected(index) => self.spotlight.set_current(Some(FocusTarget {
                    container: self.container,
                    index,
                })),
                Effect::RevealFirst => self.spotlight.set_current(Some(FocusTarget {
                    container: self.container,
                    index: 0,
                })),
            }
        }
    }

    fn focused(&self) -> Option<usize> {
        self.spotlight.focus_within(self.container)
    }
}

#[test]
fn mount_lands_focus_on_selection() {
    let list = items(&["low", "medium", "high"]);
    let mut h = Harness::new(&list, Some(2));

    h.cycle(&list, Some(2));
    h.cycle(&list, Some(2));

    assert_eq!(h.scrolled_to, vec![2]);
    assert_eq!(h.focused(), Some(2));
    assert_eq!(h.sync.ready(), ReadyState::Done);
}

#[test]
fn reveal_correction_restores_dropped_focus() {
    let list = items(&["low", "medium", "high"]);
    let mut h = Harness::new(&list, Some(1));
    h.cycle(&list, Some(1));
    h.cycle(&list, Some(1));
    assert_eq!(h.focused(), Some(1));

    // Something else steals focus (sibling widget).
    h.spotlight.set_current(None);
    h.cycle(&list, Some(1));
    assert_eq!(h.focused(), Some(1));
}

#[test]
fn pointer_mode_suppresses_reveal() {
    let list = items(&["low", "medium", "high"]);
    let mut h = Harness::new(&list, Some(1));
    h.cycle(&list, Some(1));
    h.cycle(&list, Some(1));

    h.spotlight.set_current(None);
    h.spotlight.set_pointer_mode(true);
    h.cycle(&list, Some(1));
    assert_eq!(h.focused(), None);

    // Back to 5-way navigation: the correction fires on the next cycle.
    h.spotlight.set_pointer_mode(false);
    h.cycle(&list, Some(1));
    assert_eq!(h.focused(), Some(1));
}

#[test]
fn focus_memory_recorded_through_spotlight_flags() {
    let list = items(&["low", "medium", "high"]);
    let mut h = Harness::new(&list, Some(0));
    h.cycle(&list, Some(0));
    h.cycle(&list, Some(0));

    // 5-way move to index 2, reported to the rebinder.
    h.spotlight.set_current(Some(FocusTarget {
        container: h.container,
        index: 2,
    }));
    let ctx = UpdateContext {
        items: &list,
        selected: Some(0),
        input: h.spotlight.input_mode(),
        focus_within: h.spotlight.focus_within(h.container),
    };
    h.sync.on_focus(2, &ctx);

    // Items reordered; remembered key 'high' now lives at index 0.
    let reordered = items(&["high", "low", "medium"]);
    h.cycle(&reordered, Some(1));
    h.cycle(&reordered, Some(1));
    h.cycle(&reordered, Some(1));

    assert_eq!(h.scrolled_to.last(), Some(&0));
    assert_eq!(h.focused(), Some(0));
}
