//! Spatial-navigation ("spotlight") manager.
//!
//! Holds the process-wide input state the synchronizer needs: whether focus
//! is currently pointer-driven, whether focus moves are paused, which widget
//! subtree owns the focus ring, and the per-container entry rules registered
//! at widget mount. The manager is an ordinary value owned by the
//! application; widgets receive it explicitly and the synchronizer only ever
//! sees an [`InputMode`] snapshot taken from it.

use rustc_hash::FxHashMap;

use crate::sync::InputMode;

/// Identifier of a registered spotlight container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(u32);

/// How focus enters a container when navigation lands on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnterTo {
    /// Enter on the container's default element (its selected item).
    #[default]
    DefaultElement,
    /// Enter on whichever element last held focus inside the container.
    LastFocused,
}

/// Entry rule a container registers at mount.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainerRule {
    pub enter_to: EnterTo,
    /// Keep 5-way navigation confined to the container while it is active
    /// (an open dropdown list traps focus this way).
    pub self_only: bool,
}

/// The focus ring's current owner: an item index inside a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTarget {
    pub container: ContainerId,
    pub index: usize,
}

/// Spatial-navigation state shared by all widgets of one application.
#[derive(Debug, Default)]
pub struct Spotlight {
    pointer_mode: bool,
    paused: bool,
    current: Option<FocusTarget>,
    containers: FxHashMap<ContainerId, ContainerRule>,
    next_id: u32,
}

impl Spotlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a container and its entry rule; called once at widget mount.
    pub fn register(&mut self, rule: ContainerRule) -> ContainerId {
        let id = ContainerId(self.next_id);
        self.next_id += 1;
        self.containers.insert(id, rule);
        id
    }

    /// Replace a container's entry rule.
    pub fn set_rule(&mut self, id: ContainerId, rule: ContainerRule) {
        if let Some(existing) = self.containers.get_mut(&id) {
            *existing = rule;
        }
    }

    pub fn rule(&self, id: ContainerId) -> Option<ContainerRule> {
        self.containers.get(&id).copied()
    }

    /// Remove a container; any focus it held is dropped with it.
    pub fn unregister(&mut self, id: ContainerId) {
        self.containers.remove(&id);
        if self.current.is_some_and(|target| target.container == id) {
            self.current = None;
        }
    }

    pub fn set_pointer_mode(&mut self, pointer: bool) {
        self.pointer_mode = pointer;
    }

    pub fn pointer_mode(&self) -> bool {
        self.pointer_mode
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Move the focus ring. Ignored while paused; unregistered containers
    /// cannot take focus.
    pub fn set_current(&mut self, target: Option<FocusTarget>) {
        if self.paused {
            return;
        }
        match target {
            Some(t) if !self.containers.contains_key(&t.container) => {}
            _ => self.current = target,
        }
    }

    pub fn current(&self) -> Option<FocusTarget> {
        self.current
    }

    /// The focused index inside `container`, if that container owns focus.
    pub fn focus_within(&self, container: ContainerId) -> Option<usize> {
        self.current
            .filter(|target| target.container == container)
            .map(|target| target.index)
    }

    /// Snapshot of the input flags for one synchronizer update cycle.
    pub fn input_mode(&self) -> InputMode {
        InputMode {
            pointer: self.pointer_mode,
            paused: self.paused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_allocates_distinct_ids() {
        let mut spotlight = Spotlight::new();
        let a = spotlight.register(ContainerRule::default());
        let b = spotlight.register(ContainerRule {
            enter_to: EnterTo::LastFocused,
            self_only: true,
        });
        assert_ne!(a, b);
        assert_eq!(spotlight.rule(a).map(|r| r.self_only), Some(false));
        assert_eq!(spotlight.rule(b).map(|r| r.self_only), Some(true));
    }

    #[test]
    fn focus_within_filters_by_container() {
        let mut spotlight = Spotlight::new();
        let a = spotlight.register(ContainerRule::default());
        let b = spotlight.register(ContainerRule::default());

        spotlight.set_current(Some(FocusTarget { container: a, index: 3 }));
        assert_eq!(spotlight.focus_within(a), Some(3));
        assert_eq!(spotlight.focus_within(b), None);
    }

    #[test]
    fn pause_blocks_focus_writes() {
        let mut spotlight = Spotlight::new();
        let id = spotlight.register(ContainerRule::default());

        spotlight.pause();
        spotlight.set_current(Some(FocusTarget { container: id, index: 0 }));
        assert_eq!(spotlight.current(), None);

        spotlight.resume();
        spotlight.set_current(Some(FocusTarget { container: id, index: 0 }));
        assert_eq!(spotlight.focus_within(id), Some(0));
    }

    #[test]
    fn unregister_drops_owned_focus() {
        let mut spotlight = Spotlight::new();
        let id = spotlight.register(ContainerRule::default());
        spotlight.set_current(Some(FocusTarget { container: id, index: 1 }));

        spotlight.unregister(id);
        assert_eq!(spotlight.current(), None);
        assert!(spotlight.rule(id).is_none());
    }

    #[test]
    fn unknown_container_cannot_take_focus() {
        let mut spotlight = Spotlight::new();
        let id = spotlight.register(ContainerRule::default());
        spotlight.unregister(id);

        spotlight.set_current(Some(FocusTarget { container: id, index: 0 }));
        assert_eq!(spotlight.current(), None);
    }

    #[test]
    fn input_mode_mirrors_flags() {
        let mut spotlight = Spotlight::new();
        assert_eq!(spotlight.input_mode(), InputMode::default());

        spotlight.set_pointer_mode(true);
        spotlight.pause();
        let mode = spotlight.input_mode();
        assert!(mode.pointer);
        assert!(mode.paused);
    }
}
