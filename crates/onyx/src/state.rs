/// Top-level tabs of the demo control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabId {
    #[default]
    Climate,
    Audio,
}

impl TabId {
    pub const ALL: [TabId; 2] = [TabId::Climate, TabId::Audio];

    pub fn name(self) -> &'static str {
        match self {
            TabId::Climate => "Climate",
            TabId::Audio => "Audio",
        }
    }

    pub fn index(self) -> usize {
        match self {
            TabId::Climate => 0,
            TabId::Audio => 1,
        }
    }
}

/// Mutable application state outside the widgets themselves.
#[derive(Debug, Default)]
pub struct AppState {
    pub active_tab: TabId,
    pub exit: bool,
}
