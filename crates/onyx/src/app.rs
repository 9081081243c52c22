use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};
use tracing::info;

use onyx_core::Spotlight;

use crate::components::status_bar::StatusBar;
use crate::components::tab_bar::TabBar;
use crate::components::{Component, EventResult, UiContext};
use crate::event::{self, InputEvent};
use crate::screens::audio::AudioScreen;
use crate::screens::climate::ClimateScreen;
use crate::state::{AppState, TabId};
use crate::theme::Skin;

/// Poll timeout between render cycles; keeps the synchronizer's follow-up
/// cycles flowing without pegging a core.
const TICK: Duration = Duration::from_millis(50);

pub struct App {
    state: AppState,
    spotlight: Spotlight,
    skin: Skin,
    tab_bar: TabBar,
    status_bar: StatusBar,
    climate: ClimateScreen,
    audio: AudioScreen,
}

impl App {
    pub fn new(skin: Skin) -> Self {
        let mut spotlight = Spotlight::new();
        let climate = ClimateScreen::new(&mut spotlight);
        let audio = AudioScreen::new(&mut spotlight);

        Self {
            state: AppState::default(),
            spotlight,
            skin,
            tab_bar: TabBar::new(TabId::ALL.iter().map(|tab| tab.name().to_string()).collect()),
            status_bar: StatusBar::new(),
            climate,
            audio,
        }
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("control panel started");

        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }

        execute!(stdout(), DisableMouseCapture)?;
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame<'_>) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Tab bar
                Constraint::Min(1),    // Active screen
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        self.status_bar.set_hints(match self.state.active_tab {
            TabId::Climate => "↑/↓ panel · ←/→ adjust · Enter open/select · q quit",
            TabId::Audio => "↑/↓ panel · ←/→ adjust · Enter toggle/open · q quit",
        });

        let mut ctx = UiContext {
            spotlight: &mut self.spotlight,
            skin: &self.skin,
        };
        self.tab_bar.render(frame, chunks[0], &mut ctx);
        match self.state.active_tab {
            TabId::Climate => self.climate.render(frame, chunks[1], &mut ctx),
            TabId::Audio => self.audio.render(frame, chunks[1], &mut ctx),
        }
        self.status_bar.render(frame, chunks[2], &mut ctx);

        // Overlays paint last so open lists sit on top of everything.
        match self.state.active_tab {
            TabId::Climate => self.climate.render_overlays(frame, area, &mut ctx),
            TabId::Audio => self.audio.render_overlays(frame, area, &mut ctx),
        }
    }

    fn handle_events(&mut self) -> color_eyre::Result<()> {
        let input = event::next_event(TICK)?;
        event::note_input_mode(&input, &mut self.spotlight);

        match input {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Click { x, y } => self.handle_click(x, y),
            InputEvent::Wheel { delta } => self.handle_wheel(delta),
            InputEvent::Tick => {}
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.exit = true;
            return;
        }

        let mut ctx = UiContext {
            spotlight: &mut self.spotlight,
            skin: &self.skin,
        };
        let result = match self.state.active_tab {
            TabId::Climate => self.climate.handle_key(key, &mut ctx),
            TabId::Audio => self.audio.handle_key(key, &mut ctx),
        };
        match result {
            EventResult::Handled => return,
            EventResult::Exit => {
                self.state.exit = true;
                return;
            }
            EventResult::NotHandled => {}
        }

        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.state.exit = true;
            return;
        }

        if self.tab_bar.handle_key(key, &mut ctx) == EventResult::Handled {
            self.state.active_tab = TabId::ALL[self.tab_bar.selected()];
        }
    }

    fn handle_click(&mut self, x: u16, y: u16) {
        let mut ctx = UiContext {
            spotlight: &mut self.spotlight,
            skin: &self.skin,
        };
        match self.state.active_tab {
            TabId::Climate => self.climate.handle_click(x, y, &mut ctx),
            TabId::Audio => self.audio.handle_click(x, y, &mut ctx),
        };
    }

    fn handle_wheel(&mut self, delta: i32) {
        let mut ctx = UiContext {
            spotlight: &mut self.spotlight,
            skin: &self.skin,
        };
        match self.state.active_tab {
            TabId::Climate => self.climate.handle_wheel(delta, &mut ctx),
            TabId::Audio => self.audio.handle_wheel(delta, &mut ctx),
        };
    }
}
