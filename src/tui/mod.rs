//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the current
//! `ScreenView`, and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing on screen moves by itself, so the loop blocks on input for up to
//! 500ms and only redraws after an event (including a terminal resize).

mod component;
mod components;
mod event;
mod style;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::navigation::Screen;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CategoryEvent, DashboardEvent, DashboardState, ReviewEvent, ReviewKeys, TopicListState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
#[derive(Default)]
pub struct TuiState {
    pub dashboard: DashboardState,
    pub topics: TopicListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(catalog: Arc<dyn Catalog>, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(catalog, config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &mut tui);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let _terminal_mode_guard = TerminalModeGuard::new()?;
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(500))?;
        if first_event.is_none() {
            continue;
        }
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut pending = first_event;
        while let Some(event) = pending {
            if let Some(action) = handle_event(app, tui, event) {
                if update(app, action) == Effect::Quit {
                    info!("Quitting");
                    return Ok(());
                }
            }
            pending = poll_event_immediate()?;
        }
    }
}

/// Route a terminal event to the active screen and translate the result
/// into a core action.
fn handle_event(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    match event {
        // Resize just needs a redraw
        TuiEvent::Resize => return None,
        // ForceQuit (Ctrl+C) always quits regardless of screen
        TuiEvent::ForceQuit => return Some(Action::Quit),
        _ => {}
    }

    match app.navigation.screen() {
        Screen::Dashboard => {
            let categories = app.catalog.categories();
            tui.dashboard.set_len(categories.len());
            match tui.dashboard.handle_event(&event)? {
                DashboardEvent::Open(index) => {
                    let category = categories.get(index)?.clone();
                    // Each category starts with the first topic selected
                    tui.topics = TopicListState::new();
                    Some(Action::SelectCategory(category))
                }
                DashboardEvent::Quit => Some(Action::Quit),
            }
        }
        Screen::CategoryDetail { category } => {
            let topics = app.catalog.topics(category);
            tui.topics.set_len(topics.len());
            match tui.topics.handle_event(&event)? {
                CategoryEvent::StartReview(index) => {
                    let topic = topics.get(index)?.clone();
                    debug!("Starting review of '{}'", topic.title);
                    Some(Action::SelectTopic(topic))
                }
                CategoryEvent::Back => Some(Action::GoBackToDashboard),
            }
        }
        Screen::ReviewSession(_) => match ReviewKeys.handle_event(&event)? {
            ReviewEvent::Back => Some(Action::GoBackToCategory),
            ReviewEvent::Next => Some(Action::NextQuestion),
            ReviewEvent::Previous => Some(Action::PreviousQuestion),
            ReviewEvent::ToggleHints => Some(Action::ToggleHints),
            ReviewEvent::ToggleAnswer => Some(Action::ToggleAnswer),
        },
    }
}
