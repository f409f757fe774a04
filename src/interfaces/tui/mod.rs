//! Terminal User Interface (TUI) module
//!
//! Interactive dashboard over the link groups held by a [`Store`].

use std::io::{self, Write};

use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{debug, error};

mod app;
pub mod clipboard;
mod constants;
mod event_handler;
mod ui;

pub use app::{App, DashboardRow, EditingField, Focus, Overlay, dashboard_rows};
pub use event_handler::handle_key_event;
pub use ui::ui;

use crate::config::UiConfig;
use crate::errors::{LinkflowError, Result};
use crate::store::Store;

/// Run the TUI application
pub fn run_tui(store: Store, ui_config: &UiConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode().map_err(terminal_error)?;
    let mut stderr = io::stderr();
    enter_screen(&mut stderr)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend).map_err(terminal_error)?;

    let mut app = App::new(store, ui_config);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().map_err(terminal_error)?;
    leave_screen(terminal.backend_mut())?;
    terminal.show_cursor().map_err(terminal_error)?;

    if let Err(err) = &res {
        error!("Dashboard loop failed: {}", err);
    }
    res
}

/// Switch to the alternate screen
///
/// Mouse capture stays off so the terminal keeps native text selection.
fn enter_screen<W: Write>(out: &mut W) -> Result<()> {
    execute!(out, EnterAlternateScreen).map_err(terminal_error)
}

fn leave_screen<W: Write>(out: &mut W) -> Result<()> {
    execute!(out, LeaveAlternateScreen).map_err(terminal_error)
}

fn terminal_error(e: impl std::fmt::Display) -> LinkflowError {
    LinkflowError::terminal(e.to_string())
}

/// Main application loop
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app)).map_err(terminal_error)?;

        if let Event::Key(key) = event::read().map_err(terminal_error)? {
            // Windows 会同时上报按下和释放事件
            if key.kind != KeyEventKind::Press {
                continue;
            }
            debug!("Key pressed: {:?}", key.code);
            if handle_key_event(app, key.code) {
                return Ok(());
            }
        }
    }
}
