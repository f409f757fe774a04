//! Event handling for TUI
//!
//! Handles keyboard events and delegates to appropriate handlers
//!
//! Priority order: overlays (copy notice, exit confirmation, help), then the
//! open modal, then whichever region holds focus.

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, Focus, Overlay};

mod dashboard;
mod modal_screens;
mod overlay_screens;

use dashboard::*;
use modal_screens::*;
use overlay_screens::*;

/// Handle keyboard input; returns `true` when the application should exit
pub fn handle_key_event(app: &mut App, key_code: KeyCode) -> bool {
    if let Some(overlay) = app.overlay.clone() {
        return match overlay {
            Overlay::CopyNotice(_) => handle_copy_notice(app, key_code),
            Overlay::Exiting => handle_exiting_screen(app, key_code),
            Overlay::Help => handle_help_screen(app, key_code),
        };
    }

    if app.state().modal.is_some() {
        handle_modal_screen(app, key_code);
        return false;
    }

    match app.focus {
        Focus::Sidebar => handle_sidebar(app, key_code),
        Focus::Main => handle_main_view(app, key_code),
    }
}
