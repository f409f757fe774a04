//! Event handlers for the navigation shell and the main views

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, Focus, NAV_ENTRIES, Overlay};
use crate::store::View;

/// Keys shared by every view while nothing is layered on top
///
/// Returns `true` when the key was consumed.
fn handle_global_keys(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.overlay = Some(Overlay::Exiting),
        KeyCode::Char('?') => app.overlay = Some(Overlay::Help),
        KeyCode::Char('b') | KeyCode::Char('B') => app.toggle_sidebar(),
        KeyCode::Char('n') | KeyCode::Char('N') => app.create_link_stub(),
        KeyCode::Char('/') => app.search_stub(),
        KeyCode::Tab => app.toggle_focus(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            if index < NAV_ENTRIES.len() {
                app.navigate_to_entry(index);
            }
        }
        _ => return false,
    }
    true
}

pub fn handle_sidebar(app: &mut App, key_code: KeyCode) -> bool {
    if handle_global_keys(app, key_code) {
        return false;
    }
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => app.sidebar_up(),
        KeyCode::Down | KeyCode::Char('j') => app.sidebar_down(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.navigate_to_entry(app.sidebar_index);
            app.focus = Focus::Main;
        }
        KeyCode::Esc | KeyCode::Right => app.focus = Focus::Main,
        _ => {}
    }
    false
}

pub fn handle_main_view(app: &mut App, key_code: KeyCode) -> bool {
    if handle_global_keys(app, key_code) {
        return false;
    }
    match app.state().view {
        View::Dashboard => handle_dashboard(app, key_code),
        View::KeyStats => {
            if matches!(key_code, KeyCode::Esc | KeyCode::Backspace) {
                app.navigate_to(View::Dashboard);
            }
        }
        View::GlobalStats | View::AllLinks | View::Settings => {
            if key_code == KeyCode::Left {
                app.focus = Focus::Sidebar;
            }
        }
    }
    false
}

fn handle_dashboard(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => app.move_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => app.move_cursor_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_row(),
        KeyCode::Char('e') | KeyCode::Char('E') => app.open_edit_for_row(),
        KeyCode::Char('d') | KeyCode::Char('D') => app.open_delete_for_row(),
        KeyCode::Char('c') | KeyCode::Char('y') => app.copy_row_link(),
        KeyCode::Left => app.focus = Focus::Sidebar,
        KeyCode::Esc => app.clear_messages(),
        _ => {}
    }
}
