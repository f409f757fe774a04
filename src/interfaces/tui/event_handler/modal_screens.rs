//! Event handlers for the edit and delete modals

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::App;
use crate::store::Modal;

pub fn handle_modal_screen(app: &mut App, key_code: KeyCode) {
    let is_delete = app.state().modal.as_ref().is_some_and(Modal::is_delete);
    if is_delete {
        handle_delete_confirm(app, key_code);
    } else {
        handle_edit_form(app, key_code);
    }
}

fn handle_edit_form(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Enter => app.submit_modal(),
        KeyCode::Esc => app.cancel_modal(),
        KeyCode::Tab | KeyCode::BackTab => app.next_field(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Char(c) => app.input_char(c),
        _ => {}
    }
}

fn handle_delete_confirm(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.submit_modal(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_modal(),
        _ => {}
    }
}
