//! Event handlers for overlays: copy notice, exit confirmation, help

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::App;

/// 复制提示必须确认后才能继续其他操作
pub fn handle_copy_notice(app: &mut App, key_code: KeyCode) -> bool {
    if matches!(key_code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.acknowledge_notice();
    }
    false
}

pub fn handle_exiting_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => return true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc | KeyCode::Char('q') => {
            app.overlay = None;
        }
        _ => {}
    }
    false
}

pub fn handle_help_screen(app: &mut App, key_code: KeyCode) -> bool {
    if matches!(
        key_code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter
    ) {
        app.overlay = None;
    }
    false
}
