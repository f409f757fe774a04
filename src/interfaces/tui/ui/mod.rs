// UI submodules
mod common;
mod copy_notice;
mod dashboard;
mod delete_confirm;
mod edit_group;
mod edit_link;
mod exiting;
mod global_stats;
mod help;
mod key_stats;
mod sidebar;
mod stub_view;
pub mod widgets;

pub use common::{draw_footer, draw_header, draw_status_bar};
pub use copy_notice::draw_copy_notice_screen;
pub use dashboard::draw_dashboard;
pub use delete_confirm::draw_delete_confirm_screen;
pub use edit_group::draw_edit_group_screen;
pub use edit_link::draw_edit_link_screen;
pub use exiting::draw_exiting_screen;
pub use global_stats::draw_global_stats;
pub use help::draw_help_screen;
pub use key_stats::draw_key_stats;
pub use sidebar::draw_sidebar;
pub use stub_view::draw_stub_view;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::app::{App, Overlay};
use super::constants::{SIDEBAR_RAIL_WIDTH, SIDEBAR_WIDTH};
use crate::store::{Modal, View};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    let sidebar_width = if app.state().sidebar_open {
        SIDEBAR_WIDTH
    } else {
        SIDEBAR_RAIL_WIDTH
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(20)])
        .split(frame.area());

    draw_sidebar(frame, app, columns[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Active view
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(columns[1]);

    draw_header(frame, app, main_chunks[0]);

    // View dispatcher
    let view = app.state().view;
    match view {
        View::Dashboard => draw_dashboard(frame, app, main_chunks[1]),
        View::GlobalStats => draw_global_stats(frame, app, main_chunks[1]),
        View::KeyStats => {
            // 没有仍然存在的选中链接时不渲染详情
            if let Some(link) = app.store.selected_link().cloned() {
                draw_key_stats(frame, app, &link, main_chunks[1]);
            }
        }
        View::AllLinks | View::Settings => draw_stub_view(frame, view, main_chunks[1]),
    }

    draw_status_bar(frame, app, main_chunks[2]);
    draw_footer(frame, app, main_chunks[3]);

    // Modal layer
    let area = frame.area();
    if let Some(modal) = app.state().modal.clone() {
        match &modal {
            Modal::EditGroup(group) => draw_edit_group_screen(frame, app, group, area),
            Modal::EditLink { link, .. } => draw_edit_link_screen(frame, app, link, area),
            Modal::DeleteGroup(_) | Modal::DeleteLink { .. } => {
                draw_delete_confirm_screen(frame, &modal, area)
            }
        }
    }

    // Overlays sit above everything, the copy notice blocks all input
    match &app.overlay {
        Some(Overlay::Help) => draw_help_screen(frame, area),
        Some(Overlay::Exiting) => draw_exiting_screen(frame, area),
        Some(Overlay::CopyNotice(text)) => draw_copy_notice_screen(frame, text, area),
        None => {}
    }
}
