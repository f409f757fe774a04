//! Dashboard application state and the operations behind each key binding

mod link_operations;
mod navigation;
mod state;
mod validation;

pub use navigation::{DashboardRow, NAV_ENTRIES, dashboard_rows};
pub use state::{App, EditingField, Focus, Overlay};
