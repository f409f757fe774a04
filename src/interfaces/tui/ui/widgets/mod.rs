//! 可复用 UI 组件

mod input_field;
mod popup;
mod stat_card;
mod status_badge;

pub use input_field::InputField;
pub use popup::Popup;
pub use stat_card::{StatCard, draw_placeholder_panel};
pub use status_badge::StatusBadge;
