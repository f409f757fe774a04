//! User interfaces
//!
//! - `tui`: interactive terminal dashboard

#[cfg(feature = "tui")]
pub mod tui;
