//! In-memory state holder for link groups and view state
//!
//! - `models`: link groups, links and identifiers
//! - `state`: immutable state snapshot, views and modals
//! - `action`: commands understood by the store
//! - `holder`: the `Store`, the only mutation entry point
//! - `seed`: built-in sample data and JSON seed files

pub mod action;
mod holder;
pub mod models;
pub mod seed;
pub mod state;

pub use action::Action;
pub use holder::{Store, require_text};
pub use models::{GroupId, Link, LinkGroup, LinkId, LinkPatch, LinkRef, LinkStatus};
pub use state::{AppState, Modal, View};
