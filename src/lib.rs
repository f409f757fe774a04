//! LinkFlow - a terminal dashboard for a URL-shortening service
//!
//! The library holds everything that does not need a terminal: the domain
//! model and its state holder, seed loading, the statistics seam,
//! configuration and logging. The ratatui front end lives behind the `tui`
//! feature.
//!
//! # Architecture
//! - `store`: link groups, view/selection/modal state and the transitions over them
//! - `stats`: placeholder statistics source
//! - `config`: configuration management
//! - `interfaces`: user interfaces (TUI)
//! - `system`: logging and panic handling

pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod stats;
pub mod store;
pub mod system;
pub mod utils;
