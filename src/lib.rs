//! Discuss - a terminal client for a forum's discussion list
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod router;
pub mod session;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
