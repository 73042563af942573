//! postdash - a terminal dashboard for the JSONPlaceholder posts and users
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod aggregate;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
