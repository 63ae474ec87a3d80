//! Terminal profile card viewer for a mobile-game companion tool.
//!
//! Loads a player's roster, profile and social handles, then shows them in
//! a modal profile dialog.

pub mod config;
pub mod data;
pub mod logging;
pub mod profile;
pub mod ui;
