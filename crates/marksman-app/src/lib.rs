//! MARKSMAN host application.
//!
//! Runs the simulation engine on its own thread, feeds it scripted or live
//! input, and reports HUD changes through the log.

pub mod config;
pub mod error;
pub mod game_loop;
pub mod logging;
pub mod script;
pub mod state;

pub use marksman_core as core;
