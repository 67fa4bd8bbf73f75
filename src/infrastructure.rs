//! Infrastructure layer
//!
//! This module contains the pieces that talk to the outside world:
//! - Command-line interface
//! - Configuration loading
//! - Terminal (TUI) runtime

pub mod cli;
pub mod config;
pub mod tui;
