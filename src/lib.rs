//! # Calcui - Terminal Calculator
//!
//! A basic arithmetic calculator for the terminal, built with Ratatui.
//! This library implements an Elm-like architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): Application state, including the calculator state
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects executed by the host runner
//! - **View** (`presentation::components`): UI rendering based on current state
//!
//! The calculator itself is a single pure transition function:
//! [`core::update::process_token`] consumes one input [`core::token::Token`]
//! and produces the next calculator state. Everything else is plumbing that
//! turns key presses and mouse clicks into tokens and re-renders the display.
//!
//! ## Example Usage
//!
//! ```rust
//! use calcui::{CalcState, Token, process_token};
//!
//! let state = CalcState::default();
//! let state = process_token(state, Token::Digit(5));
//! assert_eq!(state.display, "5");
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Messages, state, tokens and the pure update functions
//! - [`presentation`] - Stateless UI components
//! - [`infrastructure`] - CLI, configuration and terminal runtime
//! - [`app`] - The host runner driving the event loop
//! - [`utils`] - Logging, panic handling and path helpers

#![deny(warnings)]
#![allow(dead_code)]

pub mod app;
pub mod core;
pub mod infrastructure;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::msg::Msg;
pub use crate::core::raw_msg::RawMsg;
pub use crate::core::state::{AppState, CalcState};
pub use crate::core::token::{Op, Token};
pub use crate::core::translator::translate_raw_to_domain;
pub use crate::core::update::{process_token, update};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
