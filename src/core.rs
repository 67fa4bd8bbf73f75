//! Core Elm architecture implementation
//!
//! This module contains the core components of the Elm architecture:
//! - Tokens, messages and raw messages
//! - Application state management
//! - Update logic and the input-dispatch state machine
//! - Message translation layer

pub mod cmd;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod token;
pub mod translator;
pub mod update;
