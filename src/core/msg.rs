use serde::{Deserialize, Serialize};
use strum::Display;

use crate::core::token::Token;

/// Elm-like message definitions
/// Represents events that occur within the application
#[derive(Debug, Clone, PartialEq, Serialize, Display, Deserialize)]
pub enum Msg {
    /// Calculator input, already resolved to a token by an adapter
    Token(Token),

    // System messages
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),

    // Error
    Error(String),
}
