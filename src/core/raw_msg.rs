use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::core::token::Token;

/// Raw messages from external sources (input, system)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    // User input (raw keyboard events)
    Key(KeyEvent),

    /// A token already resolved from pointer activation on the keypad.
    /// The host runner owns the keypad geometry, so mouse clicks arrive
    /// here pre-resolved rather than as raw coordinates.
    Token(Token),

    // System status
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}
