use serde::{Deserialize, Serialize};

use crate::{core::token::Op, infrastructure::config::Config};

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub calc: CalcState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Calculator state: the display string plus the pending binary operation.
///
/// Invariants:
/// - `display` is never empty and holds at most one decimal point
/// - `operator` and `stored_operand` are set and cleared together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcState {
    /// The literal text shown to the user; a number-in-progress or a result.
    pub display: String,
    /// The pending binary operator awaiting a second operand.
    pub operator: Option<Op>,
    /// The first operand of the pending operation.
    pub stored_operand: Option<f64>,
    /// When set, the next digit starts a fresh number instead of appending.
    pub waiting_for_operand: bool,
}

impl Default for CalcState {
    fn default() -> Self {
        Self {
            display: String::from("0"),
            operator: None,
            stored_operand: None,
            waiting_for_operand: false,
        }
    }
}

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Self::default()
        }
    }
}
