use serde::{Deserialize, Serialize};

/// Elm-like command definitions
/// Represents side effects executed by the host runner. The calculator core
/// is pure, so the only side effect left is resizing the terminal backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    Resize { width: u16, height: u16 },
}
