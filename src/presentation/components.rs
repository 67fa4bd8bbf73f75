//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::{layout::Position, prelude::*};

use crate::core::{state::AppState, token::Token};

pub mod display;
pub mod keypad;
pub mod status_bar;

pub use display::DisplayComponent;
pub use keypad::KeypadComponent;
pub use status_bar::StatusBarComponent;

/// Screen regions: display on top, keypad in the middle, status bar below.
pub struct AppLayout {
    pub display: Rect,
    pub keypad: Rect,
    pub status_bar: Rect,
}

/// Split the frame area into the application regions. Pure function of the
/// area, so pointer hit-testing can recompute the exact same split.
pub fn layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3), // Display
            Constraint::Min(0),    // Keypad
            Constraint::Length(2), // Status bar (2 rows)
        ])
        .split(area);

    AppLayout {
        display: chunks[0],
        keypad: chunks[1],
        status_bar: chunks[2],
    }
}

/// Collection of all components
pub struct Components {
    pub display: DisplayComponent,
    pub keypad: KeypadComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    /// Create a new component collection
    pub fn new() -> Self {
        Self {
            display: DisplayComponent::new(),
            keypad: KeypadComponent::new(),
            status_bar: StatusBarComponent::new(),
        }
    }

    /// Render all components
    ///
    /// This is the main rendering entry point that delegates to individual components.
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let chunks = layout(frame.area());

        self.display.view(state, frame, chunks.display);
        self.keypad.view(state, frame, chunks.keypad);
        self.status_bar.view(state, frame, chunks.status_bar);
    }

    /// Resolve a pointer activation anywhere on the screen into a keypad
    /// token, or `None` when the position misses every button.
    pub fn hit_test(area: Rect, position: Position) -> Option<Token> {
        keypad::hit_test(layout(area).keypad, position)
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}
