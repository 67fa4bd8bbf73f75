//! Display component
//!
//! Renders the calculator display string, right-aligned like a desk
//! calculator. Pure, stateless component.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

#[derive(Debug, Clone)]
pub struct DisplayComponent;

impl DisplayComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let style = state
            .config
            .config
            .styles
            .get("display")
            .copied()
            .unwrap_or_default();

        let display = Paragraph::new(state.calc.display.as_str())
            .style(style)
            .right_aligned()
            .block(Block::bordered());
        frame.render_widget(display, area);
    }
}

impl Default for DisplayComponent {
    fn default() -> Self {
        Self::new()
    }
}
