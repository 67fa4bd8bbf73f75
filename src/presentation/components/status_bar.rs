//! Status bar component
//!
//! Displays the pending operation (or a transient status message) on the
//! first line and key hints on the second. Pure, stateless component.

use ratatui::{prelude::*, widgets::*};

use crate::core::{state::AppState, update::format_value};

const KEY_HINTS: &str = "0-9 . + - * / % =  ·  enter: equals  backspace  esc: clear  ctrl-c: quit";

#[derive(Debug, Clone)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render the status bar
    ///
    /// This renders two lines:
    /// 1. Pending operation (or transient status message)
    /// 2. Key hints
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Length(1), Constraint::Length(1)],
        )
        .split(area);

        let style = state
            .config
            .config
            .styles
            .get("status_bar")
            .copied()
            .unwrap_or_default();

        frame.render_widget(Clear, layout[0]);
        frame.render_widget(Clear, layout[1]);

        let pending = Paragraph::new(self.pending_line(state)).style(style);
        frame.render_widget(pending, layout[0]);

        let hints = Paragraph::new(KEY_HINTS).style(style);
        frame.render_widget(hints, layout[1]);
    }

    /// First status line: a transient message takes precedence, otherwise
    /// the pending operation awaiting its second operand.
    pub fn pending_line(&self, state: &AppState) -> String {
        if let Some(message) = &state.system.status_message {
            return message.clone();
        }

        match (state.calc.operator, state.calc.stored_operand) {
            (Some(op), Some(operand)) => format!("{} {}", format_value(operand), op.symbol()),
            _ => String::new(),
        }
    }
}

impl Default for StatusBarComponent {
    fn default() -> Self {
        Self::new()
    }
}
