//! Keypad component
//!
//! Renders the button grid and resolves pointer activations back into
//! tokens. The grid mirrors a desk calculator: a function row on top,
//! digits in the middle, operators down the right edge, and a
//! double-width zero at the bottom left.

use ratatui::{layout::Position, prelude::*, widgets::*};

use crate::core::{
    state::AppState,
    token::{Op, Token},
};

/// Visual class of a button, used to look up its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonClass {
    Number,
    Operator,
    Function,
}

impl ButtonClass {
    pub fn style_key(self) -> &'static str {
        match self {
            ButtonClass::Number => "button_number",
            ButtonClass::Operator => "button_operator",
            ButtonClass::Function => "button_function",
        }
    }
}

/// One labeled control. `span` is the width in grid cells out of 4.
#[derive(Debug, Clone, Copy)]
pub struct Button {
    pub label: &'static str,
    pub token: Token,
    pub class: ButtonClass,
    pub span: u32,
}

const fn button(label: &'static str, token: Token, class: ButtonClass) -> Button {
    Button {
        label,
        token,
        class,
        span: 1,
    }
}

/// The keypad: 4 columns, 5 rows.
pub const GRID: [&[Button]; 5] = [
    &[
        button("AC", Token::Clear, ButtonClass::Function),
        button("+/-", Token::Negate, ButtonClass::Function),
        button("%", Token::Percent, ButtonClass::Function),
        button("÷", Token::Op(Op::Divide), ButtonClass::Operator),
    ],
    &[
        button("7", Token::Digit(7), ButtonClass::Number),
        button("8", Token::Digit(8), ButtonClass::Number),
        button("9", Token::Digit(9), ButtonClass::Number),
        button("×", Token::Op(Op::Multiply), ButtonClass::Operator),
    ],
    &[
        button("4", Token::Digit(4), ButtonClass::Number),
        button("5", Token::Digit(5), ButtonClass::Number),
        button("6", Token::Digit(6), ButtonClass::Number),
        button("−", Token::Op(Op::Subtract), ButtonClass::Operator),
    ],
    &[
        button("1", Token::Digit(1), ButtonClass::Number),
        button("2", Token::Digit(2), ButtonClass::Number),
        button("3", Token::Digit(3), ButtonClass::Number),
        button("+", Token::Op(Op::Add), ButtonClass::Operator),
    ],
    &[
        Button {
            label: "0",
            token: Token::Digit(0),
            class: ButtonClass::Number,
            span: 2,
        },
        button(".", Token::Decimal, ButtonClass::Number),
        button("=", Token::Equals, ButtonClass::Operator),
    ],
];

fn row_areas(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::vertical([Constraint::Ratio(1, 5); 5]).split(area)
}

fn button_areas(row: &[Button], area: Rect) -> std::rc::Rc<[Rect]> {
    let constraints: Vec<Constraint> = row.iter().map(|b| Constraint::Ratio(b.span, 4)).collect();
    Layout::horizontal(constraints).split(area)
}

/// Resolve a pointer position within the keypad area to a token.
pub fn hit_test(area: Rect, position: Position) -> Option<Token> {
    for (row, row_area) in GRID.iter().zip(row_areas(area).iter()) {
        for (btn, rect) in row.iter().zip(button_areas(row, *row_area).iter()) {
            if rect.contains(position) {
                return Some(btn.token);
            }
        }
    }
    None
}

#[derive(Debug, Clone)]
pub struct KeypadComponent;

impl KeypadComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        for (row, row_area) in GRID.iter().zip(row_areas(area).iter()) {
            for (btn, rect) in row.iter().zip(button_areas(row, *row_area).iter()) {
                let style = state
                    .config
                    .config
                    .styles
                    .get(btn.class.style_key())
                    .copied()
                    .unwrap_or_default();

                let widget = Paragraph::new(btn.label)
                    .style(style)
                    .centered()
                    .block(Block::bordered());
                frame.render_widget(widget, *rect);
            }
        }
    }
}

impl Default for KeypadComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_grid_covers_full_token_vocabulary() {
        let tokens: Vec<Token> = GRID.iter().flat_map(|row| row.iter()).map(|b| b.token).collect();
        assert_eq!(tokens.len(), 19);
        for d in 0..=9u8 {
            assert!(tokens.contains(&Token::Digit(d)));
        }
        for op in [Op::Add, Op::Subtract, Op::Multiply, Op::Divide] {
            assert!(tokens.contains(&Token::Op(op)));
        }
        for token in [
            Token::Clear,
            Token::Negate,
            Token::Percent,
            Token::Decimal,
            Token::Equals,
        ] {
            assert!(tokens.contains(&token));
        }
    }

    #[test]
    fn test_grid_rows_span_four_cells() {
        for row in GRID {
            let total: u32 = row.iter().map(|b| b.span).sum();
            assert_eq!(total, 4);
        }
    }

    #[test]
    fn test_hit_test_finds_every_button() {
        let area = Rect::new(0, 0, 40, 20);
        for (row, row_area) in GRID.iter().zip(row_areas(area).iter()) {
            for (btn, rect) in row.iter().zip(button_areas(row, *row_area).iter()) {
                let center = Position::new(rect.x + rect.width / 2, rect.y + rect.height / 2);
                assert_eq!(hit_test(area, center), Some(btn.token));
            }
        }
    }

    #[test]
    fn test_hit_test_outside_misses() {
        let area = Rect::new(0, 0, 40, 20);
        assert_eq!(hit_test(area, Position::new(50, 50)), None);
    }
}
