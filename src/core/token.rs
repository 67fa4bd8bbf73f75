use serde::{Deserialize, Serialize};
use strum::Display;

/// One of the four binary operations the calculator supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, Deserialize)]
pub enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Op {
    /// Apply the operation with plain IEEE-754 semantics.
    /// Division by zero is not trapped; it yields an infinite or NaN result.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Op::Add => a + b,
            Op::Subtract => a - b,
            Op::Multiply => a * b,
            Op::Divide => a / b,
        }
    }

    /// Symbol shown on the keypad and in the pending-operation line.
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Subtract => "−",
            Op::Multiply => "×",
            Op::Divide => "÷",
        }
    }
}

/// A discrete unit of user input consumed by the dispatcher.
///
/// This is a closed enumeration: both input adapters (keyboard and keypad
/// clicks) can only ever emit these variants, so the dispatcher is total
/// over its input and an unmapped key can never fall through to some
/// default handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, Deserialize)]
pub enum Token {
    /// A digit 0-9. Values above 9 are never produced by the adapters.
    Digit(u8),
    /// The decimal point.
    Decimal,
    /// `AC`: reset to the initial state.
    Clear,
    /// Drop the last character of the display.
    Backspace,
    /// `+/-`: toggle the sign of the display.
    Negate,
    /// `%`: divide the display by 100.
    Percent,
    /// A binary operator, awaiting a second operand.
    Op(Op),
    /// `=`: apply the pending operation, if any.
    Equals,
}

impl Token {
    /// Digit token from an ASCII digit character.
    pub fn digit(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self::Digit(d as u8))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_digit_from_char() {
        assert_eq!(Token::digit('0'), Some(Token::Digit(0)));
        assert_eq!(Token::digit('9'), Some(Token::Digit(9)));
        assert_eq!(Token::digit('a'), None);
        assert_eq!(Token::digit('.'), None);
    }

    #[test]
    fn test_apply() {
        assert_eq!(Op::Add.apply(5.0, 3.0), 8.0);
        assert_eq!(Op::Subtract.apply(5.0, 3.0), 2.0);
        assert_eq!(Op::Multiply.apply(5.0, 3.0), 15.0);
        assert_eq!(Op::Divide.apply(6.0, 3.0), 2.0);
    }

    #[test]
    fn test_apply_division_by_zero_is_not_trapped() {
        assert!(Op::Divide.apply(1.0, 0.0).is_infinite());
        assert!(Op::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_token_serialization() {
        let token = Token::Op(Op::Multiply);
        let serialized = serde_json::to_string(&token).unwrap();
        let deserialized: Token = serde_json::from_str(&serialized).unwrap();
        assert_eq!(token, deserialized);
    }
}
