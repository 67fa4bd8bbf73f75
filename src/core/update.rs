use crate::core::{
    cmd::Cmd,
    msg::Msg,
    state::{AppState, CalcState},
    token::Token,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        Msg::Token(token) => {
            state.system.status_message = None;
            state.calc = process_token(state.calc, token);
            (state, vec![])
        }

        // System messages
        Msg::Quit => {
            state.system.should_quit = true;
            (state, vec![])
        }

        Msg::Suspend => {
            state.system.should_suspend = true;
            (state, vec![])
        }

        Msg::Resume => {
            state.system.should_suspend = false;
            (state, vec![])
        }

        Msg::Resize(width, height) => (state, vec![Cmd::Resize { width, height }]),

        // Error
        Msg::Error(error) => {
            state.system.status_message = Some(format!("Error: {error}"));
            (state, vec![])
        }
    }
}

/// The input-dispatch state machine: one token in, the next calculator
/// state out. Total over the token taxonomy; never fails, never panics.
pub fn process_token(mut calc: CalcState, token: Token) -> CalcState {
    match token {
        Token::Digit(d) => {
            let digit = char::from(b'0' + d.min(9));
            if calc.waiting_for_operand {
                calc.display = digit.to_string();
                calc.waiting_for_operand = false;
            } else if calc.display == "0" {
                calc.display = digit.to_string();
            } else {
                calc.display.push(digit);
            }
        }

        Token::Decimal => {
            if !calc.display.contains('.') {
                calc.display.push('.');
            }
        }

        Token::Clear => {
            calc = CalcState::default();
        }

        Token::Backspace => {
            calc.display.pop();
            if calc.display.is_empty() {
                calc.display.push('0');
            }
        }

        Token::Negate => {
            if let Some(stripped) = calc.display.strip_prefix('-') {
                calc.display = stripped.to_string();
            } else {
                calc.display.insert(0, '-');
            }
        }

        Token::Percent => {
            calc.display = format_value(parse_display(&calc.display) / 100.0);
        }

        Token::Op(op) => {
            // A second operator press simply replaces the pending one and
            // re-reads the operand from the unchanged display; there is no
            // chaining of the previous computation.
            calc.stored_operand = Some(parse_display(&calc.display));
            calc.operator = Some(op);
            calc.waiting_for_operand = true;
        }

        Token::Equals => {
            if let (Some(op), Some(a)) = (calc.operator.take(), calc.stored_operand.take()) {
                let b = parse_display(&calc.display);
                calc.display = format_value(op.apply(a, b));
                calc.waiting_for_operand = false;
            }
        }
    }

    calc
}

/// Stringify a value the way `f64`'s `Display` does: the shortest decimal
/// representation that round-trips (`2` not `2.0`, `0.1` not
/// `0.10000000000000001`). Infinite and NaN results come out as `inf`,
/// `-inf` and `NaN` and are shown verbatim.
pub fn format_value(value: f64) -> String {
    value.to_string()
}

/// Read the display back as a number. Displays that are not a valid number
/// (a bare `-` left over from backspacing, for example) become NaN, which
/// then propagates through the arithmetic.
pub fn parse_display(display: &str) -> f64 {
    display.parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::core::token::Op;

    fn run(tokens: &[Token]) -> CalcState {
        tokens
            .iter()
            .fold(CalcState::default(), |calc, &token| process_token(calc, token))
    }

    #[test]
    fn test_digits_accumulate() {
        let calc = run(&[Token::Digit(1), Token::Digit(2), Token::Digit(3)]);
        assert_eq!(calc.display, "123");
    }

    #[test]
    fn test_leading_zero_is_replaced() {
        let calc = run(&[Token::Digit(0), Token::Digit(7)]);
        assert_eq!(calc.display, "7");
    }

    #[test]
    fn test_addition() {
        let calc = run(&[Token::Digit(5), Token::Op(Op::Add), Token::Digit(3), Token::Equals]);
        assert_eq!(calc.display, "8");
        assert_eq!(calc.operator, None);
        assert_eq!(calc.stored_operand, None);
        assert!(!calc.waiting_for_operand);
    }

    #[rstest]
    #[case(Op::Add, "8")]
    #[case(Op::Subtract, "2")]
    #[case(Op::Multiply, "15")]
    #[case(Op::Divide, "1.6666666666666667")]
    fn test_each_operator(#[case] op: Op, #[case] expected: &str) {
        let calc = run(&[Token::Digit(5), Token::Op(op), Token::Digit(3), Token::Equals]);
        assert_eq!(calc.display, expected);
    }

    #[test]
    fn test_operator_starts_fresh_operand() {
        let calc = run(&[Token::Digit(9), Token::Op(Op::Add), Token::Digit(1)]);
        assert_eq!(calc.display, "1");
        assert_eq!(calc.stored_operand, Some(9.0));
        assert_eq!(calc.operator, Some(Op::Add));
    }

    #[test]
    fn test_operator_pressed_twice_replaces_pending() {
        let calc = run(&[Token::Digit(5), Token::Op(Op::Add), Token::Op(Op::Multiply)]);
        // No chaining: the operand is re-read from the unchanged display.
        assert_eq!(calc.display, "5");
        assert_eq!(calc.operator, Some(Op::Multiply));
        assert_eq!(calc.stored_operand, Some(5.0));
        assert!(calc.waiting_for_operand);
    }

    #[test]
    fn test_equals_without_operator_is_noop() {
        let calc = run(&[Token::Digit(4), Token::Digit(2), Token::Equals]);
        assert_eq!(calc.display, "42");
    }

    #[test]
    fn test_digit_after_equals_appends_to_result() {
        // The waiting flag is cleared after `=`, so the digit extends the
        // result string rather than starting a new number.
        let calc = run(&[
            Token::Digit(5),
            Token::Op(Op::Add),
            Token::Digit(3),
            Token::Equals,
            Token::Digit(1),
        ]);
        assert_eq!(calc.display, "81");
    }

    #[test]
    fn test_division_by_zero() {
        let calc = run(&[Token::Digit(1), Token::Op(Op::Divide), Token::Digit(0), Token::Equals]);
        assert_eq!(calc.display, "inf");
    }

    #[test]
    fn test_zero_divided_by_zero_is_nan() {
        let calc = run(&[Token::Digit(0), Token::Op(Op::Divide), Token::Digit(0), Token::Equals]);
        assert_eq!(calc.display, "NaN");
    }

    #[test]
    fn test_decimal_point() {
        let calc = run(&[Token::Digit(1), Token::Decimal, Token::Digit(5)]);
        assert_eq!(calc.display, "1.5");
    }

    #[test]
    fn test_second_decimal_point_is_ignored() {
        let once = run(&[Token::Digit(1), Token::Decimal]);
        let twice = process_token(once.clone(), Token::Decimal);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_clear_resets_from_any_state() {
        let calc = run(&[
            Token::Digit(7),
            Token::Decimal,
            Token::Digit(5),
            Token::Op(Op::Multiply),
            Token::Clear,
        ]);
        assert_eq!(calc, CalcState::default());
    }

    #[rstest]
    #[case(&[], "0")] // backspace on "0" stays "0"
    #[case(&[Token::Digit(5)], "0")] // single char collapses to "0"
    #[case(&[Token::Digit(1), Token::Digit(2)], "1")]
    fn test_backspace(#[case] tokens: &[Token], #[case] expected: &str) {
        let calc = process_token(run(tokens), Token::Backspace);
        assert_eq!(calc.display, expected);
    }

    #[test]
    fn test_negate_toggles() {
        let calc = run(&[Token::Digit(5), Token::Negate]);
        assert_eq!(calc.display, "-5");
        let calc = process_token(calc, Token::Negate);
        assert_eq!(calc.display, "5");
    }

    #[test]
    fn test_percent() {
        let calc = run(&[Token::Digit(5), Token::Percent]);
        assert_eq!(calc.display, "0.05");
    }

    #[test]
    fn test_float_sum_keeps_shortest_roundtrip_repr() {
        let calc = run(&[
            Token::Decimal,
            Token::Digit(1),
            Token::Op(Op::Add),
            Token::Digit(0),
            Token::Decimal,
            Token::Digit(2),
            Token::Equals,
        ]);
        // Same value and string you would get from 0.1 + 0.2 in any IEEE-754
        // double implementation, printed shortest-round-trip.
        assert_eq!(calc.display, "0.30000000000000004");
    }

    #[test]
    fn test_backspaced_to_bare_minus_propagates_nan() {
        let calc = run(&[
            Token::Digit(5),
            Token::Negate,
            Token::Backspace,
            Token::Op(Op::Add),
            Token::Digit(1),
            Token::Equals,
        ]);
        assert_eq!(calc.display, "NaN");
    }

    #[test]
    fn test_operator_stored_operand_invariant() {
        let mut calc = CalcState::default();
        for &token in &[
            Token::Digit(3),
            Token::Op(Op::Subtract),
            Token::Digit(1),
            Token::Equals,
            Token::Op(Op::Divide),
            Token::Clear,
        ] {
            calc = process_token(calc, token);
            assert_eq!(calc.operator.is_some(), calc.stored_operand.is_some());
            assert!(!calc.display.is_empty());
            assert!(calc.display.matches('.').count() <= 1);
        }
    }

    #[test]
    fn test_update_token_routes_to_dispatcher() {
        let state = AppState::default();
        let (state, cmds) = update(Msg::Token(Token::Digit(7)), state);
        assert_eq!(state.calc.display, "7");
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_update_quit() {
        let state = AppState::default();
        let (state, cmds) = update(Msg::Quit, state);
        assert!(state.system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_update_suspend_resume() {
        let state = AppState::default();
        let (state, _) = update(Msg::Suspend, state);
        assert!(state.system.should_suspend);
        let (state, _) = update(Msg::Resume, state);
        assert!(!state.system.should_suspend);
    }

    #[test]
    fn test_update_resize_produces_command() {
        let state = AppState::default();
        let (_, cmds) = update(Msg::Resize(80, 24), state);
        assert_eq!(
            cmds,
            vec![Cmd::Resize {
                width: 80,
                height: 24
            }]
        );
    }

    #[test]
    fn test_update_error_sets_status_message() {
        let state = AppState::default();
        let (state, cmds) = update(Msg::Error("boom".to_string()), state);
        assert_eq!(state.system.status_message, Some("Error: boom".to_string()));
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_token_clears_status_message() {
        let mut state = AppState::default();
        state.system.status_message = Some("Error: boom".to_string());
        let (state, _) = update(Msg::Token(Token::Digit(1)), state);
        assert_eq!(state.system.status_message, None);
    }
}
