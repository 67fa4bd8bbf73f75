use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    core::{
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        token::{Op, Token},
    },
    infrastructure::config::keybindings::AppCommand,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::Quit],
        RawMsg::Suspend => vec![Msg::Suspend],
        RawMsg::Resume => vec![Msg::Resume],
        RawMsg::Resize(width, height) => vec![Msg::Resize(width, height)],

        // User input - chrome bindings first, then the token vocabulary
        RawMsg::Key(key) => translate_key_event(key, state),

        // Pointer activation arrives pre-resolved from the keypad
        RawMsg::Token(token) => vec![Msg::Token(token)],

        // System events
        RawMsg::Error(error) => vec![Msg::Error(error)],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events. Configured chrome bindings
/// (quit, suspend) take precedence over the fixed calculator key mapping.
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    // Normalize away kind/state so lookups match the parsed config bindings.
    let chord = KeyEvent::new(key.code, key.modifiers);
    if let Some(command) = state.config.config.keybindings.get(&chord) {
        return match command {
            AppCommand::Quit => vec![Msg::Quit],
            AppCommand::Suspend => vec![Msg::Suspend],
        };
    }

    match token_for_key(key) {
        Some(token) => vec![Msg::Token(token)],
        None => vec![],
    }
}

/// The physical-key mapping of the token vocabulary. `*` is an alias for
/// multiply and Enter for `=`; every key not listed here is ignored.
pub fn token_for_key(key: KeyEvent) -> Option<Token> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Char(c @ '0'..='9') => Token::digit(c),
        KeyCode::Char('+') => Some(Token::Op(Op::Add)),
        KeyCode::Char('-') => Some(Token::Op(Op::Subtract)),
        KeyCode::Char('*') => Some(Token::Op(Op::Multiply)),
        KeyCode::Char('/') => Some(Token::Op(Op::Divide)),
        KeyCode::Char('=') | KeyCode::Enter => Some(Token::Equals),
        KeyCode::Char('.') => Some(Token::Decimal),
        KeyCode::Char('%') => Some(Token::Percent),
        KeyCode::Backspace => Some(Token::Backspace),
        KeyCode::Esc => Some(Token::Clear),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[rstest]
    #[case(KeyCode::Char('7'), Token::Digit(7))]
    #[case(KeyCode::Char('0'), Token::Digit(0))]
    #[case(KeyCode::Char('+'), Token::Op(Op::Add))]
    #[case(KeyCode::Char('-'), Token::Op(Op::Subtract))]
    #[case(KeyCode::Char('*'), Token::Op(Op::Multiply))]
    #[case(KeyCode::Char('/'), Token::Op(Op::Divide))]
    #[case(KeyCode::Char('='), Token::Equals)]
    #[case(KeyCode::Enter, Token::Equals)]
    #[case(KeyCode::Char('.'), Token::Decimal)]
    #[case(KeyCode::Char('%'), Token::Percent)]
    #[case(KeyCode::Backspace, Token::Backspace)]
    #[case(KeyCode::Esc, Token::Clear)]
    fn test_token_for_key(#[case] code: KeyCode, #[case] expected: Token) {
        assert_eq!(token_for_key(key(code)), Some(expected));
    }

    #[rstest]
    #[case(KeyCode::Char('a'))]
    #[case(KeyCode::Char('x'))]
    #[case(KeyCode::Tab)]
    #[case(KeyCode::Left)]
    #[case(KeyCode::F(1))]
    fn test_unmapped_keys_are_ignored(#[case] code: KeyCode) {
        assert_eq!(token_for_key(key(code)), None);
    }

    #[test]
    fn test_control_modifier_blocks_tokens() {
        let event = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::CONTROL);
        assert_eq!(token_for_key(event), None);
    }

    #[test]
    fn test_shifted_plus_still_maps() {
        // Many layouts report '+' together with SHIFT.
        let event = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert_eq!(token_for_key(event), Some(Token::Op(Op::Add)));
    }

    #[test]
    fn test_key_translates_to_token_msg() {
        let state = AppState::default();
        let msgs = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('3'))), &state);
        assert_eq!(msgs, vec![Msg::Token(Token::Digit(3))]);
    }

    #[test]
    fn test_chrome_binding_takes_precedence() {
        let mut state = AppState::default();
        let chord = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        state
            .config
            .config
            .keybindings
            .insert(chord, AppCommand::Quit);

        let msgs = translate_raw_to_domain(RawMsg::Key(chord), &state);
        assert_eq!(msgs, vec![Msg::Quit]);
    }

    #[test]
    fn test_tick_and_render_are_dropped() {
        let state = AppState::default();
        assert!(translate_raw_to_domain(RawMsg::Tick, &state).is_empty());
        assert!(translate_raw_to_domain(RawMsg::Render, &state).is_empty());
    }
}
