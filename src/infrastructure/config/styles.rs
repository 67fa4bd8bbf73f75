use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named style table, parsed from strings like `"bold yellow on black"`.
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(name, line)| (name, parse_style(&line)))
            .collect();

        Ok(Self(styles))
    }
}

/// Parse a style line: zero or more modifier words, an optional foreground
/// color, then optionally `on <background color>`. Unknown words are ignored
/// rather than rejected so a typo degrades to the default style.
pub fn parse_style(line: &str) -> Style {
    let mut style = Style::default();
    let mut background = false;

    for word in line.split_whitespace() {
        let word = word.to_ascii_lowercase();
        if word == "on" {
            background = true;
            continue;
        }
        if let Some(modifier) = parse_modifier(&word) {
            style = style.add_modifier(modifier);
            continue;
        }
        if let Some(color) = parse_color(&word) {
            style = if background {
                style.bg(color)
            } else {
                style.fg(color)
            };
        }
    }

    style
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underlined" => Some(Modifier::UNDERLINED),
        "blink" => Some(Modifier::SLOW_BLINK),
        "reversed" => Some(Modifier::REVERSED),
        "crossedout" => Some(Modifier::CROSSED_OUT),
        _ => None,
    }
}

fn parse_color(word: &str) -> Option<Color> {
    let normalized = word.replace(['-', '_'], "");
    match normalized.as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        hex if hex.starts_with('#') && hex.len() == 7 => {
            let r = u8::from_str_radix(&hex[1..3], 16).ok()?;
            let g = u8::from_str_radix(&hex[3..5], 16).ok()?;
            let b = u8::from_str_radix(&hex[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        indexed => indexed.parse::<u8>().ok().map(Color::Indexed),
    }
}
