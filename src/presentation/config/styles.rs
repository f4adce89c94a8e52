use std::{collections::HashMap, str::FromStr};

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles such as `"hero.title"`, configured as `"bold #f97316 on black"`
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
            .map(|(key, line)| {
                parse_style(&line)
                    .map(|style| (key, style))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Styles(styles))
    }
}

impl Styles {
    /// Configured style for `key`, or the terminal default
    pub fn style(&self, key: &str) -> Style {
        self.get(key).copied().unwrap_or_default()
    }
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underlined" | "underline" => Some(Modifier::UNDERLINED),
        "reversed" => Some(Modifier::REVERSED),
        "crossed_out" | "strikethrough" => Some(Modifier::CROSSED_OUT),
        _ => None,
    }
}

/// Parse `"<modifiers> <fg> on <bg>"`; every part is optional
pub fn parse_style(line: &str) -> Result<Style, String> {
    let mut style = Style::default();
    let mut background = false;

    for word in line.split_whitespace() {
        let lower = word.to_ascii_lowercase();
        if lower == "on" {
            background = true;
            continue;
        }
        if let Some(modifier) = parse_modifier(&lower) {
            style = style.add_modifier(modifier);
            continue;
        }

        let color = Color::from_str(&lower).map_err(|_| format!("Unknown color `{word}`"))?;
        style = if background {
            style.bg(color)
        } else {
            style.fg(color)
        };
    }

    Ok(style)
}
