use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

pub const MARKUP_ALERT: &str = "Invalid input! No code or scripts allowed.";

/// What happens to a text area after markup was typed or pasted into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RejectPolicy {
    /// Reload the whole page, dropping every unsaved value.
    #[default]
    Reload,
    /// Put the last accepted value back and keep the rest of the page.
    Restore,
}

fn markup_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)<\s*script.*?>.*?<\s*/\s*script\s*>|<[^>]+>")
            .expect("markup pattern is valid")
    })
}

/// True when the text holds a script block or anything shaped like a tag.
pub fn contains_markup(text: &str) -> bool {
    markup_pattern().is_match(text)
}
