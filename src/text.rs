//! Small text helpers used by the page templates.

use regex::Regex;
use std::sync::OnceLock;

static NON_WORD_REGEX: OnceLock<Regex> = OnceLock::new();
static SPACES_REGEX: OnceLock<Regex> = OnceLock::new();

/// Initials for an avatar placeholder: "Elena Rusu" -> "ER".
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Anchor-friendly id: "What is the dress code?" -> "what-is-the-dress-code".
pub fn slugify(text: &str) -> String {
    let non_word = NON_WORD_REGEX.get_or_init(|| Regex::new(r"[^\w ]+").unwrap());
    let spaces = SPACES_REGEX.get_or_init(|| Regex::new(r" +").unwrap());

    let lower = text.to_lowercase();
    let stripped = non_word.replace_all(&lower, "");
    spaces.replace_all(&stripped, "-").into_owned()
}
