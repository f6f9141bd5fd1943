use serde::{Deserialize, Serialize};

/// Glyph shown when neither explicit initials nor a usable name are available.
pub const INITIALS_FALLBACK: &str = "?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Upper bound on the number of name words contributing an initial.
pub enum MaxInitials {
    /// First word only.
    One,
    /// First and last word.
    #[default]
    Two,
    /// Up to the first three words.
    Three,
}

impl MaxInitials {
    /// Numeric bound.
    pub const fn count(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

/// Word separators: `-` plus the ECMAScript `\s` class, which adds U+FEFF to Unicode
/// `White_Space` and leaves out U+0085.
fn is_word_separator(c: char) -> bool {
    c == '-' || c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Derives uppercase avatar initials from a display name.
///
/// Words are separated by runs of whitespace or `-`, so `"Mary-Jane Watson"` has three words.
/// With [`MaxInitials::Two`] the middle words are skipped (`"Alice Bob Charlie"` gives `"AC"`).
/// Blank input yields an empty string.
pub fn derive_initials(name: &str, max: MaxInitials) -> String {
    let words: Vec<&str> = name
        .split(is_word_separator)
        .filter(|word| !word.is_empty())
        .collect();

    let picked: Vec<&str> = match (words.as_slice(), max) {
        ([], _) => return String::new(),
        ([only], _) | ([only, ..], MaxInitials::One) => vec![*only],
        ([first, .., last], MaxInitials::Two) => vec![*first, *last],
        (words, MaxInitials::Three) => words.iter().take(max.count()).copied().collect(),
    };

    picked
        .iter()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Resolves the text rendered inside an initials avatar.
///
/// Non-empty `explicit` initials are used as given; otherwise initials are derived from `name`,
/// falling back to [`INITIALS_FALLBACK`].
pub fn display_initials(name: Option<&str>, explicit: Option<&str>, max: MaxInitials) -> String {
    if let Some(explicit) = explicit.filter(|value| !value.is_empty()) {
        return explicit.to_string();
    }
    let derived = derive_initials(name.unwrap_or_default(), max);
    if derived.is_empty() {
        INITIALS_FALLBACK.to_string()
    } else {
        derived
    }
}
