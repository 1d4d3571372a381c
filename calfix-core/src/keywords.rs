//! Keyword set used to decide which events survive filtering.

use std::collections::BTreeSet;
use std::fmt;

/// Lower-cased, trimmed keywords parsed from a comma-separated list.
///
/// An empty set means "keep every event".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: BTreeSet<String>,
}

impl KeywordSet {
    /// Parse a comma-separated keyword string such as `"Math, physics,,"`.
    pub fn parse(raw: &str) -> Self {
        let keywords = raw
            .split(',')
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        KeywordSet { keywords }
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// True when the set is empty and every event should be kept.
    pub fn keeps_all(&self) -> bool {
        self.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Case-insensitive substring match of any keyword against `text`.
    pub fn matches(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }
}

impl fmt::Display for KeywordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        write!(f, "{}", joined.join(", "))
    }
}
