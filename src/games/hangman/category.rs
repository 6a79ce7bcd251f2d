use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;

/// A named word list. Words are stored uppercase and contain only A-Z.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    words: Vec<String>,
}

/// On-disk shape of one category in a word-list file
#[derive(Debug, Deserialize)]
struct CategoryEntry {
    name: String,
    words: Vec<String>,
}

impl Category {
    pub fn new<I, S>(name: impl Into<String>, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            bail!("category name is empty");
        }

        let mut normalized = Vec::new();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                bail!("category '{}' contains an empty word", name);
            }
            if !word.chars().all(|c| c.is_ascii_alphabetic()) {
                bail!("word '{}' in category '{}' must be letters A-Z only", word, name);
            }
            normalized.push(word.to_ascii_uppercase());
        }

        if normalized.is_empty() {
            bail!("category '{}' has no words", name);
        }

        Ok(Self { name, words: normalized })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

const BUILTIN: &[(&str, &[&str])] = &[
    ("Animals", &[
        "ELEPHANT", "GIRAFFE", "PENGUIN", "KANGAROO", "DOLPHIN",
        "TIGER", "ZEBRA", "OCTOPUS", "SQUIRREL", "HEDGEHOG",
    ]),
    ("Fruits", &[
        "APPLE", "BANANA", "CHERRY", "MANGO", "PAPAYA",
        "PINEAPPLE", "STRAWBERRY", "APRICOT", "LYCHEE", "WATERMELON",
    ]),
    ("Countries", &[
        "BRAZIL", "CANADA", "EGYPT", "FINLAND", "JAPAN",
        "KENYA", "MEXICO", "NORWAY", "PORTUGAL", "VIETNAM",
    ]),
    ("Colors", &[
        "AMBER", "CRIMSON", "INDIGO", "MAGENTA", "OLIVE",
        "TURQUOISE", "VIOLET", "SCARLET", "LAVENDER", "MAROON",
    ]),
];

/// The word lists shipped with the game
pub fn builtin() -> Vec<Category> {
    BUILTIN
        .iter()
        .map(|(name, words)| Category {
            name: name.to_string(),
            words: words.iter().map(|w| w.to_string()).collect(),
        })
        .collect()
}

/// Parse a JSON array of `{"name": ..., "words": [...]}` objects
pub fn parse_categories(json: &str) -> Result<Vec<Category>> {
    let entries: Vec<CategoryEntry> = serde_json::from_str(json).context("invalid word-list JSON")?;
    if entries.is_empty() {
        bail!("word list defines no categories");
    }

    entries
        .into_iter()
        .map(|entry| Category::new(entry.name, entry.words))
        .collect()
}

pub fn load_categories(path: &Path) -> Result<Vec<Category>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    parse_categories(&json).with_context(|| format!("failed to load word list {}", path.display()))
}

/// Case-insensitive lookup by category name
pub fn find<'a>(categories: &'a [Category], name: &str) -> Result<&'a Category> {
    categories
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| {
            let names: Vec<&str> = categories.iter().map(|c| c.name()).collect();
            anyhow!("category '{}' not found (available: {})", name, names.join(", "))
        })
}
