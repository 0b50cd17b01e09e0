//! Grammar table: language name to ordered part-of-speech tag sequence.
//!
//! A tag may carry a repetition annotation (`NOU{2}`); expansion of those is
//! a structure concern, the table stores tags as loaded.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GrammarTable {
    rules: HashMap<String, Vec<String>>,
}

impl GrammarTable {
    pub fn new() -> Self {
        GrammarTable {
            rules: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn contains(&self, language: &str) -> bool {
        self.rules.contains_key(language)
    }

    /// Set the tag sequence for a language, replacing any existing rule.
    pub fn insert(&mut self, language: &str, tags: Vec<String>) {
        self.rules.insert(language.to_string(), tags);
    }

    /// The tag sequence for `language`, trimmed, in rule order.
    ///
    /// An unknown language yields an empty sequence, never an error; callers
    /// treat that as "no grammar rule".
    pub fn tags_for(&self, language: &str) -> Vec<String> {
        match self.rules.get(language) {
            Some(tags) => tags.iter().map(|t| t.trim().to_string()).collect(),
            None => Vec::new(),
        }
    }

    /// Merge `other` into this table.
    ///
    /// For a language already present, the result is the deduplicated union
    /// of the new tags followed by the old ones, first occurrence kept, so
    /// new tags take the priority positions. A new language is taken
    /// verbatim.
    pub fn merge(&mut self, other: GrammarTable) {
        for (language, new_tags) in other.rules {
            match self.rules.remove(&language) {
                Some(old_tags) => {
                    let mut merged: Vec<String> = Vec::new();
                    for tag in new_tags.into_iter().chain(old_tags) {
                        if !merged.contains(&tag) {
                            merged.push(tag);
                        }
                    }
                    self.rules.insert(language, merged);
                }
                None => {
                    self.rules.insert(language, new_tags);
                }
            }
        }
    }
}

impl fmt::Display for GrammarTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sorted for stable output
        let mut languages: Vec<_> = self.rules.keys().collect();
        languages.sort();
        for language in languages {
            writeln!(f, "Language: {}", language)?;
            writeln!(f, "Parts of Speech:")?;
            for tag in &self.rules[language] {
                writeln!(f, "{}", tag.trim())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
