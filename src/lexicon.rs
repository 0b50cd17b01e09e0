//! Word lexicon: English headwords with their part-of-speech tag and
//! per-language translations.
//!
//! All lookups are linear scans over an append-only list, and ties are broken
//! by insertion order: the first matching entry wins. This is a contract other
//! components rely on, not an implementation accident, which is why the
//! backing store is a `Vec` rather than a hash map.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The language headwords are stored under. Lookups for it go through the
/// headword directly instead of the translation table.
pub const ENGLISH: &str = "English";

/// A single lexicon entry: headword, part-of-speech tag and the translations
/// known for the word.
///
/// Each word carries exactly one part-of-speech. The translation map may be
/// partial; not every language is present for every word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub word: String,
    pub pos: String,
    pub translations: HashMap<String, String>,
}

impl LexiconEntry {
    pub fn new(word: &str, pos: &str) -> Self {
        LexiconEntry {
            word: word.to_string(),
            pos: pos.to_string(),
            translations: HashMap::new(),
        }
    }

    /// Builder-style helper for adding a translation.
    pub fn with_translation(mut self, language: &str, translated: &str) -> Self {
        self.translations
            .insert(language.to_string(), translated.to_string());
        self
    }

    /// The word's translation under `language`, if present.
    pub fn translation(&self, language: &str) -> Option<&str> {
        self.translations.get(language).map(String::as_str)
    }
}

/// Insertion-ordered word lexicon.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    pub fn new() -> Self {
        Lexicon {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Add an entry. A repeated headword replaces the earlier entry in place,
    /// keeping its position in the scan order.
    pub fn insert(&mut self, entry: LexiconEntry) {
        match self.entries.iter_mut().find(|e| e.word == entry.word) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// Look up an entry by its English headword.
    pub fn lookup(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.iter().find(|e| e.word == word)
    }

    /// First entry in insertion order whose part-of-speech matches `tag`.
    ///
    /// When `language` is given, the entry must additionally carry a
    /// translation for that language.
    pub fn find_by_pos(&self, tag: &str, language: Option<&str>) -> Option<&LexiconEntry> {
        self.entries.iter().find(|e| {
            e.pos == tag
                && match language {
                    Some(lang) => e.translations.contains_key(lang),
                    None => true,
                }
        })
    }

    /// First entry whose translation under `language` equals `word`
    /// (reverse lookup).
    pub fn find_by_translation(&self, language: &str, word: &str) -> Option<&LexiconEntry> {
        self.entries
            .iter()
            .find(|e| e.translation(language) == Some(word))
    }

    /// Whether `language` is usable at all: English always is, any other
    /// language needs at least one translation in the lexicon.
    pub fn has_language(&self, language: &str) -> bool {
        language == ENGLISH
            || self
                .entries
                .iter()
                .any(|e| e.translations.contains_key(language))
    }

    /// Merge `other` into this lexicon.
    ///
    /// For a word already present, the existing entry keeps its
    /// part-of-speech and position; translations from the new entry are
    /// unioned in, overwriting on conflict. Unknown words are appended.
    pub fn merge(&mut self, other: Lexicon) {
        for entry in other.entries {
            match self.entries.iter_mut().find(|e| e.word == entry.word) {
                Some(existing) => existing.translations.extend(entry.translations),
                None => self.entries.push(entry),
            }
        }
    }
}

impl fmt::Display for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "Word: {}", entry.word)?;
            writeln!(f, "Part of Speech: {}", entry.pos)?;
            writeln!(f, "Translations:")?;
            // Sorted for stable output
            let mut translations: Vec<_> = entry.translations.iter().collect();
            translations.sort();
            for (language, translated) in translations {
                writeln!(f, "{} => {}", language, translated)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
