//! Sentence structures and their resolution into tag sequences.
//!
//! A structure is either a reference to a named grammar rule or an explicit
//! tag list. Resolution turns it into a flat sequence of tags; repetition
//! annotations (`NOU{2}`) are expanded separately because only structure
//! transformation consumes expanded sequences.

use regex::Regex;

use crate::grammar::GrammarTable;

/// Either a named grammar rule or an explicit ordered tag list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Structure {
    Named(String),
    Explicit(Vec<String>),
}

impl Structure {
    pub fn named(language: &str) -> Self {
        Structure::Named(language.to_string())
    }

    pub fn explicit(tags: &[&str]) -> Self {
        Structure::Explicit(tags.iter().map(|t| t.to_string()).collect())
    }

    /// Resolve into a trimmed tag sequence. Named structures go through the
    /// grammar table and come back empty when the language is unknown;
    /// explicit structures are used as given. No repetition expansion.
    pub fn resolve(&self, grammar: &GrammarTable) -> Vec<String> {
        match self {
            Structure::Named(language) => grammar.tags_for(language),
            Structure::Explicit(tags) => tags.iter().map(|t| t.trim().to_string()).collect(),
        }
    }

    /// A named structure is valid when the grammar table knows it; an
    /// explicit one when every tag matches `[A-Z]{3}` with an optional
    /// `{1-9}` repetition suffix.
    pub fn is_valid(&self, grammar: &GrammarTable) -> bool {
        match self {
            Structure::Named(language) => grammar.contains(language),
            Structure::Explicit(tags) => {
                let tag_re = Regex::new(r"^[A-Z]{3}(\{[1-9]\})?$").unwrap();
                tags.iter().all(|t| tag_re.is_match(t.trim()))
            }
        }
    }
}

/// Expand repetition annotations: `TAG{n}` becomes `n` consecutive `TAG`s, a
/// plain tag stands for itself. Expansion is local to each tag and preserves
/// order.
pub fn expand_repetitions(tags: &[String]) -> Vec<String> {
    let mut expanded = Vec::new();
    for tag in tags {
        match tag.split_once('{') {
            Some((base, rest)) if rest.ends_with('}') => {
                let count: usize = rest.trim_end_matches('}').parse().unwrap_or(0);
                for _ in 0..count {
                    expanded.push(base.to_string());
                }
            }
            _ => expanded.push(tag.clone()),
        }
    }
    expanded
}
