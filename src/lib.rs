//! phrasebook: a small rule-based bilingual phrase library.
//!
//! A [`Phrasebook`] owns a word [`Lexicon`] (headword → part-of-speech +
//! per-language translations) and a [`GrammarTable`] (language → ordered
//! part-of-speech tag sequence) and offers four operations on top of them:
//! sentence generation, grammar validation, structure transformation and
//! word-for-word translation.
//!
//! All steady-state failure is reported as `None`/`false`/empty; the only
//! `Result`-returning paths are the file loaders.

pub mod generator;
pub mod grammar;
pub mod lexicon;
pub mod loader;
pub mod structure;
pub mod transform;
pub mod translate;
pub mod validator;

use std::path::Path;

pub use grammar::GrammarTable;
pub use lexicon::{ENGLISH, Lexicon, LexiconEntry};
pub use loader::{
    LoadError, LoadResult, load_grammar_from_file, load_lexicon_from_file, load_lexicon_from_json,
    parse_grammar, parse_lexicon, parse_lexicon_json,
};
pub use structure::{Structure, expand_repetitions};

/// Verbosity level for debug logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// No debug logging
    Silent = 0,
    /// Log notable degradations, like dropped transform positions (default)
    Normal = 1,
    /// Log resolved tag sequences as well
    Verbose = 2,
}

/// The aggregate the operations run against: one lexicon, one grammar table.
///
/// Both tables are read-only during any lookup, generation, validation or
/// translation call; `merge_*` mutate in place and must not run concurrently
/// with reads (there is no internal locking).
pub struct Phrasebook {
    lexicon: Lexicon,
    grammar: GrammarTable,
    verbosity: VerbosityLevel,
}

impl Default for Phrasebook {
    fn default() -> Self {
        Phrasebook::new()
    }
}

impl Phrasebook {
    pub fn new() -> Self {
        Phrasebook {
            lexicon: Lexicon::new(),
            grammar: GrammarTable::new(),
            verbosity: VerbosityLevel::Normal,
        }
    }

    /// Build a phrasebook from a line-format lexicon file and grammar file.
    pub fn from_files(lexicon_path: &Path, grammar_path: &Path) -> LoadResult<Self> {
        Ok(Phrasebook {
            lexicon: load_lexicon_from_file(lexicon_path)?,
            grammar: load_grammar_from_file(grammar_path)?,
            verbosity: VerbosityLevel::Normal,
        })
    }

    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn with_grammar(mut self, grammar: GrammarTable) -> Self {
        self.grammar = grammar;
        self
    }

    pub fn with_verbosity(mut self, verbosity: VerbosityLevel) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn grammar(&self) -> &GrammarTable {
        &self.grammar
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    /// Merge additional lexicon entries; see [`Lexicon::merge`].
    pub fn merge_lexicon(&mut self, other: Lexicon) {
        self.lexicon.merge(other);
    }

    /// Merge additional grammar rules; see [`GrammarTable::merge`].
    pub fn merge_grammar(&mut self, other: GrammarTable) {
        self.grammar.merge(other);
    }

    /// Load a line-format lexicon file and merge it in.
    pub fn merge_lexicon_from_file(&mut self, path: &Path) -> LoadResult<()> {
        let other = load_lexicon_from_file(path)?;
        self.lexicon.merge(other);
        Ok(())
    }

    /// Load a line-format grammar file and merge it in.
    pub fn merge_grammar_from_file(&mut self, path: &Path) -> LoadResult<()> {
        let other = load_grammar_from_file(path)?;
        self.grammar.merge(other);
        Ok(())
    }

    /// Generate a sentence in `target_language` following `structure`.
    pub fn generate(&self, target_language: &str, structure: &Structure) -> Option<String> {
        if self.verbosity >= VerbosityLevel::Verbose {
            eprintln!(
                "[phrasebook] generate: {} with tags {:?}",
                target_language,
                structure.resolve(&self.grammar)
            );
        }
        generator::generate(&self.lexicon, &self.grammar, target_language, structure)
    }

    /// Check `sentence` against the grammar rule for `language`.
    pub fn validate(&self, sentence: &str, language: &str) -> bool {
        validator::validate(&self.lexicon, &self.grammar, sentence, language)
    }

    /// Reorder `sentence` from `source` structure into `target` structure.
    pub fn transform(&self, sentence: &str, source: &Structure, target: &Structure) -> String {
        let result = transform::transform(&self.grammar, sentence, source, target);

        if self.verbosity >= VerbosityLevel::Normal {
            let expected = expand_repetitions(&target.resolve(&self.grammar)).len();
            let produced = result.split_whitespace().count();
            if produced < expected {
                eprintln!(
                    "[phrasebook] transform: {} target position(s) had no matching tag",
                    expected - produced
                );
            }
        }
        result
    }

    /// Translate `sentence` word by word between two languages.
    pub fn translate_words(
        &self,
        sentence: &str,
        source_language: &str,
        target_language: &str,
    ) -> Option<String> {
        translate::translate_words(&self.lexicon, sentence, source_language, target_language)
    }

    /// Translate word by word, then reorder into the target grammar.
    pub fn translate_with_grammar(
        &self,
        sentence: &str,
        source_language: &str,
        target_language: &str,
    ) -> Option<String> {
        translate::translate_with_grammar(
            &self.lexicon,
            &self.grammar,
            sentence,
            source_language,
            target_language,
        )
    }
}
