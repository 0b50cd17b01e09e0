//! Grammar validation: does a sentence match a language's expected tag
//! sequence?

use crate::grammar::GrammarTable;
use crate::lexicon::{ENGLISH, Lexicon};

/// Check `sentence` against the grammar rule for `language`.
///
/// Returns false, never an error, when any precondition fails: empty
/// sentence or language, a language with no translations (other than
/// English), a token the lexicon does not know, a token count different from
/// the rule's tag count, or any positional part-of-speech mismatch.
///
/// The expected tags are taken raw from the grammar table, without
/// repetition expansion, matching generation.
pub fn validate(lexicon: &Lexicon, grammar: &GrammarTable, sentence: &str, language: &str) -> bool {
    if sentence.is_empty() || language.is_empty() {
        return false;
    }
    if !lexicon.has_language(language) {
        return false;
    }

    let expected = grammar.tags_for(language);
    let words: Vec<&str> = sentence.split_whitespace().collect();

    // Every token must be known under `language` before positions are
    // compared at all.
    let all_known = if language == ENGLISH {
        words.iter().all(|w| lexicon.lookup(w).is_some())
    } else {
        words
            .iter()
            .all(|w| lexicon.find_by_translation(language, w).is_some())
    };
    if !all_known {
        return false;
    }

    if words.len() != expected.len() {
        return false;
    }

    words.iter().zip(expected.iter()).all(|(word, tag)| {
        let entry = if language == ENGLISH {
            lexicon.lookup(word)
        } else {
            lexicon.find_by_translation(language, word)
        };
        // A failed reverse lookup degrades to false rather than panicking.
        entry.is_some_and(|e| e.pos == *tag)
    })
}
