//! Word-for-word translation between languages, with an optional grammar
//! reorder on top.

use crate::grammar::GrammarTable;
use crate::lexicon::{ENGLISH, Lexicon};
use crate::structure::Structure;
use crate::transform::transform;

/// Translate `sentence` word by word from `source_language` to
/// `target_language`.
///
/// Equal languages return the sentence unchanged. English on either side
/// goes through the headword directly; between two non-English languages
/// each word is reverse-looked-up under the source language and its target
/// translation emitted. Any word that cannot be resolved aborts the whole
/// call, mirroring generation's all-or-nothing policy.
pub fn translate_words(
    lexicon: &Lexicon,
    sentence: &str,
    source_language: &str,
    target_language: &str,
) -> Option<String> {
    if source_language == target_language {
        return Some(sentence.to_string());
    }

    let mut translated = Vec::new();
    for word in sentence.split_whitespace() {
        let out: &str = if source_language == ENGLISH {
            lexicon.lookup(word)?.translation(target_language)?
        } else if target_language == ENGLISH {
            lexicon
                .find_by_translation(source_language, word)?
                .word
                .as_str()
        } else {
            lexicon
                .find_by_translation(source_language, word)?
                .translation(target_language)?
        };
        translated.push(out.to_string());
    }
    Some(translated.join(" "))
}

/// Translate word by word, then reorder into the target language's grammar.
///
/// Fails when the word-for-word pass fails or changes the token count, and
/// again when the grammar transform drops tokens (which happens whenever a
/// part-of-speech of the source grammar has no slot in the target grammar,
/// or either language has no grammar rule).
pub fn translate_with_grammar(
    lexicon: &Lexicon,
    grammar: &GrammarTable,
    sentence: &str,
    source_language: &str,
    target_language: &str,
) -> Option<String> {
    let translated = translate_words(lexicon, sentence, source_language, target_language)?;
    if translated.split_whitespace().count() != sentence.split_whitespace().count() {
        return None;
    }

    let transformed = transform(
        grammar,
        &translated,
        &Structure::named(source_language),
        &Structure::named(target_language),
    );
    if transformed.split_whitespace().count() != translated.split_whitespace().count() {
        return None;
    }
    Some(transformed)
}
