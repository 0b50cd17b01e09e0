//! Sentence generation: pick one word per structure tag from the lexicon.

use crate::grammar::GrammarTable;
use crate::lexicon::{ENGLISH, Lexicon};
use crate::structure::Structure;

/// Generate a sentence in `target_language` following `structure`.
///
/// The target language must be English or have at least one translation in
/// the lexicon, and the structure must be valid; otherwise `None`. Each tag
/// of the resolved structure is filled with the first matching lexicon entry
/// (insertion order), and a tag with no match aborts the whole call; no
/// partial sentence is ever returned.
///
/// Repetition annotations are not expanded here; a tag like `NOU{2}` simply
/// finds no entry. Only structure transformation expands repetitions.
pub fn generate(
    lexicon: &Lexicon,
    grammar: &GrammarTable,
    target_language: &str,
    structure: &Structure,
) -> Option<String> {
    if !lexicon.has_language(target_language) || !structure.is_valid(grammar) {
        return None;
    }

    let tags = structure.resolve(grammar);
    let mut words = Vec::with_capacity(tags.len());
    for tag in &tags {
        let word = if target_language == ENGLISH {
            lexicon.find_by_pos(tag, None)?.word.as_str()
        } else {
            lexicon
                .find_by_pos(tag, Some(target_language))?
                .translation(target_language)?
        };
        words.push(word);
    }
    Some(words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconEntry;

    fn fixture() -> (Lexicon, GrammarTable) {
        let mut lexicon = Lexicon::new();
        lexicon.insert(
            LexiconEntry::new("the", "DET")
                .with_translation("Spanish", "el")
                .with_translation("French", "le"),
        );
        lexicon.insert(LexiconEntry::new("blue", "ADJ").with_translation("French", "bleu"));
        lexicon.insert(LexiconEntry::new("red", "ADJ").with_translation("Spanish", "rojo"));
        lexicon.insert(LexiconEntry::new("truck", "NOU").with_translation("Spanish", "camion"));
        lexicon.insert(LexiconEntry::new("sea", "NOU").with_translation("French", "mer"));
        lexicon.insert(LexiconEntry::new("fork", "NOU").with_translation("Italian", "forchetta"));

        let mut grammar = GrammarTable::new();
        grammar.insert(
            "French",
            vec!["ADJ".to_string(), "NOU".to_string(), "DET".to_string()],
        );
        grammar.insert(
            "Spanish",
            vec!["DET".to_string(), "NOU".to_string(), "DET".to_string()],
        );
        (lexicon, grammar)
    }

    #[test]
    fn test_generate_english_explicit() {
        let (lexicon, grammar) = fixture();
        let structure = Structure::explicit(&["DET", "ADJ", "NOU"]);
        assert_eq!(
            generate(&lexicon, &grammar, "English", &structure),
            Some("the blue truck".to_string())
        );
    }

    #[test]
    fn test_generate_named_structure() {
        let (lexicon, grammar) = fixture();
        // English words laid out in French grammar order.
        assert_eq!(
            generate(&lexicon, &grammar, "English", &Structure::named("French")),
            Some("blue truck the".to_string())
        );
    }

    #[test]
    fn test_generate_skips_entries_without_translation() {
        let (lexicon, grammar) = fixture();
        // "truck" has no French translation; the first French NOU is "sea".
        assert_eq!(
            generate(
                &lexicon,
                &grammar,
                "French",
                &Structure::explicit(&["NOU", "DET"])
            ),
            Some("mer le".to_string())
        );
        assert_eq!(
            generate(&lexicon, &grammar, "Italian", &Structure::explicit(&["NOU"])),
            Some("forchetta".to_string())
        );
    }

    #[test]
    fn test_generate_all_or_nothing() {
        let (lexicon, grammar) = fixture();
        // No Italian DET exists, so the whole generation fails.
        assert_eq!(
            generate(
                &lexicon,
                &grammar,
                "Italian",
                &Structure::explicit(&["DET", "ADJ", "NOU"])
            ),
            None
        );
    }

    #[test]
    fn test_generate_unknown_language() {
        let (lexicon, grammar) = fixture();
        assert_eq!(
            generate(
                &lexicon,
                &grammar,
                "Martian",
                &Structure::explicit(&["DET"])
            ),
            None
        );
    }

    #[test]
    fn test_generate_invalid_structure() {
        let (lexicon, grammar) = fixture();
        assert_eq!(
            generate(
                &lexicon,
                &grammar,
                "English",
                &Structure::explicit(&["determiner"])
            ),
            None
        );
        assert_eq!(
            generate(&lexicon, &grammar, "English", &Structure::named("Martian")),
            None
        );
    }

    #[test]
    fn test_generate_spanish_named() {
        let (lexicon, grammar) = fixture();
        assert_eq!(
            generate(&lexicon, &grammar, "Spanish", &Structure::named("Spanish")),
            Some("el camion el".to_string())
        );
    }
}
