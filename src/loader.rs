//! Loading lexicon and grammar data from files.
//!
//! Two fixed line formats are supported, plus a JSON form of the lexicon.
//! Malformed lines and members are skipped with a warning, never a fatal
//! error; only file-level problems (missing file, unreadable, broken JSON)
//! surface as [`LoadError`].

use std::fs;
use std::path::Path;

use regex::Regex;
use serde_json::Value;

use crate::grammar::GrammarTable;
use crate::lexicon::{Lexicon, LexiconEntry};

/// Error types for loading operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// File could not be read
    Io(String),
    /// JSON input could not be parsed or has the wrong shape
    Json(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(msg) => write!(f, "I/O error: {}", msg),
            LoadError::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

/// Result type for loading operations
pub type LoadResult<T> = Result<T, LoadError>;

/// Parse lexicon lines of the form
/// `word, POS, Language:translation, Language:translation, ...`
///
/// `word` matches `[a-z-]+`, `POS` matches `[A-Z]{3}` and each translation
/// pairs a capitalized language name with a lowercase word. Lines that do
/// not match the format are skipped.
pub fn parse_lexicon(input: &str) -> Lexicon {
    let line_re = Regex::new(r"^([a-z-]+), ([A-Z]{3}), ([A-Z][a-z0-9]+:[a-z-]+,*\s*)+$").unwrap();

    let mut lexicon = Lexicon::new();
    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !line_re.is_match(line) {
            eprintln!("Warning: skipping malformed lexicon line: '{}'", line);
            continue;
        }

        let mut fields = line.split(", ");
        // The regex guarantees at least word, pos and one translation.
        let word = match fields.next() {
            Some(w) => w,
            None => continue,
        };
        let pos = match fields.next() {
            Some(p) => p,
            None => continue,
        };

        let mut entry = LexiconEntry::new(word, pos);
        for field in fields {
            if let Some((language, translated)) = field.trim().trim_end_matches(',').split_once(':')
            {
                entry = entry.with_translation(language, translated);
            }
        }
        lexicon.insert(entry);
    }
    lexicon
}

/// Parse grammar lines of the form `Language: POS, POS{n}, ...`
///
/// `Language` matches `[A-Z][a-z0-9]+`; each tag matches `[A-Z]{3}` with an
/// optional `{1-9}` repetition suffix. Non-matching lines are skipped.
pub fn parse_grammar(input: &str) -> GrammarTable {
    let line_re = Regex::new(r"^([A-Z][a-z0-9]+):\s+([A-Z]{3}(\{[1-9]\})?,*\s*)*$").unwrap();

    let mut grammar = GrammarTable::new();
    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !line_re.is_match(line) {
            eprintln!("Warning: skipping malformed grammar line: '{}'", line);
            continue;
        }

        if let Some((language, rest)) = line.split_once(':') {
            let tags: Vec<String> = rest
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();
            grammar.insert(language, tags);
        }
    }
    grammar
}

/// Load a lexicon from a line-format file.
pub fn load_lexicon_from_file(path: &Path) -> LoadResult<Lexicon> {
    let content = fs::read_to_string(path)
        .map_err(|e| LoadError::Io(format!("failed to read '{}': {}", path.display(), e)))?;
    Ok(parse_lexicon(&content))
}

/// Load a grammar table from a line-format file.
pub fn load_grammar_from_file(path: &Path) -> LoadResult<GrammarTable> {
    let content = fs::read_to_string(path)
        .map_err(|e| LoadError::Io(format!("failed to read '{}': {}", path.display(), e)))?;
    Ok(parse_grammar(&content))
}

/// Parse a lexicon from JSON input of the form
///
/// ```json
/// {
///     "truck": { "pos": "NOU", "translations": { "Spanish": "camion" } },
///     "the": { "pos": "DET", "translations": { "Spanish": "el" } }
/// }
/// ```
///
/// Members that do not follow this shape are skipped with a warning: an
/// entry needs a three-letter uppercase `pos`, and each translation value
/// must be a string. Only unparseable JSON or a non-object root is an error.
pub fn parse_lexicon_json(input: &str) -> LoadResult<Lexicon> {
    let json: Value = serde_json::from_str(input)
        .map_err(|e| LoadError::Json(format!("failed to parse JSON: {}", e)))?;

    let obj = json
        .as_object()
        .ok_or_else(|| LoadError::Json("root must be an object".to_string()))?;

    let mut lexicon = Lexicon::new();
    for (word, value) in obj {
        let pos = value.get("pos").and_then(Value::as_str);
        let pos = match pos {
            Some(p) if p.len() == 3 && p.chars().all(|c| c.is_ascii_uppercase()) => p,
            _ => {
                eprintln!("Warning: entry '{}' has no valid pos, skipping", word);
                continue;
            }
        };

        let mut entry = LexiconEntry::new(word, pos);
        if let Some(translations) = value.get("translations").and_then(Value::as_object) {
            for (language, translated) in translations {
                match translated.as_str() {
                    Some(t) => entry = entry.with_translation(language, t),
                    None => eprintln!(
                        "Warning: translation '{}' of '{}' is not a string, skipping",
                        language, word
                    ),
                }
            }
        }
        lexicon.insert(entry);
    }
    Ok(lexicon)
}

/// Load a lexicon from a JSON file; see [`parse_lexicon_json`] for the
/// expected shape.
pub fn load_lexicon_from_json(path: &Path) -> LoadResult<Lexicon> {
    let content = fs::read_to_string(path)
        .map_err(|e| LoadError::Io(format!("failed to read '{}': {}", path.display(), e)))?;
    parse_lexicon_json(&content).map_err(|e| match e {
        LoadError::Json(msg) => LoadError::Json(format!("in '{}': {}", path.display(), msg)),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lexicon() {
        let input = "\
the, DET, Spanish:el, French:le
truck, NOU, Spanish:camion
";
        let lexicon = parse_lexicon(input);
        assert_eq!(lexicon.len(), 2);
        let the = lexicon.lookup("the").unwrap();
        assert_eq!(the.pos, "DET");
        assert_eq!(the.translation("Spanish"), Some("el"));
        assert_eq!(the.translation("French"), Some("le"));
    }

    #[test]
    fn test_parse_lexicon_skips_malformed_lines() {
        let input = "\
the, DET, Spanish:el
truck NOU Spanish:camion
sea, NOUN, French:mer
fork, NOU, German gabel
blue, ADJ, French:bleu
";
        // Missing commas, a four-letter tag and a missing translation colon
        // are all dropped without affecting the rest.
        let lexicon = parse_lexicon(input);
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.lookup("the").is_some());
        assert!(lexicon.lookup("blue").is_some());
    }

    #[test]
    fn test_parse_lexicon_keeps_insertion_order() {
        let input = "\
blue, ADJ, French:bleu
red, ADJ, French:rouge
";
        let lexicon = parse_lexicon(input);
        assert_eq!(lexicon.entries()[0].word, "blue");
        assert_eq!(lexicon.find_by_pos("ADJ", None).unwrap().word, "blue");
    }

    #[test]
    fn test_parse_grammar() {
        let input = "\
English: DET, ADJ, NOU
Spanish: DET, NOU, DET
";
        let grammar = parse_grammar(input);
        assert_eq!(grammar.len(), 2);
        assert_eq!(
            grammar.tags_for("Spanish"),
            vec!["DET".to_string(), "NOU".to_string(), "DET".to_string()]
        );
    }

    #[test]
    fn test_parse_grammar_with_repetition() {
        let grammar = parse_grammar("Spanish: DET{2}, NOU\n");
        assert_eq!(
            grammar.tags_for("Spanish"),
            vec!["DET{2}".to_string(), "NOU".to_string()]
        );
    }

    #[test]
    fn test_parse_grammar_skips_malformed_lines() {
        let input = "\
English: DET, ADJ, NOU
german: NOU, ADJ
French: adjective, noun
Spanish: DET{0}, NOU
";
        // Lowercase language, lowercase tags and an out-of-range repetition
        // count all fail the line pattern.
        let grammar = parse_grammar(input);
        assert_eq!(grammar.len(), 1);
        assert!(grammar.contains("English"));
    }

    #[test]
    fn test_parse_lexicon_json() {
        let input = r#"{
            "truck": { "pos": "NOU", "translations": { "Spanish": "camion" } },
            "the": { "pos": "DET", "translations": { "Spanish": "el", "French": "le" } }
        }"#;
        let lexicon = parse_lexicon_json(input).unwrap();
        assert_eq!(lexicon.len(), 2);
        let the = lexicon.lookup("the").unwrap();
        assert_eq!(the.pos, "DET");
        assert_eq!(the.translation("French"), Some("le"));
    }

    #[test]
    fn test_parse_lexicon_json_skips_malformed_members() {
        let input = r#"{
            "truck": { "pos": "NOU", "translations": { "Spanish": "camion" } },
            "sea": { "pos": "NOUN", "translations": { "French": "mer" } },
            "fork": { "translations": { "German": "gabel" } },
            "the": { "pos": "DET", "translations": { "Spanish": "el", "German": 3 } }
        }"#;
        // A four-letter pos and a missing pos drop the member; a non-string
        // translation drops just that translation.
        let lexicon = parse_lexicon_json(input).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.lookup("sea").is_none());
        assert!(lexicon.lookup("fork").is_none());
        let the = lexicon.lookup("the").unwrap();
        assert_eq!(the.translation("Spanish"), Some("el"));
        assert_eq!(the.translation("German"), None);
    }

    #[test]
    fn test_parse_lexicon_json_rejects_non_object_root() {
        assert!(matches!(
            parse_lexicon_json(r#"["truck"]"#),
            Err(LoadError::Json(_))
        ));
        assert!(matches!(
            parse_lexicon_json("not json at all"),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let err = load_lexicon_from_file(Path::new("/no/such/file.txt")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
