//! Structure transformation: reorder a sentence's words from one tag
//! sequence into another.

use crate::grammar::GrammarTable;
use crate::structure::{Structure, expand_repetitions};

/// Reorder `sentence` from `source` structure into `target` structure.
///
/// Both structures are resolved and repetition-expanded, then the sentence
/// tokens are zipped positionally with the expanded source tags (the caller
/// is responsible for matching lengths; the zip truncates at the shorter
/// side). For each target tag, in order, the first zipped pair with that tag
/// supplies its token. Pairs are not consumed, so a tag repeated in the
/// target can reuse a single source token. A target tag with no match is
/// skipped silently and the output comes out shorter; that degradation is
/// part of the contract.
pub fn transform(
    grammar: &GrammarTable,
    sentence: &str,
    source: &Structure,
    target: &Structure,
) -> String {
    let source_tags = expand_repetitions(&source.resolve(grammar));
    let target_tags = expand_repetitions(&target.resolve(grammar));

    let zipped: Vec<(&str, &String)> = sentence
        .split_whitespace()
        .zip(source_tags.iter())
        .collect();

    let mut transformed = Vec::new();
    for tag in &target_tags {
        if let Some((word, _)) = zipped.iter().find(|(_, t)| *t == tag) {
            transformed.push(*word);
        }
    }
    transformed.join(" ")
}
