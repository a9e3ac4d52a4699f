//! Property tests for the span partition

use parsed_text_core::domain::{segment, span::covers};
use parsed_text_core::{parse, PatternSpec};
use proptest::prelude::*;

const PATTERNS: &[&str] = &["a", "ab", "b+", "a*", "^a", "c$", r"\w+", "é", "[abc]{2}"];

fn specs(indices: &[usize]) -> Vec<PatternSpec> {
    indices
        .iter()
        .map(|&i| {
            PatternSpec::from_regex(PATTERNS[i % PATTERNS.len()])
                .unwrap()
                .render_template("<$0>")
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_chunks_reassemble_input(
        text in "[abcé ]{0,40}",
        indices in prop::collection::vec(0usize..PATTERNS.len(), 0..4),
    ) {
        let chunks = parse(&text, &specs(&indices));
        let rebuilt: String = chunks.iter().map(|c| c.text.as_str()).collect();
        prop_assert_eq!(rebuilt, text);
        prop_assert!(chunks.iter().all(|c| !c.text.is_empty()));
    }

    #[test]
    fn prop_spans_tile_input(
        text in "[abcé ]{0,40}",
        indices in prop::collection::vec(0usize..PATTERNS.len(), 0..4),
    ) {
        let spans = segment(&text, &specs(&indices));
        prop_assert!(covers(&spans, text.len()));
    }

    #[test]
    fn prop_later_patterns_never_split_earlier_claims(
        text in "[abc ]{0,40}",
        index in 0usize..PATTERNS.len(),
    ) {
        let first = specs(&[index]);
        let alone = segment(&text, &first);

        let mut both = specs(&[index]);
        both.push(PatternSpec::from_regex("[abc]").unwrap());
        let combined = segment(&text, &both);

        let claimed_alone: Vec<_> = alone
            .iter()
            .filter(|s| s.pattern() == Some(0))
            .map(|s| s.range.clone())
            .collect();
        let claimed_combined: Vec<_> = combined
            .iter()
            .filter(|s| s.pattern() == Some(0))
            .map(|s| s.range.clone())
            .collect();
        prop_assert_eq!(claimed_alone, claimed_combined);
    }
}
