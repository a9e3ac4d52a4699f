//! Multi-pattern segmentation
//!
//! Patterns run in order. Each one only scans spans that no earlier pattern
//! claimed, so earlier patterns win every overlapping region. Spans are split,
//! never merged, and always tile the input.

use super::matcher::{Matcher, Occurrence};
use super::pattern::PatternSpec;
use super::span::{self, Span};

/// Partition `text` into spans according to `specs`
///
/// Zero-length spans are dropped from the result.
pub fn segment(text: &str, specs: &[PatternSpec]) -> Vec<Span> {
    let mut spans = vec![Span::unclaimed(0..text.len())];

    for (index, spec) in specs.iter().enumerate() {
        spans = apply_pattern(text, spans, index, spec);
        debug_assert!(span::covers(&spans, text.len()));
    }

    spans.retain(|span| !span.is_empty());
    spans
}

/// Run one pattern over every unclaimed span
fn apply_pattern(text: &str, spans: Vec<Span>, index: usize, spec: &PatternSpec) -> Vec<Span> {
    let matcher = Matcher::new(spec);
    let mut next = Vec::with_capacity(spans.len());
    let mut claimed = 0usize;

    for span in spans {
        if span.is_claimed() {
            next.push(span);
            continue;
        }

        let occurrences = matcher.find_occurrences(span.text(text));
        if occurrences.is_empty() {
            next.push(span);
            continue;
        }

        claimed += occurrences.len();
        split_span(&mut next, span.range.start, span.range.end, occurrences, index, spec);
    }

    log::trace!(
        "pattern #{} ({}) claimed {} occurrence(s)",
        index,
        spec.name().unwrap_or("unnamed"),
        claimed
    );

    next
}

/// Replace the unclaimed span `base..end` by its remainders and occurrences
fn split_span(
    out: &mut Vec<Span>,
    base: usize,
    end: usize,
    occurrences: Vec<Occurrence>,
    index: usize,
    spec: &PatternSpec,
) {
    let mut cursor = base;

    for occurrence in occurrences {
        let start = base + occurrence.start;
        let stop = base + occurrence.end;

        if start > cursor {
            out.push(Span::unclaimed(cursor..start));
        }
        out.push(Span::claimed(
            start..stop,
            index,
            occurrence.rendered,
            spec.on_press.clone(),
        ));
        cursor = stop;
    }

    if end > cursor {
        out.push(Span::unclaimed(cursor..end));
    }
}
