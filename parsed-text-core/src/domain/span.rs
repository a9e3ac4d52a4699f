//! Spans of the input tracked during segmentation

use super::pattern::PressHandler;
use std::ops::Range;

/// Claim state of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStatus {
    /// Not yet matched; later patterns may still scan it
    Unclaimed,
    /// Finalized by the pattern at `pattern` (index into the spec list)
    Claimed {
        /// Index of the claiming pattern
        pattern: usize,
    },
}

/// A contiguous byte range of the input with its claim state
#[derive(Debug, Clone)]
pub struct Span {
    /// Byte range into the original input
    pub range: Range<usize>,
    /// Claim state
    pub status: SpanStatus,
    /// Replacement text for claimed spans
    pub rendered: Option<String>,
    /// Interaction callback for claimed spans
    pub on_press: Option<PressHandler>,
}

impl Span {
    /// An unclaimed span over `range`
    pub fn unclaimed(range: Range<usize>) -> Self {
        Self {
            range,
            status: SpanStatus::Unclaimed,
            rendered: None,
            on_press: None,
        }
    }

    /// A span claimed by the pattern at index `pattern`
    pub fn claimed(
        range: Range<usize>,
        pattern: usize,
        rendered: String,
        on_press: Option<PressHandler>,
    ) -> Self {
        Self {
            range,
            status: SpanStatus::Claimed { pattern },
            rendered: Some(rendered),
            on_press,
        }
    }

    /// The span's original text
    ///
    /// `input` must be the string the span was cut from.
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        input.get(self.range.clone()).unwrap_or_default()
    }

    /// Whether some pattern already finalized this span
    pub fn is_claimed(&self) -> bool {
        matches!(self.status, SpanStatus::Claimed { .. })
    }

    /// Whether the span covers no bytes
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Index of the claiming pattern
    pub fn pattern(&self) -> Option<usize> {
        match self.status {
            SpanStatus::Claimed { pattern } => Some(pattern),
            SpanStatus::Unclaimed => None,
        }
    }
}

/// Whether `spans` tile `0..len` exactly, in order
///
/// Equivalent to the concatenation of every span's text reproducing the input.
pub fn covers(spans: &[Span], len: usize) -> bool {
    let mut cursor = 0;
    for span in spans {
        if span.range.start != cursor || span.range.end < span.range.start {
            return false;
        }
        cursor = span.range.end;
    }
    cursor == len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_text_and_status() {
        let input = "hello world";
        let span = Span::claimed(6..11, 2, "WORLD".to_string(), None);

        assert_eq!(span.text(input), "world");
        assert!(span.is_claimed());
        assert_eq!(span.pattern(), Some(2));
        assert!(!Span::unclaimed(0..5).is_claimed());
    }

    #[test]
    fn test_covers() {
        let spans = vec![Span::unclaimed(0..3), Span::unclaimed(3..3), Span::unclaimed(3..7)];
        assert!(covers(&spans, 7));
        assert!(!covers(&spans, 8));

        let gap = vec![Span::unclaimed(0..3), Span::unclaimed(4..7)];
        assert!(!covers(&gap, 7));

        assert!(covers(&[], 0));
    }
}
