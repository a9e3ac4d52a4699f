//! Occurrence scanning for a single pattern

use super::pattern::{PatternSpec, RenderText};
use regex::Captures;
use smallvec::SmallVec;

/// Capture groups of one occurrence, excluding the full match
pub type CaptureGroups = SmallVec<[Option<String>; 4]>;

/// One match of a pattern inside a scanned span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// Byte offset of the match start, relative to the scanned text
    pub start: usize,
    /// Byte offset one past the match end, relative to the scanned text
    pub end: usize,
    /// The matched text
    pub full_match: String,
    /// Capture groups; `None` for groups that did not participate
    pub groups: CaptureGroups,
    /// Replacement text computed from the pattern's rendering
    pub rendered: String,
}

/// Scans text for occurrences of one pattern
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'p> {
    spec: &'p PatternSpec,
}

impl<'p> Matcher<'p> {
    /// Create a matcher for `spec`
    pub fn new(spec: &'p PatternSpec) -> Self {
        Self { spec }
    }

    /// Find the non-overlapping occurrences in `text`, left to right
    ///
    /// Every call starts scanning at offset 0 of `text`, whatever the regex
    /// was used for before. The result is capped by the spec's match limit.
    pub fn find_occurrences(&self, text: &str) -> Vec<Occurrence> {
        let limit = self.spec.max_matches;
        let mut occurrences = Vec::new();

        for caps in self.spec.regex.captures_iter(text) {
            if !limit.allows(occurrences.len()) {
                break;
            }
            occurrences.push(self.occurrence(&caps));
        }

        occurrences
    }

    fn occurrence(&self, caps: &Captures<'_>) -> Occurrence {
        // Group 0 always participates in a match
        let (start, end, full_match) = caps
            .get(0)
            .map(|m| (m.start(), m.end(), m.as_str()))
            .unwrap_or_default();

        let groups: CaptureGroups = caps
            .iter()
            .skip(1)
            .map(|group| group.map(|m| m.as_str().to_string()))
            .collect();

        let rendered = match &self.spec.render {
            RenderText::Verbatim => full_match.to_string(),
            RenderText::Function(render) => render(full_match, &groups),
            RenderText::Template(template) => {
                let mut dst = String::new();
                caps.expand(template, &mut dst);
                dst
            }
        };

        Occurrence {
            start,
            end,
            full_match: full_match.to_string(),
            groups,
            rendered,
        }
    }
}
