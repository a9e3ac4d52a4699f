//! Public output unit

use crate::domain::{PressHandler, Span};
use serde::Serialize;

/// One piece of parsed output
///
/// Concatenating `text` over all chunks reproduces the input; concatenating
/// `children` gives the rendered form.
#[derive(Debug, Clone, Serialize)]
pub struct Chunk {
    /// Rendered text (the original text for unmatched chunks)
    pub children: String,
    /// Original text of the chunk
    pub text: String,
    /// Byte offset in the input
    pub offset: usize,
    /// Index of the pattern that matched this chunk
    pub pattern: Option<usize>,
    /// Interaction callback of the matching pattern
    #[serde(skip)]
    pub on_press: Option<PressHandler>,
}

impl Chunk {
    pub(crate) fn from_span(span: Span, input: &str) -> Self {
        let text = span.text(input).to_string();
        let pattern = span.pattern();
        Self {
            children: span.rendered.unwrap_or_else(|| text.clone()),
            offset: span.range.start,
            pattern,
            on_press: span.on_press,
            text,
        }
    }

    /// Whether a pattern matched this chunk
    pub fn is_matched(&self) -> bool {
        self.pattern.is_some()
    }

    /// Byte length of the original text
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the original text is empty (never true for parser output)
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Invoke the press callback with the original text
    ///
    /// Returns `false` when the chunk has no callback.
    pub fn press(&self) -> bool {
        match &self.on_press {
            Some(handler) => {
                handler.call(&self.text);
                true
            }
            None => false,
        }
    }
}

/// Concatenate the rendered text of `chunks`
pub fn render(chunks: &[Chunk]) -> String {
    chunks.iter().map(|c| c.children.as_str()).collect()
}
