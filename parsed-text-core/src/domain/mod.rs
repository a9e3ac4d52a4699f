//! Segmentation domain: patterns, matching, spans
//!
//! Everything here is pure and infallible. Configuration and public output
//! types live in [`crate::config`] and [`crate::api`].

pub mod matcher;
pub mod pattern;
pub mod segmenter;
pub mod span;

pub use matcher::{CaptureGroups, Matcher, Occurrence};
pub use pattern::{MatchLimit, PatternSpec, PressHandler, RenderFn, RenderText};
pub use segmenter::segment;
pub use span::{Span, SpanStatus};
