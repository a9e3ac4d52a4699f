//! Multi-pattern text segmentation
//!
//! Splits a string into an ordered list of chunks. Some chunks are matched by
//! one of several caller-supplied patterns and carry a rendered replacement
//! and an optional press callback; the rest are plain text. Nothing here draws
//! anything: the chunks are meant to feed a rich-text renderer.
//!
//! Patterns are applied in order, and each one only sees the parts of the
//! input that no earlier pattern has claimed.
//!
//! # Architecture
//!
//! - **Domain layer**: pattern specs, the per-pattern matcher, and the
//!   segmenter that maintains the span partition
//! - **API layer**: public chunks and the reusable [`TextParser`]
//! - **Config layer**: TOML pattern sets and the built-in pattern library
//!
//! # Example
//!
//! ```rust
//! use parsed_text_core::{PatternSpec, TextParser};
//!
//! let parser = TextParser::builder()
//!     .builtin("url")
//!     .unwrap()
//!     .pattern(PatternSpec::from_regex(r"#\w+").unwrap().render_template("[$0]"))
//!     .build();
//!
//! let chunks = parser.parse("see http://foo.bar #news");
//! assert_eq!(chunks.len(), 4);
//! assert_eq!(chunks[1].children, "http://foo.bar");
//! assert_eq!(chunks[3].children, "[#news]");
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod domain;
pub mod error;

pub use api::{parse, render, Chunk, TextParser, TextParserBuilder};
pub use config::{builtin_spec, list_builtin_patterns, PatternConfig, PatternSetConfig};
pub use domain::{MatchLimit, PatternSpec, PressHandler, RenderText};
pub use error::{ConfigError, Result};
