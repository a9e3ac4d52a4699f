//! Pattern configuration
//!
//! Pattern sets are written in TOML. Loosely typed fields (`render`,
//! `max_matches`) are normalized here so the domain only sees typed values.

mod loader;
mod types;

pub use loader::{builtin_pattern, builtin_spec, list_builtin_patterns};
pub use types::{PatternConfig, PatternSetConfig};
