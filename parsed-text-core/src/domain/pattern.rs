//! Pattern specifications supplied by callers

use regex::Regex;
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Signature of a render callback: `(full_match, capture_groups) -> rendered`
///
/// Capture groups exclude the full match; groups that did not participate are
/// `None`.
pub type RenderFn = dyn Fn(&str, &[Option<String>]) -> String + Send + Sync;

/// How a matched occurrence is rendered
#[derive(Clone, Default)]
pub enum RenderText {
    /// Use the matched text as is. Also the fallback for render values that
    /// cannot be invoked.
    #[default]
    Verbatim,
    /// Call a function with the match and its capture groups
    Function(Arc<RenderFn>),
    /// Expand a replacement template (`$1`, `${name}`) against the captures
    Template(String),
}

impl RenderText {
    /// Wrap a closure as a render function
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&str, &[Option<String>]) -> String + Send + Sync + 'static,
    {
        RenderText::Function(Arc::new(f))
    }

    /// Normalize a loosely typed value coming from a configuration layer
    ///
    /// Only strings are usable (as templates); every other value is not
    /// invokable and silently degrades to [`RenderText::Verbatim`].
    pub fn from_value(value: &toml::Value) -> Self {
        match value {
            toml::Value::String(template) => RenderText::Template(template.clone()),
            _ => RenderText::Verbatim,
        }
    }

    /// Whether this rendering replaces the matched text
    pub fn is_verbatim(&self) -> bool {
        matches!(self, RenderText::Verbatim)
    }
}

impl fmt::Debug for RenderText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderText::Verbatim => f.write_str("Verbatim"),
            RenderText::Function(_) => f.debug_tuple("Function").field(&"<fn>").finish(),
            RenderText::Template(t) => f.debug_tuple("Template").field(t).finish(),
        }
    }
}

/// Interaction callback attached to matched chunks
///
/// Receives the original matched text, not the rendered one.
#[derive(Clone)]
pub struct PressHandler(Arc<dyn Fn(&str) + Send + Sync>);

impl PressHandler {
    /// Wrap a closure as a press handler
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke the handler
    pub fn call(&self, matched: &str) {
        (self.0)(matched)
    }

    /// Whether two handles share the same callback
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for PressHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PressHandler(<fn>)")
    }
}

/// Upper bound on occurrences produced per scan
///
/// Absent means unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchLimit(Option<NonZeroUsize>);

impl MatchLimit {
    /// No bound
    pub const UNLIMITED: MatchLimit = MatchLimit(None);

    /// At most `count` occurrences; zero means unlimited
    pub fn at_most(count: usize) -> Self {
        Self(NonZeroUsize::new(count))
    }

    /// Build from a signed count; zero and negatives mean unlimited
    pub fn from_signed(count: i64) -> Self {
        usize::try_from(count)
            .map(Self::at_most)
            .unwrap_or(Self::UNLIMITED)
    }

    /// Normalize a loosely typed value coming from a configuration layer
    ///
    /// Positive integers (or floats with no fractional part) bound the scan.
    /// Anything else, including strings, is unlimited.
    pub fn from_value(value: &toml::Value) -> Self {
        match value {
            toml::Value::Integer(n) => Self::from_signed(*n),
            toml::Value::Float(f) if f.is_finite() && *f >= 1.0 && f.fract() == 0.0 => {
                if *f >= usize::MAX as f64 {
                    Self::UNLIMITED
                } else {
                    Self::at_most(*f as usize)
                }
            }
            _ => Self::UNLIMITED,
        }
    }

    /// The bound, if any
    pub fn get(&self) -> Option<usize> {
        self.0.map(NonZeroUsize::get)
    }

    /// Whether another occurrence may be taken after `taken` already were
    pub fn allows(&self, taken: usize) -> bool {
        self.0.map_or(true, |max| taken < max.get())
    }
}

impl From<Option<usize>> for MatchLimit {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Self::UNLIMITED, Self::at_most)
    }
}

/// A single pattern with its annotations
///
/// Read-only while a parse runs.
#[derive(Debug, Clone)]
pub struct PatternSpec {
    pub(crate) regex: Regex,
    pub(crate) name: Option<String>,
    pub(crate) render: RenderText,
    pub(crate) on_press: Option<PressHandler>,
    pub(crate) max_matches: MatchLimit,
}

impl PatternSpec {
    /// Create a spec with no annotations
    pub fn new(regex: Regex) -> Self {
        Self {
            regex,
            name: None,
            render: RenderText::Verbatim,
            on_press: None,
            max_matches: MatchLimit::UNLIMITED,
        }
    }

    /// Compile `pattern` and create a spec from it
    pub fn from_regex(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::new(Regex::new(pattern)?))
    }

    /// Attach a display name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the rendering
    pub fn render(mut self, render: RenderText) -> Self {
        self.render = render;
        self
    }

    /// Render occurrences with a closure
    pub fn render_with<F>(self, f: F) -> Self
    where
        F: Fn(&str, &[Option<String>]) -> String + Send + Sync + 'static,
    {
        self.render(RenderText::function(f))
    }

    /// Render occurrences by expanding a replacement template
    pub fn render_template(self, template: impl Into<String>) -> Self {
        self.render(RenderText::Template(template.into()))
    }

    /// Attach an interaction callback
    pub fn on_press<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_press = Some(PressHandler::new(f));
        self
    }

    /// Attach an existing press handler
    pub fn press_handler(mut self, handler: PressHandler) -> Self {
        self.on_press = Some(handler);
        self
    }

    /// Bound the number of occurrences per scan
    pub fn max_matches(mut self, limit: impl Into<MatchLimit>) -> Self {
        self.max_matches = limit.into();
        self
    }

    /// The underlying regex
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Display name, if one was given
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Current rendering
    pub fn render_text(&self) -> &RenderText {
        &self.render
    }

    /// Current press handler
    pub fn press(&self) -> Option<&PressHandler> {
        self.on_press.as_ref()
    }

    /// Current occurrence bound
    pub fn match_limit(&self) -> MatchLimit {
        self.max_matches
    }
}
