use std::path::PathBuf;
use std::sync::Arc;

use crate::engine::{walk, WalkConfig};
use crate::entry::Entry;
use crate::error::FindError;
use crate::pattern::Pattern;
use crate::results::{Collector, Results, ScanStats};
use crate::source::FsSource;
use crate::traits::{Matcher, Sink, Source};

// ---------------------------------------------------------------------------
// SearchBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a search.
///
/// Created via [`rfind::search()`](crate::search). Configure with chained
/// builder methods, then call [`run()`](SearchBuilder::run) to collect
/// results or [`run_into()`](SearchBuilder::run_into) to stream them.
///
/// # Example
///
/// ```rust,ignore
/// let results = rfind::search()
///     .root("src")
///     .pattern(r"\.rs$")
///     .run()?;
/// ```
pub struct SearchBuilder {
    root:    PathBuf,
    matcher: Option<MatcherSpec>,
    source:  Arc<dyn Source>,
}

enum MatcherSpec {
    Pattern(String),
    Custom(Arc<dyn Matcher>),
}

impl Default for SearchBuilder {
    fn default() -> Self {
        Self {
            root:    PathBuf::from("."),
            matcher: None,
            source:  Arc::new(FsSource),
        }
    }
}

impl SearchBuilder {
    // ── Root ──────────────────────────────────────────────────────────────

    /// Directory to start from. Defaults to `.`.
    ///
    /// Not checked up front: a root that cannot be listed shows up as a
    /// single skipped directory and an empty result.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    // ── Source ────────────────────────────────────────────────────────────

    /// Replace the filesystem with another [`Source`].
    pub fn source(mut self, s: impl Source + 'static) -> Self {
        self.source = Arc::new(s);
        self
    }

    // ── Matcher ───────────────────────────────────────────────────────────

    /// Match with a [`Pattern`] compiled from `pattern` when the search runs.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.matcher = Some(MatcherSpec::Pattern(pattern.into()));
        self
    }

    /// Set a custom matcher instead of a pattern.
    pub fn with_matcher(mut self, m: impl Matcher + 'static) -> Self {
        self.matcher = Some(MatcherSpec::Custom(Arc::new(m)));
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Run the search and collect everything into [`Results`].
    ///
    /// # Errors
    ///
    /// Only an invalid pattern is fatal. Unreadable directories are
    /// collected into [`Results::errors`].
    pub fn run(self) -> Result<Results, FindError> {
        let mut collector = Collector::default();
        let stats = self.run_into(&mut collector)?;
        Ok(Results {
            matches: collector.paths.len(),
            paths:   collector.paths,
            stats,
            errors:  collector.errors,
        })
    }

    /// Run the search, streaming matches and skipped directories into `sink`.
    ///
    /// The pattern is compiled before anything is read, so a bad pattern
    /// leaves `sink` untouched.
    pub fn run_into(self, sink: &mut dyn Sink) -> Result<ScanStats, FindError> {
        let config = self.into_config()?;
        Ok(walk(&config, sink))
    }

    fn into_config(self) -> Result<WalkConfig, FindError> {
        // Default matcher: match everything
        let matcher: Arc<dyn Matcher> = match self.matcher {
            Some(MatcherSpec::Pattern(p)) => Arc::new(Pattern::new(&p)?),
            Some(MatcherSpec::Custom(m)) => m,
            None => Arc::new(AllMatcher),
        };

        Ok(WalkConfig {
            root: self.root,
            matcher,
            source: self.source,
        })
    }
}

/// Matches every entry. Used when no pattern or matcher is given.
struct AllMatcher;

impl Matcher for AllMatcher {
    fn is_match(&self, _entry: &Entry) -> bool {
        true
    }
}
