use std::path::Path;

use crate::entry::{Entry, Listing};
use crate::error::FindError;

/// Lists the immediate children of one directory.
///
/// The walk never touches the filesystem directly; it asks a `Source`.
/// [`FsSource`](crate::source::FsSource) is the real filesystem, and tests
/// substitute in-memory trees.
///
/// # Thread Safety
///
/// `Send + Sync` are required: each directory is listed on its own
/// producer thread, all sharing one source.
///
/// # Error Handling
///
/// Return `Err` when the directory cannot be listed at all. The walk
/// reports it and moves on to the next sibling.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use rfind::{EntryKind, FindError, Listing, Source};
///
/// struct Flat(Vec<&'static str>);
///
/// impl Source for Flat {
///     fn list(&self, _dir: &Path) -> Result<Vec<Listing>, FindError> {
///         Ok(self.0.iter().map(|n| Listing::new(*n, EntryKind::File)).collect())
///     }
/// }
/// ```
pub trait Source: Send + Sync {
    /// List `dir`, without recursing. Order does not matter.
    fn list(&self, dir: &Path) -> Result<Vec<Listing>, FindError>;
}

/// Determines whether an entry is a match.
///
/// [`Pattern`](crate::pattern::Pattern) is the stock implementation.
///
/// # Example
///
/// ```rust
/// use rfind::{Matcher, Entry};
///
/// struct ExtensionMatcher(String);
///
/// impl Matcher for ExtensionMatcher {
///     fn is_match(&self, entry: &Entry) -> bool {
///         entry.path
///             .extension()
///             .map(|e| e.eq_ignore_ascii_case(&self.0))
///             .unwrap_or(false)
///     }
/// }
/// ```
pub trait Matcher: Send + Sync {
    /// Returns `true` if this entry should be reported.
    fn is_match(&self, entry: &Entry) -> bool;
}

/// Receives the walk's output.
///
/// Matches and skipped directories arrive on the walker's thread, one at a
/// time, in traversal order.
pub trait Sink {
    /// An entry matched. The walk will not descend into it.
    fn matched(&mut self, entry: &Entry);

    /// A directory could not be listed. Its subtree contributes nothing.
    fn skipped(&mut self, error: FindError);
}
