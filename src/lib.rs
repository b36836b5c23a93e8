//! # rfind
//!
//! Find filesystem entries whose path matches a pattern.
//!
//! A pattern is compiled twice, as a regular expression and as a glob, and
//! an entry is a hit if *either* accepts its path. The walk is depth-first;
//! a matching directory is reported but not descended into. Directories
//! that cannot be read are reported and skipped without stopping the walk.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let results = rfind::search()
//!     .root("src")
//!     .pattern(r"\.rs$")
//!     .run()
//!     .unwrap();
//!
//! for path in &results.paths {
//!     println!("{}", path.display());
//! }
//! println!("{} matches, {} unreadable directories", results.matches, results.errors.len());
//! ```
//!
//! # Streaming
//!
//! Implement [`Sink`] to receive matches as they are found:
//!
//! ```rust,no_run
//! use rfind::{Entry, FindError, Sink};
//!
//! struct Print;
//!
//! impl Sink for Print {
//!     fn matched(&mut self, entry: &Entry) {
//!         println!("{}", entry.path.display());
//!     }
//!     fn skipped(&mut self, error: FindError) {
//!         eprintln!("{error}");
//!     }
//! }
//!
//! rfind::search().root(".").pattern("Cargo").run_into(&mut Print).unwrap();
//! ```
//!
//! # Structure
//!
//! Each directory is listed by a [`DirReader`]: a lazy sequence fed by its
//! own producer thread through a rendezvous channel. The walker keeps a
//! stack of readers, one per directory in progress, and always consumes
//! the top one, so sibling subtrees are visited strictly one after another.

#![forbid(unsafe_code)]

pub mod engine;
pub mod reader;

mod builder;
mod entry;
mod error;
mod pattern;
mod results;
mod source;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::SearchBuilder;
pub use entry::{Entry, EntryKind, Listing};
pub use error::FindError;
pub use pattern::Pattern;
pub use reader::{read_dir, DirReader};
pub use results::{Results, ScanStats};
pub use source::FsSource;
pub use traits::{Matcher, Sink, Source};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`SearchBuilder`] to configure and run a search.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use rfind::{EntryKind, FindError, Listing, Source};
///
/// struct Flat;
///
/// impl Source for Flat {
///     fn list(&self, _dir: &Path) -> Result<Vec<Listing>, FindError> {
///         Ok(vec![
///             Listing::new("invoice.txt", EntryKind::File),
///             Listing::new("report.txt", EntryKind::File),
///         ])
///     }
/// }
///
/// let results = rfind::search()
///     .root("inbox")
///     .source(Flat)
///     .pattern("invoice")
///     .run()
///     .unwrap();
///
/// assert_eq!(results.matches, 1);
/// assert_eq!(results.paths[0], Path::new("inbox/invoice.txt"));
/// ```
pub fn search() -> SearchBuilder {
    SearchBuilder::default()
}
