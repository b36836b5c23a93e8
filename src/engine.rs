use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, trace};

use crate::entry::EntryKind;
use crate::reader::{read_dir, DirReader};
use crate::results::ScanStats;
use crate::traits::{Matcher, Sink, Source};

// ---------------------------------------------------------------------------
// WalkConfig
// ---------------------------------------------------------------------------

/// Everything a walk needs besides its output sink.
///
/// Built by [`SearchBuilder`](crate::SearchBuilder), or directly by callers
/// that bring their own matcher and source.
pub struct WalkConfig {
    pub root:    PathBuf,
    pub matcher: Arc<dyn Matcher>,
    pub source:  Arc<dyn Source>,
}

// ---------------------------------------------------------------------------
// walk()
// ---------------------------------------------------------------------------

/// Depth-first walk from `config.root`, reporting into `sink`.
///
/// Each entry's candidate path is offered to the matcher. A match goes to
/// [`Sink::matched`] and is never descended into, directory or not. A
/// non-matching directory gets its own [`DirReader`] pushed on the
/// frontier, so its whole subtree is finished before the next sibling.
/// Directories that fail to list go to [`Sink::skipped`] and the walk
/// carries on with the parent.
///
/// The root itself is not tested, only its descendants. A root that cannot
/// be listed produces one `skipped` report and no matches.
pub fn walk(config: &WalkConfig, sink: &mut dyn Sink) -> ScanStats {
    let start = Instant::now();
    let mut stats = ScanStats::default();

    debug!(root = %config.root.display(), "walk started");

    // One reader per directory being expanded; the top is the one being consumed.
    let mut frontier: Vec<DirReader> = vec![open(config, &config.root, 1)];

    while let Some(reader) = frontier.last_mut() {
        let Some(entry) = reader.next() else {
            if let Some(mut done) = frontier.pop() {
                trace!(dir = %done.dir().display(), "directory done");
                if let Some(err) = done.take_failure() {
                    stats.unreadable += 1;
                    sink.skipped(err);
                }
            }
            continue;
        };

        trace!(path = %entry.path.display(), kind = ?entry.kind, "entry");

        match entry.kind {
            EntryKind::File => stats.files += 1,
            EntryKind::Dir => stats.dirs += 1,
            EntryKind::Symlink | EntryKind::Other => stats.others += 1,
        }

        if config.matcher.is_match(&entry) {
            stats.matches += 1;
            sink.matched(&entry);
            continue;
        }

        if entry.is_dir() {
            frontier.push(open(config, &entry.path, entry.depth + 1));
        }
    }

    let stats = stats.finish(start.elapsed());
    debug!(
        matches = stats.matches,
        files = stats.files,
        dirs = stats.dirs,
        unreadable = stats.unreadable,
        "walk finished"
    );
    stats
}

fn open(config: &WalkConfig, dir: &Path, depth: usize) -> DirReader {
    trace!(dir = %dir.display(), depth, "descending");
    read_dir(Arc::clone(&config.source), dir, depth)
}
