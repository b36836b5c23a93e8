use std::path::PathBuf;
use std::time::Duration;

use crate::entry::Entry;
use crate::error::FindError;
use crate::traits::Sink;

/// The output of a completed search run through [`SearchBuilder::run`](crate::SearchBuilder::run).
pub struct Results {
    /// Total number of entries that matched.
    pub matches: usize,

    /// Matched candidate paths, in the order they were found.
    pub paths: Vec<PathBuf>,

    /// Scan statistics.
    pub stats: ScanStats,

    /// Directories that could not be listed. Each cost only its own subtree.
    pub errors: Vec<FindError>,
}

/// Statistics for a completed walk.
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    /// Regular files encountered (matched or not).
    pub files: usize,

    /// Directories encountered, not counting the root.
    pub dirs: usize,

    /// Symlinks and special files encountered.
    pub others: usize,

    /// Entries reported as matches.
    pub matches: usize,

    /// Directories whose listing failed, the root included.
    pub unreadable: usize,

    /// Wall-clock time from walk start to completion.
    pub duration: Duration,

    /// Total entries scanned per second. Clamped to 0 on zero-duration runs.
    pub entries_per_sec: usize,
}

impl ScanStats {
    /// Fill in `entries_per_sec` once the walk is over.
    pub(crate) fn finish(mut self, duration: Duration) -> Self {
        let total = self.files + self.dirs + self.others;
        self.entries_per_sec = if duration.as_secs_f64() > 0.0 {
            (total as f64 / duration.as_secs_f64()) as usize
        } else {
            0
        };
        self.duration = duration;
        self
    }
}

/// Sink that keeps everything, backing [`Results`].
#[derive(Default)]
pub(crate) struct Collector {
    pub paths: Vec<PathBuf>,
    pub errors: Vec<FindError>,
}

impl Sink for Collector {
    fn matched(&mut self, entry: &Entry) {
        self.paths.push(entry.path.clone());
    }

    fn skipped(&mut self, error: FindError) {
        self.errors.push(error);
    }
}
