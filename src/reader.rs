use std::ffi::OsStr;
use std::iter::FusedIterator;
use std::path::{Component, Path, PathBuf};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::entry::Entry;
use crate::error::FindError;
use crate::traits::Source;

enum Message {
    Entry(Entry),
    Failed(FindError),
}

/// Lazy sequence of one directory's immediate entries.
///
/// Backed by a producer thread that lists the directory through a
/// [`Source`] and hands entries over one at a time. The sequence ends when
/// the directory is exhausted, or immediately if it could not be listed;
/// in that case the failure is kept for [`take_failure`](Self::take_failure)
/// instead of being yielded.
///
/// A [`Source`] that panics counts as a failed listing, reported as
/// [`FindError::Source`].
///
/// Not restartable. Each [`read_dir`] call lists the directory afresh.
pub struct DirReader {
    dir: PathBuf,
    rx: Option<Receiver<Message>>,
    producer: Option<JoinHandle<()>>,
    failure: Option<FindError>,
}

/// Start reading `dir`. Entries get `depth` and candidate paths joined onto `dir`.
pub fn read_dir(source: Arc<dyn Source>, dir: &Path, depth: usize) -> DirReader {
    // Rendezvous: the producer runs at most one entry ahead of the walker.
    let (tx, rx) = sync_channel(0);
    let owned = dir.to_path_buf();

    let spawned = thread::Builder::new()
        .name("rfind-reader".into())
        .spawn(move || produce(source.as_ref(), &owned, depth, &tx));

    match spawned {
        Ok(handle) => DirReader {
            dir: dir.to_path_buf(),
            rx: Some(rx),
            producer: Some(handle),
            failure: None,
        },
        Err(source) => DirReader {
            dir: dir.to_path_buf(),
            rx: None,
            producer: None,
            failure: Some(FindError::Io {
                path: dir.to_path_buf(),
                source,
            }),
        },
    }
}

impl DirReader {
    /// The directory being read.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Why the directory yielded nothing, if it could not be listed.
    ///
    /// Only meaningful once the sequence has ended.
    pub fn take_failure(&mut self) -> Option<FindError> {
        self.failure.take()
    }
}

impl Iterator for DirReader {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        let rx = self.rx.as_ref()?;
        match rx.recv() {
            Ok(Message::Entry(entry)) => Some(entry),
            Ok(Message::Failed(err)) => {
                self.failure = Some(err);
                self.rx = None;
                None
            }
            // producer finished and hung up, or died
            Err(_) => {
                self.rx = None;
                self.reap();
                None
            }
        }
    }
}

impl DirReader {
    fn reap(&mut self) {
        let Some(handle) = self.producer.take() else {
            return;
        };
        if let Err(payload) = handle.join() {
            let msg = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            debug!(dir = %self.dir.display(), panic = %msg, "directory producer panicked");
            self.failure = Some(FindError::Source(format!(
                "{}: listing panicked: {msg}",
                self.dir.display()
            )));
        }
    }
}

impl FusedIterator for DirReader {}

fn produce(source: &dyn Source, dir: &Path, depth: usize, tx: &SyncSender<Message>) {
    let mut listings = match source.list(dir) {
        Ok(listings) => listings,
        Err(err) => {
            debug!(dir = %dir.display(), error = %err, "cannot list directory");
            let _ = tx.send(Message::Failed(err));
            return;
        }
    };
    debug!(dir = %dir.display(), entries = listings.len(), "listed directory");

    listings.sort_by(|a, b| a.name.cmp(&b.name));

    for listing in listings {
        let entry = Entry {
            path: candidate_path(dir, &listing.name),
            name: listing.name.to_string_lossy().into_owned(),
            kind: listing.kind,
            depth,
        };
        // Receiver gone: the reader was dropped early.
        if tx.send(Message::Entry(entry)).is_err() {
            return;
        }
    }
}

/// Join `name` onto `dir` and clean the result lexically.
///
/// `.` components are dropped, `..` cancels the preceding normal
/// component, and redundant separators disappear. `("." , "a")` gives `a`,
/// `("root/", "a")` gives `root/a`. Absolute inputs stay absolute.
pub fn candidate_path(dir: &Path, name: &OsStr) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for comp in dir.components().chain(Path::new(name).components()) {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match parts.last().copied() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(comp),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
