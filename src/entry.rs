use std::ffi::OsString;
use std::path::PathBuf;

/// A single item produced by a [`DirReader`](crate::reader::DirReader) during traversal.
///
/// `path` is the candidate path: the cleaned join of the directory being
/// read and `name`. It is what the [`Matcher`](crate::traits::Matcher)
/// sees and what gets reported on a match.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Candidate path, relative unless the search root was absolute.
    pub path: PathBuf,

    /// The entry's file name, lossily converted to UTF-8.
    pub name: String,

    /// What kind of entry this is.
    pub kind: EntryKind,

    /// How deep in the traversal this entry was found. Children of the root = 1.
    pub depth: usize,
}

impl Entry {
    /// Whether the walk may descend into this entry.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// The kind of a traversed entry.
///
/// Taken without following symlinks: a link to a directory is
/// [`EntryKind::Symlink`], never [`EntryKind::Dir`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// A symbolic link.
    Symlink,

    /// Anything else (device files, pipes, sockets, etc.).
    Other,
}

impl From<std::fs::FileType> for EntryKind {
    fn from(ft: std::fs::FileType) -> Self {
        if ft.is_symlink() {
            EntryKind::Symlink
        } else if ft.is_dir() {
            EntryKind::Dir
        } else if ft.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// One raw listing record returned by a [`Source`](crate::traits::Source).
///
/// Sources only know names and kinds; the reader turns these into
/// [`Entry`] values with candidate paths and depths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub name: OsString,
    pub kind: EntryKind,
}

impl Listing {
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}
