use std::fs;
use std::path::Path;

use crate::entry::{EntryKind, Listing};
use crate::error::FindError;
use crate::traits::Source;

/// The real filesystem.
///
/// Kinds come from `DirEntry::file_type`, which does not follow symlinks.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl Source for FsSource {
    fn list(&self, dir: &Path) -> Result<Vec<Listing>, FindError> {
        let read = fs::read_dir(dir).map_err(|e| FindError::from_io(dir, e))?;

        let mut listings = Vec::new();
        for entry in read {
            let entry = entry.map_err(|e| FindError::from_io(dir, e))?;
            let kind = match entry.file_type() {
                Ok(ft) => EntryKind::from(ft),
                Err(_) => EntryKind::Other,
            };
            listings.push(Listing::new(entry.file_name(), kind));
        }
        Ok(listings)
    }
}

/// In-memory tree for unit tests. Paths are registered with their ancestors.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemSource {
    dirs: std::collections::BTreeMap<std::path::PathBuf, Vec<Listing>>,
    unreadable: std::collections::HashSet<std::path::PathBuf>,
}

#[cfg(test)]
impl MemSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn file(self, path: &str) -> Self {
        self.add(path, EntryKind::File)
    }

    pub(crate) fn dir(self, path: &str) -> Self {
        self.add(path, EntryKind::Dir)
    }

    /// A directory that shows up in its parent but fails to list.
    pub(crate) fn unreadable(mut self, path: &str) -> Self {
        self.unreadable.insert(path.into());
        self.add(path, EntryKind::Dir)
    }

    fn add(mut self, path: &str, kind: EntryKind) -> Self {
        let mut comps = Path::new(path).iter();
        let Some(first) = comps.next() else {
            return self;
        };
        let mut parent = std::path::PathBuf::from(first);
        let rest: Vec<_> = comps.collect();
        self.dirs.entry(parent.clone()).or_default();

        for (i, name) in rest.iter().enumerate() {
            let k = if i + 1 == rest.len() { kind } else { EntryKind::Dir };
            let children = self.dirs.entry(parent.clone()).or_default();
            if !children.iter().any(|l| l.name.as_os_str() == *name) {
                children.push(Listing::new(*name, k));
            }
            parent = crate::reader::candidate_path(&parent, name);
            if k == EntryKind::Dir {
                self.dirs.entry(parent.clone()).or_default();
            }
        }
        self
    }
}

#[cfg(test)]
impl Source for MemSource {
    fn list(&self, dir: &Path) -> Result<Vec<Listing>, FindError> {
        if self.unreadable.contains(dir) {
            return Err(FindError::PermissionDenied(dir.to_path_buf()));
        }
        self.dirs
            .get(dir)
            .cloned()
            .ok_or_else(|| FindError::NotFound(dir.to_path_buf()))
    }
}
