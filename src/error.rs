use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FindError {
    // Pattern
    #[error("invalid regex `{pattern}`: {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid glob `{pattern}`: {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    // Traversal
    #[error("{}: permission denied", .0.display())]
    PermissionDenied(PathBuf),

    #[error("{}: no such file or directory", .0.display())]
    NotFound(PathBuf),

    #[error("{}: not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // Third-party extensibility
    #[error("source error: {0}")]
    Source(String),
}

impl FindError {
    /// Classify an I/O failure that happened while listing `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            io::ErrorKind::NotFound => Self::NotFound(path),
            io::ErrorKind::NotADirectory => Self::NotADirectory(path),
            _ => Self::Io { path, source: err },
        }
    }

    /// The path this error occurred at, if applicable.
    /// Callers use this to present "skipped: <path>" without matching on variants.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::PermissionDenied(p)
            | Self::NotFound(p)
            | Self::NotADirectory(p)
            | Self::Io { path: p, .. } => Some(p),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_kinds_map_to_variants() {
        let p = Path::new("some/dir");
        let err = FindError::from_io(p, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, FindError::PermissionDenied(_)));
        let err = FindError::from_io(p, io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, FindError::NotFound(_)));
        let err = FindError::from_io(p, io::Error::from(io::ErrorKind::Interrupted));
        assert!(matches!(err, FindError::Io { .. }));
        assert_eq!(err.path(), Some(p));
    }

    #[test]
    fn listing_errors_display_their_path() {
        let err = FindError::NotFound(PathBuf::from("gone"));
        assert_eq!(err.to_string(), "gone: no such file or directory");

        let err = regex::Regex::new("(").unwrap_err();
        let err = FindError::InvalidRegex {
            pattern: "(".into(),
            source: err,
        };
        assert!(err.path().is_none());
        assert!(err.to_string().starts_with("invalid regex `(`"));
    }
}
