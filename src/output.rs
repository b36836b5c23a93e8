use std::io::{self, Write};

use colored::Colorize;

use rfind::{Entry, FindError, Sink};

/// Which output streams get ANSI color. Decided once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    pub stdout: bool,
    pub stderr: bool,
}

impl Palette {
    pub fn plain() -> Self {
        Self::default()
    }

    /// A matched path, blue when stdout is colored.
    pub fn path(&self, path: &str) -> String {
        if self.stdout {
            path.blue().to_string()
        } else {
            path.to_string()
        }
    }

    /// A message bound for stderr, red when stderr is colored.
    pub fn error(&self, message: &str) -> String {
        if self.stderr {
            message.red().to_string()
        } else {
            message.to_string()
        }
    }
}

/// Prints matches to `out` and skipped directories to stderr.
///
/// The first write error stops further output and is returned by
/// [`finish`](Self::finish); a closed pipe is not treated as an error.
pub struct PrintSink<W: Write> {
    out: W,
    terminator: &'static str,
    palette: Palette,
    failed: Option<io::Error>,
}

impl<W: Write> PrintSink<W> {
    pub fn new(out: W, print0: bool, palette: Palette) -> Self {
        Self {
            out,
            terminator: if print0 { "\0" } else { "\n" },
            palette,
            failed: None,
        }
    }

    pub fn finish(mut self) -> io::Result<()> {
        let result = match self.failed.take() {
            Some(err) => Err(err),
            None => self.out.flush(),
        };
        match result {
            Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            other => other,
        }
    }
}

impl<W: Write> Sink for PrintSink<W> {
    fn matched(&mut self, entry: &Entry) {
        if self.failed.is_some() {
            return;
        }
        let path = self.palette.path(&entry.path.display().to_string());
        if let Err(err) = write!(self.out, "{path}{}", self.terminator) {
            self.failed = Some(err);
        }
    }

    fn skipped(&mut self, error: FindError) {
        eprintln!("{}", self.palette.error(&format!("rfind: {error}")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfind::EntryKind;
    use std::path::PathBuf;

    fn entry(path: &str) -> Entry {
        Entry {
            path: PathBuf::from(path),
            name: path.rsplit('/').next().unwrap_or(path).to_string(),
            kind: EntryKind::File,
            depth: 1,
        }
    }

    #[test]
    fn newline_and_nul_terminators() {
        let mut buf = Vec::new();
        let mut sink = PrintSink::new(&mut buf, false, Palette::plain());
        sink.matched(&entry("root/a"));
        sink.matched(&entry("root/b"));
        sink.finish().unwrap();
        assert_eq!(buf, b"root/a\nroot/b\n");

        let mut buf = Vec::new();
        let mut sink = PrintSink::new(&mut buf, true, Palette::plain());
        sink.matched(&entry("root/a"));
        sink.finish().unwrap();
        assert_eq!(buf, b"root/a\0");
    }

    #[test]
    fn streams_are_colored_independently() {
        colored::control::set_override(true);

        let out_only = Palette {
            stdout: true,
            stderr: false,
        };
        assert!(out_only.path("root/a").contains("\x1b["));
        assert_eq!(out_only.error("rfind: x"), "rfind: x");

        let err_only = Palette {
            stdout: false,
            stderr: true,
        };
        assert_eq!(err_only.path("root/a"), "root/a");
        assert!(err_only.error("rfind: x").contains("\x1b["));
    }
}
