use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::Palette;

/// Command line of the `rfind` binary.
///
/// Only `<PATTERN>`, `<PATH>`, `--color`, `--print0` and `--version` change
/// what happens. The remaining flags are accepted so scripts written
/// against the full flag set keep working, but they have no effect yet.
#[derive(Parser, Debug)]
#[command(
    name = "rfind",
    version,
    about = "Find entries whose path matches a regex or a glob",
    long_about = "rfind walks <PATH> depth-first and prints every entry whose path \
                  matches <PATTERN>, read either as a regular expression (searched \
                  anywhere in the path) or as a glob (matched against the whole path).\n\n\
                  A matching directory is printed but not descended into."
)]
pub struct Cli {
    /// Regex or glob tested against each entry's path
    pub pattern: String,

    /// Directory to search
    pub path: PathBuf,

    /// Search hidden files and directories (no effect)
    #[arg(short = 'H', long)]
    pub hidden: bool,

    /// Do not respect .(git)ignore files (no effect)
    #[arg(short = 'I', long)]
    pub no_ignore: bool,

    /// Case-sensitive search (no effect)
    #[arg(short = 's', long)]
    pub case_sensitive: bool,

    /// Show absolute instead of relative paths (no effect)
    #[arg(short = 'a', long)]
    pub absolute_path: bool,

    /// Follow symbolic links (no effect)
    #[arg(short = 'L', long)]
    pub follow: bool,

    /// Search full path (no effect)
    #[arg(short = 'p', long)]
    pub full_path: bool,

    /// Separate results by the null character
    #[arg(short = '0', long)]
    pub print0: bool,

    /// Maximum search depth (no effect)
    #[arg(short = 'd', long, default_value = "none")]
    pub max_depth: String,

    /// Filter by type: f(ile), d(irectory), s(ymlink) (no effect)
    #[arg(short = 't', long = "type", default_value = "none")]
    pub file_type: String,

    /// Filter by file extension (no effect)
    #[arg(short = 'e', long, default_value = "none")]
    pub extension: String,

    /// When to use colors
    #[arg(short = 'c', long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Number of threads to use for searching (no effect)
    #[arg(short = 'j', long, default_value = "auto")]
    pub threads: String,
}

impl Cli {
    /// Long names of accepted flags that were set but change nothing.
    pub fn inert_flags(&self) -> Vec<&'static str> {
        let switches = [
            (self.hidden, "hidden"),
            (self.no_ignore, "no-ignore"),
            (self.case_sensitive, "case-sensitive"),
            (self.absolute_path, "absolute-path"),
            (self.follow, "follow"),
            (self.full_path, "full-path"),
            (self.max_depth != "none", "max-depth"),
            (self.file_type != "none", "type"),
            (self.extension != "none", "extension"),
            (self.threads != "auto", "threads"),
        ];
        switches
            .into_iter()
            .filter_map(|(set, name)| set.then_some(name))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ColorMode {
    Never,
    #[default]
    Auto,
    Always,
}

impl ColorMode {
    /// Decide coloring for stdout and stderr separately.
    ///
    /// `Auto` colors a stream only when it is a terminal and `NO_COLOR` is
    /// unset. `colored` is forced on afterwards; the decision lives in the
    /// returned [`Palette`].
    pub fn resolve(self) -> Palette {
        let palette = match self {
            ColorMode::Never => Palette::plain(),
            ColorMode::Always => Palette {
                stdout: true,
                stderr: true,
            },
            ColorMode::Auto => {
                let allowed = std::env::var_os("NO_COLOR").is_none();
                Palette {
                    stdout: allowed && io::stdout().is_terminal(),
                    stderr: allowed && io::stderr().is_terminal(),
                }
            }
        };
        colored::control::set_override(true);
        palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn two_positionals_parse() {
        let cli = Cli::try_parse_from(["rfind", "foo", "src"]).unwrap();
        assert_eq!(cli.pattern, "foo");
        assert_eq!(cli.path, PathBuf::from("src"));
        assert_eq!(cli.color, ColorMode::Auto);
        assert!(cli.inert_flags().is_empty());
    }

    #[test]
    fn one_positional_is_a_usage_error() {
        let err = Cli::try_parse_from(["rfind", "foo"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn three_positionals_is_a_usage_error() {
        assert!(Cli::try_parse_from(["rfind", "foo", "src", "extra"]).is_err());
    }

    #[test]
    fn declared_flags_are_accepted() {
        let cli = Cli::try_parse_from([
            "rfind", "-H", "-I", "-s", "-a", "-L", "-p", "-0", "-d", "3", "-t", "f", "-e", "rs",
            "-c", "never", "-j", "4", "foo", ".",
        ])
        .unwrap();
        assert!(cli.print0);
        assert_eq!(cli.color, ColorMode::Never);
        assert_eq!(
            cli.inert_flags(),
            vec![
                "hidden",
                "no-ignore",
                "case-sensitive",
                "absolute-path",
                "follow",
                "full-path",
                "max-depth",
                "type",
                "extension",
                "threads",
            ]
        );
    }

    #[test]
    fn never_and_always_ignore_terminals() {
        assert_eq!(ColorMode::Never.resolve(), Palette::plain());
        let always = ColorMode::Always.resolve();
        assert!(always.stdout && always.stderr);
    }

    #[test]
    fn version_is_not_a_failure() {
        let err = Cli::try_parse_from(["rfind", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert!(!err.use_stderr());
    }
}
