use std::borrow::Cow;
use std::path::Path;

use globset::{Glob, GlobMatcher};
use regex::Regex;

use crate::entry::Entry;
use crate::error::FindError;
use crate::traits::Matcher;

/// A user pattern compiled two ways: as a regex and as a glob.
///
/// A candidate path matches if *either* accepts it. The regex searches
/// anywhere in the path (`foo` hits `src/foo.rs`); the glob must cover the
/// whole path, and its `*` crosses `/` (`*.rs` hits `src/foo.rs`).
///
/// A brace without a partner is a literal character on the glob side, so
/// `a}` is a valid pattern that hits a file named `a}`.
///
/// Built once before the walk and shared read-only.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
    glob: GlobMatcher,
}

impl Pattern {
    /// Compile `pattern`. Fails if either representation rejects it.
    pub fn new(pattern: &str) -> Result<Self, FindError> {
        let regex = Regex::new(pattern).map_err(|source| FindError::InvalidRegex {
            pattern: pattern.to_string(),
            source,
        })?;
        let glob = Glob::new(&balance_braces(pattern))
            .map_err(|source| FindError::InvalidGlob {
                pattern: pattern.to_string(),
                source,
            })?
            .compile_matcher();

        Ok(Self {
            source: pattern.to_string(),
            regex,
            glob,
        })
    }

    /// The pattern as the user wrote it.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn regex_matches(&self, candidate: &Path) -> bool {
        self.regex.is_match(&candidate.to_string_lossy())
    }

    pub fn glob_matches(&self, candidate: &Path) -> bool {
        self.glob.is_match(candidate)
    }

    pub fn is_match_path(&self, candidate: &Path) -> bool {
        self.regex_matches(candidate) || self.glob_matches(candidate)
    }
}

/// Rewrite braces that do not pair up as the classes `[{]` and `[}]`.
///
/// Escaped braces and braces inside `[...]` are left alone.
fn balance_braces(pattern: &str) -> Cow<'_, str> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut open = Vec::new();
    let mut lone = Vec::new();

    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 1,
            '[' => {
                // `]` right after `[` or `[!` belongs to the class
                let mut j = i + 1;
                if matches!(chars.get(j), Some('!' | '^')) {
                    j += 1;
                }
                if chars.get(j) == Some(&']') {
                    j += 1;
                }
                while j < chars.len() && chars[j] != ']' {
                    j += 1;
                }
                if j < chars.len() {
                    i = j;
                }
            }
            '{' => open.push(i),
            '}' => {
                if open.pop().is_none() {
                    lone.push(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    lone.extend(open);

    if lone.is_empty() {
        return Cow::Borrowed(pattern);
    }
    let mut out = String::with_capacity(pattern.len() + 2 * lone.len());
    for (i, c) in chars.into_iter().enumerate() {
        if lone.contains(&i) {
            out.push('[');
            out.push(c);
            out.push(']');
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

impl Matcher for Pattern {
    fn is_match(&self, entry: &Entry) -> bool {
        self.is_match_path(&entry.path)
    }
}
