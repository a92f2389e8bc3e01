// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Subspace classification plumbing.
//!
//! A __subspace__ is any file or directory under an omoospace's subspaces
//! area that is not a reserved file and does not match an ignore pattern.
//! Subspaces are never stored anywhere: they are derived on demand from a
//! directory scan, which is why the wrapper here carries nothing but the
//! resolved path and the omoospace it belongs to.
//!
//! # Ignore Patterns
//!
//! The profile's `ignore` key holds gitignore-flavored glob strings applied
//! relative to the subspaces directory. Each pattern runs three separate
//! checks against a candidate path: the whole relative path, every
//! prefix-segment boundary of it, and the path against the pattern with
//! `/*` appended (so a directory pattern catches its content). The
//! segment-wise check is what makes a bare `content` pattern ignore
//! `content/file.txt` without also ignoring `sub/content/file.txt`; a
//! single glob call cannot express that, so do not collapse the three.
//!
//! A pattern with a trailing `/` matches directories only. Callers signal
//! "this path is a directory" by passing the relative path with a trailing
//! `/` of its own.

use crate::{
    omoospace::{Omoospace, Result},
    path::to_posix,
};

use glob::Pattern;
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    path::{Path, PathBuf},
};
use tracing::warn;

/// One pathname token together with the subspace paths that produced it.
///
/// # Invariant
///
/// - `name` is non-empty and contains no underscore; underscores separate
///   tokens, they are never part of one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// Canonical token.
    pub name: String,

    /// Contributing subspace paths, deduplicated by resolved absolute path.
    pub subspaces: Vec<PathBuf>,
}

impl NodeData {
    /// Construct node data with a single contributing subspace.
    pub fn new(name: impl Into<String>, subspace: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            subspaces: vec![subspace.into()],
        }
    }

    /// Attach another contributing subspace, skipping duplicates.
    pub(crate) fn push_subspace(&mut self, subspace: PathBuf) {
        if !self.subspaces.contains(&subspace) {
            self.subspaces.push(subspace);
        }
    }
}

impl Display for NodeData {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.write_str(&self.name)
    }
}

/// Match a subspace-relative path against a listing of ignore patterns.
///
/// The path uses forward slashes; a trailing `/` marks it as a directory.
/// Each pattern is checked three ways: against the whole path, against
/// every prefix-segment boundary, and with `/*` appended to catch directory
/// content. Malformed patterns are skipped with a warning rather than
/// poisoning the whole listing.
pub fn is_ignore(
    path: impl AsRef<str>,
    patterns: impl IntoIterator<Item = impl AsRef<str>>,
) -> bool {
    let raw_path = path.as_ref();
    let path_is_dir = raw_path.ends_with('/');
    let path = raw_path.trim_end_matches('/');
    if path.is_empty() {
        return false;
    }

    for raw in patterns {
        let raw = raw.as_ref();
        let dir_only = raw.ends_with('/');
        let pattern_str = raw.trim_end_matches('/');
        let Ok(pattern) = Pattern::new(pattern_str) else {
            warn!("skipping malformed ignore pattern {raw:?}");
            continue;
        };

        // Check 1: the whole relative path.
        if pattern.matches(path) && (!dir_only || path_is_dir) {
            return true;
        }

        // Check 2: every prefix-segment boundary. Proper prefixes are
        // directories by construction.
        let segments: Vec<&str> = path.split('/').collect();
        let mut prefix = String::new();
        for (index, segment) in segments.iter().enumerate() {
            if index > 0 {
                prefix.push('/');
            }
            prefix.push_str(segment);

            let prefix_is_dir = index + 1 < segments.len() || path_is_dir;
            if pattern.matches(&prefix) && (!dir_only || prefix_is_dir) {
                return true;
            }
        }

        // Check 3: directory-content match via trailing "/*".
        if let Ok(content_pattern) = Pattern::new(&format!("{pattern_str}/*")) {
            if content_pattern.matches(path) {
                return true;
            }
        }
    }

    false
}

/// A file or directory participating in the objective tree.
#[derive(Debug, Clone)]
pub struct Subspace {
    omoospace: Omoospace,
    absolute: PathBuf,
}

impl Subspace {
    pub(crate) fn new(omoospace: Omoospace, absolute: PathBuf) -> Self {
        Self {
            omoospace,
            absolute,
        }
    }

    /// Resolved absolute path of this subspace.
    pub fn absolute(&self) -> &Path {
        &self.absolute
    }

    /// Posix-style path relative to the subspaces directory.
    pub fn path(&self) -> Result<String> {
        let subspaces_dir = self.omoospace.subspaces_dir()?;
        let relative = self
            .absolute
            .strip_prefix(&subspaces_dir)
            .unwrap_or(&self.absolute);
        Ok(to_posix(relative))
    }

    /// Canonical pathname of this subspace.
    pub fn pathname(&self) -> Result<String> {
        self.omoospace.extract_pathname(&self.absolute)
    }

    /// The cone of this subspace: every current subspace whose pathname
    /// starts with this one's pathname, itself included.
    pub fn subspaces(&self) -> Result<Vec<Subspace>> {
        let pathname = self.pathname()?;
        let mut cone = Vec::new();
        for candidate in self.omoospace.subspaces()? {
            if candidate.pathname()?.starts_with(&pathname) {
                cone.push(candidate);
            }
        }

        Ok(cone)
    }
}

impl PartialEq for Subspace {
    fn eq(&self, other: &Self) -> bool {
        self.absolute == other.absolute
    }
}

impl Eq for Subspace {}

impl Display for Subspace {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        match self.path() {
            Ok(path) => fmt.write_str(&path),
            Err(_) => write!(fmt, "{}", self.absolute.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_test_case::test_case;

    #[test_case("content/file.txt", &["content"], true; "bare pattern catches direct child")]
    #[test_case("sub/content/file.txt", &["content"], false; "bare pattern skips nested match")]
    #[test_case("content", &["content"], true; "bare pattern catches itself")]
    #[test_case("content/a/b.txt", &["content"], true; "bare pattern catches deep content")]
    #[test_case("Film02/Sc010.blend", &["Film02"], true; "directory listing content")]
    #[test_case("Film03", &["Film03/Prop01.*"], false; "wildcard pattern skips parent dir")]
    #[test_case("Film03/Prop01.c4d", &["Film03/Prop01.*"], true; "wildcard pattern catches file")]
    #[test_case("Film03/Other.blend", &["Film03/Prop01.*"], false; "wildcard pattern skips sibling")]
    #[test_case("cache/", &["cache/"], true; "dir pattern catches directory")]
    #[test_case("cache", &["cache/"], false; "dir pattern skips plain file")]
    #[test_case("cache/frame.exr", &["cache/"], true; "dir pattern catches content")]
    #[test]
    fn is_ignore_table(path: &str, patterns: &[&str], expect: bool) {
        assert_eq!(is_ignore(path, patterns), expect);
    }

    #[test]
    fn is_ignore_empty_patterns() {
        assert!(!is_ignore("anything/at/all.txt", Vec::<String>::new()));
    }
}
