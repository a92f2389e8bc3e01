// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Path resolution utilities.
//!
//! Determine relevant path information for files and directories that the
//! omoospace machinery needs to classify, scan, or create. Everything here
//! is ordinary blocking filesystem work; the interesting policy (what counts
//! as a subspace, where things go) lives with the callers.

use std::{
    fs::{read_dir, write, OpenOptions},
    path::{Path, PathBuf},
};

/// Resolve a path to absolute form.
///
/// Resolves symlinks for the portion of the path that exists. A missing
/// final component is tolerated so that targets about to be created can be
/// compared against already-resolved roots.
///
/// # Errors
///
/// - Return [`PathError::Absolutize`] if the current working directory
///   cannot be determined.
pub fn absolutize(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    if let Ok(resolved) = path.canonicalize() {
        return Ok(resolved);
    }

    let absolute = std::path::absolute(path).map_err(|err| PathError::Absolutize {
        source: err,
        path: path.to_path_buf(),
    })?;

    // INVARIANT: Resolve through the parent when only the tail is missing,
    // so new targets compare equal against canonicalized roots.
    if let (Some(parent), Some(name)) = (absolute.parent(), absolute.file_name()) {
        if let Ok(parent) = parent.canonicalize() {
            return Ok(parent.join(name));
        }
    }

    Ok(absolute)
}

/// Check if `child` lies under `parent`.
///
/// Purely lexical comparison; both paths are expected to already be in
/// absolute form. With `or_equal` the parent itself also passes.
pub fn is_subpath(child: impl AsRef<Path>, parent: impl AsRef<Path>, or_equal: bool) -> bool {
    let child = child.as_ref();
    let parent = parent.as_ref();
    child.starts_with(parent) && (or_equal || child != parent)
}

/// List the children of a directory in stable order.
///
/// Entries come back sorted lexicographically; with `recursive` each
/// directory's own children follow it immediately (pre-order), which keeps
/// scan order deterministic across runs.
///
/// # Errors
///
/// - Return [`PathError::Scan`] if the directory cannot be read.
pub fn children_of(dir: impl AsRef<Path>, recursive: bool) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut entries: Vec<PathBuf> = read_dir(dir)
        .map_err(|err| PathError::Scan {
            source: err,
            path: dir.to_path_buf(),
        })?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .collect();
    entries.sort();

    let mut children = Vec::new();
    for entry in entries {
        let is_dir = entry.is_dir();
        children.push(entry.clone());
        if recursive && is_dir {
            children.extend(children_of(&entry, true)?);
        }
    }

    Ok(children)
}

/// Create a batch of files and directories beneath a base directory.
///
/// An entry with a trailing `/` becomes a directory; anything else becomes
/// an empty file (left untouched if it already exists). Missing parent
/// directories are created along the way.
///
/// # Errors
///
/// - Return [`PathError::Create`] if any entry cannot be created.
pub fn make_path(
    under: impl AsRef<Path>,
    entries: impl IntoIterator<Item = impl AsRef<str>>,
) -> Result<()> {
    for entry in entries {
        let entry = entry.as_ref();
        let target = under.as_ref().join(entry.trim_end_matches('/'));

        if entry.ends_with('/') {
            mkdirp::mkdirp(&target).map_err(|err| PathError::Create {
                source: err,
                path: target.clone(),
            })?;
            continue;
        }

        if let Some(parent) = target.parent() {
            mkdirp::mkdirp(parent).map_err(|err| PathError::Create {
                source: err,
                path: parent.to_path_buf(),
            })?;
        }

        // INVARIANT: Touch, never truncate, so re-running a fixture is safe.
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&target)
            .map_err(|err| PathError::Create {
                source: err,
                path: target.clone(),
            })?;
    }

    Ok(())
}

/// Create one file with the given contents beneath a base directory.
///
/// # Errors
///
/// - Return [`PathError::Create`] if the file cannot be written.
pub fn make_file(
    under: impl AsRef<Path>,
    name: impl AsRef<str>,
    contents: impl AsRef<str>,
) -> Result<()> {
    let target = under.as_ref().join(name.as_ref());
    if let Some(parent) = target.parent() {
        mkdirp::mkdirp(parent).map_err(|err| PathError::Create {
            source: err,
            path: parent.to_path_buf(),
        })?;
    }

    write(&target, contents.as_ref()).map_err(|err| PathError::Create {
        source: err,
        path: target.clone(),
    })
}

/// Render a relative path with forward slashes regardless of host OS.
pub fn to_posix(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Path resolution error types.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// Absolute form of a path cannot be determined.
    #[error("failed to resolve absolute form of {:?}", path.display())]
    Absolutize {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Directory cannot be scanned.
    #[error("failed to scan directory {:?}", path.display())]
    Scan {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// File or directory cannot be created.
    #[error("failed to create {:?}", path.display())]
    Create {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
}

/// Friendly result alias :3
pub type Result<T, E = PathError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sealed_test::prelude::*;

    #[sealed_test]
    fn make_path_creates_files_and_directories() -> anyhow::Result<()> {
        make_path("project", ["Contents/", "Subspaces/Sc010/Sc010.blend"])?;

        assert!(Path::new("project/Contents").is_dir());
        assert!(Path::new("project/Subspaces/Sc010").is_dir());
        assert!(Path::new("project/Subspaces/Sc010/Sc010.blend").is_file());

        Ok(())
    }

    #[sealed_test]
    fn children_of_is_stable_preorder() -> anyhow::Result<()> {
        make_path("base", ["b.txt", "a/inner.txt", "c/"])?;

        let children: Vec<String> = children_of("base", true)?
            .iter()
            .map(|path| to_posix(path.strip_prefix("base").unwrap()))
            .collect();
        assert_eq!(children, vec!["a", "a/inner.txt", "b.txt", "c"]);

        Ok(())
    }

    #[test]
    fn is_subpath_strict_and_inclusive() {
        assert!(is_subpath("/a/b/c", "/a/b", false));
        assert!(!is_subpath("/a/b", "/a/b", false));
        assert!(is_subpath("/a/b", "/a/b", true));
        assert!(!is_subpath("/a/bc", "/a/b", true));
    }
}
