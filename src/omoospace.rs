// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Omoospace domain representation.
//!
//! An __omoospace__ is a project directory governed by a profile file named
//! `Omoospace.yml` (or `Omoospace.<lang>.yml` for a non-default profile
//! language). Inside it, source files live in a __Subspaces__ area and
//! deliverables live in a __Contents__ area. Both areas are plain
//! directories; the profile records which directories play those roles,
//! along with project metadata (brief, notes, makers, tools, works) and an
//! ignore listing for the subspace scan.
//!
//! # Pathname Extraction
//!
//! The heart of this module is the pathname extraction algorithm. Walking
//! from the subspaces directory down to a subspace, each path segment's
//! normalized stem contributes tokens to a route. A segment that repeats
//! the tail of the route already accumulated gets that overlap clipped, so
//! `Sc010_Shot0100/Shot0100_AssetA.blend` and
//! `Sc010_Shot0100/AssetA.blend` both resolve to the canonical pathname
//! `Sc010_Shot0100_AssetA`. Artists name files redundantly all the time;
//! clipping makes the redundancy harmless instead of letting it fork the
//! objective tree.
//!
//! # Consistency Model
//!
//! Nothing here caches anything. Every configuration read goes back to the
//! profile file and every scan goes back to the filesystem, so external
//! changes are visible on the next call. The flip side is that two scans
//! are not snapshot-consistent with each other; callers that mutate the
//! tree between calls simply see the new state.

use crate::{
    name::normalize_name,
    objective::ObjectiveTree,
    path::{absolutize, children_of, is_subpath, make_file, make_path, to_posix, PathError},
    profile::{
        items::{listing, Maker, MakerData, Tool, ToolData, Work, WorkData},
        value_string, value_strings, Language, Profile, ProfileError,
    },
    subspace::{is_ignore, NodeData, Subspace},
};

use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// The main handle to one omoospace.
///
/// Identity is the root directory; everything else (directory mappings,
/// ignore listing, metadata) is read from the profile file on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Omoospace {
    root_dir: PathBuf,
    profile_file: PathBuf,
}

impl Omoospace {
    /// Find the omoospace governing a path.
    ///
    /// Searches upward from `start` (itself included) for a directory
    /// holding an `Omoospace.*` profile file.
    ///
    /// # Errors
    ///
    /// - Return [`OmoospaceError::NotFound`] if no ancestor carries a
    ///   profile file.
    pub fn discover(start: impl AsRef<Path>) -> Result<Self> {
        Self::discover_with_language(start, None)
    }

    /// Find the omoospace governing a path, pinning the profile language.
    ///
    /// With a language given, the profile file is
    /// `Omoospace.yml`/`Omoospace.<lang>.yml` for that language whether or
    /// not it exists yet; without one, an existing `Omoospace.yml` wins and
    /// the first `Omoospace.*.yml` variant is the fallback.
    ///
    /// # Errors
    ///
    /// - Return [`OmoospaceError::NotFound`] if no ancestor carries a
    ///   profile file.
    pub fn discover_with_language(
        start: impl AsRef<Path>,
        language: Option<Language>,
    ) -> Result<Self> {
        let start = absolutize(start)?;
        for dir in start.ancestors() {
            if !dir.is_dir() {
                continue;
            }

            let candidates: Vec<PathBuf> = children_of(dir, false)?
                .into_iter()
                .filter(|path| {
                    path.is_file()
                        && path
                            .file_name()
                            .map(|name| name.to_string_lossy().starts_with("Omoospace."))
                            .unwrap_or(false)
                })
                .collect();
            if candidates.is_empty() {
                continue;
            }

            let root_dir = dir.to_path_buf();
            let profile_file = match language {
                Some(language) => root_dir.join(profile_filename(language)),
                None => {
                    let default = root_dir.join("Omoospace.yml");
                    if candidates.contains(&default) {
                        default
                    } else {
                        candidates
                            .iter()
                            .find(|path| {
                                path.extension().map(|ext| ext == "yml").unwrap_or(false)
                            })
                            .cloned()
                            .unwrap_or(default)
                    }
                }
            };

            debug!("found omoospace at {:?}", root_dir.display());
            return Ok(Self {
                root_dir,
                profile_file,
            });
        }

        Err(OmoospaceError::NotFound { start })
    }

    /// Root directory of this omoospace.
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Name of this omoospace: the root directory's name.
    pub fn name(&self) -> String {
        self.root_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Resolved profile file path.
    pub fn profile_file(&self) -> &Path {
        &self.profile_file
    }

    /// Fresh handle to the profile file.
    pub fn profile(&self) -> Profile {
        Profile::new(&self.profile_file)
    }

    /// Profile language of this omoospace.
    pub fn language(&self) -> Language {
        self.profile().language()
    }

    /// Project brief, falling back to the omoospace name.
    pub fn brief(&self) -> Result<String> {
        let brief = self
            .profile()
            .get("brief")?
            .as_ref()
            .and_then(value_string);
        Ok(brief.unwrap_or_else(|| self.name()))
    }

    /// Set the project brief.
    pub fn set_brief(&self, value: impl AsRef<str>) -> Result<()> {
        Ok(self.profile().set("brief", value.as_ref())?)
    }

    /// Subspaces directory path.
    ///
    /// The configured mapping (default `Subspaces`) relative to the root;
    /// falls back to the root directory itself when that directory does not
    /// exist.
    pub fn subspaces_dir(&self) -> Result<PathBuf> {
        let dirname = self
            .profile()
            .get("subspaces_dir")?
            .as_ref()
            .and_then(value_string)
            .unwrap_or_else(|| "Subspaces".to_owned());

        let dir = self.root_dir.join(dirname);
        Ok(if dir.is_dir() {
            dir
        } else {
            self.root_dir.clone()
        })
    }

    /// Set the subspaces directory mapping.
    pub fn set_subspaces_dir(&self, value: impl AsRef<str>) -> Result<()> {
        Ok(self.profile().set("subspaces_dir", value.as_ref())?)
    }

    /// Contents directory path (default `Contents`, relative to the root).
    pub fn contents_dir(&self) -> Result<PathBuf> {
        let dirname = self
            .profile()
            .get("contents_dir")?
            .as_ref()
            .and_then(value_string)
            .unwrap_or_else(|| "Contents".to_owned());

        Ok(self.root_dir.join(dirname))
    }

    /// Set the contents directory mapping.
    pub fn set_contents_dir(&self, value: impl AsRef<str>) -> Result<()> {
        Ok(self.profile().set("contents_dir", value.as_ref())?)
    }

    /// Current ignore pattern listing from the profile.
    pub fn ignore_patterns(&self) -> Result<Vec<String>> {
        Ok(self
            .profile()
            .get("ignore")?
            .as_ref()
            .map(value_strings)
            .unwrap_or_default())
    }

    /// Check if a path is a subspace of this omoospace.
    ///
    /// A subspace must exist (unless `require_exists` is off), lie strictly
    /// under the subspaces directory, be neither a root-level `Omoospace.*`
    /// file nor a `README.md`, stay out of the contents directory, and
    /// match no ignore pattern.
    pub fn is_subspace(&self, path: impl AsRef<Path>, require_exists: bool) -> Result<bool> {
        let path = absolutize(path)?;
        let subspaces_dir = self.subspaces_dir()?;
        let contents_dir = self.contents_dir()?;

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let exists = !require_exists || path.exists();
        let in_subspaces = is_subpath(&path, &subspaces_dir, false);
        let not_profile_file =
            !(name.starts_with("Omoospace.") && path.parent() == Some(self.root_dir.as_path()));
        let not_readme = name != "README.md";
        let not_contents = !is_subpath(&path, &contents_dir, true);
        if !(exists && in_subspaces && not_contents && not_profile_file && not_readme) {
            return Ok(false);
        }

        let patterns = self.ignore_patterns()?;
        if patterns.is_empty() {
            return Ok(true);
        }

        let mut relative = to_posix(path.strip_prefix(&subspaces_dir).unwrap_or(&path));
        if path.is_dir() {
            relative.push('/');
        }
        Ok(!is_ignore(&relative, &patterns))
    }

    /// Check if a path is a content item of this omoospace.
    pub fn is_content(&self, path: impl AsRef<Path>, require_exists: bool) -> Result<bool> {
        let path = absolutize(path)?;
        let exists = !require_exists || path.exists();
        Ok(exists && is_subpath(&path, self.contents_dir()?, false))
    }

    /// Check if a path belongs to this omoospace at all.
    pub fn is_item(&self, path: impl AsRef<Path>, require_exists: bool) -> Result<bool> {
        let path = absolutize(path)?;
        let exists = !require_exists || path.exists();
        let in_omoospace = is_subpath(&path, &self.root_dir, false);
        let not_profile_file = !path
            .file_name()
            .map(|name| name.to_string_lossy().contains("Omoospace."))
            .unwrap_or(false);

        Ok(exists && in_omoospace && not_profile_file)
    }

    /// Scan the current subspaces of this omoospace.
    ///
    /// Fresh recursive walk of the subspaces directory in stable
    /// lexicographic pre-order, filtered through [`Self::is_subspace`].
    pub fn subspaces(&self) -> Result<Vec<Subspace>> {
        let subspaces_dir = self.subspaces_dir()?;
        let mut subspaces = Vec::new();
        for child in children_of(&subspaces_dir, true)? {
            if self.is_subspace(&child, true)? {
                subspaces.push(Subspace::new(self.clone(), absolutize(&child)?));
            }
        }

        Ok(subspaces)
    }

    /// Extract the objective token sequence of a subspace.
    ///
    /// Collects the chain of ancestor subspaces down to `path`, normalizes
    /// each stem into tokens, and clips every segment's overlap with the
    /// route accumulated so far (longest route-suffix first). A segment
    /// clipped to nothing, or whose stem was pure noise, attaches its path
    /// to the last node produced instead of adding one.
    ///
    /// # Errors
    ///
    /// - Return [`OmoospaceError::InvalidPath`] if `path` is not a valid
    ///   subspace of this omoospace.
    pub fn extract_path_data(&self, path: impl AsRef<Path>) -> Result<Vec<NodeData>> {
        let path = absolutize(path)?;
        if !self.is_subspace(&path, true)? {
            return Err(OmoospaceError::InvalidPath { path });
        }

        let mut chain = vec![path.clone()];
        for parent in path.ancestors().skip(1) {
            if self.is_subspace(parent, true)? {
                chain.push(parent.to_path_buf());
            }
        }
        chain.reverse();

        let mut nodes: Vec<NodeData> = Vec::new();
        for subspace in chain {
            let stem = subspace
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            let normalized = normalize_name(&stem, false);
            let mut names: Vec<String> = if normalized.is_empty() {
                Vec::new()
            } else {
                normalized.split('_').map(str::to_owned).collect()
            };

            // Clip the longest route suffix that reappears as a prefix of
            // this segment's tokens.
            let route_len = nodes.len();
            for overlap_start in 0..route_len {
                let take = route_len - overlap_start;
                if take <= names.len()
                    && nodes[overlap_start..]
                        .iter()
                        .map(|data| data.name.as_str())
                        .eq(names[..take].iter().map(String::as_str))
                {
                    names.drain(..take);
                    break;
                }
            }

            if names.is_empty() {
                // Fully redundant (or pure-noise) segment still contributes
                // its path to the route's tail.
                if let Some(last) = nodes.last_mut() {
                    last.push_subspace(subspace.clone());
                }
                continue;
            }

            for name in names {
                nodes.push(NodeData::new(name, subspace.clone()));
            }
        }

        Ok(nodes)
    }

    /// Extract the canonical pathname of a subspace.
    ///
    /// The underscore-joined token sequence of [`Self::extract_path_data`].
    /// An empty pathname is a legitimate result for an all-noise name, as
    /// distinct from the [`OmoospaceError::InvalidPath`] failure.
    pub fn extract_pathname(&self, path: impl AsRef<Path>) -> Result<String> {
        let data = self.extract_path_data(path)?;
        Ok(data
            .iter()
            .map(|node| node.name.as_str())
            .collect::<Vec<_>>()
            .join("_"))
    }

    /// Build the objective tree from the current subspace scan.
    ///
    /// Rebuilt in full on every call; no cache, no invalidation.
    #[instrument(skip(self), level = "debug")]
    pub fn objective_tree(&self) -> Result<ObjectiveTree> {
        let mut tree = ObjectiveTree::new(self.name());
        for subspace in self.subspaces()? {
            tree.insert(self.extract_path_data(subspace.absolute())?);
        }

        debug!("objective tree rebuilt with {} nodes", tree.count());
        Ok(tree)
    }

    /// Add a subspace directory to this omoospace.
    ///
    /// Creates `under/<normalized name>` (default `under` is the subspaces
    /// directory) and, with `collect_children`, moves every immediate
    /// sibling whose normalized token sequence carries the new name as a
    /// clipped prefix into it — so `add_subspace("heart")` gathers
    /// `Heart.blend` and `Heart_Valves.spp` under the new `Heart/`.
    ///
    /// # Errors
    ///
    /// - Return [`OmoospaceError::NotADirectory`] if `under` is not an
    ///   existing directory.
    /// - Return [`OmoospaceError::OutOfScope`] if `under` is outside the
    ///   subspaces directory.
    /// - Return [`OmoospaceError::InvalidName`] if the name normalizes to
    ///   nothing.
    /// - Return [`OmoospaceError::AlreadyExists`] if the target directory
    ///   exists.
    /// - Return [`OmoospaceError::MoveFailed`] if collecting a child fails;
    ///   children already moved stay moved, and the error names the child
    ///   so the caller can resume.
    #[instrument(skip(self, under), level = "debug")]
    pub fn add_subspace(
        &self,
        name: &str,
        under: Option<&Path>,
        collect_children: bool,
    ) -> Result<Subspace> {
        let subspaces_dir = self.subspaces_dir()?;
        let parent = match under {
            Some(under) => absolutize(under)?,
            None => subspaces_dir.clone(),
        };

        if !parent.is_dir() {
            return Err(OmoospaceError::NotADirectory { path: parent });
        }

        if !is_subpath(&parent, &subspaces_dir, true) {
            return Err(OmoospaceError::OutOfScope { path: parent });
        }

        let subspace_name = normalize_name(name, false);
        if subspace_name.is_empty() {
            return Err(OmoospaceError::InvalidName {
                name: name.to_owned(),
            });
        }

        let target = parent.join(&subspace_name);
        if target.exists() {
            return Err(OmoospaceError::AlreadyExists { path: target });
        }

        info!("create subspace directory {:?}", target.display());
        make_path(&parent, [format!("{subspace_name}/")])?;

        if collect_children {
            let tokens: Vec<&str> = subspace_name.split('_').collect();
            for child in children_of(&parent, false)? {
                let Some(file_name) = child.file_name() else {
                    continue;
                };
                let child_name = file_name.to_string_lossy().into_owned();
                if child_name == subspace_name {
                    continue;
                }

                let normalized = normalize_name(&child_name, false);
                if normalized.is_empty() {
                    continue;
                }
                let child_tokens: Vec<&str> = normalized.split('_').collect();
                if !clipped_prefix_match(&tokens, &child_tokens) {
                    continue;
                }

                let destination = target.join(file_name);
                debug!(
                    "collect {:?} into {:?}",
                    child.display(),
                    target.display()
                );
                std::fs::rename(&child, &destination).map_err(|err| {
                    OmoospaceError::MoveFailed {
                        source: err,
                        child: child.clone(),
                        target: destination.clone(),
                    }
                })?;
            }
        }

        Ok(Subspace::new(self.clone(), absolutize(&target)?))
    }

    /// Notes recorded under a scope, scalar values read as one note.
    pub fn note(&self, scope: &str) -> Result<Vec<String>> {
        let notes = match self.profile().get("notes")? {
            Some(Value::Mapping(notes)) => notes,
            _ => return Ok(Vec::new()),
        };

        Ok(notes.get(scope).map(value_strings).unwrap_or_default())
    }

    /// Append a note under a scope.
    pub fn add_note(&self, note: impl AsRef<str>, scope: &str) -> Result<()> {
        let profile = self.profile();
        let mut notes = match profile.get("notes")? {
            Some(Value::Mapping(notes)) => notes,
            _ => Mapping::new(),
        };

        let mut scoped = notes.get(scope).map(value_strings).unwrap_or_default();
        scoped.push(note.as_ref().to_owned());
        notes.insert(
            Value::from(scope),
            Value::Sequence(scoped.into_iter().map(Value::from).collect()),
        );
        Ok(profile.set("notes", Value::Mapping(notes))?)
    }

    /// Current maker listing, in profile order.
    pub fn makers(&self) -> Result<Vec<Maker<'_>>> {
        Ok(listing(&self.profile(), "makers")?
            .keys()
            .filter_map(value_string)
            .map(|name| Maker::open(self, name))
            .collect())
    }

    /// Get a maker by name.
    pub fn get_maker(&self, name: &str) -> Result<Option<Maker<'_>>> {
        Ok(listing(&self.profile(), "makers")?
            .contains_key(name)
            .then(|| Maker::open(self, name)))
    }

    /// Add a maker, creating or updating its entry.
    pub fn add_maker(&self, data: impl Into<MakerData>) -> Result<Maker<'_>> {
        Maker::upsert(self, data)
    }

    /// Remove a maker; removing an absent name is a no-op.
    pub fn remove_maker(&self, name: &str) -> Result<()> {
        match self.get_maker(name)? {
            Some(maker) => maker.remove(),
            None => Ok(()),
        }
    }

    /// Current tool listing, in profile order.
    pub fn tools(&self) -> Result<Vec<Tool<'_>>> {
        Ok(listing(&self.profile(), "tools")?
            .keys()
            .filter_map(value_string)
            .map(|name| Tool::open(self, name))
            .collect())
    }

    /// Get a tool by name.
    pub fn get_tool(&self, name: &str) -> Result<Option<Tool<'_>>> {
        Ok(listing(&self.profile(), "tools")?
            .contains_key(name)
            .then(|| Tool::open(self, name)))
    }

    /// Add a tool, creating or updating its entry.
    pub fn add_tool(&self, data: impl Into<ToolData>) -> Result<Tool<'_>> {
        Tool::upsert(self, data)
    }

    /// Remove a tool; removing an absent name is a no-op.
    pub fn remove_tool(&self, name: &str) -> Result<()> {
        match self.get_tool(name)? {
            Some(tool) => tool.remove(),
            None => Ok(()),
        }
    }

    /// Current work listing, in profile order.
    pub fn works(&self) -> Result<Vec<Work<'_>>> {
        Ok(listing(&self.profile(), "works")?
            .keys()
            .filter_map(value_string)
            .map(|name| Work::open(self, name))
            .collect())
    }

    /// Get a work by name.
    pub fn get_work(&self, name: &str) -> Result<Option<Work<'_>>> {
        Ok(listing(&self.profile(), "works")?
            .contains_key(name)
            .then(|| Work::open(self, name)))
    }

    /// Add a work, creating or updating its entry.
    pub fn add_work(&self, data: impl Into<WorkData>) -> Result<Work<'_>> {
        Work::upsert(self, data)
    }

    /// Remove a work; removing an absent name is a no-op.
    pub fn remove_work(&self, name: &str) -> Result<()> {
        match self.get_work(name)? {
            Some(work) => work.remove(),
            None => Ok(()),
        }
    }
}

/// Check whether some suffix of the new subspace's tokens equals a prefix
/// of the child's tokens — the same clipping rule pathname extraction uses,
/// pointed at sibling collection.
fn clipped_prefix_match(new_tokens: &[&str], child_tokens: &[&str]) -> bool {
    for overlap_start in 0..new_tokens.len() {
        let suffix = &new_tokens[overlap_start..];
        if suffix.len() <= child_tokens.len() && *suffix == child_tokens[..suffix.len()] {
            return true;
        }
    }

    false
}

fn profile_filename(language: Language) -> String {
    match language {
        Language::En => "Omoospace.yml".to_owned(),
        other => format!("Omoospace.{other}.yml"),
    }
}

/// Options for [`create_omoospace`].
#[derive(Debug, Default, Clone)]
pub struct CreateOptions {
    /// Project brief recorded in the new profile (defaults to the name).
    pub brief: Option<String>,

    /// Subspaces directory to create and map (default: root itself).
    pub subspaces_dir: Option<String>,

    /// Contents directory to create and map (default: `Contents`).
    pub contents_dir: Option<String>,

    /// Profile language (default: English).
    pub language: Option<Language>,

    /// Also create a `README.md` seeded with the name and brief.
    pub readme: bool,

    /// Transliterate non-Latin characters in the directory name.
    pub transliterate: bool,
}

/// Create a new omoospace directory.
///
/// Normalizes `name` into the directory name, refuses to nest inside an
/// existing omoospace, creates the profile file and the contents (and
/// optionally subspaces) directories, and records the configuration in the
/// profile.
///
/// # Errors
///
/// - Return [`OmoospaceError::InvalidName`] if the name normalizes to
///   nothing.
/// - Return [`OmoospaceError::AlreadyExists`] if the target already lies in
///   an omoospace.
#[instrument(skip(under, options), level = "debug")]
pub fn create_omoospace(
    name: &str,
    under: impl AsRef<Path>,
    options: CreateOptions,
) -> Result<Omoospace> {
    let dirname = normalize_name(name, options.transliterate);
    if dirname.is_empty() {
        return Err(OmoospaceError::InvalidName {
            name: name.to_owned(),
        });
    }

    let root_dir = absolutize(under.as_ref().join(&dirname))?;
    if Omoospace::discover(&root_dir).is_ok() {
        return Err(OmoospaceError::AlreadyExists { path: root_dir });
    }

    let language = options.language.unwrap_or_default();
    let contents_dirname = options
        .contents_dir
        .clone()
        .unwrap_or_else(|| "Contents".to_owned());

    let mut entries = vec![profile_filename(language), format!("{contents_dirname}/")];
    if let Some(subspaces_dirname) = &options.subspaces_dir {
        entries.push(format!("{subspaces_dirname}/"));
    }
    make_path(&root_dir, &entries)?;

    if options.readme {
        let brief = options.brief.clone().unwrap_or_default();
        make_file(&root_dir, "README.md", format!("# {name}\n{brief}\n"))?;
    }

    info!("created omoospace at {:?}", root_dir.display());
    let omoospace = Omoospace::discover_with_language(&root_dir, Some(language))?;
    omoospace.set_brief(options.brief.unwrap_or_else(|| name.to_owned()))?;
    if let Some(subspaces_dirname) = options.subspaces_dir {
        omoospace.set_subspaces_dir(subspaces_dirname)?;
    }
    if contents_dirname != "Contents" {
        omoospace.set_contents_dir(contents_dirname)?;
    }

    Ok(omoospace)
}

/// Extract the canonical pathname of a path, discovering its omoospace.
///
/// # Errors
///
/// - Return [`OmoospaceError::NotFound`] if the path is not inside any
///   omoospace.
/// - Return [`OmoospaceError::InvalidPath`] if it is inside one but is not
///   a valid subspace.
pub fn extract_pathname(path: impl AsRef<Path>) -> Result<String> {
    let path = absolutize(path)?;
    let omoospace = Omoospace::discover(&path)?;
    omoospace.extract_pathname(&path)
}

/// Omoospace error types.
#[derive(Debug, thiserror::Error)]
pub enum OmoospaceError {
    /// No profile file found searching upward from a path.
    #[error("no omoospace found upward from {:?}", start.display())]
    NotFound { start: PathBuf },

    /// Name normalizes to an empty identifier.
    #[error("{name:?} normalizes to an empty name")]
    InvalidName { name: String },

    /// A valid subspace was required and the path is not one.
    #[error("{:?} is not a valid subspace", path.display())]
    InvalidPath { path: PathBuf },

    /// Parent for a new subspace is not an existing directory.
    #[error("{:?} is not an existing directory", path.display())]
    NotADirectory { path: PathBuf },

    /// Target for a new subspace already exists.
    #[error("{:?} already exists", path.display())]
    AlreadyExists { path: PathBuf },

    /// Parent for a new subspace lies outside the subspaces directory.
    #[error("{:?} is outside the subspaces directory", path.display())]
    OutOfScope { path: PathBuf },

    /// Collecting a child into a new subspace failed partway.
    #[error("failed to move {:?} to {:?}", child.display(), target.display())]
    MoveFailed {
        #[source]
        source: std::io::Error,
        child: PathBuf,
        target: PathBuf,
    },

    /// Profile access fails.
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// Path resolution or filesystem access fails.
    #[error(transparent)]
    Path(#[from] PathError),
}

/// Friendly result alias :3
pub type Result<T, E = OmoospaceError> = std::result::Result<T, E>;
