// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Profile file handling.
//!
//! Every omoospace carries a YAML profile at its top-level that records the
//! project metadata: a brief, directory mappings, ignore patterns, notes,
//! and the maker/tool/work listings. The profile is the single source of
//! truth for configuration, so this module deliberately keeps no in-memory
//! copy of it: every [`Profile::get`] re-reads the file and every
//! [`Profile::set`] rewrites it. External edits to the file are therefore
//! always visible on the next access.
//!
//! # Profile Languages
//!
//! The default profile file is named `Omoospace.yml`. A profile can instead
//! be kept in another language as `Omoospace.<lang>.yml`, in which case its
//! top-level keys are written in that language (`brief` becomes `简述` in a
//! Chinese profile, and so on). [`Profile`] translates key names both ways,
//! so callers always speak the canonical English key names.

pub mod items;

use serde_yaml::{Mapping, Value};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::warn;

/// Profile language.
///
/// Determines the key names used inside the profile file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,

    Zh,
}

impl Language {
    /// Language code as used in profile filenames.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }
}

impl Display for Language {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ProfileError;

    fn from_str(code: &str) -> Result<Self> {
        match code {
            "en" => Ok(Self::En),
            "zh" => Ok(Self::Zh),
            _ => Err(ProfileError::UnknownLanguage {
                value: code.to_owned(),
            }),
        }
    }
}

/// Translate a canonical key name into its per-language spelling.
///
/// Unknown keys pass through untouched so ad-hoc keys keep working.
pub(crate) fn localized_key(key: &str, language: Language) -> &str {
    match language {
        Language::En => key,
        Language::Zh => match key {
            "subspaces_dir" => "Subspaces文件夹",
            "contents_dir" => "Contents文件夹",
            "ignore" => "忽略列表",
            "brief" => "简述",
            "notes" => "记录列表",
            "maker" => "主创",
            "makers" => "主创列表",
            "tools" => "工具列表",
            "works" => "作品列表",
            "version" => "版本",
            "email" => "邮箱",
            "website" => "网站",
            "extensions" => "扩展列表",
            "contents" => "内容列表",
            "contributions" => "贡献列表",
            _ => key,
        },
    }
}

/// YAML-backed profile with read-fresh/write-through key access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    file: PathBuf,
}

impl Profile {
    /// Construct profile handle for target file.
    ///
    /// The file does not need to exist yet; it is created on first write.
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }

    /// Path of the backing profile file.
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Language encoded in the profile filename.
    ///
    /// `Omoospace.yml` is English; `Omoospace.zh.yml` is Chinese. An
    /// unrecognized language tag falls back to English.
    pub fn language(&self) -> Language {
        let stem = self
            .file
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        match stem.rsplit_once('.') {
            Some((_, code)) => code.parse().unwrap_or_else(|_| {
                warn!("unrecognized profile language {code:?}, falling back to en");
                Language::En
            }),
            None => Language::En,
        }
    }

    /// Get the latest value for a top-level key.
    ///
    /// The key is given in canonical English and translated to the profile
    /// language before lookup. A missing file reads as an empty profile.
    ///
    /// # Errors
    ///
    /// - Return [`ProfileError::ReadProfile`] if the file cannot be read.
    /// - Return [`ProfileError::Yaml`] if the file is not valid YAML.
    pub fn get(&self, key: &str) -> Result<Option<Value>> {
        let mapping = self.read()?;
        Ok(mapping.get(localized_key(key, self.language())).cloned())
    }

    /// Set the value for a top-level key, creating the file as needed.
    ///
    /// # Errors
    ///
    /// - Return [`ProfileError::ReadProfile`] if the existing file cannot be
    ///   read.
    /// - Return [`ProfileError::WriteProfile`] if the file cannot be written.
    pub fn set(&self, key: &str, value: impl Into<Value>) -> Result<()> {
        let mut mapping = self.read()?;
        mapping.insert(
            Value::from(localized_key(key, self.language())),
            value.into(),
        );
        self.write(&mapping)
    }

    fn read(&self) -> Result<Mapping> {
        if !self.file.exists() {
            return Ok(Mapping::new());
        }

        let content =
            std::fs::read_to_string(&self.file).map_err(|err| ProfileError::ReadProfile {
                source: err,
                file: self.file.clone(),
            })?;

        // INVARIANT: Tolerate empty or null documents.
        if content.trim().is_empty() {
            return Ok(Mapping::new());
        }

        let value: Value = serde_yaml::from_str(&content)?;
        match value {
            Value::Mapping(mapping) => Ok(mapping),
            Value::Null => Ok(Mapping::new()),
            _ => Err(ProfileError::NotAMapping {
                file: self.file.clone(),
            }),
        }
    }

    fn write(&self, mapping: &Mapping) -> Result<()> {
        if let Some(parent) = self.file.parent() {
            mkdirp::mkdirp(parent).map_err(|err| ProfileError::WriteProfile {
                source: err,
                file: self.file.clone(),
            })?;
        }

        let content = serde_yaml::to_string(mapping)?;
        std::fs::write(&self.file, content).map_err(|err| ProfileError::WriteProfile {
            source: err,
            file: self.file.clone(),
        })
    }
}

/// Coerce a YAML scalar into a string.
pub(crate) fn value_string(value: &Value) -> Option<String> {
    match value {
        Value::String(string) => Some(string.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Coerce a YAML value into a list of strings.
///
/// Scalars read as one-element lists; mappings contribute their keys
/// (profiles in the wild sometimes pin extensions as `name: version`
/// pairs).
pub(crate) fn value_strings(value: &Value) -> Vec<String> {
    match value {
        Value::String(_) | Value::Number(_) => value_string(value).into_iter().collect(),
        Value::Sequence(sequence) => sequence.iter().filter_map(value_string).collect(),
        Value::Mapping(mapping) => mapping.keys().filter_map(value_string).collect(),
        _ => Vec::new(),
    }
}

/// Profile error types.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// Profile file cannot be read from.
    #[error("failed to read profile at {:?}", file.display())]
    ReadProfile {
        #[source]
        source: std::io::Error,
        file: PathBuf,
    },

    /// Profile file cannot be written to.
    #[error("failed to write profile at {:?}", file.display())]
    WriteProfile {
        #[source]
        source: std::io::Error,
        file: PathBuf,
    },

    /// Profile document is something other than a key/value mapping.
    #[error("profile at {:?} is not a mapping", file.display())]
    NotAMapping { file: PathBuf },

    /// Profile content is not valid YAML.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Language code has no key table.
    #[error("{value:?} is not a recognized language")]
    UnknownLanguage { value: String },

    /// Named item is absent from its listing.
    #[error("{item:?} not found in {scope}")]
    MissingItem { item: String, scope: String },

    /// Email value fails validation.
    #[error("{value:?} is not a valid email")]
    InvalidEmail { value: String },

    /// URL value fails validation.
    #[error("{value:?} is not a valid url")]
    InvalidUrl { value: String },

    /// Version value fails validation.
    #[error("{value:?} is not a valid version")]
    InvalidVersion { value: String },
}

/// Friendly result alias :3
pub type Result<T, E = ProfileError> = std::result::Result<T, E>;
