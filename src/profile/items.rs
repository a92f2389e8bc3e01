// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Typed profile items.
//!
//! The profile's `makers`, `tools`, and `works` listings map item names to
//! either a bare-string shorthand or a nested attribute mapping. The
//! shorthand means something different per item kind: a maker shorthand is
//! an email, a tool shorthand is a version, and a work shorthand is its
//! content listing (one path or a list of paths).
//!
//! Each wrapper here is a thin handle around one named entry. Accessors
//! delegate straight to [`Profile::get`]/[`Profile::set`] so that reads
//! always reflect the latest file state and writes land immediately; no
//! item data is cached on the handle. Writing an attribute that a shorthand
//! cannot hold first upgrades the shorthand into a mapping, preserving the
//! value it stood for.

use crate::{
    name::{is_email, is_url, is_version},
    omoospace::{Omoospace, OmoospaceError, Result},
    profile::{localized_key, Profile, ProfileError},
};

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// Maker attribute payload.
#[derive(Default, Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
pub struct MakerData {
    /// Name of the maker.
    pub name: String,

    /// Contact email of the maker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Personal or studio website of the maker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl From<&str> for MakerData {
    fn from(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..Self::default()
        }
    }
}

/// One maker entry of the profile.
#[derive(Debug, Clone)]
pub struct Maker<'a> {
    omoospace: &'a Omoospace,
    name: String,
}

impl<'a> Maker<'a> {
    const LISTING: &'static str = "makers";

    /// Register maker in the profile, creating the entry if missing.
    ///
    /// # Errors
    ///
    /// - Return [`ProfileError`] variants if the profile cannot be accessed
    ///   or a given attribute fails validation.
    pub(crate) fn upsert(omoospace: &'a Omoospace, data: impl Into<MakerData>) -> Result<Self> {
        let data = data.into();
        let maker = Self::open(omoospace, &data.name);
        register(&omoospace.profile(), Self::LISTING, &data.name)?;

        if let Some(email) = &data.email {
            maker.set_email(email)?;
        }

        if let Some(website) = &data.website {
            maker.set_website(website)?;
        }

        Ok(maker)
    }

    pub(crate) fn open(omoospace: &'a Omoospace, name: impl Into<String>) -> Self {
        Self {
            omoospace,
            name: name.into(),
        }
    }

    /// Name of this maker.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename this maker, keeping its attributes.
    ///
    /// # Errors
    ///
    /// - Return [`ProfileError::MissingItem`] if the maker no longer exists.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        rename_entry(&self.omoospace.profile(), Self::LISTING, &self.name, &name)?;
        self.name = name;
        Ok(())
    }

    /// Latest email recorded for this maker.
    ///
    /// A bare-string shorthand entry is itself the email.
    pub fn email(&self) -> Result<Option<String>> {
        let profile = self.omoospace.profile();
        match entry(&profile, Self::LISTING, &self.name)? {
            Value::String(shorthand) => Ok(Some(shorthand)),
            value => Ok(field(&profile, &value, "email")),
        }
    }

    /// Record a new email for this maker.
    ///
    /// # Errors
    ///
    /// - Return [`ProfileError::InvalidEmail`] if the value is malformed.
    pub fn set_email(&self, value: impl AsRef<str>) -> Result<()> {
        let value = value.as_ref();
        if !is_email(value) {
            return Err(ProfileError::InvalidEmail {
                value: value.to_owned(),
            }
            .into());
        }

        let profile = self.omoospace.profile();
        put_field(&profile, Self::LISTING, &self.name, "email", Value::from(value))
    }

    /// Latest website recorded for this maker.
    pub fn website(&self) -> Result<Option<String>> {
        let profile = self.omoospace.profile();
        let value = entry(&profile, Self::LISTING, &self.name)?;
        Ok(field(&profile, &value, "website"))
    }

    /// Record a new website for this maker.
    ///
    /// A shorthand entry is upgraded to a mapping first, preserving the
    /// shorthand as the email it stood for.
    ///
    /// # Errors
    ///
    /// - Return [`ProfileError::InvalidUrl`] if the value is malformed.
    pub fn set_website(&self, value: impl AsRef<str>) -> Result<()> {
        let value = value.as_ref();
        if !is_url(value) {
            return Err(ProfileError::InvalidUrl {
                value: value.to_owned(),
            }
            .into());
        }

        let profile = self.omoospace.profile();
        if let Value::String(shorthand) = entry(&profile, Self::LISTING, &self.name)? {
            put_field(
                &profile,
                Self::LISTING,
                &self.name,
                "email",
                Value::from(shorthand),
            )?;
        }

        put_field(&profile, Self::LISTING, &self.name, "website", Value::from(value))
    }

    /// Remove this maker from the profile.
    ///
    /// # Errors
    ///
    /// - Return [`ProfileError::MissingItem`] if the maker no longer exists.
    pub fn remove(self) -> Result<()> {
        remove_entry(&self.omoospace.profile(), Self::LISTING, &self.name)
    }
}

/// Tool attribute payload.
#[derive(Default, Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
pub struct ToolData {
    /// Name of the tool.
    pub name: String,

    /// Version in use, with or without a leading `v`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Website of the tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Extensions or plugins the project relies on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
}

impl From<&str> for ToolData {
    fn from(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..Self::default()
        }
    }
}

/// One tool entry of the profile.
#[derive(Debug, Clone)]
pub struct Tool<'a> {
    omoospace: &'a Omoospace,
    name: String,
}

impl<'a> Tool<'a> {
    const LISTING: &'static str = "tools";

    pub(crate) fn upsert(omoospace: &'a Omoospace, data: impl Into<ToolData>) -> Result<Self> {
        let data = data.into();
        let tool = Self::open(omoospace, &data.name);
        register(&omoospace.profile(), Self::LISTING, &data.name)?;

        if let Some(version) = &data.version {
            tool.set_version(version)?;
        }

        if let Some(website) = &data.website {
            tool.set_website(website)?;
        }

        if let Some(extensions) = &data.extensions {
            tool.set_extensions(extensions.clone())?;
        }

        Ok(tool)
    }

    pub(crate) fn open(omoospace: &'a Omoospace, name: impl Into<String>) -> Self {
        Self {
            omoospace,
            name: name.into(),
        }
    }

    /// Name of this tool.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latest version recorded for this tool, without any leading `v`.
    ///
    /// A bare-string shorthand entry is itself the version.
    pub fn version(&self) -> Result<Option<String>> {
        let profile = self.omoospace.profile();
        let version = match entry(&profile, Self::LISTING, &self.name)? {
            Value::String(shorthand) => Some(shorthand),
            value => field(&profile, &value, "version"),
        };
        Ok(version.map(|v| v.strip_prefix('v').unwrap_or(&v).to_owned()))
    }

    /// Record a new version for this tool.
    ///
    /// # Errors
    ///
    /// - Return [`ProfileError::InvalidVersion`] if the value is malformed.
    pub fn set_version(&self, value: impl AsRef<str>) -> Result<()> {
        let value = value.as_ref();
        if !is_version(value) {
            return Err(ProfileError::InvalidVersion {
                value: value.to_owned(),
            }
            .into());
        }

        let version = value.strip_prefix('v').unwrap_or(value);
        let profile = self.omoospace.profile();
        put_field(
            &profile,
            Self::LISTING,
            &self.name,
            "version",
            Value::from(version),
        )
    }

    /// Latest website recorded for this tool.
    pub fn website(&self) -> Result<Option<String>> {
        let profile = self.omoospace.profile();
        let value = entry(&profile, Self::LISTING, &self.name)?;
        Ok(field(&profile, &value, "website"))
    }

    /// Record a new website for this tool.
    ///
    /// # Errors
    ///
    /// - Return [`ProfileError::InvalidUrl`] if the value is malformed.
    pub fn set_website(&self, value: impl AsRef<str>) -> Result<()> {
        let value = value.as_ref();
        if !is_url(value) {
            return Err(ProfileError::InvalidUrl {
                value: value.to_owned(),
            }
            .into());
        }

        let profile = self.omoospace.profile();
        self.preserve_shorthand(&profile)?;
        put_field(&profile, Self::LISTING, &self.name, "website", Value::from(value))
    }

    /// Latest extension listing recorded for this tool.
    ///
    /// Accepts either a plain list or a mapping whose keys are the
    /// extension names.
    pub fn extensions(&self) -> Result<Vec<String>> {
        let profile = self.omoospace.profile();
        let value = entry(&profile, Self::LISTING, &self.name)?;
        match value {
            Value::Mapping(ref mapping) => {
                let key = localized_key("extensions", profile.language());
                Ok(mapping.get(key).map(crate::profile::value_strings).unwrap_or_default())
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Record a new extension listing for this tool, deduplicated in order.
    pub fn set_extensions(&self, values: impl IntoIterator<Item = impl Into<String>>) -> Result<()> {
        let mut extensions: Vec<String> = Vec::new();
        for value in values {
            let value = value.into();
            if !extensions.contains(&value) {
                extensions.push(value);
            }
        }

        let profile = self.omoospace.profile();
        self.preserve_shorthand(&profile)?;
        put_field(
            &profile,
            Self::LISTING,
            &self.name,
            "extensions",
            Value::Sequence(extensions.into_iter().map(Value::from).collect()),
        )
    }

    /// Remove this tool from the profile.
    ///
    /// # Errors
    ///
    /// - Return [`ProfileError::MissingItem`] if the tool no longer exists.
    pub fn remove(self) -> Result<()> {
        remove_entry(&self.omoospace.profile(), Self::LISTING, &self.name)
    }

    /// Fold a bare-string entry into the version field it stood for.
    fn preserve_shorthand(&self, profile: &Profile) -> Result<()> {
        if let Value::String(shorthand) = entry(profile, Self::LISTING, &self.name)? {
            put_field(
                profile,
                Self::LISTING,
                &self.name,
                "version",
                Value::from(shorthand),
            )?;
        }
        Ok(())
    }
}

/// Work attribute payload.
#[derive(Default, Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
pub struct WorkData {
    /// Name of the work.
    pub name: String,

    /// Brief description of the work.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brief: Option<String>,

    /// Release version of the work.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Paths under the contents directory that make up the work.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<Vec<String>>,
}

impl From<&str> for WorkData {
    fn from(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..Self::default()
        }
    }
}

/// One work entry of the profile.
#[derive(Debug, Clone)]
pub struct Work<'a> {
    omoospace: &'a Omoospace,
    name: String,
}

impl<'a> Work<'a> {
    const LISTING: &'static str = "works";

    pub(crate) fn upsert(omoospace: &'a Omoospace, data: impl Into<WorkData>) -> Result<Self> {
        let data = data.into();
        let work = Self::open(omoospace, &data.name);
        register(&omoospace.profile(), Self::LISTING, &data.name)?;

        if let Some(brief) = &data.brief {
            work.set_brief(brief)?;
        }

        if let Some(version) = &data.version {
            work.set_version(version)?;
        }

        if let Some(contents) = &data.contents {
            work.set_contents(contents.clone())?;
        }

        Ok(work)
    }

    pub(crate) fn open(omoospace: &'a Omoospace, name: impl Into<String>) -> Self {
        Self {
            omoospace,
            name: name.into(),
        }
    }

    /// Name of this work.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latest brief recorded for this work.
    pub fn brief(&self) -> Result<Option<String>> {
        let profile = self.omoospace.profile();
        let value = entry(&profile, Self::LISTING, &self.name)?;
        Ok(field(&profile, &value, "brief"))
    }

    /// Record a new brief for this work.
    pub fn set_brief(&self, value: impl AsRef<str>) -> Result<()> {
        let profile = self.omoospace.profile();
        self.preserve_shorthand(&profile)?;
        put_field(
            &profile,
            Self::LISTING,
            &self.name,
            "brief",
            Value::from(value.as_ref()),
        )
    }

    /// Latest version recorded for this work, without any leading `v`.
    pub fn version(&self) -> Result<Option<String>> {
        let profile = self.omoospace.profile();
        let value = entry(&profile, Self::LISTING, &self.name)?;
        Ok(field(&profile, &value, "version")
            .map(|v| v.strip_prefix('v').unwrap_or(&v).to_owned()))
    }

    /// Record a new version for this work.
    ///
    /// # Errors
    ///
    /// - Return [`ProfileError::InvalidVersion`] if the value is malformed.
    pub fn set_version(&self, value: impl AsRef<str>) -> Result<()> {
        let value = value.as_ref();
        if !is_version(value) {
            return Err(ProfileError::InvalidVersion {
                value: value.to_owned(),
            }
            .into());
        }

        let profile = self.omoospace.profile();
        self.preserve_shorthand(&profile)?;
        put_field(
            &profile,
            Self::LISTING,
            &self.name,
            "version",
            Value::from(value.strip_prefix('v').unwrap_or(value)),
        )
    }

    /// Latest content listing of this work, restricted to paths that
    /// currently exist under the contents directory.
    ///
    /// Shorthand entries (one path or a list of paths) read transparently.
    pub fn contents(&self) -> Result<Vec<String>> {
        let profile = self.omoospace.profile();
        let raw = match entry(&profile, Self::LISTING, &self.name)? {
            Value::String(path) => vec![path],
            Value::Sequence(paths) => paths
                .iter()
                .filter_map(crate::profile::value_string)
                .collect(),
            Value::Mapping(mapping) => {
                let key = localized_key("contents", profile.language());
                mapping
                    .get(key)
                    .map(crate::profile::value_strings)
                    .unwrap_or_default()
            }
            _ => Vec::new(),
        };

        let contents_dir = self.omoospace.contents_dir()?;
        Ok(raw
            .into_iter()
            .filter(|path| contents_dir.join(path).exists())
            .collect())
    }

    /// Record a new content listing, dropping paths that do not exist under
    /// the contents directory.
    pub fn set_contents(&self, values: impl IntoIterator<Item = impl Into<String>>) -> Result<()> {
        let contents_dir = self.omoospace.contents_dir()?;
        let mut contents: Vec<String> = Vec::new();
        for value in values {
            let value = value.into();
            if contents_dir.join(&value).exists() && !contents.contains(&value) {
                contents.push(value);
            }
        }

        let profile = self.omoospace.profile();
        put_field(
            &profile,
            Self::LISTING,
            &self.name,
            "contents",
            Value::Sequence(contents.into_iter().map(Value::from).collect()),
        )
    }

    /// Latest contribution groups of this work.
    ///
    /// Each group maps a contribution kind (Modeler, Animator, ...) to the
    /// maker names credited for it; a scalar value reads as a single-name
    /// group.
    pub fn contributions(&self) -> Result<Vec<(String, Vec<String>)>> {
        let profile = self.omoospace.profile();
        let value = entry(&profile, Self::LISTING, &self.name)?;
        let Value::Mapping(ref mapping) = value else {
            return Ok(Vec::new());
        };

        let key = localized_key("contributions", profile.language());
        let Some(Value::Mapping(groups)) = mapping.get(key) else {
            return Ok(Vec::new());
        };

        Ok(groups
            .iter()
            .filter_map(|(group, names)| {
                crate::profile::value_string(group)
                    .map(|group| (group, crate::profile::value_strings(names)))
            })
            .collect())
    }

    /// Replace the contribution groups of this work.
    ///
    /// Every credited name is also registered in the profile's maker
    /// listing.
    pub fn set_contributions(&self, groups: Vec<(String, Vec<String>)>) -> Result<()> {
        let mut mapping = Mapping::new();
        for (group, names) in groups {
            for name in &names {
                Maker::upsert(self.omoospace, name.as_str())?;
            }
            mapping.insert(
                Value::from(group),
                Value::Sequence(names.into_iter().map(Value::from).collect()),
            );
        }

        let profile = self.omoospace.profile();
        self.preserve_shorthand(&profile)?;
        put_field(
            &profile,
            Self::LISTING,
            &self.name,
            "contributions",
            Value::Mapping(mapping),
        )
    }

    /// Credit makers under a contribution group, appending to any names
    /// already present.
    pub fn add_contribution(
        &self,
        makers: impl IntoIterator<Item = impl Into<String>>,
        group: Option<&str>,
    ) -> Result<()> {
        let group = group.unwrap_or("Maker").to_owned();
        let mut contributions = self.contributions()?;

        let index = match contributions.iter().position(|(name, _)| *name == group) {
            Some(index) => index,
            None => {
                contributions.push((group, Vec::new()));
                contributions.len() - 1
            }
        };
        let names = &mut contributions[index].1;
        for maker in makers {
            let maker = maker.into();
            if !names.contains(&maker) {
                names.push(maker);
            }
        }

        let mut mapping = Mapping::new();
        for (group, names) in contributions {
            mapping.insert(
                Value::from(group),
                Value::Sequence(names.into_iter().map(Value::from).collect()),
            );
        }

        let profile = self.omoospace.profile();
        self.preserve_shorthand(&profile)?;
        put_field(
            &profile,
            Self::LISTING,
            &self.name,
            "contributions",
            Value::Mapping(mapping),
        )
    }

    /// Remove this work from the profile.
    ///
    /// # Errors
    ///
    /// - Return [`ProfileError::MissingItem`] if the work no longer exists.
    pub fn remove(self) -> Result<()> {
        remove_entry(&self.omoospace.profile(), Self::LISTING, &self.name)
    }

    /// Fold a shorthand entry into the contents field it stood for.
    fn preserve_shorthand(&self, profile: &Profile) -> Result<()> {
        let contents = match entry(profile, Self::LISTING, &self.name)? {
            Value::String(path) => vec![Value::from(path)],
            Value::Sequence(paths) => paths,
            _ => return Ok(()),
        };

        put_field(
            profile,
            Self::LISTING,
            &self.name,
            "contents",
            Value::Sequence(contents),
        )
    }
}

/// Read a whole listing mapping, treating absent or malformed as empty.
pub(crate) fn listing(profile: &Profile, key: &str) -> Result<Mapping> {
    match profile.get(key)? {
        Some(Value::Mapping(mapping)) => Ok(mapping),
        _ => Ok(Mapping::new()),
    }
}

fn entry(profile: &Profile, listing_key: &str, name: &str) -> Result<Value> {
    listing(profile, listing_key)?
        .get(name)
        .cloned()
        .ok_or_else(|| {
            OmoospaceError::from(ProfileError::MissingItem {
                item: name.to_owned(),
                scope: listing_key.to_owned(),
            })
        })
}

fn register(profile: &Profile, listing_key: &str, name: &str) -> Result<()> {
    let mut entries = listing(profile, listing_key)?;
    if !entries.contains_key(name) {
        entries.insert(Value::from(name), Value::Mapping(Mapping::new()));
        profile.set(listing_key, Value::Mapping(entries))?;
    }
    Ok(())
}

fn rename_entry(profile: &Profile, listing_key: &str, from: &str, to: &str) -> Result<()> {
    let mut entries = listing(profile, listing_key)?;
    let value = entries.remove(from).ok_or_else(|| {
        OmoospaceError::from(ProfileError::MissingItem {
            item: from.to_owned(),
            scope: listing_key.to_owned(),
        })
    })?;
    entries.insert(Value::from(to), value);
    profile.set(listing_key, Value::Mapping(entries))?;
    Ok(())
}

fn remove_entry(profile: &Profile, listing_key: &str, name: &str) -> Result<()> {
    let mut entries = listing(profile, listing_key)?;
    if entries.remove(name).is_none() {
        return Err(ProfileError::MissingItem {
            item: name.to_owned(),
            scope: listing_key.to_owned(),
        }
        .into());
    }
    profile.set(listing_key, Value::Mapping(entries))?;
    Ok(())
}

/// Read one attribute out of an item's mapping form.
fn field(profile: &Profile, value: &Value, key: &str) -> Option<String> {
    match value {
        Value::Mapping(mapping) => mapping
            .get(localized_key(key, profile.language()))
            .and_then(crate::profile::value_string),
        _ => None,
    }
}

/// Write one attribute into an item's mapping form, upgrading any other
/// representation to a mapping.
fn put_field(
    profile: &Profile,
    listing_key: &str,
    name: &str,
    key: &str,
    value: Value,
) -> Result<()> {
    let mut mapping = match entry(profile, listing_key, name)? {
        Value::Mapping(mapping) => mapping,
        _ => Mapping::new(),
    };
    mapping.insert(Value::from(localized_key(key, profile.language())), value);

    let mut entries = listing(profile, listing_key)?;
    entries.insert(Value::from(name), Value::Mapping(mapping));
    profile.set(listing_key, Value::Mapping(entries))?;
    Ok(())
}
