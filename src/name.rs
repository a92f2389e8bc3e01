// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Name normalization.
//!
//! Raw file and folder names coming out of DCC software are full of noise:
//! version counters, autosave markers, backup suffixes, stray whitespace,
//! and inconsistent casing. Normalization boils a raw name down to its
//! canonical identifier form so that `Heart.v001.autosave.blend`,
//! `heart.blend`, and `Heart.blend` all speak about the same thing.
//!
//! # Normalized Form
//!
//! A normalized name is a sequence of PascalCase tokens joined by `_`. The
//! underscore is a structural separator, not part of any token: the pathname
//! machinery splits on it to recover the discrete tokens. A name made of
//! nothing but noise normalizes to the empty string. That is a legitimate
//! result here; callers that need a usable identifier must reject it
//! themselves (see [`OmoospaceError::InvalidName`]).
//!
//! # See Also
//!
//! 1. [`OmoospaceError::InvalidName`](crate::omoospace::OmoospaceError)

use deunicode::deunicode;
use regex::Regex;
use std::sync::LazyLock;

/// Characters outside `[A-Za-z0-9_-]` (and unicode word characters) become
/// word boundaries.
static RE_NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w-]").expect("invalid non-word regex"));

static RE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(?:\.\d+)?$").expect("invalid number regex"));

static RE_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[<>]=?|=)?v?\d+(?:\.\d+)+$|^v\d+$").expect("invalid version regex")
});

static RE_AUTOSAVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^auto[-_\s]?save").expect("invalid autosave regex"));

static RE_BACKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:bak\d*|backup)$").expect("invalid backup regex"));

static RE_RECOVERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^recovered$").expect("invalid recovered regex"));

static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("invalid email regex")
});

static RE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[-A-Za-z0-9$_@.&+!*(),%/#?=:~]+$").expect("invalid url regex")
});

/// Normalize a raw file or folder name into its canonical token form.
///
/// Everything after the first `.` is dropped (extensions and dotted
/// version/backup suffixes alike). The remainder splits on `_` into parts;
/// each part drops its non-semantic words (numbers, versions, autosave,
/// backup, and recovered markers), strips characters outside
/// `[A-Za-z0-9_-]`, optionally transliterates non-Latin script to a Latin
/// phonetic approximation, and folds into PascalCase. Parts left with no
/// semantic words vanish entirely.
///
/// Returns the empty string when the whole name is noise.
pub fn normalize_name(raw: impl AsRef<str>, transliterate: bool) -> String {
    let base = raw.as_ref().split('.').next().unwrap_or_default();

    let mut result_parts: Vec<String> = Vec::new();
    for part in base.split('_') {
        let words: Vec<&str> = part.split_whitespace().filter(|w| is_semantic(w)).collect();
        if words.is_empty() {
            continue;
        }

        let cleaned = RE_NON_WORD.replace_all(&words.join(" "), " ").into_owned();
        let cleaned = if transliterate {
            deunicode(&cleaned)
        } else {
            cleaned
        };

        let pascal: String = cleaned.split_whitespace().map(pascal_word).collect();
        if !pascal.is_empty() {
            result_parts.push(pascal);
        }
    }

    result_parts.join("_")
}

/// Uppercase the first letter, leave the rest untouched.
///
/// Preserves internal capitalization of words that already carry some, so
/// `ShotFX` stays `ShotFX` rather than flattening to `Shotfx`.
fn pascal_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_semantic(word: &str) -> bool {
    !(is_number(word)
        || is_version(word)
        || is_autosave(word)
        || is_recovered(word)
        || is_backup(word))
}

/// Check if string is a plain (optionally signed or decimal) number.
pub fn is_number(string: &str) -> bool {
    RE_NUMBER.is_match(string)
}

/// Check if string is a version token.
///
/// Accepts `v001`, `1.2.3`, `v4.2.0` and comparator forms like `>=0.2.0`.
pub fn is_version(string: &str) -> bool {
    RE_VERSION.is_match(string)
}

/// Check if string starts with an autosave marker (`autosave`, `auto-save`,
/// `auto_save`, any casing).
pub fn is_autosave(string: &str) -> bool {
    RE_AUTOSAVE.is_match(string)
}

/// Check if string is a backup marker (`bak`, `bak3`, `backup`, any casing).
pub fn is_backup(string: &str) -> bool {
    RE_BACKUP.is_match(string)
}

/// Check if string is a crash-recovery marker.
pub fn is_recovered(string: &str) -> bool {
    RE_RECOVERED.is_match(string)
}

/// Check if string looks like an email address.
pub fn is_email(string: &str) -> bool {
    RE_EMAIL.is_match(string)
}

/// Check if string looks like an http(s) URL.
pub fn is_url(string: &str) -> bool {
    RE_URL.is_match(string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_test_case::test_case;

    #[test_case("SQ010_SH0100_001", "SQ010_SH0100"; "trailing counter part")]
    #[test_case("SQ010_SH0100_v001", "SQ010_SH0100"; "trailing version part")]
    #[test_case("Asset A v001", "AssetA"; "version word inside part")]
    #[test_case("Asset A autosave", "AssetA"; "autosave word inside part")]
    #[test_case("Asset_A autosave", "Asset_A"; "autosave next to kept word")]
    #[test_case("Asset_a_autosave_001", "Asset_A"; "single letter part uppercased")]
    #[test_case("AssetA.v001.autosave.blend", "AssetA"; "dotted suffix chain")]
    #[test_case("Asset-A.v001.blend", "Asset-A"; "hyphen preserved")]
    #[test_case("ShotFX_bak2", "ShotFX"; "internal capitals preserved")]
    #[test_case("backup", ""; "pure backup noise")]
    #[test_case("v001", ""; "pure version noise")]
    #[test_case("autosave", ""; "pure autosave noise")]
    #[test]
    fn normalize_name_table(raw: &str, expect: &str) {
        assert_eq!(normalize_name(raw, false), expect);
    }

    #[test_case("头骨_v001", "TouGu"; "han characters")]
    #[test_case("头骨_0001", "TouGu"; "han characters with counter")]
    #[test_case("Asset头骨_0001", "AssetTouGu"; "mixed latin and han")]
    #[test]
    fn normalize_name_transliterated(raw: &str, expect: &str) {
        assert_eq!(normalize_name(raw, true), expect);
    }

    #[test]
    fn normalize_name_keeps_non_latin_without_transliteration() {
        assert_eq!(normalize_name("头骨_v001", false), "头骨");
    }

    #[test_case("Sc010_Shot0100"; "token pair")]
    #[test_case("Asset-A"; "hyphenated")]
    #[test_case("Heart_Valves"; "plain pair")]
    #[test]
    fn normalize_name_idempotent(name: &str) {
        let once = normalize_name(name, false);
        assert_eq!(normalize_name(&once, false), once);
    }

    #[test]
    fn version_forms() {
        assert!(is_version("v001"));
        assert!(is_version("1.2.3"));
        assert!(is_version("v4.2.0"));
        assert!(is_version(">=0.2.0"));
        assert!(is_version(">3.6.5"));
        assert!(!is_version("Sc010"));
    }

    #[test]
    fn email_and_url_forms() {
        assert!(is_email("manan001@example.com"));
        assert!(!is_email("not-an-email"));
        assert!(is_url("https://www.omoolab.xyz"));
        assert!(!is_url("ftp://old.school"));
    }
}
