//! The read-only SPDX license/exception catalog.
//!
//! The raw tables live in [`crate::identifiers`] (auto-generated from the SPDX license-list-data
//! release). This module wraps them in a small, zero-sized [`Catalog`] that performs
//! case-insensitive lookups and resolves deprecated identifiers to their current successor, so
//! the rest of the engine never touches the raw tables directly.

use crate::identifiers::{self, IS_DEPRECATED};

/// A single catalog entry for a license identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct License {
    /// The canonical-cased short identifier, e.g. `"GPL-2.0-only"`
    pub id: &'static str,
    /// The full human-readable license name
    pub full_name: &'static str,
    /// Whether this identifier is retained only for backwards compatibility
    pub deprecated: bool,
}

/// A single catalog entry for an exception identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exception {
    /// The canonical-cased short identifier, e.g. `"Classpath-exception-2.0"`
    pub id: &'static str,
    /// Whether this identifier is retained only for backwards compatibility
    pub deprecated: bool,
}

/// Explicitly authored successors for the deprecated `<license>-with-<exception>` combined
/// identifiers that predate SPDX splitting licenses and exceptions into two lists.
///
/// `(deprecated id, successor license id, successor exception id)`
const COMBINED_SUCCESSORS: &[(&str, &str, &str)] = &[
    (
        "GPL-2.0-with-classpath-exception",
        "GPL-2.0-only",
        "Classpath-exception-2.0",
    ),
    (
        "GPL-2.0-with-autoconf-exception",
        "GPL-2.0-only",
        "Autoconf-exception-2.0",
    ),
    (
        "GPL-2.0-with-bison-exception",
        "GPL-2.0-only",
        "Bison-exception-2.2",
    ),
    (
        "GPL-2.0-with-font-exception",
        "GPL-2.0-only",
        "Font-exception-2.0",
    ),
    (
        "GPL-2.0-with-GCC-exception",
        "GPL-2.0-only",
        "GCC-exception-2.0",
    ),
    (
        "GPL-3.0-with-autoconf-exception",
        "GPL-3.0-only",
        "Autoconf-exception-3.0",
    ),
    (
        "GPL-3.0-with-GCC-exception",
        "GPL-3.0-only",
        "GCC-exception-3.1",
    ),
];

/// Explicitly authored successors for deprecated exception identifiers. Unlike licenses, almost
/// no exceptions have a mechanical renaming rule, so this table is the entire mapping.
const EXCEPTION_SUCCESSORS: &[(&str, &str)] = &[("Nokia-Qt-exception-1.1", "Qt-LGPL-exception-1.1")];

/// The GNU-family license prefixes whose bare, deprecated identifiers (`GPL-2.0`, `GPL-2.0+`, …)
/// follow the mechanical `-only`/`-or-later` renaming rule rather than needing a table entry.
const GNU_FAMILY_PREFIXES: &[&str] = &["AGPL-", "GPL-", "LGPL-", "GFDL-"];

/// A read-only view over the SPDX license and exception catalogs.
///
/// This is a plain, stateless struct rather than free functions over a process-global so that
/// callers (notably tests) can substitute a synthetic catalog that implements the same lookups.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    /// Looks up a license identifier, case-insensitively. Trailing `+` is not trimmed here —
    /// callers strip it before calling, since `+` is tracked separately on `LicenseId::or_later`.
    pub fn license(&self, id: &str) -> Option<License> {
        identifiers::LICENSES
            .iter()
            .find(|(name, _, _)| name.eq_ignore_ascii_case(id))
            .map(|&(name, full_name, flags)| License {
                id: name,
                full_name,
                deprecated: flags & IS_DEPRECATED != 0,
            })
    }

    /// Looks up an exception identifier, case-insensitively.
    pub fn exception(&self, id: &str) -> Option<Exception> {
        identifiers::EXCEPTIONS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(id))
            .map(|&(name, flags)| Exception {
                id: name,
                deprecated: flags & IS_DEPRECATED != 0,
            })
    }

    /// Resolves a deprecated license identifier to its current successor, if one is known.
    /// `or_later` indicates whether the original carried a trailing `+`.
    ///
    /// Returns `(successor_id, successor_or_later)`. Identifiers with no known successor (e.g.
    /// `eCos-2.0`, `Nunit`, `StandardML-NJ`, `wxWindows`) return `None`.
    pub fn license_successor(&self, id: &str, or_later: bool) -> Option<(String, bool)> {
        if let Some(prefix) = GNU_FAMILY_PREFIXES
            .iter()
            .find(|p| id.len() > p.len() && id[..p.len()].eq_ignore_ascii_case(p))
        {
            let canonical_prefix = &prefix[..prefix.len() - 1];
            let rest = &id[prefix.len()..];

            // Only the bare `<prefix>-<version>` form (no `-only`/`-or-later` already) is
            // deprecated; `rest` must be purely a version number here.
            if rest
                .chars()
                .all(|c| c.is_ascii_digit() || c == '.')
            {
                return if or_later {
                    Some((format!("{canonical_prefix}-{rest}-or-later"), false))
                } else {
                    Some((format!("{canonical_prefix}-{rest}-only"), false))
                };
            }
        }

        None
    }

    /// Resolves a deprecated combined `<license>-with-<exception>` identifier to its split
    /// license/exception successor pair.
    pub fn combined_successor(&self, id: &str) -> Option<(&'static str, &'static str)> {
        COMBINED_SUCCESSORS
            .iter()
            .find(|(name, _, _)| name.eq_ignore_ascii_case(id))
            .map(|&(_, lic, exc)| (lic, exc))
    }

    /// Resolves a deprecated exception identifier to its current successor, if one is known.
    pub fn exception_successor(&self, id: &str) -> Option<&'static str> {
        EXCEPTION_SUCCESSORS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(id))
            .map(|&(_, succ)| succ)
    }
}

/// The version of the SPDX license list this catalog was generated from
pub fn license_list_version() -> &'static str {
    identifiers::VERSION
}

#[cfg(test)]
mod test {
    use super::Catalog;

    #[test]
    fn looks_up_case_insensitively() {
        let cat = Catalog;
        assert_eq!(cat.license("mit").unwrap().id, "MIT");
        assert_eq!(cat.license("MIT").unwrap().id, "MIT");
        assert!(cat.license("not-a-license").is_none());
    }

    #[test]
    fn flags_deprecated() {
        let cat = Catalog;
        assert!(cat.license("GPL-2.0").unwrap().deprecated);
        assert!(!cat.license("GPL-2.0-only").unwrap().deprecated);
    }

    #[test]
    fn resolves_gnu_family_successors() {
        let cat = Catalog;
        assert_eq!(
            cat.license_successor("GPL-2.0", false),
            Some(("GPL-2.0-only".to_owned(), false))
        );
        assert_eq!(
            cat.license_successor("GPL-2.0", true),
            Some(("GPL-2.0-or-later".to_owned(), false))
        );
        assert_eq!(cat.license_successor("eCos-2.0", false), None);
    }

    #[test]
    fn resolves_combined_successor() {
        let cat = Catalog;
        assert_eq!(
            cat.combined_successor("GPL-2.0-with-classpath-exception"),
            Some(("GPL-2.0-only", "Classpath-exception-2.0"))
        );
    }
}
