//! The canonical <-> localized slug mapping.

mod builtin;
mod loader;

pub use loader::{
    from_json_str,
    load_from_path,
};

use std::collections::HashMap;

use thiserror::Error;

use crate::locale::Locale;

/// Errors raised while constructing or loading a slug table.
#[derive(Error, Debug)]
pub enum TableError {
    /// Two canonical keys translate to the same segment within one locale,
    /// which would make reverse resolution ambiguous.
    #[error("slug collision in '{locale}': '{first}' and '{second}' both map to '{segment}'")]
    Collision {
        /// Locale whose mapping is ambiguous.
        locale: Locale,
        /// The contested localized segment.
        segment: String,
        /// Canonical key already claiming the segment.
        first: String,
        /// Canonical key attempting to claim it again.
        second: String,
    },

    /// One canonical key is given two different segments within one locale;
    /// accepting the second would leave a stale reverse entry behind.
    #[error("conflicting redefinition in '{locale}': '{key}' maps to both '{first}' and '{second}'")]
    Redefinition {
        /// Locale whose mapping is contradictory.
        locale: Locale,
        /// The canonical key defined twice.
        key: String,
        /// Segment from the earlier definition.
        first: String,
        /// Segment from the conflicting definition.
        second: String,
    },

    /// Failed to read a table file from disk.
    #[error("failed to read slug table file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a table file as JSON.
    #[error("failed to parse slug table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Static per-locale mapping between canonical (English) route segments and
/// their translated forms.
///
/// Immutable after construction and freely shareable. Lookups never fail:
/// a pair with no explicit translation passes through unchanged in both
/// directions, so an unrecognized segment renders as-is instead of 404ing.
#[derive(Debug, Clone, Default)]
pub struct SlugTable {
    /// (locale, canonical key) -> localized segment.
    forward: HashMap<Locale, HashMap<String, String>>,
    /// (locale, localized segment) -> canonical key.
    reverse: HashMap<Locale, HashMap<String, String>>,
}

impl SlugTable {
    /// Builds a table from `(locale, canonical key, localized segment)`
    /// entries, validating that reverse resolution stays unambiguous.
    ///
    /// # Errors
    /// [`TableError::Collision`] when two canonical keys share a localized
    /// segment within one locale, [`TableError::Redefinition`] when one
    /// canonical key is given two different segments.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (Locale, K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::default();
        for (locale, key, segment) in entries {
            table.insert(locale, key.into(), segment.into())?;
        }
        Ok(table)
    }

    /// The production table used by the site (6 locales, all marketing
    /// routes). The entry data is fixed and collision-free, which the
    /// fixture tests assert.
    #[must_use]
    #[allow(clippy::expect_used, clippy::missing_panics_doc)]
    pub fn builtin() -> Self {
        Self::from_entries(builtin::ENTRIES.iter().copied())
            .expect("builtin slug entries are collision-free")
    }

    /// Inserts one entry, rejecting redefinitions and reverse-map
    /// collisions. Re-inserting an identical entry is a no-op.
    fn insert(&mut self, locale: Locale, key: String, segment: String) -> Result<(), TableError> {
        let forward = self.forward.entry(locale).or_default();
        if let Some(existing) = forward.get(&key)
            && *existing != segment
        {
            return Err(TableError::Redefinition {
                locale,
                key,
                first: existing.clone(),
                second: segment,
            });
        }

        let reverse = self.reverse.entry(locale).or_default();
        if let Some(existing) = reverse.get(&segment)
            && *existing != key
        {
            return Err(TableError::Collision {
                locale,
                segment,
                first: existing.clone(),
                second: key,
            });
        }
        reverse.insert(segment.clone(), key.clone());
        forward.insert(key, segment);
        Ok(())
    }

    /// Translates a canonical key into the locale's URL segment.
    ///
    /// Falls back to the key itself when the locale has no explicit
    /// translation. This is the degrade-gracefully policy, not an error.
    #[must_use]
    pub fn localize<'a>(&'a self, key: &'a str, locale: Locale) -> &'a str {
        self.forward
            .get(&locale)
            .and_then(|slugs| slugs.get(key))
            .map_or(key, String::as_str)
    }

    /// Reverse lookup: translates a localized URL segment back to its
    /// canonical key.
    ///
    /// Unknown segments are treated as already canonical and pass through
    /// unchanged.
    #[must_use]
    pub fn canonicalize<'a>(&'a self, segment: &'a str, locale: Locale) -> &'a str {
        self.reverse
            .get(&locale)
            .and_then(|slugs| slugs.get(segment))
            .map_or(segment, String::as_str)
    }

    /// Canonical keys with an explicit translation for the locale.
    pub fn keys(&self, locale: Locale) -> impl Iterator<Item = &str> {
        self.forward.get(&locale).into_iter().flatten().map(|(key, _)| key.as_str())
    }
}
