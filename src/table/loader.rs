//! Loading a slug table from its JSON dictionary form.

use std::collections::HashMap;
use std::path::Path;

use crate::locale::Locale;

use super::{
    SlugTable,
    TableError,
};

/// Raw JSON shape: locale tag -> canonical key -> localized segment, e.g.
/// `{ "fr": { "about": "a-propos" } }`.
type RawTable = HashMap<Locale, HashMap<String, String>>;

/// Loads and validates a slug table from a JSON file.
///
/// # Errors
/// - file read error
/// - JSON parse error (including unknown locale tags)
/// - slug collision within a locale
pub fn load_from_path(path: &Path) -> Result<SlugTable, TableError> {
    tracing::debug!("Loading slug table from: {:?}", path);

    let content = std::fs::read_to_string(path)?;
    from_json_str(&content)
}

/// Parses and validates a slug table from a JSON string.
///
/// # Errors
/// - JSON parse error (including unknown locale tags)
/// - slug collision within a locale
pub fn from_json_str(json: &str) -> Result<SlugTable, TableError> {
    let raw: RawTable = serde_json::from_str(json)?;

    SlugTable::from_entries(
        raw.into_iter()
            .flat_map(|(locale, slugs)| slugs.into_iter().map(move |(key, segment)| (locale, key, segment))),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    fn test_from_json_str_valid() {
        let json = r#"{"fr": {"about": "a-propos", "blog": "blogue"}, "de": {"about": "ueber-uns"}}"#;

        let table = from_json_str(json).unwrap();

        assert_that!(table.localize("about", Locale::Fr), eq("a-propos"));
        assert_that!(table.localize("about", Locale::De), eq("ueber-uns"));
        assert_that!(table.canonicalize("blogue", Locale::Fr), eq("blog"));
    }

    #[rstest]
    fn test_from_json_str_collision() {
        let json = r#"{"fr": {"careers": "carrieres", "jobs": "carrieres"}}"#;

        let result = from_json_str(json);

        assert_that!(result, err(matches_pattern!(TableError::Collision { .. })));
    }

    #[rstest]
    #[case::invalid_json("not json")]
    #[case::unknown_locale(r#"{"pt": {"about": "sobre"}}"#)]
    fn test_from_json_str_parse_error(#[case] json: &str) {
        let result = from_json_str(json);

        assert_that!(result, err(matches_pattern!(TableError::Parse(_))));
    }

    #[rstest]
    fn test_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("slugs.json");
        fs::write(&path, r#"{"es": {"cities": "ciudades"}}"#).unwrap();

        let table = load_from_path(&path).unwrap();

        assert_that!(table.localize("cities", Locale::Es), eq("ciudades"));
    }

    #[rstest]
    fn test_load_from_path_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_from_path(&temp_dir.path().join("missing.json"));

        assert_that!(result, err(matches_pattern!(TableError::Io(_))));
    }
}
