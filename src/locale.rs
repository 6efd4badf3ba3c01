//! Supported locales and their metadata.

use serde::{
    Deserialize,
    Serialize,
};

/// A supported display language for the site.
///
/// `En` is the canonical locale: its route segments are the canonical slugs
/// and it never appears as a URL prefix. Every other locale is addressed via
/// a leading path segment (`/fr/...`, `/de/...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (default, canonical).
    #[default]
    En,
    /// French.
    Fr,
    /// German.
    De,
    /// Dutch.
    Nl,
    /// Italian.
    It,
    /// Spanish.
    Es,
}

impl Locale {
    /// All supported locales, default first.
    pub const ALL: [Self; 6] = [Self::En, Self::Fr, Self::De, Self::Nl, Self::It, Self::Es];

    /// The URL/query tag for this locale.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::De => "de",
            Self::Nl => "nl",
            Self::It => "it",
            Self::Es => "es",
        }
    }

    /// Parses an exact locale tag.
    ///
    /// Unknown tags are `None`, never an error; callers fall back to the
    /// default locale.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|locale| locale.as_str() == tag)
    }

    /// Whether this is the default (unprefixed) locale.
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::En)
    }

    /// Human-readable name, used by the language switcher.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
            Self::De => "Deutsch",
            Self::Nl => "Nederlands",
            Self::It => "Italiano",
            Self::Es => "Español",
        }
    }

    /// OpenGraph `og:locale` code.
    #[must_use]
    pub const fn og_code(self) -> &'static str {
        match self {
            Self::En => "en_CA",
            Self::Fr => "fr_CA",
            Self::De => "de_DE",
            Self::Nl => "nl_NL",
            Self::It => "it_IT",
            Self::Es => "es_ES",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::en("en", Some(Locale::En))]
    #[case::fr("fr", Some(Locale::Fr))]
    #[case::de("de", Some(Locale::De))]
    #[case::nl("nl", Some(Locale::Nl))]
    #[case::it("it", Some(Locale::It))]
    #[case::es("es", Some(Locale::Es))]
    #[case::unknown("pt", None)]
    #[case::uppercase("FR", None)]
    #[case::region_subtag("fr-CA", None)]
    #[case::empty("", None)]
    fn test_parse(#[case] tag: &str, #[case] expected: Option<Locale>) {
        assert_that!(Locale::parse(tag), eq(expected));
    }

    #[rstest]
    fn parse_round_trips_every_tag() {
        for locale in Locale::ALL {
            assert_that!(Locale::parse(locale.as_str()), some(eq(locale)));
        }
    }

    #[rstest]
    fn only_en_is_default() {
        assert_that!(Locale::default(), eq(Locale::En));

        let defaults: Vec<Locale> =
            Locale::ALL.iter().copied().filter(|locale| locale.is_default()).collect();
        assert_that!(defaults, elements_are![eq(&Locale::En)]);
    }

    #[rstest]
    fn serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&Locale::Fr).unwrap();
        assert_that!(json, eq("\"fr\""));

        let locale: Locale = serde_json::from_str("\"nl\"").unwrap();
        assert_that!(locale, eq(Locale::Nl));
    }
}
