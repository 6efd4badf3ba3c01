//! Path <-> locale transformations.
//!
//! Pure functions over an injected [`SlugTable`]; no global state and no
//! I/O. The page router hands in a raw path and gets back a resolved locale
//! or a reassembled path for navigation.

use serde::Serialize;

use crate::locale::Locale;
use crate::table::SlugTable;

/// An `hreflang` alternate link for one supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternateLink {
    /// `hreflang` attribute value (`x-default` for the default locale).
    pub href_lang: String,
    /// Fully qualified localized path.
    pub href: String,
}

/// Detects locales in request paths and translates paths between locales,
/// preserving route identity.
#[derive(Debug, Clone, Copy)]
pub struct LocaleRouter<'t> {
    /// Injected slug mapping; shared, read-only.
    table: &'t SlugTable,
}

impl<'t> LocaleRouter<'t> {
    /// Creates a router over the given table.
    #[must_use]
    pub const fn new(table: &'t SlugTable) -> Self {
        Self { table }
    }

    /// Non-empty segments of a path, in order.
    fn segments(path: &str) -> impl Iterator<Item = &str> {
        path.split('/').filter(|segment| !segment.is_empty())
    }

    /// Whether a path segment is a locale prefix. The default locale is
    /// never a prefix, so its tag is treated as an ordinary segment.
    fn prefix_locale(segment: &str) -> Option<Locale> {
        Locale::parse(segment).filter(|locale| !locale.is_default())
    }

    /// Determines the active locale from a path's leading segment.
    ///
    /// `/`, the empty path, and paths starting with anything other than a
    /// non-default locale tag resolve to the default locale.
    #[must_use]
    pub fn detect_locale(&self, path: &str) -> Locale {
        Self::segments(path).next().and_then(Self::prefix_locale).unwrap_or_default()
    }

    /// Strips any leading locale prefix and canonicalizes the remaining
    /// segments against `current`.
    ///
    /// Unknown segments pass through unchanged, so dynamic routes (blog
    /// post slugs, city names) survive the round trip.
    #[must_use]
    pub fn to_canonical_segments(&self, path: &str, current: Locale) -> Vec<String> {
        let mut segments = Self::segments(path).peekable();
        if let Some(first) = segments.peek()
            && Self::prefix_locale(first).is_some()
        {
            segments.next();
        }
        segments.map(|segment| self.table.canonicalize(segment, current).to_string()).collect()
    }

    /// Localizes canonical segments for `target` and reassembles the path.
    ///
    /// The default locale carries no prefix. An empty segment list yields
    /// `/` for the default locale and `/{tag}` otherwise; produced paths
    /// never end in a trailing slash.
    #[must_use]
    pub fn to_localized_path<I, S>(&self, segments: I, target: Locale) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut path = String::new();
        if !target.is_default() {
            path.push('/');
            path.push_str(target.as_str());
        }
        for segment in segments {
            path.push('/');
            path.push_str(self.table.localize(segment.as_ref(), target));
        }
        if path.is_empty() {
            path.push('/');
        }
        path
    }

    /// Builds the locale-aware form of a canonical path, for link `href`s.
    #[must_use]
    pub fn localize_path(&self, canonical_path: &str, target: Locale) -> String {
        self.to_localized_path(Self::segments(canonical_path), target)
    }

    /// Re-expresses a path in another locale.
    ///
    /// The full round trip behind the language switcher: the path is
    /// de-localized against `current`, then localized for `target`, so the
    /// French About page lands on the German About page, never the
    /// homepage. Switching a locale to itself returns the normalized path.
    #[must_use]
    pub fn switch_locale(&self, path: &str, current: Locale, target: Locale) -> String {
        let canonical = self.to_canonical_segments(path, current);
        self.to_localized_path(&canonical, target)
    }

    /// `hreflang` alternates of a path for every supported locale.
    ///
    /// The default locale is published as `x-default`, matching how search
    /// engines expect an unprefixed canonical URL to be declared.
    #[must_use]
    pub fn alternate_links(&self, path: &str, current: Locale) -> Vec<AlternateLink> {
        let canonical = self.to_canonical_segments(path, current);

        Locale::ALL
            .iter()
            .map(|&locale| AlternateLink {
                href_lang: if locale.is_default() {
                    "x-default".to_string()
                } else {
                    locale.as_str().to_string()
                },
                href: self.to_localized_path(&canonical, locale),
            })
            .collect()
    }

    /// Internal rewrite target for an incoming request path.
    ///
    /// Locale-prefixed paths with localized slugs are rewritten to the
    /// prefixed canonical route; unprefixed paths gain the default-locale
    /// prefix so downstream handlers always see `/{locale}/...`. Returns
    /// `None` when the path already names the prefixed canonical route.
    #[must_use]
    pub fn rewrite_target(&self, path: &str) -> Option<String> {
        let locale = self.detect_locale(path);

        let target = if locale.is_default() {
            let mut target = String::from("/");
            target.push_str(locale.as_str());
            for segment in Self::segments(path) {
                target.push('/');
                target.push_str(segment);
            }
            target
        } else {
            let mut target = String::from("/");
            target.push_str(locale.as_str());
            for segment in Self::segments(path).skip(1) {
                target.push('/');
                target.push_str(self.table.canonicalize(segment, locale));
            }
            if target == path {
                return None;
            }
            target
        };

        tracing::debug!(path, %target, "rewriting request path");
        Some(target)
    }
}
