//! `Accept-Language` negotiation for first-visit locale selection.

use crate::locale::Locale;

/// Picks the best supported locale from an `Accept-Language` header value.
///
/// Entries are ranked by quality, highest first; ties keep header order.
/// Region subtags are ignored, so `fr-CA` matches `fr`. A missing header,
/// an unparseable header, or one that names no supported language falls
/// back to the default locale. Malformed quality values count as `q=1`;
/// an explicit `q=0` keeps its weight and ranks last rather than being
/// excluded, so the language can still win when nothing else matches.
#[must_use]
pub fn preferred_locale(accept_language: Option<&str>) -> Locale {
    let Some(header) = accept_language else {
        return Locale::default();
    };

    let mut ranges: Vec<(String, f32)> = header
        .split(',')
        .filter_map(parse_language_range)
        .collect();
    ranges.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranges
        .iter()
        .find_map(|(language, _)| Locale::parse(language))
        .unwrap_or_default()
}

/// Parses one `language[;q=weight]` entry into a lowercased primary subtag
/// and its quality. Empty entries are skipped.
fn parse_language_range(entry: &str) -> Option<(String, f32)> {
    let mut parts = entry.trim().split(';');

    let tag = parts.next()?.trim();
    if tag.is_empty() {
        return None;
    }
    let primary = tag.split('-').next().unwrap_or(tag).to_ascii_lowercase();

    let quality = parts
        .find_map(|param| param.trim().strip_prefix("q="))
        .and_then(|weight| weight.parse::<f32>().ok())
        .unwrap_or(1.0);

    Some((primary, quality))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::missing_header(None, Locale::En)]
    #[case::empty_header(Some(""), Locale::En)]
    #[case::single(Some("fr"), Locale::Fr)]
    #[case::region_subtag(Some("fr-CA"), Locale::Fr)]
    #[case::uppercase_tag(Some("DE-de"), Locale::De)]
    #[case::quality_order(Some("de;q=0.7,fr;q=0.9"), Locale::Fr)]
    #[case::unquoted_first_wins(Some("nl,fr;q=0.9"), Locale::Nl)]
    #[case::unsupported_skipped(Some("pt-BR,es;q=0.8"), Locale::Es)]
    #[case::nothing_supported(Some("pt,ja;q=0.5"), Locale::En)]
    #[case::malformed_quality(Some("it;q=abc,de;q=0.5"), Locale::It)]
    #[case::explicit_zero_ranks_last(Some("fr;q=0,de;q=0.5"), Locale::De)]
    #[case::explicit_zero_still_eligible_alone(Some("fr;q=0"), Locale::Fr)]
    #[case::wildcard_ignored(Some("*;q=0.9,fr;q=0.8"), Locale::Fr)]
    #[case::whitespace(Some(" fr ; q=0.8 , de ; q=0.9 "), Locale::De)]
    fn test_preferred_locale(#[case] header: Option<&str>, #[case] expected: Locale) {
        assert_that!(preferred_locale(header), eq(expected));
    }

    #[rstest]
    fn equal_quality_keeps_header_order() {
        assert_that!(preferred_locale(Some("it;q=0.8,es;q=0.8")), eq(Locale::It));
        assert_that!(preferred_locale(Some("es;q=0.8,it;q=0.8")), eq(Locale::Es));
    }
}
