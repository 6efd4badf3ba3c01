//! i18n-slug-router
//!
//! Locale-aware slug translation and routing resolution for a multilingual
//! site. Maps canonical (English) route segments to per-locale translated
//! slugs and back, detects the active locale in a request path, negotiates
//! a first-visit locale from `Accept-Language`, and builds localized paths
//! for navigation links and `hreflang` alternates.
//!
//! Every operation is total: unknown locales fall back to the default and
//! unknown segments pass through unchanged, so a routing miss degrades to a
//! literal URL instead of an error page.

pub mod locale;
pub mod negotiate;
pub mod router;
pub mod table;

pub use locale::Locale;
pub use router::{
    AlternateLink,
    LocaleRouter,
};
pub use table::{
    SlugTable,
    TableError,
};
