//! Production slug data for all marketing routes.
//!
//! The English column doubles as the canonical key, so its entries are
//! identities. Segments that a locale leaves untranslated (`faq`, German
//! `outdoor-farm`, ...) are still listed explicitly so the table is the
//! single source of truth for which routes exist.

use crate::locale::Locale;

/// `(locale, canonical key, localized segment)` for every supported route.
pub(super) const ENTRIES: &[(Locale, &str, &str)] = &[
    // English (canonical)
    (Locale::En, "about", "about"),
    (Locale::En, "cities", "cities"),
    (Locale::En, "careers", "careers"),
    (Locale::En, "partnerships", "partnerships"),
    (Locale::En, "community-engagement", "community-engagement"),
    (Locale::En, "outdoor-farm", "outdoor-farm"),
    (Locale::En, "indoor-farm", "indoor-farm"),
    (Locale::En, "educational-activities", "educational-activities"),
    (Locale::En, "contact", "contact"),
    (Locale::En, "faq", "faq"),
    (Locale::En, "blog", "blog"),
    (Locale::En, "commercial-real-estate", "commercial-real-estate"),
    (Locale::En, "corporations", "corporations"),
    (Locale::En, "schools", "schools"),
    (Locale::En, "privacy-policy", "privacy-policy"),
    (Locale::En, "terms-of-service", "terms-of-service"),
    (Locale::En, "cookie-policy", "cookie-policy"),
    (Locale::En, "roi-calculator", "roi-calculator"),
    // French
    (Locale::Fr, "about", "a-propos"),
    (Locale::Fr, "cities", "villes"),
    (Locale::Fr, "careers", "carrieres"),
    (Locale::Fr, "partnerships", "partenariats"),
    (Locale::Fr, "community-engagement", "engagement-communautaire"),
    (Locale::Fr, "outdoor-farm", "ferme-exterieure"),
    (Locale::Fr, "indoor-farm", "ferme-interieure"),
    (Locale::Fr, "educational-activities", "activites-educatives"),
    (Locale::Fr, "contact", "contact"),
    (Locale::Fr, "faq", "faq"),
    (Locale::Fr, "blog", "blogue"),
    (Locale::Fr, "commercial-real-estate", "immobilier-commercial"),
    (Locale::Fr, "corporations", "entreprises"),
    (Locale::Fr, "schools", "ecoles"),
    (Locale::Fr, "privacy-policy", "politique-confidentialite"),
    (Locale::Fr, "terms-of-service", "conditions-utilisation"),
    (Locale::Fr, "cookie-policy", "politique-cookies"),
    (Locale::Fr, "roi-calculator", "calculateur-roi"),
    // German
    (Locale::De, "about", "ueber-uns"),
    (Locale::De, "cities", "staedte"),
    (Locale::De, "careers", "karriere"),
    (Locale::De, "partnerships", "partnerschaften"),
    (Locale::De, "community-engagement", "gemeinschaftliches-engagement"),
    (Locale::De, "outdoor-farm", "outdoor-farm"),
    (Locale::De, "indoor-farm", "indoor-farm"),
    (Locale::De, "educational-activities", "bildungsaktivitaeten"),
    (Locale::De, "contact", "kontakt"),
    (Locale::De, "faq", "faq"),
    (Locale::De, "blog", "blog"),
    (Locale::De, "commercial-real-estate", "gewerbeimmobilien"),
    (Locale::De, "corporations", "unternehmen"),
    (Locale::De, "schools", "schulen"),
    (Locale::De, "privacy-policy", "datenschutz"),
    (Locale::De, "terms-of-service", "nutzungsbedingungen"),
    (Locale::De, "cookie-policy", "cookie-richtlinie"),
    (Locale::De, "roi-calculator", "roi-rechner"),
    // Dutch
    (Locale::Nl, "about", "over-ons"),
    (Locale::Nl, "cities", "steden"),
    (Locale::Nl, "careers", "carriere"),
    (Locale::Nl, "partnerships", "partnerschappen"),
    (Locale::Nl, "community-engagement", "community-betrokkenheid"),
    (Locale::Nl, "outdoor-farm", "outdoor-boerderij"),
    (Locale::Nl, "indoor-farm", "indoor-boerderij"),
    (Locale::Nl, "educational-activities", "educatieve-activiteiten"),
    (Locale::Nl, "contact", "contact"),
    (Locale::Nl, "faq", "faq"),
    (Locale::Nl, "blog", "blog"),
    (Locale::Nl, "commercial-real-estate", "commercieel-vastgoed"),
    (Locale::Nl, "corporations", "bedrijven"),
    (Locale::Nl, "schools", "scholen"),
    (Locale::Nl, "privacy-policy", "privacybeleid"),
    (Locale::Nl, "terms-of-service", "algemene-voorwaarden"),
    (Locale::Nl, "cookie-policy", "cookiebeleid"),
    (Locale::Nl, "roi-calculator", "roi-calculator"),
    // Italian
    (Locale::It, "about", "chi-siamo"),
    (Locale::It, "cities", "citta"),
    (Locale::It, "careers", "carriere"),
    (Locale::It, "partnerships", "partnership"),
    (Locale::It, "community-engagement", "impegno-comunitario"),
    (Locale::It, "outdoor-farm", "fattoria-esterna"),
    (Locale::It, "indoor-farm", "fattoria-interna"),
    (Locale::It, "educational-activities", "attivita-educative"),
    (Locale::It, "contact", "contatto"),
    (Locale::It, "faq", "faq"),
    (Locale::It, "blog", "blog"),
    (Locale::It, "commercial-real-estate", "immobiliare-commerciale"),
    (Locale::It, "corporations", "aziende"),
    (Locale::It, "schools", "scuole"),
    (Locale::It, "privacy-policy", "informativa-privacy"),
    (Locale::It, "terms-of-service", "termini-servizio"),
    (Locale::It, "cookie-policy", "politica-cookie"),
    (Locale::It, "roi-calculator", "calcolatore-roi"),
    // Spanish
    (Locale::Es, "about", "sobre-nosotros"),
    (Locale::Es, "cities", "ciudades"),
    (Locale::Es, "careers", "carreras"),
    (Locale::Es, "partnerships", "colaboraciones"),
    (Locale::Es, "community-engagement", "participacion-comunitaria"),
    (Locale::Es, "outdoor-farm", "granja-exterior"),
    (Locale::Es, "indoor-farm", "granja-interior"),
    (Locale::Es, "educational-activities", "actividades-educativas"),
    (Locale::Es, "contact", "contacto"),
    (Locale::Es, "faq", "faq"),
    (Locale::Es, "blog", "blog"),
    (Locale::Es, "commercial-real-estate", "inmobiliaria-comercial"),
    (Locale::Es, "corporations", "empresas"),
    (Locale::Es, "schools", "escuelas"),
    (Locale::Es, "privacy-policy", "politica-privacidad"),
    (Locale::Es, "terms-of-service", "terminos-servicio"),
    (Locale::Es, "cookie-policy", "politica-cookies"),
    (Locale::Es, "roi-calculator", "calculadora-roi"),
];
