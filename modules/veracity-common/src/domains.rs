//! Static trust registries shared by source scoring and search-result
//! verification.

/// Domains whose articles are treated as credible by default.
pub const TRUSTED_DOMAINS: &[&str] = &[
    "bbc.com",
    "reuters.com",
    "thehindu.com",
    "timesofindia.indiatimes.com",
    "ndtv.com",
    "indianexpress.com",
    "hindustantimes.com",
    "pib.gov.in",
];

/// Outlet display names (lower-case) matched against search-result sources.
pub const TRUSTED_SOURCES: &[&str] = &[
    "bbc",
    "reuters",
    "ndtv",
    "the hindu",
    "times of india",
    "indian express",
    "hindustan times",
    "press information bureau",
];

/// Known satire publishers.
pub const SATIRE_DOMAINS: &[&str] = &["theonion.com", "worldnewsdailyreport.com"];

/// True when `haystack` contains any entry of `needles` as a substring.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Lower-cased host of a URL. Scheme-less input ("bbc.com/news/x") is read
/// as if it were `http://`. Returns `None` when no host can be found.
pub fn extract_host(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let parsed = match url::Url::parse(raw) {
        Ok(u) => u,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            url::Url::parse(&format!("http://{raw}")).ok()?
        }
        Err(_) => return None,
    };

    parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .map(|h| h.to_lowercase())
}
