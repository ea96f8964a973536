use veracity_common::{contains_any, extract_host, SourceScore, SATIRE_DOMAINS, TRUSTED_DOMAINS};

pub const TRUSTED_SOURCE_SCORE: f64 = 1.0;
pub const SATIRE_SOURCE_SCORE: f64 = 0.0;
/// Unknown outlets are mildly penalized.
pub const UNKNOWN_SOURCE_SCORE: f64 = 0.4;

/// Static trust score for the article's host.
///
/// No URL means no signal (`Absent`). A URL whose host cannot be parsed is
/// still a supplied source and scores as unknown.
pub fn source_score(url: Option<&str>) -> SourceScore {
    let url = match url.map(str::trim).filter(|u| !u.is_empty()) {
        Some(u) => u,
        None => return SourceScore::Absent,
    };

    let host = extract_host(url).unwrap_or_default();

    if contains_any(&host, TRUSTED_DOMAINS) {
        SourceScore::Present(TRUSTED_SOURCE_SCORE)
    } else if contains_any(&host, SATIRE_DOMAINS) {
        SourceScore::Present(SATIRE_SOURCE_SCORE)
    } else {
        SourceScore::Present(UNKNOWN_SOURCE_SCORE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trusted_domain_scores_one() {
        assert_eq!(
            source_score(Some("https://www.bbc.com/news/x")),
            SourceScore::Present(1.0)
        );
    }

    #[test]
    fn satire_domain_scores_zero() {
        assert_eq!(
            source_score(Some("https://theonion.com/x")),
            SourceScore::Present(0.0)
        );
    }

    #[test]
    fn unknown_domain_is_mildly_penalized() {
        assert_eq!(
            source_score(Some("https://random-blog.example/x")),
            SourceScore::Present(0.4)
        );
    }

    #[test]
    fn no_url_is_absent() {
        assert_eq!(source_score(None), SourceScore::Absent);
        assert_eq!(source_score(Some("  ")), SourceScore::Absent);
    }

    #[test]
    fn host_match_ignores_case() {
        assert_eq!(
            source_score(Some("https://WWW.Reuters.COM/world")),
            SourceScore::Present(1.0)
        );
    }

    #[test]
    fn trusted_wins_over_satire() {
        // Host containing both registries' entries resolves as trusted.
        assert_eq!(
            source_score(Some("https://theonion.com.bbc.com/x")),
            SourceScore::Present(1.0)
        );
    }

    #[test]
    fn path_mentions_do_not_count() {
        assert_eq!(
            source_score(Some("https://random-blog.example/bbc.com")),
            SourceScore::Present(0.4)
        );
    }
}
