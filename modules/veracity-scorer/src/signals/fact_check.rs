//! Lexical fact-check heuristic.
//!
//! Attribution phrasing ("ministry said") nudges the score up, anonymous or
//! viral sourcing ("sources said", "whatsapp forward") pulls it down. Each
//! phrase counts once no matter how often it appears.

use serde::Serialize;

pub const FACT_BASELINE: f64 = 0.5;

const POSITIVE: f64 = 0.10;
const NEGATIVE: f64 = -0.15;
const SWEEPING_CLAIM: f64 = -0.10;

/// Ordered phrase table. Phrases are lower-case; matching is substring
/// containment on the lower-cased text.
pub const FACT_SIGNALS: &[(&str, f64)] = &[
    // Official attribution
    ("official gazette", POSITIVE),
    ("press release", POSITIVE),
    ("ministry said", POSITIVE),
    ("spokesperson said", POSITIVE),
    ("government statement", POSITIVE),
    ("according to data", POSITIVE),
    // Unverified or anonymous sourcing
    ("sources said", NEGATIVE),
    ("reports claim", NEGATIVE),
    ("insiders revealed", NEGATIVE),
    ("viral message", NEGATIVE),
    ("whatsapp forward", NEGATIVE),
    ("no official gazette", NEGATIVE),
    ("not yet clarified", NEGATIVE),
    ("not yet published", NEGATIVE),
    ("sources indicated", NEGATIVE),
    ("reportedly", NEGATIVE),
    ("closed-door meeting", NEGATIVE),
    // Broad policy announcements with immediate effect
    ("nationwide policy", SWEEPING_CLAIM),
    ("effective immediately", SWEEPING_CLAIM),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactCheck {
    pub score: f64,
    /// Phrases that fired, in table order.
    pub matched: Vec<&'static str>,
}

pub fn fact_check(text: &str) -> FactCheck {
    let lowered = text.to_lowercase();

    let mut score = FACT_BASELINE;
    let mut matched = Vec::new();
    for &(phrase, weight) in FACT_SIGNALS {
        if lowered.contains(phrase) {
            score += weight;
            matched.push(phrase);
        }
    }

    FactCheck {
        score: score.clamp(0.0, 1.0),
        matched,
    }
}

pub fn fact_score(text: &str) -> f64 {
    fact_check(text).score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn neutral_text_keeps_baseline() {
        assert!(approx(fact_score("The weather was mild today."), 0.5));
    }

    #[test]
    fn official_attribution_raises_score() {
        let text = "Published in the Official Gazette, the Ministry said the rule applies.";
        assert!(approx(fact_score(text), 0.7));
    }

    #[test]
    fn anonymous_sourcing_lowers_score() {
        let text = "Sources said the minister will resign, and reportedly a deal is near.";
        assert!(approx(fact_score(text), 0.2));
    }

    #[test]
    fn sweeping_claims_each_cost_a_tenth() {
        let text = "A nationwide policy takes hold, effective immediately.";
        assert!(approx(fact_score(text), 0.3));
    }

    #[test]
    fn repeated_phrase_counts_once() {
        let text = "press release. press release. press release.";
        assert!(approx(fact_score(text), 0.6));
    }

    #[test]
    fn negated_gazette_fires_both_phrases() {
        let check = fact_check("There is no official gazette notification yet.");
        assert_eq!(check.matched, vec!["official gazette", "no official gazette"]);
        assert!(approx(check.score, 0.45));
    }

    #[test]
    fn score_is_clamped_with_every_negative_phrase() {
        let text: String = FACT_SIGNALS
            .iter()
            .filter(|(_, w)| *w < 0.0)
            .map(|(p, _)| format!("{p} {p} "))
            .collect();
        assert_eq!(fact_score(&text), 0.0);
    }

    #[test]
    fn score_is_clamped_with_every_phrase() {
        let text: String = FACT_SIGNALS.iter().map(|(p, _)| format!("{p}. ")).collect();
        let score = fact_score(&text.repeat(20));
        assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn positive_phrases_alone_cap_at_one() {
        let text: String = FACT_SIGNALS
            .iter()
            .filter(|(_, w)| *w > 0.0)
            .map(|(p, _)| format!("{p}. "))
            .collect();
        assert_eq!(fact_score(&text), 1.0);
    }
}
