use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Bands ---

/// Final scores at or above this are classified TRUE.
pub const TRUE_THRESHOLD: f64 = 0.65;

/// Final scores at or above this (and below [`TRUE_THRESHOLD`]) are UNCERTAIN.
pub const UNCERTAIN_THRESHOLD: f64 = 0.45;

/// Neutral value used whenever a signal cannot be computed.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Clamp a score into [0, 1]. NaN collapses to 0.
pub fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Classification {
    True,
    Uncertain,
    Fake,
}

impl Classification {
    pub const ALL: [Classification; 3] = [
        Classification::True,
        Classification::Uncertain,
        Classification::Fake,
    ];

    /// Half-open bands: `[0.65, 1] TRUE`, `[0.45, 0.65) UNCERTAIN`, `[0, 0.45) FAKE`.
    pub fn from_score(score: f64) -> Self {
        if score >= TRUE_THRESHOLD {
            Classification::True
        } else if score >= UNCERTAIN_THRESHOLD {
            Classification::Uncertain
        } else {
            Classification::Fake
        }
    }

    /// Human-facing verdict line.
    pub fn verdict(&self) -> &'static str {
        match self {
            Classification::True => "Classified as TRUE / CREDIBLE",
            Classification::Uncertain => "Classified as UNCERTAIN / NEEDS VERIFICATION",
            Classification::Fake => "Classified as FAKE / LOW CREDIBILITY",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::True => write!(f, "TRUE"),
            Classification::Uncertain => write!(f, "UNCERTAIN"),
            Classification::Fake => write!(f, "FAKE"),
        }
    }
}

// --- Input ---

/// Article as submitted: a URL to retrieve, pasted text, or both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleInput {
    pub url: Option<String>,
    pub text: Option<String>,
}

impl ArticleInput {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            text: None,
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            url: None,
            text: Some(text.into()),
        }
    }

    /// The URL, if one was supplied and is not blank.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }

    /// Pasted text trimmed, if not blank.
    pub fn pasted_text(&self) -> Option<&str> {
        self.text.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

/// Article ready for scoring. `text` is never empty.
#[derive(Debug, Clone)]
pub struct Article {
    pub url: Option<String>,
    pub text: String,
}

// --- Signals ---

/// Source trust signal. `Absent` means no URL was supplied, which selects the
/// alternate fusion weights rather than standing in for a number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum SourceScore {
    Present(f64),
    Absent,
}

impl SourceScore {
    pub fn value(&self) -> Option<f64> {
        match self {
            SourceScore::Present(v) => Some(*v),
            SourceScore::Absent => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, SourceScore::Present(_))
    }
}

impl From<Option<f64>> for SourceScore {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => SourceScore::Present(clamp_unit(v)),
            None => SourceScore::Absent,
        }
    }
}

impl From<SourceScore> for Option<f64> {
    fn from(value: SourceScore) -> Self {
        value.value()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponents {
    pub ml_score: f64,
    pub source_score: SourceScore,
    pub fact_score: f64,
    pub realtime_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FusionResult {
    pub components: ScoreComponents,
    pub final_score: f64,
    pub classification: Classification,
}

// --- History ---

/// One completed analysis as kept in a session's history. Classification is
/// derived from `final_score` on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub ml_score: f64,
    pub fact_score: f64,
    pub realtime_score: f64,
    pub final_score: f64,
    pub recorded_at: DateTime<Utc>,
}

impl AnalysisRecord {
    pub fn from_result(result: &FusionResult) -> Self {
        Self {
            ml_score: result.components.ml_score,
            fact_score: result.components.fact_score,
            realtime_score: result.components.realtime_score,
            final_score: result.final_score,
            recorded_at: Utc::now(),
        }
    }

    pub fn classification(&self) -> Classification {
        Classification::from_score(self.final_score)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total: usize,
    pub average_final_score: f64,
    pub true_count: usize,
    pub uncertain_count: usize,
    pub fake_count: usize,
    /// Final scores in analysis order, for trend display.
    pub final_scores: Vec<f64>,
}

impl AnalyticsSummary {
    pub fn count(&self, band: Classification) -> usize {
        match band {
            Classification::True => self.true_count,
            Classification::Uncertain => self.uncertain_count,
            Classification::Fake => self.fake_count,
        }
    }

    /// Non-zero bands in TRUE, UNCERTAIN, FAKE order.
    pub fn distribution(&self) -> Vec<(Classification, usize)> {
        Classification::ALL
            .iter()
            .map(|&band| (band, self.count(band)))
            .filter(|(_, n)| *n > 0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_partition_unit_interval() {
        assert_eq!(Classification::from_score(0.449), Classification::Fake);
        assert_eq!(Classification::from_score(0.45), Classification::Uncertain);
        assert_eq!(Classification::from_score(0.649), Classification::Uncertain);
        assert_eq!(Classification::from_score(0.65), Classification::True);
        assert_eq!(Classification::from_score(0.0), Classification::Fake);
        assert_eq!(Classification::from_score(1.0), Classification::True);
    }

    #[test]
    fn classification_serializes_uppercase() {
        let json = serde_json::to_string(&Classification::Uncertain).unwrap();
        assert_eq!(json, "\"UNCERTAIN\"");
    }

    #[test]
    fn absent_source_serializes_as_null() {
        let c = ScoreComponents {
            ml_score: 0.9,
            source_score: SourceScore::Absent,
            fact_score: 0.2,
            realtime_score: 0.5,
        };
        let v = serde_json::to_value(c).unwrap();
        assert!(v["source_score"].is_null());

        let back: ScoreComponents = serde_json::from_value(v).unwrap();
        assert_eq!(back.source_score, SourceScore::Absent);
    }

    #[test]
    fn clamp_unit_handles_nan_and_overflow() {
        assert_eq!(clamp_unit(f64::NAN), 0.0);
        assert_eq!(clamp_unit(1.7), 1.0);
        assert_eq!(clamp_unit(-0.2), 0.0);
    }

    #[test]
    fn blank_input_fields_are_ignored() {
        let input = ArticleInput {
            url: Some("   ".into()),
            text: Some("  body  ".into()),
        };
        assert_eq!(input.url(), None);
        assert_eq!(input.pasted_text(), Some("body"));
    }

    #[test]
    fn distribution_omits_empty_bands() {
        let summary = AnalyticsSummary {
            total: 3,
            average_final_score: 0.5,
            true_count: 2,
            uncertain_count: 0,
            fake_count: 1,
            final_scores: vec![0.7, 0.8, 0.1],
        };
        assert_eq!(
            summary.distribution(),
            vec![(Classification::True, 2), (Classification::Fake, 1)]
        );
    }
}
