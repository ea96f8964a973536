//! Text signal model seam and a TF-IDF + logistic-regression implementation.
//!
//! The model is a fixed artifact exported from training elsewhere: a
//! vocabulary, IDF weights, one coefficient per vocabulary entry and an
//! intercept. Only inference lives here.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

use anyhow::Context;
use regex::Regex;
use serde::Deserialize;
use tracing::info;

use veracity_common::{clamp_unit, Result, VeracityError};

/// Maps article text to the classifier's positive-class probability.
pub trait TextSignalModel: Send + Sync {
    fn probability(&self, text: &str) -> f64;
    fn name(&self) -> &str;
}

/// Two or more word characters, as scikit-learn's default token pattern.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").unwrap());

#[derive(Debug, Clone, Deserialize)]
pub struct ModelArtifact {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default)]
    pub stop_words: Vec<String>,
}

fn default_lowercase() -> bool {
    true
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

pub struct TfidfLogisticModel {
    artifact: ModelArtifact,
    stop_words: HashSet<String>,
}

impl TfidfLogisticModel {
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        let dims = artifact.idf.len();
        if artifact.coefficients.len() != dims {
            return Err(VeracityError::Model(format!(
                "coefficient count {} does not match idf length {dims}",
                artifact.coefficients.len()
            )));
        }
        if let Some((term, idx)) = artifact.vocabulary.iter().find(|(_, i)| **i >= dims) {
            return Err(VeracityError::Model(format!(
                "vocabulary term {term:?} maps to index {idx}, beyond {dims} features"
            )));
        }
        let (lo, hi) = artifact.ngram_range;
        if lo == 0 || lo > hi {
            return Err(VeracityError::Model(format!(
                "invalid ngram_range ({lo}, {hi})"
            )));
        }

        let stop_words = artifact.stop_words.iter().cloned().collect();
        Ok(Self {
            artifact,
            stop_words,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let artifact: ModelArtifact = serde_json::from_str(json)
            .map_err(|e| VeracityError::Model(format!("invalid model artifact: {e}")))?;
        Self::from_artifact(artifact)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading model artifact {}", path.display()))?;
        let model = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            features = model.artifact.idf.len(),
            "Loaded text signal model"
        );
        Ok(model)
    }

    fn tokens(&self, text: &str) -> Vec<String> {
        let text = if self.artifact.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };
        TOKEN_RE
            .find_iter(&text)
            .map(|m| m.as_str().to_string())
            .filter(|t| !self.stop_words.contains(t))
            .collect()
    }

    /// L2-normalized TF-IDF features as sparse (index, value) pairs.
    fn features(&self, text: &str) -> Vec<(usize, f64)> {
        let tokens = self.tokens(text);
        let (lo, hi) = self.artifact.ngram_range;

        let mut counts: HashMap<usize, f64> = HashMap::new();
        for n in lo..=hi {
            for gram in tokens.windows(n) {
                let key = gram.join(" ");
                if let Some(&idx) = self.artifact.vocabulary.get(&key) {
                    *counts.entry(idx).or_default() += 1.0;
                }
            }
        }

        let mut weighted: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(idx, count)| {
                let tf = if self.artifact.sublinear_tf {
                    1.0 + count.ln()
                } else {
                    count
                };
                (idx, tf * self.artifact.idf[idx])
            })
            .collect();

        let norm = weighted.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, v) in weighted.iter_mut() {
                *v /= norm;
            }
        }
        weighted
    }
}

impl TextSignalModel for TfidfLogisticModel {
    fn probability(&self, text: &str) -> f64 {
        let z = self
            .features(text)
            .iter()
            .map(|&(idx, v)| v * self.artifact.coefficients[idx])
            .sum::<f64>()
            + self.artifact.intercept;
        clamp_unit(1.0 / (1.0 + (-z).exp()))
    }

    fn name(&self) -> &str {
        "tfidf-logistic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sigmoid(z: f64) -> f64 {
        1.0 / (1.0 + (-z).exp())
    }

    fn artifact() -> ModelArtifact {
        ModelArtifact {
            vocabulary: HashMap::from([
                ("ministry".to_string(), 0),
                ("said".to_string(), 1),
                ("shocking".to_string(), 2),
            ]),
            idf: vec![1.0, 1.0, 2.0],
            coefficients: vec![1.5, 0.5, -3.0],
            intercept: 0.1,
            lowercase: true,
            ngram_range: (1, 1),
            sublinear_tf: false,
            stop_words: vec![],
        }
    }

    #[test]
    fn unknown_text_returns_intercept_probability() {
        let model = TfidfLogisticModel::from_artifact(artifact()).unwrap();
        let p = model.probability("nothing in the vocabulary here");
        assert!((p - sigmoid(0.1)).abs() < 1e-12);
    }

    #[test]
    fn matches_hand_computed_logit() {
        let model = TfidfLogisticModel::from_artifact(artifact()).unwrap();
        // counts: ministry=1, said=1 -> tfidf (1,1) -> normalized (1/√2, 1/√2)
        let p = model.probability("The Ministry said so");
        let z = (1.5 + 0.5) / 2f64.sqrt() + 0.1;
        assert!((p - sigmoid(z)).abs() < 1e-12);
    }

    #[test]
    fn single_letter_tokens_are_ignored() {
        let mut a = artifact();
        a.vocabulary.insert("a".to_string(), 0);
        let model = TfidfLogisticModel::from_artifact(a).unwrap();
        assert!((model.probability("a a a") - sigmoid(0.1)).abs() < 1e-12);
    }

    #[test]
    fn bigrams_are_counted_when_configured() {
        let mut a = artifact();
        a.vocabulary.insert("ministry said".to_string(), 2);
        a.vocabulary.remove("shocking");
        a.ngram_range = (1, 2);
        let model = TfidfLogisticModel::from_artifact(a).unwrap();
        // features: ministry 1, said 1, "ministry said" 2 (idf 2)
        let norm = (1.0f64 + 1.0 + 4.0).sqrt();
        let z = (1.5 + 0.5 - 6.0) / norm + 0.1;
        assert!((model.probability("ministry said") - sigmoid(z)).abs() < 1e-12);
    }

    #[test]
    fn stop_words_are_dropped() {
        let mut a = artifact();
        a.stop_words = vec!["said".to_string()];
        let model = TfidfLogisticModel::from_artifact(a).unwrap();
        let z = 1.5 + 0.1;
        assert!((model.probability("ministry said") - sigmoid(z)).abs() < 1e-12);
    }

    #[test]
    fn mismatched_dimensions_are_rejected() {
        let mut a = artifact();
        a.coefficients.pop();
        assert!(matches!(
            TfidfLogisticModel::from_artifact(a),
            Err(VeracityError::Model(_))
        ));
    }

    #[test]
    fn out_of_range_vocabulary_index_is_rejected() {
        let mut a = artifact();
        a.vocabulary.insert("extra".to_string(), 9);
        assert!(TfidfLogisticModel::from_artifact(a).is_err());
    }

    #[test]
    fn json_defaults_apply() {
        let json = r#"{"vocabulary": {"said": 0}, "idf": [1.0], "coefficients": [2.0], "intercept": 0.0}"#;
        let model = TfidfLogisticModel::from_json(json).unwrap();
        assert!((model.probability("SAID") - sigmoid(2.0)).abs() < 1e-12);
    }
}
