//! Weighted fusion of the four credibility signals.

use serde::Serialize;

use veracity_common::{clamp_unit, Classification, FusionResult, ScoreComponents, SourceScore};

use crate::signals::Verification;

/// One weight per signal. Each set sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FusionWeights {
    pub ml: f64,
    pub source: f64,
    pub fact: f64,
    pub realtime: f64,
}

impl FusionWeights {
    pub fn total(&self) -> f64 {
        self.ml + self.source + self.fact + self.realtime
    }

    /// The only two configurations, picked by source availability.
    pub fn for_source(source: &SourceScore) -> &'static FusionWeights {
        if source.is_present() {
            &WITH_SOURCE
        } else {
            &WITHOUT_SOURCE
        }
    }
}

pub const WITH_SOURCE: FusionWeights = FusionWeights {
    ml: 0.4,
    source: 0.2,
    fact: 0.2,
    realtime: 0.2,
};

pub const WITHOUT_SOURCE: FusionWeights = FusionWeights {
    ml: 0.5,
    source: 0.0,
    fact: 0.25,
    realtime: 0.25,
};

/// Signals as produced by the scorers, before fusion.
#[derive(Debug, Clone)]
pub struct SignalInputs {
    pub ml: f64,
    pub source: SourceScore,
    pub fact: f64,
    pub realtime: Verification,
}

pub fn fuse(ml: f64, source: SourceScore, fact: f64, realtime: f64) -> FusionResult {
    let components = ScoreComponents {
        ml_score: clamp_unit(ml),
        source_score: match source {
            SourceScore::Present(v) => SourceScore::Present(clamp_unit(v)),
            SourceScore::Absent => SourceScore::Absent,
        },
        fact_score: clamp_unit(fact),
        realtime_score: clamp_unit(realtime),
    };

    let w = FusionWeights::for_source(&components.source_score);
    let raw = w.ml * components.ml_score
        + w.source * components.source_score.value().unwrap_or_default()
        + w.fact * components.fact_score
        + w.realtime * components.realtime_score;

    let final_score = clamp_unit(raw);
    FusionResult {
        components,
        final_score,
        classification: Classification::from_score(final_score),
    }
}

/// Fuse scorer output directly; an unavailable realtime signal counts as neutral.
pub fn fuse_signals(inputs: &SignalInputs) -> FusionResult {
    fuse(inputs.ml, inputs.source, inputs.fact, inputs.realtime.score())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::UnavailableReason;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn weight_sets_sum_to_one() {
        assert!(approx(WITH_SOURCE.total(), 1.0));
        assert!(approx(WITHOUT_SOURCE.total(), 1.0));
    }

    #[test]
    fn absent_source_uses_three_way_weights() {
        let r = fuse(0.9, SourceScore::Absent, 0.2, 0.5);
        assert!(approx(r.final_score, 0.625));
        assert_eq!(r.classification, Classification::Uncertain);
        assert_eq!(r.components.source_score, SourceScore::Absent);
    }

    #[test]
    fn present_source_uses_four_way_weights() {
        let r = fuse(0.8, SourceScore::Present(1.0), 0.7, 0.8);
        // 0.32 + 0.2 + 0.14 + 0.16
        assert!(approx(r.final_score, 0.82));
        assert_eq!(r.classification, Classification::True);
    }

    #[test]
    fn satire_source_with_weak_signals_is_fake() {
        let r = fuse(0.3, SourceScore::Present(0.0), 0.35, 0.2);
        assert!(r.final_score < 0.45);
        assert_eq!(r.classification, Classification::Fake);
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        let r = fuse(3.0, SourceScore::Present(-1.0), 2.0, f64::NAN);
        assert_eq!(r.components.ml_score, 1.0);
        assert_eq!(r.components.source_score, SourceScore::Present(0.0));
        assert_eq!(r.components.realtime_score, 0.0);
        assert!((0.0..=1.0).contains(&r.final_score));
    }

    #[test]
    fn output_stays_in_unit_interval_over_grid() {
        let steps: Vec<f64> = (0..=10).map(|i| i as f64 / 10.0).collect();
        for &ml in &steps {
            for &fact in &steps {
                for &rt in &steps {
                    let a = fuse(ml, SourceScore::Absent, fact, rt).final_score;
                    let p = fuse(ml, SourceScore::Present(0.4), fact, rt).final_score;
                    assert!((0.0..=1.0).contains(&a));
                    assert!((0.0..=1.0).contains(&p));
                }
            }
        }
    }

    #[test]
    fn unavailable_realtime_fuses_as_neutral() {
        let inputs = SignalInputs {
            ml: 0.9,
            source: SourceScore::Absent,
            fact: 0.2,
            realtime: Verification::Unavailable {
                reason: UnavailableReason::NoCredential,
            },
        };
        let r = fuse_signals(&inputs);
        assert_eq!(r.components.realtime_score, 0.5);
        assert!(approx(r.final_score, 0.625));
    }
}
