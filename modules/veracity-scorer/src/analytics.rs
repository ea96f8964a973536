//! Session analytics: an append-only run history and the aggregates derived
//! from it.

use veracity_common::{AnalysisRecord, AnalyticsSummary, Classification, FusionResult};

/// Ordered, append-only analysis history owned by one session.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    records: Vec<AnalysisRecord>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[AnalysisRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn push(&mut self, record: AnalysisRecord) {
        self.records.push(record);
    }

    fn clear(&mut self) {
        self.records.clear();
    }
}

/// Operations over a session's history. Holds the store by mutable borrow so
/// the store itself stays owned by the session.
pub struct AnalyticsAggregator<'a> {
    history: &'a mut HistoryStore,
}

impl<'a> AnalyticsAggregator<'a> {
    pub fn new(history: &'a mut HistoryStore) -> Self {
        Self { history }
    }

    pub fn append(&mut self, result: &FusionResult) {
        self.history.push(AnalysisRecord::from_result(result));
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }

    pub fn summary(&self) -> AnalyticsSummary {
        summarize(self.history)
    }
}

/// Aggregate a history. Bands are recomputed from each final score.
pub fn summarize(history: &HistoryStore) -> AnalyticsSummary {
    let records = history.records();
    let total = records.len();

    let final_scores: Vec<f64> = records.iter().map(|r| r.final_score).collect();
    let average_final_score = if total > 0 {
        final_scores.iter().sum::<f64>() / total as f64
    } else {
        0.0
    };

    let mut summary = AnalyticsSummary {
        total,
        average_final_score,
        final_scores,
        ..Default::default()
    };
    for record in records {
        match record.classification() {
            Classification::True => summary.true_count += 1,
            Classification::Uncertain => summary.uncertain_count += 1,
            Classification::Fake => summary.fake_count += 1,
        }
    }
    summary
}
