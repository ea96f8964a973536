use chrono::{DateTime, Utc};
use uuid::Uuid;

use veracity_common::AnalyticsSummary;

use crate::analytics::{AnalyticsAggregator, HistoryStore};
use crate::analyzer::AnalysisReport;

/// The scope that owns one analysis history. Created at session start,
/// cleared only through an explicit reset, dropped at session end.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    created_at: DateTime<Utc>,
    history: HistoryStore,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            history: HistoryStore::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn analytics(&mut self) -> AnalyticsAggregator<'_> {
        AnalyticsAggregator::new(&mut self.history)
    }

    /// Append a completed analysis to this session's history.
    pub fn record(&mut self, report: &AnalysisReport) {
        self.analytics().append(&report.result);
    }

    pub fn summary(&self) -> AnalyticsSummary {
        crate::analytics::summarize(&self.history)
    }

    pub fn reset(&mut self) {
        self.analytics().reset();
        tracing::info!(session = %self.id, "Session analytics reset");
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
