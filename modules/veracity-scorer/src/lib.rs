pub mod analytics;
pub mod analyzer;
pub mod fetcher;
pub mod fusion;
pub mod model;
pub mod render;
pub mod session;
pub mod signals;
pub mod summary;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use analytics::{AnalyticsAggregator, HistoryStore};
pub use analyzer::{AnalysisReport, Analyzer};
pub use session::Session;
