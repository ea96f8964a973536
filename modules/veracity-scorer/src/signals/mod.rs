pub mod fact_check;
pub mod realtime;
pub mod source;

pub use fact_check::{FactCheck, FACT_SIGNALS};
pub use realtime::{NewsSearch, RealtimeVerifier, UnavailableReason, Verification};
pub use source::source_score;
