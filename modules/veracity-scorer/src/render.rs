//! Plain-text rendering of reports and the session dashboard.

use std::fmt::Write;

use veracity_common::{AnalyticsSummary, Classification};

use crate::analyzer::AnalysisReport;
use crate::signals::{UnavailableReason, Verification};

const TREND_BAR_WIDTH: f64 = 20.0;

fn band_label(band: Classification) -> &'static str {
    match band {
        Classification::True => "True",
        Classification::Uncertain => "Uncertain",
        Classification::Fake => "Fake",
    }
}

fn realtime_note(v: &Verification) -> String {
    match v {
        Verification::Corroborated {
            trusted_matches, ..
        } => format!("{trusted_matches} trusted matches"),
        Verification::Unavailable { reason } => match reason {
            UnavailableReason::NoCredential => "neutral, no API key".to_string(),
            UnavailableReason::Transport { .. } => "neutral, request failed".to_string(),
            UnavailableReason::HttpStatus { status } => format!("neutral, HTTP {status}"),
            UnavailableReason::NotOk { status } => format!("neutral, status {status}"),
            UnavailableReason::Malformed { .. } => "neutral, malformed response".to_string(),
        },
    }
}

pub fn render_report(report: &AnalysisReport) -> String {
    let c = &report.result.components;
    let mut out = String::new();

    let _ = writeln!(out, "Analysis Results");
    if let Some(url) = &report.article_url {
        let _ = writeln!(out, "  URL: {url}");
    }
    let _ = writeln!(out, "  ML Probability Score: {:.2}", c.ml_score);
    let source = match c.source_score.value() {
        Some(v) => format!("{v:.2}"),
        None => "N/A".to_string(),
    };
    let _ = writeln!(out, "  Source Credibility Score: {source}");
    let _ = writeln!(out, "  Fact-check Score: {:.2}", c.fact_score);
    let _ = writeln!(
        out,
        "  Realtime Verification Score: {:.2} ({})",
        c.realtime_score,
        realtime_note(&report.realtime)
    );
    let _ = writeln!(out, "  Final Credibility Score: {:.2}", report.result.final_score);
    let _ = writeln!(out, "{}", report.result.classification.verdict());

    if let Some(summary) = &report.summary {
        let _ = writeln!(out, "Summary");
        let _ = writeln!(out, "  {summary}");
    }
    out
}

pub fn render_dashboard(summary: &AnalyticsSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Analytics Dashboard");
    let _ = writeln!(out, "  Total Articles: {}", summary.total);
    let _ = writeln!(out, "  Average Score: {:.2}", summary.average_final_score);
    let _ = writeln!(out, "  True Articles: {}", summary.true_count);
    let _ = writeln!(out, "  Fake Articles: {}", summary.fake_count);

    if summary.total == 0 {
        return out;
    }

    let _ = writeln!(out, "Article Classification Distribution");
    for (band, count) in summary.distribution() {
        let pct = count as f64 * 100.0 / summary.total as f64;
        let _ = writeln!(out, "  {}: {count} ({pct:.1}%)", band_label(band));
    }

    let _ = writeln!(out, "Credibility Score Trend");
    for (i, score) in summary.final_scores.iter().enumerate() {
        let bar = "#".repeat((score * TREND_BAR_WIDTH).round() as usize);
        let _ = writeln!(out, "  #{:<3} {score:.2} {bar}", i + 1);
    }
    out
}
