//! JSON log lines: one JSON object per line (ndjson) for ingestion and audit.

use crate::risk::{round_for_display, RiskAssessment};
use chrono::Utc;
use serde::Serialize;
use std::io::Write;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// One output line per assessment, score rounded for display.
#[derive(Debug, Serialize)]
pub struct AssessmentLog<'a> {
    pub ts: String,
    pub request_count: f64,
    pub security_level: f64,
    pub anomalous_volume: f64,
    pub risk_score: f64,
    pub risk_level: &'a str,
    pub fired_rules: Vec<usize>,
}

impl<'a> AssessmentLog<'a> {
    pub fn from_assessment(assessment: &'a RiskAssessment) -> Self {
        Self {
            ts: Utc::now().to_rfc3339(),
            request_count: assessment.inputs.request_count,
            security_level: assessment.inputs.security_level,
            anomalous_volume: assessment.inputs.anomalous_volume,
            risk_score: round_for_display(assessment.score, 2),
            risk_level: assessment.level.as_str(),
            fired_rules: assessment.fired().map(|a| a.rule).collect(),
        }
    }
}

/// Initialize tracing with JSON format (one JSON object per line)
pub struct StructuredLogger;

impl StructuredLogger {
    /// Install global subscriber on stderr, level from RUST_LOG or default.
    /// Stdout is left to [`StructuredLogger::emit_json`].
    pub fn init(json: bool, default_level: &str) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        if json {
            let fmt = tracing_subscriber::fmt::layer()
                .json()
                .with_span_events(FmtSpan::NONE)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry().with(filter).with(fmt).init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    /// Emit a single structured line without going through tracing
    pub fn emit_json(event: &impl Serialize, w: &mut impl Write) -> std::io::Result<()> {
        let line = serde_json::to_string(event)?;
        writeln!(w, "{}", line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RiskConfig;
    use crate::input::InputVector;
    use crate::risk::RiskEngine;

    #[test]
    fn emits_one_json_line() {
        let engine = RiskEngine::new(RiskConfig::default());
        let assessment = engine.assess(InputVector::new(400.0, 3.0, 150.0));
        let mut out = Vec::new();
        StructuredLogger::emit_json(&AssessmentLog::from_assessment(&assessment), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        let v: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(v["risk_score"], 42.5);
        assert_eq!(v["risk_level"], "medium");
        assert_eq!(v["fired_rules"], serde_json::json!([1, 2, 5, 10]));
    }
}
