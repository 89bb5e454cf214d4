//! Risk scoring: the full inference pipeline plus score banding.

mod engine;

pub use engine::{RiskAssessment, RiskEngine, RiskLevel};

use crate::input::InputVector;

/// Score three raw inputs with the compiled-in shapes and rules.
pub fn compute_risk(request_count: f64, security_level: f64, anomalous_volume: f64) -> f64 {
    let inputs = InputVector::new(request_count, security_level, anomalous_volume);
    let table = crate::membership::MembershipTable::standard();
    let degrees = table.fuzzify(&inputs);
    crate::aggregate::defuzzify(&crate::rules::RuleBase::standard().evaluate(&degrees))
}

/// Round for display; the engine never rounds its own output.
pub fn round_for_display(score: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (score * factor).round() / factor
}
