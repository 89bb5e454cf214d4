//! Runs fuzzify → rule evaluation → defuzzify and bands the crisp score.

use crate::aggregate::defuzzify;
use crate::config::RiskConfig;
use crate::input::InputVector;
use crate::membership::{FuzzyDegrees, MembershipTable};
use crate::rules::{duplicate_premises, RuleActivation, RuleBase};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: f64, config: &RiskConfig) -> Self {
        if score >= config.high_threshold {
            RiskLevel::High
        } else if score >= config.medium_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// Full trace of one evaluation
#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    pub inputs: InputVector,
    pub degrees: FuzzyDegrees,
    pub activations: Vec<RuleActivation>,
    pub score: f64,
    pub level: RiskLevel,
}

impl RiskAssessment {
    /// Activations with nonzero strength.
    pub fn fired(&self) -> impl Iterator<Item = &RuleActivation> {
        self.activations.iter().filter(|a| a.strength > 0.0)
    }
}

pub struct RiskEngine<'r> {
    config: RiskConfig,
    table: &'r MembershipTable,
    rules: RuleBase<'r>,
}

impl RiskEngine<'static> {
    /// Engine over the compiled-in shapes and rules.
    pub fn new(config: RiskConfig) -> Self {
        Self::with_tables(config, MembershipTable::standard(), RuleBase::standard())
    }
}

impl<'r> RiskEngine<'r> {
    pub fn with_tables(
        config: RiskConfig,
        table: &'r MembershipTable,
        rules: RuleBase<'r>,
    ) -> Self {
        for (first, second) in duplicate_premises(rules.rules()) {
            warn!(first, second, "rules share an identical premise");
        }
        Self {
            config,
            table,
            rules,
        }
    }

    /// Crisp score only.
    pub fn score(&self, inputs: &InputVector) -> f64 {
        let degrees = self.table.fuzzify(inputs);
        defuzzify(&self.rules.evaluate(&degrees))
    }

    pub fn assess(&self, inputs: InputVector) -> RiskAssessment {
        let degrees = self.table.fuzzify(&inputs);
        let activations = self.rules.evaluate(&degrees);
        let score = defuzzify(&activations);
        let level = RiskLevel::from_score(score, &self.config);
        debug!(
            request_count = inputs.request_count,
            security_level = inputs.security_level,
            anomalous_volume = inputs.anomalous_volume,
            score,
            level = level.as_str(),
            "assessed"
        );
        RiskAssessment {
            inputs,
            degrees,
            activations,
            score,
            level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::membership::Triangular;
    use crate::rules::{Rule, RULES};

    fn engine() -> RiskEngine<'static> {
        RiskEngine::new(RiskConfig::default())
    }

    #[test]
    fn level_thresholds() {
        let config = RiskConfig::default();
        assert_eq!(RiskLevel::from_score(0.0, &config), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(39.9, &config), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(40.0, &config), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(70.0, &config), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(95.0, &config), RiskLevel::High);
    }

    #[test]
    fn hand_computed_interior_point() {
        // strengths: r1 0.2, r2/r5/r10 1/3 → (6 + 45) / 1.2
        let a = engine().assess(InputVector::new(400.0, 3.0, 150.0));
        assert!((a.score - 42.5).abs() < 1e-9);
        assert_eq!(a.level, RiskLevel::Medium);
        let fired: Vec<usize> = a.fired().map(|r| r.rule).collect();
        assert_eq!(fired, vec![1, 2, 5, 10]);
    }

    #[test]
    fn score_matches_assess() {
        let e = engine();
        let inputs = InputVector::new(720.0, 6.5, 320.0);
        assert_eq!(e.score(&inputs), e.assess(inputs).score);
    }

    #[test]
    fn rule_eight_alone() {
        // rc_med 0.6, sl_high 0.8, av_low 0.8; rc_low and av_med are 0
        let a = engine().assess(InputVector::new(600.0, 9.0, 50.0));
        let fired: Vec<usize> = a.fired().map(|r| r.rule).collect();
        assert_eq!(fired, vec![8]);
        assert!((a.activations[7].strength - 0.6).abs() < 1e-12);
        assert!((a.score - 50.0).abs() < 1e-9);
    }

    #[test]
    fn rule_nine_alone() {
        // rc_high 0.44, sl_med 0.5, av_high 0.28; sl_low and av_low are 0
        let a = engine().assess(InputVector::new(720.0, 6.5, 320.0));
        let fired: Vec<usize> = a.fired().map(|r| r.rule).collect();
        assert_eq!(fired, vec![9]);
        assert!((a.activations[8].strength - 0.28).abs() < 1e-12);
        assert!((a.score - 90.0).abs() < 1e-9);
        assert_eq!(a.level, RiskLevel::High);
    }

    #[test]
    fn transition_point_scores_zero() {
        let a = engine().assess(InputVector::new(500.0, 5.0, 250.0));
        assert!(a.activations.iter().all(|r| r.strength == 0.0));
        assert_eq!(a.score, 0.0);
        assert_eq!(a.level, RiskLevel::Low);
    }

    #[test]
    fn custom_tables() {
        let mut shapes = [[Triangular::fixed(0.0, 5.0, 10.0); 3]; 3];
        shapes[0][0] = Triangular::fixed(0.0, 1.0, 2.0);
        let table = MembershipTable::new(shapes);
        let rules = [
            RULES[0],
            Rule {
                consequent: 80.0,
                ..RULES[1]
            },
        ];
        let e = RiskEngine::with_tables(RiskConfig::default(), &table, RuleBase::new(&rules));
        // rc_low 0, everything else at its peak: only rule 2 fires
        let a = e.assess(InputVector::new(5.0, 5.0, 5.0));
        assert_eq!(a.activations.len(), 2);
        assert_eq!(a.score, 80.0);
        assert_eq!(a.level, RiskLevel::High);
    }

    #[test]
    fn assessment_serializes() {
        let a = engine().assess(InputVector::default());
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["activations"].as_array().unwrap().len(), 10);
        assert!(json["degrees"]["rc_low"].is_number());
        assert!(json["level"].is_string());
    }
}
