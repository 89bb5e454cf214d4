//! Sugeno rule base: conjunctive premises over the nine labels, each paired
//! with a crisp consequent.

use crate::membership::{Category, FuzzyDegrees, Label, Variable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub request_count: Category,
    pub security_level: Category,
    pub anomalous_volume: Category,
    /// Crisp output of the rule
    pub consequent: f64,
}

impl Rule {
    pub const fn new(
        request_count: Category,
        security_level: Category,
        anomalous_volume: Category,
        consequent: f64,
    ) -> Self {
        Self {
            request_count,
            security_level,
            anomalous_volume,
            consequent,
        }
    }

    pub fn premise(&self) -> [Label; 3] {
        [
            Label::new(Variable::RequestCount, self.request_count),
            Label::new(Variable::SecurityLevel, self.security_level),
            Label::new(Variable::AnomalousVolume, self.anomalous_volume),
        ]
    }

    /// Min-conjunction of the three premise degrees.
    pub fn strength(&self, degrees: &FuzzyDegrees) -> f64 {
        self.premise()
            .into_iter()
            .map(|label| degrees.get(label))
            .fold(f64::INFINITY, f64::min)
    }

    fn same_premise(&self, other: &Rule) -> bool {
        self.request_count == other.request_count
            && self.security_level == other.security_level
            && self.anomalous_volume == other.anomalous_volume
    }
}

use Category::{High, Low, Medium};

/// The fixed rule set. Rules 3/7 and 4/6 share premises; both are kept.
pub static RULES: [Rule; 10] = [
    Rule::new(Low, Low, Low, 30.0),
    Rule::new(Medium, Low, Medium, 60.0),
    Rule::new(Low, High, Low, 20.0),
    Rule::new(High, Low, High, 95.0),
    Rule::new(Medium, Medium, Low, 40.0),
    Rule::new(High, Low, High, 85.0),
    Rule::new(Low, High, Low, 10.0),
    Rule::new(Medium, High, Low, 50.0),
    Rule::new(High, Medium, High, 90.0),
    Rule::new(Medium, Medium, Low, 35.0),
];

/// Firing strength of one rule for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleActivation {
    /// 1-based position in the rule base
    pub rule: usize,
    pub strength: f64,
    pub consequent: f64,
}

/// Read-only view over an ordered rule slice.
#[derive(Debug, Clone, Copy)]
pub struct RuleBase<'r> {
    rules: &'r [Rule],
}

impl<'r> RuleBase<'r> {
    pub fn new(rules: &'r [Rule]) -> Self {
        Self { rules }
    }

    pub fn standard() -> RuleBase<'static> {
        RuleBase::new(&RULES)
    }

    pub fn rules(&self) -> &'r [Rule] {
        self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// One activation per rule, in rule order.
    pub fn evaluate(&self, degrees: &FuzzyDegrees) -> Vec<RuleActivation> {
        self.rules
            .iter()
            .enumerate()
            .map(|(i, rule)| RuleActivation {
                rule: i + 1,
                strength: rule.strength(degrees),
                consequent: rule.consequent,
            })
            .collect()
    }

    /// Consequent range `(min, max)`; `None` for an empty base.
    pub fn consequent_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.rules.iter().map(|r| r.consequent);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), c| (lo.min(c), hi.max(c))))
    }
}

impl Default for RuleBase<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

/// Pairs of 1-based rule numbers whose premises are identical.
pub fn duplicate_premises(rules: &[Rule]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in rules.iter().enumerate() {
        for (j, b) in rules.iter().enumerate().skip(i + 1) {
            if a.same_premise(b) {
                pairs.push((i + 1, j + 1));
            }
        }
    }
    pairs
}
