//! Linguistic variables, categories and the nine labels built from them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    RequestCount,
    SecurityLevel,
    AnomalousVolume,
}

impl Variable {
    pub const ALL: [Variable; 3] = [
        Variable::RequestCount,
        Variable::SecurityLevel,
        Variable::AnomalousVolume,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            Variable::RequestCount => 0,
            Variable::SecurityLevel => 1,
            Variable::AnomalousVolume => 2,
        }
    }

    /// Range over which the shapes are meaningful. Inputs outside it are
    /// still accepted.
    pub fn domain(self) -> RangeInclusive<f64> {
        match self {
            Variable::RequestCount => 0.0..=1000.0,
            Variable::SecurityLevel => 0.0..=10.0,
            Variable::AnomalousVolume => 0.0..=500.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Low,
    Medium,
    High,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Low, Category::Medium, Category::High];

    pub(crate) fn index(self) -> usize {
        match self {
            Category::Low => 0,
            Category::Medium => 1,
            Category::High => 2,
        }
    }
}

/// One of the nine (variable, category) pairs, e.g. `rc_low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label {
    pub variable: Variable,
    pub category: Category,
}

impl Label {
    pub const fn new(variable: Variable, category: Category) -> Self {
        Self { variable, category }
    }

    /// All nine labels, variable-major.
    pub fn all() -> impl Iterator<Item = Label> {
        Variable::ALL
            .into_iter()
            .flat_map(|v| Category::ALL.into_iter().map(move |c| Label::new(v, c)))
    }

    pub fn name(&self) -> &'static str {
        use Category::*;
        use Variable::*;
        match (self.variable, self.category) {
            (RequestCount, Low) => "rc_low",
            (RequestCount, Medium) => "rc_med",
            (RequestCount, High) => "rc_high",
            (SecurityLevel, Low) => "sl_low",
            (SecurityLevel, Medium) => "sl_med",
            (SecurityLevel, High) => "sl_high",
            (AnomalousVolume, Low) => "av_low",
            (AnomalousVolume, Medium) => "av_med",
            (AnomalousVolume, High) => "av_high",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
