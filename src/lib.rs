//! Sugeno fuzzy inference engine for cyber attack risk scoring.
//!
//! Modular structure:
//! - [`membership`] — Triangular shapes and fuzzification of the three inputs
//! - [`rules`] — Fixed ten-rule Sugeno rule base and activation strengths
//! - [`aggregate`] — Weighted-average defuzzification
//! - [`risk`] — Scoring engine and risk banding
//! - [`config`] — Banding and logging configuration
//! - [`logging`] — Structured JSON logging

pub mod aggregate;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod membership;
pub mod risk;
pub mod rules;

pub use config::EngineConfig;
pub use error::{Error, Result};
pub use input::InputVector;
pub use logging::StructuredLogger;
pub use membership::{triangular, FuzzyDegrees, MembershipTable, Triangular};
pub use risk::{compute_risk, RiskAssessment, RiskEngine, RiskLevel};
pub use rules::{RuleActivation, RuleBase, RULES};
