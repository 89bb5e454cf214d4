//! Weighted-average defuzzification of rule activations.

use crate::rules::RuleActivation;

/// `Σ(strength × consequent) / Σ(strength)`, or 0 when no rule fires.
pub fn defuzzify<'a>(activations: impl IntoIterator<Item = &'a RuleActivation>) -> f64 {
    let (weighted, total) = activations
        .into_iter()
        .fold((0.0, 0.0), |(weighted, total), act| {
            (weighted + act.strength * act.consequent, total + act.strength)
        });

    if total == 0.0 {
        return 0.0;
    }
    weighted / total
}
