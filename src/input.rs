//! The three crisp inputs of one evaluation.

use crate::membership::Variable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputVector {
    /// Requests observed, nominally [0, 1000]
    pub request_count: f64,
    /// System security level, nominally [0, 10]
    pub security_level: f64,
    /// Anomalous data volume, nominally [0, 500]
    pub anomalous_volume: f64,
}

impl InputVector {
    pub fn new(request_count: f64, security_level: f64, anomalous_volume: f64) -> Self {
        Self {
            request_count,
            security_level,
            anomalous_volume,
        }
    }

    pub fn value(&self, variable: Variable) -> f64 {
        match variable {
            Variable::RequestCount => self.request_count,
            Variable::SecurityLevel => self.security_level,
            Variable::AnomalousVolume => self.anomalous_volume,
        }
    }

    /// True when every value lies in its variable's domain.
    pub fn in_domain(&self) -> bool {
        Variable::ALL
            .into_iter()
            .all(|v| v.domain().contains(&self.value(v)))
    }
}

impl Default for InputVector {
    /// Starting slider positions of the interactive front end.
    fn default() -> Self {
        Self::new(200.0, 5.0, 150.0)
    }
}
