//! The nine compiled-in shapes and the degree set they produce.

use super::{Category, Label, Triangular, Variable};
use crate::input::InputVector;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Shapes indexed `[variable][category]`.
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipTable {
    shapes: [[Triangular; 3]; 3],
}

static STANDARD: MembershipTable = MembershipTable {
    shapes: [
        // request_count
        [
            Triangular::fixed(0.0, 0.0, 500.0),
            Triangular::fixed(250.0, 500.0, 750.0),
            Triangular::fixed(500.0, 1000.0, 1000.0),
        ],
        // security_level
        [
            Triangular::fixed(0.0, 0.0, 5.0),
            Triangular::fixed(2.0, 5.0, 8.0),
            Triangular::fixed(5.0, 10.0, 10.0),
        ],
        // anomalous_volume
        [
            Triangular::fixed(0.0, 0.0, 250.0),
            Triangular::fixed(100.0, 250.0, 400.0),
            Triangular::fixed(250.0, 500.0, 500.0),
        ],
    ],
};

impl MembershipTable {
    /// Custom shape set, `[variable][category]`.
    pub fn new(shapes: [[Triangular; 3]; 3]) -> Self {
        Self { shapes }
    }

    /// Process-wide read-only table shared by every evaluation.
    pub fn standard() -> &'static MembershipTable {
        &STANDARD
    }

    pub fn shape(&self, label: Label) -> &Triangular {
        &self.shapes[label.variable.index()][label.category.index()]
    }

    pub fn fuzzify(&self, inputs: &InputVector) -> FuzzyDegrees {
        let mut values = [[0.0; 3]; 3];
        for variable in Variable::ALL {
            let x = inputs.value(variable);
            for category in Category::ALL {
                values[variable.index()][category.index()] =
                    self.shapes[variable.index()][category.index()].degree(x);
            }
        }
        FuzzyDegrees { values }
    }
}

impl Default for MembershipTable {
    fn default() -> Self {
        STANDARD.clone()
    }
}

/// Degree of membership for each of the nine labels. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyDegrees {
    values: [[f64; 3]; 3],
}

impl FuzzyDegrees {
    pub fn get(&self, label: Label) -> f64 {
        self.values[label.variable.index()][label.category.index()]
    }

    /// `(label, degree)` pairs in `rc_low` .. `av_high` order.
    pub fn iter(&self) -> impl Iterator<Item = (Label, f64)> + '_ {
        Label::all().map(move |label| (label, self.get(label)))
    }
}

impl Serialize for FuzzyDegrees {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(9))?;
        for (label, degree) in self.iter() {
            map.serialize_entry(label.name(), &degree)?;
        }
        map.end()
    }
}
