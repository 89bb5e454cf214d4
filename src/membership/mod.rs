//! Fuzzification: crisp inputs → degrees of membership via triangular shapes.

mod label;
mod table;

pub use label::{Category, Label, Variable};
pub use table::{FuzzyDegrees, MembershipTable};

use crate::error::{Error, Result};
use serde::Serialize;

/// Triangular membership degree of `x` for the shape with left foot `a`,
/// peak `b` and right foot `c`.
///
/// Shape parameters are not validated here; use [`Triangular::new`] for that.
/// Branch order decides shared boundaries: anything at or outside a foot is 0,
/// the peak itself is taken by the falling edge. NaN matches no branch and
/// yields 0.
pub fn triangular(x: f64, a: f64, b: f64, c: f64) -> f64 {
    if x <= a || x >= c {
        0.0
    } else if a < x && x < b {
        (x - a) / (b - a)
    } else if b <= x && x < c {
        (c - x) / (c - b)
    } else {
        0.0
    }
}

/// A validated triangular membership function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Triangular {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangular {
    /// Build a shape, rejecting non-finite or unordered control points.
    /// Plateau shapes (`a == b` or `b == c`) are accepted.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        let finite = a.is_finite() && b.is_finite() && c.is_finite();
        if !finite || a > b || b > c {
            return Err(Error::InvalidShape { a, b, c });
        }
        Ok(Self { a, b, c })
    }

    /// Unchecked; compiled-in tables only.
    pub(crate) const fn fixed(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub fn degree(&self, x: f64) -> f64 {
        triangular(x, self.a, self.b, self.c)
    }

    pub fn points(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    pub fn peak(&self) -> f64 {
        self.b
    }

    /// Open interval `(a, c)` outside which the degree is 0.
    pub fn support(&self) -> (f64, f64) {
        (self.a, self.c)
    }
}
