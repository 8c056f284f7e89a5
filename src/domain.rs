//! A Domain represents the set of points where a function is defined.
//!
//! In this library we use it for the pdf of the circular distributions (see
//! [crate::distribution_trait]). A circular pdf is periodic, so its domain is
//! usually a range of exactly one turn, like `[0, 2*pi]` or `[mu - pi, mu + pi]`.
//!

use std::f64::consts::{PI, TAU};

/// A [domain](https://en.wikipedia.org/wiki/Domain_of_a_function) of a region
/// of the real numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum ContinuousDomain {
    /// The values contained in the range.
    ///
    /// The first number is the minimum, and the last is the maximum.
    ///
    /// Has the **invariant** that `min <= max`.
    Range(f64, f64),
}

impl ContinuousDomain {
    /// A full turn `[0, 2*pi]`.
    pub const FULL_TURN: ContinuousDomain = ContinuousDomain::Range(0.0, TAU);

    /// A full turn centered at `center`: `[center - pi, center + pi]`.
    #[must_use]
    pub fn turn_centered_at(center: f64) -> Self {
        return ContinuousDomain::Range(center - PI, center + PI);
    }

    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        let ContinuousDomain::Range(min, max) = self;
        return (*min <= x) && (x <= *max);
    }

    /// Returns the upper and lower bounds of the domain.
    ///
    /// It is guaranteed that return.0 <= return.1. The bounds themselves are included.
    #[must_use]
    pub fn get_bounds(&self) -> (f64, f64) {
        let ContinuousDomain::Range(min, max) = self;
        return (*min, *max);
    }
}
