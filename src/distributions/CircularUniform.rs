//! # Circular uniform distribution
//!
//! The [circular uniform distribution](https://en.wikipedia.org/wiki/Circular_uniform_distribution)
//! gives the same likelyhood to every direction. It is the null distribution of
//! most tests of uniformity, like the [V-test](crate::hypothesis::v_test) or the
//! [Watson's U^2 test](crate::hypothesis::watson_u2_test) against uniformity.
//!
//! The cdf is `x / (2 * pi)` (on the whole real line).
//!

use std::f64::consts::TAU;

use rand::Rng;

use crate::{distribution_trait::Distribution, domain::ContinuousDomain};

/// The [circular uniform distribution](https://en.wikipedia.org/wiki/Circular_uniform_distribution)
/// on `[0, 2*pi)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CircularUniform {
    domain: ContinuousDomain,
}

/// A ready to use instance of [CircularUniform].
pub const CIRCULAR_UNIFORM: CircularUniform = CircularUniform::new();

impl CircularUniform {
    /// Creates a new [circular uniform distribution](https://en.wikipedia.org/wiki/Circular_uniform_distribution).
    #[must_use]
    pub const fn new() -> CircularUniform {
        return CircularUniform {
            domain: ContinuousDomain::FULL_TURN,
        };
    }
}

impl Default for CircularUniform {
    fn default() -> Self {
        return CircularUniform::new();
    }
}

impl Distribution for CircularUniform {
    fn pdf(&self, _x: f64) -> f64 {
        return 1.0 / TAU;
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &self.domain;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            // x is not valid
            std::panic!("Tried to evaluate the cdf function with a NaN value. \n");
        }

        return x / TAU;
    }

    fn sample(&self) -> f64 {
        let mut rng: rand::prelude::ThreadRng = rand::rng();
        return rng.random::<f64>() * TAU;
    }

    fn sample_multiple(&self, n: usize) -> Vec<f64> {
        let mut rng: rand::prelude::ThreadRng = rand::rng();
        return (0..n).map(|_| rng.random::<f64>() * TAU).collect::<Vec<f64>>();
    }

    fn expected_value(&self) -> Option<f64> {
        // every direction is equally likely
        return None;
    }

    fn circular_variance(&self) -> f64 {
        return 1.0;
    }
}
