//! This script contains the interface used to comunicate with the circular
//! distributions.
//!
//! The hypothesis tests only need the [Distribution::cdf] of the null
//! distribution, so any type implementing [Distribution] can be used as a
//! reference distribution (see [crate::hypothesis::watson_u2_test]).

use rand::Rng;

use crate::configuration::special::{CDF_INTEGRATION_MIN_STEPS, CDF_INTEGRATION_STEPS};
use crate::domain::ContinuousDomain;
use crate::euclid;

/// The trait for any continuous circular distribution. All the angles are in **radians**.
///
/// None of the provided methods are guaranteed to work if the implemented [Distribution::pdf]
/// is NOT a [valid pdf](https://en.wikipedia.org/wiki/Probability_density_function).
/// So, it needs to fullfill:
///  - The function must be stricly non-negative
///  - The function must be real valued
///  - The function must have a total area of 1 under the curve over a full turn.
pub trait Distribution {
    //Requiered method:

    /// Evaluates the [PDF](https://en.wikipedia.org/wiki/Probability_density_function)
    /// (Probability Density function) of the distribution at point `x` (in radians).
    ///
    /// The pdf of a circular distribution is periodic: `pdf(x) == pdf(x + 2*pi)`.
    fn pdf(&self, x: f64) -> f64;

    /// Returns a reference to the pdf [ContinuousDomain], wich indicates at wich points
    /// the pdf is integrated. For circular distributions it should be a range of
    /// exactly one turn. The returned domain should be constant and not change.
    fn get_domain(&self) -> &ContinuousDomain;

    // Provided methods:
    // Manual implementation for a specific distribution is recommended.

    /// Evaluates the [CDF](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
    /// (Cumulative distribution function) at `x` (in radians).
    ///
    /// The cdf is cumulative over the whole real line: it starts at `0.0` at the
    /// minimum of the domain and every full turn adds `1.0`. Therefore
    /// `cdf(x + 2*pi) == cdf(x) + 1.0` and differences like `cdf(b) - cdf(a)` are
    /// always the probability of the arc from `a` to `b`.
    ///
    /// **Panicks** is `x` is a NaN.
    ///
    /// Note that the deafult implemetation requieres numerical integration and
    /// may be expensive.
    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            // x is not valid
            panic!("Tried to evaluate the cdf function with a NaN value. \n");
        }

        let (min, max): (f64, f64) = self.get_domain().get_bounds();
        let turn: f64 = max - min;
        if !turn.is_finite() {
            panic!("The default cdf needs a finite domain (one turn). \n");
        }

        let turns: f64 = ((x - min) / turn).floor();
        let reduced: f64 = x - turns * turn;

        let fraction: f64 = (reduced - min) / turn;
        let steps: f64 = (fraction * CDF_INTEGRATION_STEPS as f64).ceil();
        let steps: u64 = (steps as u64).max(CDF_INTEGRATION_MIN_STEPS as u64);

        let partial: f64 = euclid::numerical_integration_finite(|t: f64| self.pdf(t), (min, reduced), steps);

        return turns + partial.clamp(0.0, 1.0);
    }

    /// Samples the distribution at random. The result is in the domain of the
    /// distribution.
    ///
    /// The deafult method is [Distribution::sample_multiple].
    fn sample(&self) -> f64 {
        let aux: Vec<f64> = self.sample_multiple(1);
        return aux[0];
    }

    // Multiple variants.
    // They are the same as the normal functions, but if they are overriden they may
    // provide a computational advantage.

    /// cdf_multiple allows to evaluate the [Distribution::cdf] at multiple points.
    fn cdf_multiple(&self, points: &[f64]) -> Vec<f64> {
        return points.iter().map(|x| self.cdf(*x)).collect::<Vec<f64>>();
    }

    /// sample_multiple allows to evaluate the [Distribution::sample] at multiple points.
    ///
    /// The deafult implementation uses [Distribution::rejection_sample] with the
    /// maximum of the pdf found on a grid of the domain (plus a margin).
    fn sample_multiple(&self, n: usize) -> Vec<f64> {
        let (min, max): (f64, f64) = self.get_domain().get_bounds();
        let grid: usize = 1024;
        let step: f64 = (max - min) / grid as f64;
        let mut pdf_max: f64 = 0.0;
        for i in 0..=grid {
            pdf_max = pdf_max.max(self.pdf(min + step * i as f64));
        }

        return self.rejection_sample(n, pdf_max * 1.05);
    }

    /// Returns the mean direction (in radians) of the distribution if it exists.
    ///
    /// Returns `None` if the mean resultant length is zero (uniform distribution).
    fn expected_value(&self) -> Option<f64> {
        let bounds: (f64, f64) = self.get_domain().get_bounds();
        let steps: u64 = CDF_INTEGRATION_STEPS as u64;

        let c: f64 = euclid::numerical_integration_finite(|t: f64| t.cos() * self.pdf(t), bounds, steps);
        let s: f64 = euclid::numerical_integration_finite(|t: f64| t.sin() * self.pdf(t), bounds, steps);

        if c.hypot(s) < 1.0e-12 {
            return None;
        }
        return Some(s.atan2(c));
    }

    /// Returns the [circular variance](https://en.wikipedia.org/wiki/Directional_statistics#Measures_of_location_and_spread)
    /// of the distribution: `1 - rho`, where `rho` is the mean resultant length.
    fn circular_variance(&self) -> f64 {
        let bounds: (f64, f64) = self.get_domain().get_bounds();
        let steps: u64 = CDF_INTEGRATION_STEPS as u64;

        let c: f64 = euclid::numerical_integration_finite(|t: f64| t.cos() * self.pdf(t), bounds, steps);
        let s: f64 = euclid::numerical_integration_finite(|t: f64| t.sin() * self.pdf(t), bounds, steps);

        return 1.0 - c.hypot(s);
    }

    // Other provided methods:
    // (methods that don't need to be replaced and should be here)

    /// Sample the distribution with the [rejection sampling](https://en.wikipedia.org/wiki/Rejection_sampling)
    /// method.
    ///
    /// Important: [Distribution::rejection_sample] assumes a valid [Distribution::pdf] and
    /// a valid domain in [Distribution::get_domain]. Also the **domain must be finite**
    /// (one turn for a circular distribution).
    ///
    /// It is needed to know `pdf_max`, the maximum value that the pdf achives.
    ///
    /// Note: `pdf_max` does **not** need to be the real global maximum, it just needs
    /// to be equal or greater to it. Note that using a greater `pdf_max` value will incur
    /// a performance penalty.
    fn rejection_sample(&self, n: usize, pdf_max: f64) -> Vec<f64> {
        let mut rng: rand::prelude::ThreadRng = rand::rng();
        let domain: &ContinuousDomain = self.get_domain();

        let bounds: (f64, f64) = domain.get_bounds();
        let bound_range: f64 = bounds.1 - bounds.0;

        let mut ret: Vec<f64> = Vec::with_capacity(n);
        for _i in 0..n {
            let sample: f64 = loop {
                let mut x: f64 = rng.random();
                x = bounds.0 + x * bound_range;
                let y: f64 = rng.random();
                if y * pdf_max < self.pdf(x) {
                    break x;
                }
            };
            ret.push(sample);
        }

        return ret;
    }
}
