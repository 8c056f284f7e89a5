//! # Von Mises distribution
//!
//! The [von Mises distribution](https://en.wikipedia.org/wiki/Von_Mises_distribution)
//! is the circular analogue of the normal distribution. It has 2 parameters:
//!  - `mu`: the mean direction.
//!  - `kappa`: the concentration (`0 <= kappa`). With `kappa = 0` it is the
//!     uniform distribution, and as `kappa` grows the distribution concentrates
//!     around `mu`.
//!
//! The pdf is:
//!
//! ```text
//! f(x) = exp(kappa * cos(x - mu)) / (2 * pi * I_0(kappa))
//! ```
//!
//! where `I_0` is the [modified bessel function](crate::euclid::bessel_i0) of order 0.
//!
//! All the angles are in radians.
//!

use std::f64::consts::{PI, TAU};

use rand::Rng;

use crate::{
    angles,
    configuration::{
        KAPPA_RELIABLE_RESULTANT, UNIFORM_KAPPA_THRESHOLD,
        special::{CDF_INTEGRATION_MIN_STEPS, CDF_INTEGRATION_STEPS},
    },
    distribution_trait::Distribution,
    domain::ContinuousDomain,
    errors::CircStatError,
    euclid,
    samples::CircularSamples,
};

#[derive(Debug, Clone, PartialEq)]
pub struct VonMises {
    domain: ContinuousDomain,
    /// The mean direction, in `[-pi, pi)`
    mu: f64,
    /// The concentration
    kappa: f64,
    /// `1 / (2 * pi * I_0(kappa) * exp(-kappa))`
    normalization: f64,
}

impl VonMises {
    /// Creates a new [von Mises distribution](https://en.wikipedia.org/wiki/Von_Mises_distribution).
    ///
    ///  - `mu` indicates the mean direction (in radians). Any finite value is valid,
    ///     it will be wrapped to `[-pi, pi)`.
    ///  - `kappa` indicates the concentration. It must be finite and non-negative.
    pub fn new(mu: f64, kappa: f64) -> Result<VonMises, CircStatError> {
        if mu.is_nan() || kappa.is_nan() {
            return Err(CircStatError::NanErr);
        }

        if !mu.is_finite() || !kappa.is_finite() || kappa < 0.0 {
            return Err(CircStatError::InvalidNumber);
        }

        let mu: f64 = angles::wrap_signed(mu);
        let normalization: f64 = 1.0 / (TAU * euclid::bessel_i0_scaled(kappa));

        return Ok(VonMises {
            domain: ContinuousDomain::turn_centered_at(mu),
            mu,
            kappa,
            normalization,
        });
    }

    /// Fits a von Mises distribution to the `data` (maximum likelyhood).
    ///
    ///  - The mean direction is the [circular mean](CircularSamples::mean) of the data.
    ///  - The concentration is estimated with [VonMises::estimate_kappa].
    ///
    /// If `axial` is set the angles are doubled before fitting and the mean
    /// direction is halved afterwards. The concentration is the one of the doubled
    /// angles.
    ///
    /// Returns [CircStatError::DegenerateSample] if all the angles are identical
    /// (the concentration would be infinite).
    pub fn fit(data: &mut CircularSamples, axial: bool) -> Result<VonMises, CircStatError> {
        if axial {
            let mut doubled: CircularSamples = data.doubled();
            let fitted: VonMises = VonMises::fit(&mut doubled, false)?;
            return VonMises::new(0.5 * fitted.mu, fitted.kappa);
        }

        let mu: f64 = data.get_unit().to_radians(data.mean());
        let kappa: f64 = VonMises::estimate_kappa(data.peek_data(), mu);

        if !kappa.is_finite() {
            return Err(CircStatError::DegenerateSample);
        }

        return VonMises::new(mu, kappa);
    }

    /// Estimates the concentration `kappa` of the `data` (in radians) around the
    /// mean direction `mu` (in radians).
    ///
    /// Uses the approximation by Best & Fisher (1981) of the maximum likelyhood
    /// estimator, in terms of `R = mean(cos(x_i - mu))`:
    ///
    /// ```text
    ///  - 0.0  <= R < 0.53:  kappa = 2R + R^3 + 5/6 * R^5
    ///  - 0.53 <= R < 0.85:  kappa = -0.4 + 1.39R + 0.43/(1 - R)
    ///  - 0.85 <= R:         kappa = 1/(R^3 - 4R^2 + 3R)
    /// ```
    ///
    /// The approximation is not reliable when `R < 0.7`
    /// ([KAPPA_RELIABLE_RESULTANT]). This is not enforced.
    ///
    /// If `R == 1` (all the angles are `mu`) the result is `+inf`. If `data`
    /// is empty the result is `0.0`.
    #[must_use]
    pub fn estimate_kappa(data: &[f64], mu: f64) -> f64 {
        if data.is_empty() {
            return 0.0;
        }

        let n: f64 = data.len() as f64;
        let mut r: f64 = data.iter().map(|x: &f64| (x - mu).cos()).sum::<f64>() / n;
        // a negative value means that `mu` is not the mean direction
        r = r.clamp(0.0, 1.0);

        if r < KAPPA_RELIABLE_RESULTANT {
            log::debug!(
                "Estimating kappa with a mean resultant length of {r}. The estimation is not reliable below {KAPPA_RELIABLE_RESULTANT}. "
            );
        }

        let kappa: f64 = if r < 0.53 {
            let r_3: f64 = r * r * r;
            2.0 * r + r_3 + (5.0 / 6.0) * r_3 * r * r
        } else if r < 0.85 {
            -0.4 + 1.39 * r + 0.43 / (1.0 - r)
        } else {
            1.0 / (r * r * r - 4.0 * r * r + 3.0 * r)
        };

        return kappa;
    }

    /// Return `mu` (the mean direction, in radians, `[-pi, pi)`).
    #[must_use]
    pub const fn get_mu(&self) -> f64 {
        return self.mu;
    }

    /// Return `kappa` (the concentration).
    #[must_use]
    pub const fn get_kappa(&self) -> f64 {
        return self.kappa;
    }

    /// The probability of the arc `[mu, mu + delta]` for `0 <= delta <= pi`.
    fn half_mass(&self, delta: f64) -> f64 {
        let fraction: f64 = delta / TAU;
        let steps: f64 = (fraction * CDF_INTEGRATION_STEPS as f64).ceil();
        let steps: u64 = (steps as u64).max(CDF_INTEGRATION_MIN_STEPS as u64);

        let centered_pdf = |t: f64| self.normalization * (self.kappa * (t.cos() - 1.0)).exp();
        return euclid::numerical_integration_finite(centered_pdf, (0.0, delta), steps);
    }

    /// Samples one angle with the algorithm of Best & Fisher (1979).
    /// The result is in `[mu - pi, mu + pi)`.
    fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.kappa < UNIFORM_KAPPA_THRESHOLD {
            let u: f64 = rng.random();
            return self.mu - PI + u * TAU;
        }

        /*
            Best & Fisher (1979), "Efficient simulation of the von Mises distribution":

            tau = 1 + sqrt(1 + 4 kappa^2)
            rho = (tau - sqrt(2 tau)) / (2 kappa)
            r = (1 + rho^2) / (2 rho)

            loop:
                z = cos(pi u1)
                f = (1 + r z) / (r + z)
                c = kappa (r - f)
                accept if c (2 - c) - u2 > 0 or ln(c / u2) + 1 - c >= 0

            theta = mu + sign(u3 - 0.5) acos(f)
        */
        let kappa: f64 = self.kappa;
        let tau: f64 = 1.0 + (1.0 + 4.0 * kappa * kappa).sqrt();
        let rho: f64 = (tau - (2.0 * tau).sqrt()) / (2.0 * kappa);
        let r: f64 = (1.0 + rho * rho) / (2.0 * rho);

        let f: f64 = loop {
            let u_1: f64 = rng.random();
            let u_2: f64 = rng.random();

            let z: f64 = (PI * u_1).cos();
            let f: f64 = (1.0 + r * z) / (r + z);
            let c: f64 = kappa * (r - f);

            if 0.0 < c * (2.0 - c) - u_2 || 0.0 <= (c / u_2).ln() + 1.0 - c {
                break f;
            }
        };

        let u_3: f64 = rng.random();
        let theta: f64 = if u_3 < 0.5 {
            self.mu - f.clamp(-1.0, 1.0).acos()
        } else {
            self.mu + f.clamp(-1.0, 1.0).acos()
        };

        return self.mu + angles::wrap_signed(theta - self.mu);
    }
}

impl Distribution for VonMises {
    fn pdf(&self, x: f64) -> f64 {
        // exp(kappa * cos) / I_0(kappa) == exp(kappa * (cos - 1)) / (I_0(kappa) * exp(-kappa))
        return self.normalization * (self.kappa * ((x - self.mu).cos() - 1.0)).exp();
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &self.domain;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            // x is not valid
            std::panic!("Tried to evaluate the cdf function with a NaN value. \n");
        }

        // The cdf is 0 at `mu - pi` and 0.5 at `mu`. We use the symmetry of
        // the pdf to only integrate from `mu` to `x`.
        let centered: f64 = x - self.mu;
        let turns: f64 = ((centered + PI) / TAU).floor();
        let reduced: f64 = centered - turns * TAU;

        let half: f64 = self.half_mass(reduced.abs().min(PI));
        let base: f64 = if reduced < 0.0 { 0.5 - half } else { 0.5 + half };

        return turns + base.clamp(0.0, 1.0);
    }

    fn sample(&self) -> f64 {
        let mut rng: rand::prelude::ThreadRng = rand::rng();
        return self.sample_with(&mut rng);
    }

    fn sample_multiple(&self, n: usize) -> Vec<f64> {
        let mut rng: rand::prelude::ThreadRng = rand::rng();
        return (0..n).map(|_| self.sample_with(&mut rng)).collect::<Vec<f64>>();
    }

    fn expected_value(&self) -> Option<f64> {
        if self.kappa == 0.0 {
            return None;
        }
        return Some(self.mu);
    }

    fn circular_variance(&self) -> f64 {
        return 1.0 - euclid::bessel_ratio_a1(self.kappa);
    }
}
