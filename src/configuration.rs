//! This file contains the deafult values and other value choices used trough the library.
//!

/// Tolerance used when matching a requested significance level (`alpha`) against
/// the significance levels of a table of critical values.
///
/// The tables are only defined for a few values of `alpha` (like `0.05` or `0.01`).
/// If the requested value is further than this tolerance from every tabulated
/// value, the test returns [TestError::InvalidSignificance](crate::errors::TestError::InvalidSignificance)
/// instead of silently using another significance level.
pub static SIGNIFICANCE_TOLERANCE: f64 = 1.0e-4;

/// The approximation of `kappa` used in [crate::distributions::VonMises::estimate_kappa]
/// is known to be unreliable when the mean resultant length is smaller than this value.
///
/// Nothing is enforced, a debug message is logged.
pub static KAPPA_RELIABLE_RESULTANT: f64 = 0.7;

/// Values of `kappa` smaller than this are treated as a uniform distribution
/// when sampling a [VonMises](crate::distributions::VonMises) distribution.
/// The rejection algorithm becomes numerically unstable for tiny concentrations.
pub static UNIFORM_KAPPA_THRESHOLD: f64 = 1.0e-8;

/// Everything related to the numerical evaluation of special functions.
pub mod special {

    /// Above this value the modified bessel functions are evaluated with their
    /// asymptotic expansion instead of the power series.
    pub static BESSEL_ASYMPTOTIC_THRESHOLD: f64 = 15.0;

    /// The power series of the bessel functions is stopped when the next term
    /// is smaller than this (relative to the accumulated value).
    pub static BESSEL_SERIES_EPSILON: f64 = 1.0e-17;

    /// The maximum number of terms of the power series of the bessel functions.
    pub static BESSEL_SERIES_MAX_TERMS: usize = 500;

    /// The cdf of the circular distributions is computed with the
    /// [Simpson's rule](https://en.wikipedia.org/wiki/Simpson%27s_rule#Composite_Simpson's_1/3_rule)
    /// over (at most) a full turn. This is the number of steps used for a full turn.
    /// Shorter intervals use a proportional number of steps.
    ///
    /// `(1 << 12) + 1 = 4 097`
    ///
    /// The `+ 1` is because odd numbers are better for Simpson's integration.
    pub static CDF_INTEGRATION_STEPS: usize = (1 << 12) + 1;

    /// The minimum number of steps for any integration of a circular pdf.
    pub static CDF_INTEGRATION_MIN_STEPS: usize = 65;
}
