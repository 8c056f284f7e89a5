//! # Hypothesis testing for circular data
//!
//! This module contains the [TestResult] struct and the common tests for
//! circular (angular) data.
//!
//! ## Introduction:
//!
//! *This section is a brief introduction to statistical concepts*
//!
//! In statistics, when we want to make a claim about reality, we perform
//! an hypothesis test. We generate 2 hypothesis:
//!  - The null hypothesis (`H0`): there is no effect. Anything we observe is
//!     just a product of random chance.
//!  - The alternative hypothesis (`Ha` or `H1`): there is an effect.
//!
//! To do a test we select a statistic and we need to know its distribution
//! under the null hypothesis (the null distribution). For most circular tests the
//! null distribution has no simple closed form, so we compare the statistic
//! against a tabulated **critical value** (see [crate::tables]).
//!
//! The significance level (denoted by `alpha`) is the probability of commiting
//! a Type 1 error (rejecting `H0` when it is true):
//!
//!  > alpha = P( Rejecting H0 | H0 is true )
//!
//! If the statistic is more extreme than the critical value for `alpha`, we
//! **reject the null hypothesis**. Otherwise we **fail to reject** it.
//!
//! ## Circular tests
//!
//! Ordinary (linear) tests give wrong answers with angles: `359°` and `1°` are
//! only `2°` apart. The tests of this module work with the angles on the circle:
//!
//!  - [v_test]: is the data concentrated around a known preferred direction?
//!  - [rayleigh_test]: is the data concentrated around *any* direction?
//!  - [watson_u2_test]: was the data drawn from a given distribution?
//!  - [watson_two_sample_u2_test]: were two samples drawn from the same distribution?
//!  - [watson_williams_test]: do two samples have the same mean direction? (not implemented)
//!
//! Every test takes a significance level that must be one of the values tabulated
//! for that test (see [crate::tables]). Significance levels outside of `(0, 1)`
//! or that are not tabulated return [TestError::InvalidSignificance].
//!
//! The tests check the sample sizes but keep in mind that the assumptions of
//! each test (like independence) cannot be checked. If they are not fullfilled,
//! the result is meaningless.
//!

use crate::{
    angles::AngleUnit,
    distribution_trait::Distribution,
    distributions::VonMises::VonMises,
    errors::TestError,
    samples::CircularSamples,
    tables,
};

/// Contains the result of a circular test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestResult {
    /// `true` if the null hypothesis was rejected.
    pub rejected: bool,
    /// The observed value of the statistic.
    pub statistic: f64,
    /// The critical value of the statistic for the selected significance level.
    pub critical_value: f64,
}

impl TestResult {
    /// Creates a [TestResult] for a test that rejects `H0` when
    /// `critical_value < statistic`.
    #[must_use]
    pub fn right_tail(statistic: f64, critical_value: f64) -> TestResult {
        return TestResult {
            rejected: critical_value < statistic,
            statistic,
            critical_value,
        };
    }
}

impl Default for TestResult {
    fn default() -> Self {
        return TestResult {
            rejected: false,
            statistic: f64::NAN,
            critical_value: f64::NAN,
        };
    }
}

/// The result of the [Rayleigh test](rayleigh_test).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayleighResult {
    /// Rayleigh's `z = n * R^2`.
    pub z: f64,
    /// The approximate [P value](https://en.wikipedia.org/wiki/P-value).
    pub p: f64,
    /// If a significance level was given, `Some(p < significance)`.
    pub rejected: Option<bool>,
}

/// Checks that `alpha` is a valid probability: finite and in `(0, 1)`.
fn check_significance(alpha: f64) -> Result<(), TestError> {
    #[allow(clippy::nonminimal_bool)]
    if !alpha.is_finite() || !(0.0 < alpha && alpha < 1.0) {
        return Err(TestError::InvalidSignificance);
    }
    return Ok(());
}

/// Performs the [V-test](https://en.wikipedia.org/wiki/Rayleigh_test) (or
/// modified Rayleigh test) of uniformity against an alternative with a known
/// mean direction.
///
/// ## Assumptions of the test
///
/// 1. [IID samples](https://en.wikipedia.org/wiki/Independent_and_identically_distributed_random_variables)
/// 2. The alternative is a unimodal distribution with the mean direction `preferred_direction`.
///
/// ## Inputs:
///
/// 1. `data`: the angles of the sample. At least `5` are needed.
/// 2. `preferred_direction`: the expected mean direction under `Ha`, in the unit of `data`.
/// 3. `significance`: the significance level (`alpha`). Must be one of
///     [V_TEST_SIGNIFICANCE](crate::tables::V_TEST_SIGNIFICANCE).
///
/// ## Results
///
/// The statistic is `V = sqrt(2n) * R * cos(mean - preferred_direction)`.
/// `H0` (uniformity) is rejected if `V` is bigger than the critical value.
///
/// Errors:
///  - [TestError::NotEnoughSamples] if `data` has less than `5` angles.
///  - [TestError::NanErr] if `preferred_direction` is NaN.
///  - [TestError::InvalidArguments] if `preferred_direction` is infinite.
///  - [TestError::InvalidSignificance] if `significance` is not tabulated.
#[bon::builder]
pub fn v_test(
    data: &mut CircularSamples,
    preferred_direction: f64,
    significance: f64,
) -> Result<TestResult, TestError> {
    check_significance(significance)?;
    if preferred_direction.is_nan() {
        return Err(TestError::NanErr);
    }
    if preferred_direction.is_infinite() {
        return Err(TestError::InvalidArguments);
    }

    let n: usize = data.count();
    let critical_value: f64 = tables::v_test_critical_value(n, significance)?;

    let unit: AngleUnit = data.get_unit();
    let mean: f64 = unit.to_radians(data.mean());
    let preferred: f64 = unit.to_radians(preferred_direction);
    let r: f64 = data.resultant();

    let statistic: f64 = (2.0 * n as f64).sqrt() * r * (mean - preferred).cos();

    return Ok(TestResult::right_tail(statistic, critical_value));
}

/// Performs the [Rayleigh test](https://en.wikipedia.org/wiki/Rayleigh_test) of
/// uniformity against a unimodal alternative with an unknown mean direction.
///
/// ## Inputs:
///
/// 1. `data`: the angles of the sample. At least `2` are needed.
/// 2. `significance`: (optional) if given, [RayleighResult::rejected] is
///     `Some(p < significance)`. It must be in `(0, 1)`.
///
/// ## Results
///
/// Rayleigh's `z = n * R^2` and the P value with the approximation of Zar
/// (Biostatistical Analysis, eq. 27.4):
///
/// ```text
/// p = exp(sqrt(1 + 4n + 4(n^2 - (nR)^2)) - (1 + 2n))
/// ```
///
/// Returns [TestError::NotEnoughSamples] if there are less than `2` angles.
#[bon::builder]
pub fn rayleigh_test(
    data: &mut CircularSamples,
    significance: Option<f64>,
) -> Result<RayleighResult, TestError> {
    if let Some(alpha) = significance {
        check_significance(alpha)?;
    }

    let n: f64 = data.count() as f64;
    if n < 2.0 {
        return Err(TestError::NotEnoughSamples);
    }

    let r: f64 = data.resultant();
    let z: f64 = n * r * r;
    let nr: f64 = n * r;
    let p: f64 = ((1.0 + 4.0 * n + 4.0 * (n * n - nr * nr)).sqrt() - (1.0 + 2.0 * n))
        .exp()
        .clamp(0.0, 1.0);

    return Ok(RayleighResult {
        z,
        p,
        rejected: significance.map(|alpha: f64| p < alpha),
    });
}

/// Performs [Watson's U^2 goodness of fit test](https://en.wikipedia.org/wiki/Watson_test):
/// tests if the `data` was drawn from the `null` distribution.
///
/// ## Assumptions of the test
///
/// 1. [IID samples](https://en.wikipedia.org/wiki/Independent_and_identically_distributed_random_variables)
/// 2. The null distribution is continuous.
///
/// ## Inputs:
///
/// 1. `data`: the angles of the sample. At least `2` are needed.
/// 2. `null`: (optional) the distribution of `H0`. It is evaluated in radians.
///     If it is not given, a [VonMises] distribution is [fitted](VonMises::fit)
///     to the data.
///      - For uniformity use [CIRCULAR_UNIFORM](crate::distributions::CircularUniform::CIRCULAR_UNIFORM).
/// 3. `significance`: the significance level (`alpha`). Must be one of
///     [WATSON_U2_SIGNIFICANCE](crate::tables::WATSON_U2_SIGNIFICANCE).
/// 4. `axial`: (default `false`) set if the data is axial. The angles are doubled
///     before evaluating the cdf of the null distribution (and before the fit).
///
/// ## Results
///
/// With the angles sorted in `[0, 2*pi)` and `V_i = F(x_i) - F(0)`:
///
/// ```text
/// U^2 = sum V_i^2 - sum (2i - 1) V_i / n + n (1/3 - (mean(V) - 1/2)^2)
/// ```
///
/// `H0` is rejected if `U^2` is bigger than the critical value.
///
/// Errors:
///  - [TestError::NotEnoughSamples] if `data` has less than `2` angles.
///  - [TestError::InvalidSignificance] if `significance` is not tabulated.
///  - [TestError::DegenerateResult] if the von Mises fit is not possible
///     (all the angles are identical).
#[bon::builder]
pub fn watson_u2_test(
    data: &mut CircularSamples,
    null: Option<&dyn Distribution>,
    significance: f64,
    #[builder(default)] axial: bool,
) -> Result<TestResult, TestError> {
    check_significance(significance)?;

    let n: usize = data.count();
    let critical_value: f64 = tables::watson_u2_critical_value(n, significance)?;

    let mut doubled: Option<CircularSamples> = if axial { Some(data.doubled()) } else { None };
    let sample: &mut CircularSamples = match doubled.as_mut() {
        Some(d) => d,
        None => data,
    };

    let fitted: VonMises;
    let null: &dyn Distribution = match null {
        Some(d) => d,
        None => {
            fitted = VonMises::fit(sample, false)?;
            &fitted
        }
    };

    let statistic: f64 = watson_u2_statistic(sample.sorted(), null);

    return Ok(TestResult::right_tail(statistic, critical_value));
}

/// Computes Watson's U^2 of the `sorted` angles (in `[0, 2*pi)`) against the `null`.
fn watson_u2_statistic(sorted: &[f64], null: &dyn Distribution) -> f64 {
    let n: f64 = sorted.len() as f64;
    let origin: f64 = null.cdf(0.0);

    let mut sum_v: f64 = 0.0;
    let mut sum_v2: f64 = 0.0;
    let mut sum_weighted: f64 = 0.0;
    for (i, &x) in sorted.iter().enumerate() {
        let v: f64 = null.cdf(x) - origin;
        sum_v += v;
        sum_v2 += v * v;
        sum_weighted += (2 * i + 1) as f64 * v;
    }

    let v_mean: f64 = sum_v / n;
    return sum_v2 - sum_weighted / n + n * (1.0 / 3.0 - (v_mean - 0.5) * (v_mean - 0.5));
}

/// Performs [Watson's two sample U^2 test](https://en.wikipedia.org/wiki/Watson_test):
/// tests if `data_a` and `data_b` were drawn from the same distribution.
///
/// ## Assumptions of the test
///
/// 1. Both samples are [IID](https://en.wikipedia.org/wiki/Independent_and_identically_distributed_random_variables)
///     and independent of each other.
/// 2. The distributions are continuous (ties are handled, but they should be rare).
///
/// ## Inputs:
///
/// 1. `data_a`: the angles of the first sample. At least `2` are needed.
/// 2. `data_b`: the angles of the second sample. At least `2` are needed.
/// 3. `significance`: the significance level (`alpha`). Must be one of
///     [TWO_SAMPLE_U2_SIGNIFICANCE](crate::tables::TWO_SAMPLE_U2_SIGNIFICANCE).
///
/// ## Results
///
/// The angles of both samples are merged in ascending order. After each step
/// `d_k = i/n - j/m`, where `i` and `j` are the angles consumed of each sample
/// (a tie consumes one of each). Then:
///
/// ```text
/// U^2 = n m / (n + m)^2 * (sum d_k^2 - (sum d_k)^2 / (n + m))
/// ```
///
/// `H0` is rejected if `U^2` is bigger than the critical value.
///
/// Errors:
///  - [TestError::NotEnoughSamples] if any sample has less than `2` angles.
///  - [TestError::InvalidSignificance] if `significance` is not tabulated.
#[bon::builder]
pub fn watson_two_sample_u2_test(
    data_a: &mut CircularSamples,
    data_b: &mut CircularSamples,
    significance: f64,
) -> Result<TestResult, TestError> {
    check_significance(significance)?;

    let n: usize = data_a.count();
    let m: usize = data_b.count();
    if n < 2 || m < 2 {
        return Err(TestError::NotEnoughSamples);
    }

    let critical_value: f64 =
        tables::watson_two_sample_u2_critical_value(n.max(m), n.min(m), significance)?;

    let statistic: f64 = two_sample_u2_statistic(data_a.sorted(), data_b.sorted())?;

    return Ok(TestResult::right_tail(statistic, critical_value));
}

/// Computes the two sample U^2 with a merge of the sorted samples `a` and `b`.
fn two_sample_u2_statistic(a: &[f64], b: &[f64]) -> Result<f64, TestError> {
    let n: usize = a.len();
    let m: usize = b.len();
    let (n_f, m_f): (f64, f64) = (n as f64, m as f64);

    let mut i: usize = 0;
    let mut j: usize = 0;
    let mut sum_d: f64 = 0.0;
    let mut sum_d2: f64 = 0.0;
    let mut steps: usize = 0;

    while i < n || j < m {
        if j == m || (i < n && a[i] < b[j]) {
            i += 1;
        } else if i == n || b[j] < a[i] {
            j += 1;
        } else {
            // tie
            i += 1;
            j += 1;
        }

        let d: f64 = i as f64 / n_f - j as f64 / m_f;
        sum_d += d;
        sum_d2 += d * d;
        steps += 1;
    }

    debug_assert!(i == n && j == m);
    if i != n || j != m {
        return Err(TestError::InternalInvariant(
            "the merge did not consume both samples",
        ));
    }

    log::trace!("Two sample U2 merge: n = {n}, m = {m}, steps = {steps}, sum d = {sum_d}");

    let total: f64 = n_f + m_f;
    return Ok(n_f * m_f / (total * total) * (sum_d2 - sum_d * sum_d / total));
}

/// [Watson-Williams test](https://en.wikipedia.org/wiki/Watson%E2%80%93Williams_test)
/// for the equality of the mean directions of 2 samples.
///
/// The test assumes that both samples come from von Mises distributions with
/// the same concentration `kappa > 2`.
///
/// **Not implemented.** Always returns [TestError::Unimplemented].
#[bon::builder]
pub fn watson_williams_test(
    data_a: &mut CircularSamples,
    data_b: &mut CircularSamples,
    significance: f64,
    #[builder(default)] axial: bool,
) -> Result<TestResult, TestError> {
    let _ = (data_a, data_b, significance, axial);
    return Err(TestError::Unimplemented);
}
