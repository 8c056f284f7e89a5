//! Euclid contains usefull math functions: numerical integration and the
//! special functions needed by the circular distributions.

use std::f64::consts::PI;

use crate::configuration::special::{
    BESSEL_ASYMPTOTIC_THRESHOLD, BESSEL_SERIES_EPSILON, BESSEL_SERIES_MAX_TERMS,
};

/// Numerical integration of `func` over the finite interval `bounds` with
/// the [Simpson's rule](https://en.wikipedia.org/wiki/Simpson%27s_rule#Composite_Simpson's_1/3_rule).
///
/// `num_steps` is the number of points where `func` is evaluated. Simpson's
/// rule needs an even number of intervals, so if `num_steps` is even one more
/// point is used. At least 3 points are always used.
///
/// If `bounds.1 < bounds.0` the result is negative, as expected.
#[must_use]
pub fn numerical_integration_finite(
    func: impl Fn(f64) -> f64,
    bounds: (f64, f64),
    num_steps: u64,
) -> f64 {
    let mut intervals: u64 = num_steps.max(3) - 1;
    if intervals % 2 == 1 {
        intervals += 1;
    }

    let (a, b): (f64, f64) = bounds;
    let step_length: f64 = (b - a) / intervals as f64;

    let mut accumulator: f64 = func(a) + func(b);
    for i in 1..intervals {
        let x: f64 = a + step_length * i as f64;
        let weight: f64 = if i % 2 == 1 { 4.0 } else { 2.0 };
        accumulator += weight * func(x);
    }

    return accumulator * step_length / 3.0;
}

/// Sums the power series `sum_k (x^2/4)^k * first_term_k` where every term
/// is obtained from the previous one with `next(k, term)`.
fn bessel_power_series(x: f64, first: f64, next: impl Fn(f64, f64) -> f64) -> f64 {
    let quarter_x_sq: f64 = 0.25 * x * x;
    let mut term: f64 = first;
    let mut sum: f64 = first;
    for k in 1..BESSEL_SERIES_MAX_TERMS {
        term = next(k as f64, term) * quarter_x_sq;
        sum += term;
        if term < sum * BESSEL_SERIES_EPSILON {
            break;
        }
    }
    return sum;
}

/// Asymptotic expansion of `I_nu(x) * exp(-x)` for large `x`.
///
/// `I_nu(x) ~ e^x / sqrt(2 pi x) * (1 - (m - 1)/(8x) + (m - 1)(m - 9)/(2! (8x)^2) - ...)`
/// where `m = 4 nu^2`. The series diverges, so we stop at the smallest term.
fn bessel_asymptotic_scaled(nu: f64, x: f64) -> f64 {
    let m: f64 = 4.0 * nu * nu;
    let eight_x: f64 = 8.0 * x;

    let mut term: f64 = 1.0;
    let mut sum: f64 = 1.0;
    for k in 1..30_u32 {
        let odd: f64 = f64::from(2 * k - 1);
        let next: f64 = -term * (m - odd * odd) / (f64::from(k) * eight_x);
        if next.abs() >= term.abs() {
            break;
        }
        term = next;
        sum += term;
        if term.abs() < BESSEL_SERIES_EPSILON {
            break;
        }
    }

    return sum / (2.0 * PI * x).sqrt();
}

/// The [modified bessel function](https://en.wikipedia.org/wiki/Bessel_function#Modified_Bessel_functions:_I%CE%B1,_K%CE%B1)
/// of the first kind and order 0: `I_0(x)`.
///
/// Overflows to `+inf` for `x` around `713`. Use [bessel_i0_scaled] for large arguments.
#[must_use]
pub fn bessel_i0(x: f64) -> f64 {
    let x: f64 = x.abs();
    if x < BESSEL_ASYMPTOTIC_THRESHOLD {
        // I_0(x) = sum_k (x^2/4)^k / (k!)^2
        return bessel_power_series(x, 1.0, |k, term| term / (k * k));
    }
    return bessel_asymptotic_scaled(0.0, x) * x.exp();
}

/// The exponentially scaled [bessel_i0]: `I_0(x) * exp(-|x|)`.
///
/// It does not overflow, so it can be used with very concentrated distributions.
#[must_use]
pub fn bessel_i0_scaled(x: f64) -> f64 {
    let x: f64 = x.abs();
    if x < BESSEL_ASYMPTOTIC_THRESHOLD {
        return bessel_i0(x) * (-x).exp();
    }
    return bessel_asymptotic_scaled(0.0, x);
}

/// The [modified bessel function](https://en.wikipedia.org/wiki/Bessel_function#Modified_Bessel_functions:_I%CE%B1,_K%CE%B1)
/// of the first kind and order 1: `I_1(x)`.
#[must_use]
pub fn bessel_i1(x: f64) -> f64 {
    let sign: f64 = x.signum();
    let x: f64 = x.abs();
    if x < BESSEL_ASYMPTOTIC_THRESHOLD {
        // I_1(x) = x/2 * sum_k (x^2/4)^k / (k! (k+1)!)
        return sign * 0.5 * x * bessel_power_series(x, 1.0, |k, term| term / (k * (k + 1.0)));
    }
    return sign * bessel_asymptotic_scaled(1.0, x) * x.exp();
}

/// The ratio `I_1(kappa) / I_0(kappa)`: the mean resultant length of a
/// von Mises distribution with concentration `kappa`.
///
/// Computed with the scaled functions, so it is valid for any `kappa`.
#[must_use]
pub fn bessel_ratio_a1(kappa: f64) -> f64 {
    let kappa: f64 = kappa.abs();
    if kappa < BESSEL_ASYMPTOTIC_THRESHOLD {
        return bessel_i1(kappa) / bessel_i0(kappa);
    }
    return bessel_asymptotic_scaled(1.0, kappa) / bessel_asymptotic_scaled(0.0, kappa);
}
