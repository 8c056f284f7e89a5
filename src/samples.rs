//! # Circular samples
//!
//! [CircularSamples] stores a set of angles and computes the circular summary
//! statistics: mean direction, resultant length, circular variance, circular
//! standard deviation and the circular median.
//!
//! The angles are stored in radians. The [AngleUnit] given at construction is
//! remembered and every result is expressed in that same unit.
//!
//! Like the samples of a linear statistics library, the computed values are stored
//! in [SampleProperties] so asking for them again is constant time.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::angles::{self, AngleUnit};
use crate::errors::CircStatError;

pub struct CircularSamples {
    // non-empty, in radians
    data: Vec<f64>,
    unit: AngleUnit,
    properties: SampleProperties,
}

/// Stores the sample properties of the data if they have been computed.
///
/// Angles are stored in radians, independently of the unit of the sample.
#[derive(Debug, Clone, Default)]
pub struct SampleProperties {
    /// The sums `(sum sin(x_i), sum cos(x_i))`
    pub sum_sin_cos: Option<(f64, f64)>,
    /// The mean direction, in `(-pi, pi]`
    pub mean: Option<f64>,
    /// The mean resultant length, in `[0, 1]`
    pub resultant: Option<f64>,
    /// The circular variance, in `[0, 1]`
    pub variance: Option<f64>,
    /// The (non-axial) median, in `[0, 2*pi)`
    pub median: Option<f64>,
    /// A sorted copy of the data wrapped to `[0, 2*pi)`
    pub sorted: Option<Vec<f64>>,
}

impl CircularSamples {
    /// Creates a new instance of [CircularSamples] with the given `data`
    /// expressed in `unit`.
    ///
    /// `data` must not be empty and must not contain NaNs or infinities (`+-inf`).
    ///
    /// If you want to just move the data without copying it,
    /// use [CircularSamples::new_move].
    pub fn new(data: &[f64], unit: AngleUnit) -> Result<CircularSamples, CircStatError> {
        return CircularSamples::new_move(Vec::from(data), unit);
    }

    /// Creates a new instance of [CircularSamples] with the given `data`
    /// expressed in `unit`.
    ///
    /// `data` must not be empty and must not contain NaNs or infinities (`+-inf`).
    pub fn new_move(data: Vec<f64>, unit: AngleUnit) -> Result<CircularSamples, CircStatError> {
        if data.is_empty() {
            return Err(CircStatError::EmptySample);
        }
        if data.iter().any(|f: &f64| f.is_nan()) {
            return Err(CircStatError::NanErr);
        }
        if data.iter().any(|f: &f64| f.is_infinite()) {
            return Err(CircStatError::InvalidNumber);
        }

        let mut data: Vec<f64> = data;
        if unit == AngleUnit::Degrees {
            for x in &mut data {
                *x = x.to_radians();
            }
        }

        return Ok(CircularSamples {
            data,
            unit,
            properties: SampleProperties::default(),
        });
    }

    /// Creates a new instance of [CircularSamples] from data in **degrees**.
    pub fn from_degrees(data: &[f64]) -> Result<CircularSamples, CircStatError> {
        return CircularSamples::new(data, AngleUnit::Degrees);
    }

    /// Creates a new instance of [CircularSamples] from data in **radians**.
    pub fn from_radians(data: &[f64]) -> Result<CircularSamples, CircStatError> {
        return CircularSamples::new(data, AngleUnit::Radians);
    }

    /// Creates a new instance of [CircularSamples] with every angle doubled.
    ///
    /// This is how axial data (data with a period of half a turn, such as
    /// undirected lines) is transformed into ordinary circular data.
    #[must_use]
    pub fn doubled(&self) -> CircularSamples {
        let data: Vec<f64> = self.data.iter().map(|x: &f64| 2.0 * x).collect::<Vec<f64>>();
        return CircularSamples {
            data,
            unit: self.unit,
            properties: SampleProperties::default(),
        };
    }

    /// The number of angles in the sample. Always at least 1.
    #[must_use]
    pub fn count(&self) -> usize {
        return self.data.len();
    }

    /// The unit used for the results.
    #[must_use]
    pub const fn get_unit(&self) -> AngleUnit {
        return self.unit;
    }

    /// Gives a reference to the contained data, **in radians** and
    /// in the original order.
    #[must_use]
    pub fn peek_data(&self) -> &[f64] {
        return &self.data;
    }

    /// Returns the contained data (in radians) and drops self.
    #[must_use]
    pub fn get_data(self) -> Vec<f64> {
        return self.data;
    }

    /// Returns a reference to the internal field that contains
    /// all computed statistics ([SampleProperties]).
    #[must_use]
    pub const fn peek_properties(&self) -> &SampleProperties {
        return &self.properties;
    }

    /// Returns the data in radians, wrapped to `[0, 2*pi)` and sorted in
    /// ascending order.
    pub fn sorted(&mut self) -> &[f64] {
        let data: &Vec<f64> = &self.data;
        let sorted: &Vec<f64> = self.properties.sorted.get_or_insert_with(|| {
            let mut s: Vec<f64> = data.iter().map(|&x| angles::wrap_positive(x)).collect::<Vec<f64>>();
            s.sort_unstable_by(f64::total_cmp);
            s
        });
        return sorted;
    }

    /// Returns `(sum sin(x_i), sum cos(x_i))`.
    pub fn sum_sin_cos(&mut self) -> (f64, f64) {
        if let Some(sums) = self.properties.sum_sin_cos {
            return sums;
        }

        let mut sum_sin: f64 = 0.0;
        let mut sum_cos: f64 = 0.0;
        for &x in &self.data {
            let (s, c): (f64, f64) = x.sin_cos();
            sum_sin += s;
            sum_cos += c;
        }

        self.properties.sum_sin_cos = Some((sum_sin, sum_cos));
        return (sum_sin, sum_cos);
    }

    /// Computes the mean direction in radians (`(-pi, pi]`).
    fn mean_radians(&mut self) -> f64 {
        if let Some(m) = self.properties.mean {
            return m;
        }

        let (sum_sin, sum_cos): (f64, f64) = self.sum_sin_cos();
        // If the resultant is exactly 0 the direction is undefined and
        // we keep whatever atan2(0, 0) returns.
        let mean: f64 = sum_sin.atan2(sum_cos);

        self.properties.mean = Some(mean);
        return mean;
    }

    /// Computes the [circular mean](https://en.wikipedia.org/wiki/Circular_mean)
    /// (mean direction) of the sample: `atan2(sum sin(x_i), sum cos(x_i))`.
    ///
    /// The result is in the unit of the sample, in the range `(-pi, pi]`
    /// (`(-180, 180]` for degrees).
    ///
    /// If the resultant vector is exactly zero (the angles cancel each other)
    /// the mean direction is undefined and the returned value is meaningless.
    pub fn mean(&mut self) -> f64 {
        let mean: f64 = self.mean_radians();
        return self.unit.from_radians(mean);
    }

    /// Computes the mean resultant length `R` of the sample:
    /// `sqrt((sum sin(x_i))^2 + (sum cos(x_i))^2) / n`.
    ///
    /// `R` is in `[0, 1]`. It is `1` only if all the angles are the same direction.
    pub fn resultant(&mut self) -> f64 {
        if let Some(r) = self.properties.resultant {
            return r;
        }

        let (sum_sin, sum_cos): (f64, f64) = self.sum_sin_cos();
        let n: f64 = self.data.len() as f64;
        // rounding can give values a tiny bit over 1
        let resultant: f64 = (sum_sin.hypot(sum_cos) / n).min(1.0);

        self.properties.resultant = Some(resultant);
        return resultant;
    }

    /// Computes the mean resultant length for grouped data with the correction
    /// for the bias introduced by the grouping.
    ///
    /// `bin_width` is the width of the groups (in the unit of the sample).
    /// The corrected value is `R * w / (2 * sin(w / 2))`, where `w` is the width in radians.
    ///
    /// Returns [CircStatError::InvalidNumber] if `bin_width` is not in `(0, 2*pi]`
    /// (or `(0, 360]` for degrees).
    pub fn resultant_binned(&mut self, bin_width: f64) -> Result<f64, CircStatError> {
        if bin_width.is_nan() {
            return Err(CircStatError::NanErr);
        }

        let w: f64 = self.unit.to_radians(bin_width);
        #[allow(clippy::nonminimal_bool)]
        if !(0.0 < w && w <= std::f64::consts::TAU + 1.0e-12) {
            return Err(CircStatError::InvalidNumber);
        }

        let correction: f64 = w / (2.0 * (0.5 * w).sin());
        return Ok(self.resultant() * correction);
    }

    /// Computes the circular variance: `1 - mean(cos(x_i - mean_direction))`.
    ///
    /// The result is in `[0, 1]`.
    pub fn variance(&mut self) -> f64 {
        if let Some(v) = self.properties.variance {
            return v;
        }

        let mean: f64 = self.mean_radians();
        let n: f64 = self.data.len() as f64;
        let mut acc: f64 = 0.0;
        for &x in &self.data {
            acc += (x - mean).cos();
        }
        let variance: f64 = (1.0 - acc / n).clamp(0.0, 1.0);

        self.properties.variance = Some(variance);
        return variance;
    }

    /// Computes the circular standard deviation: `sqrt(-2 ln(R))`, where `R` is
    /// the [mean resultant length](CircularSamples::resultant).
    ///
    /// The result is an angle in the unit of the sample. It is `+inf` when
    /// `R == 0`.
    pub fn std_dev(&mut self) -> f64 {
        let r: f64 = self.resultant();
        let std_dev: f64 = (-2.0 * r.ln()).max(0.0).sqrt();
        return self.unit.from_radians(std_dev);
    }

    /// Computes the circular median of the sample.
    ///
    /// A median is a direction that splits the data in two halves with the
    /// same number of angles and with most of the data on its side (not on
    /// the antipode). If there is more than one, their circular mean is
    /// returned (Otieno & Anderson-Cook).
    ///
    /// Set `axial` for axial data (period of half a turn).
    ///
    /// The result is in the unit of the sample, in `[0, 2*pi)` (`[0, pi)` if `axial`).
    ///
    /// Returns [CircStatError::NoMedianFound] if no direction splits the data.
    /// This usually indicates axial data processed without the `axial` flag,
    /// but it can also happen with heavily tied data.
    pub fn median(&mut self, axial: bool) -> Result<f64, CircStatError> {
        if !axial {
            if let Some(m) = self.properties.median {
                return Ok(self.unit.from_radians(m));
            }
        }

        let median: f64 = if axial {
            let mut doubled: CircularSamples = self.doubled();
            circular_median(doubled.sorted())? * 0.5
        } else {
            let m: f64 = circular_median(self.sorted())?;
            self.properties.median = Some(m);
            m
        };

        return Ok(self.unit.from_radians(median));
    }
}

/// Computes the circular median (in radians, `[0, 2*pi)`) of `sorted`, wich
/// must be sorted in ascending order and wrapped to `[0, 2*pi)`.
fn circular_median(sorted: &[f64]) -> Result<f64, CircStatError> {
    /*
        Candidates:
         - odd n: the data points themselves.
         - even n: the bisector of every pair of neighbours (wrapping around
            from the last point to the first).

        A candidate is a median if the number of points strictly on each side
        is the same. Then, the candidate and its antipode both split the data,
        so we choose the one with more points within a quarter of turn.
    */
    let n: usize = sorted.len();

    let candidates: Vec<f64> = if n % 2 == 0 {
        (0..n)
            .map(|i| {
                let a: f64 = sorted[i];
                let b: f64 = sorted[(i + 1) % n];
                (a.sin() + b.sin()).atan2(a.cos() + b.cos())
            })
            .collect::<Vec<f64>>()
    } else {
        sorted.to_vec()
    };

    let mut medians: Vec<f64> = Vec::new();
    for candidate in candidates {
        let mut n_plus: usize = 0;
        let mut n_minus: usize = 0;
        let mut n_near: usize = 0;
        let mut n_far: usize = 0;

        for &x in sorted {
            let d: f64 = angles::cdist(candidate, x);
            if 0.0 < d {
                n_plus += 1;
            } else if d < 0.0 {
                n_minus += 1;
            }

            if d.abs() < FRAC_PI_2 {
                n_near += 1;
            } else if FRAC_PI_2 < d.abs() {
                n_far += 1;
            }
        }

        if n_plus != n_minus {
            continue;
        }

        if n_near < n_far {
            medians.push(candidate + PI);
        } else {
            medians.push(candidate);
        }
    }

    let median: f64 = match medians.len() {
        0 => return Err(CircStatError::NoMedianFound),
        1 => medians[0],
        _ => {
            let (s, c): (f64, f64) = medians
                .iter()
                .fold((0.0, 0.0), |(s, c), m| (s + m.sin(), c + m.cos()));
            s.atan2(c)
        }
    };

    return Ok(angles::wrap_positive(median));
}
