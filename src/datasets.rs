//! # Example datasets
//!
//! Small datasets of angles (all of them in **degrees**) used in the
//! documentation and in the tests. They are the worked examples of the
//! classic circular statistics literature (Zar, Biostatistical Analysis).
//!
//! ```
//! use CircularStatistics::{datasets, samples::CircularSamples};
//!
//! let s: CircularSamples = CircularSamples::from_degrees(datasets::MEDIAN_EXAMPLE).unwrap();
//! assert_eq!(s.count(), 9);
//! ```

/// Directions with a clear center around `50°` (and a few outliers).
/// Median `52°`, mean direction about `51°`.
pub const MEDIAN_EXAMPLE: &[f64] = &[43.0, 45.0, 52.0, 61.0, 75.0, 88.0, 88.0, 279.0, 357.0];

/// Directions for the [V-test](crate::hypothesis::v_test). Clustered around `300°`.
pub const V_TEST_EXAMPLE: &[f64] = &[
    250.0, 275.0, 285.0, 285.0, 290.0, 290.0, 295.0, 300.0, 305.0, 310.0, 315.0, 320.0, 330.0,
    330.0, 5.0,
];

/// The preferred direction of [V_TEST_EXAMPLE].
pub const V_TEST_PREFERRED_DIRECTION: f64 = 265.0;

/// Directions for [Watson's U^2 test](crate::hypothesis::watson_u2_test)
/// against uniformity.
pub const WATSON_U2_EXAMPLE: &[f64] = &[
    20.0, 135.0, 145.0, 165.0, 170.0, 200.0, 300.0, 325.0, 335.0, 350.0, 350.0, 350.0, 355.0,
];

/// First sample for the [two sample U^2 test](crate::hypothesis::watson_two_sample_u2_test).
pub const TWO_SAMPLE_EXAMPLE_A: &[f64] =
    &[38.0, 45.0, 46.0, 52.0, 53.0, 54.0, 56.0, 57.0, 60.0, 64.0];

/// Second sample for the [two sample U^2 test](crate::hypothesis::watson_two_sample_u2_test).
pub const TWO_SAMPLE_EXAMPLE_B: &[f64] = &[
    36.0, 40.0, 44.0, 45.0, 51.0, 51.0, 52.0, 54.0, 54.0, 55.0, 55.0, 56.0, 67.0, 78.0, 89.0,
    314.0,
];
