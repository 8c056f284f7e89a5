use CircularStatistics::angles::{self, AngleUnit};
use CircularStatistics::datasets;
use CircularStatistics::errors::CircStatError;
use CircularStatistics::samples::*;
use assert_approx_eq::assert_approx_eq;

#[test]
fn angular_distance_table() {
    struct Round {
        a: f64,
        b: f64,
        distance: f64,
    }

    let rounds = [
        Round { a: 0.0, b: 0.0, distance: 0.0 },
        Round { a: 0.0, b: 1.0, distance: 1.0 },
        Round { a: 6.0, b: 7.0, distance: 1.0 },
        Round { a: 1.0, b: 0.0, distance: -1.0 },
        Round { a: 340.1, b: 0.1, distance: 20.0 },
    ];

    for (i, r) in rounds.iter().enumerate() {
        let unit: AngleUnit = if i == 4 { AngleUnit::Degrees } else { AngleUnit::Radians };
        let d: f64 = angles::angular_distance(r.a, r.b, unit);
        assert_approx_eq!(d, r.distance, 1.0e-9);
    }
}

#[test]
fn angular_distance_range() {
    for i in -50..50 {
        for j in -50..50 {
            let d: f64 = angles::cdist(0.37 * f64::from(i), 0.41 * f64::from(j));
            assert!(-std::f64::consts::PI <= d && d < std::f64::consts::PI);
        }
    }
}

#[test]
fn summary_of_the_median_example() {
    let mut data: CircularSamples = CircularSamples::from_degrees(datasets::MEDIAN_EXAMPLE).unwrap();

    assert_approx_eq!(data.mean(), 51.05, 0.01);
    assert_approx_eq!(data.resultant(), 0.71099, 1.0e-4);
    assert_approx_eq!(data.variance(), 0.28901, 1.0e-4);
    assert_approx_eq!(data.median(false).unwrap(), 52.0, 1.0e-6);
    assert_approx_eq!(data.std_dev(), 47.323, 1.0e-2);
    assert_approx_eq!(data.resultant_binned(30.0).unwrap(), 0.71918, 1.0e-4);
}

#[test]
fn degrees_and_radians_agree() {
    let degrees: &[f64] = datasets::V_TEST_EXAMPLE;
    let radians: Vec<f64> = degrees.iter().map(|x| x.to_radians()).collect::<Vec<f64>>();

    let mut d: CircularSamples = CircularSamples::from_degrees(degrees).unwrap();
    let mut r: CircularSamples = CircularSamples::from_radians(&radians).unwrap();

    assert_approx_eq!(d.mean().to_radians(), r.mean(), 1.0e-12);
    assert_approx_eq!(d.resultant(), r.resultant(), 1.0e-12);
    assert_approx_eq!(d.variance(), r.variance(), 1.0e-12);
    assert_approx_eq!(d.std_dev().to_radians(), r.std_dev(), 1.0e-12);
    assert_approx_eq!(d.median(false).unwrap().to_radians(), r.median(false).unwrap(), 1.0e-9);

    // stored in radians, in the original order
    for (a, b) in d.get_data().iter().zip(&radians) {
        assert_approx_eq!(*a, *b, 1.0e-15);
    }
}

#[test]
fn summaries_are_rotation_invariant() {
    let shift: f64 = 123.0;
    let shifted: Vec<f64> = datasets::MEDIAN_EXAMPLE
        .iter()
        .map(|x| x + shift)
        .collect::<Vec<f64>>();

    let mut a: CircularSamples = CircularSamples::from_degrees(datasets::MEDIAN_EXAMPLE).unwrap();
    let mut b: CircularSamples = CircularSamples::new_move(shifted, AngleUnit::Degrees).unwrap();

    assert_approx_eq!(a.resultant(), b.resultant(), 1.0e-12);
    assert_approx_eq!(a.variance(), b.variance(), 1.0e-12);
    let mean_shift: f64 = angles::angular_distance(a.mean(), b.mean(), AngleUnit::Degrees);
    assert_approx_eq!(mean_shift, shift, 1.0e-9);
    let median_shift: f64 =
        angles::angular_distance(a.median(false).unwrap(), b.median(false).unwrap(), AngleUnit::Degrees);
    assert_approx_eq!(median_shift, shift, 1.0e-9);
}

#[test]
fn ranges_of_the_summaries() {
    let sets: [&[f64]; 5] = [
        datasets::MEDIAN_EXAMPLE,
        datasets::V_TEST_EXAMPLE,
        datasets::WATSON_U2_EXAMPLE,
        datasets::TWO_SAMPLE_EXAMPLE_A,
        datasets::TWO_SAMPLE_EXAMPLE_B,
    ];

    for set in sets {
        let mut s: CircularSamples = CircularSamples::from_degrees(set).unwrap();
        let r: f64 = s.resultant();
        let v: f64 = s.variance();
        assert!((0.0..=1.0).contains(&r));
        assert!((0.0..=1.0).contains(&v));
        // the variance around the mean direction is 1 - R
        assert_approx_eq!(v, 1.0 - r, 1.0e-12);

        let mean: f64 = s.mean();
        assert!(-180.0 < mean && mean <= 180.0);
        if let Ok(median) = s.median(false) {
            assert!((0.0..360.0).contains(&median));
        }
    }
}

#[test]
fn identical_directions_have_unit_resultant() {
    // the same direction, written with different numbers of full turns
    let mut s: CircularSamples = CircularSamples::from_degrees(&[10.0, 370.0, -350.0, 730.0]).unwrap();

    assert_eq!(s.resultant(), 1.0);
    assert_eq!(s.variance(), 0.0);
    assert_approx_eq!(s.mean(), 10.0, 1.0e-9);
    assert_approx_eq!(s.std_dev(), 0.0, 1.0e-6);
}

#[test]
fn std_dev_decreases_with_concentration() {
    let mut last: f64 = f64::INFINITY;
    for spread in [100.0, 90.0, 60.0, 45.0, 10.0, 1.0] {
        let mut s: CircularSamples = CircularSamples::from_degrees(&[-spread, 0.0, spread]).unwrap();
        let std_dev: f64 = s.std_dev();
        assert!(std_dev < last);
        last = std_dev;
    }

    let mut identical: CircularSamples = CircularSamples::from_degrees(&[10.0, 10.0, 10.0]).unwrap();
    assert_approx_eq!(identical.std_dev(), 0.0, 1.0e-6);

    let mut opposite: CircularSamples = CircularSamples::from_degrees(&[0.0, 180.0]).unwrap();
    assert!(opposite.resultant() < 1.0e-12);
    assert!(30.0 < opposite.std_dev());
}

#[test]
fn binned_correction_is_bigger() {
    let mut s: CircularSamples = CircularSamples::from_degrees(datasets::MEDIAN_EXAMPLE).unwrap();
    let r: f64 = s.resultant();
    let mut last: f64 = r;
    for width in [1.0, 10.0, 45.0, 90.0] {
        let corrected: f64 = s.resultant_binned(width).unwrap();
        assert!(last < corrected);
        last = corrected;
    }

    assert_eq!(s.resultant_binned(0.0), Err(CircStatError::InvalidNumber));
    assert_eq!(s.resultant_binned(400.0), Err(CircStatError::InvalidNumber));
    assert_eq!(s.resultant_binned(f64::NAN), Err(CircStatError::NanErr));
}

#[test]
fn invalid_samples() {
    assert!(matches!(
        CircularSamples::from_degrees(&[]),
        Err(CircStatError::EmptySample)
    ));
    assert!(matches!(
        CircularSamples::from_degrees(&[1.0, f64::NAN]),
        Err(CircStatError::NanErr)
    ));
    assert!(matches!(
        CircularSamples::from_radians(&[f64::INFINITY]),
        Err(CircStatError::InvalidNumber)
    ));
}

#[test]
fn axial_median() {
    // undirected lines: 190 is the same line as 10
    let mut s: CircularSamples =
        CircularSamples::from_degrees(&[10.0, 195.0, 25.0, 200.0, 35.0]).unwrap();
    let median: f64 = s.median(true).unwrap();
    assert_approx_eq!(median, 20.0, 1.0e-6);
}
