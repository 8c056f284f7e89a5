use CircularStatistics::datasets;
use CircularStatistics::distributions::CircularUniform::CIRCULAR_UNIFORM;
use CircularStatistics::distributions::VonMises::VonMises;
use CircularStatistics::distribution_trait::Distribution;
use CircularStatistics::errors::TestError;
use CircularStatistics::hypothesis::*;
use CircularStatistics::samples::*;
use assert_approx_eq::assert_approx_eq;

fn degrees(data: &[f64]) -> CircularSamples {
    return CircularSamples::from_degrees(data).unwrap();
}

#[test]
fn v_test_example() {
    let mut data: CircularSamples = degrees(datasets::V_TEST_EXAMPLE);

    let result: TestResult = v_test()
        .data(&mut data)
        .preferred_direction(datasets::V_TEST_PREFERRED_DIRECTION)
        .significance(0.01)
        .call()
        .unwrap();

    assert_approx_eq!(result.statistic, 3.884, 0.1);
    assert_approx_eq!(result.critical_value, 2.302, 0.01);
    assert!(result.rejected);
}

#[test]
fn v_test_in_radians() {
    let radians: Vec<f64> = datasets::V_TEST_EXAMPLE
        .iter()
        .map(|x| x.to_radians())
        .collect::<Vec<f64>>();
    let mut rad: CircularSamples = CircularSamples::from_radians(&radians).unwrap();
    let mut deg: CircularSamples = degrees(datasets::V_TEST_EXAMPLE);

    let a: TestResult = v_test()
        .data(&mut rad)
        .preferred_direction(datasets::V_TEST_PREFERRED_DIRECTION.to_radians())
        .significance(0.05)
        .call()
        .unwrap();
    let b: TestResult = v_test()
        .data(&mut deg)
        .preferred_direction(datasets::V_TEST_PREFERRED_DIRECTION)
        .significance(0.05)
        .call()
        .unwrap();

    assert_approx_eq!(a.statistic, b.statistic, 1.0e-9);
    assert_eq!(a.critical_value, b.critical_value);
}

#[test]
fn v_test_against_the_opposite_direction() {
    let mut data: CircularSamples = degrees(datasets::V_TEST_EXAMPLE);

    let result: TestResult = v_test()
        .data(&mut data)
        .preferred_direction(datasets::V_TEST_PREFERRED_DIRECTION + 180.0)
        .significance(0.05)
        .call()
        .unwrap();

    assert!(result.statistic < 0.0);
    assert!(!result.rejected);
}

#[test]
fn v_test_errors() {
    let mut small: CircularSamples = degrees(&[10.0, 20.0, 30.0, 40.0]);
    let r: Result<TestResult, TestError> = v_test()
        .data(&mut small)
        .preferred_direction(0.0)
        .significance(0.05)
        .call();
    assert_eq!(r, Err(TestError::NotEnoughSamples));

    let mut data: CircularSamples = degrees(datasets::V_TEST_EXAMPLE);
    for alpha in [0.0, 1.0, -0.05, f64::NAN, 0.02, 0.07] {
        let r: Result<TestResult, TestError> = v_test()
            .data(&mut data)
            .preferred_direction(0.0)
            .significance(alpha)
            .call();
        assert_eq!(r, Err(TestError::InvalidSignificance));
    }

    let r: Result<TestResult, TestError> = v_test()
        .data(&mut data)
        .preferred_direction(f64::NAN)
        .significance(0.05)
        .call();
    assert_eq!(r, Err(TestError::NanErr));

    let r: Result<TestResult, TestError> = v_test()
        .data(&mut data)
        .preferred_direction(f64::INFINITY)
        .significance(0.05)
        .call();
    assert_eq!(r, Err(TestError::InvalidArguments));
}

#[test]
fn watson_u2_against_uniform() {
    let mut data: CircularSamples = degrees(datasets::WATSON_U2_EXAMPLE);

    let result: TestResult = watson_u2_test()
        .data(&mut data)
        .null(&CIRCULAR_UNIFORM)
        .significance(0.05)
        .call()
        .unwrap();

    assert_approx_eq!(result.statistic, 0.1361, 1.0e-4);
    assert_approx_eq!(result.critical_value, 0.184, 0.002);
    assert!(!result.rejected);
}

#[test]
fn watson_u2_rejects_a_wrong_null() {
    // data around 300 degrees against a von Mises centered at 120 degrees
    let mut data: CircularSamples = degrees(datasets::V_TEST_EXAMPLE);
    let null: VonMises = VonMises::new(120.0_f64.to_radians(), 3.0).unwrap();

    let result: TestResult = watson_u2_test()
        .data(&mut data)
        .null(&null)
        .significance(0.01)
        .call()
        .unwrap();

    assert!(result.rejected);
}

#[test]
fn watson_u2_with_a_fitted_von_mises() {
    let mut data: CircularSamples = degrees(datasets::V_TEST_EXAMPLE);

    let result: TestResult = watson_u2_test()
        .data(&mut data)
        .significance(0.05)
        .call()
        .unwrap();

    // the data is unimodal, the fitted distribution describes it well
    assert!(0.0 < result.statistic);
    assert!(!result.rejected);
}

#[test]
fn watson_u2_axial() {
    // bimodal data (undirected lines) is not uniform once the angles are doubled
    let mut data: CircularSamples = degrees(&[
        10.0, 15.0, 20.0, 25.0, 30.0, 190.0, 195.0, 200.0, 205.0, 210.0, 12.0, 192.0,
    ]);

    let directed: TestResult = watson_u2_test()
        .data(&mut data)
        .null(&CIRCULAR_UNIFORM)
        .significance(0.05)
        .call()
        .unwrap();
    let axial: TestResult = watson_u2_test()
        .data(&mut data)
        .null(&CIRCULAR_UNIFORM)
        .significance(0.05)
        .axial(true)
        .call()
        .unwrap();

    assert!(directed.statistic < axial.statistic);
    assert!(axial.rejected);
}

#[test]
fn watson_u2_axial_with_a_fitted_von_mises() {
    let mut data: CircularSamples = degrees(&[
        10.0, 15.0, 20.0, 25.0, 30.0, 190.0, 195.0, 200.0, 205.0, 210.0, 12.0, 192.0,
    ]);

    let fitted: TestResult = watson_u2_test()
        .data(&mut data)
        .significance(0.05)
        .axial(true)
        .call()
        .unwrap();

    // the same as fitting the doubled angles by hand
    let null: VonMises = VonMises::fit(&mut data.doubled(), false).unwrap();
    let explicit: TestResult = watson_u2_test()
        .data(&mut data)
        .null(&null)
        .significance(0.05)
        .axial(true)
        .call()
        .unwrap();

    assert_approx_eq!(fitted.statistic, explicit.statistic, 1.0e-12);
    assert_approx_eq!(fitted.statistic, 0.0746, 5.0e-3);
    assert_approx_eq!(fitted.critical_value, 0.1830, 1.0e-4);
    assert!(!fitted.rejected);

    // the axial fit describes the data around 18 / 198 degrees
    let axial: VonMises = VonMises::fit(&mut data, true).unwrap();
    assert_approx_eq!(axial.get_mu().to_degrees(), 18.6, 1.0);
    assert!(10.0 < axial.get_kappa());
}

#[test]
fn watson_u2_errors() {
    let mut single: CircularSamples = degrees(&[10.0]);
    let r: Result<TestResult, TestError> = watson_u2_test()
        .data(&mut single)
        .null(&CIRCULAR_UNIFORM)
        .significance(0.05)
        .call();
    assert_eq!(r, Err(TestError::NotEnoughSamples));

    let mut data: CircularSamples = degrees(datasets::WATSON_U2_EXAMPLE);
    let r: Result<TestResult, TestError> = watson_u2_test()
        .data(&mut data)
        .null(&CIRCULAR_UNIFORM)
        .significance(0.001)
        .call();
    assert_eq!(r, Err(TestError::InvalidSignificance));

    // nothing to fit
    let mut identical: CircularSamples = degrees(&[10.0, 10.0, 10.0]);
    let r: Result<TestResult, TestError> = watson_u2_test()
        .data(&mut identical)
        .significance(0.05)
        .call();
    assert!(matches!(r, Err(TestError::DegenerateResult(_))));
}

#[test]
fn two_sample_example() {
    let mut a: CircularSamples = degrees(datasets::TWO_SAMPLE_EXAMPLE_A);
    let mut b: CircularSamples = degrees(datasets::TWO_SAMPLE_EXAMPLE_B);

    let result: TestResult = watson_two_sample_u2_test()
        .data_a(&mut a)
        .data_b(&mut b)
        .significance(0.05)
        .call()
        .unwrap();

    assert_approx_eq!(result.statistic, 0.0427, 1.0e-4);
    assert_approx_eq!(result.critical_value, 0.1856, 0.02);
    assert!(!result.rejected);

    // the order of the samples does not change the result
    let swapped: TestResult = watson_two_sample_u2_test()
        .data_a(&mut b)
        .data_b(&mut a)
        .significance(0.05)
        .call()
        .unwrap();
    assert_approx_eq!(swapped.statistic, result.statistic, 1.0e-12);
    assert_eq!(swapped.critical_value, result.critical_value);
}

#[test]
fn two_sample_different_distributions() {
    let mut a: CircularSamples = degrees(&[
        0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 355.0,
    ]);
    let mut b: CircularSamples = degrees(&[
        170.0, 175.0, 180.0, 185.0, 190.0, 195.0, 200.0, 205.0, 210.0, 215.0, 220.0, 165.0,
    ]);

    let result: TestResult = watson_two_sample_u2_test()
        .data_a(&mut a)
        .data_b(&mut b)
        .significance(0.001)
        .call()
        .unwrap();

    assert!(result.rejected);
}

#[test]
fn two_sample_errors() {
    let mut a: CircularSamples = degrees(&[10.0]);
    let mut b: CircularSamples = degrees(datasets::TWO_SAMPLE_EXAMPLE_B);
    let r: Result<TestResult, TestError> = watson_two_sample_u2_test()
        .data_a(&mut a)
        .data_b(&mut b)
        .significance(0.05)
        .call();
    assert_eq!(r, Err(TestError::NotEnoughSamples));

    let mut a: CircularSamples = degrees(datasets::TWO_SAMPLE_EXAMPLE_A);
    let r: Result<TestResult, TestError> = watson_two_sample_u2_test()
        .data_a(&mut a)
        .data_b(&mut b)
        .significance(0.025)
        .call();
    assert_eq!(r, Err(TestError::InvalidSignificance));
}

#[test]
fn watson_williams_is_not_implemented() {
    let mut a: CircularSamples = degrees(datasets::TWO_SAMPLE_EXAMPLE_A);
    let mut b: CircularSamples = degrees(datasets::TWO_SAMPLE_EXAMPLE_B);
    let r: Result<TestResult, TestError> = watson_williams_test()
        .data_a(&mut a)
        .data_b(&mut b)
        .significance(0.05)
        .call();
    assert_eq!(r, Err(TestError::Unimplemented));
}

#[test]
fn rayleigh_example() {
    let mut data: CircularSamples = degrees(datasets::MEDIAN_EXAMPLE);

    let result: RayleighResult = rayleigh_test().data(&mut data).significance(0.01).call().unwrap();

    assert_approx_eq!(result.z, 4.5496, 1.0e-3);
    assert_approx_eq!(result.p, 0.007036, 1.0e-5);
    assert_eq!(result.rejected, Some(true));

    let only_p: RayleighResult = rayleigh_test().data(&mut data).call().unwrap();
    assert_eq!(only_p.rejected, None);
}

#[test]
fn rayleigh_of_uniform_data() {
    let spread: Vec<f64> = (0..12).map(|i| f64::from(i) * 30.0).collect::<Vec<f64>>();
    let mut data: CircularSamples = degrees(&spread);

    let result: RayleighResult = rayleigh_test().data(&mut data).significance(0.05).call().unwrap();

    assert_approx_eq!(result.z, 0.0, 1.0e-9);
    assert!(0.9 < result.p);
    assert_eq!(result.rejected, Some(false));
}

#[test]
fn uniform_samples_are_rarely_rejected() {
    // with alpha = 0.01 almost all the uniform samples must pass
    let mut rejections: u32 = 0;
    for _ in 0..50 {
        let sample: Vec<f64> = CIRCULAR_UNIFORM.sample_multiple(30);
        let mut data: CircularSamples = CircularSamples::from_radians(&sample).unwrap();
        let result: TestResult = watson_u2_test()
            .data(&mut data)
            .null(&CIRCULAR_UNIFORM)
            .significance(0.01)
            .call()
            .unwrap();
        if result.rejected {
            rejections += 1;
        }
    }

    assert!(rejections < 8);
}
