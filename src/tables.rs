//! # Tables of critical values
//!
//! The null distributions of the statistics of the circular tests do not have a
//! simple closed form for finite samples, so the tests use tables of critical
//! values. There are 3 independent tables:
//!
//!  - [V-test](crate::hypothesis::v_test): [v_test_critical_value]
//!  - [Watson's U^2 goodness of fit test](crate::hypothesis::watson_u2_test): [watson_u2_critical_value]
//!  - [Watson's two sample U^2 test](crate::hypothesis::watson_two_sample_u2_test): [watson_two_sample_u2_critical_value]
//!
//! ## Lookup
//!
//! The lookup does **not** interpolate. The sample size is snapped to the nearest
//! tabulated sample size (the two sample table uses the smallest tabulated size
//! greater or equal to the smaller sample). The significance level must be one
//! of the tabulated values (within [SIGNIFICANCE_TOLERANCE]), otherwise
//! [TestError::InvalidSignificance] is returned.
//!
//! ## Sources of the values
//!
//!  - V-test: exact quantiles of `u = sqrt(2/n) * sum cos(x_i)` under uniformity,
//!     obtained by inverting the characteristic function `J_0(t)^n`. They
//!     reproduce the classic table (Zar, Biostatistical Analysis, table B.35).
//!  - Watson's U^2: for `n <= 20` the quantiles of the finite sample null
//!     distribution, for `30 <= n` the modified statistic of
//!     Stephens (1970): `U* = (U^2 - 0.1/n + 0.1/n^2) (1 + 0.8/n)`.
//!  - Watson's two sample U^2: quantiles of the permutation distribution of the
//!     statistic. The `(100, 100)` row holds the asymptotic values.
//!
//! The tables are immutable `static` data. They can be read from any thread.

use crate::{configuration::SIGNIFICANCE_TOLERANCE, errors::TestError};

/// The tabulated significance levels of the [V-test](crate::hypothesis::v_test).
pub static V_TEST_SIGNIFICANCE: [f64; 6] = [0.1, 0.05, 0.01, 0.005, 0.001, 0.0001];

/// The tabulated sample sizes of the [V-test](crate::hypothesis::v_test).
pub static V_TEST_SAMPLE_SIZES: [usize; 33] = [
    5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28,
    29, 30, 40, 50, 60, 70, 100, 500, 1000,
];

/// Critical values of the V-test. One row for each entry of [V_TEST_SAMPLE_SIZES]
/// and one column for each entry of [V_TEST_SIGNIFICANCE].
#[rustfmt::skip]
static V_TEST_TABLE: [[f64; 6]; 33] = [
    [1.3085, 1.6507, 2.2591, 2.4568, 2.7753, 3.0038], // 5
    [1.3000, 1.6526, 2.2613, 2.4728, 2.8514, 3.1682], // 6
    [1.2981, 1.6494, 2.2730, 2.4842, 2.8920, 3.2789], // 7
    [1.2959, 1.6492, 2.2809, 2.4978, 2.9162, 3.3526], // 8
    [1.2941, 1.6487, 2.2856, 2.5073, 2.9367, 3.4023], // 9
    [1.2929, 1.6482, 2.2899, 2.5142, 2.9538, 3.4375], // 10
    [1.2918, 1.6479, 2.2934, 2.5201, 2.9672, 3.4656], // 11
    [1.2909, 1.6476, 2.2962, 2.5250, 2.9781, 3.4890], // 12
    [1.2902, 1.6474, 2.2985, 2.5290, 2.9872, 3.5085], // 13
    [1.2895, 1.6472, 2.3006, 2.5325, 2.9950, 3.5249], // 14
    [1.2890, 1.6470, 2.3023, 2.5355, 3.0017, 3.5388], // 15
    [1.2885, 1.6469, 2.3039, 2.5381, 3.0075, 3.5509], // 16
    [1.2881, 1.6467, 2.3052, 2.5404, 3.0126, 3.5615], // 17
    [1.2877, 1.6466, 2.3064, 2.5424, 3.0171, 3.5708], // 18
    [1.2874, 1.6465, 2.3075, 2.5442, 3.0211, 3.5790], // 19
    [1.2871, 1.6464, 2.3085, 2.5458, 3.0247, 3.5864], // 20
    [1.2868, 1.6464, 2.3093, 2.5473, 3.0279, 3.5931], // 21
    [1.2866, 1.6463, 2.3101, 2.5486, 3.0308, 3.5991], // 22
    [1.2864, 1.6462, 2.3108, 2.5498, 3.0335, 3.6045], // 23
    [1.2862, 1.6462, 2.3115, 2.5509, 3.0359, 3.6095], // 24
    [1.2860, 1.6461, 2.3121, 2.5519, 3.0382, 3.6141], // 25
    [1.2858, 1.6461, 2.3127, 2.5529, 3.0402, 3.6183], // 26
    [1.2856, 1.6460, 2.3132, 2.5537, 3.0421, 3.6221], // 27
    [1.2855, 1.6460, 2.3136, 2.5546, 3.0439, 3.6257], // 28
    [1.2854, 1.6459, 2.3141, 2.5553, 3.0455, 3.6291], // 29
    [1.2852, 1.6459, 2.3145, 2.5560, 3.0470, 3.6322], // 30
    [1.2843, 1.6456, 2.3175, 2.5610, 3.0580, 3.6544], // 40
    [1.2837, 1.6455, 2.3193, 2.5640, 3.0646, 3.6675], // 50
    [1.2834, 1.6454, 2.3205, 2.5660, 3.0689, 3.6762], // 60
    [1.2831, 1.6453, 2.3213, 2.5674, 3.0720, 3.6823], // 70
    [1.2826, 1.6452, 2.3228, 2.5699, 3.0775, 3.6932], // 100
    [1.2818, 1.6449, 2.3256, 2.5746, 3.0875, 3.7122], // 500
    [1.2817, 1.6449, 2.3259, 2.5751, 3.0885, 3.7130], // 1000
];

/// The tabulated significance levels of [Watson's U^2 test](crate::hypothesis::watson_u2_test).
pub static WATSON_U2_SIGNIFICANCE: [f64; 5] = [0.1, 0.05, 0.025, 0.01, 0.005];

/// The tabulated sample sizes of [Watson's U^2 test](crate::hypothesis::watson_u2_test).
pub static WATSON_U2_SAMPLE_SIZES: [usize; 19] =
    [2, 3, 4, 5, 6, 7, 8, 9, 10, 12, 14, 16, 18, 20, 30, 40, 50, 100, 200];

/// Critical values of Watson's U^2 goodness of fit test. One row for each entry of
/// [WATSON_U2_SAMPLE_SIZES] and one column for each entry of [WATSON_U2_SIGNIFICANCE].
#[rustfmt::skip]
static WATSON_U2_TABLE: [[f64; 5]; 19] = [
    [0.1429, 0.1545, 0.1605, 0.1642, 0.1654], // 2
    [0.1469, 0.1731, 0.1937, 0.2132, 0.2236], // 3
    [0.1461, 0.1757, 0.2026, 0.2330, 0.2515], // 4
    [0.1481, 0.1775, 0.2054, 0.2406, 0.2640], // 5
    [0.1483, 0.1793, 0.2087, 0.2453, 0.2706], // 6
    [0.1488, 0.1803, 0.2105, 0.2485, 0.2759], // 7
    [0.1490, 0.1809, 0.2116, 0.2502, 0.2779], // 8
    [0.1495, 0.1818, 0.2132, 0.2536, 0.2829], // 9
    [0.1498, 0.1823, 0.2146, 0.2556, 0.2856], // 10
    [0.1502, 0.1830, 0.2154, 0.2573, 0.2874], // 12
    [0.1501, 0.1832, 0.2159, 0.2581, 0.2896], // 14
    [0.1506, 0.1840, 0.2171, 0.2606, 0.2922], // 16
    [0.1506, 0.1843, 0.2177, 0.2611, 0.2926], // 18
    [0.1509, 0.1848, 0.2184, 0.2615, 0.2942], // 20
    [0.1513, 0.1854, 0.2185, 0.2633, 0.2974], // 30
    [0.1515, 0.1858, 0.2191, 0.2642, 0.2985], // 40
    [0.1516, 0.1860, 0.2195, 0.2648, 0.2992], // 50
    [0.1518, 0.1865, 0.2202, 0.2659, 0.3006], // 100
    [0.1519, 0.1868, 0.2206, 0.2664, 0.3013], // 200
];

/// The tabulated significance levels of
/// [Watson's two sample U^2 test](crate::hypothesis::watson_two_sample_u2_test).
pub static TWO_SAMPLE_U2_SIGNIFICANCE: [f64; 4] = [0.1, 0.05, 0.01, 0.001];

/// The tabulated sizes of the **larger** sample of
/// [Watson's two sample U^2 test](crate::hypothesis::watson_two_sample_u2_test).
pub static TWO_SAMPLE_U2_LARGER_SIZES: [usize; 10] = [10, 12, 14, 16, 20, 25, 30, 40, 50, 100];

/// A row of the two sample table: the size of the smaller sample and the
/// critical values for each entry of [TWO_SAMPLE_U2_SIGNIFICANCE].
type TwoSampleRow = (usize, [f64; 4]);

/// The row used when the smaller sample is larger than every tabulated size.
/// These are the asymptotic critical values.
static TWO_SAMPLE_U2_LIMIT: TwoSampleRow = (100, [0.152, 0.187, 0.268, 0.385]);

/// Critical values of Watson's two sample U^2 test. One table of rows for each
/// entry of [TWO_SAMPLE_U2_LARGER_SIZES]. The rows are sorted by the size of the
/// smaller sample.
#[rustfmt::skip]
static TWO_SAMPLE_U2_TABLE: [&[TwoSampleRow]; 10] = [
    // 10
    &[
        (5, [0.1556, 0.1769, 0.2409, 0.2889]),
        (6, [0.1510, 0.1813, 0.2396, 0.3229]),
        (7, [0.1529, 0.1815, 0.2471, 0.3076]),
        (8, [0.1519, 0.1824, 0.2463, 0.3359]),
        (9, [0.1532, 0.1848, 0.2503, 0.3298]),
        (10, [0.1530, 0.1845, 0.2530, 0.3305]),
    ],
    // 12
    &[
        (6, [0.1543, 0.1798, 0.2384, 0.3426]),
        (8, [0.1542, 0.1849, 0.2521, 0.3354]),
        (10, [0.1534, 0.1848, 0.2545, 0.3424]),
        (12, [0.1525, 0.1849, 0.2543, 0.3461]),
    ],
    // 14
    &[
        (6, [0.1530, 0.1821, 0.2440, 0.3196]),
        (8, [0.1526, 0.1851, 0.2516, 0.3332]),
        (10, [0.1526, 0.1847, 0.2550, 0.3404]),
        (12, [0.1529, 0.1852, 0.2566, 0.3480]),
        (14, [0.1527, 0.1855, 0.2575, 0.3508]),
    ],
    // 16
    &[
        (6, [0.1520, 0.1823, 0.2467, 0.3144]),
        (8, [0.1532, 0.1845, 0.2522, 0.3368]),
        (10, [0.1529, 0.1849, 0.2541, 0.3385]),
        (12, [0.1533, 0.1851, 0.2567, 0.3503]),
        (14, [0.1528, 0.1851, 0.2581, 0.3522]),
        (16, [0.1519, 0.1844, 0.2573, 0.3535]),
    ],
    // 20
    &[
        (8, [0.1525, 0.1839, 0.2536, 0.3330]),
        (10, [0.1519, 0.1846, 0.2559, 0.3484]),
        (12, [0.1521, 0.1849, 0.2573, 0.3499]),
        (16, [0.1520, 0.1853, 0.2588, 0.3588]),
        (20, [0.1524, 0.1869, 0.2615, 0.3625]),
    ],
    // 25
    &[
        (10, [0.1520, 0.1845, 0.2560, 0.3502]),
        (15, [0.1524, 0.1850, 0.2578, 0.3550]),
        (20, [0.1525, 0.1858, 0.2612, 0.3649]),
        (25, [0.1522, 0.1860, 0.2621, 0.3674]),
    ],
    // 30
    &[
        (10, [0.1517, 0.1841, 0.2558, 0.3534]),
        (15, [0.1524, 0.1859, 0.2605, 0.3637]),
        (20, [0.1520, 0.1852, 0.2619, 0.3708]),
        (25, [0.1530, 0.1863, 0.2634, 0.3662]),
        (30, [0.1520, 0.1861, 0.2635, 0.3703]),
    ],
    // 40
    &[
        (10, [0.1505, 0.1830, 0.2570, 0.3495]),
        (20, [0.1510, 0.1852, 0.2621, 0.3683]),
        (30, [0.1523, 0.1863, 0.2629, 0.3717]),
        (40, [0.1518, 0.1865, 0.2628, 0.3730]),
    ],
    // 50
    &[
        (10, [0.1518, 0.1825, 0.2551, 0.3469]),
        (20, [0.1532, 0.1866, 0.2629, 0.3664]),
        (30, [0.1519, 0.1866, 0.2626, 0.3854]),
        (40, [0.1524, 0.1882, 0.2637, 0.3720]),
        (50, [0.1517, 0.1854, 0.2650, 0.3758]),
    ],
    // 100
    &[
        (20, [0.1514, 0.1842, 0.2589, 0.3578]),
        (50, [0.1517, 0.1853, 0.2612, 0.3615]),
        (100, [0.1520, 0.1870, 0.2680, 0.3850]),
    ],
];

/// Returns the index of the tabulated value nearest to `n` (absolute difference).
/// On a tie, the smaller tabulated value is chosen.
///
/// `tabulated` must be sorted in ascending order and not be empty.
fn nearest_index(tabulated: &[usize], n: usize) -> usize {
    let mut best: usize = 0;
    let mut best_distance: usize = usize::MAX;
    for (i, &t) in tabulated.iter().enumerate() {
        let distance: usize = t.abs_diff(n);
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }
    return best;
}

/// Returns the index of `alpha` in `tabulated`, allowing a difference of
/// [SIGNIFICANCE_TOLERANCE].
fn significance_index(tabulated: &[f64], alpha: f64) -> Result<usize, TestError> {
    if !alpha.is_finite() {
        return Err(TestError::InvalidSignificance);
    }

    let mut best: usize = 0;
    let mut best_distance: f64 = f64::INFINITY;
    for (i, &t) in tabulated.iter().enumerate() {
        let distance: f64 = (t - alpha).abs();
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }

    if SIGNIFICANCE_TOLERANCE < best_distance {
        return Err(TestError::InvalidSignificance);
    }
    return Ok(best);
}

/// Returns the critical value of the [V-test](crate::hypothesis::v_test) for a
/// sample of `n` angles and significance level `alpha`.
///
///  - `n` must be at least `5`, otherwise [TestError::NotEnoughSamples] is returned.
///     It is snapped to the nearest value of [V_TEST_SAMPLE_SIZES].
///  - `alpha` must be one of [V_TEST_SIGNIFICANCE], otherwise
///     [TestError::InvalidSignificance] is returned.
pub fn v_test_critical_value(n: usize, alpha: f64) -> Result<f64, TestError> {
    if n < V_TEST_SAMPLE_SIZES[0] {
        return Err(TestError::NotEnoughSamples);
    }

    let column: usize = significance_index(&V_TEST_SIGNIFICANCE, alpha)?;
    let row: usize = nearest_index(&V_TEST_SAMPLE_SIZES, n);
    log::trace!(
        "V-test table: n = {n} -> {}, alpha = {alpha} -> {}",
        V_TEST_SAMPLE_SIZES[row],
        V_TEST_SIGNIFICANCE[column]
    );

    return Ok(V_TEST_TABLE[row][column]);
}

/// Returns the critical value of [Watson's U^2 test](crate::hypothesis::watson_u2_test)
/// for a sample of `n` angles and significance level `alpha`.
///
///  - `n` must be at least `2`, otherwise [TestError::NotEnoughSamples] is returned.
///     It is snapped to the nearest value of [WATSON_U2_SAMPLE_SIZES].
///  - `alpha` must be one of [WATSON_U2_SIGNIFICANCE], otherwise
///     [TestError::InvalidSignificance] is returned.
pub fn watson_u2_critical_value(n: usize, alpha: f64) -> Result<f64, TestError> {
    if n < WATSON_U2_SAMPLE_SIZES[0] {
        return Err(TestError::NotEnoughSamples);
    }

    let column: usize = significance_index(&WATSON_U2_SIGNIFICANCE, alpha)?;
    let row: usize = nearest_index(&WATSON_U2_SAMPLE_SIZES, n);
    log::trace!(
        "Watson U2 table: n = {n} -> {}, alpha = {alpha} -> {}",
        WATSON_U2_SAMPLE_SIZES[row],
        WATSON_U2_SIGNIFICANCE[column]
    );

    return Ok(WATSON_U2_TABLE[row][column]);
}

/// Returns the critical value of [Watson's two sample U^2 test](crate::hypothesis::watson_two_sample_u2_test).
///
///  - `larger` is the size of the larger sample. It is snapped to the nearest
///     value of [TWO_SAMPLE_U2_LARGER_SIZES].
///  - `smaller` is the size of the smaller sample. The row used is the first one
///     (of the selected table) with a size greater or equal to `smaller`. If there
///     is none, the asymptotic row is used.
///  - `alpha` must be one of [TWO_SAMPLE_U2_SIGNIFICANCE], otherwise
///     [TestError::InvalidSignificance] is returned.
///
/// If `larger < smaller` they are swapped.
pub fn watson_two_sample_u2_critical_value(
    larger: usize,
    smaller: usize,
    alpha: f64,
) -> Result<f64, TestError> {
    let (larger, smaller): (usize, usize) = (larger.max(smaller), larger.min(smaller));
    let column: usize = significance_index(&TWO_SAMPLE_U2_SIGNIFICANCE, alpha)?;

    let bucket: usize = nearest_index(&TWO_SAMPLE_U2_LARGER_SIZES, larger);
    let rows: &[TwoSampleRow] = TWO_SAMPLE_U2_TABLE[bucket];

    let row: &TwoSampleRow = rows
        .iter()
        .find(|(size, _)| smaller <= *size)
        .unwrap_or(&TWO_SAMPLE_U2_LIMIT);

    log::trace!(
        "Watson two sample U2 table: (n1, n2) = ({larger}, {smaller}) -> ({}, {}), alpha = {alpha}",
        TWO_SAMPLE_U2_LARGER_SIZES[bucket],
        row.0
    );

    return Ok(row.1[column]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn tables_are_well_formed() {
        assert!(V_TEST_SAMPLE_SIZES.windows(2).all(|w| w[0] < w[1]));
        assert!(WATSON_U2_SAMPLE_SIZES.windows(2).all(|w| w[0] < w[1]));
        assert!(TWO_SAMPLE_U2_LARGER_SIZES.windows(2).all(|w| w[0] < w[1]));
        for rows in TWO_SAMPLE_U2_TABLE {
            assert!(!rows.is_empty());
            assert!(rows.windows(2).all(|w| w[0].0 < w[1].0));
        }

        // a smaller alpha always needs a more extreme statistic
        for row in V_TEST_TABLE {
            assert!(row.windows(2).all(|w| w[0] < w[1]));
        }
        for row in WATSON_U2_TABLE {
            assert!(row.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn nearest_prefers_the_smaller_on_ties() {
        assert_eq!(nearest_index(&[10, 12, 14], 13), 1);
        assert_eq!(nearest_index(&[10, 12, 14], 1), 0);
        assert_eq!(nearest_index(&[10, 12, 14], 1000), 2);
    }

    #[test]
    fn significance_must_be_tabulated() {
        assert_eq!(significance_index(&V_TEST_SIGNIFICANCE, 0.05), Ok(1));
        assert_eq!(significance_index(&V_TEST_SIGNIFICANCE, 0.05005), Ok(1));
        assert_eq!(
            significance_index(&V_TEST_SIGNIFICANCE, 0.02),
            Err(TestError::InvalidSignificance)
        );
        assert_eq!(
            significance_index(&V_TEST_SIGNIFICANCE, f64::NAN),
            Err(TestError::InvalidSignificance)
        );
    }

    #[test]
    fn two_sample_fallback_row() {
        // 1000 snaps to 100, and no row of that table is >= 500
        let v: f64 = watson_two_sample_u2_critical_value(1000, 500, 0.05).unwrap();
        assert_approx_eq!(v, TWO_SAMPLE_U2_LIMIT.1[1], 1.0e-12);

        // the order of the sizes does not matter
        let a: f64 = watson_two_sample_u2_critical_value(16, 10, 0.01).unwrap();
        let b: f64 = watson_two_sample_u2_critical_value(10, 16, 0.01).unwrap();
        assert_eq!(a, b);
    }
}
