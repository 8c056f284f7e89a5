use thiserror::Error;

/// Errors produced while building samples, computing circular summaries
/// or creating distributions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircStatError {
    /// There are no angles in the sample. Every circular summary needs at least one.
    #[error("There are no angles in the sample. ")]
    EmptySample,
    /// A NaN (Not a Number) was found in the input.
    #[error("A NaN (Not a Number) was found in the input. ")]
    NanErr,
    /// The a number did not fullfill the conditions of the function.
    /// Maybe it was infinite when it was not allowed or it was negative
    /// when the function only takes positive numbers (like `kappa`).
    #[error(
        "The a number did not fullfill the conditions of the function. Maybe it was infinite when it was not allowed or it was negative when the function only takes positive numbers. "
    )]
    InvalidNumber,
    /// No bisector of the data splits it in two equal halves.
    ///
    /// This usually means that the data is axial (period of half a turn)
    /// but was processed without setting the `axial` flag.
    #[error(
        "No median found: no direction splits the data in two equal halves. Is the data axial but the `axial` flag was not set? "
    )]
    NoMedianFound,
    /// All the angles of the sample are identical, so the sample has no spread
    /// and the concentration of a fitted distribution would be infinite.
    #[error("All the angles of the sample are identical. The concentration would be infinite. ")]
    DegenerateSample,
}

/// An enum that indicates what went wrong with the test.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestError {
    /// A NaN (Not a Number) was found in the input. (Or maybe `+- inf` depending on the function)
    #[error(
        "A NaN (Not a Number) was found in the input. (Or maybe `+- inf` depending on the function)"
    )]
    NanErr,
    /// There were not enough samples to do the operation. Most tests
    /// have a minimum sample size given by their table of critical values.
    #[error("There were not enough samples to do the operation. ")]
    NotEnoughSamples,
    /// The arguments violated some of the function preconditions.
    #[error("The arguments violated some of the function preconditions. ")]
    InvalidArguments,
    /// The significance level was set to an invalid value. It must be in
    /// `(0.0, 1.0)` **and** be one of the values tabulated for the test.
    #[error(
        "The significance level was set to an invalid value. It must be in (0.0, 1.0) and be tabulated for the test. "
    )]
    InvalidSignificance,
    /// A computation needed by the test did not produce a result
    /// (for example, no median was found).
    #[error("A computation needed by the test could not produce a result: {0}")]
    DegenerateResult(CircStatError),
    /// An internal invariant of the algorithm was broken. This is a bug
    /// in the library, not a problem with the input.
    #[error("An internal invariant was broken ({0}). This is a bug. ")]
    InternalInvariant(&'static str),
    /// The test exists on the interface but has not been implemented yet.
    #[error("Unimplemented test")]
    Unimplemented,
}

impl From<CircStatError> for TestError {
    fn from(value: CircStatError) -> Self {
        return match value {
            CircStatError::EmptySample => TestError::NotEnoughSamples,
            CircStatError::NanErr => TestError::NanErr,
            CircStatError::InvalidNumber => TestError::InvalidArguments,
            CircStatError::NoMedianFound | CircStatError::DegenerateSample => {
                TestError::DegenerateResult(value)
            }
        };
    }
}
