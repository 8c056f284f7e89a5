#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::assign_op_pattern,
    clippy::excessive_precision
)]

#![warn(
    clippy::all,
    clippy::restriction,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
// ^Disable warning "crate `CircularStatistics` should have a snake case name convert the identifier to snake case: `circular_statistics`"
// The rest of the names will follow the snake_case convention.

//! # Circular Statistics
//!
//! This library provides descriptive statistics and hypothesis tests for
//! **circular data**: observations that are angles (compass directions, time
//! of the day, phases...). The ordinary (linear) mean of `359°` and `1°` is
//! `180°`, wich is obviously wrong. Here every computation is done on the circle.
//!
//! - [x] Angle utilities (units, wrapping, [signed angular distance](angles::angular_distance))
//! - [x] Summary statistics (mean direction, resultant length, variance, standard deviation, median)
//! - [x] Axial data (undirected lines, period of half a turn)
//! - [x] [Von Mises](distributions::VonMises) distribution (pdf, cdf, sampling, fitting)
//! - [x] Hypothesis tests with tables of critical values
//! - [ ] [Watson-Williams test](hypothesis::watson_williams_test)
//! - [x] Updated to rust 2024 version
//!
//! ## Samples
//!
//! Collected data can be stored in [CircularSamples](samples::CircularSamples),
//! wich also allows effitient computation of the common statistics. The computed
//! values are stored so asking for them twice is cheap.
//!
//! ```
//! use CircularStatistics::samples::CircularSamples;
//! use assert_approx_eq::assert_approx_eq;
//!
//! let mut data: CircularSamples = CircularSamples::from_degrees(&[350.0, 10.0]).unwrap();
//! assert_approx_eq!(data.mean(), 0.0, 1.0e-12);
//! ```
//!
//! ## Distributions
//!
//! We have defined the trait [Distribution](distribution_trait::Distribution).
//! The only requiered methods are:
//!  - [pdf](distribution_trait::Distribution::pdf): the pdf of the distribution.
//!  - [get_domain](distribution_trait::Distribution::get_domain): the [domain]
//!     of the pdf of the distribution (one full turn).
//!
//! Any distribution implementing the trait can be used as the null
//! distribution of [Watson's U^2 test](hypothesis::watson_u2_test).
//!
//!  - [x] [Von Mises distribution](distributions::VonMises) ([Wiki](https://en.wikipedia.org/wiki/Von_Mises_distribution))
//!  - [x] [Circular uniform distribution](distributions::CircularUniform) ([Wiki](https://en.wikipedia.org/wiki/Circular_uniform_distribution))
//!  - [ ] [Wrapped normal distribution]() ([Wiki](https://en.wikipedia.org/wiki/Wrapped_normal_distribution))
//!  - [ ] [Wrapped Cauchy distribution]() ([Wiki](https://en.wikipedia.org/wiki/Wrapped_Cauchy_distribution))
//!
//! ## Tests
//!
//!  - [x] [V-test](hypothesis::v_test) ([Wiki](https://en.wikipedia.org/wiki/Rayleigh_test))
//!  - [x] [Rayleigh test](hypothesis::rayleigh_test) ([Wiki](https://en.wikipedia.org/wiki/Rayleigh_test))
//!  - [x] [Watson's U^2 goodness of fit](hypothesis::watson_u2_test)
//!  - [x] [Watson's two sample U^2](hypothesis::watson_two_sample_u2_test)
//!  - [ ] [Watson-Williams test](hypothesis::watson_williams_test)
//!
//! The critical values of the tests can be found in [tables].
//!
//! ## Logging
//!
//! The library uses the [log](https://docs.rs/log) facade. No logger is
//! installed: use any implementation (`env_logger`, `simple_logger`...) to see
//! the messages.
//!
//! ***
//!

pub mod angles;
pub mod configuration;
pub mod datasets;
pub mod distribution_trait;
pub mod distributions;
pub mod domain;
pub mod errors;
pub mod euclid;
pub mod hypothesis;
pub mod samples;
pub mod tables;
