//! # Angles
//!
//! Basic utilities to work with angles: the units, the conversions and the
//! distance between two directions.
//!
//! Every function of the library that receives angles also receives
//! (or has stored) an [AngleUnit]. Internally, all the computations are
//! done in radians.
//!
//! No canonical range is required for the input: `370º` and `10º` are the
//! same direction. When an algorithm needs it, the angles are wrapped with
//! [wrap_positive] (`[0, 2*pi)`) or [wrap_signed] (`[-pi, pi)`).

use std::f64::consts::{PI, TAU};

/// The unit used to express an angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[allow(clippy::exhaustive_enums)]
pub enum AngleUnit {
    /// A full turn is `2 * pi`.
    #[default]
    Radians,
    /// A full turn is `360`.
    Degrees,
}

impl AngleUnit {
    /// Returns the [AngleUnit] for the common `degrees: bool` flag.
    #[must_use]
    pub const fn from_degrees_flag(degrees: bool) -> Self {
        if degrees {
            return AngleUnit::Degrees;
        }
        return AngleUnit::Radians;
    }

    /// Converts the angle `x` (in this unit) to radians.
    #[must_use]
    pub fn to_radians(self, x: f64) -> f64 {
        return match self {
            AngleUnit::Radians => x,
            AngleUnit::Degrees => x.to_radians(),
        };
    }

    /// Converts the angle `x` (in radians) to this unit.
    #[must_use]
    pub fn from_radians(self, x: f64) -> f64 {
        return match self {
            AngleUnit::Radians => x,
            AngleUnit::Degrees => x.to_degrees(),
        };
    }

    /// The size of a full turn in this unit.
    #[must_use]
    pub const fn full_turn(self) -> f64 {
        return match self {
            AngleUnit::Radians => TAU,
            AngleUnit::Degrees => 360.0,
        };
    }
}

/// Wraps an angle (in radians) to the range `[0, 2*pi)`.
#[must_use]
pub fn wrap_positive(x: f64) -> f64 {
    let ret: f64 = x.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative values
    if ret >= TAU {
        return 0.0;
    }
    return ret;
}

/// Wraps an angle (in radians) to the range `[-pi, pi)`.
#[must_use]
pub fn wrap_signed(x: f64) -> f64 {
    return wrap_positive(x + PI) - PI;
}

/// The forward signed angular distance (in radians) from `a` to `b`.
///
/// Computed as `mod(b - a + pi, 2*pi) - pi`, so the result lays in `[-pi, pi)`.
/// A positive result means that `b` is reached from `a` rotating
/// counterclockwise (increasing angle).
///
/// ## Edge case
///
/// `cdist(a, b) == -cdist(b, a)` for any pair of directions except when they
/// are exactly opposite. At the branch point the sign is not defined and
/// both calls return `-pi`.
///
/// ```
/// use CircularStatistics::angles::cdist;
/// assert_eq!(cdist(0.0, 0.0), 0.0);
/// assert_eq!(cdist(0.0, 1.0), 1.0);
/// assert_eq!(cdist(0.0, -1.0), -1.0);
/// ```
#[must_use]
pub fn cdist(a: f64, b: f64) -> f64 {
    return (b - a + PI).rem_euclid(TAU) - PI;
}

/// The forward signed angular distance from `a` to `b`, both expressed
/// in `unit`. The result is in the same unit.
///
/// For degrees the result lays in `[-180, 180)`. See [cdist] for the details.
#[must_use]
pub fn angular_distance(a: f64, b: f64, unit: AngleUnit) -> f64 {
    let distance: f64 = cdist(unit.to_radians(a), unit.to_radians(b));
    return unit.from_radians(distance);
}
