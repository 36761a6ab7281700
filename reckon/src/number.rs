use std::fmt;
use std::ops::{Add, Mul, Sub};

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

/// A numeric input or result value.
///
/// Calculations distinguish integers from floats so that integral results
/// stay integer-typed: `27 % 6 % 4` is `3`, not `3.0`. Arithmetic between
/// two `Int` values stays `Int` wherever the operation is exact; a `Float`
/// operand promotes the result to `Float`, as does integer overflow.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(untagged))]
pub enum Number {
    /// A 64-bit integer.
    Int(i64),
    /// A double-precision float.
    Float(f64),
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl Number {
    /// Converts the value to an `f64`.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(n) => n as f64,
            Self::Float(f) => f,
        }
    }

    /// Returns `true` unless the value is a NaN or infinite float.
    pub fn is_finite(self) -> bool {
        match self {
            Self::Int(_) => true,
            Self::Float(f) => f.is_finite(),
        }
    }

    /// Returns `true` if the value is numerically zero.
    #[allow(clippy::float_cmp)]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(n) => n == 0,
            Self::Float(f) => f == 0.0,
        }
    }

    /// Returns `true` if the value is strictly negative.
    pub(crate) fn is_negative(self) -> bool {
        match self {
            Self::Int(n) => n < 0,
            Self::Float(f) => f < 0.0,
        }
    }

    /// Returns `true` for even integral values, whether stored as `Int` or
    /// as a fractionless `Float` (`2.0` is even, `2.5` is not).
    #[allow(clippy::float_cmp)]
    pub(crate) fn is_even_integer(self) -> bool {
        match self {
            Self::Int(n) => n % 2 == 0,
            Self::Float(f) => f % 2.0 == 0.0,
        }
    }

    /// Divides by `rhs`. Division always yields a `Float`.
    ///
    /// Callers must reject a zero `rhs` first.
    pub fn div(self, rhs: Self) -> Self {
        Self::Float(self.as_f64() / rhs.as_f64())
    }

    /// Remainder after division by `rhs`, with the sign of the dividend.
    ///
    /// Callers must reject a zero `rhs` first.
    pub fn rem(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_rem(b)
                .map_or_else(|| Self::Float(a as f64 % b as f64), Self::Int),
            (a, b) => Self::Float(a.as_f64() % b.as_f64()),
        }
    }

    /// Raises the value to the power `exp`.
    ///
    /// An `Int` base with a non-negative `Int` exponent stays `Int`; every
    /// other combination, including a negative exponent, yields a `Float`.
    pub fn pow(self, exp: Self) -> Self {
        match (self, exp) {
            (Self::Int(base), Self::Int(e)) if e >= 0 => u32::try_from(e)
                .ok()
                .and_then(|exp32| base.checked_pow(exp32))
                .map_or_else(|| Self::Float((base as f64).powf(e as f64)), Self::Int),
            (base, e) => Self::Float(base.as_f64().powf(e.as_f64())),
        }
    }

    /// Takes the root of the given degree: `self^(1/degree)`.
    ///
    /// Callers must reject a zero `degree` first.
    pub fn root(self, degree: Self) -> Self {
        Self::Float(self.as_f64().powf(degree.as_f64().recip()))
    }
}

impl Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_add(b)
                .map_or_else(|| Self::Float(a as f64 + b as f64), Self::Int),
            (a, b) => Self::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl Sub for Number {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_sub(b)
                .map_or_else(|| Self::Float(a as f64 - b as f64), Self::Int),
            (a, b) => Self::Float(a.as_f64() - b.as_f64()),
        }
    }
}

impl Mul for Number {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_mul(b)
                .map_or_else(|| Self::Float(a as f64 * b as f64), Self::Int),
            (a, b) => Self::Float(a.as_f64() * b.as_f64()),
        }
    }
}

/// Numeric equality across variants: `Int(10) == Float(10.0)`.
#[allow(clippy::float_cmp)]
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(a), Self::Float(b)) | (Self::Float(b), Self::Int(a)) => a as f64 == b,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}
