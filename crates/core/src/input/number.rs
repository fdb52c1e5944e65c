use std::{fmt, ops::Add};

use serde_json::Value;

use crate::Error;

/// A numeric sequence element: an integer or a float.
///
/// Addition stays integral while both operands are integers and the sum fits
/// in an `i64`; otherwise it is carried out in `f64`.
/// Equality is numeric, so `Int(3) == Float(3.0)`.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Returns the value as an `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(n) => n as f64,
            Self::Float(x) => x,
        }
    }
}

impl Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_add(b)
                .map_or_else(|| Self::Float(self.as_f64() + rhs.as_f64()), Self::Int),
            _ => Self::Float(self.as_f64() + rhs.as_f64()),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

/// Converts a JSON number, preferring the integral representation.
impl TryFrom<&Value> for Number {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Error> {
        value
            .as_i64()
            .map(Self::Int)
            .or_else(|| value.as_f64().map(Self::Float))
            .ok_or(Error::NotNumberType)
    }
}

/// Integers print bare; floats always carry a fractional part (`3.0`).
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
        }
    }
}
