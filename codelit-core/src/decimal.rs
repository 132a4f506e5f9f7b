//! 96-bit fixed-point decimal values.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest number of fractional digits a decimal can carry.
pub const MAX_SCALE: u8 = 28;

const MAX_MANTISSA: i128 = (1 << 96) - 1;

/// Errors from building or parsing a [`Decimal`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalError {
    #[error("decimal scale {0} exceeds the maximum of 28")]
    ScaleOutOfRange(usize),
    #[error("decimal mantissa does not fit in 96 bits")]
    Overflow,
    #[error("invalid decimal literal '{0}'")]
    Invalid(String),
}

/// A base-10 fixed-point number: `mantissa / 10^scale`.
///
/// The scale is part of the value, so `1.5` and `1.50` are distinct and
/// print differently. The sign of zero is not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Decimal {
    mantissa: i128,
    scale: u8,
}

impl Decimal {
    /// Zero with no fractional digits.
    pub const ZERO: Decimal = Decimal {
        mantissa: 0,
        scale: 0,
    };

    /// Create a decimal from its raw parts.
    pub fn new(mantissa: i128, scale: u8) -> Result<Self, DecimalError> {
        if scale > MAX_SCALE {
            return Err(DecimalError::ScaleOutOfRange(usize::from(scale)));
        }
        if mantissa.unsigned_abs() > MAX_MANTISSA.unsigned_abs() {
            return Err(DecimalError::Overflow);
        }
        Ok(Self { mantissa, scale })
    }

    /// The unscaled integer value.
    pub fn mantissa(&self) -> i128 {
        self.mantissa
    }

    /// Number of digits after the decimal point.
    pub fn scale(&self) -> u8 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa == 0
    }

    pub fn is_negative(&self) -> bool {
        self.mantissa < 0
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let digits = self.mantissa.unsigned_abs().to_string();
        let scale = usize::from(self.scale);
        if scale == 0 {
            return write!(f, "{sign}{digits}");
        }

        let padded = format!("{digits:0>width$}", width = scale + 1);
        let (int, frac) = padded.split_at(padded.len() - scale);
        write!(f, "{sign}{int}.{frac}")
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DecimalError::Invalid(s.to_string());

        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let (int, frac) = body.split_once('.').unwrap_or((body, ""));
        if int.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if frac.len() > usize::from(MAX_SCALE) {
            return Err(DecimalError::ScaleOutOfRange(frac.len()));
        }

        let mut mantissa: i128 = 0;
        for b in int.bytes().chain(frac.bytes()) {
            mantissa = mantissa * 10 + i128::from(b - b'0');
            if mantissa > MAX_MANTISSA {
                return Err(DecimalError::Overflow);
            }
        }

        let scale = frac.len() as u8;
        Self::new(if negative { -mantissa } else { mantissa }, scale)
    }
}

impl TryFrom<String> for Decimal {
    type Error = DecimalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Decimal> for String {
    fn from(value: Decimal) -> Self {
        value.to_string()
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self {
            mantissa: i128::from(value),
            scale: 0,
        }
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Self {
            mantissa: i128::from(value),
            scale: 0,
        }
    }
}
