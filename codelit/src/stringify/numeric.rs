//! Numeric literal formatting.
//!
//! Every literal produced here parses back to the exact value it came from,
//! and is independent of locale: `.` is the only separator ever emitted.

use std::fmt;

use codelit_core::{Decimal, PrimitiveType};

use crate::language::TypeNamer;

/// Above this magnitude `double` literals switch to scientific notation.
const FLOAT64_SCIENTIFIC_ABOVE: f64 = u32::MAX as f64;

/// From this magnitude (2^24) `float` literals switch to scientific notation.
const FLOAT32_SCIENTIFIC_FROM: f32 = 16_777_216.0;

/// Non-zero values below this magnitude use scientific notation too.
const SCIENTIFIC_BELOW: f64 = 1e-4;

/// A floating-point value classified for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FloatLiteral {
    NaN,
    PositiveInfinity,
    NegativeInfinity,
    /// Round-trip digits, always with a fractional part.
    Finite(String),
}

impl FloatLiteral {
    /// Classify and format a 64-bit float.
    pub fn from_f64(v: f64) -> Self {
        if v.is_nan() {
            Self::NaN
        } else if v == f64::INFINITY {
            Self::PositiveInfinity
        } else if v == f64::NEG_INFINITY {
            Self::NegativeInfinity
        } else if v.abs() > FLOAT64_SCIENTIFIC_ABOVE || is_tiny(v) {
            Self::Finite(scientific(format!("{:e}", v)))
        } else {
            Self::Finite(fixed(v.to_string()))
        }
    }

    /// Classify and format a 32-bit float.
    pub fn from_f32(v: f32) -> Self {
        if v.is_nan() {
            Self::NaN
        } else if v == f32::INFINITY {
            Self::PositiveInfinity
        } else if v == f32::NEG_INFINITY {
            Self::NegativeInfinity
        } else if v.abs() >= FLOAT32_SCIENTIFIC_FROM || is_tiny(f64::from(v)) {
            Self::Finite(scientific(format!("{:e}", v)))
        } else {
            Self::Finite(fixed(v.to_string()))
        }
    }

    /// Render as code: special values as `<type_name>.<Constant>`, finite
    /// values as digits followed by `suffix`.
    pub fn render(&self, type_name: &str, suffix: &str) -> String {
        match self {
            Self::NaN => format!("{}.NaN", type_name),
            Self::PositiveInfinity => format!("{}.PositiveInfinity", type_name),
            Self::NegativeInfinity => format!("{}.NegativeInfinity", type_name),
            Self::Finite(digits) => format!("{}{}", digits, suffix),
        }
    }
}

fn is_tiny(v: f64) -> bool {
    v != 0.0 && v.abs() < SCIENTIFIC_BELOW
}

/// Shortest round-trip digits never use an exponent in `Display`; make sure
/// a fractional part is present so the literal reads as floating point.
fn fixed(mut text: String) -> String {
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// `LowerExp` output is `<mantissa>e<exp>`; the mantissa gets a fractional
/// part when it has none (`1e20` -> `1.0e20`).
fn scientific(text: String) -> String {
    match text.split_once('e') {
        Some((mantissa, exp)) if !mantissa.contains('.') => format!("{}.0e{}", mantissa, exp),
        _ => text,
    }
}

/// Render a `double`.
pub fn float64_literal<N: TypeNamer + ?Sized>(v: f64, namer: &N) -> String {
    FloatLiteral::from_f64(v).render(&namer.map_primitive(PrimitiveType::Float64), "")
}

/// Render a `float`, with the `f` suffix on finite values.
pub fn float32_literal<N: TypeNamer + ?Sized>(v: f32, namer: &N) -> String {
    FloatLiteral::from_f32(v).render(&namer.map_primitive(PrimitiveType::Float32), "f")
}

/// Render a `decimal`, keeping its scale.
pub fn decimal_literal(v: &Decimal) -> String {
    format!("{}m", v)
}

/// Render an integral so that it compiles to exactly `ty`.
///
/// `int` is what an unadorned literal infers to. Wider and unsigned types
/// take a suffix; types narrower than `int` have no suffix and get a cast.
pub fn integral_literal<N: TypeNamer + ?Sized>(
    ty: PrimitiveType,
    digits: impl fmt::Display,
    namer: &N,
) -> String {
    match ty {
        PrimitiveType::Byte
        | PrimitiveType::SByte
        | PrimitiveType::Int16
        | PrimitiveType::UInt16 => format!("(({}){})", namer.map_primitive(ty), digits),
        PrimitiveType::UInt32 => format!("{}U", digits),
        PrimitiveType::Int64 => format!("{}L", digits),
        PrimitiveType::UInt64 => format!("{}UL", digits),
        _ => digits.to_string(),
    }
}
