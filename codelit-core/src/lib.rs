//! Core value model for the codelit literal generator.
//!
//! This crate provides the language-agnostic description of runtime values
//! and the types they belong to. The `codelit` crate turns these into source
//! code literals.
//!
//! # Module Organization
//!
//! - [`Value`] - Closed set of value kinds accepted by the stringifier
//! - [`TypeRef`] - Type descriptors handed to a type namer
//! - [`EnumType`], [`EnumValue`] - Enum declarations and values
//! - [`Decimal`] - 96-bit fixed-point decimal with an exact text form

mod decimal;
mod enums;
mod types;
mod value;

pub use decimal::{Decimal, DecimalError};
pub use enums::{EnumType, EnumValue};
pub use types::{PrimitiveType, TypeRef};
pub use value::{Field, MethodRef, StructValue, Value};
