//! Render runtime values as C# literal code.
//!
//! The output is meant for diagnostics: assertion messages that show
//! "expected" and "actual" values as code a reader could paste back into a
//! test, rather than as opaque object dumps.
//!
//! # Module Organization
//!
//! - [`stringify`] - The value dispatcher and its formatters (numbers, strings, enums, defaults)
//! - [`language`] - Language-agnostic seams ([`TypeNamer`], [`NamingConvention`])
//! - [`csharp`] - C# type naming and reserved words
//! - [`options`] - [`StringifyOptions`] and loading them from TOML
//!
//! # Example
//!
//! ```
//! use codelit::{ObjectStringifier, PrimitiveType, Stringifier, TypeRef, Value};
//!
//! let stringifier: Stringifier = Stringifier::default();
//!
//! assert_eq!(stringifier.value_to_code(&Value::Float32(3.14), None).as_deref(), Some("3.14f"));
//! assert_eq!(stringifier.value_to_code(&Value::Byte(7), None).as_deref(), Some("((byte)7)"));
//!
//! let nullable_int = TypeRef::nullable(PrimitiveType::Int32.into());
//! assert_eq!(
//!     stringifier.value_to_code(&Value::Null, Some(&nullable_int)).as_deref(),
//!     Some("default(int?)")
//! );
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod csharp;
pub mod language;
pub mod options;
pub mod stringify;

pub use codelit_core::{
    Decimal, DecimalError, EnumType, EnumValue, Field, MethodRef, PrimitiveType, StructValue,
    TypeRef, Value,
};
pub use csharp::{CSHARP_NAMING, CSharpTypeNamer};
pub use language::{NamingConvention, TypeNamer};
pub use options::{Error, Result, StringifyOptions};
pub use stringify::{ObjectStringifier, Stringifier};
