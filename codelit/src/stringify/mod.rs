//! Value to literal-code conversion.
//!
//! [`Stringifier`] classifies a [`Value`] by kind and hands it to one of the
//! formatters in this module:
//! - [`numeric`] - Integral, decimal and floating-point literals
//! - [`escape`] - String and char literals, verbatim-string policy
//! - [`enums`] - Named constants, flag combinations and numeric casts
//! - [`defaults`] - `default(T)` expressions
//!
//! A value with no literal form yields `None` so the caller can fall back to
//! some other representation.

pub mod defaults;
pub mod enums;
pub mod escape;
pub mod numeric;

use codelit_core::{PrimitiveType, TypeRef, Value};
use tracing::debug;

use crate::{csharp::CSharpTypeNamer, language::TypeNamer, options::StringifyOptions};

/// Trait for turning values into literal code.
pub trait ObjectStringifier {
    /// Render a type as source text.
    fn type_name_to_code(&self, ty: &TypeRef) -> String;

    /// Render a value as a single self-contained expression.
    ///
    /// `declared` is the static type the value was observed through; it only
    /// matters for null. Returns `None` when the value has no literal form.
    fn value_to_code(&self, value: &Value, declared: Option<&TypeRef>) -> Option<String>;
}

/// The literal-code stringifier.
///
/// Holds no mutable state; one instance can be shared freely between threads
/// as long as its namer can.
///
/// # Example
///
/// ```
/// use codelit::{ObjectStringifier, Stringifier, StringifyOptions, Value};
///
/// let stringifier = Stringifier::csharp(StringifyOptions::default());
/// assert_eq!(stringifier.value_to_code(&Value::UInt64(5), None).as_deref(), Some("5UL"));
/// assert_eq!(stringifier.value_to_code(&Value::unsupported("Stream"), None), None);
/// ```
#[derive(Debug, Clone)]
pub struct Stringifier<N = CSharpTypeNamer> {
    namer: N,
    options: StringifyOptions,
}

impl Stringifier<CSharpTypeNamer> {
    /// Create a C# stringifier.
    pub fn csharp(options: StringifyOptions) -> Self {
        Self {
            namer: CSharpTypeNamer::new(options.full_type_names),
            options,
        }
    }
}

impl Default for Stringifier<CSharpTypeNamer> {
    fn default() -> Self {
        Self::csharp(StringifyOptions::default())
    }
}

impl<N: TypeNamer> Stringifier<N> {
    /// Create a stringifier around a custom namer.
    ///
    /// `options.full_type_names` is left to the namer to honour.
    pub fn with_namer(namer: N, options: StringifyOptions) -> Self {
        Self { namer, options }
    }

    fn integral(&self, ty: PrimitiveType, digits: impl std::fmt::Display) -> String {
        numeric::integral_literal(ty, digits, &self.namer)
    }
}

impl<N: TypeNamer> ObjectStringifier for Stringifier<N> {
    fn type_name_to_code(&self, ty: &TypeRef) -> String {
        self.namer.name_of(ty)
    }

    fn value_to_code(&self, value: &Value, declared: Option<&TypeRef>) -> Option<String> {
        let code = match value {
            Value::Null => match declared {
                Some(ty) if !ty.is_object() => defaults::default_expr(ty, &self.namer),
                _ => "null".to_string(),
            },
            Value::String(s) => escape::string_literal(s, self.options.verbatim_threshold),
            Value::Char(c) => match escape::char_literal(*c) {
                Some(code) => code,
                None => {
                    debug!(
                        kind = value.kind(),
                        code_point = u32::from(*c),
                        "char does not fit one UTF-16 unit"
                    );
                    return None;
                }
            },
            Value::Decimal(v) => numeric::decimal_literal(v),
            Value::Float32(v) => numeric::float32_literal(*v, &self.namer),
            Value::Float64(v) => numeric::float64_literal(*v, &self.namer),
            Value::Byte(v) => self.integral(PrimitiveType::Byte, v),
            Value::SByte(v) => self.integral(PrimitiveType::SByte, v),
            Value::Int16(v) => self.integral(PrimitiveType::Int16, v),
            Value::UInt16(v) => self.integral(PrimitiveType::UInt16, v),
            Value::Int32(v) => self.integral(PrimitiveType::Int32, v),
            Value::UInt32(v) => self.integral(PrimitiveType::UInt32, v),
            Value::Int64(v) => self.integral(PrimitiveType::Int64, v),
            Value::UInt64(v) => self.integral(PrimitiveType::UInt64, v),
            Value::Bool(v) => v.to_string(),
            Value::Enum(v) => enums::enum_literal(v, &self.namer),
            Value::Type(ty) => format!("typeof({})", self.namer.name_of(ty)),
            Value::Method(m) => format!(
                "{}.{}",
                self.namer.name_of(&m.declaring_type),
                self.namer.member_name(&m.name)
            ),
            Value::Struct(s) => match defaults::struct_default(s, &self.namer) {
                Some(code) => code,
                None => {
                    debug!(kind = value.kind(), "non-default struct has no literal form");
                    return None;
                }
            },
            Value::Unsupported { type_name } => {
                debug!(kind = value.kind(), type_name = %type_name, "value has no literal form");
                return None;
            }
        };
        Some(code)
    }
}

#[cfg(test)]
mod tests {
    use codelit_core::{Decimal, EnumType, EnumValue, MethodRef, StructValue};

    use super::*;

    fn code(value: impl Into<Value>) -> Option<String> {
        let s: Stringifier = Stringifier::default();
        s.value_to_code(&value.into(), None)
    }

    #[test]
    fn test_null_handling() {
        let s: Stringifier = Stringifier::default();
        let int = TypeRef::primitive(PrimitiveType::Int32);

        assert_eq!(s.value_to_code(&Value::Null, None).as_deref(), Some("null"));
        assert_eq!(
            s.value_to_code(&Value::Null, Some(&TypeRef::object())).as_deref(),
            Some("null")
        );
        assert_eq!(
            s.value_to_code(&Value::Null, Some(&TypeRef::nullable(int)))
                .as_deref(),
            Some("default(int?)")
        );
        assert_eq!(
            s.value_to_code(&Value::Null, Some(&TypeRef::primitive(PrimitiveType::String)))
                .as_deref(),
            Some("default(string)")
        );
    }

    #[test]
    fn test_primitive_kinds() {
        assert_eq!(code("abc").as_deref(), Some("\"abc\""));
        assert_eq!(code('\n').as_deref(), Some("'\\n'"));
        assert_eq!(code(true).as_deref(), Some("true"));
        assert_eq!(code(false).as_deref(), Some("false"));
        assert_eq!(code(7u8).as_deref(), Some("((byte)7)"));
        assert_eq!(code(-3i16).as_deref(), Some("((short)-3)"));
        assert_eq!(code(42).as_deref(), Some("42"));
        assert_eq!(code(42u32).as_deref(), Some("42U"));
        assert_eq!(code(-42i64).as_deref(), Some("-42L"));
        assert_eq!(code(42u64).as_deref(), Some("42UL"));
        assert_eq!(code(2.75f32).as_deref(), Some("2.75f"));
        assert_eq!(code(f64::NAN).as_deref(), Some("double.NaN"));
        assert_eq!(
            code(Decimal::new(12345, 3).unwrap()).as_deref(),
            Some("12.345m")
        );
    }

    #[test]
    fn test_supplementary_char_has_no_literal() {
        assert_eq!(code('\u{1F980}'), None);
        assert_eq!(code('\u{10000}'), None);
        assert_eq!(code('\u{FFFF}').as_deref(), Some("'\u{FFFF}'"));
        assert_eq!(code("crab \u{1F980}").as_deref(), Some("\"crab \u{1F980}\""));
    }

    #[test]
    fn test_type_and_method_references() {
        let list = TypeRef::qualified("System.Collections.Generic", "List")
            .with_args([PrimitiveType::String.into()]);
        assert_eq!(code(list).as_deref(), Some("typeof(List<string>)"));

        let method = MethodRef::new(TypeRef::qualified("System", "Math"), "Max");
        assert_eq!(code(method).as_deref(), Some("Math.Max"));

        let keyword = MethodRef::new(TypeRef::named("Ops"), "operator");
        assert_eq!(code(keyword).as_deref(), Some("Ops.@operator"));
    }

    #[test]
    fn test_enum_dispatch() {
        let ty = EnumType::new(TypeRef::named("Color"))
            .constant("Red", 1)
            .into_shared();
        assert_eq!(code(EnumValue::new(ty, 1)).as_deref(), Some("Color.Red"));
    }

    #[test]
    fn test_struct_default_detection() {
        let point = |x: i32, y: i32| {
            StructValue::new(TypeRef::named("Point"))
                .field("x", x)
                .field("y", y)
        };
        assert_eq!(code(point(0, 0)).as_deref(), Some("default(Point)"));
        assert_eq!(code(point(1, 0)), None);
    }

    #[test]
    fn test_unsupported() {
        assert_eq!(code(Value::unsupported("System.IO.Stream")), None);
    }

    #[test]
    fn test_runtime_kind_wins_over_declared_type() {
        let s: Stringifier = Stringifier::default();
        let declared = TypeRef::primitive(PrimitiveType::Int64);
        assert_eq!(
            s.value_to_code(&Value::Int32(5), Some(&declared)).as_deref(),
            Some("5")
        );
    }

    #[test]
    fn test_full_type_names_option() {
        let s = Stringifier::csharp(StringifyOptions::default().with_full_type_names(true));
        let guid = TypeRef::qualified("System", "Guid");
        assert_eq!(s.type_name_to_code(&guid), "System.Guid");
        assert_eq!(
            s.value_to_code(&Value::Null, Some(&guid)).as_deref(),
            Some("default(System.Guid)")
        );
    }

    #[test]
    fn test_verbatim_threshold_option() {
        let s = Stringifier::csharp(StringifyOptions::default().with_verbatim_threshold(0));
        assert_eq!(
            s.value_to_code(&Value::string("a\\b"), None).as_deref(),
            Some("@\"a\\b\"")
        );
    }

    #[test]
    fn test_custom_namer_by_reference() {
        let namer = CSharpTypeNamer::new(true);
        let s = Stringifier::with_namer(&namer, StringifyOptions::default());
        assert_eq!(
            s.value_to_code(&Value::Type(TypeRef::qualified("System", "Uri")), None)
                .as_deref(),
            Some("typeof(System.Uri)")
        );
    }

    #[test]
    fn test_stringifier_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Stringifier>();
    }
}
