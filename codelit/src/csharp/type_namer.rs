//! C# type namer implementation.

use codelit_core::PrimitiveType;

use super::CSHARP_NAMING;
use crate::language::TypeNamer;

/// C# type namer.
///
/// Built-in types use their keyword aliases (`int`, not `System.Int32`)
/// regardless of [`use_full_name`](Self::use_full_name), which only
/// controls namespace qualification of named types.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpTypeNamer {
    /// Prefix named types with their namespace.
    pub use_full_name: bool,
}

impl CSharpTypeNamer {
    /// Create a namer.
    pub fn new(use_full_name: bool) -> Self {
        Self { use_full_name }
    }
}

impl TypeNamer for CSharpTypeNamer {
    fn map_primitive(&self, ty: PrimitiveType) -> String {
        let keyword = match ty {
            PrimitiveType::Object => "object",
            PrimitiveType::String => "string",
            PrimitiveType::Char => "char",
            PrimitiveType::Bool => "bool",
            PrimitiveType::Byte => "byte",
            PrimitiveType::SByte => "sbyte",
            PrimitiveType::Int16 => "short",
            PrimitiveType::UInt16 => "ushort",
            PrimitiveType::Int32 => "int",
            PrimitiveType::UInt32 => "uint",
            PrimitiveType::Int64 => "long",
            PrimitiveType::UInt64 => "ulong",
            PrimitiveType::Float32 => "float",
            PrimitiveType::Float64 => "double",
            PrimitiveType::Decimal => "decimal",
            PrimitiveType::Void => "void",
        };
        keyword.to_string()
    }

    fn map_nullable(&self, inner: &str) -> String {
        format!("{}?", inner)
    }

    /// Rank specifiers read left to right from the outermost array, so an
    /// array of 2-D arrays is `int[][,]`.
    fn map_array(&self, element: &str, ranks: &[u8]) -> String {
        let mut out = element.to_string();
        for rank in ranks {
            out.push('[');
            out.push_str(&",".repeat(usize::from(rank.saturating_sub(1))));
            out.push(']');
        }
        out
    }

    fn map_named(&self, namespace: Option<&str>, name: &str, args: &[String]) -> String {
        let mut out = String::new();
        if let Some(ns) = namespace.filter(|_| self.use_full_name) {
            out.push_str(ns);
            out.push('.');
        }
        out.push_str(&CSHARP_NAMING.safe_name(name));
        if !args.is_empty() {
            out.push('<');
            out.push_str(&args.join(", "));
            out.push('>');
        }
        out
    }

    fn member_name(&self, name: &str) -> String {
        CSHARP_NAMING.safe_name(name)
    }
}
