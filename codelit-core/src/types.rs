//! Language-agnostic type descriptors.
//!
//! A [`TypeRef`] is an opaque handle as far as the stringifier is concerned:
//! it is only ever passed to a type namer to obtain source text.

use serde::{Deserialize, Serialize};

/// A language-agnostic type reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    /// A built-in type (int, string, object, etc.).
    Primitive(PrimitiveType),
    /// A nullable value type (`int?`).
    Nullable(Box<TypeRef>),
    /// An array type with the given rank (`T[]`, `T[,]`).
    Array {
        /// Element type.
        element: Box<TypeRef>,
        /// Number of dimensions, at least 1.
        rank: u8,
    },
    /// A user-declared type, optionally generic.
    Named {
        /// Dotted namespace (e.g., "System.Collections.Generic").
        #[serde(default)]
        namespace: Option<String>,
        /// Simple name without generic arity (e.g., "List").
        name: String,
        /// Generic type arguments.
        #[serde(default)]
        args: Vec<TypeRef>,
    },
}

impl TypeRef {
    /// Create a primitive type reference.
    pub fn primitive(ty: PrimitiveType) -> Self {
        Self::Primitive(ty)
    }

    /// The universal object type.
    pub fn object() -> Self {
        Self::Primitive(PrimitiveType::Object)
    }

    /// Create a nullable type reference.
    pub fn nullable(inner: TypeRef) -> Self {
        Self::Nullable(Box::new(inner))
    }

    /// Create a single-dimensional array type.
    pub fn array(element: TypeRef) -> Self {
        Self::array_of_rank(element, 1)
    }

    /// Create an array type with `rank` dimensions.
    pub fn array_of_rank(element: TypeRef, rank: u8) -> Self {
        Self::Array {
            element: Box::new(element),
            rank: rank.max(1),
        }
    }

    /// Create a named type without a namespace.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            namespace: None,
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Create a named type inside a namespace.
    pub fn qualified(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Named {
            namespace: Some(namespace.into()),
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Attach generic arguments to a named type.
    ///
    /// Has no effect on other shapes.
    pub fn with_args(mut self, type_args: impl IntoIterator<Item = TypeRef>) -> Self {
        if let Self::Named { args, .. } = &mut self {
            args.extend(type_args);
        }
        self
    }

    /// Check if this is the universal object type.
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Primitive(PrimitiveType::Object))
    }
}

impl From<PrimitiveType> for TypeRef {
    fn from(ty: PrimitiveType) -> Self {
        Self::Primitive(ty)
    }
}

/// Built-in types with a dedicated keyword in most C-family languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveType {
    Object,
    String,
    Char,
    Bool,
    Byte,
    SByte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float32,
    Float64,
    Decimal,
    Void,
}

impl PrimitiveType {
    /// Get the canonical name of this primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::String => "string",
            Self::Char => "char",
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::SByte => "sbyte",
            Self::Int16 => "int16",
            Self::UInt16 => "uint16",
            Self::Int32 => "int32",
            Self::UInt32 => "uint32",
            Self::Int64 => "int64",
            Self::UInt64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Decimal => "decimal",
            Self::Void => "void",
        }
    }

    /// Width in bits of an integral type, `None` for every other type.
    pub fn integral_bits(&self) -> Option<u32> {
        match self {
            Self::Byte | Self::SByte => Some(8),
            Self::Int16 | Self::UInt16 => Some(16),
            Self::Int32 | Self::UInt32 => Some(32),
            Self::Int64 | Self::UInt64 => Some(64),
            _ => None,
        }
    }

    /// Check if this is one of the eight integral types.
    pub fn is_integral(&self) -> bool {
        self.integral_bits().is_some()
    }

    /// Check if this is a signed integral type.
    pub fn is_signed(&self) -> bool {
        matches!(self, Self::SByte | Self::Int16 | Self::Int32 | Self::Int64)
    }
}
