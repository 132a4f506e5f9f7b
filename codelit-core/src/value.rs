//! Runtime values accepted by the stringifier.

use serde::{Deserialize, Serialize};

use crate::{decimal::Decimal, enums::EnumValue, types::TypeRef};

/// A runtime value, classified into exactly one kind.
///
/// Each kind has a single literal rendering rule. Values that cannot be
/// expressed as a literal use [`Value::Unsupported`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// The null reference.
    Null,
    String(String),
    Char(char),
    Decimal(Decimal),
    Float32(f32),
    Float64(f64),
    Byte(u8),
    SByte(i8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Bool(bool),
    Enum(EnumValue),
    /// A reference to a type itself (`typeof(T)`).
    Type(TypeRef),
    /// A reference to a method group (`T.Method`).
    Method(MethodRef),
    /// Any other value type, described by its fields.
    Struct(StructValue),
    /// A value with no literal form.
    Unsupported {
        /// Name of the value's runtime type, for diagnostics only.
        type_name: String,
    },
}

impl Value {
    /// Create a string value.
    pub fn string(v: impl Into<String>) -> Self {
        Self::String(v.into())
    }

    /// Create an unsupported value.
    pub fn unsupported(type_name: impl Into<String>) -> Self {
        Self::Unsupported {
            type_name: type_name.into(),
        }
    }

    /// Short name of the value's kind, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::String(_) => "string",
            Self::Char(_) => "char",
            Self::Decimal(_) => "decimal",
            Self::Float32(_) => "float32",
            Self::Float64(_) => "float64",
            Self::Byte(_) => "byte",
            Self::SByte(_) => "sbyte",
            Self::Int16(_) => "int16",
            Self::UInt16(_) => "uint16",
            Self::Int32(_) => "int32",
            Self::UInt32(_) => "uint32",
            Self::Int64(_) => "int64",
            Self::UInt64(_) => "uint64",
            Self::Bool(_) => "bool",
            Self::Enum(_) => "enum",
            Self::Type(_) => "type",
            Self::Method(_) => "method",
            Self::Struct(_) => "struct",
            Self::Unsupported { .. } => "unsupported",
        }
    }

    /// Check whether this value equals the zero-initialized value of its kind.
    ///
    /// Both signed zeros count as zero. Strings, type and method references
    /// are non-null references and never zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Char(c) => *c == '\0',
            Self::Decimal(d) => d.is_zero(),
            Self::Float32(v) => *v == 0.0,
            Self::Float64(v) => *v == 0.0,
            Self::Byte(v) => *v == 0,
            Self::SByte(v) => *v == 0,
            Self::Int16(v) => *v == 0,
            Self::UInt16(v) => *v == 0,
            Self::Int32(v) => *v == 0,
            Self::UInt32(v) => *v == 0,
            Self::Int64(v) => *v == 0,
            Self::UInt64(v) => *v == 0,
            Self::Bool(v) => !*v,
            Self::Enum(e) => e.ty.bits(e.raw) == 0,
            Self::Struct(s) => s.is_zero(),
            Self::String(_) | Self::Type(_) | Self::Method(_) | Self::Unsupported { .. } => false,
        }
    }
}

/// A reference to a method on a declaring type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRef {
    /// Type that declares the method.
    pub declaring_type: TypeRef,
    /// Method name.
    pub name: String,
}

impl MethodRef {
    pub fn new(declaring_type: TypeRef, name: impl Into<String>) -> Self {
        Self {
            declaring_type,
            name: name.into(),
        }
    }
}

/// A named field of a [`StructValue`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: Value,
}

/// A value-type instance described by its runtime type and fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructValue {
    /// Runtime type of the instance.
    pub ty: TypeRef,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl StructValue {
    /// Create an instance with no fields.
    pub fn new(ty: TypeRef) -> Self {
        Self {
            ty,
            fields: Vec::new(),
        }
    }

    /// Add a field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Check whether every field holds its zero value.
    ///
    /// A struct without fields is trivially zero.
    pub fn is_zero(&self) -> bool {
        self.fields.iter().all(|f| f.value.is_zero())
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from! {
    String => String,
    char => Char,
    Decimal => Decimal,
    f32 => Float32,
    f64 => Float64,
    u8 => Byte,
    i8 => SByte,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    bool => Bool,
    EnumValue => Enum,
    TypeRef => Type,
    MethodRef => Method,
    StructValue => Struct,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
