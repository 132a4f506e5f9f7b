//! Enum declarations and enum-typed values.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::{PrimitiveType, TypeRef};

/// Static description of an enum type.
///
/// Constants keep their declaration order. Raw values are stored as `i128`
/// so every underlying integral type fits without loss. Values are compared
/// by their bit pattern at the underlying width, so `-1` and `0xFFFF_FFFF`
/// name the same `Int32` constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumType {
    /// The enum's own type, handed to the type namer.
    pub ty: TypeRef,
    /// Underlying integral type (defaults to `Int32`).
    #[serde(default = "default_underlying")]
    pub underlying: PrimitiveType,
    /// Whether values are meant to be combined with bitwise OR.
    #[serde(default)]
    pub is_flags: bool,
    /// Named constants, in declaration order.
    #[serde(default)]
    pub constants: IndexMap<String, i128>,
}

fn default_underlying() -> PrimitiveType {
    PrimitiveType::Int32
}

impl EnumType {
    /// Create an empty, non-flags enum backed by `Int32`.
    pub fn new(ty: TypeRef) -> Self {
        Self {
            ty,
            underlying: default_underlying(),
            is_flags: false,
            constants: IndexMap::new(),
        }
    }

    /// Mark the enum as a flags enum.
    pub fn with_flags(mut self) -> Self {
        self.is_flags = true;
        self
    }

    /// Set the underlying integral type.
    pub fn with_underlying(mut self, underlying: PrimitiveType) -> Self {
        debug_assert!(underlying.is_integral(), "enum underlying type must be integral");
        self.underlying = underlying;
        self
    }

    /// Declare a named constant.
    ///
    /// Redeclaring a name replaces its value but keeps its position.
    pub fn constant(mut self, name: impl Into<String>, value: impl Into<i128>) -> Self {
        self.constants.insert(name.into(), value.into());
        self
    }

    /// Name of the first declared constant with the same bits as `raw`.
    pub fn name_of(&self, raw: i128) -> Option<&str> {
        let bits = self.bits(raw);
        self.constants
            .iter()
            .find(|(_, value)| self.bits(**value) == bits)
            .map(|(name, _)| name.as_str())
    }

    /// Two's-complement bit pattern of `raw`, truncated to the underlying width.
    pub fn bits(&self, raw: i128) -> u128 {
        match self.underlying.integral_bits() {
            Some(width) => raw as u128 & (u128::MAX >> (128 - width)),
            None => raw as u128,
        }
    }

    /// Reinterpret `raw` at the underlying width and signedness.
    ///
    /// `0xFFFF_FFFF` becomes `-1` for `Int32`; `-1` becomes `255` for `Byte`.
    pub fn normalize(&self, raw: i128) -> i128 {
        let bits = self.bits(raw);
        match self.underlying.integral_bits() {
            Some(width) if self.underlying.is_signed() => {
                let shift = 128 - width;
                ((bits << shift) as i128) >> shift
            }
            _ => bits as i128,
        }
    }

    /// Look up the value of a named constant.
    pub fn value_of(&self, name: &str) -> Option<i128> {
        self.constants.get(name).copied()
    }

    /// Wrap this declaration for sharing between values.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

/// A value of some enum type.
///
/// The raw value need not match a declared constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    /// The enum declaration this value belongs to.
    pub ty: Arc<EnumType>,
    /// Underlying integral value.
    pub raw: i128,
}

impl EnumValue {
    /// Create a value from a raw integral.
    pub fn new(ty: Arc<EnumType>, raw: impl Into<i128>) -> Self {
        Self {
            ty,
            raw: raw.into(),
        }
    }

    /// Create a value from a constant name, if declared.
    pub fn named(ty: Arc<EnumType>, name: &str) -> Option<Self> {
        let raw = ty.value_of(name)?;
        Some(Self { ty, raw })
    }
}
