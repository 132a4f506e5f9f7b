//! Default-value expressions.

use codelit_core::{StructValue, TypeRef};

use crate::language::TypeNamer;

/// `default(T)` for the given type.
pub fn default_expr<N: TypeNamer + ?Sized>(ty: &TypeRef, namer: &N) -> String {
    format!("default({})", namer.name_of(ty))
}

/// `default(T)` when every field of the struct is zero, `None` otherwise.
pub fn struct_default<N: TypeNamer + ?Sized>(value: &StructValue, namer: &N) -> Option<String> {
    value.is_zero().then(|| default_expr(&value.ty, namer))
}
