//! Enum value rendering.

use std::cmp::Reverse;

use codelit_core::{EnumType, EnumValue};
use tracing::trace;

use crate::language::TypeNamer;

/// Split a flags value into the named constants that cover it exactly.
///
/// Constants are tried from the largest value down, each one taken when all
/// of its bits are still uncovered. Values compare as unsigned bit patterns
/// at the underlying width, so negative constants (high bit set) are tried
/// first. Returns `None` when the enum is not a flags enum or bits remain
/// that no constant covers; otherwise the names in ascending value order.
/// A zero value yields an empty list.
pub fn decompose_flags(ty: &EnumType, raw: i128) -> Option<Vec<&str>> {
    if !ty.is_flags {
        return None;
    }

    let mut candidates: Vec<(&str, u128)> = ty
        .constants
        .iter()
        .map(|(name, value)| (name.as_str(), ty.bits(*value)))
        .filter(|&(_, bits)| bits != 0)
        .collect();
    candidates.sort_by_key(|&(_, bits)| Reverse(bits));

    let mut remaining = ty.bits(raw);
    let mut taken = Vec::new();
    for (name, bits) in candidates {
        if remaining & bits == bits {
            remaining &= !bits;
            taken.push(name);
        }
    }

    if remaining != 0 {
        return None;
    }
    taken.reverse();
    Some(taken)
}

/// Render an enum value.
///
/// - a declared constant: `Type.Name`
/// - an exact combination of flags: `Type.A` or `(Type.A | Type.B)`
/// - anything else, including zero with no zero constant: `((Type)N)`
///
/// The raw value is first reinterpreted at the underlying width, so the cast
/// always shows a number in the enum's own range.
pub fn enum_literal<N: TypeNamer + ?Sized>(value: &EnumValue, namer: &N) -> String {
    let ty = &*value.ty;
    let raw = ty.normalize(value.raw);
    let type_name = namer.name_of(&ty.ty);
    let member = |name: &str| format!("{}.{}", type_name, namer.member_name(name));

    if let Some(name) = ty.name_of(raw) {
        return member(name);
    }

    match decompose_flags(ty, raw).as_deref() {
        None | Some([]) => {
            trace!(raw = %raw, "enum value has no named decomposition");
            numeric_cast(&type_name, raw)
        }
        Some([single]) => member(*single),
        Some(names) => {
            let parts: Vec<String> = names.iter().map(|name| member(*name)).collect();
            format!("({})", parts.join(" | "))
        }
    }
}

/// `(T)-1` parses as a subtraction when `T` is not a keyword, so negative
/// values are parenthesized.
fn numeric_cast(type_name: &str, raw: i128) -> String {
    if raw < 0 {
        format!("(({})({}))", type_name, raw)
    } else {
        format!("(({}){})", type_name, raw)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use codelit_core::{PrimitiveType, TypeRef};

    use super::*;
    use crate::csharp::CSharpTypeNamer;

    fn options() -> Arc<EnumType> {
        EnumType::new(TypeRef::qualified("Demo", "Options"))
            .with_flags()
            .constant("None", 0)
            .constant("Read", 1)
            .constant("Write", 2)
            .constant("Execute", 4)
            .constant("ReadWrite", 3)
            .into_shared()
    }

    fn color() -> Arc<EnumType> {
        EnumType::new(TypeRef::named("Color"))
            .constant("Red", 1)
            .constant("Green", 2)
            .constant("Blue", 4)
            .into_shared()
    }

    fn render(ty: &Arc<EnumType>, raw: i128) -> String {
        enum_literal(&EnumValue::new(Arc::clone(ty), raw), &CSharpTypeNamer::default())
    }

    #[test]
    fn test_declared_constant() {
        assert_eq!(render(&options(), 1), "Options.Read");
        assert_eq!(render(&options(), 0), "Options.None");
        assert_eq!(render(&options(), 3), "Options.ReadWrite");
        assert_eq!(render(&color(), 2), "Color.Green");
    }

    #[test]
    fn test_flag_combinations() {
        assert_eq!(render(&options(), 5), "(Options.Read | Options.Execute)");
        // greedy from the top: ReadWrite covers Read and Write
        assert_eq!(render(&options(), 7), "(Options.ReadWrite | Options.Execute)");
    }

    #[test]
    fn test_uncovered_bits_fall_back_to_cast() {
        assert_eq!(render(&options(), 8), "((Options)8)");
        assert_eq!(render(&options(), 13), "((Options)13)");
    }

    #[test]
    fn test_non_flags_enum_never_decomposes() {
        assert_eq!(render(&color(), 3), "((Color)3)");
        assert_eq!(render(&color(), 0), "((Color)0)");
        assert_eq!(render(&color(), -1), "((Color)(-1))");
    }

    #[test]
    fn test_flags_zero_without_zero_constant() {
        let perms = EnumType::new(TypeRef::named("Perms"))
            .with_flags()
            .constant("X", 1)
            .into_shared();
        assert_eq!(render(&perms, 0), "((Perms)0)");
    }

    #[test]
    fn test_duplicate_values_use_first_name() {
        let ty = EnumType::new(TypeRef::named("Mode"))
            .with_flags()
            .constant("A", 1)
            .constant("Alias", 1)
            .constant("B", 2)
            .into_shared();
        assert_eq!(render(&ty, 3), "(Mode.A | Mode.B)");
    }

    #[test]
    fn test_high_bit_flag() {
        let ty = EnumType::new(TypeRef::named("Bits"))
            .with_flags()
            .constant("Low", 1)
            .constant("High", i32::MIN)
            .into_shared();
        assert_eq!(render(&ty, i128::from(i32::MIN) | 1), "(Bits.Low | Bits.High)");
    }

    #[test]
    fn test_high_bit_given_as_unsigned_pattern() {
        let ty = EnumType::new(TypeRef::named("Bits"))
            .with_flags()
            .constant("Low", 1)
            .constant("High", i32::MIN)
            .into_shared();
        assert_eq!(render(&ty, 0x8000_0001), "(Bits.Low | Bits.High)");
        assert_eq!(render(&ty, 0x8000_0000), "Bits.High");
        assert_eq!(render(&ty, 0xFFFF_FFFF), "((Bits)(-1))");
    }

    #[test]
    fn test_cast_uses_underlying_range() {
        let small = EnumType::new(TypeRef::named("Small"))
            .with_underlying(PrimitiveType::Byte)
            .constant("One", 1)
            .into_shared();
        assert_eq!(render(&small, -1), "((Small)255)");
        assert_eq!(render(&small, 0x101), "Small.One");
        assert_eq!(render(&color(), 0xFFFF_FFFF), "((Color)(-1))");
    }

    #[test]
    fn test_unsigned_underlying() {
        let ty = EnumType::new(TypeRef::named("Wide"))
            .with_underlying(PrimitiveType::UInt64)
            .with_flags()
            .constant("Top", u64::MAX)
            .into_shared();
        assert_eq!(render(&ty, i128::from(u64::MAX)), "Wide.Top");
        assert_eq!(render(&ty, 1), "((Wide)1)");
    }

    #[test]
    fn test_reserved_constant_names_are_escaped() {
        let ty = EnumType::new(TypeRef::named("Keyword"))
            .with_flags()
            .constant("class", 1)
            .constant("struct", 2)
            .into_shared();
        assert_eq!(render(&ty, 1), "Keyword.@class");
        assert_eq!(render(&ty, 3), "(Keyword.@class | Keyword.@struct)");
    }

    #[test]
    fn test_full_type_names() {
        let value = EnumValue::new(options(), 6);
        assert_eq!(
            enum_literal(&value, &CSharpTypeNamer::new(true)),
            "(Demo.Options.Write | Demo.Options.Execute)"
        );
    }

    #[test]
    fn test_decompose_flags_directly() {
        let ty = options();
        assert_eq!(decompose_flags(&ty, 6), Some(vec!["Write", "Execute"]));
        assert_eq!(decompose_flags(&ty, 0), Some(vec![]));
        assert_eq!(decompose_flags(&ty, 16), None);
        assert_eq!(decompose_flags(&color(), 3), None);
    }
}
