//! Type naming seam.

use codelit_core::{PrimitiveType, TypeRef};

/// Trait for rendering type descriptors as source text.
///
/// Implement this trait to support a new target language's type syntax.
/// Only [`map_primitive`](TypeNamer::map_primitive),
/// [`map_nullable`](TypeNamer::map_nullable) and
/// [`map_array`](TypeNamer::map_array) are required; [`name_of`](TypeNamer::name_of)
/// walks a [`TypeRef`] and calls the per-shape hooks.
pub trait TypeNamer {
    /// Map a primitive type to the target language keyword.
    fn map_primitive(&self, ty: PrimitiveType) -> String;

    /// Map a nullable value type (e.g., `int?`).
    fn map_nullable(&self, inner: &str) -> String;

    /// Map a chain of nested array types over a non-array element.
    ///
    /// `ranks` lists the dimensions of each array level, outermost first:
    /// an array of 2-D arrays of `int` is `("int", [1, 2])`.
    fn map_array(&self, element: &str, ranks: &[u8]) -> String;

    /// Map a named type with already-rendered generic arguments.
    fn map_named(&self, namespace: Option<&str>, name: &str, args: &[String]) -> String {
        let _ = namespace;
        if args.is_empty() {
            name.to_string()
        } else {
            format!("{}<{}>", name, args.join(", "))
        }
    }

    /// Make a member identifier (enum constant, method) safe to emit.
    fn member_name(&self, name: &str) -> String {
        name.to_string()
    }

    /// Render a complete TypeRef to a string.
    fn name_of(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(p) => self.map_primitive(*p),
            TypeRef::Nullable(inner) => {
                let inner_str = self.name_of(inner);
                self.map_nullable(&inner_str)
            }
            TypeRef::Array { .. } => {
                let mut ranks = Vec::new();
                let mut current = ty;
                while let TypeRef::Array { element, rank } = current {
                    ranks.push(*rank);
                    current = &**element;
                }
                let element_str = self.name_of(current);
                self.map_array(&element_str, &ranks)
            }
            TypeRef::Named {
                namespace,
                name,
                args,
            } => {
                let arg_strs: Vec<_> = args.iter().map(|a| self.name_of(a)).collect();
                self.map_named(namespace.as_deref(), name, &arg_strs)
            }
        }
    }
}

impl<T: TypeNamer + ?Sized> TypeNamer for &T {
    fn map_primitive(&self, ty: PrimitiveType) -> String {
        (**self).map_primitive(ty)
    }

    fn map_nullable(&self, inner: &str) -> String {
        (**self).map_nullable(inner)
    }

    fn map_array(&self, element: &str, ranks: &[u8]) -> String {
        (**self).map_array(element, ranks)
    }

    fn map_named(&self, namespace: Option<&str>, name: &str, args: &[String]) -> String {
        (**self).map_named(namespace, name, args)
    }

    fn member_name(&self, name: &str) -> String {
        (**self).member_name(name)
    }

    fn name_of(&self, ty: &TypeRef) -> String {
        (**self).name_of(ty)
    }
}
