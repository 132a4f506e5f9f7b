//! Language-specific abstractions.
//!
//! This module provides the seams the stringifier talks through:
//! - [`TypeNamer`] - Trait for rendering type descriptors as source text
//! - [`NamingConvention`] - Reserved words and identifier escaping

mod naming;
mod traits;

pub use naming::NamingConvention;
pub use traits::TypeNamer;
