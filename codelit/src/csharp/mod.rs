//! C# naming support.

mod naming;
mod type_namer;

pub use naming::CSHARP_NAMING;
pub use type_namer::CSharpTypeNamer;
