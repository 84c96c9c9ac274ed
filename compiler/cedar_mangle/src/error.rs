//! Mangling errors.
//!
//! Both variants are caller contract violations. A wrong symbol is a
//! silent, late-discovered link failure, so the engine refuses to emit
//! one and reports the violation instead. The output sink is left
//! untouched whenever an error is returned.

use thiserror::Error;

pub type Result<T, E = MangleError> = std::result::Result<T, E>;

/// A caller contract violation detected during mangling.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum MangleError {
    /// The stdcall/fastcall decoration scheme is undefined for variadic
    /// functions.
    #[error("variadic function cannot carry a stdcall or fastcall decorated name")]
    VariadicDecoration,

    /// A block nested directly inside a constructor or destructor must
    /// be mangled through the variant-aware entry points, which thread
    /// the structor flavor into the outer name.
    #[error("block nested in a constructor or destructor requires the variant-aware entry point")]
    BlockInStructor,
}
