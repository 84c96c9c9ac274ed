//! Argument-size suffix of calling-convention decorated names.

use std::fmt::Write;

use cedar_decl::{DeclStore, FnDecl};

use crate::error::{MangleError, Result};

/// Reject functions the decoration scheme is undefined for.
///
/// Must run before the first byte of the decorated name is written so a
/// failed mangle leaves the sink untouched. Unprototyped functions pass:
/// they take the `@0` escape instead of a computed byte count.
pub(crate) fn check_decoratable(f: &FnDecl) -> Result<()> {
    if f.sig.is_prototyped() && f.attrs.is_variadic() {
        return Err(MangleError::VariadicDecoration);
    }
    Ok(())
}

/// Append `@<bytes>`: the argument bytes of a decorated function, or the
/// `@0` escape when argument types are unknown.
///
/// Every parameter is rounded up to a 32-bit word; a non-static method
/// contributes one extra word for the implicit receiver. The word size
/// is baked into this decoration ABI, not derived from the target.
pub(crate) fn write_arg_bytes(f: &FnDecl, store: &dyn DeclStore, out: &mut String) {
    out.push('@');
    match &f.sig.proto {
        None => out.push('0'),
        Some(params) => {
            let mut arg_words = u64::from(f.kind.has_implicit_receiver());
            for &ty in params {
                arg_words += store.type_size_bits(ty).div_ceil(32);
            }
            let _ = write!(out, "{}", 4 * arg_words);
        }
    }
}
