//! Calling-convention classification.
//!
//! Only 32-bit Windows decorates names by calling convention. The
//! classifier is total: every input maps to a [`DecorationKind`], and
//! unknown conventions fall through to no decoration.

use cedar_decl::{CallConv, Decl, LangOpts};
use cedar_target::{Arch, CxxAbi, TargetInfo};

/// Decoration scheme selected for a declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DecorationKind {
    /// No calling-convention decoration applies.
    None,
    /// `__fastcall`: `@name@bytes`.
    FastCall,
    /// `__stdcall`: `_name@bytes`.
    StdCall,
}

impl DecorationKind {
    /// The character emitted after the label marker, when the kind
    /// decorates at all.
    #[inline]
    #[must_use]
    pub const fn prefix_char(self) -> Option<char> {
        match self {
            DecorationKind::None => None,
            DecorationKind::FastCall => Some('@'),
            DecorationKind::StdCall => Some('_'),
        }
    }
}

/// Classify a declaration's calling-convention decoration.
///
/// Structural mangling already encodes the convention under the
/// Microsoft C++ ABI, so C++ declarations without C linkage skip
/// decoration there.
#[must_use]
pub fn decoration_kind(target: &TargetInfo, lang: LangOpts, decl: &Decl) -> DecorationKind {
    if !target.os().is_windows() || target.arch() != Arch::X86 {
        return DecorationKind::None;
    }

    if lang.cplusplus && !decl.is_extern_c() && target.cxx_abi() == CxxAbi::Microsoft {
        return DecorationKind::None;
    }

    let Some(f) = decl.as_fn() else {
        return DecorationKind::None;
    };

    match f.attrs.call_conv {
        CallConv::X86FastCall => DecorationKind::FastCall,
        CallConv::X86StdCall => DecorationKind::StdCall,
        _ => DecorationKind::None,
    }
}
