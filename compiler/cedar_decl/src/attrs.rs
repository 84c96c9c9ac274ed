//! Consolidated per-declaration attributes.
//!
//! The declaration store populates a [`DeclAttrs`] once per declaration;
//! downstream consumers pattern-match over it instead of querying a live
//! declaration graph.

use bitflags::bitflags;

/// Calling convention declared on a function.
///
/// The set is closed; conventions with no decoration scheme behave like
/// [`CallConv::C`] for naming purposes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum CallConv {
    /// The platform default C convention.
    #[default]
    C,
    /// `__stdcall`: callee-cleanup, x86 only.
    X86StdCall,
    /// `__fastcall`: first arguments in registers, x86 only.
    X86FastCall,
    /// `__thiscall`: receiver in `ecx`, x86 only.
    X86ThisCall,
}

bitflags! {
    /// Boolean declaration properties consulted during symbol emission.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct DeclFlags: u8 {
        /// Declared with C-style external linkage (`extern "C"` or plain C).
        const EXTERN_C = 1 << 0;
        /// Function takes a trailing variable argument list.
        const VARIADIC = 1 << 1;
        /// Carries at least one attribute of any kind.
        ///
        /// Plain C declarations without attributes never need symbol
        /// transformation; this bit is the fast reject for that path.
        const HAS_ATTRS = 1 << 2;
    }
}

impl Default for DeclFlags {
    fn default() -> Self {
        DeclFlags::empty()
    }
}

/// The attribute set the mangler reads.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct DeclAttrs {
    pub flags: DeclFlags,
    pub call_conv: CallConv,
    /// Explicit symbol-name override (`__asm__("name")`). Preempts every
    /// other naming rule.
    pub asm_label: Option<String>,
}

impl DeclAttrs {
    /// Attribute set for a plain, unannotated declaration.
    #[must_use]
    pub fn none() -> Self {
        DeclAttrs::default()
    }

    /// Add flag bits.
    #[must_use]
    pub fn with_flags(mut self, flags: DeclFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Set the declared calling convention.
    ///
    /// A non-default convention comes from an attribute, so this also
    /// sets [`DeclFlags::HAS_ATTRS`].
    #[must_use]
    pub fn with_call_conv(mut self, call_conv: CallConv) -> Self {
        self.call_conv = call_conv;
        if call_conv != CallConv::C {
            self.flags |= DeclFlags::HAS_ATTRS;
        }
        self
    }

    /// Attach an explicit symbol-name override.
    ///
    /// The override is itself an attribute, so this also sets
    /// [`DeclFlags::HAS_ATTRS`].
    #[must_use]
    pub fn with_asm_label(mut self, label: impl Into<String>) -> Self {
        self.asm_label = Some(label.into());
        self.flags |= DeclFlags::HAS_ATTRS;
        self
    }

    #[inline]
    #[must_use]
    pub fn is_extern_c(&self) -> bool {
        self.flags.contains(DeclFlags::EXTERN_C)
    }

    #[inline]
    #[must_use]
    pub fn is_variadic(&self) -> bool {
        self.flags.contains(DeclFlags::VARIADIC)
    }

    /// Whether the declaration carries any attribute at all.
    #[inline]
    #[must_use]
    pub fn has_attrs(&self) -> bool {
        self.flags.contains(DeclFlags::HAS_ATTRS)
    }
}
