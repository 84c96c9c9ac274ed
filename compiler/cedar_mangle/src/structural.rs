//! Interface to the structural mangling scheme.
//!
//! The full ABI mangling algorithm for namespaced, overloaded, and
//! templated entities is a large recursive scheme owned elsewhere; this
//! crate only drives it. Implementations exist per ABI variant.

use cedar_decl::{Decl, FnDecl};

/// Constructor flavor.
///
/// The complete-object and base-object constructors of one source
/// declaration are distinct symbols; block literals nested in a
/// constructor inherit the flavor through their outer name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CtorVariant {
    Complete,
    Base,
}

/// Destructor flavor.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DtorVariant {
    Deleting,
    Complete,
    Base,
}

/// The ABI-selected structural mangling scheme.
pub trait StructuralMangler {
    /// Whether the declaration's name must be structurally mangled at
    /// all under this ABI.
    fn needs_structural_mangling(&self, decl: &Decl) -> bool;

    /// Mangle a declaration's full structural name.
    fn mangle_decl(&self, decl: &Decl, out: &mut String);

    /// Mangle the given flavor of a constructor.
    fn mangle_ctor(&self, ctor: &FnDecl, variant: CtorVariant, out: &mut String);

    /// Mangle the given flavor of a destructor.
    fn mangle_dtor(&self, dtor: &FnDecl, variant: DtorVariant, out: &mut String);
}
