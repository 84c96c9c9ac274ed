//! Declaration variants that can reach a linker-visible symbol.

use crate::attrs::DeclAttrs;
use crate::ids::TypeId;
use crate::selector::ObjCMethodDecl;

/// What kind of function a [`FnDecl`] is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FnKind {
    /// A free function.
    Free,
    /// A member function.
    Method {
        /// Static members take no implicit receiver.
        is_static: bool,
    },
    /// A constructor. Always carries an implicit receiver.
    Ctor,
    /// A destructor. Always carries an implicit receiver.
    Dtor,
}

impl FnKind {
    /// Whether calls pass an implicit receiver argument.
    #[inline]
    #[must_use]
    pub const fn has_implicit_receiver(self) -> bool {
        matches!(
            self,
            FnKind::Method { is_static: false } | FnKind::Ctor | FnKind::Dtor
        )
    }

    /// Whether this is a constructor or destructor.
    ///
    /// Structors mangle per-variant (complete vs. base object) and need
    /// the variant-aware entry points.
    #[inline]
    #[must_use]
    pub const fn is_structor(self) -> bool {
        matches!(self, FnKind::Ctor | FnKind::Dtor)
    }
}

/// A function's parameter-type shape.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FnSig {
    /// `Some(params)` for a prototyped function; `None` for the legacy
    /// unprototyped shape where argument types are unknown.
    ///
    /// `Some(vec![])` and `None` are different conditions: a prototyped
    /// zero-parameter function still has a known (empty) argument list.
    pub proto: Option<Vec<TypeId>>,
}

impl FnSig {
    /// A prototyped signature with the given parameter types.
    #[must_use]
    pub fn prototyped(params: Vec<TypeId>) -> Self {
        FnSig {
            proto: Some(params),
        }
    }

    /// The legacy unprototyped shape: argument types unknown.
    #[must_use]
    pub const fn unprototyped() -> Self {
        FnSig { proto: None }
    }

    #[inline]
    #[must_use]
    pub const fn is_prototyped(&self) -> bool {
        self.proto.is_some()
    }
}

/// A function declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FnDecl {
    /// Source identifier, absent for unnamed entities (e.g. conversion
    /// operators, structors).
    pub ident: Option<String>,
    pub kind: FnKind,
    pub sig: FnSig,
    pub attrs: DeclAttrs,
}

impl FnDecl {
    /// A named free function with the given signature and no attributes.
    #[must_use]
    pub fn free(ident: impl Into<String>, sig: FnSig) -> Self {
        FnDecl {
            ident: Some(ident.into()),
            kind: FnKind::Free,
            sig,
            attrs: DeclAttrs::none(),
        }
    }

    /// A named member function.
    #[must_use]
    pub fn method(ident: impl Into<String>, is_static: bool, sig: FnSig) -> Self {
        FnDecl {
            ident: Some(ident.into()),
            kind: FnKind::Method { is_static },
            sig,
            attrs: DeclAttrs::none(),
        }
    }

    /// Replace the attribute set.
    #[must_use]
    pub fn with_attrs(mut self, attrs: DeclAttrs) -> Self {
        self.attrs = attrs;
        self
    }
}

/// A variable declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct VarDecl {
    pub ident: Option<String>,
    pub attrs: DeclAttrs,
}

impl VarDecl {
    /// A named variable with no attributes.
    #[must_use]
    pub fn new(ident: impl Into<String>) -> Self {
        VarDecl {
            ident: Some(ident.into()),
            attrs: DeclAttrs::none(),
        }
    }

    /// Replace the attribute set.
    #[must_use]
    pub fn with_attrs(mut self, attrs: DeclAttrs) -> Self {
        self.attrs = attrs;
        self
    }
}

/// A declaration, as seen by symbol emission.
///
/// The set of kinds is closed so consumers can match exhaustively.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Decl {
    Fn(FnDecl),
    Var(VarDecl),
    ObjCMethod(ObjCMethodDecl),
}

impl Decl {
    /// Source identifier, if the declaration has one.
    ///
    /// Objective-C methods are named by their selector, not an
    /// identifier.
    #[must_use]
    pub fn ident(&self) -> Option<&str> {
        match self {
            Decl::Fn(f) => f.ident.as_deref(),
            Decl::Var(v) => v.ident.as_deref(),
            Decl::ObjCMethod(_) => None,
        }
    }

    /// The declaration's attribute set.
    #[must_use]
    pub fn attrs(&self) -> &DeclAttrs {
        match self {
            Decl::Fn(f) => &f.attrs,
            Decl::Var(v) => &v.attrs,
            Decl::ObjCMethod(m) => &m.attrs,
        }
    }

    /// Whether the declaration has C-style external linkage.
    #[inline]
    #[must_use]
    pub fn is_extern_c(&self) -> bool {
        self.attrs().is_extern_c()
    }

    /// The function declaration, if this is one.
    #[must_use]
    pub fn as_fn(&self) -> Option<&FnDecl> {
        match self {
            Decl::Fn(f) => Some(f),
            _ => None,
        }
    }

    /// Whether this is a constructor or destructor.
    #[inline]
    #[must_use]
    pub fn is_structor(&self) -> bool {
        matches!(self, Decl::Fn(f) if f.kind.is_structor())
    }
}
