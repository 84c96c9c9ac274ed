//! Mangling context and orchestration.
//!
//! [`MangleContext`] owns the decision tree for one mangling session:
//! explicit override, structural delegation, or calling-convention
//! decoration. It also holds the session's block discriminator tables
//! and exposes the block and selector entry points.

use cedar_decl::{BlockDecl, BlockId, Decl, DeclId, DeclStore, FnDecl, LangOpts, ObjCMethodDecl};
use cedar_target::{CxxAbi, TargetInfo};
use parking_lot::Mutex;

use crate::block::{self, BlockIdAllocator};
use crate::classify::{decoration_kind, DecorationKind};
use crate::decorated;
use crate::error::{MangleError, Result};
use crate::selector;
use crate::structural::{CtorVariant, DtorVariant, StructuralMangler};
use crate::{INTRINSIC_PREFIX, LABEL_MARKER};

/// Symbol-name decisions and encodings for one mangling session.
///
/// The context is cheap to share by reference: everything except the
/// discriminator tables is read-only, and those sit behind a mutex so
/// allocation stays single-writer. Discriminator values are assigned in
/// request order, so reproducible output requires a stable declaration
/// traversal order across runs.
pub struct MangleContext<'a> {
    target: &'a TargetInfo,
    lang: LangOpts,
    store: &'a dyn DeclStore,
    structural: &'a dyn StructuralMangler,
    block_ids: Mutex<BlockIdAllocator>,
}

impl<'a> MangleContext<'a> {
    /// Start a mangling session.
    #[must_use]
    pub fn new(
        target: &'a TargetInfo,
        lang: LangOpts,
        store: &'a dyn DeclStore,
        structural: &'a dyn StructuralMangler,
    ) -> Self {
        MangleContext {
            target,
            lang,
            store,
            structural,
            block_ids: Mutex::new(BlockIdAllocator::default()),
        }
    }

    /// Whether the linker-visible symbol differs from the source name.
    #[must_use]
    pub fn needs_mangling(&self, id: DeclId) -> bool {
        self.decl_needs_mangling(self.store.decl(id))
    }

    fn decl_needs_mangling(&self, decl: &Decl) -> bool {
        if decoration_kind(self.target, self.lang, decl) != DecorationKind::None {
            return true;
        }

        // In C, declarations with no attributes never need mangling.
        // Fast-path them.
        if !self.lang.cplusplus && !decl.attrs().has_attrs() {
            return false;
        }

        // An explicit __asm__ label takes precedence over all other
        // naming in the object file.
        if decl.attrs().asm_label.is_some() {
            return true;
        }

        self.structural.needs_structural_mangling(decl)
    }

    /// Append the declaration's linker-visible name.
    ///
    /// Callers should consult [`MangleContext::needs_mangling`] first;
    /// [`MangleContext::symbol_name`] bundles the two.
    #[tracing::instrument(level = "trace", skip_all, fields(decl = id.raw()))]
    pub fn mangle_name(&self, id: DeclId, out: &mut String) -> Result<()> {
        self.mangle_decl_name(self.store.decl(id), out)
    }

    /// The declaration's linker-visible name as a fresh string, raw
    /// identifier included when no transformation applies.
    pub fn symbol_name(&self, id: DeclId) -> Result<String> {
        let decl = self.store.decl(id);
        let mut out = String::with_capacity(64);
        if self.decl_needs_mangling(decl) {
            self.mangle_decl_name(decl, &mut out)?;
        } else if let Some(ident) = decl.ident() {
            out.push_str(ident);
        }
        Ok(out)
    }

    fn mangle_decl_name(&self, decl: &Decl, out: &mut String) -> Result<()> {
        // An explicit override is the mangling, unconditionally. The
        // label marker suppresses further prefixing by the assembler;
        // formats with an empty user-label prefix pass names through
        // verbatim already, and intrinsic names must stay unprefixed.
        if let Some(label) = &decl.attrs().asm_label {
            if !self.target.user_label_prefix().is_empty() && !label.starts_with(INTRINSIC_PREFIX) {
                out.push(LABEL_MARKER);
            }
            out.push_str(label);
            return Ok(());
        }

        let kind = decoration_kind(self.target, self.lang, decl);
        let structural = self.structural.needs_structural_mangling(decl);
        tracing::trace!(?kind, structural, "classified symbol");

        // The Microsoft scheme encodes the convention itself, so a
        // structurally mangled name is already fully decorated there.
        let msvc_structural = structural && self.target.cxx_abi() == CxxAbi::Microsoft;
        let decoration = match (decl.as_fn(), kind.prefix_char()) {
            (Some(f), Some(prefix)) if !msvc_structural => Some((f, prefix)),
            _ => None,
        };
        let Some((f, prefix)) = decoration else {
            self.structural.mangle_decl(decl, out);
            return Ok(());
        };

        decorated::check_decoratable(f)?;

        out.push(LABEL_MARKER);
        out.push(prefix);
        if structural {
            self.structural.mangle_decl(decl, out);
        } else if let Some(ident) = &f.ident {
            out.push_str(ident);
        }
        decorated::write_arg_bytes(f, self.store, out);
        Ok(())
    }

    /// Append the invocation-function name of a block nested in an
    /// ordinary declaration.
    ///
    /// Blocks nested directly in a constructor or destructor must go
    /// through [`MangleContext::mangle_ctor_block`] /
    /// [`MangleContext::mangle_dtor_block`] so the structor flavor
    /// reaches the outer name.
    #[tracing::instrument(level = "trace", skip_all, fields(block = block.id.raw()))]
    pub fn mangle_block(&self, block: &BlockDecl, out: &mut String) -> Result<()> {
        let Some(context) = block.context else {
            return self.mangle_global_block(block, out);
        };
        let enclosing = self.store.decl(context);
        if enclosing.is_structor() {
            return Err(MangleError::BlockInStructor);
        }

        let mut outer = String::with_capacity(64);
        match enclosing {
            Decl::ObjCMethod(method) => selector::write_method_name(method, &mut outer),
            decl => match decl.ident() {
                Some(ident) if !self.decl_needs_mangling(decl) => outer.push_str(ident),
                _ => self.mangle_decl_name(decl, &mut outer)?,
            },
        }

        self.write_block_invoke(&outer, block.id, out);
        Ok(())
    }

    /// Append the invocation-function name of a block at file scope,
    /// e.g. in a global initializer.
    ///
    /// Global blocks look their discriminator up without consuming an
    /// invocation-site slot.
    pub fn mangle_global_block(&self, block: &BlockDecl, out: &mut String) -> Result<()> {
        let discriminator = self.block_discriminator(block.id, false);
        let mut buffer = String::with_capacity(64);
        if let Some(context) = block.context {
            let enclosing = self.store.decl(context);
            match enclosing.ident() {
                Some(ident) if !self.decl_needs_mangling(enclosing) => buffer.push_str(ident),
                _ => self.mangle_decl_name(enclosing, &mut buffer)?,
            }
        }
        block::write_invoke_suffix(discriminator, &mut buffer);
        out.push_str(&buffer);
        Ok(())
    }

    /// Append the invocation-function name of a block nested in the
    /// given flavor of a constructor.
    pub fn mangle_ctor_block(
        &self,
        ctor: &FnDecl,
        variant: CtorVariant,
        block: &BlockDecl,
        out: &mut String,
    ) {
        let mut outer = String::with_capacity(64);
        self.structural.mangle_ctor(ctor, variant, &mut outer);
        self.write_block_invoke(&outer, block.id, out);
    }

    /// Append the invocation-function name of a block nested in the
    /// given flavor of a destructor.
    pub fn mangle_dtor_block(
        &self,
        dtor: &FnDecl,
        variant: DtorVariant,
        block: &BlockDecl,
        out: &mut String,
    ) {
        let mut outer = String::with_capacity(64);
        self.structural.mangle_dtor(dtor, variant, &mut outer);
        self.write_block_invoke(&outer, block.id, out);
    }

    /// Append the selector encoding of a dynamically-dispatched method.
    // Takes &self so the entry point sits beside the other mangling
    // operations; the encoding itself needs no session state.
    #[allow(clippy::unused_self)]
    pub fn mangle_objc_method_name(&self, method: &ObjCMethodDecl, out: &mut String) {
        selector::write_method_name(method, out);
    }

    /// Forget every block discriminator; the next request starts a new
    /// session.
    pub fn reset_discriminators(&self) {
        self.block_ids.lock().reset();
    }

    fn write_block_invoke(&self, outer: &str, id: BlockId, out: &mut String) {
        let discriminator = self.block_discriminator(id, true);
        block::write_function_block(outer, discriminator, out);
    }

    fn block_discriminator(&self, id: BlockId, counted: bool) -> u32 {
        self.block_ids.lock().discriminator(id, counted)
    }
}
