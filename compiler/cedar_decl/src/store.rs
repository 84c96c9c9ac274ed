//! Declaration store interface and an in-memory implementation.

use crate::block::BlockDecl;
use crate::decl::Decl;
use crate::ids::{BlockId, DeclId, TypeId};

/// Read access to resident declarations and type layout.
///
/// Symbol emission never walks or owns the declaration graph; it asks
/// the store to resolve keys it was handed.
pub trait DeclStore {
    /// Resolve a declaration key.
    fn decl(&self, id: DeclId) -> &Decl;

    /// Size of a type descriptor in bits.
    fn type_size_bits(&self, ty: TypeId) -> u64;
}

/// A plain in-memory [`DeclStore`].
///
/// The production store lives in the front end; this one backs tests and
/// small tools. Ids are assigned in allocation order.
#[derive(Default, Debug)]
pub struct DeclArena {
    decls: Vec<Decl>,
    type_sizes: Vec<u64>,
    next_block: u32,
}

impl DeclArena {
    #[must_use]
    pub fn new() -> Self {
        DeclArena::default()
    }

    /// Store a declaration and return its key.
    pub fn alloc(&mut self, decl: Decl) -> DeclId {
        let id = DeclId::new(u32::try_from(self.decls.len()).unwrap_or(u32::MAX));
        self.decls.push(decl);
        id
    }

    /// Register a type descriptor by its size in bits.
    pub fn intern_type(&mut self, size_bits: u64) -> TypeId {
        let id = TypeId::new(u32::try_from(self.type_sizes.len()).unwrap_or(u32::MAX));
        self.type_sizes.push(size_bits);
        id
    }

    /// Create a block literal enclosed by `context`.
    ///
    /// Identities are assigned in allocation order, which makes test
    /// traversal order explicit.
    pub fn alloc_block(&mut self, context: Option<DeclId>) -> BlockDecl {
        let id = BlockId::new(self.next_block);
        self.next_block += 1;
        BlockDecl::new(id, context)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl DeclStore for DeclArena {
    fn decl(&self, id: DeclId) -> &Decl {
        &self.decls[id.index()]
    }

    fn type_size_bits(&self, ty: TypeId) -> u64 {
        self.type_sizes[ty.index()]
    }
}
