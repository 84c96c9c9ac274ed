//! Discriminators and invocation-function names for block literals.
//!
//! Block literals have no source name. Their out-of-line invocation
//! functions are named from the enclosing entity plus a fixed suffix,
//! with a per-session discriminator keeping multiple blocks at one site
//! apart.

use std::fmt::Write;

use cedar_decl::BlockId;
use rustc_hash::FxHashMap;

/// Session-scoped discriminator tables.
///
/// Each distinct block identity receives exactly one discriminator,
/// assigned on first request, monotonically from 0 in request order.
/// Requests that count as invocation sites and lookup-only requests
/// (global blocks) draw from separate tables so neither consumes the
/// other's slots. Tables never shrink within a session.
#[derive(Default, Debug)]
pub(crate) struct BlockIdAllocator {
    counted: FxHashMap<BlockId, u32>,
    uncounted: FxHashMap<BlockId, u32>,
}

impl BlockIdAllocator {
    /// Discriminator for `id`, assigning the next free one on first
    /// request. Idempotent per identity.
    pub(crate) fn discriminator(&mut self, id: BlockId, counted: bool) -> u32 {
        let table = if counted {
            &mut self.counted
        } else {
            &mut self.uncounted
        };
        let next = u32::try_from(table.len()).unwrap_or(u32::MAX);
        *table.entry(id).or_insert(next)
    }

    /// Forget every assignment; the next request starts a new session.
    pub(crate) fn reset(&mut self) {
        self.counted.clear();
        self.uncounted.clear();
    }
}

/// Append `_block_invoke` plus the discriminator suffix.
///
/// Discriminator 0 keeps the short suffix-free form; discriminator `n`
/// appends `_{n+1}`.
pub(crate) fn write_invoke_suffix(discriminator: u32, out: &mut String) {
    out.push_str("_block_invoke");
    if discriminator > 0 {
        let _ = write!(out, "_{}", discriminator + 1);
    }
}

/// Append the invocation-function name of a block enclosed by `outer`.
pub(crate) fn write_function_block(outer: &str, discriminator: u32, out: &mut String) {
    out.push_str("__");
    out.push_str(outer);
    write_invoke_suffix(discriminator, out);
}
