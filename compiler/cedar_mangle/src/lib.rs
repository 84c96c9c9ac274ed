//! Symbol-Name Mangling for Cedar
//!
//! Given a declaration, this crate decides whether the linker-visible
//! symbol needs any transformation from the source name and, when it
//! does, produces the exact decorated string. Several independent naming
//! conventions interact here and each must be bit-exact for linker and
//! runtime interoperability:
//!
//! - calling-convention decoration on 32-bit Windows (`__stdcall` /
//!   `__fastcall`)
//! - the ABI-selected structural mangling scheme, reached through the
//!   [`StructuralMangler`] collaborator
//! - explicit `__asm__("name")` symbol overrides
//! - deterministic unique naming for anonymous block literals
//! - the selector encoding for dynamically-dispatched methods
//!
//! # Examples
//!
//! | Declaration | Symbol |
//! |-------------|--------|
//! | `void f(void)` (no attributes) | `f` |
//! | `__stdcall` `int f(int)` on win32 | `\x01_f@4` |
//! | `__fastcall` method, receiver only | `\x01@f@4` |
//! | `__asm__("raw")` anywhere | `\x01raw` (marker per target) |
//! | first block in `f` | `__f_block_invoke` |
//! | second block in `f` | `__f_block_invoke_2` |
//! | `-(void)setW:(int)w` on `Widget` | `15-[Widget setW:]` |
//!
//! Getting any rule wrong links silently to the wrong symbol, so the two
//! caller-contract violations (variadic functions in the decorated path,
//! blocks nested directly in structors through the generic entry point)
//! fail loudly as [`MangleError`] instead of emitting plausible garbage.

mod block;
mod classify;
mod context;
mod decorated;
mod error;
mod inspect;
mod selector;
mod structural;

pub use classify::{decoration_kind, DecorationKind};
pub use context::MangleContext;
pub use error::{MangleError, Result};
pub use inspect::{has_label_marker, parse_decoration, selector_payload, strip_label_marker};
pub use structural::{CtorVariant, DtorVariant, StructuralMangler};

/// Marker byte that tells the assembler layer not to prepend the
/// target's user-label prefix to the name that follows.
pub const LABEL_MARKER: char = '\u{1}';

/// Names with this prefix denote machine intrinsics and must never
/// receive the label marker.
pub const INTRINSIC_PREFIX: &str = "llvm.";
