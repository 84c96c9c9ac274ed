//! Cedar declaration model.
//!
//! This crate contains the read-only view of declarations that the code
//! generation layers consume:
//! - Index newtypes (`DeclId`, `BlockId`, `TypeId`) for flat storage
//! - `Decl`, a closed tagged variant over the declaration kinds that can
//!   reach a linker-visible symbol
//! - `DeclAttrs`, the consolidated attribute set populated once by the
//!   declaration store
//! - `Selector` and `ObjCMethodDecl` for dynamically-dispatched methods
//! - `BlockDecl`, an anonymous block literal with a navigational key to
//!   its enclosing context
//! - `DeclStore`, the interface the stores implement, and `DeclArena`,
//!   a plain in-memory store for tests and tools
//!
//! # Design Philosophy
//!
//! - **Closed kinds**: consumers match exhaustively over `Decl` instead
//!   of downcasting
//! - **Data over queries**: attributes are plain fields, populated once;
//!   downstream logic is pattern matching, not live graph walks
//! - **Keys over pointers**: a block literal holds a `DeclId` key to its
//!   enclosing context, never an owning reference

mod attrs;
mod block;
mod decl;
mod ids;
mod lang;
mod selector;
mod store;

pub use attrs::{CallConv, DeclAttrs, DeclFlags};
pub use block::BlockDecl;
pub use decl::{Decl, FnDecl, FnKind, FnSig, VarDecl};
pub use ids::{BlockId, DeclId, TypeId};
pub use lang::LangOpts;
pub use selector::{ObjCMethodDecl, Selector};
pub use store::{DeclArena, DeclStore};
