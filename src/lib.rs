//! Blockfall (workspace facade crate).
//!
//! This package keeps the `blockfall::{core,types}` public API stable while
//! the implementation lives in dedicated crates under `crates/`. Rendering,
//! audio and input are external collaborators: they pull snapshots from the
//! core and push intents into it once per frame.

pub use blockfall_core as core;
pub use blockfall_types as types;
