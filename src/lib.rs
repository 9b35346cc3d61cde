//! frame-coro (workspace facade crate).
//!
//! Re-exports the workspace crates as `frame_coro::{core,term,types}` and
//! hosts the demo routines used by the `frame-coro` binary.

pub mod demo;

pub use frame_coro_core as core;
pub use frame_coro_term as term;
pub use frame_coro_types as types;
