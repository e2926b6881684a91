//! Exact arithmetic and pixel projection for cube-coordinate hexagonal
//! grids.
//!
//! Every type in this crate is a plain `Copy` value and every operation is
//! a pure function returning a new value, so the whole API is thread-safe
//! by construction; nothing here holds shared mutable state.

pub mod hex;
pub mod point;
