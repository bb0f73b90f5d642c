//! Domain model for rotation tables and projection results.
//!
//! # Responsibility
//! - Define canonical data structures used by the projection engine.
//! - Keep configuration (the table) separate from per-query output.
//!
//! # Invariants
//! - A `RotationTable` is immutable once constructed.
//! - Projection results are plain values; nothing in them aliases the table.

pub mod projection;
pub mod rotation;
