//! Role projection engine.
//!
//! Pure computation over an immutable `RotationTable`: no I/O, no shared
//! mutable state, bounded iteration.

pub mod projection;
