//! Caller-side input checks.
//!
//! Validators report problems as data so form handlers can re-prompt
//! without unwinding through the engine.

pub mod age;
