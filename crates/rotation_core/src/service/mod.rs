//! Core use-case services.
//!
//! # Responsibility
//! - Wrap the pure engine with input validation and logging.
//! - Keep CLI and form layers decoupled from engine internals.

pub mod projection_service;
