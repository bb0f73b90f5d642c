//! Core domain logic for the housing-association role rotation.
//! This crate is the single source of truth for rotation invariants.

pub mod config;
pub mod engine;
pub mod logging;
pub mod model;
pub mod service;
pub mod validation;

pub use config::{load_table, load_table_from_str, ConfigError, ConfigResult, TableSource};
pub use engine::projection::{
    project, search_horizon, ProjectionError, ProjectionResult, RoleRotation,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::projection::{ProjectionPolicy, RoleProjectionResult, YearEntry};
pub use model::rotation::{RotationTable, RotationTableError, UnitId};
pub use service::projection_service::{ProjectionService, ServiceError, ServiceResult};
pub use validation::age::{
    parse_age, validate_age, AgeValidation, AgeValidationError, MAX_AGE, MIN_AGE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
