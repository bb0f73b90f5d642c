//! Role projection use-case service.
//!
//! # Responsibility
//! - Provide stable projection entry points for CLI and form callers.
//! - Run age validation before the engine and log query outcomes.
//!
//! # Invariants
//! - The service never mutates its rotation table.
//! - Invalid ages are rejected before any engine call.
//! - Log events carry unit ids and distances only, never ages.

use crate::engine::projection::{project, ProjectionError, RoleRotation};
use crate::model::projection::{ProjectionPolicy, RoleProjectionResult, YearEntry};
use crate::model::rotation::{RotationTable, UnitId};
use crate::validation::age::{validate_age, AgeValidationError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors from projection service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Age input failed validation; caller should re-prompt.
    InvalidAge(AgeValidationError),
    Projection(ProjectionError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAge(err) => write!(f, "{err}"),
            Self::Projection(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidAge(err) => Some(err),
            Self::Projection(err) => Some(err),
        }
    }
}

impl From<AgeValidationError> for ServiceError {
    fn from(value: AgeValidationError) -> Self {
        Self::InvalidAge(value)
    }
}

impl From<ProjectionError> for ServiceError {
    fn from(value: ProjectionError) -> Self {
        Self::Projection(value)
    }
}

/// Projection facade bound to one table and one collision policy.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionService<'t> {
    table: &'t RotationTable,
    policy: ProjectionPolicy,
}

impl<'t> ProjectionService<'t> {
    pub fn new(table: &'t RotationTable, policy: ProjectionPolicy) -> Self {
        Self { table, policy }
    }

    pub fn table(&self) -> &'t RotationTable {
        self.table
    }

    pub fn policy(&self) -> ProjectionPolicy {
        self.policy
    }

    /// Projects role milestones for `unit` with an already validated age.
    ///
    /// # Side effects
    /// - Emits `projection` logging events with duration and status.
    pub fn project(
        &self,
        unit: UnitId,
        current_age: u32,
    ) -> ServiceResult<RoleProjectionResult> {
        let started_at = Instant::now();
        match project(self.table, unit, current_age, self.policy) {
            Ok(result) => {
                info!(
                    "event=projection module=service status=ok unit={} policy={} years_until_chair={} years_until_treasurer={} duration_us={}",
                    unit,
                    self.policy,
                    result.years_until_chair,
                    result.years_until_treasurer,
                    started_at.elapsed().as_micros()
                );
                Ok(result)
            }
            Err(err) => {
                warn!(
                    "event=projection module=service status=error unit={} policy={} error={}",
                    unit, self.policy, err
                );
                Err(err.into())
            }
        }
    }

    /// Validates a raw age and projects only when it is acceptable.
    pub fn project_checked(
        &self,
        unit: UnitId,
        raw_age: f64,
    ) -> ServiceResult<RoleProjectionResult> {
        let age = validate_age(raw_age).into_result().map_err(|err| {
            info!(
                "event=age_validation module=service status=rejected error_code={}",
                err.code()
            );
            ServiceError::InvalidAge(err)
        })?;
        self.project(unit, age)
    }

    /// Projects every unit in table order for one shared age.
    pub fn project_all(&self, current_age: u32) -> ServiceResult<Vec<RoleProjectionResult>> {
        self.table
            .units()
            .iter()
            .map(|unit| self.project(*unit, current_age))
            .collect()
    }

    /// Returns role holders for the next `years` years, starting with this one.
    pub fn upcoming_schedule(&self, years: u32) -> Vec<YearEntry> {
        RoleRotation::new(self.table, self.policy)
            .take(years as usize)
            .collect()
    }
}
