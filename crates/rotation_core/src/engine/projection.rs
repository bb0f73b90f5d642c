//! Role projection engine.
//!
//! # Responsibility
//! - Resolve a queried unit against the rotation table.
//! - Compute the forward chairperson distance.
//! - Simulate the backward treasurer rotation under a collision policy and
//!   record the per-year role holders.
//!
//! # Invariants
//! - Invalid units fail before any simulation runs.
//! - The treasurer simulation never runs more than `4 * N` years.
//! - No table state is mutated; every call owns its cursors and schedule.

use crate::model::projection::{ProjectionPolicy, RoleProjectionResult, YearEntry};
use crate::model::rotation::{RotationTable, UnitId};
use log::error;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Search bound multiplier over the table length.
const HORIZON_CYCLES: u32 = 4;

pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Failures of a single projection query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /// Queried unit is not a member of the rotation table.
    InvalidUnit(UnitId),
    /// Treasurer rotation never reached the unit within the search bound.
    ///
    /// Not a user-facing outcome; indicates an engine defect.
    TreasurerUnreachable { unit: UnitId, horizon: u32 },
}

impl Display for ProjectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUnit(unit) => write!(f, "unit {unit} is not in the rotation table"),
            Self::TreasurerUnreachable { unit, horizon } => write!(
                f,
                "treasurer rotation did not reach unit {unit} within {horizon} years"
            ),
        }
    }
}

impl Error for ProjectionError {}

/// Role holders of one simulated year, as table positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RotationStep {
    year: u32,
    chair_idx: usize,
    treasurer_idx: usize,
}

/// Year-by-year role succession over one table.
///
/// Yields `YearEntry` values for year 0, 1, 2, … without bound; callers
/// limit it with `take`. The chairperson walks forward one position per
/// year. The treasurer cursor walks backward one position per year and,
/// when it lands on that year's chairperson, hands the year to the next unit
/// in reverse order. Under [`ProjectionPolicy::Deferral`] the displaced unit
/// serves the year after; under [`ProjectionPolicy::Skip`] it waits for the
/// next cycle.
#[derive(Debug, Clone)]
pub struct RoleRotation<'t> {
    table: &'t RotationTable,
    policy: ProjectionPolicy,
    chair_start: usize,
    acct_pointer: usize,
    deferred: Option<usize>,
    next_year: Option<u32>,
}

impl<'t> RoleRotation<'t> {
    /// Starts the succession at the table's current holders (year 0).
    pub fn new(table: &'t RotationTable, policy: ProjectionPolicy) -> Self {
        Self {
            table,
            policy,
            chair_start: table.chair_position(),
            acct_pointer: table.treasurer_position(),
            deferred: None,
            next_year: Some(0),
        }
    }

    pub fn policy(&self) -> ProjectionPolicy {
        self.policy
    }

    fn step_back(&self, index: usize) -> usize {
        let len = self.table.len();
        (index + len - 1) % len
    }

    fn next_step(&mut self) -> Option<RotationStep> {
        let year = self.next_year?;
        self.next_year = year.checked_add(1);

        let len = self.table.len();
        let chair_idx = (self.chair_start + year as usize % len) % len;

        let treasurer_idx = if let Some(deferred) = self.deferred.take() {
            // Deferred unit consumes this year; the cursor stays put.
            deferred
        } else {
            if self.acct_pointer == chair_idx {
                if self.policy == ProjectionPolicy::Deferral {
                    self.deferred = Some(self.acct_pointer);
                }
                self.acct_pointer = self.step_back(self.acct_pointer);
            }
            let serving = self.acct_pointer;
            self.acct_pointer = self.step_back(self.acct_pointer);
            serving
        };

        Some(RotationStep {
            year,
            chair_idx,
            treasurer_idx,
        })
    }

    fn entry(&self, step: RotationStep) -> YearEntry {
        YearEntry {
            year: step.year,
            chair_unit: self.table.unit_at(step.chair_idx),
            treasurer_unit: self.table.unit_at(step.treasurer_idx),
        }
    }
}

impl Iterator for RoleRotation<'_> {
    type Item = YearEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.next_step()?;
        Some(self.entry(step))
    }
}

/// Number of years the treasurer search may simulate for `table`.
pub fn search_horizon(table: &RotationTable) -> u32 {
    u32::try_from(table.len())
        .unwrap_or(u32::MAX)
        .saturating_mul(HORIZON_CYCLES)
}

/// Projects when `unit` takes each role and how old the member will be.
///
/// # Contract
/// - Chairperson distance is `(user_idx - chair_idx0) mod N`.
/// - Under `Deferral` the result carries a schedule from year 0 through the
///   later of both milestones.
/// - Under `Skip` the simulation stops at the treasurer milestone and no
///   schedule is returned.
///
/// # Errors
/// - `InvalidUnit` when `unit` is not in `table`.
/// - `TreasurerUnreachable` when the search bound is exhausted.
pub fn project(
    table: &RotationTable,
    unit: UnitId,
    current_age: u32,
    policy: ProjectionPolicy,
) -> ProjectionResult<RoleProjectionResult> {
    let user_idx = table
        .position_of(unit)
        .ok_or(ProjectionError::InvalidUnit(unit))?;
    let len = table.len();
    let chair_idx0 = table.chair_position();
    let years_until_chair = ((user_idx + len - chair_idx0) % len) as u32;

    let horizon = search_horizon(table);
    let mut rotation = RoleRotation::new(table, policy);
    let mut schedule = policy.records_schedule().then(Vec::new);
    let mut years_until_treasurer = None;

    for _ in 0..horizon {
        let Some(step) = rotation.next_step() else {
            break;
        };
        if let Some(entries) = schedule.as_mut() {
            entries.push(rotation.entry(step));
        }
        if years_until_treasurer.is_none() && step.treasurer_idx == user_idx {
            years_until_treasurer = Some(step.year);
        }

        let finished = match policy {
            ProjectionPolicy::Deferral => {
                years_until_treasurer.is_some() && step.year >= years_until_chair
            }
            ProjectionPolicy::Skip => years_until_treasurer.is_some(),
        };
        if finished {
            break;
        }
    }

    let Some(years_until_treasurer) = years_until_treasurer else {
        error!(
            "event=projection module=engine status=error error_code=treasurer_unreachable unit={} policy={} horizon={}",
            unit, policy, horizon
        );
        return Err(ProjectionError::TreasurerUnreachable { unit, horizon });
    };

    Ok(RoleProjectionResult {
        unit,
        current_age,
        policy,
        years_until_chair,
        age_as_chair: current_age.saturating_add(years_until_chair),
        years_until_treasurer,
        age_as_treasurer: current_age.saturating_add(years_until_treasurer),
        current_chair_unit: table.current_chair_unit(),
        current_treasurer_unit: table.current_treasurer_unit(),
        schedule,
    })
}
