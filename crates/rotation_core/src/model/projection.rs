//! Projection result model.
//!
//! # Responsibility
//! - Define the values returned by the role projection engine.
//! - Name the two treasurer collision policies.
//!
//! # Invariants
//! - `age_as_chair == current_age + years_until_chair`.
//! - `age_as_treasurer == current_age + years_until_treasurer`.
//! - `schedule` is present only for [`ProjectionPolicy::Deferral`] and is
//!   ordered by strictly increasing `year`, starting at 0.

use crate::model::rotation::UnitId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Treasurer collision policy.
///
/// Both policies walk the treasurer backward through the table; they only
/// differ in what happens to a unit whose turn lands on the chairperson.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionPolicy {
    /// Displaced unit serves the following year; full schedule is recorded.
    #[default]
    Deferral,
    /// Displaced unit loses the turn; only distances are computed.
    Skip,
}

impl ProjectionPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Deferral => "deferral",
            Self::Skip => "skip",
        }
    }

    /// Whether projections under this policy carry a year-by-year schedule.
    pub fn records_schedule(self) -> bool {
        matches!(self, Self::Deferral)
    }
}

impl Display for ProjectionPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectionPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "deferral" | "defer" => Ok(Self::Deferral),
            "skip" => Ok(Self::Skip),
            other => Err(format!(
                "unsupported projection policy `{other}`; expected deferral|skip"
            )),
        }
    }
}

/// Role holders for one simulated year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearEntry {
    /// 0 is the current year.
    pub year: u32,
    pub chair_unit: UnitId,
    pub treasurer_unit: UnitId,
}

/// Outcome of one projection query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleProjectionResult {
    pub unit: UnitId,
    pub current_age: u32,
    pub policy: ProjectionPolicy,
    pub years_until_chair: u32,
    pub age_as_chair: u32,
    pub years_until_treasurer: u32,
    pub age_as_treasurer: u32,
    /// Echoed from the rotation table the query ran against.
    pub current_chair_unit: UnitId,
    pub current_treasurer_unit: UnitId,
    /// Year 0 through at least the later of the two milestones.
    pub schedule: Option<Vec<YearEntry>>,
}

impl RoleProjectionResult {
    /// Years until the later of the two milestones.
    pub fn years_until_both(&self) -> u32 {
        self.years_until_chair.max(self.years_until_treasurer)
    }

    /// Returns the schedule entry for `year`, when a schedule was recorded
    /// and covers it.
    pub fn entry_for_year(&self, year: u32) -> Option<&YearEntry> {
        self.schedule
            .as_deref()
            .and_then(|entries| entries.get(year as usize))
    }
}
