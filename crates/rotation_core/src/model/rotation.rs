//! Rotation table domain model.
//!
//! # Responsibility
//! - Define the ordered unit sequence both roles rotate through.
//! - Record which units hold the chairperson and treasurer roles this year.
//!
//! # Invariants
//! - `units` is non-empty, contains no zero id and no duplicates.
//! - Both current holders appear in `units`.
//! - A table never changes after construction.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identifier of one housing unit (room number).
pub type UnitId = u32;

const ASSOCIATION_UNITS: &[UnitId] = &[
    101, 102, 103, 104, 105, 106, //
    201, 202, 203, 204, 205, 206, //
    301, 302, 303, 304, 305, 306, //
    401, 402, 403, 405, 407, // 404 and 406 do not exist
    501, 502,
];
const ASSOCIATION_CHAIR: UnitId = 201;
const ASSOCIATION_TREASURER: UnitId = 303;

/// Construction-time violations of rotation table invariants.
///
/// These are configuration errors: a process holding an invalid table
/// cannot answer any query, so callers treat them as fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotationTableError {
    Empty,
    ZeroUnit,
    DuplicateUnit(UnitId),
    ChairNotInTable(UnitId),
    TreasurerNotInTable(UnitId),
}

impl Display for RotationTableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "rotation table must contain at least one unit"),
            Self::ZeroUnit => write!(f, "rotation table unit ids must be positive"),
            Self::DuplicateUnit(unit) => write!(f, "rotation table lists unit {unit} twice"),
            Self::ChairNotInTable(unit) => {
                write!(f, "current chairperson unit {unit} is not in the rotation table")
            }
            Self::TreasurerNotInTable(unit) => {
                write!(f, "current treasurer unit {unit} is not in the rotation table")
            }
        }
    }
}

impl Error for RotationTableError {}

/// Ordered, immutable succession list shared by every projection query.
///
/// Chairperson succession walks `units` forward, treasurer succession walks
/// it backward. The table is passed by reference into the engine, so several
/// independent tables can live in one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RotationTableDocument")]
pub struct RotationTable {
    units: Vec<UnitId>,
    current_chair_unit: UnitId,
    current_treasurer_unit: UnitId,
}

/// Unchecked wire shape; converted through [`RotationTable::new`].
#[derive(Deserialize)]
struct RotationTableDocument {
    units: Vec<UnitId>,
    current_chair_unit: UnitId,
    current_treasurer_unit: UnitId,
}

impl TryFrom<RotationTableDocument> for RotationTable {
    type Error = RotationTableError;

    fn try_from(value: RotationTableDocument) -> Result<Self, Self::Error> {
        Self::new(
            value.units,
            value.current_chair_unit,
            value.current_treasurer_unit,
        )
    }
}

impl RotationTable {
    /// Builds a table after checking every invariant.
    ///
    /// # Errors
    /// - `Empty` when `units` is empty.
    /// - `ZeroUnit` / `DuplicateUnit` for malformed unit lists.
    /// - `ChairNotInTable` / `TreasurerNotInTable` when a current holder is
    ///   not a member of `units`.
    pub fn new(
        units: Vec<UnitId>,
        current_chair_unit: UnitId,
        current_treasurer_unit: UnitId,
    ) -> Result<Self, RotationTableError> {
        if units.is_empty() {
            return Err(RotationTableError::Empty);
        }
        for (index, unit) in units.iter().enumerate() {
            if *unit == 0 {
                return Err(RotationTableError::ZeroUnit);
            }
            if units[..index].contains(unit) {
                return Err(RotationTableError::DuplicateUnit(*unit));
            }
        }
        if !units.contains(&current_chair_unit) {
            return Err(RotationTableError::ChairNotInTable(current_chair_unit));
        }
        if !units.contains(&current_treasurer_unit) {
            return Err(RotationTableError::TreasurerNotInTable(
                current_treasurer_unit,
            ));
        }

        Ok(Self {
            units,
            current_chair_unit,
            current_treasurer_unit,
        })
    }

    /// The association's own table: floors 1-5 in room order, chair 201,
    /// treasurer 303.
    pub fn association_default() -> Self {
        Self {
            units: ASSOCIATION_UNITS.to_vec(),
            current_chair_unit: ASSOCIATION_CHAIR,
            current_treasurer_unit: ASSOCIATION_TREASURER,
        }
    }

    pub fn units(&self) -> &[UnitId] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Always `false` for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn current_chair_unit(&self) -> UnitId {
        self.current_chair_unit
    }

    pub fn current_treasurer_unit(&self) -> UnitId {
        self.current_treasurer_unit
    }

    /// Returns the rotation position of `unit`, or `None` for non-members.
    pub fn position_of(&self, unit: UnitId) -> Option<usize> {
        self.units.iter().position(|candidate| *candidate == unit)
    }

    pub fn contains(&self, unit: UnitId) -> bool {
        self.position_of(unit).is_some()
    }

    /// Returns the unit at `index`, wrapping cyclically.
    pub fn unit_at(&self, index: usize) -> UnitId {
        self.units[index % self.units.len()]
    }

    pub(crate) fn chair_position(&self) -> usize {
        // Holder membership is checked at construction.
        self.position_of(self.current_chair_unit).unwrap_or(0)
    }

    pub(crate) fn treasurer_position(&self) -> usize {
        self.position_of(self.current_treasurer_unit).unwrap_or(0)
    }
}
