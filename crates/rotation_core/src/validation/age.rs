//! Age input validation.
//!
//! # Responsibility
//! - Check a member's age before it is handed to the projection engine.
//!
//! # Invariants
//! - Rules run in a fixed order: missing, range, whole number.
//! - A valid result always carries the accepted age as `u32`.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 150;

/// Reasons an age input is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeValidationError {
    /// Empty, zero or not a number.
    Missing,
    OutOfRange,
    NotWholeNumber,
}

impl AgeValidationError {
    /// Stable machine-readable code for UI message lookup.
    pub fn code(self) -> &'static str {
        match self {
            Self::Missing => "age_missing",
            Self::OutOfRange => "age_out_of_range",
            Self::NotWholeNumber => "age_not_whole_number",
        }
    }
}

impl Display for AgeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "enter an age"),
            Self::OutOfRange => write!(f, "age must be between {MIN_AGE} and {MAX_AGE}"),
            Self::NotWholeNumber => write!(f, "age must be a whole number"),
        }
    }
}

impl Error for AgeValidationError {}

/// Validation envelope mirroring what a form handler renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeValidation {
    pub valid: bool,
    pub error: Option<AgeValidationError>,
    #[serde(skip)]
    accepted: Option<u32>,
}

impl AgeValidation {
    fn accepted(age: u32) -> Self {
        Self {
            valid: true,
            error: None,
            accepted: Some(age),
        }
    }

    fn rejected(error: AgeValidationError) -> Self {
        Self {
            valid: false,
            error: Some(error),
            accepted: None,
        }
    }

    /// Accepted whole age, `None` when invalid.
    pub fn age(&self) -> Option<u32> {
        self.accepted
    }

    /// Converts into a `Result` for `?`-style callers.
    pub fn into_result(self) -> Result<u32, AgeValidationError> {
        match (self.accepted, self.error) {
            (Some(age), _) => Ok(age),
            (None, Some(error)) => Err(error),
            (None, None) => Err(AgeValidationError::Missing),
        }
    }
}

/// Validates a numeric age.
pub fn validate_age(age: f64) -> AgeValidation {
    if age == 0.0 || age.is_nan() {
        return AgeValidation::rejected(AgeValidationError::Missing);
    }
    if age < f64::from(MIN_AGE) || age > f64::from(MAX_AGE) {
        return AgeValidation::rejected(AgeValidationError::OutOfRange);
    }
    if age.fract() != 0.0 {
        return AgeValidation::rejected(AgeValidationError::NotWholeNumber);
    }
    // Range check above keeps the cast lossless.
    AgeValidation::accepted(age as u32)
}

/// Validates raw text input; blank or non-numeric text counts as missing.
pub fn parse_age(raw: &str) -> AgeValidation {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return AgeValidation::rejected(AgeValidationError::Missing);
    }
    match trimmed.parse::<f64>() {
        Ok(age) => validate_age(age),
        Err(_) => AgeValidation::rejected(AgeValidationError::Missing),
    }
}
