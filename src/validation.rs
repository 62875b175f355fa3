//! Input validation for process descriptors.
//!
//! Runs on the caller side, before a process enters the list or the
//! scheduler. Detects:
//! - Empty identifiers
//! - Non-numeric or negative arrival times
//! - Non-numeric or non-positive burst durations
//! - Duplicate IDs (batch check only)
//!
//! A descriptor that fails any check is rejected as a whole.

use std::collections::HashSet;
use std::fmt;

use crate::models::Process;

/// Validation result for a batch of processes.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Identifier missing or blank.
    EmptyId,
    /// Arrival time is not an integer or is negative.
    InvalidArrival,
    /// Burst duration is not an integer.
    InvalidBurst,
    /// Burst duration is zero or negative.
    NonPositiveBurst,
    /// Two processes share the same ID.
    DuplicateId,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a single descriptor.
///
/// Checks run in field order and the first failure is returned, so the
/// caller gets one message per rejected add.
pub fn validate_process(process: &Process) -> Result<(), ValidationError> {
    if process.id.trim().is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::EmptyId,
            "Process ID must not be empty",
        ));
    }
    if process.arrival < 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidArrival,
            format!(
                "Process '{}': arrival time must be >= 0, got {}",
                process.id, process.arrival
            ),
        ));
    }
    if process.burst <= 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::NonPositiveBurst,
            format!(
                "Process '{}': burst time must be > 0, got {}",
                process.id, process.burst
            ),
        ));
    }
    Ok(())
}

/// Parses and validates raw form fields into a [`Process`].
///
/// Fields are trimmed before parsing. The identifier is kept as entered
/// (minus surrounding whitespace).
pub fn parse_process(id: &str, arrival: &str, burst: &str) -> Result<Process, ValidationError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::EmptyId,
            "Process ID must not be empty",
        ));
    }
    let arrival: i64 = arrival.trim().parse().map_err(|_| {
        ValidationError::new(
            ValidationErrorKind::InvalidArrival,
            format!("Process '{id}': arrival time '{}' is not an integer", arrival.trim()),
        )
    })?;
    let burst: i64 = burst.trim().parse().map_err(|_| {
        ValidationError::new(
            ValidationErrorKind::InvalidBurst,
            format!("Process '{id}': burst time '{}' is not an integer", burst.trim()),
        )
    })?;

    let process = Process::new(id, arrival, burst);
    validate_process(&process)?;
    Ok(process)
}

/// Validates a whole process list.
///
/// Checks:
/// 1. Every descriptor passes [`validate_process`]
/// 2. No duplicate IDs
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for process in processes {
        if let Err(e) = validate_process(process) {
            errors.push(e);
        }
        if !process.id.trim().is_empty() && !ids.insert(process.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", process.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
