//! Error taxonomy.
//!
//! Both kinds are recoverable by corrected input: validation errors are
//! raised before a process enters the list, `EmptyInput` before any
//! computation takes place.

use std::fmt;

use crate::validation::ValidationError;

/// Errors surfaced by the scheduling API.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// A process descriptor failed validation and was not admitted.
    Validation(ValidationError),
    /// Scheduling was requested with no processes.
    EmptyInput,
    /// A process would finish after `i64::MAX`.
    Overflow { process_id: String },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "{e}"),
            Self::EmptyInput => write!(f, "Add at least one process before scheduling"),
            Self::Overflow { process_id } => {
                write!(f, "Process '{process_id}' finishes beyond the representable time range")
            }
        }
    }
}

impl std::error::Error for ScheduleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::EmptyInput | Self::Overflow { .. } => None,
        }
    }
}

impl From<ValidationError> for ScheduleError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
