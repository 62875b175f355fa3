//! Process (descriptor) model.
//!
//! A process is a unit of CPU work submitted to the scheduler: an
//! identifier, the time it becomes ready and the CPU time it needs.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

/// A process awaiting scheduling.
///
/// # Time Representation
/// Times are integer ticks relative to the scheduling origin (t=0).
/// The consumer decides what a tick means (the usual choice is ms).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier. Non-empty, expected unique within a run.
    pub id: String,
    /// Time at which the process becomes ready (>= 0).
    pub arrival: i64,
    /// CPU time required (> 0).
    pub burst: i64,
}

impl Process {
    /// Creates a new process.
    ///
    /// No validation is performed here; use
    /// [`validate_process`](crate::validation::validate_process) or
    /// [`ProcessTable::add_raw`](crate::models::ProcessTable::add_raw)
    /// for caller input.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
        }
    }
}

/// A process with its FCFS timing computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledProcess {
    /// The input descriptor.
    #[serde(flatten)]
    pub process: Process,
    /// Position of the process in the submitted list.
    pub index: usize,
    /// Time the process is dispatched.
    pub start: i64,
    /// Time spent ready but not running (`start - arrival`).
    pub waiting: i64,
    /// Completion time (`start + burst`).
    pub finish: i64,
    /// Time from arrival to completion (`finish - arrival`).
    pub turnaround: i64,
}

impl ScheduledProcess {
    /// Process identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.process.id
    }

    /// Arrival time.
    #[inline]
    pub fn arrival(&self) -> i64 {
        self.process.arrival
    }

    /// Burst duration.
    #[inline]
    pub fn burst(&self) -> i64 {
        self.process.burst
    }

    /// Response ratio `turnaround / burst` (>= 1.0).
    pub fn response_ratio(&self) -> f64 {
        self.turnaround as f64 / self.process.burst as f64
    }
}
