//! Caller-owned process list.
//!
//! The table keeps processes in submission order. Submission order is
//! what breaks arrival-time ties, and it also fixes each process's
//! chart colour, so the table never reorders itself.

use serde::{Deserialize, Serialize};

use super::{Process, ScheduleResult};
use crate::error::ScheduleError;
use crate::scheduler::FcfsScheduler;
use crate::validation::{parse_process, validate_process, ValidationError};

/// An ordered, validated list of processes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessTable {
    processes: Vec<Process>,
}

impl ProcessTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a process after validating it.
    ///
    /// On error the table is left unchanged.
    pub fn add(&mut self, process: Process) -> Result<(), ValidationError> {
        validate_process(&process)?;
        self.processes.push(process);
        Ok(())
    }

    /// Parses raw form fields and appends the process.
    ///
    /// On error the table is left unchanged.
    pub fn add_raw(&mut self, id: &str, arrival: &str, burst: &str) -> Result<(), ValidationError> {
        let process = parse_process(id, arrival, burst)?;
        self.processes.push(process);
        Ok(())
    }

    /// Removes the process at `index`.
    ///
    /// Returns `None` if the index is out of range.
    pub fn remove(&mut self, index: usize) -> Option<Process> {
        (index < self.processes.len()).then(|| self.processes.remove(index))
    }

    /// Removes every process.
    pub fn clear(&mut self) {
        self.processes.clear();
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the table has no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Process at `index` in submission order.
    pub fn get(&self, index: usize) -> Option<&Process> {
        self.processes.get(index)
    }

    /// Iterates in submission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    /// Processes in submission order.
    pub fn as_slice(&self) -> &[Process] {
        &self.processes
    }

    /// Position of a process in submission order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.processes.iter().position(|p| p.id == id)
    }

    /// Schedules the current contents with a default scheduler.
    ///
    /// The table itself is not reordered.
    pub fn schedule(&self) -> Result<ScheduleResult, ScheduleError> {
        FcfsScheduler::new().schedule(&self.processes)
    }
}

impl<'a> IntoIterator for &'a ProcessTable {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.processes.iter()
    }
}
