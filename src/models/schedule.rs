//! Schedule (solution) model.
//!
//! A schedule result is the FCFS timing of every submitted process,
//! in dispatch order, together with the average waiting and
//! turnaround times.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use super::ScheduledProcess;

/// A complete FCFS schedule.
///
/// Processes are ordered by arrival time, ties kept in submission order,
/// which is also the order in which they run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Scheduled processes in dispatch order.
    pub processes: Vec<ScheduledProcess>,
    /// Mean waiting time over all processes.
    pub average_waiting: f64,
    /// Mean turnaround time over all processes.
    pub average_turnaround: f64,
    /// Time the CPU became available.
    #[serde(default)]
    pub origin: i64,
}

impl ScheduleResult {
    /// Builds a result from scheduled processes, computing both averages.
    ///
    /// Returns `None` for an empty list: the means are undefined.
    pub fn from_processes(processes: Vec<ScheduledProcess>) -> Option<Self> {
        if processes.is_empty() {
            return None;
        }
        // i128 totals: n values near i64::MAX must not overflow the sum
        let n = processes.len() as f64;
        let total_waiting: i128 = processes.iter().map(|p| i128::from(p.waiting)).sum();
        let total_turnaround: i128 = processes.iter().map(|p| i128::from(p.turnaround)).sum();
        Some(Self {
            average_waiting: total_waiting as f64 / n,
            average_turnaround: total_turnaround as f64 / n,
            origin: 0,
            processes,
        })
    }

    /// Sets the time the CPU became available.
    pub fn with_origin(mut self, origin: i64) -> Self {
        self.origin = origin;
        self
    }

    /// Number of scheduled processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Always false for results built by the scheduler.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Iterates over the scheduled processes in dispatch order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduledProcess> {
        self.processes.iter()
    }

    /// Makespan: latest finish time (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.processes.iter().map(|p| p.finish).max().unwrap_or(0)
    }

    /// Earliest start time (0 when empty).
    pub fn first_start(&self) -> i64 {
        self.processes.first().map(|p| p.start).unwrap_or(0)
    }

    /// Finds the scheduled entry for a process ID.
    pub fn find(&self, id: &str) -> Option<&ScheduledProcess> {
        self.processes.iter().find(|p| p.process.id == id)
    }

    /// Total CPU busy time (sum of bursts), saturating at `i64::MAX`.
    pub fn busy_time(&self) -> i64 {
        self.processes
            .iter()
            .fold(0i64, |acc, p| acc.saturating_add(p.process.burst))
    }

    /// Idle gaps between consecutive processes as `(start, end)` pairs.
    ///
    /// Only gaps after the first dispatch are listed; the gap between
    /// [`origin`](Self::origin) and the first start is not included.
    pub fn idle_gaps(&self) -> Vec<(i64, i64)> {
        self.processes
            .windows(2)
            .filter(|w| w[1].start > w[0].finish)
            .map(|w| (w[0].finish, w[1].start))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ScheduleResult {
    type Item = &'a ScheduledProcess;
    type IntoIter = std::slice::Iter<'a, ScheduledProcess>;

    fn into_iter(self) -> Self::IntoIter {
        self.processes.iter()
    }
}
