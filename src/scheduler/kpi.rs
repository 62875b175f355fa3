//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU scheduling indicators from a completed
//! FCFS schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest finish time |
//! | Busy Time | Sum of bursts |
//! | Idle Time | Span minus busy time |
//! | Utilization | Busy time / span |
//! | Throughput | Processes completed per tick of span |
//! | Avg Waiting | Mean of start - arrival |
//! | Avg Turnaround | Mean of finish - arrival |
//!
//! The span runs from the schedule's origin to the makespan.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::ScheduleResult;

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Latest finish time.
    pub makespan: i64,
    /// Total time the CPU was running a process.
    pub busy_time: i64,
    /// Total time the CPU sat idle between origin and makespan.
    pub idle_time: i64,
    /// Fraction of the span the CPU was busy (0.0..=1.0).
    pub utilization: f64,
    /// Processes completed per tick of span.
    pub throughput: f64,
    /// Longest waiting time of any process.
    pub max_waiting: i64,
    /// Mean waiting time.
    pub average_waiting: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule.
    ///
    /// The span starts at [`ScheduleResult::origin`], the time the CPU
    /// became available when the schedule was computed.
    pub fn calculate(result: &ScheduleResult) -> Self {
        let makespan = result.makespan();
        let busy_time = result.busy_time();
        let span = makespan.saturating_sub(result.origin).max(0);
        let idle_time = span.saturating_sub(busy_time).max(0);

        let (utilization, throughput) = if span == 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / span as f64,
                result.len() as f64 / span as f64,
            )
        };

        Self {
            makespan,
            busy_time,
            idle_time,
            utilization,
            throughput,
            max_waiting: result.iter().map(|p| p.waiting).max().unwrap_or(0),
            average_waiting: result.average_waiting,
            average_turnaround: result.average_turnaround,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_waiting: i64, min_utilization: f64) -> bool {
        self.max_waiting <= max_waiting && self.utilization >= min_utilization
    }
}
