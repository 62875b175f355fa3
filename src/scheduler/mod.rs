//! FCFS scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `FcfsScheduler` dispatches processes strictly in arrival order,
//! non-preemptively, idling the CPU until the next arrival when the
//! ready queue is empty.
//!
//! # KPI
//!
//! `ScheduleKpi` computes makespan, busy/idle time, utilization,
//! throughput and waiting statistics.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;

pub use fcfs::{schedule, FcfsScheduler, ScheduleRequest};
pub use kpi::ScheduleKpi;
