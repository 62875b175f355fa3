//! First-come-first-served CPU scheduling.
//!
//! Computes FCFS (FIFO) timing for a set of processes: start, finish,
//! waiting and turnaround times, their averages, schedule KPIs and the
//! data behind a Gantt chart.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ScheduledProcess`,
//!   `ScheduleResult`, `ProcessTable`
//! - **`validation`**: Input checks (empty IDs, bad times, duplicate IDs)
//! - **`scheduler`**: `FcfsScheduler` and `ScheduleKpi`
//! - **`gantt`**: Chart segments, idle gaps and the colour palette
//! - **`error`**: `ScheduleError`
//!
//! # Example
//!
//! ```
//! use fcfs_schedule::models::ProcessTable;
//!
//! let mut table = ProcessTable::new();
//! table.add_raw("P1", "0", "5").unwrap();
//! table.add_raw("P2", "1", "3").unwrap();
//!
//! let result = table.schedule().unwrap();
//! assert_eq!(result.processes[1].waiting, 4);
//! assert!((result.average_turnaround - 6.0).abs() < 1e-9);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod gantt;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::ScheduleError;
