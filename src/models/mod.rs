//! Scheduling domain models.
//!
//! Provides the data types for FCFS scheduling input and output.
//!
//! | Type | Role |
//! |------|------|
//! | Process | Submitted work: ID, arrival, burst |
//! | ScheduledProcess | Process plus start/finish/waiting/turnaround |
//! | ScheduleResult | Dispatch-ordered schedule with averages |
//! | ProcessTable | Caller-owned list in submission order |

mod process;
mod schedule;
mod table;

pub use process::{Process, ScheduledProcess};
pub use schedule::ScheduleResult;
pub use table::ProcessTable;
