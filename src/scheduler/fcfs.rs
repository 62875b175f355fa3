//! First-come-first-served scheduler.
//!
//! # Algorithm
//!
//! 1. Stable-sort a copy of the processes by arrival time.
//! 2. Keep a clock at the time the CPU becomes free (the origin at first).
//! 3. For each process, idle the clock forward to its arrival if needed,
//!    dispatch it, and advance the clock by its burst.
//!
//! Equal arrival times keep submission order, so the sort must be stable.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the sweep.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::{Process, ScheduleResult, ScheduledProcess};

/// Input container for a scheduling run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Processes in submission order.
    pub processes: Vec<Process>,
    /// Time the CPU becomes available.
    #[serde(default)]
    pub origin: i64,
}

impl ScheduleRequest {
    /// Creates a new request starting at t=0.
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes,
            origin: 0,
        }
    }

    /// Sets the time the CPU becomes available.
    pub fn with_origin(mut self, origin: i64) -> Self {
        self.origin = origin;
        self
    }
}

/// Non-preemptive FCFS scheduler.
///
/// Holds configuration only; [`schedule`](Self::schedule) is a pure function
/// of its input and never mutates it.
///
/// # Example
///
/// ```
/// use fcfs_schedule::models::Process;
/// use fcfs_schedule::scheduler::FcfsScheduler;
///
/// let processes = vec![
///     Process::new("P1", 0, 5),
///     Process::new("P2", 1, 3),
/// ];
/// let result = FcfsScheduler::new().schedule(&processes).unwrap();
/// assert_eq!(result.processes[1].start, 5);
/// assert_eq!(result.processes[1].waiting, 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FcfsScheduler {
    origin: i64,
}

impl FcfsScheduler {
    /// Creates a scheduler whose CPU is free from t=0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time the CPU becomes available.
    pub fn with_origin(mut self, origin: i64) -> Self {
        self.origin = origin;
        self
    }

    /// Configured origin.
    pub fn origin(&self) -> i64 {
        self.origin
    }

    /// Schedules processes in arrival order.
    ///
    /// Input is assumed validated (see [`crate::validation`]).
    ///
    /// # Errors
    /// - [`ScheduleError::EmptyInput`] if `processes` is empty.
    /// - [`ScheduleError::Overflow`] if a finish time exceeds `i64::MAX`.
    pub fn schedule(&self, processes: &[Process]) -> Result<ScheduleResult, ScheduleError> {
        if processes.is_empty() {
            return Err(ScheduleError::EmptyInput);
        }

        let order = arrival_order(processes);
        trace!("dispatch order: {order:?}");

        let mut clock = self.origin;
        let mut scheduled = Vec::with_capacity(processes.len());

        for &idx in &order {
            let process = &processes[idx];
            if clock < process.arrival {
                debug!(
                    "cpu idle [{clock}, {}) until '{}' arrives",
                    process.arrival, process.id
                );
                clock = process.arrival;
            }

            let start = clock;
            clock = clock
                .checked_add(process.burst)
                .ok_or_else(|| ScheduleError::Overflow {
                    process_id: process.id.clone(),
                })?;
            let entry = ScheduledProcess {
                process: process.clone(),
                index: idx,
                start,
                waiting: start - process.arrival,
                finish: clock,
                turnaround: clock - process.arrival,
            };
            debug!(
                "'{}' runs [{}, {}) waiting={} turnaround={}",
                entry.process.id, entry.start, entry.finish, entry.waiting, entry.turnaround
            );
            scheduled.push(entry);
        }

        ScheduleResult::from_processes(scheduled)
            .map(|r| r.with_origin(self.origin))
            .ok_or(ScheduleError::EmptyInput)
    }

    /// Schedules from a request, using the request's origin.
    pub fn schedule_request(
        &self,
        request: &ScheduleRequest,
    ) -> Result<ScheduleResult, ScheduleError> {
        self.clone()
            .with_origin(request.origin)
            .schedule(&request.processes)
    }
}

/// Schedules processes with a default [`FcfsScheduler`].
pub fn schedule(processes: &[Process]) -> Result<ScheduleResult, ScheduleError> {
    FcfsScheduler::new().schedule(processes)
}

/// Indices into `processes`, stable-sorted by arrival time.
fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..processes.len()).collect();
    indices.sort_by_key(|&i| processes[i].arrival);
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn ids(result: &ScheduleResult) -> Vec<&str> {
        result.iter().map(|p| p.id()).collect()
    }

    fn random_processes(rng: &mut StdRng, n: usize) -> Vec<Process> {
        (0..n)
            .map(|i| {
                Process::new(
                    format!("P{i}"),
                    rng.random_range(0..30),
                    rng.random_range(1..10),
                )
            })
            .collect()
    }

    #[test]
    fn test_three_processes() {
        let processes = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ];
        let r = schedule(&processes).unwrap();

        let p1 = r.find("P1").unwrap();
        assert_eq!((p1.start, p1.finish, p1.waiting), (0, 5, 0));
        let p2 = r.find("P2").unwrap();
        assert_eq!((p2.start, p2.finish, p2.waiting), (5, 8, 4));
        let p3 = r.find("P3").unwrap();
        assert_eq!((p3.start, p3.finish, p3.waiting), (8, 16, 6));

        assert!((r.average_waiting - 10.0 / 3.0).abs() < 1e-9);
        assert!((r.average_turnaround - 26.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_initial_idle_gap() {
        let r = schedule(&[Process::new("P1", 5, 2)]).unwrap();
        let p = &r.processes[0];
        assert_eq!(p.start, 5);
        assert_eq!(p.finish, 7);
        assert_eq!(p.waiting, 0);
        assert_eq!(p.turnaround, 2);
    }

    #[test]
    fn test_tie_keeps_submission_order() {
        let processes = vec![Process::new("A", 0, 4), Process::new("B", 0, 2)];
        let r = schedule(&processes).unwrap();
        assert_eq!(ids(&r), vec!["A", "B"]);
        let b = r.find("B").unwrap();
        assert_eq!((b.start, b.finish), (4, 6));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(schedule(&[]), Err(ScheduleError::EmptyInput));
    }

    #[test]
    fn test_single_process() {
        let r = schedule(&[Process::new("X", 3, 6)]).unwrap();
        let x = &r.processes[0];
        assert_eq!((x.start, x.finish, x.waiting, x.turnaround), (3, 9, 0, 6));
        assert!((r.average_waiting - 0.0).abs() < 1e-9);
        assert!((r.average_turnaround - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_unsorted_input_not_mutated() {
        let processes = vec![
            Process::new("late", 10, 1),
            Process::new("early", 0, 2),
        ];
        let before = processes.clone();
        let r = schedule(&processes).unwrap();
        assert_eq!(processes, before);
        assert_eq!(ids(&r), vec!["early", "late"]);
        assert_eq!(r.processes[0].index, 1);
        assert_eq!(r.processes[1].index, 0);
    }

    #[test]
    fn test_gap_between_processes() {
        let processes = vec![Process::new("P1", 0, 2), Process::new("P2", 6, 1)];
        let r = schedule(&processes).unwrap();
        let p2 = r.find("P2").unwrap();
        assert_eq!(p2.start, 6);
        assert_eq!(p2.waiting, 0);
        assert_eq!(r.idle_gaps(), vec![(2, 6)]);
    }

    #[test]
    fn test_origin_delays_dispatch() {
        let processes = vec![Process::new("P1", 0, 3), Process::new("P2", 8, 1)];
        let r = FcfsScheduler::new()
            .with_origin(4)
            .schedule(&processes)
            .unwrap();
        let p1 = r.find("P1").unwrap();
        assert_eq!((p1.start, p1.waiting, p1.finish), (4, 4, 7));
        assert_eq!(r.origin, 4);
        let p2 = r.find("P2").unwrap();
        assert_eq!((p2.start, p2.waiting), (8, 0));
    }

    #[test]
    fn test_finish_past_i64_max_rejected() {
        let processes = vec![Process::new("P1", i64::MAX, 1)];
        assert_eq!(
            schedule(&processes),
            Err(ScheduleError::Overflow {
                process_id: "P1".into()
            })
        );

        // Overflow from accumulated bursts, not a single large arrival
        let processes = vec![
            Process::new("A", i64::MAX - 10, 6),
            Process::new("B", i64::MAX - 10, 6),
        ];
        assert!(matches!(
            schedule(&processes),
            Err(ScheduleError::Overflow { ref process_id }) if process_id == "B"
        ));
    }

    #[test]
    fn test_finish_at_i64_max_accepted() {
        let r = schedule(&[Process::new("P1", i64::MAX - 1, 1)]).unwrap();
        assert_eq!(r.processes[0].finish, i64::MAX);
        assert!((r.average_turnaround - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_schedule_request() {
        let request = ScheduleRequest::new(vec![Process::new("P1", 0, 2)]).with_origin(10);
        let r = FcfsScheduler::new()
            .with_origin(3)
            .schedule_request(&request)
            .unwrap();
        assert_eq!(r.processes[0].start, 10);
        assert_eq!(r.processes[0].finish, 12);
        assert_eq!(r.origin, 10);
    }

    #[test]
    fn test_request_origin_defaults_to_zero() {
        let request: ScheduleRequest =
            serde_json::from_str(r#"{"processes":[{"id":"A","arrival":1,"burst":2}]}"#).unwrap();
        assert_eq!(request.origin, 0);
        let r = FcfsScheduler::new().schedule_request(&request).unwrap();
        assert_eq!(r.processes[0].start, 1);
    }

    #[test]
    fn test_properties_random_inputs() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let n = rng.random_range(1..12);
            let processes = random_processes(&mut rng, n);
            let r = schedule(&processes).unwrap();
            assert_eq!(r.len(), processes.len());

            // Ordering: arrival ascending, ties by submission index
            for w in r.processes.windows(2) {
                assert!(w[0].arrival() <= w[1].arrival());
                if w[0].arrival() == w[1].arrival() {
                    let i0 = processes.iter().position(|p| p.id == w[0].id()).unwrap();
                    let i1 = processes.iter().position(|p| p.id == w[1].id()).unwrap();
                    assert!(i0 < i1);
                }
                // No overlap
                assert!(w[0].finish <= w[1].start);
                // Idle only when nothing has arrived
                if w[1].start > w[0].finish {
                    assert_eq!(w[1].start, w[1].arrival());
                }
            }

            let mut latest_finish = 0;
            for p in &r {
                assert_eq!(p.finish, p.start + p.burst());
                assert!(p.waiting >= 0);
                assert_eq!(p.turnaround, p.waiting + p.burst());
                assert_eq!(p.turnaround, p.finish - p.arrival());
                if p.arrival() > latest_finish {
                    assert_eq!(p.waiting, 0);
                }
                latest_finish = latest_finish.max(p.finish);
            }

            let n = r.len() as f64;
            let mean_wait = r.iter().map(|p| p.waiting as f64).sum::<f64>() / n;
            let mean_tat = r.iter().map(|p| p.turnaround as f64).sum::<f64>() / n;
            assert!((r.average_waiting - mean_wait).abs() < 1e-9);
            assert!((r.average_turnaround - mean_tat).abs() < 1e-9);
        }
    }

    #[test]
    fn test_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        let processes = random_processes(&mut rng, 20);
        let scheduler = FcfsScheduler::new();
        let first = scheduler.schedule(&processes).unwrap();
        let second = scheduler.schedule(&processes).unwrap();
        assert_eq!(first, second);
    }
}
