//! The `SchedulePolicy` trait implemented by all four policies.

use seek_core::{DiskGeometry, ScheduleResult, Track};

/// A head-scheduling policy.
///
/// Implementations are pure functions of their inputs: no side effects,
/// deterministic, and the caller's request slice is never mutated.  Each
/// call produces a fresh [`ScheduleResult`]; no state is carried between
/// runs.
///
/// The engine assumes its inputs already passed the input layer's
/// validation (in-range track addresses, valid geometry) and does not
/// re-check them.  None of the built-in policies can fail on well-formed
/// input, so `schedule` returns a plain result rather than a `Result`.
///
/// The `Send + Sync` bound lets compare mode fan the four policies out
/// across threads.
pub trait SchedulePolicy: Send + Sync {
    /// Short display name ("FCFS", "SSTF", "SCAN", "C-SCAN").
    fn name(&self) -> &'static str;

    /// One-line human description for table headers and help text.
    fn description(&self) -> &'static str;

    /// Compute the service order and cost metrics for `requests`, starting
    /// with the head at `start`.
    ///
    /// `geometry` bounds the sweeping policies; FCFS and SSTF ignore it.
    /// An empty `requests` yields [`ScheduleResult::empty`].
    fn schedule(&self, requests: &[Track], start: Track, geometry: DiskGeometry) -> ScheduleResult;
}
