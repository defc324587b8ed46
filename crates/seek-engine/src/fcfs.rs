//! First-Come-First-Served — the no-reordering baseline.

use seek_core::{DiskGeometry, ScheduleResult, Track};

use crate::SchedulePolicy;

/// Services requests strictly in arrival order.
///
/// The service order IS the input order, so permuting the request set
/// permutes the service sequence identically.  No optimization is
/// attempted; this is the baseline the other policies are measured
/// against.  O(n) time, O(n) space.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl SchedulePolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }

    fn schedule(&self, requests: &[Track], start: Track, _geometry: DiskGeometry) -> ScheduleResult {
        if requests.is_empty() {
            return ScheduleResult::empty();
        }

        let mut head = start;
        let mut total = 0u64;
        let mut order = Vec::with_capacity(requests.len());

        for &request in requests {
            total += head.distance(request);
            order.push(request);
            head = request;
        }

        ScheduleResult::from_run(order, total, requests.len())
    }
}
