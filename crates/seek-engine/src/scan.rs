//! SCAN — the elevator sweep.

use seek_core::{DiskGeometry, ScheduleResult, Track};

use crate::SchedulePolicy;
use crate::sweep::{SweepMachine, partition};

/// Sweeps toward the high end first, servicing every request at or above
/// the start in ascending order; forces a serviced stop at the top boundary
/// track (even when no request lies there), then reverses and services the
/// remaining requests in descending order.
///
/// The sweep direction is fixed — always toward the high end, regardless of
/// which boundary the start position is closer to.  Only the top boundary
/// forces a stop; the downward leg ends at the lowest pending request, not
/// at track 0.
#[derive(Debug, Clone, Copy)]
pub struct Scan;

impl SchedulePolicy for Scan {
    fn name(&self) -> &'static str {
        "SCAN"
    }

    fn description(&self) -> &'static str {
        "Elevator sweep to the top boundary, then back down"
    }

    fn schedule(&self, requests: &[Track], start: Track, geometry: DiskGeometry) -> ScheduleResult {
        if requests.is_empty() {
            return ScheduleResult::empty();
        }

        let (mut low, mut high) = partition(requests, start);
        high.sort_unstable();
        low.sort_unstable_by(|a, b| b.cmp(a)); // descending: serviced on the way back down

        let mut total = 0u64;
        let mut order = Vec::with_capacity(requests.len() + 1);
        for step in SweepMachine::new(high, low, start, geometry, false) {
            total += step.cost;
            order.push(step.track);
        }

        ScheduleResult::from_run(order, total, requests.len())
    }
}
