//! C-SCAN — the circular elevator sweep.

use seek_core::{DiskGeometry, ScheduleResult, Track};

use crate::SchedulePolicy;
use crate::sweep::{SweepMachine, partition};

/// Sweeps toward the high end like SCAN, but instead of reversing it flies
/// back to track 0 and sweeps upward again, so every request sees the head
/// approach from the same direction.
///
/// The flyback is charged at the full disk span (`tracks - 1`) no matter
/// where the upward sweep ended, and track 0 is appended to the service
/// order as an explicit stop — both happen even when no request lies below
/// the start, and even when no request lay above it.  This flat-cost model
/// is intentional; the tests pin it.
#[derive(Debug, Clone, Copy)]
pub struct CScan;

impl SchedulePolicy for CScan {
    fn name(&self) -> &'static str {
        "C-SCAN"
    }

    fn description(&self) -> &'static str {
        "Circular sweep with a flyback to track 0"
    }

    fn schedule(&self, requests: &[Track], start: Track, geometry: DiskGeometry) -> ScheduleResult {
        if requests.is_empty() {
            return ScheduleResult::empty();
        }

        let (mut low, mut high) = partition(requests, start);
        high.sort_unstable();
        low.sort_unstable(); // ascending: serviced on the second upward leg

        let mut total = 0u64;
        let mut order = Vec::with_capacity(requests.len() + 2);
        for step in SweepMachine::new(high, low, start, geometry, true) {
            total += step.cost;
            order.push(step.track);
        }

        ScheduleResult::from_run(order, total, requests.len())
    }
}
