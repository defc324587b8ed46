//! Shortest-Seek-Time-First — greedy nearest-neighbor selection.

use seek_core::{DiskGeometry, ScheduleResult, Track};

use crate::SchedulePolicy;

/// Repeatedly services whichever remaining request is closest to the
/// current head position.
///
/// The remaining set is a working copy drained with `Vec::remove`, which
/// preserves arrival order among the unserviced requests.  Tie-break: when
/// two candidates are equidistant, the one appearing first in the remaining
/// set's current order wins (the scan below keeps the earliest minimum via
/// strict `<`).
///
/// O(n²) with a linear scan per step — fine at simulation scale.  A
/// distance-keyed structure would need re-keying after every step anyway,
/// since the reference point moves.
#[derive(Debug, Clone, Copy)]
pub struct Sstf;

impl SchedulePolicy for Sstf {
    fn name(&self) -> &'static str {
        "SSTF"
    }

    fn description(&self) -> &'static str {
        "Shortest-Seek-Time-First"
    }

    fn schedule(&self, requests: &[Track], start: Track, _geometry: DiskGeometry) -> ScheduleResult {
        if requests.is_empty() {
            return ScheduleResult::empty();
        }

        let mut remaining: Vec<Track> = requests.to_vec();
        let mut head = start;
        let mut total = 0u64;
        let mut order = Vec::with_capacity(requests.len());

        while !remaining.is_empty() {
            // Strict `<` keeps the earliest equidistant candidate.
            let mut best = 0;
            for (i, &candidate) in remaining.iter().enumerate().skip(1) {
                if head.distance(candidate) < head.distance(remaining[best]) {
                    best = i;
                }
            }

            let next = remaining.remove(best);
            total += head.distance(next);
            order.push(next);
            head = next;
        }

        ScheduleResult::from_run(order, total, requests.len())
    }
}
