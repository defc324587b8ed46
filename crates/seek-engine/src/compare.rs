//! Compare mode — run all four policies against the same workload.

use seek_core::{DiskGeometry, ScheduleResult, Track};

use crate::{CScan, Fcfs, SchedulePolicy, Scan, Sstf};

/// One policy's tagged result in a comparison run.
#[derive(Clone, Debug, PartialEq)]
pub struct PolicyRun {
    /// The policy's display name, from [`SchedulePolicy::name`].
    pub policy: &'static str,
    pub result: ScheduleResult,
}

/// The four built-in policies in canonical comparison order.
pub fn all_policies() -> [&'static dyn SchedulePolicy; 4] {
    [&Fcfs, &Sstf, &Scan, &CScan]
}

/// Run every policy against the same workload.
///
/// Results always come back in the fixed order FCFS, SSTF, SCAN, C-SCAN so
/// presentation is deterministic regardless of how the runs executed.  The
/// four runs share no state; with the `parallel` feature they execute on
/// Rayon's thread pool, and the indexed collect keeps the combined order
/// unchanged.
pub fn compare(requests: &[Track], start: Track, geometry: DiskGeometry) -> Vec<PolicyRun> {
    let policies = all_policies();

    #[cfg(not(feature = "parallel"))]
    {
        policies
            .iter()
            .map(|p| PolicyRun {
                policy: p.name(),
                result: p.schedule(requests, start, geometry),
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        policies
            .par_iter()
            .map(|p| PolicyRun {
                policy: p.name(),
                result: p.schedule(requests, start, geometry),
            })
            .collect()
    }
}
