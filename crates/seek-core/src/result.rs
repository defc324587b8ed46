//! The uniform result structure shared by all scheduling policies.
//!
//! Every policy — regardless of how it reorders requests — reports its
//! outcome through the same struct, so presentation code never special-cases
//! a policy.

use crate::Track;

/// Outcome of one policy run.  Immutable once produced.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleResult {
    /// The sequence in which tracks were serviced.  For the sweeping
    /// policies this includes the synthetic boundary stops (top track, and
    /// track 0 after a C-SCAN flyback).
    pub order: Vec<Track>,

    /// Sum of absolute head displacements across all steps, including
    /// boundary travel and the C-SCAN flyback.
    pub total_movement: u64,

    /// `total_movement / request_count`, or `0.0` for an empty request set.
    ///
    /// The denominator is the number of real requests — never `order.len()`,
    /// which may be longer by up to two synthetic stops.
    pub average_seek: f64,

    /// `request_count / total_movement` — requests served per unit of head
    /// travel.  `0.0` when nothing moved.
    pub throughput: f64,

    /// Number of real requests serviced (the metric denominator).
    pub request_count: usize,
}

impl ScheduleResult {
    /// The all-zero result for an empty request set.
    pub fn empty() -> Self {
        Self {
            order:          Vec::new(),
            total_movement: 0,
            average_seek:   0.0,
            throughput:     0.0,
            request_count:  0,
        }
    }

    /// Assemble a result from a completed service order.
    ///
    /// `total_movement` is accumulated by the policy while it runs — the
    /// C-SCAN flyback cost is not derivable from consecutive `order`
    /// entries, so the sum cannot be recomputed here.
    pub fn from_run(order: Vec<Track>, total_movement: u64, request_count: usize) -> Self {
        let average_seek = if request_count == 0 {
            0.0
        } else {
            total_movement as f64 / request_count as f64
        };
        let throughput = if total_movement == 0 {
            0.0
        } else {
            request_count as f64 / total_movement as f64
        };
        Self { order, total_movement, average_seek, throughput, request_count }
    }
}
