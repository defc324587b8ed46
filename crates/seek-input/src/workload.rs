//! Seeded random workload generation.
//!
//! Useful for demo binaries and policy benchmarking: the same seed always
//! produces the same request stream, so comparison runs are reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use seek_core::{DiskGeometry, Track};

/// Deterministic request-set generator.
///
/// Wraps a `SmallRng` seeded from a caller-supplied value; every draw stays
/// inside the given geometry, so generated workloads never need range
/// validation.
pub struct WorkloadGen(SmallRng);

impl WorkloadGen {
    pub fn new(seed: u64) -> Self {
        WorkloadGen(SmallRng::seed_from_u64(seed))
    }

    /// Draw `n` uniformly distributed track requests.
    pub fn uniform(&mut self, n: usize, geometry: DiskGeometry) -> Vec<Track> {
        (0..n).map(|_| self.track(geometry)).collect()
    }

    /// Draw a single in-range track — e.g. a start head position.
    pub fn track(&mut self, geometry: DiskGeometry) -> Track {
        Track(self.0.gen_range(0..geometry.tracks()))
    }
}
