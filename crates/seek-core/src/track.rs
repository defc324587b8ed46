//! Integer track addressing on the simulated linear medium.
//!
//! A `Track` is both a pending-request address and a head position — the
//! access mechanism's location is always "at some track".  Wrapping `u32`
//! makes negative addresses unrepresentable; upper-range checks against a
//! [`DiskGeometry`][crate::DiskGeometry] are the input layer's job.

use std::fmt;

/// A track address on the simulated medium.
///
/// `Copy + Ord + Hash` so addresses can be sorted, partitioned, and used as
/// map keys without ceremony.  The inner integer is `pub` for direct
/// arithmetic, but callers should prefer [`Track::distance`] for seek-cost
/// math.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track(pub u32);

impl Track {
    /// The innermost track — C-SCAN's flyback target.
    pub const ZERO: Track = Track(0);

    /// Seek distance to `other` — the absolute difference in track numbers,
    /// widened to `u64` so movement sums cannot overflow.
    #[inline]
    pub fn distance(self, other: Track) -> u64 {
        self.0.abs_diff(other.0) as u64
    }
}

impl From<u32> for Track {
    #[inline]
    fn from(n: u32) -> Track {
        Track(n)
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
