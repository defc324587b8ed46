//! Disk geometry — the addressable track range.

use crate::{CoreError, CoreResult, Track};

/// The addressable range of the simulated medium: tracks `0 ..= tracks - 1`.
///
/// Only the sweeping policies (SCAN, C-SCAN) consult the geometry — their
/// sweeps are bounded by the top track.  FCFS and SSTF ignore it.
///
/// `DiskGeometry` is cheap to copy and intentionally holds no heap data.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiskGeometry {
    /// Total number of addressable tracks.  Always > 0.
    tracks: u32,
}

impl DiskGeometry {
    /// The textbook default: 200 tracks, addresses `0..=199`.
    pub const DEFAULT_TRACKS: u32 = 200;

    /// Construct a geometry with `tracks` addressable tracks.
    ///
    /// A zero-track medium has no valid head position, so `tracks == 0` is
    /// rejected with [`CoreError::InvalidGeometry`].
    pub fn new(tracks: u32) -> CoreResult<Self> {
        if tracks == 0 {
            return Err(CoreError::InvalidGeometry { tracks });
        }
        Ok(Self { tracks })
    }

    #[inline]
    pub fn tracks(&self) -> u32 {
        self.tracks
    }

    /// The highest addressable track (`tracks - 1`) — the sweep boundary.
    #[inline]
    pub fn max_track(&self) -> Track {
        Track(self.tracks - 1)
    }

    /// `true` if `track` lies within the addressable range.
    #[inline]
    pub fn contains(&self, track: Track) -> bool {
        track.0 < self.tracks
    }

    /// The C-SCAN flyback cost: the full disk span (`tracks - 1`).
    ///
    /// Charged flat, independent of where the upward sweep actually ended.
    #[inline]
    pub fn flyback_cost(&self) -> u64 {
        (self.tracks - 1) as u64
    }
}

impl Default for DiskGeometry {
    fn default() -> Self {
        Self { tracks: Self::DEFAULT_TRACKS }
    }
}
