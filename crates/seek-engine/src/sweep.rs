//! The boundary-bounded sweep state machine shared by SCAN and C-SCAN.
//!
//! # Why this exists
//!
//! The sweeping policies mix real request service with synthetic boundary
//! travel (the forced stop at the top track, and C-SCAN's flat-cost flyback
//! to track 0).  Encoding those rules as straight-line branching buries the
//! cost model inside each policy; an explicit state machine makes every
//! transition — and every unit of charged movement — individually visible
//! and testable.
//!
//! # Phase diagram
//!
//! ```text
//! SweepingUp ──► AtTopBoundary ──► ServicingLow ──► Done        (SCAN)
//! SweepingUp ──► AtTopBoundary ──► JumpingToZero ──► ServicingLow ──► Done   (C-SCAN)
//! ```
//!
//! `AtTopBoundary` emits a serviced stop at the top track only when the
//! upward sweep did not already end there.  `JumpingToZero` always charges
//! the full disk span (`tracks - 1`), regardless of where the head actually
//! was — the flyback is modeled as a constant-cost rotation, not a seek.

use seek_core::{DiskGeometry, Track};

// ── Phases ────────────────────────────────────────────────────────────────────

/// Phase of a boundary-bounded sweep.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SweepPhase {
    /// Servicing the partition at or above the start position, ascending.
    SweepingUp,
    /// Forced serviced stop at the top boundary track.
    AtTopBoundary,
    /// C-SCAN only: the circular flyback to track 0.
    JumpingToZero,
    /// Servicing the partition below the start position (descending for
    /// SCAN, ascending from 0 for C-SCAN — the machine services whatever
    /// order the caller pre-sorted it in).
    ServicingLow,
    /// All partitions drained.
    Done,
}

// ── SweepStep ─────────────────────────────────────────────────────────────────

/// One emitted step of a sweep: the track serviced, the movement charged to
/// reach it, and the phase that produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SweepStep {
    pub track: Track,
    pub cost:  u64,
    pub phase: SweepPhase,
}

// ── SweepMachine ──────────────────────────────────────────────────────────────

/// Drives a sweep over two pre-sorted request partitions.
///
/// The caller partitions the request set at the start position and sorts
/// each half in service order (`high` ascending; `low` descending for SCAN
/// or ascending for C-SCAN), then drains the machine as an iterator:
///
/// ```rust,ignore
/// let machine = SweepMachine::new(high, low, start, geometry, false);
/// for step in machine {
///     total += step.cost;
///     order.push(step.track);
/// }
/// ```
pub struct SweepMachine {
    phase:    SweepPhase,
    head:     Track,
    geometry: DiskGeometry,
    circular: bool,
    /// Partition at or above the start, in service order.
    high:     Vec<Track>,
    high_idx: usize,
    /// Partition below the start, in service order.
    low:      Vec<Track>,
    low_idx:  usize,
}

impl SweepMachine {
    /// Construct a machine in the initial `SweepingUp` phase.
    ///
    /// `circular` selects the C-SCAN flyback (`JumpingToZero`) between the
    /// boundary stop and the low partition.
    pub fn new(
        high:     Vec<Track>,
        low:      Vec<Track>,
        start:    Track,
        geometry: DiskGeometry,
        circular: bool,
    ) -> Self {
        Self {
            phase: SweepPhase::SweepingUp,
            head: start,
            geometry,
            circular,
            high,
            high_idx: 0,
            low,
            low_idx: 0,
        }
    }

    /// The machine's current phase.
    pub fn phase(&self) -> SweepPhase {
        self.phase
    }

    /// The head position after the most recently emitted step.
    pub fn head(&self) -> Track {
        self.head
    }

    /// Service the next track in `partition`, or `None` when it is drained.
    fn service(&mut self, from_low: bool) -> Option<SweepStep> {
        let (partition, idx) = if from_low {
            (&self.low, &mut self.low_idx)
        } else {
            (&self.high, &mut self.high_idx)
        };
        let next = *partition.get(*idx)?;
        *idx += 1;

        let cost = self.head.distance(next);
        self.head = next;
        Some(SweepStep { track: next, cost, phase: self.phase })
    }
}

impl Iterator for SweepMachine {
    type Item = SweepStep;

    fn next(&mut self) -> Option<SweepStep> {
        loop {
            match self.phase {
                SweepPhase::SweepingUp => {
                    if let Some(step) = self.service(false) {
                        return Some(step);
                    }
                    self.phase = SweepPhase::AtTopBoundary;
                }

                SweepPhase::AtTopBoundary => {
                    // Decide the follow-up phase first so the boundary stop
                    // is emitted at most once.
                    self.phase = if self.circular {
                        SweepPhase::JumpingToZero
                    } else {
                        SweepPhase::ServicingLow
                    };

                    let top = self.geometry.max_track();
                    if self.head != top {
                        let cost = self.head.distance(top);
                        self.head = top;
                        return Some(SweepStep { track: top, cost, phase: SweepPhase::AtTopBoundary });
                    }
                    // Sweep already ended on the top track — no extra stop.
                }

                SweepPhase::JumpingToZero => {
                    self.phase = SweepPhase::ServicingLow;
                    self.head = Track::ZERO;
                    // Flat cost: the full disk span, independent of where
                    // the upward sweep actually ended.
                    return Some(SweepStep {
                        track: Track::ZERO,
                        cost:  self.geometry.flyback_cost(),
                        phase: SweepPhase::JumpingToZero,
                    });
                }

                SweepPhase::ServicingLow => {
                    if let Some(step) = self.service(true) {
                        return Some(step);
                    }
                    self.phase = SweepPhase::Done;
                }

                SweepPhase::Done => return None,
            }
        }
    }
}

// ── Partitioning helper ───────────────────────────────────────────────────────

/// Split `requests` at `start`: tracks strictly below, and tracks at or
/// above.  Relative input order is preserved within each half; the caller
/// sorts them into service order.
pub(crate) fn partition(requests: &[Track], start: Track) -> (Vec<Track>, Vec<Track>) {
    let mut low = Vec::new();
    let mut high = Vec::new();
    for &request in requests {
        if request < start {
            low.push(request);
        } else {
            high.push(request);
        }
    }
    (low, high)
}
