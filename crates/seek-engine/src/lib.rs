//! `seek-engine` — the scheduling engine for the seeksim workspace.
//!
//! Four textbook policies decide in what order a set of pending track
//! requests is serviced from a given head position:
//!
//! | Policy    | Strategy                                             | Cost  |
//! |-----------|------------------------------------------------------|-------|
//! | [`Fcfs`]  | arrival order, unchanged                             | O(n)  |
//! | [`Sstf`]  | greedy nearest-neighbor                              | O(n²) |
//! | [`Scan`]  | sweep to the top boundary, then back down            | O(n log n) |
//! | [`CScan`] | sweep up, fly back to track 0, sweep up again        | O(n log n) |
//!
//! All four implement [`SchedulePolicy`]: pure, deterministic, no side
//! effects, and the caller's request slice is never mutated.  An empty
//! request set yields all-zero metrics from every policy.
//!
//! The sweeping policies share an explicit state machine
//! ([`sweep::SweepMachine`]) so the boundary-stop and flyback costs are
//! unambiguous and independently testable.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use seek_core::{DiskGeometry, Track};
//! use seek_engine::{SchedulePolicy, Sstf};
//!
//! let requests: Vec<Track> = [98, 183, 37, 122].into_iter().map(Track).collect();
//! let result = Sstf.schedule(&requests, Track(53), DiskGeometry::default());
//! println!("{} tracks of head travel", result.total_movement);
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs [`compare`]'s four policies on Rayon's thread pool. |

pub mod compare;
pub mod cscan;
pub mod fcfs;
pub mod policy;
pub mod scan;
pub mod sstf;
pub mod sweep;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use compare::{PolicyRun, all_policies, compare};
pub use cscan::CScan;
pub use fcfs::Fcfs;
pub use policy::SchedulePolicy;
pub use scan::Scan;
pub use sstf::Sstf;
pub use sweep::{SweepMachine, SweepPhase, SweepStep};
