//! `seek-core` — foundational types for the `seeksim` head-scheduling
//! simulator.
//!
//! This crate is a dependency of every other `seek-*` crate.  It intentionally
//! has no `seek-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`track`]    | `Track` — integer track addressing, seek distance |
//! | [`geometry`] | `DiskGeometry` — the addressable track range      |
//! | [`result`]   | `ScheduleResult` — service order + cost metrics   |
//! | [`error`]    | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod geometry;
pub mod result;
pub mod track;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geometry::DiskGeometry;
pub use result::ScheduleResult;
pub use track::Track;
