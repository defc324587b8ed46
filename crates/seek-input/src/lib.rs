//! `seek-input` — the input collector for the seeksim workspace.
//!
//! Everything the engine assumes about its inputs is enforced here, before
//! a policy ever runs: track addresses parse as non-negative integers, lie
//! inside the disk geometry, and the request set is non-empty.  The engine
//! itself never re-validates.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`parse`]    | `parse_request_line`, `parse_head_position`, `validate_workload` |
//! | [`loader`]   | `load_requests_csv`, `load_requests_reader`           |
//! | [`workload`] | `WorkloadGen` — seeded random request generation      |
//! | [`error`]    | `InputError`, `InputResult<T>`                        |

pub mod error;
pub mod loader;
pub mod parse;
pub mod workload;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{InputError, InputResult};
pub use loader::{load_requests_csv, load_requests_reader};
pub use parse::{parse_head_position, parse_request_line, validate_workload};
pub use workload::WorkloadGen;
