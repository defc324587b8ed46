//! Core error type.
//!
//! Sub-crates define their own error enums (e.g. `seek-input`'s
//! `InputError`) and keep them separate; `CoreError` only covers
//! construction of core types.  The four policy functions themselves cannot
//! fail on well-formed input and return plain `ScheduleResult`s.

use thiserror::Error;

/// Errors from constructing core simulation inputs.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("disk geometry must have at least one track (got {tracks})")]
    InvalidGeometry { tracks: u32 },
}

/// Shorthand result type for core constructors.
pub type CoreResult<T> = Result<T, CoreError>;
