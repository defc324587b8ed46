//! Interactive-input parsing and workload validation.
//!
//! Parsing is strict: every comma-separated token must be a non-negative
//! integer, and an empty token ("98,,65") is an error.  The CSV bulk-import
//! path is the lenient one — see [`crate::loader`], which skips blank
//! cells the way spreadsheet exports produce them.

use seek_core::{DiskGeometry, Track};

use crate::{InputError, InputResult};

/// Parse a comma-separated request line ("98, 183, 37") into tracks.
///
/// Rejects an empty line, empty tokens, and anything that is not a
/// non-negative integer (negative values fail `u32` parsing and surface as
/// a parse error with the offending token).
pub fn parse_request_line(line: &str) -> InputResult<Vec<Track>> {
    if line.trim().is_empty() {
        return Err(InputError::Empty);
    }
    line.split(',').map(parse_track).collect()
}

/// Parse the initial head position — a single non-negative integer.
pub fn parse_head_position(field: &str) -> InputResult<Track> {
    if field.trim().is_empty() {
        return Err(InputError::Parse("head position cannot be empty".into()));
    }
    parse_track(field)
}

/// Validate a fully assembled workload against the disk geometry.
///
/// The request set must be non-empty and every track — requests and head
/// alike — must lie inside the addressable range.  An empty set is an
/// *input* error here even though the engine itself treats it as a defined
/// degenerate case: an interactive run with nothing to service is a user
/// mistake.
pub fn validate_workload(
    requests: &[Track],
    start:    Track,
    geometry: DiskGeometry,
) -> InputResult<()> {
    if requests.is_empty() {
        return Err(InputError::Empty);
    }
    for &track in requests.iter().chain(std::iter::once(&start)) {
        if !geometry.contains(track) {
            return Err(InputError::TrackOutOfRange {
                track:  track.0,
                tracks: geometry.tracks(),
            });
        }
    }
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

pub(crate) fn parse_track(token: &str) -> InputResult<Track> {
    token
        .trim()
        .parse::<u32>()
        .map(Track)
        .map_err(|_| {
            InputError::Parse(format!(
                "invalid track {:?}: expected a non-negative integer",
                token.trim()
            ))
        })
}
