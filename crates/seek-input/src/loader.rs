//! CSV bulk import for request sets.
//!
//! # CSV format
//!
//! The file is headerless; only the FIRST data row is read, mirroring how
//! request batches are exported one-per-line from spreadsheets:
//!
//! ```csv
//! 98,183,37,122,14,124,65,67
//! 55,58,39,18
//! ```
//!
//! loads `[98, 183, 37, 122, 14, 124, 65, 67]` — the second row is
//! ignored.  Blank cells are skipped; any non-integer cell is a typed
//! parse error.  The imported values still go through
//! [`validate_workload`][crate::validate_workload] before reaching the
//! engine — the loader checks shape, not geometry.

use std::io::Read;
use std::path::Path;

use crate::parse::parse_track;
use crate::{InputError, InputResult};

use seek_core::Track;

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a request set from the first row of a CSV file.
pub fn load_requests_csv(path: &Path) -> InputResult<Vec<Track>> {
    let file = std::fs::File::open(path).map_err(InputError::Io)?;
    load_requests_reader(file)
}

/// Like [`load_requests_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_requests_reader<R: Read>(reader: R) -> InputResult<Vec<Track>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut record = csv::StringRecord::new();
    if !csv_reader.read_record(&mut record)? {
        return Err(InputError::Empty);
    }

    record
        .iter()
        .filter(|cell| !cell.trim().is_empty())
        .map(parse_track)
        .collect()
}
