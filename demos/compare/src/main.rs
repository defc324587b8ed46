//! compare — run the four head-scheduling policies on the canonical
//! textbook workload and print the comparison.
//!
//! Also demonstrates the CSV bulk-import path and the seeded workload
//! generator, so every input route into the engine is exercised from one
//! binary.

use std::io::Cursor;

use anyhow::Result;

use seek_core::DiskGeometry;
use seek_engine::compare;
use seek_input::{WorkloadGen, load_requests_reader, parse_head_position, parse_request_line,
                 validate_workload};
use seek_report::{comparison_table, trace_table};

// ── Constants ─────────────────────────────────────────────────────────────────

const REQUEST_LINE:  &str = "98, 183, 37, 122, 14, 124, 65, 67";
const HEAD_FIELD:    &str = "53";
const SEED:          u64  = 42;
const RANDOM_COUNT:  usize = 12;

// Request batches as a spreadsheet would export them — first row wins.
const IMPORT_CSV: &str = "\
176,79,34,60,92,11,41,114\n\
55,58,39,18,90,160,150,38,184\n\
";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== compare — seeksim head-scheduling policies ===");
    println!();

    // 1. Collect and validate the canonical workload.
    let geometry = DiskGeometry::default();
    let requests = parse_request_line(REQUEST_LINE)?;
    let start = parse_head_position(HEAD_FIELD)?;
    validate_workload(&requests, start, geometry)?;
    println!(
        "Workload: {} requests  |  Head: {start}  |  Tracks: {}",
        requests.len(),
        geometry.tracks()
    );
    println!();

    // 2. Run all four policies and print the comparison.
    let runs = compare(&requests, start, geometry);
    println!("{}", comparison_table(&runs));

    // 3. Per-policy head traces (boundary stops included).
    println!("Track positions by algorithm:");
    println!();
    for run in &runs {
        println!("{}", trace_table(run.policy, start, &run.result));
    }

    // 4. CSV bulk import.
    let imported = load_requests_reader(Cursor::new(IMPORT_CSV))?;
    validate_workload(&imported, start, geometry)?;
    println!("Imported {} requests from CSV (first row only):", imported.len());
    let runs = compare(&imported, start, geometry);
    println!("{}", comparison_table(&runs));

    // 5. Seeded random workload — same seed, same comparison, every run.
    let mut generator = WorkloadGen::new(SEED);
    let random = generator.uniform(RANDOM_COUNT, geometry);
    let random_start = generator.track(geometry);
    println!("Random workload ({RANDOM_COUNT} requests, seed {SEED}, head {random_start}):");
    let runs = compare(&random, random_start, geometry);
    println!("{}", comparison_table(&runs));

    Ok(())
}
