//! The policy comparison table.

use seek_engine::PolicyRun;

// Column widths, sized for the longest header plus breathing room.
const ALGO_W: usize = 12;
const MOVE_W: usize = 16;
const SEEK_W: usize = 14;
const THPT_W: usize = 12;

/// Render a fixed-width metric comparison of every run, sorted by total
/// movement ascending — cheapest policy first.
///
/// The sort is stable: policies tied on movement keep their input order
/// (canonically FCFS, SSTF, SCAN, C-SCAN from the compare runner).
pub fn comparison_table(runs: &[PolicyRun]) -> String {
    let mut rows: Vec<&PolicyRun> = runs.iter().collect();
    rows.sort_by_key(|run| run.result.total_movement);

    let separator = "-".repeat(ALGO_W + MOVE_W + SEEK_W + THPT_W + 3);

    let mut out = String::new();
    out.push_str(&format!(
        "{:<ALGO_W$} {:<MOVE_W$} {:<SEEK_W$} {:<THPT_W$}\n",
        "Algorithm", "Total Movement", "Average Seek", "Throughput"
    ));
    out.push_str(&separator);
    out.push('\n');

    for run in rows {
        out.push_str(&format!(
            "{:<ALGO_W$} {:<MOVE_W$} {:<SEEK_W$} {:<THPT_W$}\n",
            run.policy,
            run.result.total_movement,
            format!("{:.2}", run.result.average_seek),
            format!("{:.4}", run.result.throughput),
        ));
    }

    out.push_str(&separator);
    out.push('\n');
    out
}
