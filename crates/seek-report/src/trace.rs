//! Position-over-step traces of a service order.
//!
//! A trace is the head's path through track space: the start position
//! followed by every serviced stop, synthetic boundary stops included.
//! Plotting front-ends consume [`movement_path`] directly (step index on
//! the x-axis, track on the y-axis); terminals get [`trace_table`].

use seek_core::{ScheduleResult, Track};

/// Positions per rendered row in [`trace_table`].
const ROW_WIDTH: usize = 5;

/// The head's full movement path: the start position followed by every
/// entry of the service order.
pub fn movement_path(start: Track, result: &ScheduleResult) -> Vec<Track> {
    let mut path = Vec::with_capacity(result.order.len() + 1);
    path.push(start);
    path.extend_from_slice(&result.order);
    path
}

/// Render one policy's movement path as right-justified track numbers,
/// five per row.
pub fn trace_table(name: &str, start: Track, result: &ScheduleResult) -> String {
    let path = movement_path(start, result);

    let mut out = String::new();
    out.push_str(&format!("{name}:\n"));
    for row in path.chunks(ROW_WIDTH) {
        let cells: Vec<String> = row.iter().map(|track| format!("{:>4}", track.0)).collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}
