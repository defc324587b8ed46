//! Unit and scenario tests for the scheduling engine.

use seek_core::{DiskGeometry, ScheduleResult, Track};

use crate::{CScan, Fcfs, SchedulePolicy, Scan, Sstf, compare};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn tracks(values: &[u32]) -> Vec<Track> {
    values.iter().copied().map(Track).collect()
}

fn geom() -> DiskGeometry {
    DiskGeometry::default() // 200 tracks
}

/// The canonical textbook workload used across the scenario tests.
fn canonical() -> Vec<Track> {
    tracks(&[98, 183, 37, 122, 14, 124, 65, 67])
}

/// Multiset comparison of a service order against the input, after
/// stripping the given synthetic boundary stops.
fn is_permutation_excluding(order: &[Track], input: &[Track], synthetic: &[Track]) -> bool {
    let mut serviced: Vec<Track> = order.to_vec();
    for &stop in synthetic {
        if let Some(pos) = serviced.iter().position(|&t| t == stop) {
            serviced.remove(pos);
        }
    }
    let mut expected: Vec<Track> = input.to_vec();
    serviced.sort_unstable();
    expected.sort_unstable();
    serviced == expected
}

#[cfg(test)]
mod fcfs_tests {
    use super::*;

    #[test]
    fn canonical_scenario() {
        let result = Fcfs.schedule(&canonical(), Track(53), geom());
        assert_eq!(result.order, canonical());
        assert_eq!(result.total_movement, 640);
        assert_eq!(result.average_seek, 640.0 / 8.0);
        assert_eq!(result.throughput, 8.0 / 640.0);
    }

    #[test]
    fn preserves_arrival_order_under_permutation() {
        let mut reversed = canonical();
        reversed.reverse();
        let result = Fcfs.schedule(&reversed, Track(53), geom());
        assert_eq!(result.order, reversed);
    }

    #[test]
    fn empty_request_set() {
        assert_eq!(Fcfs.schedule(&[], Track(53), geom()), ScheduleResult::empty());
    }

    #[test]
    fn all_requests_under_head() {
        let result = Fcfs.schedule(&tracks(&[53, 53, 53]), Track(53), geom());
        assert_eq!(result.total_movement, 0);
        assert_eq!(result.average_seek, 0.0);
        assert_eq!(result.throughput, 0.0);
    }

    #[test]
    fn does_not_mutate_caller_requests() {
        let requests = canonical();
        let before = requests.clone();
        let _ = Fcfs.schedule(&requests, Track(53), geom());
        assert_eq!(requests, before);
    }
}

#[cfg(test)]
mod sstf_tests {
    use super::*;

    #[test]
    fn canonical_scenario() {
        let result = Sstf.schedule(&canonical(), Track(53), geom());
        assert_eq!(result.order, tracks(&[65, 67, 37, 14, 98, 122, 124, 183]));
        assert_eq!(result.total_movement, 236);
    }

    #[test]
    fn beats_fcfs_on_canonical_workload() {
        let fcfs = Fcfs.schedule(&canonical(), Track(53), geom());
        let sstf = Sstf.schedule(&canonical(), Track(53), geom());
        assert!(sstf.total_movement < fcfs.total_movement);
    }

    #[test]
    fn tie_break_takes_first_in_remaining_order() {
        // 40 and 60 are both 10 tracks away; 40 arrived first.
        let result = Sstf.schedule(&tracks(&[40, 60]), Track(50), geom());
        assert_eq!(result.order, tracks(&[40, 60]));

        // Swap the arrival order and the tie resolves the other way.
        let result = Sstf.schedule(&tracks(&[60, 40]), Track(50), geom());
        assert_eq!(result.order, tracks(&[60, 40]));
    }

    #[test]
    fn duplicates_serviced_individually() {
        let result = Sstf.schedule(&tracks(&[65, 65]), Track(53), geom());
        assert_eq!(result.order, tracks(&[65, 65]));
        // Second visit is free — the head is already there.
        assert_eq!(result.total_movement, 12);
    }

    #[test]
    fn order_is_permutation_of_input() {
        let result = Sstf.schedule(&canonical(), Track(53), geom());
        assert!(is_permutation_excluding(&result.order, &canonical(), &[]));
    }

    #[test]
    fn empty_request_set() {
        assert_eq!(Sstf.schedule(&[], Track(53), geom()), ScheduleResult::empty());
    }

    #[test]
    fn deterministic_across_calls() {
        let a = Sstf.schedule(&canonical(), Track(53), geom());
        let b = Sstf.schedule(&canonical(), Track(53), geom());
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod scan_tests {
    use super::*;

    #[test]
    fn textbook_scenario() {
        // Sweep up through 65 and 150, forced stop at 199, back down
        // through 45, 20, 10.
        let result = Scan.schedule(&tracks(&[45, 20, 65, 10, 150]), Track(50), geom());
        assert_eq!(result.order, tracks(&[65, 150, 199, 45, 20, 10]));
        assert_eq!(
            result.total_movement,
            (65 - 50) + (150 - 65) + (199 - 150) + (199 - 45) + (45 - 20) + (20 - 10)
        );
        assert_eq!(result.total_movement, 338);
    }

    #[test]
    fn canonical_scenario() {
        let result = Scan.schedule(&canonical(), Track(53), geom());
        assert_eq!(result.order, tracks(&[65, 67, 98, 122, 124, 183, 199, 37, 14]));
        assert_eq!(result.total_movement, 331);
    }

    #[test]
    fn boundary_stop_forced_even_with_no_high_requests() {
        // Everything lies below the start; the head still sweeps all the
        // way up to 199 first.
        let result = Scan.schedule(&tracks(&[10, 30]), Track(50), geom());
        assert_eq!(result.order, tracks(&[199, 30, 10]));
        assert_eq!(result.total_movement, 149 + 169 + 20);
    }

    #[test]
    fn no_boundary_stop_when_sweep_ends_at_top() {
        let result = Scan.schedule(&tracks(&[150, 199]), Track(199), geom());
        assert_eq!(result.order, tracks(&[199, 150]));
        assert_eq!(result.total_movement, 49);
    }

    #[test]
    fn average_seek_divides_by_request_count_not_order_len() {
        let requests = tracks(&[45, 20, 65, 10, 150]);
        let result = Scan.schedule(&requests, Track(50), geom());
        // order has 6 entries (the synthetic 199), but 5 real requests.
        assert_eq!(result.order.len(), 6);
        assert_eq!(result.request_count, 5);
        assert_eq!(result.average_seek, 338.0 / 5.0);
    }

    #[test]
    fn order_is_permutation_plus_top_stop() {
        let requests = canonical();
        let result = Scan.schedule(&requests, Track(53), geom());
        assert!(is_permutation_excluding(&result.order, &requests, &[Track(199)]));
    }

    #[test]
    fn respects_custom_geometry() {
        let geom = DiskGeometry::new(100).unwrap();
        let result = Scan.schedule(&tracks(&[10, 60]), Track(50), geom);
        assert_eq!(result.order, tracks(&[60, 99, 10]));
        assert_eq!(result.total_movement, 10 + 39 + 89);
    }

    #[test]
    fn empty_request_set() {
        assert_eq!(Scan.schedule(&[], Track(53), geom()), ScheduleResult::empty());
    }
}

#[cfg(test)]
mod cscan_tests {
    use super::*;

    #[test]
    fn textbook_scenario() {
        let result = CScan.schedule(&tracks(&[45, 20, 65, 10, 150]), Track(50), geom());
        assert_eq!(result.order, tracks(&[65, 150, 199, 0, 10, 20, 45]));
        // Up-sweep 15 + 85, boundary 49, flat flyback 199, then 10 + 10 + 25.
        assert_eq!(result.total_movement, 15 + 85 + 49 + 199 + 10 + 10 + 25);
        assert_eq!(result.total_movement, 393);
    }

    #[test]
    fn canonical_scenario() {
        let result = CScan.schedule(&canonical(), Track(53), geom());
        assert_eq!(result.order, tracks(&[65, 67, 98, 122, 124, 183, 199, 0, 14, 37]));
        assert_eq!(result.total_movement, 130 + 16 + 199 + 14 + 23);
    }

    #[test]
    fn flyback_cost_is_flat_regardless_of_head_position() {
        // Identical low partitions, different up-sweep endpoints: the
        // flyback contributes exactly 199 in both runs.
        let near_top = CScan.schedule(&tracks(&[198, 10]), Track(50), geom());
        let far_from_top = CScan.schedule(&tracks(&[60, 10]), Track(50), geom());
        // near_top: 148 + 1 + 199 + 10; far_from_top: 10 + 139 + 199 + 10.
        assert_eq!(near_top.total_movement, 148 + 1 + 199 + 10);
        assert_eq!(far_from_top.total_movement, 10 + 139 + 199 + 10);
    }

    #[test]
    fn zero_stop_appended_even_with_no_high_requests() {
        let result = CScan.schedule(&tracks(&[10]), Track(50), geom());
        assert_eq!(result.order, tracks(&[199, 0, 10]));
        assert_eq!(result.total_movement, 149 + 199 + 10);
    }

    #[test]
    fn zero_stop_appended_even_with_no_low_requests() {
        let result = CScan.schedule(&tracks(&[60]), Track(50), geom());
        assert_eq!(result.order, tracks(&[60, 199, 0]));
        assert_eq!(result.total_movement, 10 + 139 + 199);
    }

    #[test]
    fn order_is_permutation_plus_two_stops() {
        let requests = canonical();
        let result = CScan.schedule(&requests, Track(53), geom());
        assert!(is_permutation_excluding(
            &result.order,
            &requests,
            &[Track(199), Track(0)]
        ));
    }

    #[test]
    fn empty_request_set() {
        assert_eq!(CScan.schedule(&[], Track(53), geom()), ScheduleResult::empty());
    }
}

#[cfg(test)]
mod sweep_tests {
    use super::*;
    use crate::sweep::{SweepMachine, SweepPhase, SweepStep};

    #[test]
    fn circular_phase_sequence() {
        let machine = SweepMachine::new(tracks(&[60]), tracks(&[10]), Track(50), geom(), true);
        let steps: Vec<SweepStep> = machine.collect();
        assert_eq!(
            steps,
            vec![
                SweepStep { track: Track(60),  cost: 10,  phase: SweepPhase::SweepingUp },
                SweepStep { track: Track(199), cost: 139, phase: SweepPhase::AtTopBoundary },
                SweepStep { track: Track(0),   cost: 199, phase: SweepPhase::JumpingToZero },
                SweepStep { track: Track(10),  cost: 10,  phase: SweepPhase::ServicingLow },
            ]
        );
    }

    #[test]
    fn linear_sweep_skips_flyback() {
        let machine = SweepMachine::new(tracks(&[60]), tracks(&[10]), Track(50), geom(), false);
        let phases: Vec<SweepPhase> = machine.map(|s| s.phase).collect();
        assert_eq!(
            phases,
            vec![SweepPhase::SweepingUp, SweepPhase::AtTopBoundary, SweepPhase::ServicingLow]
        );
    }

    #[test]
    fn boundary_stop_skipped_when_already_at_top() {
        let machine = SweepMachine::new(tracks(&[199]), tracks(&[5]), Track(199), geom(), false);
        let steps: Vec<SweepStep> = machine.collect();
        assert_eq!(
            steps,
            vec![
                SweepStep { track: Track(199), cost: 0,   phase: SweepPhase::SweepingUp },
                SweepStep { track: Track(5),   cost: 194, phase: SweepPhase::ServicingLow },
            ]
        );
    }

    #[test]
    fn terminal_phase_is_done() {
        let mut machine = SweepMachine::new(tracks(&[60]), vec![], Track(50), geom(), false);
        assert_eq!(machine.phase(), SweepPhase::SweepingUp);
        while machine.next().is_some() {}
        assert_eq!(machine.phase(), SweepPhase::Done);
        // Exhausted machines stay exhausted.
        assert_eq!(machine.next(), None);
    }

    #[test]
    fn head_tracks_last_emitted_step() {
        let mut machine = SweepMachine::new(tracks(&[60, 80]), vec![], Track(50), geom(), false);
        machine.next();
        assert_eq!(machine.head(), Track(60));
        machine.next();
        assert_eq!(machine.head(), Track(80));
    }
}

#[cfg(test)]
mod compare_tests {
    use super::*;

    #[test]
    fn fixed_policy_order() {
        let runs = compare(&canonical(), Track(53), geom());
        let names: Vec<&str> = runs.iter().map(|r| r.policy).collect();
        assert_eq!(names, vec!["FCFS", "SSTF", "SCAN", "C-SCAN"]);
    }

    #[test]
    fn matches_individual_runs() {
        let requests = canonical();
        let runs = compare(&requests, Track(53), geom());
        assert_eq!(runs[0].result, Fcfs.schedule(&requests, Track(53), geom()));
        assert_eq!(runs[1].result, Sstf.schedule(&requests, Track(53), geom()));
        assert_eq!(runs[2].result, Scan.schedule(&requests, Track(53), geom()));
        assert_eq!(runs[3].result, CScan.schedule(&requests, Track(53), geom()));
    }

    #[test]
    fn deterministic_across_invocations() {
        let a = compare(&canonical(), Track(53), geom());
        let b = compare(&canonical(), Track(53), geom());
        assert_eq!(a, b);
    }

    #[test]
    fn empty_workload_yields_four_empty_results() {
        let runs = compare(&[], Track(53), geom());
        assert_eq!(runs.len(), 4);
        assert!(runs.iter().all(|r| r.result == ScheduleResult::empty()));
    }
}
