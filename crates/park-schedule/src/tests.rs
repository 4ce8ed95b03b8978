//! Unit tests for park-schedule.

use park_core::{ScriptedUniform, SimConfig, SimRng, SimTime, SpotId};

use crate::{ArrivalProcess, DepartureQueue, StayProcess};

fn t(secs: f64) -> SimTime {
    SimTime::from_secs(secs)
}

// ── ArrivalProcess ────────────────────────────────────────────────────────────

#[cfg(test)]
mod arrival_process {
    use super::*;

    #[test]
    fn scripted_gaps_are_exact() {
        let arrivals = ArrivalProcess::from_config(&SimConfig::default()); // 0.1 / s
        let mut rng = ScriptedUniform::new(vec![0.5, 0.75]);
        let g1 = arrivals.next_gap(&mut rng).unwrap();
        let g2 = arrivals.next_gap(&mut rng).unwrap();
        assert!((g1 - 10.0 * std::f64::consts::LN_2).abs() < 1e-12, "got {g1}");
        assert!((g2 - 10.0 * 4f64.ln()).abs() < 1e-12, "got {g2}");
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn zero_draw_still_gives_positive_gap() {
        let arrivals = ArrivalProcess::new(0.1);
        let mut rng = ScriptedUniform::new(vec![0.0]);
        let gap = arrivals.next_gap(&mut rng).unwrap();
        assert!(gap > 0.0);
    }

    #[test]
    fn seeded_gaps_positive_and_reproducible() {
        let arrivals = ArrivalProcess::new(0.1);
        let mut r1 = SimRng::new(42);
        let mut r2 = SimRng::new(42);
        for _ in 0..1_000 {
            let a = arrivals.next_gap(&mut r1).unwrap();
            let b = arrivals.next_gap(&mut r2).unwrap();
            assert!(a > 0.0 && a.is_finite());
            assert_eq!(a, b);
        }
    }

    #[test]
    fn sample_mean_tracks_rate() {
        let arrivals = ArrivalProcess::new(0.1);
        let mut rng = SimRng::new(7);
        let n = 20_000;
        let mean: f64 = (0..n).map(|_| arrivals.next_gap(&mut rng).unwrap()).sum::<f64>() / n as f64;
        assert!((mean - 10.0).abs() < 0.5, "mean gap {mean}");
    }

    #[test]
    fn degenerate_rate_yields_none_without_drawing() {
        let mut rng = ScriptedUniform::new(vec![0.5]);
        for rate in [0.0, -1.0, f64::NAN] {
            let arrivals = ArrivalProcess::new(rate);
            assert!(arrivals.is_degenerate());
            assert_eq!(arrivals.next_gap(&mut rng), None);
        }
        assert_eq!(rng.draws(), 0);
    }
}

// ── StayProcess ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod stay_process {
    use super::*;

    #[test]
    fn scripted_stay_above_floor() {
        let stays = StayProcess::from_config(&SimConfig::default()); // mean 150, min 60
        let mut rng = ScriptedUniform::new(vec![0.5]);
        let s = stays.sample(&mut rng);
        assert!((s - 150.0 * std::f64::consts::LN_2).abs() < 1e-9, "got {s}");
    }

    #[test]
    fn short_stay_is_floored() {
        let stays = StayProcess::new(150.0, 60.0);
        let mut rng = ScriptedUniform::new(vec![0.1]); // raw ≈ 15.8 s
        assert_eq!(stays.sample(&mut rng), 60.0);
    }

    #[test]
    fn seeded_stays_never_below_floor() {
        let stays = StayProcess::new(150.0, 60.0);
        let mut rng = SimRng::new(3);
        for _ in 0..1_000 {
            assert!(stays.sample(&mut rng) >= 60.0);
        }
    }
}

// ── DepartureQueue ────────────────────────────────────────────────────────────

#[cfg(test)]
mod departure_queue {
    use super::*;

    #[test]
    fn pops_in_time_order() {
        let mut q = DepartureQueue::new();
        q.push_departure(t(30.0), SpotId(1));
        q.push_departure(t(10.0), SpotId(2));
        q.push_departure(t(20.0), SpotId(3));
        assert_eq!(q.len(), 3);

        assert_eq!(q.peek_next_departure(), Some((t(10.0), SpotId(2))));
        assert_eq!(q.pop_next_departure(), Some((t(10.0), SpotId(2))));
        assert_eq!(q.pop_next_departure(), Some((t(20.0), SpotId(3))));
        assert_eq!(q.pop_next_departure(), Some((t(30.0), SpotId(1))));
        assert_eq!(q.pop_next_departure(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn equal_times_pop_lower_spot_first() {
        let mut q = DepartureQueue::new();
        q.push_departure(t(5.0), SpotId(9));
        q.push_departure(t(5.0), SpotId(4));
        assert_eq!(q.pop_next_departure(), Some((t(5.0), SpotId(4))));
        assert_eq!(q.pop_next_departure(), Some((t(5.0), SpotId(9))));
    }

    #[test]
    fn side_index_follows_queue() {
        let mut q = DepartureQueue::new();
        q.push_departure(t(12.0), SpotId(0));
        assert_eq!(q.pending_for(SpotId(0)), Some(t(12.0)));
        assert_eq!(q.next_time(), Some(t(12.0)));
        q.pop_next_departure();
        assert_eq!(q.pending_for(SpotId(0)), None);
        assert_eq!(q.next_time(), None);
        assert_eq!(q.scheduled_spots().count(), 0);
    }

    #[test]
    fn spot_can_be_rescheduled_after_pop() {
        let mut q = DepartureQueue::new();
        q.push_departure(t(1.0), SpotId(3));
        q.pop_next_departure();
        q.push_departure(t(2.0), SpotId(3));
        assert_eq!(q.peek_next_departure(), Some((t(2.0), SpotId(3))));
    }

    #[test]
    #[should_panic(expected = "already departs")]
    fn second_pending_departure_panics() {
        let mut q = DepartureQueue::new();
        q.push_departure(t(1.0), SpotId(3));
        q.push_departure(t(2.0), SpotId(3));
    }
}
