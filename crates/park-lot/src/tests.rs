//! Unit tests for park-lot.
//!
//! Most tests use the 50-spot reference layout; a few build tiny custom
//! layouts to pin tie-breaking.

#[cfg(test)]
mod helpers {
    use park_core::SimConfig;

    use crate::{ParkingLot, SpotLayout, SpotLayoutBuilder};

    pub fn reference_lot() -> ParkingLot {
        ParkingLot::from_config(SpotLayout::reference(), &SimConfig::default())
    }

    /// Three spots: two tied at 2 cells on floor 1, one at 1 cell on floor 2.
    pub fn tie_lot() -> ParkingLot {
        let mut b = SpotLayoutBuilder::new();
        b.add_spot(1, 1, 1); // 0: 6 m
        b.add_spot(2, 0, 1); // 1: 6 m (tie with 0)
        b.add_spot(1, 0, 2); // 2: 3 m + 150 m
        ParkingLot::from_config(b.build(), &SimConfig::default())
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod layout {
    use park_core::SpotId;

    use crate::{Spot, SpotLayout, SpotLayoutBuilder};

    #[test]
    fn reference_has_fifty_spots_on_two_floors() {
        let layout = SpotLayout::reference();
        assert_eq!(layout.len(), 50);
        assert_eq!(layout.floor_count(), 2);
    }

    #[test]
    fn reference_landmarks() {
        let layout = SpotLayout::reference();
        assert_eq!(layout.spot(SpotId(0)), Spot::new(0, 1, 1));
        assert_eq!(layout.spot(SpotId(1)), Spot::new(1, 1, 1));
        assert_eq!(layout.spot(SpotId(25)), Spot::new(5, 5, 1));
        assert_eq!(layout.spot(SpotId(26)), Spot::new(1, 1, 2));
        assert_eq!(layout.spot(SpotId(49)), Spot::new(4, 5, 2));
    }

    #[test]
    fn reference_has_no_duplicate_positions() {
        let layout = SpotLayout::reference();
        let unique: std::collections::HashSet<Spot> =
            (0..50).map(|i| layout.spot(SpotId(i))).collect();
        assert_eq!(unique.len(), 50);
    }

    #[test]
    fn builder_assigns_sequential_ids() {
        let mut b = SpotLayoutBuilder::new();
        assert_eq!(b.add_spot(0, 0, 1), SpotId(0));
        assert_eq!(b.add_spot(3, 2, 1), SpotId(1));
        let layout = b.build();
        assert_eq!(layout.len(), 2);
        assert_eq!(layout.spot(SpotId(1)), Spot::new(3, 2, 1));
    }

    #[test]
    fn empty_layout() {
        let layout = SpotLayoutBuilder::new().build();
        assert!(layout.is_empty());
        assert_eq!(layout.floor_count(), 0);
    }
}

// ── Cost model ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cost {
    use crate::{CostModel, Spot};

    #[test]
    fn corner_spot_on_ground_floor() {
        let model = CostModel::default();
        let spot = Spot::new(0, 1, 1);
        assert!((model.base_distance_m(spot) - 3.0).abs() < 1e-9);
        let cost = model.cost(spot);
        assert!((cost.distance_m - 9.0).abs() < 1e-9);
        assert!((cost.drive_time_s - 124.628_571).abs() < 1e-3, "got {}", cost.drive_time_s);
    }

    #[test]
    fn upper_floor_pays_ramp_penalty() {
        let model = CostModel::default();
        let far = Spot::new(5, 5, 2);
        assert!((model.base_distance_m(far) - 180.0).abs() < 1e-9);
        let cost = model.cost(far);
        assert!((cost.distance_m - 540.0).abs() < 1e-9);
        assert!((cost.drive_time_s - 397.714_286).abs() < 1e-3, "got {}", cost.drive_time_s);
        assert!(cost.drive_time_s > model.cost(Spot::new(0, 1, 1)).drive_time_s);
    }

    #[test]
    fn penalty_counts_each_floor_above_ground() {
        let model = CostModel::default();
        let second = model.base_distance_m(Spot::new(1, 1, 2));
        let third = model.base_distance_m(Spot::new(1, 1, 3));
        assert!((third - second - 150.0).abs() < 1e-9);
    }

    #[test]
    fn cost_is_pure() {
        let model = CostModel::default();
        let spot = Spot::new(3, 4, 2);
        assert_eq!(model.cost(spot), model.cost(spot));
    }
}

// ── Selection policies ────────────────────────────────────────────────────────

#[cfg(test)]
mod policy {
    use std::collections::BTreeSet;

    use park_core::SpotId;

    use super::helpers::{reference_lot, tie_lot};
    use crate::{FarthestSpot, NearestSpot, SelectionPolicy, select_best, select_worst};

    fn all(n: u32) -> BTreeSet<SpotId> {
        (0..n).map(SpotId).collect()
    }

    #[test]
    fn best_and_worst_in_full_reference_lot() {
        let lot = reference_lot();
        let free = all(50);
        assert_eq!(select_best(&lot, &free), SpotId(0));
        // (5,4,2) and (4,5,2) tie on distance; the higher id wins the max.
        assert_eq!(select_worst(&lot, &free), SpotId(49));
    }

    #[test]
    fn ties_break_on_id() {
        let lot = tie_lot();
        let free = all(3);
        assert_eq!(select_best(&lot, &free), SpotId(0));

        let without_zero: BTreeSet<SpotId> = [SpotId(1), SpotId(2)].into();
        assert_eq!(select_best(&lot, &without_zero), SpotId(1));
        assert_eq!(select_worst(&lot, &free), SpotId(2));
    }

    #[test]
    fn singleton_set_returns_its_member() {
        let lot = reference_lot();
        let free: BTreeSet<SpotId> = [SpotId(17)].into();
        assert_eq!(select_best(&lot, &free), SpotId(17));
        assert_eq!(select_worst(&lot, &free), SpotId(17));
    }

    #[test]
    fn trait_returns_none_on_empty() {
        let lot = reference_lot();
        let free = BTreeSet::new();
        assert!(NearestSpot.choose(&lot, &free).is_none());
        assert!(FarthestSpot.choose(&lot, &free).is_none());
        assert_eq!(NearestSpot.name(), "nearest");
        assert_eq!(FarthestSpot.name(), "farthest");
    }

    #[test]
    #[should_panic(expected = "empty free set")]
    fn select_best_panics_on_empty() {
        let lot = reference_lot();
        select_best(&lot, &BTreeSet::new());
    }

    #[test]
    #[should_panic(expected = "empty free set")]
    fn select_worst_panics_on_empty() {
        let lot = reference_lot();
        select_worst(&lot, &BTreeSet::new());
    }
}

#[cfg(test)]
mod policy_props {
    use std::collections::BTreeSet;

    use park_core::SpotId;
    use proptest::prelude::*;

    use super::helpers::reference_lot;
    use crate::{select_best, select_worst};

    proptest! {
        #[test]
        fn selections_are_members_and_ordered(ids in prop::collection::btree_set(0u32..50, 1..50)) {
            let lot = reference_lot();
            let free: BTreeSet<SpotId> = ids.into_iter().map(SpotId).collect();
            let best = select_best(&lot, &free);
            let worst = select_worst(&lot, &free);
            prop_assert!(free.contains(&best));
            prop_assert!(free.contains(&worst));
            prop_assert!(lot.cost(best).distance_m <= lot.cost(worst).distance_m);
            prop_assert!(lot.cost(best).drive_time_s <= lot.cost(worst).drive_time_s);
        }

        #[test]
        fn best_is_minimal(ids in prop::collection::btree_set(0u32..50, 1..50)) {
            let lot = reference_lot();
            let free: BTreeSet<SpotId> = ids.into_iter().map(SpotId).collect();
            let best = select_best(&lot, &free);
            for &other in &free {
                prop_assert!(lot.cost(best).distance_m <= lot.cost(other).distance_m);
            }
        }
    }
}

// ── Occupancy ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod occupancy {
    use park_core::SpotId;

    use crate::Occupancy;

    #[test]
    fn starts_all_free() {
        let occ = Occupancy::all_free(5);
        assert_eq!(occ.free_count(), 5);
        assert_eq!(occ.occupied_count(), 0);
        assert!(occ.is_partition());
    }

    #[test]
    fn occupy_and_release_keep_partition() {
        let mut occ = Occupancy::all_free(3);
        occ.occupy(SpotId(1));
        assert!(!occ.is_free(SpotId(1)));
        assert_eq!(occ.occupied_count(), 1);
        assert!(occ.is_partition());

        assert!(occ.release(SpotId(1)));
        assert!(occ.is_free(SpotId(1)));
        assert!(occ.is_partition());
    }

    #[test]
    fn release_of_free_spot_is_noop() {
        let mut occ = Occupancy::all_free(2);
        assert!(!occ.release(SpotId(0)));
        assert_eq!(occ.free_count(), 2);
    }

    #[test]
    #[should_panic(expected = "is not free")]
    fn double_occupy_panics() {
        let mut occ = Occupancy::all_free(2);
        occ.occupy(SpotId(0));
        occ.occupy(SpotId(0));
    }

    #[test]
    fn empty_lot_has_no_free() {
        let occ = Occupancy::all_free(0);
        assert!(!occ.has_free());
        assert!(occ.is_partition());
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use park_core::SpotId;

    use crate::{LotError, Spot, load_layout_reader};

    #[test]
    fn loads_rows_in_any_order() {
        let csv = "spot_id,column,row,floor\n1,2,3,1\n0,0,1,1\n2,1,1,2\n";
        let layout = load_layout_reader(Cursor::new(csv)).unwrap();
        assert_eq!(layout.len(), 3);
        assert_eq!(layout.spot(SpotId(0)), Spot::new(0, 1, 1));
        assert_eq!(layout.spot(SpotId(1)), Spot::new(2, 3, 1));
        assert_eq!(layout.spot(SpotId(2)), Spot::new(1, 1, 2));
    }

    #[test]
    fn duplicate_id_rejected() {
        let csv = "spot_id,column,row,floor\n0,0,1,1\n0,1,1,1\n";
        let err = load_layout_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, LotError::DuplicateSpot(SpotId(0))));
    }

    #[test]
    fn gap_rejected() {
        let csv = "spot_id,column,row,floor\n0,0,1,1\n2,1,1,1\n";
        let err = load_layout_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, LotError::MissingSpot(SpotId(1))));
    }

    #[test]
    fn floor_zero_rejected() {
        let csv = "spot_id,column,row,floor\n0,0,1,0\n";
        let err = load_layout_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, LotError::InvalidFloor { .. }));
    }

    #[test]
    fn malformed_row_is_parse_error() {
        let csv = "spot_id,column,row,floor\n0,x,1,1\n";
        let err = load_layout_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, LotError::Parse(_)));
    }
}
