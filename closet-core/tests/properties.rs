//! Property tests for the parts builder, validator and export serializer.

use closet_core::{
    build_parts, expected_part_count, export_for_backend, validate_closet, Accessory,
    CabinetSpec, ClosetState, PartType, RodCount, RodPosition, Tower, CARCASS_PART_COUNT,
};
use proptest::prelude::*;

fn arb_cabinet() -> impl Strategy<Value = CabinetSpec> {
    (30.0f64..600.0, 100.0f64..300.0, 30.0f64..100.0, 1.0f64..6.0)
        .prop_map(|(w, h, d, t)| CabinetSpec::new(w, h, d, t))
}

fn arb_rod_position() -> impl Strategy<Value = RodPosition> {
    prop_oneof![
        Just(RodPosition::High),
        Just(RodPosition::Medium),
        Just(RodPosition::Low),
    ]
}

fn arb_accessory() -> impl Strategy<Value = Accessory> {
    prop_oneof![
        (0i32..12).prop_map(Accessory::shelves),
        (0i32..10).prop_map(Accessory::shoe_shelves),
        (0i32..8, 8.0f64..30.0).prop_map(|(count, height)| Accessory::drawers(count, height)),
        (arb_rod_position(), any::<bool>()).prop_map(|(position, double)| {
            let count = if double { RodCount::Double } else { RodCount::Single };
            Accessory::rod(position, count)
        }),
        Just(Accessory::Prop {
            prop_id: "folded-shirts".to_string(),
        }),
    ]
}

fn arb_towers() -> impl Strategy<Value = Vec<Tower>> {
    prop::collection::vec(
        (10.0f64..220.0, prop::collection::vec(arb_accessory(), 0..5)),
        0..14,
    )
    .prop_map(|towers| {
        towers
            .into_iter()
            .enumerate()
            .map(|(i, (width, accessories))| {
                Tower::new(format!("t{i}"), format!("Tower {}", i + 1), width, 61.0, 213.0)
                    .with_accessories(accessories)
            })
            .collect()
    })
}

fn arb_state() -> impl Strategy<Value = ClosetState> {
    (arb_cabinet(), arb_towers()).prop_map(|(cabinet, towers)| {
        let mut state = ClosetState::default();
        state.cabinet = cabinet;
        state.towers = towers;
        state
    })
}

proptest! {
    #[test]
    fn prop_carcass_is_always_five_symmetric_panels(cabinet in arb_cabinet(), towers in arb_towers()) {
        let mut state = ClosetState::default();
        state.cabinet = cabinet;
        state.towers = towers;

        let parts = build_parts(&state);
        let carcass: Vec<_> = parts.iter().filter(|p| p.part_type.is_carcass()).collect();
        prop_assert_eq!(carcass.len(), CARCASS_PART_COUNT);

        let left = carcass[0].pos()[0];
        let right = carcass[1].pos()[0];
        prop_assert!(
            (left + right).abs() < 1e-9,
            "panel_left.x ({}) + panel_right.x ({}) should be 0",
            left,
            right
        );
    }

    #[test]
    fn prop_part_count_matches_expectation(state in arb_state()) {
        let parts = build_parts(&state);
        prop_assert_eq!(parts.len(), expected_part_count(&state));

        let dividers = parts.iter().filter(|p| p.part_type == PartType::Divider).count();
        prop_assert_eq!(dividers, state.towers.len().saturating_sub(1));
    }

    #[test]
    fn prop_build_is_deterministic(state in arb_state()) {
        prop_assert_eq!(build_parts(&state), build_parts(&state.clone()));
    }

    #[test]
    fn prop_export_is_idempotent(
        state in arb_state(),
        width in -1000.0f64..1000.0,
        tower_height in -10.0f64..500.0,
    ) {
        let mut state = state;
        state.cabinet.width = width;
        if let Some(tower) = state.towers.first_mut() {
            tower.height = tower_height;
        }

        let payload = export_for_backend(&state);
        prop_assert_eq!(payload.reclamped(), payload.clone());
        prop_assert!((30.0..=600.0).contains(&payload.cabinet.width));
        for tower in &payload.towers {
            prop_assert!((50.0..=300.0).contains(&tower.height));
        }
    }

    #[test]
    fn prop_every_violation_has_code_and_path(state in arb_state()) {
        let violations = validate_closet(&state);
        for violation in &violations {
            prop_assert!(!violation.code.is_empty());
            prop_assert!(violation.path.is_some());
        }
    }
}
