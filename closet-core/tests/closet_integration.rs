//! Closet Integration Tests
//!
//! Drives whole documents through the public API:
//! - Loading (including v1 migration and lenient numbers)
//! - Parts building against worked geometry examples
//! - Validation and export of the same snapshot

use closet_core::{
    build_parts, derive_dims, expected_part_count, export_for_backend, has_errors, load_state,
    validate_closet, Accessory, AutoCreatePreset, CabinetSpec, ClosetPart, ClosetState,
    ClosetType, PartType, RodCount, RodPosition, SequentialIds, Severity, Tower,
    CARCASS_PART_COUNT,
};

const EPS: f64 = 1e-9;

/// A cabinet with the given towers and default everything else.
fn closet(cabinet: CabinetSpec, towers: Vec<Tower>) -> ClosetState {
    let mut state = ClosetState::default();
    state.cabinet = cabinet;
    state.towers = towers;
    state
}

fn part<'a>(parts: &'a [ClosetPart], id: &str) -> &'a ClosetPart {
    parts
        .iter()
        .find(|p| p.id == id)
        .unwrap_or_else(|| panic!("missing part {id}"))
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_load_state_with_string_numbers() {
    let json = r#"{
        "schemaVersion": 2,
        "units": "cm",
        "closetType": "reach_in",
        "room": {
            "shape": "rectangular",
            "walls": [],
            "height": "244"
        },
        "cabinet": { "width": "244", "height": 213, "depth": "61", "thickness": "" },
        "towers": [
            {
                "id": "t1",
                "label": "Tower 1",
                "width": "120",
                "depth": 61,
                "height": 213,
                "accessories": [
                    { "type": "shelf_set", "count": 3 },
                    { "type": "rod", "position": "high", "count": 2 },
                    { "type": "drawer", "count": 2, "drawerHeight": "15" },
                    { "type": "prop", "propId": "hat-box" }
                ]
            }
        ],
        "materials": { "finishId": "oak", "backingId": "backing-white", "handleStyleId": "handle-none" }
    }"#;

    let state = load_state(json).expect("load");
    assert!((state.cabinet.width - 244.0).abs() < EPS);
    // Empty strings read as zero, the same as blank UI fields.
    assert!(state.cabinet.thickness.abs() < EPS);
    assert!((state.towers[0].width - 120.0).abs() < EPS);
    assert_eq!(state.closet_type, ClosetType::ReachIn);

    let parts = build_parts(&state);
    assert_eq!(parts.len(), CARCASS_PART_COUNT + 3 + 2 + 2);
    assert!(parts.iter().all(|p| p.material_id != "miami-linen"));
}

#[test]
fn test_load_v1_document_migrates() {
    let json = r#"{
        "schemaVersion": 1,
        "units": "cm",
        "cabinet": { "width": 120, "height": 200, "depth": 60, "thickness": 2 },
        "shelves": 4,
        "materials": {
            "carcassMaterialId": "carcass-default",
            "backMaterialId": "back-default",
            "edgeBandingId": "edge-default"
        }
    }"#;

    let state = load_state(json).expect("load v1");
    assert_eq!(state.schema_version, 2);
    assert_eq!(state.towers.len(), 1);
    assert_eq!(state.towers[0].id, "tower_migrated_1");
    assert_eq!(state.materials.finish_id, "miami-linen");
    assert_eq!(state.materials.backing_id, "backing-white");

    let parts = build_parts(&state);
    let shelves: Vec<_> = parts
        .iter()
        .filter(|p| p.part_type == PartType::Shelf)
        .collect();
    assert_eq!(shelves.len(), 4);
    assert!(shelves
        .iter()
        .all(|p| p.tower_id.as_deref() == Some("tower_migrated_1")));
}

#[test]
fn test_unknown_accessory_type_is_rejected() {
    let json = r#"{
        "schemaVersion": 2,
        "units": "cm",
        "closetType": "custom",
        "room": { "shape": "rectangular", "walls": [], "height": 244 },
        "cabinet": { "width": 120, "height": 213, "depth": 61, "thickness": 2 },
        "towers": [
            { "id": "t1", "label": "T", "width": 116, "depth": 61, "height": 213,
              "accessories": [ { "type": "trapdoor" } ] }
        ],
        "materials": { "finishId": "a", "backingId": "b", "handleStyleId": "c" }
    }"#;
    assert!(load_state(json).is_err());
}

/// A custom closet with one full-width tower holding `accessories` (raw JSON).
fn single_tower_doc(accessories: &str) -> String {
    format!(
        r#"{{
        "schemaVersion": 2,
        "units": "cm",
        "closetType": "custom",
        "room": {{ "shape": "rectangular", "walls": [], "height": 244 }},
        "cabinet": {{ "width": 120, "height": 213, "depth": 61, "thickness": 2 }},
        "towers": [
            {{ "id": "t1", "label": "Tower 1", "width": 116, "depth": 61, "height": 213,
              "accessories": [ {accessories} ] }}
        ],
        "materials": {{ "finishId": "a", "backingId": "b", "handleStyleId": "c" }}
    }}"#
    )
}

#[test]
fn test_string_counts_are_coerced() {
    let state = load_state(&single_tower_doc(
        r#"{ "type": "shelf_set", "count": "3" }, { "type": "shoe_shelf", "count": " 2 " }"#,
    ))
    .expect("load");
    assert_eq!(
        state.towers[0].accessories,
        vec![Accessory::shelves(3), Accessory::shoe_shelves(2)]
    );

    let parts = build_parts(&state);
    assert_eq!(parts.len(), CARCASS_PART_COUNT + 5);
    assert!(validate_closet(&state).is_empty());
}

#[test]
fn test_fractional_counts_truncate() {
    let state = load_state(&single_tower_doc(
        r#"{ "type": "shelf_set", "count": 2.5 }, { "type": "drawer", "count": 1.9, "drawerHeight": 15 }"#,
    ))
    .expect("load");
    assert_eq!(
        state.towers[0].accessories,
        vec![Accessory::shelves(2), Accessory::drawers(1, 15.0)]
    );
    assert_eq!(build_parts(&state).len(), CARCASS_PART_COUNT + 3);
}

#[test]
fn test_null_and_garbage_counts_read_as_zero() {
    let state = load_state(&single_tower_doc(
        r#"{ "type": "drawer", "count": null, "drawerHeight": 15 }, { "type": "shelf_set", "count": "lots" }"#,
    ))
    .expect("load");
    assert_eq!(
        state.towers[0].accessories,
        vec![Accessory::drawers(0, 15.0), Accessory::shelves(0)]
    );

    let parts = build_parts(&state);
    assert_eq!(parts.len(), CARCASS_PART_COUNT);
    assert!(validate_closet(&state).is_empty());
}

// ============================================================================
// Worked geometry examples
// ============================================================================

#[test]
fn test_shelf_set_worked_example() {
    // Inner height 210: gap 52.5, shelf 2 sits 105 above the bottom panel.
    let state = closet(
        CabinetSpec::new(244.0, 214.0, 61.0, 2.0),
        vec![Tower::new("t1", "Tower 1", 240.0, 61.0, 214.0)
            .with_accessories(vec![Accessory::shelves(3)])],
    );
    let parts = build_parts(&state);
    let bottom_inner_y = -107.0 + 2.0;

    let second = part(&parts, "shelf_t1_2");
    assert!((second.pos()[1] - (bottom_inner_y + 105.0)).abs() < EPS);
    assert!((second.pos()[2] - 1.0).abs() < EPS);
    assert!((second.dims.x - 238.0).abs() < EPS);
}

#[test]
fn test_mixed_tower_layout() {
    let state = closet(
        CabinetSpec::new(244.0, 213.0, 61.0, 2.0),
        vec![
            Tower::new("left", "Tower 1", 120.0, 61.0, 213.0).with_accessories(vec![
                Accessory::rod(RodPosition::High, RodCount::Double),
                Accessory::shoe_shelves(2),
            ]),
            Tower::new("right", "Tower 2", 120.0, 61.0, 213.0)
                .with_accessories(vec![Accessory::drawers(3, 20.0)]),
        ],
    );
    let parts = build_parts(&state);
    assert_eq!(parts.len(), expected_part_count(&state));
    assert_eq!(parts.len(), CARCASS_PART_COUNT + 1 + 2 + 2 + 3);

    let dims = derive_dims(&state.cabinet);
    let upper = part(&parts, "rod_left_high_1");
    let lower = part(&parts, "rod_left_high_2");
    assert!((upper.pos()[1] - (-106.5 + dims.inner_height * 0.8)).abs() < EPS);
    assert!((upper.pos()[1] - lower.pos()[1] - 40.0).abs() < EPS);
    assert_eq!(upper.material_id, "polished-chrome");

    let shoe = part(&parts, "shoe_shelf_left_1");
    assert!((shoe.dims.z - 59.0 * 0.7).abs() < EPS);
    assert!((shoe.transform.rot[0] - 0.26).abs() < EPS);

    let third_drawer = part(&parts, "drawer_right_3");
    // bottomInnerY + 10 + 2 * 21
    assert!((third_drawer.pos()[1] - (-104.5 + 10.0 + 42.0)).abs() < EPS);
    assert!((third_drawer.pos()[0] - 60.0).abs() < EPS);
    assert!((third_drawer.dims.x - 116.0).abs() < EPS);
    assert_eq!(third_drawer.tower_id.as_deref(), Some("right"));
}

// ============================================================================
// Build, validate and export the same snapshot
// ============================================================================

#[test]
fn test_invalid_snapshot_still_builds_and_exports() {
    let state = closet(
        CabinetSpec::new(700.0, 10.0, 61.0, 6.0),
        vec![Tower::new("t1", "Tower 1", 500.0, 61.0, 213.0)
            .with_accessories(vec![Accessory::shelves(12)])],
    );

    let violations = validate_closet(&state);
    assert!(has_errors(&violations));
    assert!(violations
        .iter()
        .any(|v| v.code == "INNER_HEIGHT_NON_POSITIVE" && v.severity == Severity::Warning));

    let parts = build_parts(&state);
    assert_eq!(parts.len(), expected_part_count(&state));

    let payload = export_for_backend(&state);
    assert!((payload.cabinet.width - 600.0).abs() < EPS);
    assert!((payload.cabinet.height - 100.0).abs() < EPS);
    assert!((payload.towers[0].width - 200.0).abs() < EPS);
    assert_eq!(payload.towers[0].accessories, vec![Accessory::shelves(12)]);
}

#[test]
fn test_auto_preset_filling_interior_is_valid() {
    let mut ids = SequentialIds::new();
    let cabinet = CabinetSpec::new(244.0, 213.0, 61.0, 2.0);
    let inner_width = derive_dims(&cabinet).inner_width;

    for preset in AutoCreatePreset::ALL {
        let towers = preset.create_towers(&mut ids, inner_width, 61.0, 213.0);
        let state = closet(cabinet, towers);
        let violations = validate_closet(&state);
        assert!(
            violations.is_empty(),
            "{preset} produced violations: {violations:?}"
        );
    }
}

#[test]
fn test_closet_type_switch_rebuilds_towers() {
    let mut ids = SequentialIds::new();
    let mut state = ClosetState::new_default(&mut ids);
    state.apply_closet_type(ClosetType::Custom, &mut ids);

    assert_eq!(state.closet_type, ClosetType::Custom);
    assert_eq!(state.towers.len(), 1);
    let parts = build_parts(&state);
    assert!(parts.iter().all(|p| p.part_type != PartType::Divider));
}
