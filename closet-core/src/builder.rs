//! Parts builder: turns a closet state into the full ordered part list.
//!
//! Coordinate system, origin at the cabinet's centre:
//! - X: left(-) to right(+)
//! - Y: bottom(-) to top(+)
//! - Z: back(-) to front(+)
//!
//! The list is regenerated from scratch on every call. Part identity across
//! edits rests solely on the deterministic ids.

use crate::dims::{derive_dims, DerivedDims};
use crate::layout::{accessory_part_count, layout_accessory, TowerFrame};
use crate::numeric::coerce;
use crate::part::{ClosetPart, PartDims, PartTransform, PartType};
use crate::schema::ClosetState;

/// Number of carcass panels every build starts with.
pub const CARCASS_PART_COUNT: usize = 5;

/// Upper bound on the up-front allocation; unvalidated counts must not drive it.
const MAX_PREALLOCATED_PARTS: usize = CARCASS_PART_COUNT + 256;

/// Build the parts for a closet state.
///
/// Never fails: degenerate inputs produce degenerate dims rather than an
/// empty or partial list.
#[must_use]
pub fn build_parts(state: &ClosetState) -> Vec<ClosetPart> {
    let dims = derive_dims(&state.cabinet);
    let finish_id = state.materials.finish_id.as_str();

    let mut parts = Vec::with_capacity(capacity_hint(state));
    push_carcass(&mut parts, &dims, finish_id, &state.materials.backing_id);

    if state.towers.is_empty() {
        tracing::debug!(parts = parts.len(), "Built carcass only (no towers)");
        return parts;
    }

    let t = dims.thickness;
    let mut current_x = -dims.width / 2.0 + t;

    for (index, tower) in state.towers.iter().enumerate() {
        let tower_width = coerce(tower.width);

        if index > 0 {
            // Centred on the boundary with the previous tower.
            parts.push(
                ClosetPart::new(
                    format!("divider_{index}"),
                    PartType::Divider,
                    PartDims::new(t, dims.inner_height, dims.inner_depth),
                    PartTransform::at([current_x, 0.0, t / 2.0]),
                    finish_id,
                )
                .with_tower(tower.id.as_str()),
            );
        }

        let frame = TowerFrame {
            tower_id: &tower.id,
            center_x: current_x + tower_width / 2.0,
            // One thickness regardless of how many dividers border the tower.
            inner_width: tower_width - t,
            thickness: t,
            height: dims.height,
            inner_height: dims.inner_height,
            inner_depth: dims.inner_depth,
            finish_id,
        };
        for accessory in &tower.accessories {
            layout_accessory(&frame, accessory, &mut parts);
        }

        tracing::trace!(
            tower = %tower.id,
            center_x = frame.center_x,
            accessories = tower.accessories.len(),
            "Laid out tower"
        );

        // The next divider's thickness is not subtracted.
        current_x += tower_width;
    }

    tracing::debug!(
        parts = parts.len(),
        towers = state.towers.len(),
        "Built closet parts"
    );
    parts
}

/// Number of parts [`build_parts`] will return for `state`.
#[must_use]
pub fn expected_part_count(state: &ClosetState) -> usize {
    let dividers = state.towers.len().saturating_sub(1);
    let accessories: usize = state
        .towers
        .iter()
        .flat_map(|tower| tower.accessories.iter())
        .map(accessory_part_count)
        .fold(0, usize::saturating_add);
    CARCASS_PART_COUNT
        .saturating_add(dividers)
        .saturating_add(accessories)
}

fn capacity_hint(state: &ClosetState) -> usize {
    expected_part_count(state).min(MAX_PREALLOCATED_PARTS)
}

fn push_carcass(
    parts: &mut Vec<ClosetPart>,
    dims: &DerivedDims,
    finish_id: &str,
    backing_id: &str,
) {
    let DerivedDims {
        width: w,
        height: h,
        depth: d,
        thickness: t,
        inner_width: iw,
        inner_height: ih,
        ..
    } = *dims;

    let panel = |part_type: PartType, size: PartDims, pos, material: &str| {
        ClosetPart::new(
            part_type.as_str(),
            part_type,
            size,
            PartTransform::at(pos),
            material,
        )
    };

    parts.extend([
        panel(
            PartType::PanelLeft,
            PartDims::new(t, h, d),
            [-w / 2.0 + t / 2.0, 0.0, 0.0],
            finish_id,
        ),
        panel(
            PartType::PanelRight,
            PartDims::new(t, h, d),
            [w / 2.0 - t / 2.0, 0.0, 0.0],
            finish_id,
        ),
        panel(
            PartType::PanelBottom,
            PartDims::new(iw, t, d),
            [0.0, -h / 2.0 + t / 2.0, 0.0],
            finish_id,
        ),
        panel(
            PartType::PanelTop,
            PartDims::new(iw, t, d),
            [0.0, h / 2.0 - t / 2.0, 0.0],
            finish_id,
        ),
        panel(
            PartType::PanelBack,
            PartDims::new(iw, ih, t),
            [0.0, 0.0, -d / 2.0 + t / 2.0],
            backing_id,
        ),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tower::{Accessory, RodCount, RodPosition, Tower};
    use crate::CabinetSpec;

    const EPS: f64 = 1e-9;

    fn state_with(towers: Vec<Tower>) -> ClosetState {
        let mut state = ClosetState::default();
        state.cabinet = CabinetSpec::new(244.0, 213.0, 61.0, 2.0);
        state.towers = towers;
        state
    }

    fn find<'a>(parts: &'a [ClosetPart], id: &str) -> &'a ClosetPart {
        parts
            .iter()
            .find(|p| p.id == id)
            .unwrap_or_else(|| panic!("part {id} missing"))
    }

    #[test]
    fn test_capacity_hint_is_bounded() {
        let small = state_with(vec![Tower::new("t1", "Tower 1", 240.0, 61.0, 213.0)
            .with_accessories(vec![Accessory::shelves(3)])]);
        assert_eq!(capacity_hint(&small), CARCASS_PART_COUNT + 3);

        let huge = state_with(vec![Tower::new("t1", "Tower 1", 240.0, 61.0, 213.0)
            .with_accessories(vec![Accessory::shelves(i32::MAX); 8])]);
        assert!(expected_part_count(&huge) > MAX_PREALLOCATED_PARTS);
        assert_eq!(capacity_hint(&huge), MAX_PREALLOCATED_PARTS);
    }

    #[test]
    fn test_carcass_only_without_towers() {
        let parts = build_parts(&state_with(Vec::new()));
        assert_eq!(parts.len(), CARCASS_PART_COUNT);

        let ids: Vec<&str> = parts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["panel_left", "panel_right", "panel_bottom", "panel_top", "panel_back"]
        );
        assert_eq!(parts[4].material_id, "backing-white");
        assert_eq!(parts[0].material_id, "miami-linen");
        assert!(parts.iter().all(|p| p.tower_id.is_none()));
    }

    #[test]
    fn test_carcass_positions() {
        let parts = build_parts(&state_with(Vec::new()));

        let left = find(&parts, "panel_left");
        let right = find(&parts, "panel_right");
        assert!((left.pos()[0] + 121.0).abs() < EPS);
        assert!((left.pos()[0] + right.pos()[0]).abs() < EPS);

        let top = find(&parts, "panel_top");
        assert!((top.pos()[1] - 105.5).abs() < EPS);
        assert!((top.dims.x - 240.0).abs() < EPS);

        let back = find(&parts, "panel_back");
        assert!((back.pos()[2] + 29.5).abs() < EPS);
        assert!((back.dims.y - 209.0).abs() < EPS);
        assert!((back.dims.z - 2.0).abs() < EPS);
    }

    #[test]
    fn test_dividers_between_towers() {
        let towers = vec![
            Tower::new("a", "Tower 1", 100.0, 61.0, 213.0),
            Tower::new("b", "Tower 2", 80.0, 61.0, 213.0),
            Tower::new("c", "Tower 3", 60.0, 61.0, 213.0),
        ];
        let parts = build_parts(&state_with(towers));
        assert_eq!(parts.len(), CARCASS_PART_COUNT + 2);

        let first = find(&parts, "divider_1");
        assert_eq!(first.tower_id.as_deref(), Some("b"));
        // inner left edge -120, plus tower a
        assert!((first.pos()[0] + 20.0).abs() < EPS);
        assert!((first.pos()[2] - 1.0).abs() < EPS);
        assert!((first.dims.y - 209.0).abs() < EPS);
        assert!((first.dims.z - 59.0).abs() < EPS);

        let second = find(&parts, "divider_2");
        assert!((second.pos()[0] - 60.0).abs() < EPS);
    }

    #[test]
    fn test_tower_accessories_are_centred() {
        let towers = vec![
            Tower::new("a", "Tower 1", 120.0, 61.0, 213.0)
                .with_accessories(vec![Accessory::shelves(2)]),
            Tower::new("b", "Tower 2", 120.0, 61.0, 213.0).with_accessories(vec![
                Accessory::rod(RodPosition::Medium, RodCount::Single),
            ]),
        ];
        let parts = build_parts(&state_with(towers));

        let shelf = find(&parts, "shelf_a_1");
        assert!((shelf.pos()[0] + 60.0).abs() < EPS);
        assert!((shelf.dims.x - 118.0).abs() < EPS);

        let rod = find(&parts, "rod_b_medium_1");
        assert!((rod.pos()[0] - 60.0).abs() < EPS);
        assert!((rod.dims.x - 118.0).abs() < EPS);
    }

    #[test]
    fn test_degenerate_cabinet_still_builds() {
        let mut state = state_with(vec![
            Tower::new("a", "Tower 1", 10.0, 61.0, 213.0)
                .with_accessories(vec![Accessory::drawers(2, 15.0)]),
        ]);
        state.cabinet = CabinetSpec::new(8.0, 8.0, 4.0, 6.0);

        let parts = build_parts(&state);
        assert_eq!(parts.len(), expected_part_count(&state));
        assert!(parts.iter().any(|p| p.dims.is_degenerate()));
    }

    #[test]
    fn test_nan_tower_width_coerces_to_zero() {
        let state = state_with(vec![
            Tower::new("a", "Tower 1", f64::NAN, 61.0, 213.0)
                .with_accessories(vec![Accessory::shelves(1)]),
        ]);
        let parts = build_parts(&state);
        let shelf = find(&parts, "shelf_a_1");
        assert!((shelf.pos()[0] + 120.0).abs() < EPS);
        assert!((shelf.dims.x + 2.0).abs() < EPS);
    }
}
