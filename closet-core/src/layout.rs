//! Accessory layout strategies.
//!
//! Each accessory kind has its own algorithm turning a tower's footprint into
//! positioned parts. Dispatch is an exhaustive match on [`Accessory`], so a
//! new kind cannot be added without deciding how it lays out.

use std::f64::consts::FRAC_PI_2;

use serde_json::json;

use crate::materials::HARDWARE_MATERIAL_ID;
use crate::numeric::coerce;
use crate::part::{ClosetPart, PartDims, PartTransform, PartType};
use crate::tower::{Accessory, RodCount, RodPosition};

/// Rod radius.
pub const ROD_RADIUS: f64 = 1.2;

/// Vertical distance between stacked rods.
pub const ROD_STACK_SPACING: f64 = 40.0;

/// Vertical gap between drawers.
pub const DRAWER_GAP: f64 = 1.0;

/// Drawers are inset by this much in X and Z.
pub const DRAWER_CLEARANCE: f64 = 2.0;

/// Upper bound on the spacing between shoe shelves.
pub const SHOE_SHELF_MAX_SPACING: f64 = 20.0;

/// Share of the inner depth a shoe shelf occupies.
pub const SHOE_SHELF_DEPTH_RATIO: f64 = 0.7;

/// Forward shift of a shoe shelf, as a share of the inner depth.
pub const SHOE_SHELF_FORWARD_RATIO: f64 = 0.15;

/// Display tilt of a shoe shelf about X (about 15 degrees).
pub const SHOE_SHELF_TILT: f64 = 0.26;

/// Everything a strategy needs to know about the tower it fills.
#[derive(Debug, Clone, Copy)]
pub struct TowerFrame<'a> {
    /// Owning tower id.
    pub tower_id: &'a str,
    /// X of the tower's centre.
    pub center_x: f64,
    /// Usable width: tower width minus one thickness.
    pub inner_width: f64,
    /// Panel thickness.
    pub thickness: f64,
    /// Outer cabinet height.
    pub height: f64,
    /// Cabinet inner height.
    pub inner_height: f64,
    /// Cabinet inner depth.
    pub inner_depth: f64,
    /// Finish material for shelves and drawers.
    pub finish_id: &'a str,
}

impl TowerFrame<'_> {
    /// Y of the top face of the bottom panel.
    #[must_use]
    pub fn bottom_inner_y(&self) -> f64 {
        -self.height / 2.0 + self.thickness
    }
}

/// Number of parts an accessory will produce.
#[must_use]
pub fn accessory_part_count(accessory: &Accessory) -> usize {
    match accessory {
        Accessory::ShelfSet { count }
        | Accessory::ShoeShelf { count }
        | Accessory::Drawer { count, .. } => usize::try_from(*count).unwrap_or(0),
        Accessory::Rod { count, .. } => usize::from(count.get()),
        Accessory::Prop { .. } => 0,
    }
}

/// Lay out one accessory, appending its parts.
pub fn layout_accessory(
    frame: &TowerFrame<'_>,
    accessory: &Accessory,
    parts: &mut Vec<ClosetPart>,
) {
    match accessory {
        Accessory::ShelfSet { count } => layout_shelves(frame, *count, parts),
        Accessory::Rod { position, count } => layout_rods(frame, *position, *count, parts),
        Accessory::Drawer {
            count,
            drawer_height,
        } => layout_drawers(frame, *count, coerce(*drawer_height), parts),
        Accessory::ShoeShelf { count } => layout_shoe_shelves(frame, *count, parts),
        // Props are placement hints for the renderer only.
        Accessory::Prop { .. } => {}
    }
}

/// Shelves evenly dividing the inner height.
fn layout_shelves(frame: &TowerFrame<'_>, count: i32, parts: &mut Vec<ClosetPart>) {
    if count <= 0 {
        return;
    }

    let t = frame.thickness;
    let gap = frame.inner_height / (f64::from(count) + 1.0);

    for index in 1..=count {
        let y = frame.bottom_inner_y() + gap * f64::from(index);
        parts.push(
            ClosetPart::new(
                format!("shelf_{}_{}", frame.tower_id, index),
                PartType::Shelf,
                PartDims::new(frame.inner_width, t, frame.inner_depth),
                PartTransform::at([frame.center_x, y, t / 2.0]),
                frame.finish_id,
            )
            .with_tower(frame.tower_id)
            .with_meta(json!({ "index": index })),
        );
    }
}

/// Rods hung at a fraction of the inner height, stacked downwards.
fn layout_rods(
    frame: &TowerFrame<'_>,
    position: RodPosition,
    count: RodCount,
    parts: &mut Vec<ClosetPart>,
) {
    let base_y = -frame.height / 2.0 + frame.inner_height * position.height_fraction();
    let diameter = ROD_RADIUS * 2.0;

    for r in 0..count.get() {
        let y = base_y - f64::from(r) * ROD_STACK_SPACING;
        let index = r + 1;
        parts.push(
            ClosetPart::new(
                format!("rod_{}_{}_{}", frame.tower_id, position.as_str(), index),
                PartType::Rod,
                PartDims::new(frame.inner_width, diameter, diameter),
                PartTransform::at([frame.center_x, y, frame.inner_depth / 2.0])
                    .rotated([0.0, 0.0, FRAC_PI_2]),
                HARDWARE_MATERIAL_ID,
            )
            .with_tower(frame.tower_id)
            .with_meta(json!({ "position": position.as_str(), "index": index })),
        );
    }
}

/// Drawers stacked from the bottom panel up.
fn layout_drawers(
    frame: &TowerFrame<'_>,
    count: i32,
    drawer_height: f64,
    parts: &mut Vec<ClosetPart>,
) {
    if count <= 0 {
        return;
    }

    let t = frame.thickness;
    let bottom = frame.bottom_inner_y();

    for i in 0..count {
        let y = bottom + drawer_height / 2.0 + f64::from(i) * (drawer_height + DRAWER_GAP);
        let index = i + 1;
        parts.push(
            ClosetPart::new(
                format!("drawer_{}_{}", frame.tower_id, index),
                PartType::DrawerBox,
                PartDims::new(
                    frame.inner_width - DRAWER_CLEARANCE,
                    drawer_height,
                    frame.inner_depth - DRAWER_CLEARANCE,
                ),
                PartTransform::at([frame.center_x, y, t / 2.0 + 1.0]),
                frame.finish_id,
            )
            .with_tower(frame.tower_id)
            .with_meta(json!({ "index": index })),
        );
    }
}

/// Tilted shoe shelves, spaced at most [`SHOE_SHELF_MAX_SPACING`] apart.
fn layout_shoe_shelves(frame: &TowerFrame<'_>, count: i32, parts: &mut Vec<ClosetPart>) {
    if count <= 0 {
        return;
    }

    let t = frame.thickness;
    let depth = frame.inner_depth;
    let spacing = SHOE_SHELF_MAX_SPACING.min(frame.inner_height / (f64::from(count) + 1.0));

    for index in 1..=count {
        let y = frame.bottom_inner_y() + spacing * f64::from(index);
        parts.push(
            ClosetPart::new(
                format!("shoe_shelf_{}_{}", frame.tower_id, index),
                PartType::ShoeShelf,
                PartDims::new(frame.inner_width, t, depth * SHOE_SHELF_DEPTH_RATIO),
                PartTransform::at([
                    frame.center_x,
                    y,
                    t / 2.0 + depth * SHOE_SHELF_FORWARD_RATIO,
                ])
                .rotated([SHOE_SHELF_TILT, 0.0, 0.0]),
                frame.finish_id,
            )
            .with_tower(frame.tower_id)
            .with_meta(json!({ "index": index })),
        );
    }
}
