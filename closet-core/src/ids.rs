//! Identifier generation for towers, walls and placed room items.
//!
//! Factories take an explicit `&mut dyn IdSource` instead of bumping a
//! module-level counter, so parallel tests never share hidden state.

use uuid::Uuid;

/// The kind of entity an identifier is minted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    /// A tower inside the cabinet.
    Tower,
    /// A wall of the room.
    Wall,
    /// A door, window, column or other placed room item.
    Item,
}

impl IdKind {
    /// Prefix used in generated identifiers.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Tower => "tower",
            Self::Wall => "wall",
            Self::Item => "item",
        }
    }
}

/// A source of fresh identifiers.
pub trait IdSource {
    /// Mint the next identifier for `kind`.
    fn next_id(&mut self, kind: IdKind) -> String;
}

/// Deterministic per-kind counters: `tower_1`, `tower_2`, `wall_1`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    towers: u64,
    walls: u64,
    items: u64,
}

impl SequentialIds {
    /// Create a source whose counters all start at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self, kind: IdKind) -> String {
        let counter = match kind {
            IdKind::Tower => &mut self.towers,
            IdKind::Wall => &mut self.walls,
            IdKind::Item => &mut self.items,
        };
        *counter += 1;
        format!("{}_{}", kind.prefix(), counter)
    }
}

/// Random identifiers backed by UUID v4: `tower_<uuid>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self, kind: IdKind) -> String {
        format!("{}_{}", kind.prefix(), Uuid::new_v4().simple())
    }
}
