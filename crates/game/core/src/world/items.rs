//! Furniture placed on the grid.

use crate::geometry::{Coord, Facing};

/// Kinds of furniture an office layout can contain.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemKind {
    Desk,
    Rug,
    Couch,
    Fridge,
    KitchenSink,
    Plant,
    CoffeeTable,
}

impl ItemKind {
    /// Whether agents are kept off tiles holding this item.
    ///
    /// Rugs lie flat on the floor; everything else is in the way.
    pub fn blocks_movement(self) -> bool {
        !matches!(self, ItemKind::Rug)
    }
}

/// An item together with the direction it faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedItem {
    pub kind: ItemKind,
    pub facing: Facing,
}

impl PlacedItem {
    pub fn new(kind: ItemKind, facing: Facing) -> Self {
        Self { kind, facing }
    }
}

/// An item found on the grid, with the tile it occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub coord: Coord,
    pub item: PlacedItem,
}

impl Placement {
    /// The tile the item faces. For a desk this is where the chair goes.
    pub fn front(&self) -> Coord {
        self.coord.step(self.item.facing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_rugs_are_walkable() {
        assert!(!ItemKind::Rug.blocks_movement());
        assert!(ItemKind::Desk.blocks_movement());
        assert!(ItemKind::CoffeeTable.blocks_movement());
    }

    #[test]
    fn names_round_trip_through_strum() {
        assert_eq!(ItemKind::KitchenSink.as_ref(), "kitchen_sink");
        assert_eq!("Coffee_Table".parse::<ItemKind>().ok(), Some(ItemKind::CoffeeTable));
    }

    #[test]
    fn desk_front_is_its_seat() {
        let desk = Placement {
            coord: Coord::new(4, 1),
            item: PlacedItem::new(ItemKind::Desk, Facing::from_rotations(1)),
        };
        assert_eq!(desk.front(), Coord::new(4, 2));
    }
}
