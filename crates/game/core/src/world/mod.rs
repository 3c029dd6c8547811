//! World service consumed by agents.
//!
//! Agents never look at tiles directly. They ask a [`GridMap`] for
//! coordinate transforms, neighbouring tiles, routes and furniture, and they
//! report their own moves back through it so occupancy stays consistent.
//! [`TileGrid`] is the in-memory implementation used by the runtime.

pub mod items;
pub mod path;
pub mod tile_grid;

pub use items::{ItemKind, PlacedItem, Placement};
pub use path::{Path, PathOptions};
pub use tile_grid::TileGrid;

use crate::error::GridError;
use crate::geometry::{Coord, OccupantId, Vec2};

/// Width and height of a grid, in tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub width: u32,
    pub height: u32,
}

impl GridDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < self.width as i32
            && coord.y < self.height as i32
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// A tile next to some coordinate, as reported by [`GridMap::adjacent_tiles`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdjacentTile {
    pub index: usize,
    pub walkable: bool,
}

/// The grid/world service.
pub trait GridMap {
    fn dimensions(&self) -> GridDimensions;

    /// Linear index of a coordinate, `None` when out of bounds.
    fn coord_to_index(&self, coord: Coord) -> Option<usize>;

    fn index_to_coord(&self, index: usize) -> Coord;

    /// World-space position of a tile's centre.
    fn coord_to_world(&self, coord: Coord) -> Vec2;

    /// World-space position of the grid itself. Render positions are
    /// expressed relative to it.
    fn origin(&self) -> Vec2;

    /// In-bounds orthogonal neighbours of `coord`.
    fn adjacent_tiles(&self, coord: Coord) -> Vec<AdjacentTile>;

    /// Shortest walkable route from `start` to `end`, `None` if there is none.
    fn path_to(&self, start: Coord, end: Coord, options: PathOptions) -> Option<Path>;

    /// First placement of the given item kind.
    fn find_item(&self, kind: ItemKind) -> Option<Placement>;

    fn add_occupant(&mut self, occupant: OccupantId, at: Coord) -> Result<(), GridError>;

    /// Moves an occupant to another tile.
    fn move_occupant(&mut self, occupant: OccupantId, to: Coord) -> Result<(), GridError>;

    /// Removes an occupant and returns the tile it stood on.
    fn remove_occupant(&mut self, occupant: OccupantId) -> Result<Coord, GridError>;

    fn contains(&self, coord: Coord) -> bool {
        self.dimensions().contains(coord)
    }
}
