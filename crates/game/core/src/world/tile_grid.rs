//! In-memory grid with isometric projection and breadth-first routing.

use std::collections::VecDeque;

use super::{AdjacentTile, GridDimensions, GridMap, ItemKind, Path, PathOptions, PlacedItem, Placement};
use crate::error::GridError;
use crate::geometry::{Coord, OccupantId, Vec2};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Tile {
    item: Option<PlacedItem>,
    occupant: Option<OccupantId>,
}

/// Rectangular grid of tiles holding furniture and agents.
///
/// Tiles are projected isometrically: moving one tile east shifts the world
/// position by half a tile right and down, moving one tile south shifts it by
/// half a tile left and down.
#[derive(Clone, Debug)]
pub struct TileGrid {
    dimensions: GridDimensions,
    tile_size: Vec2,
    origin: Vec2,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Default on-screen size of one tile.
    pub const DEFAULT_TILE_SIZE: Vec2 = Vec2::new(64.0, 32.0);

    /// Creates an empty grid.
    pub fn new(dimensions: GridDimensions) -> Self {
        Self {
            dimensions,
            tile_size: Self::DEFAULT_TILE_SIZE,
            origin: Vec2::ZERO,
            tiles: vec![Tile::default(); dimensions.area()],
        }
    }

    /// Sets the on-screen tile size (builder pattern).
    #[must_use]
    pub fn with_tile_size(mut self, tile_size: Vec2) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Sets the world position of the grid (builder pattern).
    #[must_use]
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn tile_size(&self) -> Vec2 {
        self.tile_size
    }

    /// Places an item on an empty tile.
    pub fn place_item(&mut self, coord: Coord, item: PlacedItem) -> Result<(), GridError> {
        let index = self.index_of(coord)?;
        let tile = &mut self.tiles[index];
        if tile.item.is_some() {
            return Err(GridError::ItemPresent { coord });
        }
        if let Some(by) = tile.occupant
            && item.kind.blocks_movement()
        {
            return Err(GridError::Occupied { coord, by });
        }
        tile.item = Some(item);
        Ok(())
    }

    pub fn item_at(&self, coord: Coord) -> Option<PlacedItem> {
        self.coord_to_index(coord)
            .and_then(|index| self.tiles[index].item)
    }

    pub fn occupant_at(&self, coord: Coord) -> Option<OccupantId> {
        self.coord_to_index(coord)
            .and_then(|index| self.tiles[index].occupant)
    }

    /// Tile currently holding `occupant`.
    pub fn locate(&self, occupant: OccupantId) -> Option<Coord> {
        self.tiles
            .iter()
            .position(|tile| tile.occupant == Some(occupant))
            .map(|index| self.index_to_coord(index))
    }

    /// In bounds, free of blocking furniture and of other agents.
    pub fn is_walkable(&self, coord: Coord) -> bool {
        self.coord_to_index(coord)
            .is_some_and(|index| Self::tile_walkable(&self.tiles[index]))
    }

    fn tile_walkable(tile: &Tile) -> bool {
        tile.occupant.is_none() && !tile.item.is_some_and(|item| item.kind.blocks_movement())
    }

    fn index_of(&self, coord: Coord) -> Result<usize, GridError> {
        self.coord_to_index(coord)
            .ok_or(GridError::OutOfBounds(coord))
    }

    /// Checks that an occupant may stand on `coord`.
    fn check_enterable(&self, coord: Coord) -> Result<usize, GridError> {
        let index = self.index_of(coord)?;
        let tile = &self.tiles[index];
        if let Some(by) = tile.occupant {
            return Err(GridError::Occupied { coord, by });
        }
        if tile.item.is_some_and(|item| item.kind.blocks_movement()) {
            return Err(GridError::Blocked(coord));
        }
        Ok(index)
    }
}

impl GridMap for TileGrid {
    fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    fn coord_to_index(&self, coord: Coord) -> Option<usize> {
        self.dimensions
            .contains(coord)
            .then(|| coord.y as usize * self.dimensions.width as usize + coord.x as usize)
    }

    fn index_to_coord(&self, index: usize) -> Coord {
        let width = self.dimensions.width.max(1) as usize;
        Coord::new((index % width) as i32, (index / width) as i32)
    }

    fn coord_to_world(&self, coord: Coord) -> Vec2 {
        let half_w = self.tile_size.x / 2.0;
        let half_h = self.tile_size.y / 2.0;
        self.origin
            + Vec2::new(
                (coord.x - coord.y) as f32 * half_w,
                (coord.x + coord.y) as f32 * half_h,
            )
    }

    fn origin(&self) -> Vec2 {
        self.origin
    }

    fn adjacent_tiles(&self, coord: Coord) -> Vec<AdjacentTile> {
        coord
            .neighbours()
            .into_iter()
            .filter_map(|neighbour| {
                let index = self.coord_to_index(neighbour)?;
                Some(AdjacentTile {
                    index,
                    walkable: Self::tile_walkable(&self.tiles[index]),
                })
            })
            .collect()
    }

    fn path_to(&self, start: Coord, end: Coord, options: PathOptions) -> Option<Path> {
        let start_index = self.coord_to_index(start)?;
        let end_index = self.coord_to_index(end)?;

        if start_index == end_index {
            let steps = if options.include_start || options.include_end {
                vec![end]
            } else {
                Vec::new()
            };
            return Some(Path::from_steps(steps));
        }
        if !Self::tile_walkable(&self.tiles[end_index]) {
            return None;
        }

        // Breadth-first search; the start tile holds the walker itself and
        // is never re-entered.
        let mut came_from: Vec<Option<usize>> = vec![None; self.tiles.len()];
        let mut visited = vec![false; self.tiles.len()];
        let mut queue = VecDeque::from([start_index]);
        visited[start_index] = true;

        while let Some(current) = queue.pop_front() {
            if current == end_index {
                break;
            }
            for neighbour in self.adjacent_tiles(self.index_to_coord(current)) {
                if neighbour.walkable && !visited[neighbour.index] {
                    visited[neighbour.index] = true;
                    came_from[neighbour.index] = Some(current);
                    queue.push_back(neighbour.index);
                }
            }
        }

        if !visited[end_index] {
            return None;
        }

        let mut cells = vec![end_index];
        let mut cursor = end_index;
        while let Some(previous) = came_from[cursor] {
            cells.push(previous);
            cursor = previous;
        }
        cells.reverse();

        let mut steps: Vec<Coord> = cells
            .into_iter()
            .map(|index| self.index_to_coord(index))
            .collect();
        if !options.include_end {
            steps.pop();
        }
        if !options.include_start {
            steps.remove(0);
        }
        Some(Path::from_steps(steps))
    }

    fn find_item(&self, kind: ItemKind) -> Option<Placement> {
        self.tiles.iter().enumerate().find_map(|(index, tile)| {
            let item = tile.item.filter(|item| item.kind == kind)?;
            Some(Placement {
                coord: self.index_to_coord(index),
                item,
            })
        })
    }

    fn add_occupant(&mut self, occupant: OccupantId, at: Coord) -> Result<(), GridError> {
        if self.locate(occupant).is_some() {
            return Err(GridError::DuplicateOccupant(occupant));
        }
        let index = self.check_enterable(at)?;
        self.tiles[index].occupant = Some(occupant);
        Ok(())
    }

    fn move_occupant(&mut self, occupant: OccupantId, to: Coord) -> Result<(), GridError> {
        let from = self
            .locate(occupant)
            .ok_or(GridError::UnknownOccupant(occupant))?;
        if from == to {
            return Ok(());
        }
        let target = self.check_enterable(to)?;
        let source = self.index_of(from)?;
        self.tiles[source].occupant = None;
        self.tiles[target].occupant = Some(occupant);
        Ok(())
    }

    fn remove_occupant(&mut self, occupant: OccupantId) -> Result<Coord, GridError> {
        let at = self
            .locate(occupant)
            .ok_or(GridError::UnknownOccupant(occupant))?;
        let index = self.index_of(at)?;
        self.tiles[index].occupant = None;
        Ok(at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Facing;

    fn grid(width: u32, height: u32) -> TileGrid {
        TileGrid::new(GridDimensions::new(width, height))
    }

    fn walk(grid: &TileGrid, start: Coord, end: Coord) -> Vec<Coord> {
        let mut path = grid
            .path_to(start, end, PathOptions::WALK)
            .expect("route should exist");
        std::iter::from_fn(|| path.next_step()).collect()
    }

    #[test]
    fn index_round_trip() {
        let grid = grid(10, 8);
        let coord = Coord::new(3, 5);
        let index = grid.coord_to_index(coord).unwrap();
        assert_eq!(index, 53);
        assert_eq!(grid.index_to_coord(index), coord);
        assert_eq!(grid.coord_to_index(Coord::new(10, 0)), None);
        assert_eq!(grid.coord_to_index(Coord::new(-1, 0)), None);
    }

    #[test]
    fn isometric_projection() {
        let grid = grid(4, 4)
            .with_tile_size(Vec2::new(64.0, 32.0))
            .with_origin(Vec2::new(100.0, 50.0));
        assert_eq!(grid.coord_to_world(Coord::ORIGIN), Vec2::new(100.0, 50.0));
        assert_eq!(grid.coord_to_world(Coord::new(1, 0)), Vec2::new(132.0, 66.0));
        assert_eq!(grid.coord_to_world(Coord::new(0, 1)), Vec2::new(68.0, 66.0));
    }

    #[test]
    fn adjacent_tiles_skip_out_of_bounds_and_report_blocking() {
        let mut grid = grid(3, 3);
        grid.place_item(Coord::new(1, 0), PlacedItem::new(ItemKind::Plant, Facing::East))
            .unwrap();
        grid.place_item(Coord::new(0, 1), PlacedItem::new(ItemKind::Rug, Facing::East))
            .unwrap();

        let tiles = grid.adjacent_tiles(Coord::ORIGIN);
        assert_eq!(tiles.len(), 2);
        assert!(tiles.contains(&AdjacentTile { index: 1, walkable: false }));
        assert!(tiles.contains(&AdjacentTile { index: 3, walkable: true }));
    }

    #[test]
    fn path_walks_around_furniture() {
        let mut grid = grid(3, 3);
        for y in 0..2 {
            grid.place_item(Coord::new(1, y), PlacedItem::new(ItemKind::Couch, Facing::East))
                .unwrap();
        }

        let steps = walk(&grid, Coord::ORIGIN, Coord::new(2, 0));
        assert_eq!(
            steps,
            vec![
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(1, 2),
                Coord::new(2, 2),
                Coord::new(2, 1),
                Coord::new(2, 0),
            ]
        );
    }

    #[test]
    fn path_options_shape_the_route() {
        let grid = grid(3, 1);
        let both = PathOptions {
            include_start: true,
            include_end: true,
        };
        let neither = PathOptions::default();

        let mut path = grid.path_to(Coord::ORIGIN, Coord::new(2, 0), both).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.next_step(), Some(Coord::ORIGIN));

        let mut path = grid.path_to(Coord::ORIGIN, Coord::new(2, 0), neither).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.next_step(), Some(Coord::new(1, 0)));
    }

    #[test]
    fn path_to_same_tile_is_the_tile_itself() {
        let grid = grid(3, 3);
        let path = grid
            .path_to(Coord::new(1, 1), Coord::new(1, 1), PathOptions::WALK)
            .unwrap();
        assert_eq!(path.destination(), Some(Coord::new(1, 1)));
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn unreachable_or_blocked_destination_has_no_path() {
        let mut grid = grid(3, 3);
        grid.place_item(Coord::new(2, 2), PlacedItem::new(ItemKind::Fridge, Facing::East))
            .unwrap();
        assert!(grid
            .path_to(Coord::ORIGIN, Coord::new(2, 2), PathOptions::WALK)
            .is_none());

        grid.place_item(Coord::new(1, 0), PlacedItem::new(ItemKind::Plant, Facing::East))
            .unwrap();
        grid.place_item(Coord::new(0, 1), PlacedItem::new(ItemKind::Plant, Facing::East))
            .unwrap();
        assert!(grid
            .path_to(Coord::ORIGIN, Coord::new(1, 1), PathOptions::WALK)
            .is_none());
    }

    #[test]
    fn find_item_returns_first_placement() {
        let mut grid = grid(10, 10);
        grid.place_item(Coord::new(4, 1), PlacedItem::new(ItemKind::Desk, Facing::South))
            .unwrap();
        let desk = grid.find_item(ItemKind::Desk).unwrap();
        assert_eq!(desk.coord, Coord::new(4, 1));
        assert_eq!(desk.front(), Coord::new(4, 2));
        assert!(grid.find_item(ItemKind::Fridge).is_none());
    }

    #[test]
    fn occupants_move_and_block() {
        let mut grid = grid(3, 3);
        let a = OccupantId(1);
        let b = OccupantId(2);
        grid.add_occupant(a, Coord::ORIGIN).unwrap();
        grid.add_occupant(b, Coord::new(1, 0)).unwrap();

        assert_eq!(grid.add_occupant(a, Coord::new(2, 2)), Err(GridError::DuplicateOccupant(a)));
        assert_eq!(
            grid.move_occupant(a, Coord::new(1, 0)),
            Err(GridError::Occupied {
                coord: Coord::new(1, 0),
                by: b
            })
        );
        assert!(!grid.is_walkable(Coord::new(1, 0)));

        grid.move_occupant(a, Coord::new(0, 1)).unwrap();
        assert_eq!(grid.locate(a), Some(Coord::new(0, 1)));
        assert_eq!(grid.occupant_at(Coord::ORIGIN), None);

        assert_eq!(grid.remove_occupant(b), Ok(Coord::new(1, 0)));
        assert_eq!(grid.remove_occupant(b), Err(GridError::UnknownOccupant(b)));
    }

    #[test]
    fn furniture_rules() {
        let mut grid = grid(2, 2);
        let desk = PlacedItem::new(ItemKind::Desk, Facing::South);
        grid.place_item(Coord::ORIGIN, desk).unwrap();
        assert_eq!(
            grid.place_item(Coord::ORIGIN, desk),
            Err(GridError::ItemPresent { coord: Coord::ORIGIN })
        );
        assert_eq!(
            grid.add_occupant(OccupantId(1), Coord::ORIGIN),
            Err(GridError::Blocked(Coord::ORIGIN))
        );
        assert_eq!(
            grid.place_item(Coord::new(5, 5), desk),
            Err(GridError::OutOfBounds(Coord::new(5, 5)))
        );
    }
}
