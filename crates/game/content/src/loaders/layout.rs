//! Room layout loader.
//!
//! Loads grid dimensions and furniture placement from layout RON files.
//! Agents are spawned separately by the runtime.

use std::path::Path;

use game_core::{Coord, Facing, GridDimensions, ItemKind, PlacedItem, TileGrid, Vec2};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Layout structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutSpec {
    pub dimensions: GridDimensions,
    #[serde(default)]
    pub tile_size: Option<Vec2>,
    #[serde(default)]
    pub origin: Option<Vec2>,
    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

/// One piece of furniture in a layout file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSpec {
    pub kind: ItemKind,
    pub at: Coord,
    /// Clockwise quarter turns from east.
    #[serde(default)]
    pub rotations: u8,
}

/// Loader for room layouts from RON files.
pub struct LayoutLoader;

impl LayoutLoader {
    /// Load a layout from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a LayoutSpec
    ///
    /// # Returns
    ///
    /// Returns a grid with every item placed.
    pub fn load(path: &Path) -> LoadResult<TileGrid> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a layout from RON text.
    pub fn parse(content: &str) -> LoadResult<TileGrid> {
        let spec: LayoutSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse layout RON: {}", e))?;
        Self::build(&spec)
    }

    /// The office the buddy lives in by default.
    pub fn default_office() -> LoadResult<TileGrid> {
        Self::parse(include_str!("../../data/office.ron"))
    }

    /// Build a grid from an already parsed layout.
    pub fn build(spec: &LayoutSpec) -> LoadResult<TileGrid> {
        let mut grid = TileGrid::new(spec.dimensions);
        if let Some(tile_size) = spec.tile_size {
            grid = grid.with_tile_size(tile_size);
        }
        if let Some(origin) = spec.origin {
            grid = grid.with_origin(origin);
        }

        for item in &spec.items {
            let placed = PlacedItem::new(item.kind, Facing::from_rotations(item.rotations));
            grid.place_item(item.at, placed)
                .map_err(|e| anyhow::anyhow!("Failed to place {} at {}: {}", item.kind, item.at, e))?;
        }

        Ok(grid)
    }
}
