//! World types and services shared by the office simulation.
//!
//! `game-core` defines the grid the agents live on: coordinates and world
//! vectors, furniture, the [`GridMap`] service agents consume (routing,
//! neighbouring tiles, coordinate transforms, occupancy) and the in-memory
//! [`TileGrid`] that implements it. Tunable timings live in [`GameConfig`].
pub mod config;
pub mod error;
pub mod geometry;
pub mod world;

pub use config::GameConfig;
pub use error::GridError;
pub use geometry::{Coord, Facing, OccupantId, Tick, Vec2};
pub use world::{
    AdjacentTile, GridDimensions, GridMap, ItemKind, Path, PathOptions, PlacedItem, Placement,
    TileGrid,
};
