//! Errors raised by the world service.

use crate::geometry::{Coord, OccupantId};

/// Failures of grid mutations (placing items, adding and moving occupants).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("coordinate {0} is outside the grid")]
    OutOfBounds(Coord),

    #[error("tile {0} is blocked by furniture")]
    Blocked(Coord),

    #[error("tile {coord} already holds an item")]
    ItemPresent { coord: Coord },

    #[error("tile {coord} is occupied by {by}")]
    Occupied { coord: Coord, by: OccupantId },

    #[error("occupant {0} is already on the grid")]
    DuplicateOccupant(OccupantId),

    #[error("occupant {0} is not on the grid")]
    UnknownOccupant(OccupantId),
}
