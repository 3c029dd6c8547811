//! Errors surfaced by the office runtime.
//!
//! Behavior-level failures are [`Status`](behavior_tree::Status) values and
//! never show up here.

use game_core::{GridError, OccupantId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("no buddy with id {0}")]
    UnknownBuddy(OccupantId),

    #[error("unknown signal {0:?}")]
    UnknownSignal(String),
}
