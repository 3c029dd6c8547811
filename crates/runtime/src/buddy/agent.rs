use std::fmt;

use behavior_tree::{BehaviorTree, Interrupt, NodeId, Status};
use game_core::{Coord, GameConfig, OccupantId, Vec2};
use tracing::{debug, warn};

use super::behaviors::buddy_behavior;
use super::blackboard::{BuddyBoard, BuddyBody, Lock, SharedGrid};
use crate::error::Result;
use crate::signal::Signal;

/// One office worker driven by its own behavior tree.
///
/// The buddy is registered on the shared grid at spawn and owns its tree
/// for the rest of its life. [`tick`](Self::tick) runs the tree once;
/// [`handle_signal`](Self::handle_signal) delivers interrupts between ticks.
pub struct Buddy {
    tree: BehaviorTree<BuddyBoard>,
}

impl fmt::Debug for Buddy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buddy")
            .field("board", self.board())
            .finish_non_exhaustive()
    }
}

impl Buddy {
    /// Places a new buddy on `grid` at `at` and wires its behavior tree.
    pub fn spawn(
        id: OccupantId,
        at: Coord,
        grid: SharedGrid,
        config: &GameConfig,
        seed: u64,
    ) -> Result<Self> {
        grid.borrow_mut().add_occupant(id, at)?;

        let board = BuddyBoard::new(BuddyBody::new(id, at), grid, config, seed);
        let tree = BehaviorTree::new(board).with_root(buddy_behavior());
        debug!(buddy = %id, at = %at, "buddy spawned");

        Ok(Self { tree })
    }

    /// Runs the behavior tree for one simulation tick.
    pub fn tick(&mut self) -> Status {
        let status = self.tree.run();
        if status.is_error() {
            warn!(buddy = %self.id(), "behavior tree returned Error");
        }
        status
    }

    /// Applies a signal to the blackboard and interrupts the running action.
    pub fn handle_signal(&mut self, signal: Signal) -> Interrupt {
        self.tree.blackboard_mut().work.has_work = signal.has_work();
        let outcome = self.tree.interrupt();
        debug!(buddy = %self.id(), %signal, ?outcome, "signal handled");
        outcome
    }

    pub fn id(&self) -> OccupantId {
        self.board().body.id
    }

    pub fn coord(&self) -> Coord {
        self.board().body.coord
    }

    /// Render position relative to the grid origin.
    pub fn position(&self) -> Vec2 {
        self.board().body.position
    }

    pub fn lock(&self) -> Lock {
        self.board().lock
    }

    pub fn has_work(&self) -> bool {
        self.board().work.has_work
    }

    pub fn is_at_desk(&self) -> bool {
        self.board().work.at_desk
    }

    pub fn running_node(&self) -> Option<NodeId> {
        self.tree.running_node()
    }

    pub fn board(&self) -> &BuddyBoard {
        self.tree.blackboard()
    }

    pub fn board_mut(&mut self) -> &mut BuddyBoard {
        self.tree.blackboard_mut()
    }
}
