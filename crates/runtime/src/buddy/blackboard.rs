//! Per-buddy blackboard.
//!
//! [`BuddyBoard`] is the only state the buddy's behavior tree reads and
//! writes. Every field is named and typed; nodes never look anything up by
//! key.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use behavior_tree::{Blackboard, NodeId};
use game_core::{Coord, GameConfig, GridMap, OccupantId, Path, Vec2};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Grid shared between the office and every buddy standing on it.
pub type SharedGrid = Rc<RefCell<dyn GridMap>>;

/// Which high-level behavior currently owns the buddy's position.
///
/// Set by the node driving movement and released back to `None` before a
/// different behavior may take over.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Lock {
    #[default]
    None,
    Idle,
    Work,
}

/// Cooperative tick counter compared against a target rate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timer {
    pub timer: u32,
    pub rate: u32,
}

impl Timer {
    pub fn new(rate: u32) -> Self {
        Self { timer: 0, rate }
    }

    /// Counts one tick and returns the new count.
    pub fn advance(&mut self) -> u32 {
        self.timer = self.timer.saturating_add(1);
        self.timer
    }

    pub fn reset(&mut self) {
        self.timer = 0;
    }

    pub fn is_elapsed(&self) -> bool {
        self.timer >= self.rate
    }

    /// Fraction of the rate counted so far, clamped to `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.rate == 0 {
            return 1.0;
        }
        (self.timer as f32 / self.rate as f32).min(1.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorkState {
    /// Work has been assigned and not yet taken away.
    pub has_work: bool,
    /// The buddy is seated at the desk.
    pub at_desk: bool,
    /// The last route planned toward the desk came back empty.
    pub desk_unreachable: bool,
}

/// The buddy as the world sees it: where it stands and where it is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuddyBody {
    pub id: OccupantId,
    pub coord: Coord,
    /// Render position relative to the grid origin, offset applied.
    pub position: Vec2,
    /// Sprite anchor subtracted from every position handed to
    /// [`set_position`](Self::set_position).
    pub offset: Vec2,
}

impl BuddyBody {
    pub fn new(id: OccupantId, coord: Coord) -> Self {
        Self {
            id,
            coord,
            position: Vec2::ZERO,
            offset: Vec2::ZERO,
        }
    }

    #[must_use]
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Position sink for move actions.
    pub fn set_position(&mut self, world: Vec2) {
        self.position = world - self.offset;
    }
}

/// Strongly typed blackboard for one buddy.
pub struct BuddyBoard {
    pub lock: Lock,
    pub body: BuddyBody,
    pub grid: SharedGrid,

    // Route state, shared by the desk walk and the wander step.
    pub previous_coord: Option<Coord>,
    pub next_coord: Option<Coord>,
    pub path_found: bool,
    pub path: Path,

    pub idle: Timer,
    pub movement: Timer,
    pub work: WorkState,

    /// Drives wander choices. Seeded so runs can be replayed.
    pub rng: SmallRng,

    running: Option<NodeId>,
}

impl BuddyBoard {
    /// Creates a blackboard with timers taken from `config`.
    ///
    /// The body is snapped onto its current cell.
    pub fn new(body: BuddyBody, grid: SharedGrid, config: &GameConfig, seed: u64) -> Self {
        let mut board = Self {
            lock: Lock::None,
            body,
            grid,
            previous_coord: None,
            next_coord: None,
            path_found: false,
            path: Path::default(),
            idle: Timer::new(config.idle_rate()),
            movement: Timer::new(config.move_rate()),
            work: WorkState::default(),
            rng: SmallRng::seed_from_u64(seed),
            running: None,
        };
        board.snap_to_cell();
        board
    }

    /// Render position of a cell's centre, relative to the grid origin.
    pub fn cell_position(&self, coord: Coord) -> Vec2 {
        let grid = self.grid.borrow();
        grid.coord_to_world(coord) - grid.origin()
    }

    /// Moves the render position back onto the current cell.
    pub fn snap_to_cell(&mut self) {
        let at = self.cell_position(self.body.coord);
        self.body.set_position(at);
    }

    /// Drops any planned route and the progress of the current step.
    pub fn clear_route(&mut self) {
        self.path_found = false;
        self.path.clear();
        self.next_coord = None;
        self.movement.reset();
    }
}

impl Blackboard for BuddyBoard {
    fn running_node(&self) -> Option<NodeId> {
        self.running
    }

    fn set_running_node(&mut self, node: Option<NodeId>) {
        self.running = node;
    }
}

impl fmt::Debug for BuddyBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuddyBoard")
            .field("lock", &self.lock)
            .field("body", &self.body)
            .field("previous_coord", &self.previous_coord)
            .field("next_coord", &self.next_coord)
            .field("path_found", &self.path_found)
            .field("path", &self.path)
            .field("idle", &self.idle)
            .field("movement", &self.movement)
            .field("work", &self.work)
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}
