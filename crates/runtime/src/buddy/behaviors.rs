//! Behaviors that make up a buddy's day.
//!
//! Leaf steps are plain functions over [`BuddyBoard`]; the `*_behavior`
//! builders assemble them into subtrees.
//!
//! ```text
//! selector
//! ├── work:  wants_work → branch(is_at_desk, keep_working, move_to_desk)
//! │          move_to_desk: find_desk_path → step_toward_desk → arrive_at_desk
//! └── idle:  idle_elapsed → pick_wander_target → wander_step → finish_wander
//! ```

use behavior_tree::Behavior;
use behavior_tree::builder::{action, branch, condition, interruptible, selector, sequence};
use game_core::{ItemKind, PathOptions};
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use super::blackboard::{BuddyBoard, Lock};

type Node = Box<dyn Behavior<BuddyBoard>>;

// ============================================================================
// Work
// ============================================================================

/// Work is pending and nothing else holds the buddy.
pub fn wants_work(b: &mut BuddyBoard) -> bool {
    matches!(b.lock, Lock::None | Lock::Work) && b.work.has_work
}

pub fn is_at_desk(b: &mut BuddyBoard) -> bool {
    b.work.at_desk
}

/// Plans the walk to the desk seat. Cached through `path_found`.
///
/// A failed plan is retried every tick but only logged when the desk first
/// becomes unreachable.
pub fn find_desk_path(b: &mut BuddyBoard) -> bool {
    if b.path_found {
        return true;
    }

    let route = {
        let grid = b.grid.borrow();
        grid.find_item(ItemKind::Desk).and_then(|desk| {
            let seat = desk.front();
            if seat == b.body.coord {
                Some(Default::default())
            } else {
                grid.path_to(b.body.coord, seat, PathOptions::WALK)
            }
        })
    };

    match route {
        Some(mut path) => {
            b.next_coord = path.next_step();
            b.path = path;
            b.path_found = true;
            b.work.desk_unreachable = false;
            debug!(buddy = %b.body.id, remaining = b.path.len(), "route to desk planned");
        }
        None if !b.work.desk_unreachable => {
            b.work.desk_unreachable = true;
            debug!(buddy = %b.body.id, from = %b.body.coord, "desk unreachable");
        }
        None => {}
    }
    b.path_found
}

/// Walks the planned route, one tile per `movement.rate` ticks.
pub fn step_toward_desk(b: &mut BuddyBoard) -> bool {
    advance_move(b, Lock::Work)
}

pub fn arrive_at_desk(b: &mut BuddyBoard) -> bool {
    b.path_found = false;
    let seat = b.grid.borrow().find_item(ItemKind::Desk).map(|desk| desk.front());
    b.work.at_desk = seat == Some(b.body.coord);
    true
}

/// Holds the buddy at the desk until interrupted.
pub fn keep_working(b: &mut BuddyBoard) -> bool {
    b.lock = Lock::None;
    false
}

pub fn stop_working(b: &mut BuddyBoard) {
    b.lock = Lock::None;
    b.work.at_desk = false;
}

// ============================================================================
// Idle
// ============================================================================

/// Counts idle ticks. Ready once the idle rate is reached.
pub fn idle_elapsed(b: &mut BuddyBoard) -> bool {
    b.idle.advance();
    b.idle.is_elapsed()
}

/// Chooses a random walkable neighbour other than the tile just left.
/// Cached through `path_found`.
pub fn pick_wander_target(b: &mut BuddyBoard) -> bool {
    if b.path_found {
        return true;
    }

    let grid = b.grid.borrow();
    let previous = b.previous_coord.and_then(|coord| grid.coord_to_index(coord));
    let candidates: Vec<usize> = grid
        .adjacent_tiles(b.body.coord)
        .into_iter()
        .filter(|tile| tile.walkable && Some(tile.index) != previous)
        .map(|tile| tile.index)
        .collect();

    if let Some(&index) = candidates.choose(&mut b.rng) {
        b.next_coord = Some(grid.index_to_coord(index));
        b.path_found = true;
    }
    b.path_found
}

pub fn wander_step(b: &mut BuddyBoard) -> bool {
    advance_move(b, Lock::Idle)
}

pub fn finish_wander(b: &mut BuddyBoard) -> bool {
    b.idle.reset();
    b.path_found = false;
    true
}

// ============================================================================
// Movement
// ============================================================================

/// One tick of tile-to-tile movement under `lock`.
///
/// Returns `true` once the route is exhausted.
fn advance_move(b: &mut BuddyBoard, lock: Lock) -> bool {
    let Some(next) = b.next_coord else {
        b.lock = Lock::None;
        return true;
    };

    b.movement.advance();
    if !b.movement.is_elapsed() {
        let t = b.movement.progress();
        let from = b.cell_position(b.body.coord);
        let to = b.cell_position(next);
        b.body.set_position(from.lerp(to, t));
        b.lock = lock;
        return false;
    }

    b.movement.reset();
    b.lock = Lock::None;

    let moved = b.grid.borrow_mut().move_occupant(b.body.id, next);
    if let Err(err) = moved {
        warn!(buddy = %b.body.id, to = %next, %err, "step blocked, dropping route");
        b.clear_route();
        b.snap_to_cell();
        return true;
    }

    b.previous_coord = Some(b.body.coord);
    b.body.coord = next;
    b.snap_to_cell();

    b.next_coord = b.path.next_step();
    b.next_coord.is_none()
}

/// Cleanup for the desk walk.
pub fn abort_move(b: &mut BuddyBoard) {
    b.lock = Lock::None;
    b.clear_route();
    b.snap_to_cell();
}

/// Cleanup for the wander step. The idle wait starts over.
pub fn abort_wander(b: &mut BuddyBoard) {
    abort_move(b);
    b.idle.reset();
}

// ============================================================================
// Builders
// ============================================================================

/// Route to the desk, walk it, sit down.
pub fn move_to_desk_behavior() -> Node {
    sequence(vec![
        condition(find_desk_path),
        interruptible(step_toward_desk, abort_move),
        action(arrive_at_desk),
    ])
}

/// Go to the desk and stay there while work is pending.
pub fn work_behavior() -> Node {
    sequence(vec![
        condition(wants_work),
        branch(
            condition(is_at_desk),
            interruptible(keep_working, stop_working),
            move_to_desk_behavior(),
        ),
    ])
}

/// Wait, then wander to a neighbouring tile.
pub fn idle_behavior() -> Node {
    sequence(vec![
        condition(idle_elapsed),
        condition(pick_wander_target),
        interruptible(wander_step, abort_wander),
        action(finish_wander),
    ])
}

/// Work when there is work, idle otherwise.
pub fn buddy_behavior() -> Node {
    selector(vec![work_behavior(), idle_behavior()])
}
