//! Leaf behavior nodes.
//!
//! Leaves wrap plain functions over the blackboard:
//! - [`Condition`] asks a question and answers `Success` or `Failure`
//! - [`Action`] performs one tick's worth of work and reports `Processing`
//!   until its step function says it is done

use crate::{Behavior, Blackboard, Interrupt, NodeId, Status};

type Predicate<C> = Box<dyn Fn(&mut C) -> bool + Send + Sync>;
type Cleanup<C> = Box<dyn Fn(&mut C) + Send + Sync>;

/// Tests the blackboard and reports the answer.
///
/// # Semantics
///
/// - Predicate returns `true`: `Success`
/// - Predicate returns `false`: `Failure`
///
/// Never returns `Processing` or `Error`.
///
/// The predicate receives the blackboard mutably. Conditions are allowed to
/// compute while they test (advance a timer, cache a path) and report whether
/// the result is ready. Because a resumed sequence re-runs its leading
/// conditions every tick, those side effects repeat every tick as well.
pub struct Condition<C> {
    predicate: Predicate<C>,
}

impl<C> Condition<C> {
    /// Creates a condition from a predicate over the blackboard.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&mut C) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
        }
    }
}

impl<C> Behavior<C> for Condition<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        if (self.predicate)(ctx) {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

/// Performs work that may span several ticks.
///
/// # Semantics
///
/// The step function runs once per tick and returns whether the work is
/// complete:
/// - `true`: the action returns `Success` and releases the running handle if
///   it held it
/// - `false`: the action records its [`NodeId`] as the blackboard's running
///   node and returns `Processing`
///
/// Actions keep no state of their own. Progress lives on the blackboard, so
/// re-entering the same action on the next tick simply calls the step
/// function again.
///
/// # Interrupts
///
/// An action built [`with_cleanup`](Action::with_cleanup) runs that cleanup
/// when interrupted. The cleanup must bring the blackboard back to a
/// consistent state no matter how far the action got (release locks, drop
/// cached routes).
pub struct Action<C> {
    id: NodeId,
    step: Predicate<C>,
    cleanup: Option<Cleanup<C>>,
}

impl<C> Action<C> {
    /// Creates an action from a step function.
    pub fn new<F>(step: F) -> Self
    where
        F: Fn(&mut C) -> bool + Send + Sync + 'static,
    {
        Self {
            id: NodeId::next(),
            step: Box::new(step),
            cleanup: None,
        }
    }

    /// Attaches the cleanup run when this action is interrupted (builder pattern).
    #[must_use]
    pub fn with_cleanup<F>(mut self, cleanup: F) -> Self
    where
        F: Fn(&mut C) + Send + Sync + 'static,
    {
        self.cleanup = Some(Box::new(cleanup));
        self
    }

    /// Handle recorded on the blackboard while this action is running.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns `true` if interrupting this action runs a cleanup.
    #[inline]
    pub fn is_interruptible(&self) -> bool {
        self.cleanup.is_some()
    }
}

impl<C: Blackboard> Behavior<C> for Action<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        if (self.step)(ctx) {
            if ctx.running_node() == Some(self.id) {
                ctx.set_running_node(None);
            }
            Status::Success
        } else {
            ctx.set_running_node(Some(self.id));
            Status::Processing
        }
    }

    fn contains(&self, node: NodeId) -> bool {
        self.id == node
    }

    fn interrupt(&self, node: NodeId, ctx: &mut C) -> Interrupt {
        if node != self.id {
            return Interrupt::NotFound;
        }
        match &self.cleanup {
            Some(cleanup) => {
                cleanup(ctx);
                Interrupt::CleanedUp
            }
            None => Interrupt::NoCleanup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TestBoard {
        value: i32,
        cleanups: u32,
        running: Option<NodeId>,
    }

    impl Blackboard for TestBoard {
        fn running_node(&self) -> Option<NodeId> {
            self.running
        }

        fn set_running_node(&mut self, node: Option<NodeId>) {
            self.running = node;
        }
    }

    #[test]
    fn condition_maps_predicate_to_status() {
        let positive = Condition::new(|b: &mut TestBoard| b.value > 0);

        let mut board = TestBoard::default();
        assert_eq!(positive.tick(&mut board), Status::Failure);

        board.value = 3;
        assert_eq!(positive.tick(&mut board), Status::Success);
    }

    #[test]
    fn condition_may_mutate_blackboard() {
        let counter = Condition::new(|b: &mut TestBoard| {
            b.value += 1;
            b.value >= 2
        });

        let mut board = TestBoard::default();
        assert_eq!(counter.tick(&mut board), Status::Failure);
        assert_eq!(counter.tick(&mut board), Status::Success);
        assert_eq!(board.value, 2);
    }

    #[test]
    fn action_processing_records_running_node() {
        let action = Action::new(|b: &mut TestBoard| {
            b.value += 1;
            b.value >= 3
        });

        let mut board = TestBoard::default();
        assert_eq!(action.tick(&mut board), Status::Processing);
        assert_eq!(board.running, Some(action.id()));
        assert_eq!(action.tick(&mut board), Status::Processing);
        assert_eq!(board.running, Some(action.id()));

        assert_eq!(action.tick(&mut board), Status::Success);
        assert_eq!(board.running, None);
    }

    #[test]
    fn completing_action_leaves_foreign_handle_alone() {
        let action = Action::new(|_: &mut TestBoard| true);
        let other = NodeId::next();

        let mut board = TestBoard {
            running: Some(other),
            ..TestBoard::default()
        };
        assert_eq!(action.tick(&mut board), Status::Success);
        assert_eq!(board.running, Some(other));
    }

    #[test]
    fn interrupt_runs_cleanup_for_own_handle_only() {
        let action =
            Action::new(|_: &mut TestBoard| false).with_cleanup(|b: &mut TestBoard| b.cleanups += 1);
        assert!(action.is_interruptible());

        let mut board = TestBoard::default();
        assert_eq!(
            action.interrupt(NodeId::next(), &mut board),
            Interrupt::NotFound
        );
        assert_eq!(board.cleanups, 0);

        assert_eq!(
            action.interrupt(action.id(), &mut board),
            Interrupt::CleanedUp
        );
        assert_eq!(board.cleanups, 1);
    }

    #[test]
    fn interrupt_without_cleanup_is_reported() {
        let action = Action::new(|_: &mut TestBoard| false);
        assert!(!action.is_interruptible());

        let mut board = TestBoard::default();
        assert_eq!(
            action.interrupt(action.id(), &mut board),
            Interrupt::NoCleanup
        );
    }
}
