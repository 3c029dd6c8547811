//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the building blocks for decision trees: [`Sequence`]
//! (AND logic, or OR logic when configured as a selector) and [`Branch`]
//! (if/else routing).

use crate::{Behavior, Interrupt, NodeId, Status};

/// Child result that makes a [`Sequence`] stop early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExitCode {
    /// Stop at the first failing child (AND semantics).
    #[default]
    Failure,
    /// Stop at the first succeeding child (OR semantics).
    Success,
}

impl ExitCode {
    /// The status this exit code matches.
    #[inline]
    pub fn status(self) -> Status {
        match self {
            ExitCode::Failure => Status::Failure,
            ExitCode::Success => Status::Success,
        }
    }
}

/// Executes child behaviors in declaration order until one matches the exit code.
///
/// # Semantics
///
/// A `Sequence` evaluates its children from left to right and stops as soon
/// as a child returns:
/// - the configured [`ExitCode`]
/// - `Processing` (the running action is re-entered next tick from here)
///
/// `Error` does not stop the walk: the next child runs as it would after
/// any other non-exit result.
///
/// The sequence returns the result of the last child it evaluated. With
/// `ExitCode::Failure` this is a short-circuited logical AND; with
/// `ExitCode::Success` (a selector) it is a short-circuited logical OR.
///
/// Child order is part of the contract: earlier children guard later ones.
/// A sequence with no children returns `Success`.
pub struct Sequence<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    exit_code: ExitCode,
}

impl<C> Sequence<C> {
    /// Creates a sequence (AND semantics) with the given child behaviors.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self::with_exit_code(children, ExitCode::Failure)
    }

    /// Creates a selector (OR semantics) with the given child behaviors.
    pub fn selector(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self::with_exit_code(children, ExitCode::Success)
    }

    /// Creates a sequence that stops on the given exit code.
    pub fn with_exit_code(children: Vec<Box<dyn Behavior<C>>>, exit_code: ExitCode) -> Self {
        Self {
            children,
            exit_code,
        }
    }

    /// Appends a child behind the existing ones.
    pub fn push(&mut self, child: Box<dyn Behavior<C>>) {
        self.children.push(child);
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        let exit = self.exit_code.status();
        let mut result = Status::Success;
        for child in &self.children {
            result = child.tick(ctx);
            if result == exit || result.is_processing() {
                break;
            }
        }
        result
    }

    fn contains(&self, node: NodeId) -> bool {
        self.children.iter().any(|child| child.contains(node))
    }

    fn interrupt(&self, node: NodeId, ctx: &mut C) -> Interrupt {
        for child in &self.children {
            match child.interrupt(node, ctx) {
                Interrupt::NotFound => continue,
                outcome => return outcome,
            }
        }
        Interrupt::NotFound
    }
}

/// Routes to one of two subtrees based on a predicate node.
///
/// # Semantics
///
/// The predicate is evaluated on every call (the routing decision is never
/// cached across ticks):
/// - `Success`: returns `left.tick()`
/// - `Failure`: returns `right.tick()`
/// - anything else: returns `Error`
///
/// The predicate must settle within the call. A predicate that answers
/// `Processing` degrades the branch to `Error`.
pub struct Branch<C> {
    predicate: Box<dyn Behavior<C>>,
    left: Box<dyn Behavior<C>>,
    right: Box<dyn Behavior<C>>,
}

impl<C> Branch<C> {
    /// Creates a branch from a predicate and the two subtrees it routes to.
    pub fn new(
        predicate: Box<dyn Behavior<C>>,
        left: Box<dyn Behavior<C>>,
        right: Box<dyn Behavior<C>>,
    ) -> Self {
        Self {
            predicate,
            left,
            right,
        }
    }
}

impl<C> Behavior<C> for Branch<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        match self.predicate.tick(ctx) {
            Status::Success => self.left.tick(ctx),
            Status::Failure => self.right.tick(ctx),
            Status::Processing | Status::Error => Status::Error,
        }
    }

    fn contains(&self, node: NodeId) -> bool {
        self.predicate.contains(node) || self.left.contains(node) || self.right.contains(node)
    }

    fn interrupt(&self, node: NodeId, ctx: &mut C) -> Interrupt {
        [&self.predicate, &self.left, &self.right]
            .into_iter()
            .map(|child| child.interrupt(node, ctx))
            .find(|outcome| *outcome != Interrupt::NotFound)
            .unwrap_or(Interrupt::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Blackboard};

    #[derive(Default)]
    struct TestContext {
        value: i32,
        running: Option<NodeId>,
    }

    impl Blackboard for TestContext {
        fn running_node(&self) -> Option<NodeId> {
            self.running
        }

        fn set_running_node(&mut self, node: Option<NodeId>) {
            self.running = node;
        }
    }

    struct Increment;
    impl Behavior<TestContext> for Increment {
        fn tick(&self, ctx: &mut TestContext) -> Status {
            ctx.value += 1;
            Status::Success
        }
    }

    struct Decrement;
    impl Behavior<TestContext> for Decrement {
        fn tick(&self, ctx: &mut TestContext) -> Status {
            ctx.value -= 1;
            Status::Success
        }
    }

    struct FailAlways;
    impl Behavior<TestContext> for FailAlways {
        fn tick(&self, _ctx: &mut TestContext) -> Status {
            Status::Failure
        }
    }

    struct Fixed(Status);
    impl Behavior<TestContext> for Fixed {
        fn tick(&self, _ctx: &mut TestContext) -> Status {
            self.0
        }
    }

    #[test]
    fn sequence_all_success() {
        let seq = Sequence::new(vec![Box::new(Increment), Box::new(Increment)]);

        let mut ctx = TestContext::default();
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let seq = Sequence::new(vec![
            Box::new(Increment),
            Box::new(FailAlways),
            Box::new(Increment), // Should not execute
        ]);

        let mut ctx = TestContext::default();
        assert_eq!(seq.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.value, 1); // Only first increment executed
    }

    #[test]
    fn empty_sequence_succeeds() {
        let seq: Sequence<TestContext> = Sequence::new(Vec::new());
        let sel: Sequence<TestContext> = Sequence::selector(Vec::new());

        let mut ctx = TestContext::default();
        assert!(seq.is_empty());
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(sel.tick(&mut ctx), Status::Success);
    }

    #[test]
    fn selector_succeeds_on_first_success() {
        let sel = Sequence::selector(vec![
            Box::new(FailAlways),
            Box::new(Increment),
            Box::new(Decrement), // Should not execute
        ]);

        let mut ctx = TestContext::default();
        assert_eq!(sel.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 1); // Only Increment executed
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let sel = Sequence::selector(vec![Box::new(FailAlways), Box::new(FailAlways)]);

        let mut ctx = TestContext::default();
        assert_eq!(sel.tick(&mut ctx), Status::Failure);
    }

    #[test]
    fn processing_short_circuits_both_flavours() {
        for exit_code in [ExitCode::Failure, ExitCode::Success] {
            let seq = Sequence::with_exit_code(
                vec![
                    Box::new(Fixed(Status::Processing)),
                    Box::new(Increment), // Should not execute
                ],
                exit_code,
            );

            let mut ctx = TestContext::default();
            assert_eq!(seq.tick(&mut ctx), Status::Processing);
            assert_eq!(ctx.value, 0);
        }
    }

    #[test]
    fn error_falls_through_to_next_child() {
        let sel = Sequence::selector(vec![
            Box::new(Fixed(Status::Error)),
            Box::new(Increment),
        ]);
        let mut ctx = TestContext::default();
        assert_eq!(sel.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 1);

        let seq = Sequence::new(vec![Box::new(Fixed(Status::Error)), Box::new(Increment)]);
        let mut ctx = TestContext::default();
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 1);

        let last = Sequence::new(vec![Box::new(Increment), Box::new(Fixed(Status::Error))]);
        let mut ctx = TestContext::default();
        assert_eq!(last.tick(&mut ctx), Status::Error);
    }

    #[test]
    fn push_appends_in_order() {
        let mut seq = Sequence::new(vec![Box::new(Increment) as Box<dyn Behavior<TestContext>>]);
        seq.push(Box::new(FailAlways));
        seq.push(Box::new(Increment));
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.exit_code(), ExitCode::Failure);

        let mut ctx = TestContext::default();
        assert_eq!(seq.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.value, 1);
    }

    #[test]
    fn branch_routes_on_predicate() {
        let branch = Branch::new(
            Box::new(Fixed(Status::Success)),
            Box::new(Increment),
            Box::new(Decrement),
        );
        let mut ctx = TestContext::default();
        assert_eq!(branch.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 1);

        let branch = Branch::new(
            Box::new(Fixed(Status::Failure)),
            Box::new(Increment),
            Box::new(FailAlways),
        );
        let mut ctx = TestContext::default();
        assert_eq!(branch.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.value, 0);
    }

    #[test]
    fn branch_with_unsettled_predicate_is_error() {
        for predicate in [Status::Processing, Status::Error] {
            let branch = Branch::new(
                Box::new(Fixed(predicate)),
                Box::new(Increment),
                Box::new(Decrement),
            );

            let mut ctx = TestContext::default();
            assert_eq!(branch.tick(&mut ctx), Status::Error);
            assert_eq!(ctx.value, 0);
        }
    }

    #[test]
    fn interrupt_reaches_nested_action() {
        let action = Action::new(|_: &mut TestContext| false)
            .with_cleanup(|ctx: &mut TestContext| ctx.value = -1);
        let id = action.id();

        let tree: Sequence<TestContext> = Sequence::selector(vec![
            Box::new(FailAlways),
            Box::new(Branch::new(
                Box::new(Fixed(Status::Success)),
                Box::new(Sequence::new(vec![Box::new(Increment), Box::new(action)])),
                Box::new(Decrement),
            )),
        ]);

        assert!(tree.contains(id));
        assert!(!tree.contains(NodeId::next()));

        let mut ctx = TestContext::default();
        assert_eq!(tree.tick(&mut ctx), Status::Processing);
        assert_eq!(ctx.running, Some(id));

        assert_eq!(tree.interrupt(id, &mut ctx), Interrupt::CleanedUp);
        assert_eq!(ctx.value, -1);
        assert_eq!(tree.interrupt(NodeId::next(), &mut ctx), Interrupt::NotFound);
    }
}
