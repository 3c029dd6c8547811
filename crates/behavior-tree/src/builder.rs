//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose `Box::new(Sequence::new(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])`.

use crate::{Action, Behavior, Blackboard, Branch, Condition, Sequence};

/// Creates a condition node.
///
/// Shorthand for `Box::new(Condition::new(predicate))`.
#[inline]
pub fn condition<C, F>(predicate: F) -> Box<dyn Behavior<C>>
where
    C: 'static,
    F: Fn(&mut C) -> bool + Send + Sync + 'static,
{
    Box::new(Condition::new(predicate))
}

/// Creates an action node without cleanup.
///
/// Use this for actions that always finish within the tick they start in.
/// Shorthand for `Box::new(Action::new(step))`.
#[inline]
pub fn action<C, F>(step: F) -> Box<dyn Behavior<C>>
where
    C: Blackboard + 'static,
    F: Fn(&mut C) -> bool + Send + Sync + 'static,
{
    Box::new(Action::new(step))
}

/// Creates an action node that runs `cleanup` when interrupted.
///
/// Shorthand for `Box::new(Action::new(step).with_cleanup(cleanup))`.
#[inline]
pub fn interruptible<C, F, K>(step: F, cleanup: K) -> Box<dyn Behavior<C>>
where
    C: Blackboard + 'static,
    F: Fn(&mut C) -> bool + Send + Sync + 'static,
    K: Fn(&mut C) + Send + Sync + 'static,
{
    Box::new(Action::new(step).with_cleanup(cleanup))
}

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Sequence::selector(children))`.
#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::selector(children))
}

/// Creates a branch node.
///
/// Shorthand for `Box::new(Branch::new(predicate, left, right))`.
#[inline]
pub fn branch<C: 'static>(
    predicate: Box<dyn Behavior<C>>,
    left: Box<dyn Behavior<C>>,
    right: Box<dyn Behavior<C>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Branch::new(predicate, left, right))
}
