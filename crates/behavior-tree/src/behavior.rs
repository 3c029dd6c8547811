//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior tree nodes. The trait is generic over a
//! context type `C`, allowing nodes to access the agent's blackboard and make
//! decisions.
//!
//! Long-running actions do not keep a reference to themselves anywhere.
//! Each [`Action`](crate::Action) is identified by a [`NodeId`], and the
//! blackboard records the id of the action that last returned
//! [`Status::Processing`]. The tree resolves that handle by walking its own
//! nodes ([`Behavior::contains`], [`Behavior::interrupt`]).

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::Status;

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

/// Handle identifying a suspendable node inside a tree.
///
/// Handles are unique for the lifetime of the process, so a handle recorded
/// by one tree can never resolve to a node of another tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Allocates a fresh handle.
    pub fn next() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw handle value, mostly useful for logging.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Shared per-agent state that records which action is currently suspended.
///
/// Everything else a blackboard carries is up to the agent; the tree only
/// needs this slot to resume and interrupt long-running actions.
pub trait Blackboard {
    /// The action that last returned `Processing`, if any.
    fn running_node(&self) -> Option<NodeId>;

    /// Records (or clears) the suspended action.
    fn set_running_node(&mut self, node: Option<NodeId>);
}

/// Outcome of delivering an interrupt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interrupt {
    /// No action was running; nothing to do.
    Idle,
    /// The handle does not resolve to any node of this subtree.
    NotFound,
    /// The action's cleanup ran.
    CleanedUp,
    /// The action was found but carries no cleanup.
    NoCleanup,
}

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this behavior node against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context/blackboard. Nodes can read
    ///   agent state and modify it (e.g., timers or cached paths).
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    /// - `Status::Processing` if the behavior needs more ticks
    /// - `Status::Error` if the behavior reached an illegal state
    fn tick(&self, ctx: &mut C) -> Status;

    /// Returns `true` if the node identified by `node` lives in this subtree.
    fn contains(&self, _node: NodeId) -> bool {
        false
    }

    /// Delivers an interrupt to the node identified by `node`.
    ///
    /// Composite nodes forward to their children; leaves answer only for
    /// their own handle.
    fn interrupt(&self, _node: NodeId, _ctx: &mut C) -> Interrupt {
        Interrupt::NotFound
    }
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }

    #[inline]
    fn contains(&self, node: NodeId) -> bool {
        (**self).contains(node)
    }

    #[inline]
    fn interrupt(&self, node: NodeId, ctx: &mut C) -> Interrupt {
        (**self).interrupt(node, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ids_are_unique() {
        let a = NodeId::next();
        let b = NodeId::next();
        assert_ne!(a, b);
        assert!(b.get() > a.get());
    }

    #[test]
    fn node_id_display() {
        let id = NodeId(7);
        assert_eq!(id.to_string(), "node#7");
    }
}
