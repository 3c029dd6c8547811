//! Tick scheduler that owns a root node and its blackboard.

use crate::{Behavior, Blackboard, Interrupt, NodeId, Status};

/// A behavior tree bound to one agent's blackboard.
///
/// # Lifecycle
///
/// Built once per agent, given its root during agent setup, then [`run`]
/// once per simulation tick for as long as the agent lives.
///
/// # Resumption
///
/// The tree keeps no iteration state. An action that needs more ticks
/// records its [`NodeId`] on the blackboard and returns `Processing`; every
/// enclosing sequence stops at that child, so the next `run` walks back down
/// to the same action (re-evaluating the guards in front of it).
///
/// [`run`]: BehaviorTree::run
pub struct BehaviorTree<B> {
    root: Option<Box<dyn Behavior<B>>>,
    blackboard: B,
}

impl<B: Blackboard> BehaviorTree<B> {
    /// Creates a tree with no root around the given blackboard.
    pub fn new(blackboard: B) -> Self {
        Self {
            root: None,
            blackboard,
        }
    }

    /// Sets the root node (builder pattern).
    #[must_use]
    pub fn with_root(mut self, root: Box<dyn Behavior<B>>) -> Self {
        self.set_root(root);
        self
    }

    /// Replaces the root node.
    ///
    /// A running handle that belongs to the previous root is dropped on the
    /// next [`run`](Self::run).
    pub fn set_root(&mut self, root: Box<dyn Behavior<B>>) {
        self.root = Some(root);
    }

    pub fn has_root(&self) -> bool {
        self.root.is_some()
    }

    pub fn blackboard(&self) -> &B {
        &self.blackboard
    }

    pub fn blackboard_mut(&mut self) -> &mut B {
        &mut self.blackboard
    }

    /// The action currently suspended in `Processing`, if any.
    pub fn running_node(&self) -> Option<NodeId> {
        self.blackboard.running_node()
    }

    /// Evaluates the root once against the blackboard.
    ///
    /// Returns `Success` when no root is set. The running handle only
    /// survives a tick that ends in `Processing`.
    pub fn run(&mut self) -> Status {
        let Some(root) = &self.root else {
            return Status::Success;
        };

        if let Some(running) = self.blackboard.running_node()
            && !root.contains(running)
        {
            tracing::debug!("dropping stale running handle {}", running);
            self.blackboard.set_running_node(None);
        }

        let status = root.tick(&mut self.blackboard);
        if !status.is_processing() && self.blackboard.running_node().is_some() {
            self.blackboard.set_running_node(None);
        }

        tracing::trace!(?status, running = ?self.blackboard.running_node(), "tree tick");
        status
    }

    /// Interrupts the running action, if any.
    ///
    /// The action's cleanup runs exactly once and the running handle is
    /// cleared afterwards regardless of the outcome, so a later `interrupt`
    /// is a no-op until some action suspends again.
    pub fn interrupt(&mut self) -> Interrupt {
        let Some(running) = self.blackboard.running_node() else {
            return Interrupt::Idle;
        };

        let outcome = match &self.root {
            Some(root) => root.interrupt(running, &mut self.blackboard),
            None => Interrupt::NotFound,
        };
        self.blackboard.set_running_node(None);

        match outcome {
            Interrupt::CleanedUp => tracing::debug!("interrupted {}", running),
            Interrupt::NoCleanup => {
                tracing::warn!("interrupted {} which has no cleanup", running)
            }
            Interrupt::NotFound => {
                tracing::debug!("interrupt ignored: {} is not part of this tree", running)
            }
            Interrupt::Idle => {}
        }
        outcome
    }
}
