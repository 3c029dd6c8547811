//! Lightweight behavior tree library for tick-driven agents.
//!
//! This library provides a small behavior tree engine for agents that are
//! ticked once per simulation frame:
//!
//! - **Resumable actions**: Actions that need several ticks return
//!   `Processing` and are re-entered next tick
//! - **Handles, not references**: The suspended action is recorded on the
//!   blackboard as a [`NodeId`]
//! - **Interrupts**: The suspended action's cleanup can be invoked out of band
//!   to release whatever it was holding
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success, Failure, Processing or Error
//! - [`Blackboard`]: Per-agent state that records the running action
//! - Leaf nodes: [`Condition`], [`Action`]
//! - Composite nodes: [`Sequence`] (sequence or selector), [`Branch`]
//! - [`BehaviorTree`]: Owns the root and the blackboard, runs and interrupts

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod leaf;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::{Behavior, Blackboard, Interrupt, NodeId};
pub use composite::{Branch, ExitCode, Sequence};
pub use leaf::{Action, Condition};
pub use status::Status;
pub use tree::BehaviorTree;
