//! A buddy: one agent, its blackboard and its behavior tree.

pub mod agent;
pub mod behaviors;
pub mod blackboard;

pub use agent::Buddy;
pub use behaviors::{buddy_behavior, idle_behavior, move_to_desk_behavior, work_behavior};
pub use blackboard::{BuddyBoard, BuddyBody, Lock, SharedGrid, Timer, WorkState};
