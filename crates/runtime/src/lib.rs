//! Runtime for the office simulation.
//!
//! This crate binds the generic behavior tree to office buddies. Consumers
//! build an [`Office`] from a grid, spawn buddies into it, drive it with
//! [`Office::step`] and deliver [`Signal`]s between ticks.
//!
//! Modules are organized by responsibility:
//! - [`buddy`] holds the blackboard, the behaviors and the agent wrapper
//! - [`office`] is the per-tick driver for every live buddy
//! - [`signal`] names the external interrupt events
pub mod buddy;
pub mod config;
pub mod error;
pub mod office;
pub mod signal;

pub use buddy::{Buddy, BuddyBoard, BuddyBody, Lock, SharedGrid, Timer, WorkState};
pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use office::Office;
pub use signal::Signal;
