//! Data-driven office content and loaders.
//!
//! This crate ships the default office and reads replacements from disk:
//! - Room layouts (grid size, tile size, furniture) from RON
//! - Simulation timings from TOML
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ItemSpec, LayoutLoader, LayoutSpec, LoadResult};
