//! Content loaders for reading office data from files.
//!
//! Layouts are RON, configuration is TOML. Both produce game-core types.

pub mod config;
pub mod layout;

pub use config::ConfigLoader;
pub use layout::{ItemSpec, LayoutLoader, LayoutSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
