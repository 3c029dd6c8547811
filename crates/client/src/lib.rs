//! Office simulation client.
//!
//! # Architecture
//!
//! ```text
//! office (binary)
//!   ├─→ config      (environment variables)
//!   ├─→ game-content (layout RON, game config TOML)
//!   └─→ runtime     (Office tick driver, buddies, signals)
//! ```

pub mod config;
pub mod simulation;

pub use config::OfficeConfig;
pub use simulation::{build_office, run};
