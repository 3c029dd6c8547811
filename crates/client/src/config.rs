//! Client configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

use runtime::RuntimeConfig;

/// What to simulate and for how long.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OfficeConfig {
    /// TOML game config; the built-in defaults when unset.
    pub config_path: Option<PathBuf>,
    /// RON layout; the shipped office when unset.
    pub layout_path: Option<PathBuf>,
    pub ticks: u64,
    pub seed: u64,
    /// Tick on which `interrupt.work` is dispatched.
    pub work_at: Option<u64>,
    /// Tick on which `interrupt.break` is dispatched.
    pub break_at: Option<u64>,
}

impl OfficeConfig {
    pub const DEFAULT_TICKS: u64 = 600;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `OFFICE_CONFIG` - Path to a TOML game config
    /// - `OFFICE_LAYOUT` - Path to a RON office layout
    /// - `OFFICE_TICKS` - Ticks to simulate (default: 600)
    /// - `OFFICE_SEED` - Seed for wander choices
    /// - `OFFICE_WORK_AT` - Tick to assign work on
    /// - `OFFICE_BREAK_AT` - Tick to end work on
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.config_path = env::var("OFFICE_CONFIG").ok().map(PathBuf::from);
        config.layout_path = env::var("OFFICE_LAYOUT").ok().map(PathBuf::from);

        if let Some(ticks) = read_env::<u64>("OFFICE_TICKS") {
            config.ticks = ticks;
        }
        if let Some(seed) = read_env::<u64>("OFFICE_SEED") {
            config.seed = seed;
        }

        config.work_at = read_env::<u64>("OFFICE_WORK_AT");
        config.break_at = read_env::<u64>("OFFICE_BREAK_AT");

        config
    }
}

impl Default for OfficeConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            layout_path: None,
            ticks: Self::DEFAULT_TICKS,
            seed: RuntimeConfig::DEFAULT_RNG_SEED,
            work_at: None,
            break_at: None,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
