use game_core::GameConfig;

/// Runtime configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Base seed for wander choices. Each buddy mixes in its own id.
    pub rng_seed: u64,
}

impl RuntimeConfig {
    pub const DEFAULT_RNG_SEED: u64 = 0x0ff1_ce;

    pub fn new(game_config: GameConfig) -> Self {
        Self {
            game_config,
            rng_seed: Self::DEFAULT_RNG_SEED,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, rng_seed: u64) -> Self {
        self.rng_seed = rng_seed;
        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
