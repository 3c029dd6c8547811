use crate::geometry::Coord;

/// Game configuration constants and tunable parameters.
///
/// Durations are authored in seconds and converted to tick counts with
/// [`seconds_to_ticks`](GameConfig::seconds_to_ticks).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Simulation frames per second.
    pub ticks_per_second: u32,
    /// How long a buddy stands still before wandering to a neighbouring tile.
    pub idle_wait_secs: f32,
    /// How long a buddy takes to walk from one tile to the next.
    pub move_step_secs: f32,
    /// Tile new buddies are placed on.
    pub spawn: Coord,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TICKS_PER_SECOND: u32 = 60;
    pub const DEFAULT_IDLE_WAIT_SECS: f32 = 3.0;
    pub const DEFAULT_MOVE_STEP_SECS: f32 = 0.3;
    pub const DEFAULT_SPAWN: Coord = Coord::new(3, 3);

    pub fn new() -> Self {
        Self {
            ticks_per_second: Self::DEFAULT_TICKS_PER_SECOND,
            idle_wait_secs: Self::DEFAULT_IDLE_WAIT_SECS,
            move_step_secs: Self::DEFAULT_MOVE_STEP_SECS,
            spawn: Self::DEFAULT_SPAWN,
        }
    }

    /// Converts a duration to a tick count, never less than one tick.
    pub fn seconds_to_ticks(&self, seconds: f32) -> u32 {
        let ticks = (seconds.max(0.0) * self.ticks_per_second as f32).round() as u32;
        ticks.max(1)
    }

    /// Ticks a buddy idles before wandering.
    pub fn idle_rate(&self) -> u32 {
        self.seconds_to_ticks(self.idle_wait_secs)
    }

    /// Ticks one tile-to-tile step takes.
    pub fn move_rate(&self) -> u32 {
        self.seconds_to_ticks(self.move_step_secs)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rates() {
        let config = GameConfig::default();
        assert_eq!(config.idle_rate(), 180);
        assert_eq!(config.move_rate(), 18);
    }

    #[test]
    fn rates_never_reach_zero() {
        let config = GameConfig {
            ticks_per_second: 30,
            idle_wait_secs: 0.0,
            move_step_secs: 0.01,
            ..GameConfig::default()
        };
        assert_eq!(config.idle_rate(), 1);
        assert_eq!(config.move_rate(), 1);
        assert_eq!(config.seconds_to_ticks(1.5), 45);
    }
}
