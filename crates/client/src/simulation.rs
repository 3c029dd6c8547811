//! Builds the office and plays a scripted day.

use anyhow::Result;
use game_content::{ConfigLoader, LayoutLoader};
use game_core::GameConfig;
use runtime::{Office, RuntimeConfig, Signal};

use crate::config::OfficeConfig;

/// Loads config and layout, then spawns one buddy on the spawn tile.
pub fn build_office(config: &OfficeConfig) -> Result<Office> {
    let game_config = match &config.config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => GameConfig::default(),
    };
    let grid = match &config.layout_path {
        Some(path) => LayoutLoader::load(path)?,
        None => LayoutLoader::default_office()?,
    };

    let mut office = Office::new(grid, RuntimeConfig::new(game_config).with_seed(config.seed));
    office.spawn_buddy()?;
    Ok(office)
}

/// Runs `config.ticks` ticks, dispatching the scripted signals on their ticks.
pub fn run(office: &mut Office, config: &OfficeConfig) {
    for _ in 0..config.ticks {
        let tick = office.current_tick().0;
        if config.work_at == Some(tick) {
            office.dispatch(Signal::Work);
        }
        if config.break_at == Some(tick) {
            office.dispatch(Signal::Break);
        }
        office.step();
    }
}
