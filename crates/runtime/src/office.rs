//! The tick driver.
//!
//! [`Office`] owns the grid and every live buddy. Each [`step`](Office::step)
//! ticks every buddy once, in spawn order. Signals reach all buddies
//! synchronously between steps.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use game_core::{Coord, GridMap, OccupantId, Tick, TileGrid};
use tracing::{debug, info};

use crate::buddy::{Buddy, SharedGrid};
use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::signal::Signal;

/// Golden-ratio constant spreading consecutive buddy ids across the seed space.
const SEED_MIXING: u64 = 0x9e37_79b9_7f4a_7c15;

pub struct Office {
    grid: Rc<RefCell<TileGrid>>,
    config: RuntimeConfig,
    buddies: Vec<Buddy>,
    next_id: u32,
    tick: Tick,
}

impl Office {
    pub fn new(grid: TileGrid, config: RuntimeConfig) -> Self {
        Self {
            grid: Rc::new(RefCell::new(grid)),
            config,
            buddies: Vec::new(),
            next_id: 1,
            tick: Tick::ZERO,
        }
    }

    /// Spawns a buddy on the configured spawn tile.
    pub fn spawn_buddy(&mut self) -> Result<OccupantId> {
        self.spawn_buddy_at(self.config.game_config.spawn)
    }

    pub fn spawn_buddy_at(&mut self, at: Coord) -> Result<OccupantId> {
        let id = OccupantId(self.next_id);
        let grid: SharedGrid = self.grid.clone();
        let seed = self.config.rng_seed ^ u64::from(id.0).wrapping_mul(SEED_MIXING);

        let buddy = Buddy::spawn(id, at, grid, &self.config.game_config, seed)?;
        self.buddies.push(buddy);
        self.next_id += 1;

        info!(buddy = %id, at = %at, "buddy joined the office");
        Ok(id)
    }

    /// Removes a buddy from the office and the grid.
    pub fn despawn(&mut self, id: OccupantId) -> Result<Buddy> {
        let index = self
            .buddies
            .iter()
            .position(|buddy| buddy.id() == id)
            .ok_or(RuntimeError::UnknownBuddy(id))?;

        self.grid.borrow_mut().remove_occupant(id)?;
        let buddy = self.buddies.remove(index);
        info!(buddy = %id, "buddy left the office");
        Ok(buddy)
    }

    /// Advances the simulation by one tick.
    pub fn step(&mut self) -> Tick {
        for buddy in &mut self.buddies {
            buddy.tick();
        }
        self.tick = self.tick.next();
        self.tick
    }

    pub fn run_for(&mut self, ticks: u64) -> Tick {
        for _ in 0..ticks {
            self.step();
        }
        self.tick
    }

    /// Delivers a signal to every buddy.
    pub fn dispatch(&mut self, signal: Signal) {
        debug!(%signal, tick = %self.tick, "dispatching");
        for buddy in &mut self.buddies {
            buddy.handle_signal(signal);
        }
    }

    /// Delivers a signal by its event name, e.g. `interrupt.work`.
    pub fn dispatch_named(&mut self, name: &str) -> Result<Signal> {
        let signal: Signal = name
            .parse()
            .map_err(|_| RuntimeError::UnknownSignal(name.to_owned()))?;
        self.dispatch(signal);
        Ok(signal)
    }

    pub fn buddy(&self, id: OccupantId) -> Option<&Buddy> {
        self.buddies.iter().find(|buddy| buddy.id() == id)
    }

    pub fn buddy_mut(&mut self, id: OccupantId) -> Option<&mut Buddy> {
        self.buddies.iter_mut().find(|buddy| buddy.id() == id)
    }

    pub fn buddies(&self) -> &[Buddy] {
        &self.buddies
    }

    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    pub fn grid(&self) -> Ref<'_, TileGrid> {
        self.grid.borrow()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }
}
