//! Per-tick and whole-run statistics.

use serde::{Deserialize, Serialize};

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickStats {
    /// Tick number, starting at 1
    pub tick: u64,
    /// Creatures alive after the tick
    pub population: usize,
    /// Food left on the board after the tick
    pub food_remaining: usize,
    /// Creatures that stepped onto adjacent food instead of wandering
    pub moves_toward_food: usize,
    /// Food items eaten
    pub meals: usize,
    /// Creatures removed at the end of the tick
    pub deaths: usize,
}

/// Totals accumulated over a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    pub ticks: u64,
    pub total_meals: u64,
    pub total_deaths: u64,
    /// Tick at which the last creature died
    pub extinct_at: Option<u64>,
}

impl SimulationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one tick into the totals
    pub fn record(&mut self, tick: &TickStats) {
        self.ticks = tick.tick;
        self.total_meals += tick.meals as u64;
        self.total_deaths += tick.deaths as u64;
        if tick.population == 0 && self.extinct_at.is_none() {
            self.extinct_at = Some(tick.tick);
        }
    }

    pub fn is_extinct(&self) -> bool {
        self.extinct_at.is_some()
    }
}
