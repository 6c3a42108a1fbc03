//! Configuration types for the simulation.
//!
//! There is no runtime configuration surface; every default comes from the
//! compile-time constants below.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Side length of the square board
pub const BOARD_SIZE: i32 = 30;
/// Energy gained per food eaten
pub const FOOD_ENERGY: i32 = 10;
/// Starting and maximum creature energy
pub const MAX_ENERGY: i32 = 30;
/// Creatures placed at startup
pub const INITIAL_CREATURES: usize = 8;
/// Food points placed per initial creature
pub const FOOD_PER_CREATURE: usize = 10;
/// Pause between frames
pub const TICK_INTERVAL_MS: u64 = 300;
/// Attempts a random move makes to avoid stepping back before giving up
pub const MAX_MOVE_ATTEMPTS: usize = 16;
/// First SGR foreground code of the energy palette
pub const PALETTE_BASE: u8 = 31;
/// Number of colour bands in the energy palette
pub const PALETTE_BANDS: i32 = 7;
/// SGR code used for food markers
pub const FOOD_COLOR: u8 = 33;

/// Board layout parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Side length of the board
    pub size: i32,
    /// Creatures placed at construction
    pub initial_creatures: usize,
    /// Food points placed per initial creature
    pub food_per_creature: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            initial_creatures: INITIAL_CREATURES,
            food_per_creature: FOOD_PER_CREATURE,
        }
    }
}

impl BoardConfig {
    pub fn initial_food(&self) -> usize {
        self.initial_creatures * self.food_per_creature
    }
}

/// Energy economy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyConfig {
    /// Starting energy, also the cap applied when eating
    pub max_energy: i32,
    /// Energy gained per food
    pub food_energy: i32,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            max_energy: MAX_ENERGY,
            food_energy: FOOD_ENERGY,
        }
    }
}

/// Terminal palette
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// SGR code of the lowest energy band
    pub palette_base: u8,
    /// SGR code for food
    pub food_color: u8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            palette_base: PALETTE_BASE,
            food_color: FOOD_COLOR,
        }
    }
}

/// Top-level simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub board: BoardConfig,
    pub energy: EnergyConfig,
    pub render: RenderConfig,
    /// Pause between frames in milliseconds
    pub tick_interval_ms: u64,
    /// Random seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            energy: EnergyConfig::default(),
            render: RenderConfig::default(),
            tick_interval_ms: TICK_INTERVAL_MS,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        // Reflection at an edge needs at least one cell on the other side.
        if self.board.size < 2 {
            return Err(Error::InvalidConfig(format!(
                "board size must be at least 2, got {}",
                self.board.size
            )));
        }
        if self.energy.max_energy <= 0 {
            return Err(Error::InvalidConfig(format!(
                "max energy must be positive, got {}",
                self.energy.max_energy
            )));
        }
        if self.energy.food_energy < 0 {
            return Err(Error::InvalidConfig(format!(
                "food energy must not be negative, got {}",
                self.energy.food_energy
            )));
        }
        let top_band = i32::from(self.render.palette_base) + PALETTE_BANDS - 1;
        if top_band > i32::from(u8::MAX) {
            return Err(Error::InvalidConfig(format!(
                "palette base {} leaves no room for {} colour bands",
                self.render.palette_base, PALETTE_BANDS
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(Error::InvalidConfig(
                "tick interval must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
