//! Simulation driver: owns the board and the random source, advances ticks.

use crate::board::Board;
use crate::render::render_frame;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use selection_core::{Result, SimulationConfig, SimulationStats, TickStats};
use std::io::Write;
use tracing::{debug, info, instrument};

/// Ticks between population summaries in the log
const SUMMARY_INTERVAL: u64 = 100;

pub struct Simulation {
    board: Board,
    config: SimulationConfig,
    rng: ChaCha8Rng,
    tick: u64,
    stats: SimulationStats,
}

impl Simulation {
    /// Validate the config, seed the random source and populate a board
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let board = Board::new(config.board.clone(), config.energy.clone(), &mut rng);

        info!(
            seed = ?config.seed,
            size = config.board.size,
            creatures = board.population(),
            food = board.food().len(),
            "Simulation created"
        );

        Ok(Self {
            board,
            config,
            rng,
            tick: 0,
            stats: SimulationStats::new(),
        })
    }

    /// Drive a prepared board instead of a randomly populated one
    pub fn with_board(config: SimulationConfig, board: Board, seed: u64) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            board,
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            tick: 0,
            stats: SimulationStats::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn summary(&self) -> &SimulationStats {
        &self.stats
    }

    /// Advance the board by one tick without drawing
    pub fn step(&mut self) -> TickStats {
        self.tick += 1;
        let was_extinct = self.stats.is_extinct();

        let mut stats = self.board.step(&mut self.rng);
        stats.tick = self.tick;
        self.stats.record(&stats);

        if stats.deaths > 0 {
            debug!(
                tick = self.tick,
                deaths = stats.deaths,
                population = stats.population,
                "Creatures starved"
            );
        }

        if !was_extinct && self.stats.is_extinct() {
            info!(
                tick = self.tick,
                total_meals = self.stats.total_meals,
                "All creatures have starved"
            );
        }

        if self.tick % SUMMARY_INTERVAL == 0 {
            info!(
                tick = self.tick,
                population = stats.population,
                food_remaining = stats.food_remaining,
                total_meals = self.stats.total_meals,
                total_deaths = self.stats.total_deaths,
                "Population summary"
            );
        }

        stats
    }

    /// Advance one tick and draw the resulting frame
    pub fn tick<W: Write>(&mut self, out: &mut W) -> Result<TickStats> {
        let stats = self.step();
        self.render(out)?;
        Ok(stats)
    }

    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        render_frame(&self.board, &self.config.render, out)
    }

    /// Run a fixed number of ticks without pacing or drawing
    #[instrument(skip(self))]
    pub fn run_headless(&mut self, ticks: u64) -> &SimulationStats {
        for _ in 0..ticks {
            self.step();
        }
        &self.stats
    }
}
