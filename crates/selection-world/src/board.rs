//! The board: creatures, food, and the per-tick state update.

use crate::creature::Creature;
use rand::Rng;
use selection_core::{BoardConfig, CreatureId, EnergyConfig, Position, TickStats};
use tracing::{debug, trace};

/// A square board holding creatures and food points
#[derive(Debug, Clone)]
pub struct Board {
    config: BoardConfig,
    energy: EnergyConfig,
    creatures: Vec<Creature>,
    food: Vec<Position>,
    next_id: u32,
}

impl Board {
    /// An empty board with no creatures or food
    pub fn empty(config: BoardConfig, energy: EnergyConfig) -> Self {
        Self {
            config,
            energy,
            creatures: Vec::new(),
            food: Vec::new(),
            next_id: 1,
        }
    }

    /// Populate a board with creatures and food at uniform random positions.
    ///
    /// Positions are drawn independently, so creatures and food may overlap.
    pub fn new<R: Rng + ?Sized>(config: BoardConfig, energy: EnergyConfig, rng: &mut R) -> Self {
        let creature_count = config.initial_creatures;
        let food_count = config.initial_food();
        let mut board = Self::empty(config, energy);

        for _ in 0..creature_count {
            let pos = board.random_position(rng);
            board.spawn_creature(pos);
        }

        for _ in 0..food_count {
            let pos = board.random_position(rng);
            board.add_food(pos);
        }

        debug!(
            creatures = board.creatures.len(),
            food = board.food.len(),
            size = board.config.size,
            "Board populated"
        );

        board
    }

    fn random_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        let size = self.config.size;
        Position::new(rng.gen_range(0..size), rng.gen_range(0..size))
    }

    /// Add a creature at full energy and return its id
    pub fn spawn_creature(&mut self, pos: Position) -> CreatureId {
        let id = CreatureId(self.next_id);
        self.next_id += 1;
        self.creatures.push(Creature::new(id, pos, self.energy.max_energy));
        id
    }

    pub fn add_food(&mut self, pos: Position) {
        self.food.push(pos);
    }

    pub fn size(&self) -> i32 {
        self.config.size
    }

    pub fn max_energy(&self) -> i32 {
        self.energy.max_energy
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    #[cfg(test)]
    pub(crate) fn creatures_mut(&mut self) -> &mut [Creature] {
        &mut self.creatures
    }

    pub fn food(&self) -> &[Position] {
        &self.food
    }

    pub fn population(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_extinct(&self) -> bool {
        self.creatures.is_empty()
    }

    /// First creature standing on `pos`, in creature order
    pub fn creature_at(&self, pos: Position) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.position == pos)
    }

    pub fn has_food_at(&self, pos: Position) -> bool {
        self.food.contains(&pos)
    }

    /// Advance every creature by one move.
    ///
    /// Each creature steps onto the first food in its 3x3 neighbourhood, or
    /// wanders if there is none, then eats at most one food it lands on.
    /// Creatures that run out of energy are removed after the full pass.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickStats {
        let size = self.config.size;
        let food_energy = self.energy.food_energy;
        let max_energy = self.energy.max_energy;

        let mut stats = TickStats::default();
        let mut dead = Vec::new();

        for (index, creature) in self.creatures.iter_mut().enumerate() {
            let nearby = self
                .food
                .iter()
                .find(|food| food.chebyshev_distance(&creature.position) <= 1)
                .copied();

            match nearby {
                Some(target) => {
                    trace!(creature = %creature.id, from = %creature.position, to = %target, "Moving to food");
                    creature.move_to(target);
                    stats.moves_toward_food += 1;
                }
                None => {
                    creature.wander(rng, size);
                }
            }

            if let Some(food_index) = self.food.iter().position(|f| *f == creature.position) {
                self.food.remove(food_index);
                creature.eat(food_energy, max_energy);
                stats.meals += 1;
                trace!(creature = %creature.id, energy = creature.energy, "Ate food");
            }

            if !creature.is_alive() {
                dead.push(index);
            }
        }

        if !dead.is_empty() {
            for &index in &dead {
                let creature = &self.creatures[index];
                debug!(
                    creature = %creature.id,
                    x = creature.position.x,
                    y = creature.position.y,
                    "Creature starved"
                );
            }
            let mut index = 0;
            self.creatures.retain(|_| {
                let keep = !dead.contains(&index);
                index += 1;
                keep
            });
        }

        stats.deaths = dead.len();
        stats.population = self.creatures.len();
        stats.food_remaining = self.food.len();
        stats
    }
}
