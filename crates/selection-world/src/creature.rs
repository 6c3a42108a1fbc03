//! Creature state and movement.

use rand::Rng;
use selection_core::{CreatureId, Position, MAX_MOVE_ATTEMPTS, PALETTE_BANDS};
use tracing::trace;

/// A creature on the board
#[derive(Debug, Clone)]
pub struct Creature {
    pub id: CreatureId,
    pub position: Position,
    /// Where the creature stood before its last move
    pub previous: Option<Position>,
    pub energy: i32,
}

impl Creature {
    pub fn new(id: CreatureId, position: Position, energy: i32) -> Self {
        Self {
            id,
            position,
            previous: None,
            energy,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.energy > 0
    }

    /// Gain `food_energy`, never rising above `max_energy`
    pub fn eat(&mut self, food_energy: i32, max_energy: i32) {
        self.energy = self.energy.saturating_add(food_energy).min(max_energy);
    }

    /// Step straight onto `target`
    pub fn move_to(&mut self, target: Position) {
        self.previous = Some(self.position);
        self.position = target;
        self.energy -= 1;
    }

    /// Take one random step of at most one cell per axis.
    ///
    /// Deltas that would leave the board are reflected rather than clamped.
    /// Candidates that land back on the previous position are redrawn, up to
    /// `MAX_MOVE_ATTEMPTS` times; after that the reversal is accepted and
    /// `true` is returned.
    pub fn wander<R: Rng + ?Sized>(&mut self, rng: &mut R, size: i32) -> bool {
        let mut candidate = self.position;
        let mut stepped_back = false;

        for attempt in 0..MAX_MOVE_ATTEMPTS {
            let dx = reflect(self.position.x, rng.gen_range(-1..=1), size);
            let dy = reflect(self.position.y, rng.gen_range(-1..=1), size);
            candidate = self.position.offset(dx, dy);

            if Some(candidate) != self.previous {
                break;
            }

            if attempt + 1 == MAX_MOVE_ATTEMPTS {
                trace!(creature = %self.id, "no non-reversing step found, stepping back");
                stepped_back = true;
            }
        }

        self.move_to(candidate);
        stepped_back
    }

    /// Energy band in `0..PALETTE_BANDS`, lowest for starving creatures
    pub fn energy_band(&self, max_energy: i32) -> u8 {
        if self.energy <= 0 || max_energy <= 0 {
            return 0;
        }
        let band = i64::from(self.energy) * i64::from(PALETTE_BANDS) / i64::from(max_energy);
        band.min(i64::from(PALETTE_BANDS - 1)) as u8
    }
}

fn reflect(coord: i32, delta: i32, size: i32) -> i32 {
    if (0..size).contains(&(coord + delta)) {
        delta
    } else {
        -delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn creature_at(x: i32, y: i32) -> Creature {
        Creature::new(CreatureId(1), Position::new(x, y), 30)
    }

    #[test]
    fn test_creature_creation() {
        let creature = creature_at(5, 5);
        assert_eq!(creature.position, Position::new(5, 5));
        assert_eq!(creature.energy, 30);
        assert!(creature.previous.is_none());
        assert!(creature.is_alive());
    }

    #[test]
    fn test_eat_is_capped() {
        let mut creature = creature_at(0, 0);
        creature.energy = 15;
        creature.eat(10, 30);
        assert_eq!(creature.energy, 25);

        creature.eat(10, 30);
        assert_eq!(creature.energy, 30);
    }

    #[test]
    fn test_move_to_records_previous() {
        let mut creature = creature_at(5, 5);
        creature.move_to(Position::new(6, 5));

        assert_eq!(creature.position, Position::new(6, 5));
        assert_eq!(creature.previous, Some(Position::new(5, 5)));
        assert_eq!(creature.energy, 29);
    }

    #[test]
    fn test_last_move_kills() {
        let mut creature = Creature::new(CreatureId(1), Position::new(2, 2), 1);
        creature.move_to(Position::new(2, 3));
        assert_eq!(creature.energy, 0);
        assert!(!creature.is_alive());
    }

    #[test]
    fn test_wander_never_steps_back_in_open_space() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut creature = Creature::new(CreatureId(1), Position::new(500, 500), i32::MAX);

        for _ in 0..500 {
            let before = creature.previous;
            creature.wander(&mut rng, 1000);
            if let Some(previous) = before {
                assert_ne!(creature.position, previous);
            }
        }
    }

    #[test]
    fn test_wander_steps_back_after_exhausting_attempts() {
        // Every draw is the lowest value, so every delta is -1.
        let mut rng = StepRng::new(0, 0);
        let mut creature = creature_at(5, 5);
        creature.previous = Some(Position::new(4, 4));

        let stepped_back = creature.wander(&mut rng, 30);

        assert!(stepped_back);
        assert_eq!(creature.position, Position::new(4, 4));
        assert_eq!(creature.previous, Some(Position::new(5, 5)));
        assert_eq!(creature.energy, 29);
    }

    #[test]
    fn test_wander_reflected_draw_avoids_reversal() {
        // At the top-left corner a -1 draw reflects to +1 on both axes.
        let mut rng = StepRng::new(0, 0);
        let mut creature = creature_at(0, 0);
        creature.previous = Some(Position::new(1, 1));

        assert!(creature.wander(&mut rng, 30));
        assert_eq!(creature.position, Position::new(1, 1));

        let mut creature = creature_at(0, 0);
        creature.previous = Some(Position::new(1, 0));
        assert!(!creature.wander(&mut rng, 30));
        assert_eq!(creature.position, Position::new(1, 1));
    }

    #[test]
    fn test_wander_reflects_off_corner() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let mut creature = creature_at(0, 0);
            creature.wander(&mut rng, 30);
            assert!(creature.position.x >= 0 && creature.position.x <= 1);
            assert!(creature.position.y >= 0 && creature.position.y <= 1);
        }
    }

    #[test]
    fn test_energy_band() {
        let mut creature = creature_at(0, 0);
        assert_eq!(creature.energy_band(30), 6);

        creature.energy = 29;
        assert_eq!(creature.energy_band(30), 6);

        creature.energy = 15;
        assert_eq!(creature.energy_band(30), 3);

        creature.energy = 4;
        assert_eq!(creature.energy_band(30), 0);

        creature.energy = 5;
        assert_eq!(creature.energy_band(30), 1);

        creature.energy = 0;
        assert_eq!(creature.energy_band(30), 0);
    }

    proptest! {
        #[test]
        fn wander_stays_in_bounds(
            x in 0i32..30,
            y in 0i32..30,
            seed in any::<u64>(),
            steps in 1usize..40,
        ) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut creature = Creature::new(CreatureId(1), Position::new(x, y), 100);

            for _ in 0..steps {
                let energy = creature.energy;
                let from = creature.position;
                let before = creature.previous;
                let stepped_back = creature.wander(&mut rng, 30);

                if stepped_back {
                    prop_assert_eq!(Some(creature.position), before);
                } else if let Some(previous) = before {
                    prop_assert_ne!(creature.position, previous);
                }
                prop_assert!(creature.position.in_bounds(30));
                prop_assert!(creature.position.chebyshev_distance(&from) <= 1);
                prop_assert_eq!(creature.energy, energy - 1);
                prop_assert_eq!(creature.previous, Some(from));
            }
        }

        #[test]
        fn eat_never_exceeds_cap(start in 1i32..=30, meals in 0usize..10) {
            let mut creature = Creature::new(CreatureId(1), Position::new(0, 0), start);
            for _ in 0..meals {
                creature.eat(10, 30);
            }
            prop_assert!(creature.energy <= 30);
            prop_assert!(creature.energy >= start);
        }
    }
}
