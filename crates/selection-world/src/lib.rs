//! Board simulation engine.
//!
//! Creatures wander a square board, step onto food they can see in their
//! 3x3 neighbourhood, and starve when their energy runs out.

pub mod board;
pub mod creature;
pub mod render;
pub mod simulation;

pub use board::Board;
pub use creature::Creature;
pub use render::render_frame;
pub use simulation::Simulation;
