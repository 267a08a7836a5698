//! Core game logic, free of any I/O or rendering dependencies.
//!
//! Everything here operates on plain values so the game can be driven and
//! inspected headlessly in tests.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use state::{Food, FoodTier, GameState, GameStatus, Position, Snake, Snapshot};
