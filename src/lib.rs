//! Escape Snake - a grid snake arcade game for the terminal
//!
//! The snake moves continuously on a fixed grid, eats tiered food to grow
//! and score, speeds up as the score crosses thresholds, and the run ends
//! when the head crosses the grid border.
//!
//! - Game logic lives in [`game`] and has no I/O dependencies
//! - Key handling lives in [`input`]
//! - TUI rendering lives in [`render`]
//! - [`app`] wires them together with an async event loop

pub mod app;
pub mod game;
pub mod input;
pub mod render;
