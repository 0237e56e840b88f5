//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! A host drives it by submitting key codes and calling `tick` on its own schedule.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod fifo;
pub mod grid;
pub mod keys;
pub mod state;

// Re-export commonly used types
pub use action::{Axis, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, TickResult};
pub use error::GameError;
pub use fifo::{Fifo, InputQueue, SegmentQueue};
pub use grid::Grid;
pub use state::{CellStatus, CollisionType, GameStatus, Position};
