//! Grid Snake - a single-player snake game on a walled square arena
//!
//! This library provides:
//! - A pure, I/O-free tick engine (game module)
//! - Keyboard translation for terminal hosts (input module)
//! - TUI rendering of engine snapshots (render module)
//! - Session metrics and the interactive terminal mode (metrics, modes)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
