//! Terminal snake: steer a growing snake around a fixed grid, eat food, and
//! grab the occasional time-limited bonus.
//!
//! The simulation ([`game::GameState`]) is pure and deterministic under a
//! seed; [`input`], [`renderer`], and [`terminal_runtime`] are the thin
//! terminal layer around it.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod logging;
pub mod placement;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
