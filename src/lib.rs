//! # Gravity Four
//!
//! Connect Four on any board from 4x4 up to 13x14. Pieces drop to the lowest
//! empty slot of a column; four in a row in any direction wins.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player marks, win detection, state machine
//! - [`config`] — TOML configuration loading and validation
//! - [`ui`] — Terminal UI: game view and key handling
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
