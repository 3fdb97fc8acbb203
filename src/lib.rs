//! # Connect Four
//!
//! A two-player Connect Four engine with a terminal front end built with
//! Ratatui. The engine is plain owned data: every game is an independent
//! [`game::GameState`] value, so any number of games can run side by side.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, state machine, engine contract
//! - [`ui`]: Terminal UI: game view and input handling
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
