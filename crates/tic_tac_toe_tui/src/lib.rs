//! Terminal UI for the tic-tac-toe engine.
//!
//! The UI holds a [`tic_tac_toe::Session`], turns key presses into
//! intents and renders the snapshot after each one. It contains no win or
//! draw logic of its own.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
mod ui;

pub use app::{App, banner};
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use input::{Direction, UiAction, map_key, move_cursor};
pub use terminal::{RestoreGuard, Tui, restore_terminal, setup_terminal};
pub use ui::draw;
