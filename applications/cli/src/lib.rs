//! Cadence terminal player
//!
//! Wires a `PlaybackController` to a wall-clock primitive, a file-backed
//! session store and the backend client, and drives it from line commands.

pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod player;

pub use clock::ClockPrimitive;
pub use commands::Command;
pub use config::CliConfig;
pub use error::{CliError, Result};
pub use player::{Flow, Player};
