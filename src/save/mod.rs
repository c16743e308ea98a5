//! Save/load system
//!
//! Handles saving and loading the player.

pub mod save_game;

pub use save_game::{load_or_create_player, load_player, save_player, PlayerSnapshot, SaveError};
