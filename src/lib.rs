//! Little Adventure - a small turn-based text adventure
//!
//! Walk the map, fight what lives there, bring back what the townsfolk ask
//! for. The library is the rules engine; front ends drive it through
//! [`Game`] and print the [`GameEvent`]s it returns.

pub mod game;
pub mod world;
pub mod entities;
pub mod combat;
pub mod items;
pub mod progression;
pub mod save;
pub mod data;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use game::{Game, GameEvent, RandomRange};
pub use entities::{Monster, Player};
pub use world::{Direction, World};
pub use error::{DataError, GameError};
