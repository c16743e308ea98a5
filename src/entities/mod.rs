//! Player and monster state

pub mod health;
pub mod player;
pub mod monsters;

pub use health::Health;
pub use player::{Player, STARTING_GOLD, STARTING_HIT_POINTS};
pub use monsters::{Monster, MonsterId};
