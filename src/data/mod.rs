//! Data loading and built-in game content
//!
//! The world can be described in RON files under the data directory; any
//! catalog without a file comes from the hardcoded defaults here.

pub mod loader;
pub mod items;
pub mod monsters;
pub mod quests;
pub mod locations;

pub use loader::{default_world, export_default_data, load_world, try_load_world};
