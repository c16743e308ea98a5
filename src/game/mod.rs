//! Game module - session state, events and the random source

mod state;
mod events;
mod rng;

pub use state::Game;
pub use events::GameEvent;
pub use rng::{RandomRange, ScriptedRange};
