//! World map and catalogs

pub mod location;
pub mod catalog;

pub use location::{Direction, Exits, Location, LocationId};
pub use catalog::World;
