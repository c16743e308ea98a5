//! Item system

pub mod item;
pub mod inventory;
pub mod loot;

pub use item::{Item, ItemId, ItemKind};
pub use inventory::{Inventory, InventoryLine};
pub use loot::{roll_loot, LootEntry};
