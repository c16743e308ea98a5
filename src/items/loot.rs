//! Loot generation
//!
//! Monster drop tables: every entry rolls independently, and default entries
//! only drop when nothing else did.

use serde::{Deserialize, Serialize};

use super::item::ItemId;
use crate::game::RandomRange;

/// One row of a monster's drop table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootEntry {
    pub item_id: ItemId,
    /// Chance to drop, 0-100
    pub drop_percentage: i32,
    /// Dropped when every percentage roll failed
    #[serde(default)]
    pub is_default: bool,
}

impl LootEntry {
    pub fn new(item_id: ItemId, drop_percentage: i32, is_default: bool) -> Self {
        Self {
            item_id,
            drop_percentage,
            is_default,
        }
    }
}

/// Roll a drop table, returning the dropped item ids in table order.
///
/// Each entry draws 1-100 and drops on `roll <= drop_percentage`. If that
/// yields nothing, all default entries drop instead.
pub fn roll_loot(table: &[LootEntry], rng: &mut impl RandomRange) -> Vec<ItemId> {
    let mut dropped: Vec<ItemId> = table
        .iter()
        .filter(|entry| {
            let roll = rng.draw(1, 100);
            log::debug!("Loot roll for item {}: {} vs {}%", entry.item_id, roll, entry.drop_percentage);
            roll <= entry.drop_percentage
        })
        .map(|entry| entry.item_id)
        .collect();

    if dropped.is_empty() {
        dropped = table
            .iter()
            .filter(|entry| entry.is_default)
            .map(|entry| entry.item_id)
            .collect();
    }

    dropped
}
