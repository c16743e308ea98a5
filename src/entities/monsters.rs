//! Monsters
//!
//! The world catalog holds one template per monster kind. Every encounter
//! fights its own copy, so damage never leaks back into the catalog.

use serde::{Deserialize, Serialize};

use super::health::Health;
use crate::items::LootEntry;

/// Unique monster template ID
pub type MonsterId = u32;

/// A monster, either a catalog template or a live encounter copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub id: MonsterId,
    pub name: String,
    /// Upper bound of the damage roll; the lower bound is always 0
    pub max_damage: i32,
    pub reward_experience: u32,
    pub reward_gold: u32,
    pub health: Health,
    #[serde(default)]
    pub loot_table: Vec<LootEntry>,
}

impl Monster {
    pub fn new(
        id: MonsterId,
        name: &str,
        max_damage: i32,
        reward_experience: u32,
        reward_gold: u32,
        hit_points: i32,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            max_damage,
            reward_experience,
            reward_gold,
            health: Health::new(hit_points),
            loot_table: Vec::new(),
        }
    }

    pub fn with_loot(mut self, entry: LootEntry) -> Self {
        self.loot_table.push(entry);
        self
    }

    /// A fresh encounter copy with full hit points and its own loot table
    pub fn spawn(&self) -> Self {
        let mut monster = self.clone();
        monster.health.restore();
        monster
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_dead()
    }
}
