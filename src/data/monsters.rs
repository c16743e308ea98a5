//! Built-in monster templates

use super::items::*;
use crate::entities::{Monster, MonsterId};
use crate::items::LootEntry;

pub const MONSTER_ID_RAT: MonsterId = 1;
pub const MONSTER_ID_SNAKE: MonsterId = 2;
pub const MONSTER_ID_GIANT_SPIDER: MonsterId = 3;

/// Default monsters (hardcoded fallback for monsters.ron)
pub fn default_monsters() -> Vec<Monster> {
    vec![
        Monster::new(MONSTER_ID_RAT, "Rat", 5, 3, 10, 3)
            .with_loot(LootEntry::new(ITEM_ID_RAT_TAIL, 75, false))
            .with_loot(LootEntry::new(ITEM_ID_PIECE_OF_FUR, 75, true)),
        Monster::new(MONSTER_ID_SNAKE, "Snake", 5, 3, 10, 3)
            .with_loot(LootEntry::new(ITEM_ID_SNAKE_FANG, 75, false))
            .with_loot(LootEntry::new(ITEM_ID_SNAKESKIN, 75, true)),
        Monster::new(MONSTER_ID_GIANT_SPIDER, "Giant spider", 20, 5, 40, 10)
            .with_loot(LootEntry::new(ITEM_ID_SPIDER_FANG, 75, true))
            .with_loot(LootEntry::new(ITEM_ID_SPIDER_SILK, 25, false)),
    ]
}
