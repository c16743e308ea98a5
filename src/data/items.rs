//! Built-in item catalog

use crate::items::{Item, ItemId};

pub const ITEM_ID_RUSTY_SWORD: ItemId = 1;
pub const ITEM_ID_RAT_TAIL: ItemId = 2;
pub const ITEM_ID_PIECE_OF_FUR: ItemId = 3;
pub const ITEM_ID_SNAKE_FANG: ItemId = 4;
pub const ITEM_ID_SNAKESKIN: ItemId = 5;
pub const ITEM_ID_CLUB: ItemId = 6;
pub const ITEM_ID_HEALING_POTION: ItemId = 7;
pub const ITEM_ID_SPIDER_FANG: ItemId = 8;
pub const ITEM_ID_SPIDER_SILK: ItemId = 9;
pub const ITEM_ID_ADVENTURER_PASS: ItemId = 10;

/// Default items (hardcoded fallback for items.ron)
pub fn default_items() -> Vec<Item> {
    vec![
        Item::weapon(ITEM_ID_RUSTY_SWORD, "Rusty sword", "Rusty swords", 0, 5)
            .with_price(5)
            .with_description("Better than bare hands, barely."),
        Item::new(ITEM_ID_RAT_TAIL, "Rat tail", "Rat tails").with_price(1),
        Item::new(ITEM_ID_PIECE_OF_FUR, "Piece of fur", "Pieces of fur").with_price(1),
        Item::new(ITEM_ID_SNAKE_FANG, "Snake fang", "Snake fangs").with_price(1),
        Item::new(ITEM_ID_SNAKESKIN, "Snakeskin", "Snakeskins").with_price(2),
        Item::weapon(ITEM_ID_CLUB, "Club", "Clubs", 3, 10)
            .with_price(8)
            .with_description("A heavy knotted club."),
        Item::healing_potion(ITEM_ID_HEALING_POTION, "Healing potion", "Healing potions", 5)
            .with_price(3)
            .with_description("Tastes of mint and regret."),
        Item::new(ITEM_ID_SPIDER_FANG, "Spider fang", "Spider fangs").with_price(1),
        Item::new(ITEM_ID_SPIDER_SILK, "Spider silk", "Spider silks").with_price(1),
        Item::new(ITEM_ID_ADVENTURER_PASS, "Adventurer pass", "Adventurer passes")
            .with_description("Lets the bearer past the town guard."),
    ]
}
