//! Built-in map

use super::items::ITEM_ID_ADVENTURER_PASS;
use super::monsters::*;
use super::quests::*;
use crate::world::{Direction::*, Location, LocationId};

pub const LOCATION_ID_HOME: LocationId = 1;
pub const LOCATION_ID_TOWN_SQUARE: LocationId = 2;
pub const LOCATION_ID_GUARD_POST: LocationId = 3;
pub const LOCATION_ID_ALCHEMIST_HUT: LocationId = 4;
pub const LOCATION_ID_ALCHEMISTS_GARDEN: LocationId = 5;
pub const LOCATION_ID_FARMHOUSE: LocationId = 6;
pub const LOCATION_ID_FARM_FIELD: LocationId = 7;
pub const LOCATION_ID_BRIDGE: LocationId = 8;
pub const LOCATION_ID_SPIDER_FIELD: LocationId = 9;

/// Default locations (hardcoded fallback for locations.ron)
pub fn default_locations() -> Vec<Location> {
    vec![
        Location::new(LOCATION_ID_HOME, "Home", "Your house. You really need to clean up the place.")
            .with_exit(North, LOCATION_ID_TOWN_SQUARE),
        Location::new(LOCATION_ID_TOWN_SQUARE, "Town square", "You see a fountain.")
            .with_exit(North, LOCATION_ID_ALCHEMIST_HUT)
            .with_exit(East, LOCATION_ID_GUARD_POST)
            .with_exit(South, LOCATION_ID_HOME)
            .with_exit(West, LOCATION_ID_FARMHOUSE),
        Location::new(
            LOCATION_ID_ALCHEMIST_HUT,
            "Alchemist's hut",
            "There are many strange plants on the shelves.",
        )
        .with_quest(QUEST_ID_CLEAR_ALCHEMIST_GARDEN)
        .with_exit(North, LOCATION_ID_ALCHEMISTS_GARDEN)
        .with_exit(South, LOCATION_ID_TOWN_SQUARE),
        Location::new(
            LOCATION_ID_ALCHEMISTS_GARDEN,
            "Alchemist's garden",
            "Many plants are growing here.",
        )
        .with_monster(MONSTER_ID_RAT)
        .with_exit(South, LOCATION_ID_ALCHEMIST_HUT),
        Location::new(LOCATION_ID_FARMHOUSE, "Farmhouse", "There is a small farmhouse, with a farmer in front.")
            .with_quest(QUEST_ID_CLEAR_FARMERS_FIELD)
            .with_exit(East, LOCATION_ID_TOWN_SQUARE)
            .with_exit(West, LOCATION_ID_FARM_FIELD),
        Location::new(LOCATION_ID_FARM_FIELD, "Farmer's field", "You see rows of vegetables growing here.")
            .with_monster(MONSTER_ID_SNAKE)
            .with_exit(East, LOCATION_ID_FARMHOUSE),
        Location::new(
            LOCATION_ID_GUARD_POST,
            "Guard post",
            "There is a large, tough-looking guard here.",
        )
        .requires(ITEM_ID_ADVENTURER_PASS)
        .with_exit(East, LOCATION_ID_BRIDGE)
        .with_exit(West, LOCATION_ID_TOWN_SQUARE),
        Location::new(LOCATION_ID_BRIDGE, "Bridge", "A stone bridge crosses a wide river.")
            .with_exit(East, LOCATION_ID_SPIDER_FIELD)
            .with_exit(West, LOCATION_ID_GUARD_POST),
        Location::new(
            LOCATION_ID_SPIDER_FIELD,
            "Forest",
            "You see spider webs covering the trees in this forest.",
        )
        .with_monster(MONSTER_ID_GIANT_SPIDER)
        .with_exit(West, LOCATION_ID_BRIDGE),
    ]
}
