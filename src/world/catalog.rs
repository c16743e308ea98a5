//! Read-only world catalog
//!
//! Items, quests, monster templates and locations, indexed by id. Built once
//! (from data files or the built-in defaults) and only ever borrowed after.

use std::collections::HashMap;

use super::location::{Direction, Location, LocationId};
use crate::entities::{Monster, MonsterId};
use crate::error::DataError;
use crate::items::{Item, ItemId};
use crate::progression::{Quest, QuestId};

/// Static world data
#[derive(Debug, Clone)]
pub struct World {
    items: HashMap<ItemId, Item>,
    quests: HashMap<QuestId, Quest>,
    monsters: HashMap<MonsterId, Monster>,
    locations: HashMap<LocationId, Location>,
    home: LocationId,
    start: LocationId,
}

fn index<T, K: std::hash::Hash + Eq + Copy>(
    kind: &str,
    entries: Vec<T>,
    key: impl Fn(&T) -> K,
) -> Result<HashMap<K, T>, DataError>
where
    K: std::fmt::Display,
{
    let mut map = HashMap::with_capacity(entries.len());
    for entry in entries {
        let id = key(&entry);
        if map.insert(id, entry).is_some() {
            return Err(DataError::Invalid(format!("duplicate {} id {}", kind, id)));
        }
    }
    Ok(map)
}

impl World {
    /// Build and validate a world.
    ///
    /// Every id referenced by a quest, loot table or location must exist,
    /// and weapons must have a sane damage range.
    pub fn new(
        items: Vec<Item>,
        quests: Vec<Quest>,
        monsters: Vec<Monster>,
        locations: Vec<Location>,
        home: LocationId,
        start: LocationId,
    ) -> Result<Self, DataError> {
        let world = Self {
            items: index("item", items, |i| i.id)?,
            quests: index("quest", quests, |q| q.id)?,
            monsters: index("monster", monsters, |m| m.id)?,
            locations: index("location", locations, |l| l.id)?,
            home,
            start,
        };
        world.validate()?;
        log::debug!(
            "World built: {} items, {} quests, {} monsters, {} locations",
            world.items.len(),
            world.quests.len(),
            world.monsters.len(),
            world.locations.len()
        );
        Ok(world)
    }

    fn validate(&self) -> Result<(), DataError> {
        let missing = |what: &str, id: u32, owner: &str| {
            DataError::Invalid(format!("{} references unknown {} {}", owner, what, id))
        };

        for item in self.items.values() {
            item.validate().map_err(DataError::Invalid)?;
        }

        for quest in self.quests.values() {
            let owner = format!("quest '{}'", quest.name);
            if !self.items.contains_key(&quest.reward_item) {
                return Err(missing("item", quest.reward_item, &owner));
            }
            for req in &quest.completion_items {
                if !self.items.contains_key(&req.item_id) {
                    return Err(missing("item", req.item_id, &owner));
                }
            }
        }

        for monster in self.monsters.values() {
            let owner = format!("monster '{}'", monster.name);
            for entry in &monster.loot_table {
                if !self.items.contains_key(&entry.item_id) {
                    return Err(missing("item", entry.item_id, &owner));
                }
                if !(0..=100).contains(&entry.drop_percentage) {
                    return Err(DataError::Invalid(format!(
                        "{} has drop percentage {} outside 0-100",
                        owner, entry.drop_percentage
                    )));
                }
            }
            if monster.max_damage < 0 {
                return Err(DataError::Invalid(format!("{} has negative damage", owner)));
            }
        }

        for location in self.locations.values() {
            let owner = format!("location '{}'", location.name);
            if let Some(id) = location.item_required_to_enter {
                if !self.items.contains_key(&id) {
                    return Err(missing("item", id, &owner));
                }
            }
            if let Some(id) = location.quest_available_here {
                if !self.quests.contains_key(&id) {
                    return Err(missing("quest", id, &owner));
                }
            }
            if let Some(id) = location.monster_living_here {
                if !self.monsters.contains_key(&id) {
                    return Err(missing("monster", id, &owner));
                }
            }
            for direction in Direction::ALL {
                if let Some(id) = location.neighbor(direction) {
                    if !self.locations.contains_key(&id) {
                        return Err(missing("location", id, &owner));
                    }
                }
            }
        }

        for (what, id) in [("home", self.home), ("start", self.start)] {
            if !self.locations.contains_key(&id) {
                return Err(DataError::Invalid(format!("{} location {} does not exist", what, id)));
            }
        }

        // Defeated players are sent home, so nothing may bar the way in
        if let Some(home) = self.locations.get(&self.home) {
            if home.item_required_to_enter.is_some() {
                return Err(DataError::Invalid(format!(
                    "home location '{}' requires an item to enter",
                    home.name
                )));
            }
        }

        Ok(())
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn quest(&self, id: QuestId) -> Option<&Quest> {
        self.quests.get(&id)
    }

    pub fn monster_template(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.get(&id)
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(&id)
    }

    /// The location in a given direction from another
    pub fn neighbor(&self, from: LocationId, direction: Direction) -> Option<&Location> {
        self.location(from)
            .and_then(|l| l.neighbor(direction))
            .and_then(|id| self.location(id))
    }

    /// Where a defeated player wakes up
    pub fn home_location(&self) -> LocationId {
        self.home
    }

    /// Where new characters begin
    pub fn start_location(&self) -> LocationId {
        self.start
    }

    /// Find an item by name or plural name, ignoring case
    pub fn find_item_by_name(&self, name: &str) -> Option<&Item> {
        let name = name.trim();
        self.items
            .values()
            .find(|i| i.name.eq_ignore_ascii_case(name) || i.name_plural.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::LootEntry;

    fn small_world(locations: Vec<Location>) -> Result<World, DataError> {
        World::new(
            vec![Item::new(1, "Rat tail", "Rat tails")],
            vec![],
            vec![Monster::new(1, "Rat", 3, 5, 10, 3).with_loot(LootEntry::new(1, 75, true))],
            locations,
            1,
            1,
        )
    }

    #[test]
    fn test_lookup_and_neighbor() {
        let world = small_world(vec![
            Location::new(1, "Home", "").with_exit(Direction::North, 2),
            Location::new(2, "Square", "").with_monster(1).with_exit(Direction::South, 1),
        ])
        .unwrap();

        assert_eq!(world.neighbor(1, Direction::North).map(|l| l.id), Some(2));
        assert!(world.neighbor(1, Direction::East).is_none());
        assert_eq!(world.monster_template(1).unwrap().name, "Rat");
        assert_eq!(world.find_item_by_name("rat tails").unwrap().id, 1);
    }

    #[test]
    fn test_dangling_exit_rejected() {
        let err = small_world(vec![Location::new(1, "Home", "").with_exit(Direction::North, 9)]);
        assert!(matches!(err, Err(DataError::Invalid(_))));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = small_world(vec![Location::new(1, "Home", ""), Location::new(1, "Again", "")]);
        assert!(matches!(err, Err(DataError::Invalid(_))));
    }

    #[test]
    fn test_gated_home_rejected() {
        let err = small_world(vec![Location::new(1, "Home", "").requires(1)]);
        assert!(matches!(err, Err(DataError::Invalid(_))));

        let ok = small_world(vec![
            Location::new(1, "Home", "").with_exit(Direction::North, 2),
            Location::new(2, "Vault", "").requires(1).with_exit(Direction::South, 1),
        ]);
        assert!(ok.is_ok());
    }

    #[test]
    fn test_bad_weapon_rejected() {
        let err = World::new(
            vec![Item::weapon(1, "Club", "Clubs", 9, 2)],
            vec![],
            vec![],
            vec![Location::new(1, "Home", "")],
            1,
            1,
        );
        assert!(matches!(err, Err(DataError::Invalid(_))));
    }
}
