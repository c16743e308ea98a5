//! Locations and the directions between them

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::MonsterId;
use crate::items::ItemId;
use crate::progression::QuestId;

/// Unique location ID
pub type LocationId = u32;

/// Compass directions for moving between locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::North, Direction::East, Direction::South, Direction::West];

    pub fn name(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Direction::North),
            "e" | "east" => Ok(Direction::East),
            "s" | "south" => Ok(Direction::South),
            "w" | "west" => Ok(Direction::West),
            other => Err(format!("unknown direction '{}'", other)),
        }
    }
}

/// Neighboring locations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exits {
    #[serde(default)]
    pub north: Option<LocationId>,
    #[serde(default)]
    pub east: Option<LocationId>,
    #[serde(default)]
    pub south: Option<LocationId>,
    #[serde(default)]
    pub west: Option<LocationId>,
}

impl Exits {
    pub fn get(&self, direction: Direction) -> Option<LocationId> {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    pub fn set(&mut self, direction: Direction, target: LocationId) {
        let slot = match direction {
            Direction::North => &mut self.north,
            Direction::East => &mut self.east,
            Direction::South => &mut self.south,
            Direction::West => &mut self.west,
        };
        *slot = Some(target);
    }
}

/// A place on the map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub item_required_to_enter: Option<ItemId>,
    #[serde(default)]
    pub quest_available_here: Option<QuestId>,
    #[serde(default)]
    pub monster_living_here: Option<MonsterId>,
    #[serde(default)]
    pub exits: Exits,
}

impl Location {
    pub fn new(id: LocationId, name: &str, description: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            item_required_to_enter: None,
            quest_available_here: None,
            monster_living_here: None,
            exits: Exits::default(),
        }
    }

    pub fn requires(mut self, item_id: ItemId) -> Self {
        self.item_required_to_enter = Some(item_id);
        self
    }

    pub fn with_quest(mut self, quest_id: QuestId) -> Self {
        self.quest_available_here = Some(quest_id);
        self
    }

    pub fn with_monster(mut self, monster_id: MonsterId) -> Self {
        self.monster_living_here = Some(monster_id);
        self
    }

    pub fn with_exit(mut self, direction: Direction, target: LocationId) -> Self {
        self.exits.set(direction, target);
        self
    }

    pub fn neighbor(&self, direction: Direction) -> Option<LocationId> {
        self.exits.get(direction)
    }

    /// Directions with a neighbor, in compass order
    pub fn available_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| self.exits.get(*d).is_some())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_direction() {
        assert_eq!("n".parse::<Direction>(), Ok(Direction::North));
        assert_eq!(" West ".parse::<Direction>(), Ok(Direction::West));
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn test_exits() {
        let loc = Location::new(1, "Home", "")
            .with_exit(Direction::North, 2)
            .with_exit(Direction::West, 5);
        assert_eq!(loc.neighbor(Direction::North), Some(2));
        assert_eq!(loc.neighbor(Direction::South), None);
        assert_eq!(loc.available_directions(), vec![Direction::North, Direction::West]);
    }
}
