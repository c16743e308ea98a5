//! Player save/load
//!
//! A flat snapshot of the player's fields, stored as JSON. World data is
//! never saved; ids in the snapshot are checked against the world on load.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::{Health, Player};
use crate::items::{Inventory, InventoryLine, ItemId};
use crate::progression::{PlayerQuest, QuestLog};
use crate::world::{LocationId, World};

/// Save error types
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid save data: {0}")]
    InvalidData(String),
}

/// Everything needed to restore a player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub current_hit_points: i32,
    pub maximum_hit_points: i32,
    pub gold: u32,
    pub experience: u32,
    pub current_location: LocationId,
    pub inventory: Vec<InventoryLine>,
    pub quests: Vec<PlayerQuest>,
    #[serde(default)]
    pub equipped_weapon: Option<ItemId>,
}

impl PlayerSnapshot {
    pub fn from_player(player: &Player) -> Self {
        Self {
            current_hit_points: player.health.current,
            maximum_hit_points: player.health.max,
            gold: player.gold,
            experience: player.experience,
            current_location: player.location,
            inventory: player.inventory.lines().to_vec(),
            quests: player.quests.entries().to_vec(),
            equipped_weapon: player.equipped_weapon,
        }
    }

    /// Rebuild the player, rejecting ids the world does not know
    pub fn into_player(self, world: &World) -> Result<Player, SaveError> {
        if world.location(self.current_location).is_none() {
            return Err(SaveError::InvalidData(format!("unknown location {}", self.current_location)));
        }
        if let Some(line) = self.inventory.iter().find(|l| world.item(l.item_id).is_none()) {
            return Err(SaveError::InvalidData(format!("unknown item {}", line.item_id)));
        }
        if let Some(pq) = self.quests.iter().find(|pq| world.quest(pq.quest_id).is_none()) {
            return Err(SaveError::InvalidData(format!("unknown quest {}", pq.quest_id)));
        }
        if self.maximum_hit_points <= 0 {
            return Err(SaveError::InvalidData("maximum hit points must be positive".to_string()));
        }

        // A weapon that is no longer a weapon just gets unequipped
        let inventory = Inventory::from_lines(self.inventory).map_err(SaveError::InvalidData)?;

        let equipped_weapon = self
            .equipped_weapon
            .filter(|id| world.item(*id).is_some_and(|i| i.is_weapon()));

        Ok(Player {
            health: Health {
                current: self.current_hit_points.min(self.maximum_hit_points),
                max: self.maximum_hit_points,
            },
            gold: self.gold,
            experience: self.experience,
            location: self.current_location,
            inventory,
            quests: QuestLog::from_entries(self.quests),
            equipped_weapon,
        })
    }

    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SaveError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Write the player to a save file
pub fn save_player(player: &Player, path: &Path) -> Result<(), SaveError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let json = PlayerSnapshot::from_player(player).to_json()?;
    fs::write(path, json)?;
    log::info!("Player saved to {}", path.display());
    Ok(())
}

/// Read a player from a save file
pub fn load_player(path: &Path, world: &World) -> Result<Player, SaveError> {
    let json = fs::read_to_string(path)?;
    let player = PlayerSnapshot::from_json(&json)?.into_player(world)?;
    log::info!("Player loaded from {}", path.display());
    Ok(player)
}

/// Load the saved player, or start a new one if there is no save.
///
/// An unreadable save is reported and replaced by a fresh character rather
/// than aborting the game.
pub fn load_or_create_player(path: &Path, world: &World) -> Player {
    if !path.exists() {
        log::info!("No save at {}, creating a new player", path.display());
        return Player::new_default(world);
    }
    match load_player(path, world) {
        Ok(player) => player,
        Err(e) => {
            log::warn!("Failed to load save {}: {}. Starting a new player.", path.display(), e);
            Player::new_default(world)
        }
    }
}
