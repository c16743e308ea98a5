//! RON data loader
//!
//! Loads the world catalogs from RON files, falling back to the built-in
//! defaults for any file that is missing or broken.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::items::default_items;
use super::locations::{default_locations, LOCATION_ID_HOME};
use super::monsters::default_monsters;
use super::quests::default_quests;
use crate::error::DataError;
use crate::world::World;

const ITEMS_FILE: &str = "items.ron";
const QUESTS_FILE: &str = "quests.ron";
const MONSTERS_FILE: &str = "monsters.ron";
const LOCATIONS_FILE: &str = "locations.ron";

/// The built-in world
pub fn default_world() -> World {
    World::new(
        default_items(),
        default_quests(),
        default_monsters(),
        default_locations(),
        LOCATION_ID_HOME,
        LOCATION_ID_HOME,
    )
    .unwrap_or_else(|e| panic!("built-in world is inconsistent: {}", e))
}

/// Load one catalog, or the fallback if the file is absent or unreadable
fn load_or_default<T: DeserializeOwned>(path: &Path, fallback: fn() -> Vec<T>) -> Vec<T> {
    if !path.exists() {
        log::debug!("{} not found, using built-in data", path.display());
        return fallback();
    }
    match read_catalog(path) {
        Ok(entries) => {
            log::info!("Loaded {}", path.display());
            entries
        }
        Err(e) => {
            log::warn!("Failed to load {}: {}. Using built-in data.", path.display(), e);
            fallback()
        }
    }
}

fn read_catalog<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DataError> {
    let content = fs::read_to_string(path)?;
    Ok(ron::from_str(&content)?)
}

/// Build the world from a data directory.
///
/// Each catalog file is optional. If the combined catalogs do not agree
/// (dangling ids, bad weapons) the whole built-in world is used instead.
pub fn load_world(base_path: &Path) -> World {
    match try_load_world(base_path) {
        Ok(world) => world,
        Err(e) => {
            log::warn!("World data in {} is invalid: {}. Using built-in world.", base_path.display(), e);
            default_world()
        }
    }
}

/// Strict variant of [`load_world`] that reports validation errors
pub fn try_load_world(base_path: &Path) -> Result<World, DataError> {
    World::new(
        load_or_default(&base_path.join(ITEMS_FILE), default_items),
        load_or_default(&base_path.join(QUESTS_FILE), default_quests),
        load_or_default(&base_path.join(MONSTERS_FILE), default_monsters),
        load_or_default(&base_path.join(LOCATIONS_FILE), default_locations),
        LOCATION_ID_HOME,
        LOCATION_ID_HOME,
    )
}

fn write_catalog<T: Serialize>(path: &Path, entries: &[T]) -> Result<(), DataError> {
    let content = ron::ser::to_string_pretty(entries, ron::ser::PrettyConfig::default())?;
    fs::write(path, content)?;
    Ok(())
}

/// Export the built-in catalogs as RON files for editing
pub fn export_default_data(base_path: &Path) -> Result<(), DataError> {
    fs::create_dir_all(base_path)?;
    write_catalog(&base_path.join(ITEMS_FILE), &default_items())?;
    write_catalog(&base_path.join(QUESTS_FILE), &default_quests())?;
    write_catalog(&base_path.join(MONSTERS_FILE), &default_monsters())?;
    write_catalog(&base_path.join(LOCATIONS_FILE), &default_locations())?;
    log::info!("Exported default data to {}", base_path.display());
    Ok(())
}
