//! Item definitions
//!
//! Catalog entries for everything the player can carry. Items are immutable
//! once the world is loaded and are referred to by [`ItemId`].

use serde::{Deserialize, Serialize};

/// Unique catalog ID
pub type ItemId = u32;

/// Kind-specific item data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Quest items, trophies, passes
    Generic,
    Weapon { min_damage: i32, max_damage: i32 },
    HealingPotion { amount_to_heal: i32 },
}

/// A catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub name_plural: String,
    /// Price in gold
    pub price: u32,
    #[serde(default)]
    pub description: String,
    pub kind: ItemKind,
}

impl Item {
    /// Create a generic item
    pub fn new(id: ItemId, name: &str, name_plural: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            name_plural: name_plural.to_string(),
            price: 0,
            description: String::new(),
            kind: ItemKind::Generic,
        }
    }

    pub fn weapon(id: ItemId, name: &str, name_plural: &str, min_damage: i32, max_damage: i32) -> Self {
        Self {
            kind: ItemKind::Weapon { min_damage, max_damage },
            ..Self::new(id, name, name_plural)
        }
    }

    pub fn healing_potion(id: ItemId, name: &str, name_plural: &str, amount_to_heal: i32) -> Self {
        Self {
            kind: ItemKind::HealingPotion { amount_to_heal },
            ..Self::new(id, name, name_plural)
        }
    }

    pub fn with_price(mut self, price: u32) -> Self {
        self.price = price;
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn is_weapon(&self) -> bool {
        matches!(self.kind, ItemKind::Weapon { .. })
    }

    pub fn is_potion(&self) -> bool {
        matches!(self.kind, ItemKind::HealingPotion { .. })
    }

    /// Damage range for weapons
    pub fn damage_range(&self) -> Option<(i32, i32)> {
        match self.kind {
            ItemKind::Weapon { min_damage, max_damage } => Some((min_damage, max_damage)),
            _ => None,
        }
    }

    /// Heal amount for potions
    pub fn heal_amount(&self) -> Option<i32> {
        match self.kind {
            ItemKind::HealingPotion { amount_to_heal } => Some(amount_to_heal),
            _ => None,
        }
    }

    /// Name to use alongside a count ("1 rat tail", "3 rat tails")
    pub fn name_for_quantity(&self, quantity: i32) -> &str {
        if quantity == 1 {
            &self.name
        } else {
            &self.name_plural
        }
    }

    /// Check kind-specific invariants
    pub fn validate(&self) -> Result<(), String> {
        if let ItemKind::Weapon { min_damage, max_damage } = self.kind {
            if min_damage > max_damage {
                return Err(format!(
                    "weapon '{}' has min damage {} above max damage {}",
                    self.name, min_damage, max_damage
                ));
            }
            if min_damage < 0 {
                return Err(format!("weapon '{}' has negative damage", self.name));
            }
        }
        if let ItemKind::HealingPotion { amount_to_heal } = self.kind {
            if amount_to_heal < 0 {
                return Err(format!("potion '{}' heals a negative amount", self.name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_accessors() {
        let sword = Item::weapon(1, "Rusty sword", "Rusty swords", 0, 5);
        assert!(sword.is_weapon());
        assert!(!sword.is_potion());
        assert_eq!(sword.damage_range(), Some((0, 5)));
        assert_eq!(sword.heal_amount(), None);

        let potion = Item::healing_potion(7, "Healing potion", "Healing potions", 5);
        assert!(potion.is_potion());
        assert_eq!(potion.heal_amount(), Some(5));
        assert_eq!(potion.damage_range(), None);
    }

    #[test]
    fn test_name_for_quantity() {
        let tail = Item::new(2, "Rat tail", "Rat tails");
        assert_eq!(tail.name_for_quantity(1), "Rat tail");
        assert_eq!(tail.name_for_quantity(3), "Rat tails");
        assert_eq!(tail.name_for_quantity(0), "Rat tails");
    }

    #[test]
    fn test_validate_weapon_range() {
        assert!(Item::weapon(1, "Club", "Clubs", 3, 10).validate().is_ok());
        assert!(Item::weapon(1, "Club", "Clubs", 4, 4).validate().is_ok());
        assert!(Item::weapon(1, "Club", "Clubs", 10, 3).validate().is_err());
    }
}
