//! Inventory system
//!
//! Quantity bookkeeping for the items a player holds. One line per distinct
//! item; lines are never removed, so a line dropping to zero keeps the item
//! "known" to the player (which is what entry checks look at).

use serde::{Deserialize, Serialize};

use super::item::{Item, ItemId};
use crate::progression::Quest;
use crate::world::World;

/// One stack of a single item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLine {
    pub item_id: ItemId,
    /// Signed so that over-consumption shows up instead of wrapping
    pub quantity: i32,
}

impl InventoryLine {
    pub fn new(item_id: ItemId, quantity: i32) -> Self {
        Self { item_id, quantity }
    }
}

/// The player's item collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    lines: Vec<InventoryLine>,
}

impl Inventory {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Rebuild from saved lines, merging any duplicate item ids.
    ///
    /// Rejects negative quantities and merged totals that overflow.
    pub fn from_lines(lines: impl IntoIterator<Item = InventoryLine>) -> Result<Self, String> {
        let mut inventory = Self::new();
        for line in lines {
            if line.quantity < 0 {
                return Err(format!("item {} has negative quantity {}", line.item_id, line.quantity));
            }
            match inventory.line_mut(line.item_id) {
                Some(existing) => {
                    existing.quantity = existing
                        .quantity
                        .checked_add(line.quantity)
                        .ok_or_else(|| format!("item {} quantity overflows", line.item_id))?;
                }
                None => inventory.lines.push(line),
            }
        }
        Ok(inventory)
    }

    /// All lines in acquisition order, including empty ones
    pub fn lines(&self) -> &[InventoryLine] {
        &self.lines
    }

    /// Lines worth showing (quantity above zero)
    pub fn visible_lines(&self) -> impl Iterator<Item = &InventoryLine> {
        self.lines.iter().filter(|l| l.quantity > 0)
    }

    pub fn line(&self, item_id: ItemId) -> Option<&InventoryLine> {
        self.lines.iter().find(|l| l.item_id == item_id)
    }

    fn line_mut(&mut self, item_id: ItemId) -> Option<&mut InventoryLine> {
        self.lines.iter_mut().find(|l| l.item_id == item_id)
    }

    /// Whether a line exists for the item, regardless of quantity
    pub fn contains(&self, item_id: ItemId) -> bool {
        self.line(item_id).is_some()
    }

    /// Current count of an item (0 if never held)
    pub fn quantity(&self, item_id: ItemId) -> i32 {
        self.line(item_id).map(|l| l.quantity).unwrap_or(0)
    }

    /// Add one of an item
    pub fn add_item(&mut self, item_id: ItemId) {
        match self.line_mut(item_id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(InventoryLine::new(item_id, 1)),
        }
    }

    /// Take one of an item from its line. Returns false if no line exists.
    pub fn remove_one(&mut self, item_id: ItemId) -> bool {
        match self.line_mut(item_id) {
            Some(line) => {
                line.quantity -= 1;
                true
            }
            None => false,
        }
    }

    /// Check every completion requirement of a quest is covered
    pub fn has_quest_items(&self, quest: &Quest) -> bool {
        quest
            .completion_items
            .iter()
            .all(|req| self.line(req.item_id).is_some_and(|l| l.quantity >= req.quantity))
    }

    /// Subtract a quest's required quantities.
    ///
    /// No clamping: callers check [`has_quest_items`](Self::has_quest_items) first.
    pub fn consume_quest_items(&mut self, quest: &Quest) {
        for req in &quest.completion_items {
            if let Some(line) = self.line_mut(req.item_id) {
                line.quantity -= req.quantity;
            }
        }
    }

    /// Held weapons, in inventory order
    pub fn weapons<'w>(&self, world: &'w World) -> Vec<&'w Item> {
        self.held_items(world).filter(|i| i.is_weapon()).collect()
    }

    /// Held healing potions, in inventory order
    pub fn potions<'w>(&self, world: &'w World) -> Vec<&'w Item> {
        self.held_items(world).filter(|i| i.is_potion()).collect()
    }

    fn held_items<'a, 'w: 'a>(&'a self, world: &'w World) -> impl Iterator<Item = &'w Item> + 'a {
        self.visible_lines().filter_map(move |l| world.item(l.item_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::{Quest, QuestCompletionItem};

    fn quest(reqs: &[(ItemId, i32)]) -> Quest {
        Quest {
            id: 1,
            name: "Test".to_string(),
            description: String::new(),
            completion_items: reqs
                .iter()
                .map(|&(item_id, quantity)| QuestCompletionItem { item_id, quantity })
                .collect(),
            reward_experience: 0,
            reward_gold: 0,
            reward_item: 1,
        }
    }

    #[test]
    fn test_add_same_item_twice() {
        let mut inv = Inventory::new();
        inv.add_item(3);
        inv.add_item(3);
        assert_eq!(inv.lines(), &[InventoryLine::new(3, 2)]);
    }

    #[test]
    fn test_add_distinct_items() {
        let mut inv = Inventory::new();
        inv.add_item(3);
        inv.add_item(4);
        assert_eq!(inv.lines(), &[InventoryLine::new(3, 1), InventoryLine::new(4, 1)]);
    }

    #[test]
    fn test_empty_line_still_counts_as_held() {
        let mut inv = Inventory::new();
        inv.add_item(10);
        assert!(inv.remove_one(10));
        assert!(inv.contains(10));
        assert_eq!(inv.quantity(10), 0);
        assert_eq!(inv.visible_lines().count(), 0);
        assert!(!inv.remove_one(11));
    }

    #[test]
    fn test_quest_items_one_short() {
        let q = quest(&[(1, 3), (2, 1)]);
        let mut inv = Inventory::new();
        inv.add_item(1);
        inv.add_item(1);
        inv.add_item(2);
        assert!(!inv.has_quest_items(&q));
        inv.add_item(1);
        assert!(inv.has_quest_items(&q));
    }

    #[test]
    fn test_empty_requirements_satisfied() {
        assert!(Inventory::new().has_quest_items(&quest(&[])));
    }

    #[test]
    fn test_consume_then_check() {
        let q = quest(&[(1, 2)]);
        let mut inv = Inventory::new();
        inv.add_item(1);
        inv.add_item(1);
        assert!(inv.has_quest_items(&q));
        inv.consume_quest_items(&q);
        assert_eq!(inv.quantity(1), 0);
        assert!(!inv.has_quest_items(&q));
    }

    #[test]
    fn test_consume_does_not_clamp() {
        let q = quest(&[(1, 3)]);
        let mut inv = Inventory::new();
        inv.add_item(1);
        inv.consume_quest_items(&q);
        assert_eq!(inv.quantity(1), -2);
    }

    #[test]
    fn test_from_lines_merges_duplicates() {
        let inv = Inventory::from_lines([
            InventoryLine::new(1, 2),
            InventoryLine::new(2, 1),
            InventoryLine::new(1, 3),
        ])
        .unwrap();
        assert_eq!(inv.lines().len(), 2);
        assert_eq!(inv.quantity(1), 5);
    }

    #[test]
    fn test_from_lines_rejects_bad_quantities() {
        assert!(Inventory::from_lines([InventoryLine::new(1, -1)]).is_err());
        assert!(Inventory::from_lines([InventoryLine::new(1, i32::MAX), InventoryLine::new(1, 1)]).is_err());
        assert!(Inventory::from_lines([InventoryLine::new(1, i32::MAX), InventoryLine::new(2, 1)]).is_ok());
    }
}
