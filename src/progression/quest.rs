//! Quests and quest progress
//!
//! Quest definitions live in the world catalog; each player keeps a
//! [`QuestLog`] recording which of them were accepted and completed.

use serde::{Deserialize, Serialize};

use crate::entities::Player;
use crate::error::GameError;
use crate::game::GameEvent;
use crate::items::ItemId;
use crate::world::World;

/// Unique quest ID
pub type QuestId = u32;

/// An item (and how many of it) needed to finish a quest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestCompletionItem {
    pub item_id: ItemId,
    pub quantity: i32,
}

/// A catalog quest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: QuestId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub completion_items: Vec<QuestCompletionItem>,
    pub reward_experience: u32,
    pub reward_gold: u32,
    pub reward_item: ItemId,
}

/// A player's progress on one quest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerQuest {
    pub quest_id: QuestId,
    pub is_completed: bool,
}

/// All quests a player has accepted, in acceptance order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestLog {
    quests: Vec<PlayerQuest>,
}

impl QuestLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(quests: Vec<PlayerQuest>) -> Self {
        Self { quests }
    }

    pub fn entries(&self) -> &[PlayerQuest] {
        &self.quests
    }

    pub fn has_accepted(&self, quest_id: QuestId) -> bool {
        self.quests.iter().any(|pq| pq.quest_id == quest_id)
    }

    pub fn has_completed(&self, quest_id: QuestId) -> bool {
        self.quests
            .iter()
            .find(|pq| pq.quest_id == quest_id)
            .is_some_and(|pq| pq.is_completed)
    }

    /// Record a new, unfinished quest. Does not guard against duplicates.
    pub fn accept(&mut self, quest_id: QuestId) {
        self.quests.push(PlayerQuest {
            quest_id,
            is_completed: false,
        });
    }

    /// Flag a quest as done; unknown quests are ignored
    pub fn mark_completed(&mut self, quest_id: QuestId) {
        if let Some(pq) = self.quests.iter_mut().find(|pq| pq.quest_id == quest_id) {
            pq.is_completed = true;
        }
    }
}

/// Run the quest offered at the player's location, if any.
///
/// Offers and accepts an unseen quest, or completes an accepted one once the
/// player carries every required item. Completed quests are left alone.
pub fn resolve_quest(player: &mut Player, quest: &Quest, world: &World) -> Result<Vec<GameEvent>, GameError> {
    let mut events = Vec::new();

    if !player.has_accepted_quest(quest) {
        let requirements = quest
            .completion_items
            .iter()
            .map(|req| {
                let item = world.item(req.item_id).ok_or(GameError::UnknownItem(req.item_id))?;
                Ok(format!("{} {}", req.quantity, item.name_for_quantity(req.quantity)))
            })
            .collect::<Result<Vec<_>, GameError>>()?;

        events.push(GameEvent::QuestOffered {
            name: quest.name.clone(),
            description: quest.description.clone(),
            requirements,
        });
        player.accept_quest(quest);
        log::info!("Quest '{}' accepted", quest.name);
        return Ok(events);
    }

    if player.has_completed_quest(quest) || !player.has_quest_items(quest) {
        return Ok(events);
    }

    let reward_item = world
        .item(quest.reward_item)
        .ok_or(GameError::UnknownItem(quest.reward_item))?;

    events.push(GameEvent::QuestCompleted {
        name: quest.name.clone(),
        reward_experience: quest.reward_experience,
        reward_gold: quest.reward_gold,
        reward_item: reward_item.name.clone(),
    });

    player.consume_quest_items(quest);
    player.add_experience(quest.reward_experience);
    player.gold = player.gold.saturating_add(quest.reward_gold);
    player.add_item(reward_item.id);
    player.mark_quest_completed(quest);
    log::info!("Quest '{}' completed", quest.name);

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_world;
    use crate::data::items::{ITEM_ID_RAT_TAIL, ITEM_ID_SNAKE_FANG};
    use crate::data::quests::{QUEST_ID_CLEAR_ALCHEMIST_GARDEN, QUEST_ID_CLEAR_FARMERS_FIELD};

    #[test]
    fn test_quest_log_lifecycle() {
        let mut log = QuestLog::new();
        assert!(!log.has_accepted(1));
        assert!(!log.has_completed(1));

        log.accept(1);
        assert!(log.has_accepted(1));
        assert!(!log.has_completed(1));

        log.mark_completed(2);
        assert!(!log.has_completed(1));

        log.mark_completed(1);
        assert!(log.has_completed(1));
        assert_eq!(log.entries().len(), 1);
    }

    #[test]
    fn test_offer_then_pending() {
        let world = default_world();
        let quest = world.quest(QUEST_ID_CLEAR_ALCHEMIST_GARDEN).unwrap();
        let mut player = Player::new_default(&world);

        let events = resolve_quest(&mut player, quest, &world).unwrap();
        assert_eq!(events.len(), 1);
        match &events[0] {
            GameEvent::QuestOffered { requirements, .. } => {
                assert_eq!(requirements, &vec!["3 Rat tails".to_string()]);
            }
            other => panic!("expected offer, got {:?}", other),
        }
        assert!(player.has_accepted_quest(quest));
        assert!(!player.has_completed_quest(quest));

        let events = resolve_quest(&mut player, quest, &world).unwrap();
        assert!(events.is_empty());
        assert!(player.has_accepted_quest(quest));
        assert!(!player.has_completed_quest(quest));
        assert_eq!(player.quests.entries().len(), 1);
    }

    #[test]
    fn test_offer_does_not_complete_even_with_items() {
        let world = default_world();
        let quest = world.quest(QUEST_ID_CLEAR_ALCHEMIST_GARDEN).unwrap();
        let mut player = Player::new_default(&world);
        for _ in 0..3 {
            player.add_item(ITEM_ID_RAT_TAIL);
        }

        let events = resolve_quest(&mut player, quest, &world).unwrap();
        assert!(matches!(events[0], GameEvent::QuestOffered { .. }));
        assert!(!player.has_completed_quest(quest));
        assert_eq!(player.inventory.quantity(ITEM_ID_RAT_TAIL), 3);
    }

    #[test]
    fn test_rewards_granted_once() {
        let world = default_world();
        let quest = world.quest(QUEST_ID_CLEAR_FARMERS_FIELD).unwrap();
        let mut player = Player::new_default(&world);
        let gold_before = player.gold;

        resolve_quest(&mut player, quest, &world).unwrap();
        for _ in 0..3 {
            player.add_item(ITEM_ID_SNAKE_FANG);
        }

        let events = resolve_quest(&mut player, quest, &world).unwrap();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], GameEvent::QuestCompleted { .. }));
        assert!(player.has_completed_quest(quest));
        assert_eq!(player.experience, quest.reward_experience);
        assert_eq!(player.gold, gold_before + quest.reward_gold);
        assert_eq!(player.inventory.quantity(ITEM_ID_SNAKE_FANG), 0);
        assert_eq!(player.inventory.quantity(quest.reward_item), 1);

        let events = resolve_quest(&mut player, quest, &world).unwrap();
        assert!(events.is_empty());
        assert_eq!(player.experience, quest.reward_experience);
        assert_eq!(player.gold, gold_before + quest.reward_gold);
        assert_eq!(player.inventory.quantity(quest.reward_item), 1);
    }
}
