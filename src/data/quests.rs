//! Built-in quests

use super::items::*;
use crate::progression::{Quest, QuestCompletionItem, QuestId};

pub const QUEST_ID_CLEAR_ALCHEMIST_GARDEN: QuestId = 1;
pub const QUEST_ID_CLEAR_FARMERS_FIELD: QuestId = 2;

/// Default quests (hardcoded fallback for quests.ron)
pub fn default_quests() -> Vec<Quest> {
    vec![
        Quest {
            id: QUEST_ID_CLEAR_ALCHEMIST_GARDEN,
            name: "Clear the alchemist's garden".to_string(),
            description: "Kill rats in the alchemist's garden and bring back 3 rat tails. \
                          You will receive a healing potion and 10 gold pieces."
                .to_string(),
            completion_items: vec![QuestCompletionItem {
                item_id: ITEM_ID_RAT_TAIL,
                quantity: 3,
            }],
            reward_experience: 20,
            reward_gold: 10,
            reward_item: ITEM_ID_HEALING_POTION,
        },
        Quest {
            id: QUEST_ID_CLEAR_FARMERS_FIELD,
            name: "Clear the farmer's field".to_string(),
            description: "Kill snakes in the farmer's field and bring back 3 snake fangs. \
                          You will receive an adventurer's pass and 20 gold pieces."
                .to_string(),
            completion_items: vec![QuestCompletionItem {
                item_id: ITEM_ID_SNAKE_FANG,
                quantity: 3,
            }],
            reward_experience: 20,
            reward_gold: 20,
            reward_item: ITEM_ID_ADVENTURER_PASS,
        },
    ]
}
