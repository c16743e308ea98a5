//! Progression systems

pub mod xp;
pub mod quest;

pub use xp::{level_for_xp, xp_to_next_level, XP_PER_LEVEL};
pub use quest::{resolve_quest, PlayerQuest, Quest, QuestCompletionItem, QuestId, QuestLog};
