//! Game events
//!
//! Everything the player should be told about, in the order it happened.
//! The `Display` impl is the text a terminal front end prints.

use std::fmt;

/// A single thing that happened during an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Movement refused for lack of an item
    EntryBlocked { required_item: String },
    LocationEntered { name: String, description: String },
    QuestOffered {
        name: String,
        description: String,
        /// "3 Rat tails" style lines
        requirements: Vec<String>,
    },
    QuestCompleted {
        name: String,
        reward_experience: u32,
        reward_gold: u32,
        reward_item: String,
    },
    MonsterAppeared { name: String },
    DamageDealt { monster: String, amount: i32 },
    MonsterDefeated { name: String },
    ExperienceGained { amount: u32 },
    GoldGained { amount: u32 },
    ItemAcquired { quantity: i32, name: String },
    PotionDrunk { name: String },
    DamageReceived { monster: String, amount: i32 },
    PlayerDefeated { monster: String },
    WeaponEquipped { name: String },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::EntryBlocked { required_item } => {
                write!(f, "You must have a {} to enter this location.", required_item)
            }
            GameEvent::LocationEntered { name, description } => write!(f, "{}\n{}", name, description),
            GameEvent::QuestOffered {
                name,
                description,
                requirements,
            } => {
                writeln!(f, "You receive the '{}' quest.", name)?;
                writeln!(f, "{}", description)?;
                write!(f, "To complete it, return with:")?;
                for line in requirements {
                    write!(f, "\n{}", line)?;
                }
                Ok(())
            }
            GameEvent::QuestCompleted {
                name,
                reward_experience,
                reward_gold,
                reward_item,
            } => {
                writeln!(f, "You complete the '{}' quest.", name)?;
                writeln!(f, "You receive:")?;
                writeln!(f, "{} experience points", reward_experience)?;
                writeln!(f, "{} gold", reward_gold)?;
                write!(f, "{}", reward_item)
            }
            GameEvent::MonsterAppeared { name } => write!(f, "You see a {}.", name),
            GameEvent::DamageDealt { monster, amount } => {
                write!(f, "You hit the {} for {} points.", monster, amount)
            }
            GameEvent::MonsterDefeated { name } => write!(f, "You defeated the {}.", name),
            GameEvent::ExperienceGained { amount } => {
                write!(f, "You receive {} experience points.", amount)
            }
            GameEvent::GoldGained { amount } => write!(f, "You receive {} gold.", amount),
            GameEvent::ItemAcquired { quantity, name } => write!(f, "You loot {} {}.", quantity, name),
            GameEvent::PotionDrunk { name } => write!(f, "You drink a {}.", name),
            GameEvent::DamageReceived { monster, amount } => {
                write!(f, "The {} did {} points of damage.", monster, amount)
            }
            GameEvent::PlayerDefeated { monster } => write!(f, "The {} killed you.", monster),
            GameEvent::WeaponEquipped { name } => write!(f, "You ready your {}.", name),
        }
    }
}
