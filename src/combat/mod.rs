//! Combat system

pub mod damage;
pub mod resolver;

pub use damage::{roll_monster_damage, roll_weapon_damage};
pub use resolver::{attack_with_weapon, drink_potion, monster_turn, CombatOutcome, Exchange};
