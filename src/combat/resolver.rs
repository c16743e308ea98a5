//! Combat exchanges
//!
//! One call resolves one player action and the monster's answer to it.
//! Relocation after a win or a death is left to the caller, which owns the
//! arrival effects.

use super::damage::{roll_monster_damage, roll_weapon_damage};
use crate::entities::{Monster, Player};
use crate::error::GameError;
use crate::game::{GameEvent, RandomRange};
use crate::items::{roll_loot, Item};
use crate::world::World;

/// How an exchange ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    MonsterDefeated,
    PlayerDefeated,
    Ongoing,
}

/// Events and outcome of one exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub events: Vec<GameEvent>,
    pub outcome: CombatOutcome,
}

/// Hit the monster with a weapon; it strikes back if it survives
pub fn attack_with_weapon(
    player: &mut Player,
    monster: &mut Monster,
    weapon: &Item,
    world: &World,
    rng: &mut impl RandomRange,
) -> Result<Exchange, GameError> {
    let damage = roll_weapon_damage(weapon, rng)?;
    monster.health.take_damage(damage);
    log::debug!("{} takes {} damage ({} left)", monster.name, damage, monster.health.current);

    let mut events = vec![GameEvent::DamageDealt {
        monster: monster.name.clone(),
        amount: damage,
    }];

    if monster.is_dead() {
        award_victory(player, monster, world, rng, &mut events)?;
        return Ok(Exchange {
            events,
            outcome: CombatOutcome::MonsterDefeated,
        });
    }

    let outcome = monster_turn(player, monster, rng, &mut events);
    Ok(Exchange { events, outcome })
}

/// Drink a healing potion; the monster still gets its turn
pub fn drink_potion(
    player: &mut Player,
    monster: &Monster,
    potion: &Item,
    rng: &mut impl RandomRange,
) -> Result<Exchange, GameError> {
    let amount = potion.heal_amount().ok_or(GameError::NotAPotion(potion.id))?;
    player.health.heal(amount);
    player.inventory.remove_one(potion.id);

    let mut events = vec![GameEvent::PotionDrunk {
        name: potion.name.clone(),
    }];
    let outcome = monster_turn(player, monster, rng, &mut events);
    Ok(Exchange { events, outcome })
}

/// The monster's retaliation
pub fn monster_turn(
    player: &mut Player,
    monster: &Monster,
    rng: &mut impl RandomRange,
    events: &mut Vec<GameEvent>,
) -> CombatOutcome {
    let damage = roll_monster_damage(monster, rng);
    player.health.take_damage(damage);
    events.push(GameEvent::DamageReceived {
        monster: monster.name.clone(),
        amount: damage,
    });

    if player.health.is_dead() {
        log::info!("Player killed by {}", monster.name);
        events.push(GameEvent::PlayerDefeated {
            monster: monster.name.clone(),
        });
        CombatOutcome::PlayerDefeated
    } else {
        CombatOutcome::Ongoing
    }
}

/// Experience, gold and loot for a kill
fn award_victory(
    player: &mut Player,
    monster: &Monster,
    world: &World,
    rng: &mut impl RandomRange,
    events: &mut Vec<GameEvent>,
) -> Result<(), GameError> {
    log::info!("{} defeated", monster.name);
    events.push(GameEvent::MonsterDefeated {
        name: monster.name.clone(),
    });

    player.add_experience(monster.reward_experience);
    events.push(GameEvent::ExperienceGained {
        amount: monster.reward_experience,
    });

    player.gold = player.gold.saturating_add(monster.reward_gold);
    events.push(GameEvent::GoldGained {
        amount: monster.reward_gold,
    });

    for item_id in roll_loot(&monster.loot_table, rng) {
        let item = world.item(item_id).ok_or(GameError::UnknownItem(item_id))?;
        player.add_item(item_id);
        events.push(GameEvent::ItemAcquired {
            quantity: 1,
            name: item.name_for_quantity(1).to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_world;
    use crate::data::items::*;
    use crate::data::monsters::MONSTER_ID_RAT;
    use crate::entities::Health;
    use crate::game::ScriptedRange;

    fn setup() -> (World, Player) {
        let world = default_world();
        let player = Player::new(Health::new(10), 0, 0, world.home_location());
        (world, player)
    }

    #[test]
    fn test_exact_kill_triggers_victory() {
        let (world, mut player) = setup();
        let mut monster = Monster::new(99, "Dummy", 5, 7, 3, 10).with_loot(crate::items::LootEntry::new(
            ITEM_ID_RAT_TAIL,
            100,
            false,
        ));
        let club = world.item(ITEM_ID_CLUB).unwrap().clone();
        // weapon roll 10, loot roll 50
        let mut rng = ScriptedRange::new([10, 50]);

        let exchange = attack_with_weapon(&mut player, &mut monster, &club, &world, &mut rng).unwrap();
        assert_eq!(exchange.outcome, CombatOutcome::MonsterDefeated);
        assert_eq!(monster.health.current, 0);
        assert_eq!(rng.remaining(), 0);
        assert_eq!(
            exchange.events,
            vec![
                GameEvent::DamageDealt { monster: "Dummy".to_string(), amount: 10 },
                GameEvent::MonsterDefeated { name: "Dummy".to_string() },
                GameEvent::ExperienceGained { amount: 7 },
                GameEvent::GoldGained { amount: 3 },
                GameEvent::ItemAcquired { quantity: 1, name: "Rat tail".to_string() },
            ]
        );
        assert_eq!(player.experience, 7);
        assert_eq!(player.gold, 3);
        assert_eq!(player.inventory.quantity(ITEM_ID_RAT_TAIL), 1);
        assert_eq!(player.health.current, 10);
    }

    #[test]
    fn test_survivor_retaliates() {
        let (world, mut player) = setup();
        let mut monster = world.monster_template(MONSTER_ID_RAT).unwrap().spawn();
        let sword = world.item(ITEM_ID_RUSTY_SWORD).unwrap().clone();
        let mut rng = ScriptedRange::new([2, 4]);

        let exchange = attack_with_weapon(&mut player, &mut monster, &sword, &world, &mut rng).unwrap();
        assert_eq!(exchange.outcome, CombatOutcome::Ongoing);
        assert_eq!(monster.health.current, 1);
        assert_eq!(player.health.current, 6);
        assert_eq!(
            exchange.events[1],
            GameEvent::DamageReceived { monster: "Rat".to_string(), amount: 4 }
        );
    }

    #[test]
    fn test_player_killed_at_zero() {
        let (world, mut player) = setup();
        player.health.current = 5;
        let mut monster = world.monster_template(MONSTER_ID_RAT).unwrap().spawn();
        let sword = world.item(ITEM_ID_RUSTY_SWORD).unwrap().clone();
        let mut rng = ScriptedRange::new([0, 5]);

        let exchange = attack_with_weapon(&mut player, &mut monster, &sword, &world, &mut rng).unwrap();
        assert_eq!(exchange.outcome, CombatOutcome::PlayerDefeated);
        assert_eq!(player.health.current, 0);
        assert_eq!(
            exchange.events.last(),
            Some(&GameEvent::PlayerDefeated { monster: "Rat".to_string() })
        );
    }

    #[test]
    fn test_potion_heals_then_monster_acts() {
        let (world, mut player) = setup();
        player.health.current = 3;
        player.add_item(ITEM_ID_HEALING_POTION);
        player.add_item(ITEM_ID_HEALING_POTION);
        let monster = world.monster_template(MONSTER_ID_RAT).unwrap().spawn();
        let potion = world.item(ITEM_ID_HEALING_POTION).unwrap().clone();
        let mut rng = ScriptedRange::new([1]);

        let exchange = drink_potion(&mut player, &monster, &potion, &mut rng).unwrap();
        assert_eq!(exchange.outcome, CombatOutcome::Ongoing);
        // 3 + 5 = 8, then 1 damage
        assert_eq!(player.health.current, 7);
        assert_eq!(player.inventory.quantity(ITEM_ID_HEALING_POTION), 1);
        assert_eq!(exchange.events[0], GameEvent::PotionDrunk { name: "Healing potion".to_string() });
    }

    #[test]
    fn test_potion_heal_clamps_to_max() {
        let (world, mut player) = setup();
        player.health.current = 9;
        player.add_item(ITEM_ID_HEALING_POTION);
        let monster = world.monster_template(MONSTER_ID_RAT).unwrap().spawn();
        let potion = world.item(ITEM_ID_HEALING_POTION).unwrap().clone();
        let mut rng = ScriptedRange::new([0]);

        drink_potion(&mut player, &monster, &potion, &mut rng).unwrap();
        assert_eq!(player.health.current, 10);
    }

    #[test]
    fn test_default_loot_when_nothing_rolls() {
        let (world, mut player) = setup();
        let mut monster = world.monster_template(MONSTER_ID_RAT).unwrap().spawn();
        let club = world.item(ITEM_ID_CLUB).unwrap().clone();
        // kill, then both 75% rolls miss
        let mut rng = ScriptedRange::new([5, 76, 100]);

        attack_with_weapon(&mut player, &mut monster, &club, &world, &mut rng).unwrap();
        assert_eq!(player.inventory.quantity(ITEM_ID_RAT_TAIL), 0);
        assert_eq!(player.inventory.quantity(ITEM_ID_PIECE_OF_FUR), 1);
    }
}
