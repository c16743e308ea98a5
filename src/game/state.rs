//! Game session
//!
//! Owns the player, the monster currently being fought and the random
//! source. Every action returns the events it produced, in order.

use crate::combat::{self, CombatOutcome, Exchange};
use crate::entities::{Monster, Player};
use crate::error::GameError;
use crate::items::{Item, ItemId};
use crate::progression::resolve_quest;
use crate::world::{Direction, Location, LocationId, World};

use super::events::GameEvent;
use super::rng::RandomRange;

/// A running game
pub struct Game<'w, R: RandomRange> {
    world: &'w World,
    player: Player,
    /// Live copy of the monster at the current location
    current_monster: Option<Monster>,
    rng: R,
}

impl<'w, R: RandomRange> Game<'w, R> {
    /// Wrap a player without running arrival effects yet (see [`Game::start`])
    pub fn new(world: &'w World, player: Player, rng: R) -> Self {
        Self {
            world,
            player,
            current_monster: None,
            rng,
        }
    }

    /// Enter the player's saved location, as on loading a game
    pub fn start(&mut self) -> Result<Vec<GameEvent>, GameError> {
        self.move_to(self.player.location)
    }

    pub fn world(&self) -> &'w World {
        self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn into_player(self) -> Player {
        self.player
    }

    pub fn current_monster(&self) -> Option<&Monster> {
        self.current_monster.as_ref()
    }

    pub fn current_location(&self) -> Result<&'w Location, GameError> {
        self.world
            .location(self.player.location)
            .ok_or(GameError::UnknownLocation(self.player.location))
    }

    /// Step to the neighboring location in a direction
    pub fn move_towards(&mut self, direction: Direction) -> Result<Vec<GameEvent>, GameError> {
        let target = self
            .current_location()?
            .neighbor(direction)
            .ok_or(GameError::NoExit(direction))?;
        self.move_to(target)
    }

    /// Move to a location and apply its arrival effects.
    ///
    /// A missing entry item blocks the move with no other side effects.
    /// Otherwise the player is healed, the local quest is resolved and the
    /// local monster (if any) is spawned fresh.
    pub fn move_to(&mut self, location_id: LocationId) -> Result<Vec<GameEvent>, GameError> {
        let world = self.world;
        let location = world
            .location(location_id)
            .ok_or(GameError::UnknownLocation(location_id))?;

        if let Some(item_id) = location
            .item_required_to_enter
            .filter(|_| !self.player.has_required_item(location))
        {
            let item = world.item(item_id).ok_or(GameError::UnknownItem(item_id))?;
            log::debug!("Entry to {} blocked, {} required", location.name, item.name);
            return Ok(vec![GameEvent::EntryBlocked {
                required_item: item.name.clone(),
            }]);
        }

        log::debug!("Player moves to {}", location.name);
        self.player.location = location.id;
        let mut events = vec![GameEvent::LocationEntered {
            name: location.name.clone(),
            description: location.description.clone(),
        }];

        self.player.health.restore();

        if let Some(quest_id) = location.quest_available_here {
            let quest = world.quest(quest_id).ok_or(GameError::UnknownQuest(quest_id))?;
            events.extend(resolve_quest(&mut self.player, quest, world)?);
        }

        self.current_monster = match location.monster_living_here {
            Some(monster_id) => {
                let template = world
                    .monster_template(monster_id)
                    .ok_or(GameError::UnknownMonster(monster_id))?;
                events.push(GameEvent::MonsterAppeared {
                    name: template.name.clone(),
                });
                Some(template.spawn())
            }
            None => None,
        };

        Ok(events)
    }

    /// Held weapons, for choosing what to fight with
    pub fn weapons(&self) -> Vec<&'w Item> {
        self.player.inventory.weapons(self.world)
    }

    /// Held healing potions
    pub fn potions(&self) -> Vec<&'w Item> {
        self.player.inventory.potions(self.world)
    }

    /// Choose the weapon used by [`Game::attack`]
    pub fn equip_weapon(&mut self, item_id: ItemId) -> Result<Vec<GameEvent>, GameError> {
        let item = self.world.item(item_id).ok_or(GameError::UnknownItem(item_id))?;
        if !item.is_weapon() {
            return Err(GameError::NotAWeapon(item_id));
        }
        if !self.player.holds(item_id) {
            return Err(GameError::ItemNotHeld(item_id));
        }
        self.player.equipped_weapon = Some(item_id);
        Ok(vec![GameEvent::WeaponEquipped { name: item.name.clone() }])
    }

    /// The equipped weapon, falling back to the first one carried
    fn active_weapon(&mut self) -> Result<&'w Item, GameError> {
        let world = self.world;
        if let Some(id) = self.player.equipped_weapon.filter(|id| self.player.holds(*id)) {
            if let Some(item) = world.item(id) {
                return Ok(item);
            }
        }
        let weapon = self
            .player
            .inventory
            .weapons(world)
            .into_iter()
            .next()
            .ok_or(GameError::NoWeapon)?;
        self.player.equipped_weapon = Some(weapon.id);
        Ok(weapon)
    }

    /// Attack the current monster with the equipped weapon
    pub fn attack(&mut self) -> Result<Vec<GameEvent>, GameError> {
        if self.current_monster.is_none() {
            return Err(GameError::NoMonster);
        }
        let weapon = self.active_weapon()?;
        let world = self.world;
        let monster = self.current_monster.as_mut().ok_or(GameError::NoMonster)?;
        let exchange = combat::attack_with_weapon(&mut self.player, monster, weapon, world, &mut self.rng)?;
        self.finish_exchange(exchange)
    }

    /// Drink a healing potion mid-fight
    pub fn drink_potion(&mut self, item_id: ItemId) -> Result<Vec<GameEvent>, GameError> {
        let potion = self.world.item(item_id).ok_or(GameError::UnknownItem(item_id))?;
        if !potion.is_potion() {
            return Err(GameError::NotAPotion(item_id));
        }
        if !self.player.holds(item_id) {
            return Err(GameError::ItemNotHeld(item_id));
        }
        let monster = self.current_monster.as_ref().ok_or(GameError::NoMonster)?;
        let exchange = combat::drink_potion(&mut self.player, monster, potion, &mut self.rng)?;
        self.finish_exchange(exchange)
    }

    /// Relocate after a decisive exchange
    fn finish_exchange(&mut self, exchange: Exchange) -> Result<Vec<GameEvent>, GameError> {
        let mut events = exchange.events;
        match exchange.outcome {
            CombatOutcome::Ongoing => {}
            CombatOutcome::MonsterDefeated => {
                events.extend(self.move_to(self.player.location)?);
            }
            CombatOutcome::PlayerDefeated => {
                events.extend(self.move_to(self.world.home_location())?);
            }
        }
        Ok(events)
    }
}
