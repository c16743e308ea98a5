//! Damage rolls

use crate::entities::Monster;
use crate::error::GameError;
use crate::game::RandomRange;
use crate::items::Item;

/// Roll a weapon's damage over its inclusive range
pub fn roll_weapon_damage(weapon: &Item, rng: &mut impl RandomRange) -> Result<i32, GameError> {
    let (min, max) = weapon.damage_range().ok_or(GameError::NotAWeapon(weapon.id))?;
    Ok(rng.draw(min, max))
}

/// Roll a monster's hit, anywhere from 0 to its max damage
pub fn roll_monster_damage(monster: &Monster, rng: &mut impl RandomRange) -> i32 {
    rng.draw(0, monster.max_damage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ScriptedRange;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_weapon_damage_in_range() {
        let club = Item::weapon(6, "Club", "Clubs", 3, 10);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let dmg = roll_weapon_damage(&club, &mut rng).unwrap();
            assert!((3..=10).contains(&dmg));
        }
    }

    #[test]
    fn test_non_weapon_rejected() {
        let tail = Item::new(2, "Rat tail", "Rat tails");
        let mut rng = ScriptedRange::new([]);
        assert_eq!(roll_weapon_damage(&tail, &mut rng), Err(GameError::NotAWeapon(2)));
    }

    #[test]
    fn test_monster_damage_from_zero() {
        let rat = Monster::new(1, "Rat", 5, 3, 10, 3);
        let mut rng = ScriptedRange::new([0, 5]);
        assert_eq!(roll_monster_damage(&rat, &mut rng), 0);
        assert_eq!(roll_monster_damage(&rat, &mut rng), 5);
    }
}
