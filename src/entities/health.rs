//! Hit points shared by the player and monsters

use serde::{Deserialize, Serialize};

/// Current and maximum hit points.
///
/// `current` can dip below zero right after a hit; anything at or below
/// zero counts as dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Subtract damage without flooring at zero
    pub fn take_damage(&mut self, amount: i32) {
        self.current -= amount;
    }

    /// Heal up to max, returning the amount actually restored
    pub fn heal(&mut self, amount: i32) -> i32 {
        let actual = amount.min(self.max - self.current).max(0);
        self.current += actual;
        actual
    }

    pub fn restore(&mut self) {
        self.current = self.max;
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}
