//! Experience and leveling
//!
//! Levels are a flat 100 XP apart.

/// Experience needed per level
pub const XP_PER_LEVEL: u32 = 100;

/// Level for a given experience total (level 1 at 0 XP)
pub fn level_for_xp(experience: u32) -> u32 {
    experience / XP_PER_LEVEL + 1
}

/// Experience still missing before the next level
pub fn xp_to_next_level(experience: u32) -> u32 {
    XP_PER_LEVEL - experience % XP_PER_LEVEL
}
