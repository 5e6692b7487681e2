//! Tunable game balance parameters.

use serde::{Deserialize, Serialize};

use crate::state::PlayerClass;

/// Game configuration loaded from `config.toml`.
///
/// Every field has a default matching the shipped balance, so a partial
/// config file works.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Area the player starts a new game in.
    pub starting_area: String,

    /// `xp_to_level(n) = xp_curve_factor * n^2`.
    pub xp_curve_factor: u32,

    /// Critical-hit probability every new player starts with.
    pub base_crit_chance: f64,

    pub classes: ClassTable,
}

impl GameConfig {
    pub const DEFAULT_STARTING_AREA: &'static str = "area_01";
    pub const DEFAULT_XP_CURVE_FACTOR: u32 = 128;
    /// 1 in 64.
    pub const DEFAULT_BASE_CRIT_CHANCE: f64 = 0.015625;

    /// Total experience required to hold `level`.
    pub fn xp_to_level(&self, level: u32) -> u32 {
        self.xp_curve_factor.saturating_mul(level.saturating_mul(level))
    }

    pub fn class_stats(&self, class: PlayerClass) -> ClassStats {
        match class {
            PlayerClass::Fighter => self.classes.fighter,
            PlayerClass::Rogue => self.classes.rogue,
            PlayerClass::Adventurer => self.classes.adventurer,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_area: Self::DEFAULT_STARTING_AREA.to_owned(),
            xp_curve_factor: Self::DEFAULT_XP_CURVE_FACTOR,
            base_crit_chance: Self::DEFAULT_BASE_CRIT_CHANCE,
            classes: ClassTable::default(),
        }
    }
}

/// Seed stats per selectable class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassTable {
    pub fighter: ClassStats,
    pub rogue: ClassStats,
    pub adventurer: ClassStats,
}

impl Default for ClassTable {
    fn default() -> Self {
        // Fighter favours strength, Rogue favours agility.
        Self {
            fighter: ClassStats {
                hp: 15,
                strength: 5,
                agility: 4,
            },
            rogue: ClassStats {
                hp: 15,
                strength: 4,
                agility: 5,
            },
            adventurer: ClassStats {
                hp: 15,
                strength: 4,
                agility: 4,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassStats {
    pub hp: u32,
    pub strength: u32,
    pub agility: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_class_seeds() {
        let config = GameConfig::default();
        let fighter = config.class_stats(PlayerClass::Fighter);
        assert_eq!((fighter.hp, fighter.strength, fighter.agility), (15, 5, 4));

        let rogue = config.class_stats(PlayerClass::Rogue);
        assert_eq!((rogue.hp, rogue.strength, rogue.agility), (15, 4, 5));

        assert_eq!(config.base_crit_chance, 1.0 / 64.0);
    }

    #[test]
    fn xp_curve_is_quadratic() {
        let config = GameConfig::default();
        assert_eq!(config.xp_to_level(1), 128);
        assert_eq!(config.xp_to_level(2), 512);
        assert_eq!(config.xp_to_level(3), 1152);
    }
}
