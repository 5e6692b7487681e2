//! Item definitions and the weapon/armor capability surface.

use serde::{Deserialize, Serialize};

use crate::rng::GameRng;

/// Item definition with common fields and type-specific data.
///
/// # Design: Base + Kind Pattern
///
/// - The base struct holds fields shared by every collectible thing
///   (identifier, display name, description, value).
/// - The `kind` enum holds variant-specific data (weapon stats, armor
///   defense), so battle code and inventory filters can match exhaustively.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub value: u32,
    #[serde(default)]
    pub kind: ItemKind,
}

impl ItemDefinition {
    /// One-line listing form used by inventory and search output.
    pub fn summary(&self) -> String {
        if self.description.is_empty() {
            self.name.clone()
        } else {
            format!("{} - {}", self.name, self.description)
        }
    }

    pub fn is_weapon(&self) -> bool {
        matches!(self.kind, ItemKind::Weapon(_))
    }

    pub fn is_armor(&self) -> bool {
        matches!(self.kind, ItemKind::Armor(_))
    }

    pub fn as_weapon(&self) -> Option<&WeaponData> {
        match &self.kind {
            ItemKind::Weapon(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_armor(&self) -> Option<&ArmorData> {
        match &self.kind {
            ItemKind::Armor(data) => Some(data),
            _ => None,
        }
    }
}

/// Item type with type-specific data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Plain collectible with no combat behavior (keys, valuables).
    #[default]
    Trinket,

    /// Equippable weapon.
    Weapon(WeaponData),

    /// Equippable armor.
    Armor(ArmorData),
}

/// Weapon-specific data.
///
/// The damage range and hit chance are content, not code: every weapon file
/// carries its own numbers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeaponData {
    #[serde(default)]
    pub damage_min: u32,
    #[serde(default)]
    pub damage_max: u32,
    #[serde(default = "WeaponData::default_hit_chance")]
    pub hit_chance: f64,
}

impl WeaponData {
    fn default_hit_chance() -> f64 {
        1.0
    }

    /// Roll an attack with this weapon.
    ///
    /// The roll misses with probability `1 - hit_chance`. On a hit the
    /// damage is uniform in `[damage_min, damage_max]`; a critical hit
    /// (probability `crit_chance`, a stat of the wielder) adds the
    /// wielder's strength on top.
    pub fn roll_damage(&self, strength: u32, crit_chance: f64, rng: &mut GameRng) -> DamageRoll {
        if !rng.chance(self.hit_chance) {
            return DamageRoll::MISS;
        }

        let mut amount = rng.range(self.damage_min, self.damage_max);
        let critical = rng.chance(crit_chance);
        if critical {
            amount += strength;
        }

        DamageRoll {
            amount,
            critical,
            missed: false,
        }
    }
}

/// Armor-specific data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorData {
    #[serde(default)]
    pub defense: u32,
}

impl ArmorData {
    /// Reduce incoming raw damage, flooring at zero.
    pub fn mitigate(&self, raw: u32) -> u32 {
        raw.saturating_sub(self.defense)
    }
}

/// Outcome of a single weapon damage roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageRoll {
    pub amount: u32,
    pub critical: bool,
    pub missed: bool,
}

impl DamageRoll {
    pub const MISS: Self = Self {
        amount: 0,
        critical: false,
        missed: true,
    };
}
