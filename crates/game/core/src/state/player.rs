//! Player state: stats, inventory, equipment, progress.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::defs::{ItemDefinition, WeaponData};
use crate::state::Inventory;

/// Selectable character class.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "title_case", ascii_case_insensitive)]
pub enum PlayerClass {
    /// Favours strength.
    Fighter,
    /// Favours agility.
    Rogue,
    /// Fallback when no class was chosen.
    #[default]
    Adventurer,
}

/// An equip request that cannot be honored. Reported as a no-op with user
/// feedback, never fatal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EquipError {
    #[error("`{id}` is not in the inventory")]
    NotInInventory { id: String },

    #[error("`{id}` is not a {expected}")]
    WrongKind { id: String, expected: &'static str },
}

/// The one entity whose fields mutate across the whole session.
///
/// Equipped slots hold item ids that must reference an item currently in
/// the inventory; [`PlayerState::equip_weapon`] and
/// [`PlayerState::equip_armor`] are the only writers and enforce that.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerState {
    pub name: String,
    pub class: PlayerClass,
    pub level: u32,
    pub xp: u32,
    pub hp: u32,
    pub hp_max: u32,
    pub strength: u32,
    pub agility: u32,
    pub crit_chance: f64,
    pub inventory: Inventory,
    equipped_weapon: Option<String>,
    equipped_armor: Option<String>,
    pub current_area: String,
    pub visited: BTreeSet<String>,
}

impl PlayerState {
    /// Create a fresh player with class seed stats from the config.
    pub fn new(name: impl Into<String>, class: PlayerClass, config: &GameConfig) -> Self {
        let stats = config.class_stats(class);
        Self {
            name: name.into(),
            class,
            level: 1,
            xp: 0,
            hp: stats.hp,
            hp_max: stats.hp,
            strength: stats.strength,
            agility: stats.agility,
            crit_chance: config.base_crit_chance,
            inventory: Inventory::new(),
            equipped_weapon: None,
            equipped_armor: None,
            current_area: config.starting_area.clone(),
            visited: BTreeSet::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Apply incoming damage, clamping at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Grant experience and advance the level past any thresholds crossed.
    /// Returns the number of levels gained.
    pub fn grant_xp(&mut self, amount: u32, config: &GameConfig) -> u32 {
        self.xp = self.xp.saturating_add(amount);
        let mut gained = 0;
        while self.xp >= config.xp_to_level(self.level + 1) {
            self.level += 1;
            gained += 1;
        }
        if gained > 0 {
            tracing::info!(name = %self.name, level = self.level, "level up");
        }
        gained
    }

    pub fn equipped_weapon_id(&self) -> Option<&str> {
        self.equipped_weapon.as_deref()
    }

    pub fn equipped_armor_id(&self) -> Option<&str> {
        self.equipped_armor.as_deref()
    }

    /// The equipped weapon's item, resolved against the inventory.
    pub fn equipped_weapon(&self) -> Option<&ItemDefinition> {
        self.equipped_weapon
            .as_deref()
            .and_then(|id| self.inventory.find(id))
    }

    pub fn equipped_armor(&self) -> Option<&ItemDefinition> {
        self.equipped_armor
            .as_deref()
            .and_then(|id| self.inventory.find(id))
    }

    /// Damage roll for the player's current attack: the equipped weapon's
    /// contract, or bare fists (`0..=strength/2`, no miss, no crit) when
    /// nothing is equipped.
    pub fn attack_roll(&self) -> WeaponData {
        match self.equipped_weapon().and_then(ItemDefinition::as_weapon) {
            Some(weapon) => *weapon,
            None => WeaponData {
                damage_min: 0,
                damage_max: self.strength / 2,
                hit_chance: 1.0,
            },
        }
    }

    /// Defense contributed by the equipped armor, zero when unarmored.
    pub fn armor_defense(&self) -> u32 {
        self.equipped_armor()
            .and_then(ItemDefinition::as_armor)
            .map(|armor| armor.defense)
            .unwrap_or(0)
    }

    /// Equip a weapon from the inventory, replacing the previous one.
    /// Returns the id of the weapon that was equipped before, if any;
    /// the replaced item simply stays in the inventory.
    pub fn equip_weapon(&mut self, id: &str) -> Result<Option<String>, EquipError> {
        let item = self
            .inventory
            .find(id)
            .ok_or_else(|| EquipError::NotInInventory { id: id.to_owned() })?;
        if !item.is_weapon() {
            return Err(EquipError::WrongKind {
                id: id.to_owned(),
                expected: "weapon",
            });
        }
        Ok(self.equipped_weapon.replace(id.to_owned()))
    }

    /// Equip armor from the inventory, replacing the previous piece.
    pub fn equip_armor(&mut self, id: &str) -> Result<Option<String>, EquipError> {
        let item = self
            .inventory
            .find(id)
            .ok_or_else(|| EquipError::NotInInventory { id: id.to_owned() })?;
        if !item.is_armor() {
            return Err(EquipError::WrongKind {
                id: id.to_owned(),
                expected: "armor",
            });
        }
        Ok(self.equipped_armor.replace(id.to_owned()))
    }
}
