//! Creature definitions.

use serde::{Deserialize, Serialize};

/// Template for a hostile creature.
///
/// The registry keeps the canonical copy; each area gets its own live
/// [`crate::state::CreatureState`] instance so a defeated creature never
/// mutates the template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureDefinition {
    pub id: String,
    pub name: String,
    pub hp: u32,
    #[serde(default)]
    pub strength: u32,
    #[serde(default)]
    pub agility: u32,
    /// Experience granted to the player when this creature is defeated.
    #[serde(default)]
    pub xp: u32,
    /// Item ids dropped onto the area floor on defeat.
    #[serde(default)]
    pub loot: Vec<String>,
}
