//! Door and area definitions.

use serde::{Deserialize, Serialize};

/// A one-way connection between areas, possibly locked behind a key item.
///
/// Doors reference their target area and key item by id only; resolution
/// happens against the registry when the world is instantiated. Door
/// definitions must therefore be loaded before area definitions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorDefinition {
    pub id: String,
    /// Short description used in "Go through the ..." choices.
    pub description: String,
    #[serde(default)]
    pub locked: bool,
    /// Item id of the key that unlocks this door, if any.
    #[serde(default)]
    pub key: Option<String>,
    /// Area id this door leads to.
    pub target: String,
}

/// An area of the world: descriptive dialogue plus the doors, creatures and
/// loose items found in it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaDefinition {
    pub id: String,
    /// Prompt text shown when the room dialogue activates.
    pub prompt: String,
    /// Static dialogue options, before exits and "Search" are appended.
    #[serde(default)]
    pub choices: Vec<String>,
    #[serde(default)]
    pub doors: Vec<String>,
    #[serde(default)]
    pub creatures: Vec<String>,
    #[serde(default)]
    pub items: Vec<String>,
}
