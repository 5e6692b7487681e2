//! Live world state: per-area copies of creatures, doors and floor items.

use std::collections::HashMap;

use crate::defs::{AreaDefinition, CreatureDefinition, DoorDefinition, ItemDefinition};
use crate::registry::{LookupError, Registry};
use crate::state::Inventory;

/// A creature instance fighting in an area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatureState {
    pub name: String,
    pub hp: u32,
    pub hp_max: u32,
    pub strength: u32,
    pub agility: u32,
    pub xp: u32,
    pub loot: Vec<String>,
}

impl CreatureState {
    pub fn from_definition(def: &CreatureDefinition) -> Self {
        Self {
            name: def.name.clone(),
            hp: def.hp,
            hp_max: def.hp,
            strength: def.strength,
            agility: def.agility,
            xp: def.xp,
            loot: def.loot.clone(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Apply incoming damage, clamping at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }
}

/// A door instance. Unlocking mutates this copy, never the definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoorState {
    pub description: String,
    pub locked: bool,
    pub key: Option<String>,
    pub target: String,
}

impl DoorState {
    pub fn from_definition(def: &DoorDefinition) -> Self {
        Self {
            description: def.description.clone(),
            locked: def.locked,
            key: def.key.clone(),
            target: def.target.clone(),
        }
    }
}

/// An area instance: dialogue template plus mutable creature/item lists.
///
/// Combat clears the creature list; searching drains the item list. Neither
/// ever respawns within a session.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaState {
    pub id: String,
    pub prompt: String,
    pub choices: Vec<String>,
    pub doors: Vec<DoorState>,
    pub creatures: Vec<CreatureState>,
    pub items: Inventory,
}

/// All live areas of a session, instantiated once from the registry.
#[derive(Clone, Debug, Default)]
pub struct WorldState {
    areas: HashMap<String, AreaState>,
}

impl WorldState {
    /// Build live state for every loaded area.
    ///
    /// Every identifier embedded in an area (doors, creatures, items) and
    /// every door's target area and key item are resolved here, so dangling
    /// references abort startup instead of surfacing mid-session. The
    /// instances are independent copies: play never mutates the registry's
    /// canonical templates.
    pub fn instantiate(registry: &Registry) -> Result<Self, LookupError> {
        let mut areas = HashMap::new();

        for id in registry.ids::<AreaDefinition>() {
            let def: &AreaDefinition = registry.get(&id)?;

            let mut doors = Vec::with_capacity(def.doors.len());
            for door_id in &def.doors {
                let door: &DoorDefinition = registry.get(door_id)?;
                // Target areas and key items must resolve to loaded content.
                registry.get::<AreaDefinition>(&door.target)?;
                if let Some(key) = &door.key {
                    registry.get::<ItemDefinition>(key)?;
                }
                doors.push(DoorState::from_definition(door));
            }

            let mut creatures = Vec::with_capacity(def.creatures.len());
            for creature_id in &def.creatures {
                let creature: &CreatureDefinition = registry.get(creature_id)?;
                creatures.push(CreatureState::from_definition(creature));
            }

            let mut items = Inventory::new();
            for item_id in &def.items {
                let item: &ItemDefinition = registry.get(item_id)?;
                items.add(item.clone());
            }

            areas.insert(
                id.clone(),
                AreaState {
                    id,
                    prompt: def.prompt.clone(),
                    choices: def.choices.clone(),
                    doors,
                    creatures,
                    items,
                },
            );
        }

        tracing::debug!(areas = areas.len(), "instantiated world");
        Ok(Self { areas })
    }

    pub fn area(&self, id: &str) -> Result<&AreaState, LookupError> {
        self.areas.get(id).ok_or_else(|| LookupError::new("area", id))
    }

    pub fn area_mut(&mut self, id: &str) -> Result<&mut AreaState, LookupError> {
        self.areas
            .get_mut(id)
            .ok_or_else(|| LookupError::new("area", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::ItemKind;

    fn item(id: &str) -> ItemDefinition {
        ItemDefinition {
            id: id.to_owned(),
            name: id.to_owned(),
            description: String::new(),
            value: 0,
            kind: ItemKind::Trinket,
        }
    }

    fn rat() -> CreatureDefinition {
        CreatureDefinition {
            id: "rat".to_owned(),
            name: "Giant Rat".to_owned(),
            hp: 6,
            strength: 2,
            agility: 4,
            xp: 10,
            loot: vec![],
        }
    }

    fn small_registry() -> Registry {
        let mut registry = Registry::new();
        registry.load(vec![item("iron_key")]);
        registry.load(vec![rat()]);
        registry.load(vec![DoorDefinition {
            id: "door_01".to_owned(),
            description: "oak door".to_owned(),
            locked: true,
            key: Some("iron_key".to_owned()),
            target: "area_02".to_owned(),
        }]);
        registry.load(vec![
            AreaDefinition {
                id: "area_01".to_owned(),
                prompt: "Entrance".to_owned(),
                choices: vec![],
                doors: vec!["door_01".to_owned()],
                creatures: vec![],
                items: vec!["iron_key".to_owned()],
            },
            AreaDefinition {
                id: "area_02".to_owned(),
                prompt: "Corridor".to_owned(),
                choices: vec![],
                doors: vec![],
                creatures: vec!["rat".to_owned()],
                items: vec![],
            },
        ]);
        registry
    }

    #[test]
    fn instantiation_copies_templates() {
        let registry = small_registry();
        let mut world = WorldState::instantiate(&registry).unwrap();

        let area = world.area_mut("area_02").unwrap();
        area.creatures[0].take_damage(100);
        area.creatures.clear();

        // The canonical template is untouched and a fresh world is whole.
        assert_eq!(registry.get::<CreatureDefinition>("rat").unwrap().hp, 6);
        let fresh = WorldState::instantiate(&registry).unwrap();
        assert_eq!(fresh.area("area_02").unwrap().creatures.len(), 1);
        assert_eq!(fresh.area("area_02").unwrap().creatures[0].hp, 6);
    }

    #[test]
    fn dangling_door_target_aborts_instantiation() {
        let mut registry = small_registry();
        registry.load(vec![DoorDefinition {
            id: "door_01".to_owned(),
            description: "oak door".to_owned(),
            locked: false,
            key: None,
            target: "area_99".to_owned(),
        }]);

        let err = WorldState::instantiate(&registry).unwrap_err();
        assert_eq!(err, LookupError::new("area", "area_99"));
    }

    #[test]
    fn unknown_area_lookup_fails() {
        let registry = small_registry();
        let world = WorldState::instantiate(&registry).unwrap();
        assert!(world.area("area_99").is_err());
    }
}
