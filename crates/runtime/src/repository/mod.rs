//! Save persistence: repository contract and save document shapes.
//!
//! A save is two structured documents per player name: the player document
//! (scalar fields, equipped ids, inventory item ids, current area) and the
//! visited document (set of visited area ids). Documents reference items by
//! id only; reconstruction resolves them against the registry.

mod file;
mod memory;

pub use file::FileSaveRepository;
pub use memory::MemorySaveRepository;

use std::collections::BTreeSet;

use game_core::{GameConfig, Inventory, ItemDefinition, LookupError, PlayerClass, PlayerState, Registry};
use serde::{Deserialize, Serialize};

/// Repository operation failure.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("save io: {0}")]
    Io(#[from] std::io::Error),

    #[error("save serialization: {0}")]
    Serialization(String),
}

/// Repository for player save persistence.
pub trait SaveRepository {
    /// Persist both documents for the player they describe.
    fn save(&self, docs: &SaveDocuments) -> Result<(), RepositoryError>;

    /// Load the documents saved under `name`, if any.
    fn load(&self, name: &str) -> Result<Option<SaveDocuments>, RepositoryError>;
}

impl<R: SaveRepository + ?Sized> SaveRepository for &R {
    fn save(&self, docs: &SaveDocuments) -> Result<(), RepositoryError> {
        (**self).save(docs)
    }

    fn load(&self, name: &str) -> Result<Option<SaveDocuments>, RepositoryError> {
        (**self).load(name)
    }
}

/// Scalar player fields plus inventory contents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerDocument {
    pub name: String,
    pub class: PlayerClass,
    pub level: u32,
    pub xp: u32,
    pub hp: u32,
    pub hp_max: u32,
    pub strength: u32,
    pub agility: u32,
    pub crit_chance: f64,
    pub inventory: Vec<String>,
    pub equipped_weapon: Option<String>,
    pub equipped_armor: Option<String>,
    pub current_area: String,
}

/// The set of visited area ids, persisted separately.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitedDocument {
    pub visited: BTreeSet<String>,
}

/// Both documents of one save slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveDocuments {
    pub player: PlayerDocument,
    pub visited: VisitedDocument,
}

impl SaveDocuments {
    /// Snapshot a live player into persistable documents.
    pub fn capture(player: &PlayerState) -> Self {
        Self {
            player: PlayerDocument {
                name: player.name.clone(),
                class: player.class,
                level: player.level,
                xp: player.xp,
                hp: player.hp,
                hp_max: player.hp_max,
                strength: player.strength,
                agility: player.agility,
                crit_chance: player.crit_chance,
                inventory: player.inventory.ids(),
                equipped_weapon: player.equipped_weapon_id().map(str::to_owned),
                equipped_armor: player.equipped_armor_id().map(str::to_owned),
                current_area: player.current_area.clone(),
            },
            visited: VisitedDocument {
                visited: player.visited.clone(),
            },
        }
    }

    /// Rebuild a live player, resolving item references against the
    /// registry. Dangling ids fail with a [`LookupError`]; an equipped id
    /// that is not part of the saved inventory counts as dangling too.
    pub fn restore(&self, registry: &Registry, config: &GameConfig) -> Result<PlayerState, LookupError> {
        let doc = &self.player;

        let mut inventory = Inventory::new();
        for id in &doc.inventory {
            let item: &ItemDefinition = registry.get(id)?;
            inventory.add(item.clone());
        }

        let mut player = PlayerState::new(doc.name.clone(), doc.class, config);
        player.level = doc.level;
        player.xp = doc.xp;
        player.hp = doc.hp.min(doc.hp_max);
        player.hp_max = doc.hp_max;
        player.strength = doc.strength;
        player.agility = doc.agility;
        player.crit_chance = doc.crit_chance;
        player.inventory = inventory;
        player.current_area = doc.current_area.clone();
        player.visited = self.visited.visited.clone();

        if let Some(id) = &doc.equipped_weapon {
            player
                .equip_weapon(id)
                .map_err(|_| LookupError::new("item", id.clone()))?;
        }
        if let Some(id) = &doc.equipped_armor {
            player
                .equip_armor(id)
                .map_err(|_| LookupError::new("item", id.clone()))?;
        }

        Ok(player)
    }
}
