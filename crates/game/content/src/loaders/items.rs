//! Item, weapon and armor catalog loaders.
//!
//! Content authors write flat records (base item fields plus the variant's
//! own fields); the loaders fold them into [`ItemDefinition`]s with the
//! right [`ItemKind`]. Missing variant fields default rather than fail.

use std::path::Path;

use game_core::{ArmorData, ItemDefinition, ItemKind, WeaponData};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Plain item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub value: u32,
}

impl From<ItemRecord> for ItemDefinition {
    fn from(record: ItemRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            value: record.value,
            kind: ItemKind::Trinket,
        }
    }
}

/// Weapon catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponCatalog {
    pub weapons: Vec<WeaponRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub value: u32,
    #[serde(default)]
    pub damage_min: u32,
    #[serde(default)]
    pub damage_max: u32,
    #[serde(default = "default_hit_chance")]
    pub hit_chance: f64,
}

fn default_hit_chance() -> f64 {
    1.0
}

impl From<WeaponRecord> for ItemDefinition {
    fn from(record: WeaponRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            value: record.value,
            kind: ItemKind::Weapon(WeaponData {
                damage_min: record.damage_min,
                damage_max: record.damage_max,
                hit_chance: record.hit_chance,
            }),
        }
    }
}

/// Armor catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArmorCatalog {
    pub armors: Vec<ArmorRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArmorRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub value: u32,
    #[serde(default)]
    pub defense: u32,
}

impl From<ArmorRecord> for ItemDefinition {
    fn from(record: ArmorRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            value: record.value,
            kind: ItemKind::Armor(ArmorData {
                defense: record.defense,
            }),
        }
    }
}

/// Loader for the plain item catalog.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        let catalog: ItemCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(catalog.items.into_iter().map(Into::into).collect())
    }
}

/// Loader for the weapon catalog.
pub struct WeaponLoader;

impl WeaponLoader {
    /// Load weapon catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        let catalog: WeaponCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse weapon catalog RON: {}", e))?;

        Ok(catalog.weapons.into_iter().map(Into::into).collect())
    }
}

/// Loader for the armor catalog.
pub struct ArmorLoader;

impl ArmorLoader {
    /// Load armor catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        let catalog: ArmorCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse armor catalog RON: {}", e))?;

        Ok(catalog.armors.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn weapon_records_become_weapon_items() {
        let file = write_temp(
            r#"(
    weapons: [
        (
            id: "rusty_sword",
            name: "Rusty Sword",
            description: "Barely holds an edge.",
            value: 10,
            damage_min: 2,
            damage_max: 4,
            hit_chance: 0.9,
        ),
    ],
)"#,
        );

        let items = WeaponLoader::load(file.path()).unwrap();
        assert_eq!(items.len(), 1);
        let weapon = items[0].as_weapon().unwrap();
        assert_eq!((weapon.damage_min, weapon.damage_max), (2, 4));
        assert_eq!(weapon.hit_chance, 0.9);
    }

    #[test]
    fn missing_variant_fields_default_instead_of_failing() {
        let file = write_temp(r#"(weapons: [(id: "stick", name: "Stick")])"#);

        let items = WeaponLoader::load(file.path()).unwrap();
        let weapon = items[0].as_weapon().unwrap();
        assert_eq!((weapon.damage_min, weapon.damage_max), (0, 0));
        assert_eq!(weapon.hit_chance, 1.0);
    }

    #[test]
    fn malformed_catalog_is_a_load_error() {
        let file = write_temp("(weapons: [(id: 12)])");
        assert!(WeaponLoader::load(file.path()).is_err());
    }

    #[test]
    fn armor_records_become_armor_items() {
        let file = write_temp(
            r#"(armors: [(id: "jerkin", name: "Leather Jerkin", defense: 1, value: 8)])"#,
        );

        let items = ArmorLoader::load(file.path()).unwrap();
        assert_eq!(items[0].as_armor().unwrap().defense, 1);
    }
}
