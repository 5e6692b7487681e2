//! Content factory for building the registry from a data directory.

use std::path::{Path, PathBuf};

use game_core::Registry;

use crate::loaders::{
    AreaLoader, ArmorLoader, ConfigLoader, CreatureLoader, DoorLoader, ItemLoader, LoadResult,
    WeaponLoader,
};

/// Loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// ├── weapons.ron
/// ├── armors.ron
/// ├── creatures.ron
/// ├── doors.ron
/// └── areas.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<game_core::GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load every catalog into a fresh registry.
    ///
    /// Catalogs load in the fixed order Item → Weapon → Armor → Creature →
    /// Door → Area; doors before areas is a hard requirement because areas
    /// embed door references that are resolved when the world is
    /// instantiated.
    pub fn load_registry(&self) -> LoadResult<Registry> {
        let mut registry = Registry::new();

        let mut items = ItemLoader::load(&self.data_dir.join("items.ron"))?;
        items.extend(WeaponLoader::load(&self.data_dir.join("weapons.ron"))?);
        items.extend(ArmorLoader::load(&self.data_dir.join("armors.ron"))?);
        registry.load(items);

        registry.load(CreatureLoader::load(&self.data_dir.join("creatures.ron"))?);
        registry.load(DoorLoader::load(&self.data_dir.join("doors.ron"))?);
        registry.load(AreaLoader::load(&self.data_dir.join("areas.ron"))?);

        Ok(registry)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{AreaDefinition, CreatureDefinition, DoorDefinition, ItemDefinition};
    use std::fs;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn seed_minimal_pack(dir: &Path) {
        write(dir, "config.toml", "starting_area = \"area_01\"\n");
        write(dir, "items.ron", r#"(items: [(id: "iron_key", name: "Iron Key")])"#);
        write(
            dir,
            "weapons.ron",
            r#"(weapons: [(id: "rusty_sword", name: "Rusty Sword", damage_min: 2, damage_max: 4)])"#,
        );
        write(dir, "armors.ron", "(armors: [])");
        write(
            dir,
            "creatures.ron",
            r#"(creatures: [(id: "giant_rat", name: "Giant Rat", hp: 6, strength: 2, agility: 4, xp: 10)])"#,
        );
        write(
            dir,
            "doors.ron",
            r#"(doors: [(id: "door_01", description: "oak door", locked: true, key: Some("iron_key"), target: "area_02")])"#,
        );
        write(
            dir,
            "areas.ron",
            r#"(
    areas: [
        (id: "area_01", prompt: "Entrance.", doors: ["door_01"], items: ["iron_key", "rusty_sword"]),
        (id: "area_02", prompt: "Corridor.", creatures: ["giant_rat"]),
    ],
)"#,
        );
    }

    #[test]
    fn factory_loads_a_complete_pack() {
        let dir = tempfile::tempdir().unwrap();
        seed_minimal_pack(dir.path());
        let factory = ContentFactory::new(dir.path());

        let config = factory.load_config().unwrap();
        assert_eq!(config.starting_area, "area_01");

        let registry = factory.load_registry().unwrap();
        assert_eq!(registry.count::<ItemDefinition>(), 2);
        assert_eq!(registry.count::<CreatureDefinition>(), 1);
        assert_eq!(registry.count::<DoorDefinition>(), 1);
        assert_eq!(registry.count::<AreaDefinition>(), 2);

        assert!(registry.get::<ItemDefinition>("rusty_sword").unwrap().is_weapon());
    }

    #[test]
    fn missing_catalog_aborts_the_load() {
        let dir = tempfile::tempdir().unwrap();
        seed_minimal_pack(dir.path());
        fs::remove_file(dir.path().join("doors.ron")).unwrap();

        let factory = ContentFactory::new(dir.path());
        assert!(factory.load_registry().is_err());
    }

    #[test]
    fn factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
