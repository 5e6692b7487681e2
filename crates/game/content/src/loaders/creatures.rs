//! Creature catalog loader.

use std::path::Path;

use game_core::CreatureDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Creature catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatureCatalog {
    pub creatures: Vec<CreatureDefinition>,
}

/// Loader for the creature catalog.
pub struct CreatureLoader;

impl CreatureLoader {
    /// Load creature catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<CreatureDefinition>> {
        let content = read_file(path)?;
        let catalog: CreatureCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse creature catalog RON: {}", e))?;

        Ok(catalog.creatures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loot_defaults_to_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"(
    creatures: [
        (id: "giant_rat", name: "Giant Rat", hp: 6, strength: 2, agility: 4, xp: 10),
        (id: "warden", name: "Skeleton Warden", hp: 14, strength: 4, agility: 2, xp: 40,
         loot: ["bone_blade"]),
    ],
)"#,
        )
        .unwrap();

        let creatures = CreatureLoader::load(file.path()).unwrap();
        assert_eq!(creatures.len(), 2);
        assert!(creatures[0].loot.is_empty());
        assert_eq!(creatures[1].loot, vec!["bone_blade"]);
    }
}
