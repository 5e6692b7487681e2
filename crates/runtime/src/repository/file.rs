//! File-based SaveRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::repository::{RepositoryError, SaveDocuments, SaveRepository, VisitedDocument};

/// Stores saves as two JSON documents per player name.
///
/// # File Format
///
/// `<name>.json` holds the player document, `<name>_areas.json` the visited
/// document. Writes go to a temp file first and are moved into place with
/// an atomic rename.
pub struct FileSaveRepository {
    base_dir: PathBuf,
}

impl FileSaveRepository {
    /// Create a file-based save repository, creating the directory if
    /// needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn player_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(format!("{name}.json"))
    }

    fn visited_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(format!("{name}_areas.json"))
    }

    fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), RepositoryError> {
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, path)?;
        Ok(())
    }
}

impl SaveRepository for FileSaveRepository {
    fn save(&self, docs: &SaveDocuments) -> Result<(), RepositoryError> {
        let name = &docs.player.name;

        let player_bytes = serde_json::to_vec_pretty(&docs.player)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        Self::write_atomic(&self.player_path(name), &player_bytes)?;

        let visited_bytes = serde_json::to_vec_pretty(&docs.visited)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        Self::write_atomic(&self.visited_path(name), &visited_bytes)?;

        tracing::debug!(player = %name, dir = %self.base_dir.display(), "saved");
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Option<SaveDocuments>, RepositoryError> {
        let player_path = self.player_path(name);
        if !player_path.exists() {
            return Ok(None);
        }

        let player_bytes = fs::read(&player_path)?;
        let player = serde_json::from_slice(&player_bytes)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        // A save written by an older build may lack the visited document;
        // treat it as an empty set rather than refusing the save.
        let visited_path = self.visited_path(name);
        let visited = if visited_path.exists() {
            let visited_bytes = fs::read(&visited_path)?;
            serde_json::from_slice(&visited_bytes)
                .map_err(|e| RepositoryError::Serialization(e.to_string()))?
        } else {
            VisitedDocument::default()
        };

        tracing::debug!(player = %name, "loaded save");
        Ok(Some(SaveDocuments { player, visited }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::PlayerDocument;
    use game_core::PlayerClass;

    fn docs(name: &str) -> SaveDocuments {
        SaveDocuments {
            player: PlayerDocument {
                name: name.to_owned(),
                class: PlayerClass::Fighter,
                level: 2,
                xp: 600,
                hp: 11,
                hp_max: 15,
                strength: 5,
                agility: 4,
                crit_chance: 0.015625,
                inventory: vec!["sword".to_owned()],
                equipped_weapon: Some("sword".to_owned()),
                equipped_armor: None,
                current_area: "area_02".to_owned(),
            },
            visited: VisitedDocument {
                visited: ["area_01", "area_02"].iter().map(|s| s.to_string()).collect(),
            },
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path()).unwrap();

        let saved = docs("tav");
        repo.save(&saved).unwrap();
        let loaded = repo.load("tav").unwrap().unwrap();

        assert_eq!(loaded, saved);
        assert!(dir.path().join("tav.json").exists());
        assert!(dir.path().join("tav_areas.json").exists());
    }

    #[test]
    fn missing_save_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path()).unwrap();
        assert!(repo.load("nobody").unwrap().is_none());
    }

    #[test]
    fn missing_visited_document_defaults_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path()).unwrap();
        repo.save(&docs("tav")).unwrap();
        std::fs::remove_file(dir.path().join("tav_areas.json")).unwrap();

        let loaded = repo.load("tav").unwrap().unwrap();
        assert!(loaded.visited.visited.is_empty());
    }

    #[test]
    fn resaving_overwrites_the_slot() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path()).unwrap();

        repo.save(&docs("tav")).unwrap();
        let mut newer = docs("tav");
        newer.player.level = 3;
        repo.save(&newer).unwrap();

        assert_eq!(repo.load("tav").unwrap().unwrap().player.level, 3);
    }
}
