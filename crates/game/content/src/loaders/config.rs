//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config: GameConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_config_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"starting_area = \"area_07\"\n").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.starting_area, "area_07");
        assert_eq!(config.xp_curve_factor, GameConfig::DEFAULT_XP_CURVE_FACTOR);
        assert_eq!(config.classes.fighter.strength, 5);
    }

    #[test]
    fn class_table_overrides_apply() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"[classes.rogue]\nhp = 12\nstrength = 3\nagility = 7\n",
        )
        .unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.classes.rogue.agility, 7);
        assert_eq!(config.classes.fighter.hp, 15);
    }
}
