//! Loaders that convert RON/TOML files into registry content.

pub mod config;
pub mod creatures;
pub mod factory;
pub mod items;
pub mod world;

pub use config::ConfigLoader;
pub use creatures::CreatureLoader;
pub use factory::ContentFactory;
pub use items::{ArmorLoader, ItemLoader, WeaponLoader};
pub use world::{AreaLoader, DoorLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
