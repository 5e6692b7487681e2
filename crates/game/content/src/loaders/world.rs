//! Door and area catalog loaders.

use std::path::Path;

use game_core::{AreaDefinition, DoorDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Door catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoorCatalog {
    pub doors: Vec<DoorDefinition>,
}

/// Area catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaCatalog {
    pub areas: Vec<AreaDefinition>,
}

/// Loader for the door catalog.
pub struct DoorLoader;

impl DoorLoader {
    /// Load door catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<DoorDefinition>> {
        let content = read_file(path)?;
        let catalog: DoorCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse door catalog RON: {}", e))?;

        Ok(catalog.doors)
    }
}

/// Loader for the area catalog.
pub struct AreaLoader;

impl AreaLoader {
    /// Load area catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<AreaDefinition>> {
        let content = read_file(path)?;
        let catalog: AreaCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse area catalog RON: {}", e))?;

        Ok(catalog.areas)
    }
}
