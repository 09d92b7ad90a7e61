//! Dungeon layout loader.

use std::path::Path;

use combat_core::DungeonDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DungeonCatalog {
    pub dungeons: Vec<DungeonDefinition>,
}

pub struct DungeonLoader;

impl DungeonLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<DungeonDefinition>> {
        let content = read_file(path)?;
        let catalog: DungeonCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse dungeon catalog RON: {}", e))?;
        Ok(catalog.dungeons)
    }
}
