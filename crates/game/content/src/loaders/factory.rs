//! Content factory for loading a whole data directory.

use std::path::{Path, PathBuf};

use combat_core::{CombatConfig, DungeonDefinition, ItemDefinition, MonsterDefinition, StyleTable};

use crate::loaders::{
    ConfigLoader, DungeonLoader, ItemLoader, LoadResult, MonsterLoader, StyleLoader, validate,
};

/// Everything the combat engine reads, loaded and validated.
#[derive(Debug, Clone, Default)]
pub struct ContentBundle {
    pub config: CombatConfig,
    pub items: Vec<ItemDefinition>,
    pub monsters: Vec<MonsterDefinition>,
    pub dungeons: Vec<DungeonDefinition>,
    pub styles: StyleTable,
}

/// Content factory that loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// ├── monsters.ron
/// ├── dungeons.ron
/// └── styles.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load combat tunables from `config.toml`, or defaults when absent.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(CombatConfig::default());
        }
        ConfigLoader::load(&path)
    }

    pub fn load_items(&self) -> LoadResult<Vec<ItemDefinition>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    pub fn load_monsters(&self) -> LoadResult<Vec<MonsterDefinition>> {
        MonsterLoader::load(&self.data_dir.join("monsters.ron"))
    }

    pub fn load_dungeons(&self) -> LoadResult<Vec<DungeonDefinition>> {
        DungeonLoader::load(&self.data_dir.join("dungeons.ron"))
    }

    /// Load the attack-style table from `styles.ron`, or the standard table when absent.
    pub fn load_styles(&self) -> LoadResult<StyleTable> {
        let path = self.data_dir.join("styles.ron");
        if !path.exists() {
            return Ok(StyleTable::standard());
        }
        StyleLoader::load(&path)
    }

    /// Loads every file and validates cross-references.
    pub fn load_all(&self) -> LoadResult<ContentBundle> {
        let bundle = ContentBundle {
            config: self.load_config()?,
            items: self.load_items()?,
            monsters: self.load_monsters()?,
            dungeons: self.load_dungeons()?,
            styles: self.load_styles()?,
        };
        validate(&bundle)?;
        Ok(bundle)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_optional_files_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), CombatConfig::default());
        assert_eq!(factory.load_styles().unwrap(), StyleTable::standard());
        assert!(factory.load_items().is_err());
    }
}
