//! Attack-style table loader.

use std::path::Path;

use combat_core::StyleTable;

use crate::loaders::{LoadResult, read_file};

pub struct StyleLoader;

impl StyleLoader {
    pub fn load(path: &Path) -> LoadResult<StyleTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<StyleTable> {
        ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse style table RON: {}", e))
    }
}
