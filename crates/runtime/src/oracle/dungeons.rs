//! Dungeon layouts keyed by id.
use combat_core::{DungeonDefinition, DungeonId, DungeonOracle};
use std::collections::HashMap;

#[derive(Default)]
pub struct DungeonOracleImpl {
    dungeons: HashMap<DungeonId, DungeonDefinition>,
}

impl DungeonOracleImpl {
    pub fn from_definitions(dungeons: impl IntoIterator<Item = DungeonDefinition>) -> Self {
        Self {
            dungeons: dungeons.into_iter().map(|d| (d.id, d)).collect(),
        }
    }
}

impl DungeonOracle for DungeonOracleImpl {
    fn dungeon(&self, id: DungeonId) -> Option<DungeonDefinition> {
        self.dungeons.get(&id).cloned()
    }
}
