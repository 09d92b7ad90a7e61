//! Monster templates keyed by id.
use combat_core::{MonsterDefinition, MonsterId, MonsterOracle};
use std::collections::HashMap;

#[derive(Default)]
pub struct MonsterOracleImpl {
    monsters: HashMap<MonsterId, MonsterDefinition>,
}

impl MonsterOracleImpl {
    pub fn from_definitions(monsters: impl IntoIterator<Item = MonsterDefinition>) -> Self {
        Self {
            monsters: monsters.into_iter().map(|m| (m.id, m)).collect(),
        }
    }
}

impl MonsterOracle for MonsterOracleImpl {
    fn monster(&self, id: MonsterId) -> Option<MonsterDefinition> {
        self.monsters.get(&id).cloned()
    }
}
