//! Minimal [`combat_core::ItemOracle`] backed by an in-memory map.
use combat_core::{ItemDefinition, ItemId, ItemOracle};
use std::collections::HashMap;

/// ItemOracle implementation with static item definitions
#[derive(Default)]
pub struct ItemOracleImpl {
    definitions: HashMap<ItemId, ItemDefinition>,
}

impl ItemOracleImpl {
    pub fn from_definitions(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        Self {
            definitions: definitions
                .into_iter()
                .map(|def| (def.id, def))
                .collect(),
        }
    }
}

impl ItemOracle for ItemOracleImpl {
    fn definition(&self, id: ItemId) -> Option<ItemDefinition> {
        self.definitions.get(&id).cloned()
    }
}
