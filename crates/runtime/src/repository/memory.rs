//! In-memory PlayerRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use combat_core::PlayerId;

use crate::repository::{PlayerRecord, PlayerRepository, RepositoryError, Result};

#[derive(Default)]
pub struct InMemoryStore {
    records: RwLock<HashMap<PlayerId, PlayerRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_players(records: impl IntoIterator<Item = PlayerRecord>) -> Self {
        let records = records.into_iter().map(|r| (r.id(), r)).collect();
        Self {
            records: RwLock::new(records),
        }
    }
}

impl PlayerRepository for InMemoryStore {
    fn save(&self, record: &PlayerRecord) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        records.insert(record.id(), record.clone());
        Ok(())
    }

    fn load(&self, player: PlayerId) -> Result<Option<PlayerRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(records.get(&player).cloned())
    }

    fn list_players(&self) -> Result<Vec<PlayerId>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut players: Vec<PlayerId> = records.keys().copied().collect();
        players.sort_unstable();
        Ok(players)
    }
}
