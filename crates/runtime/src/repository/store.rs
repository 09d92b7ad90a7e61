//! Per-player unit of work.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use combat_core::{PlayerId, RunId, SessionId};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::repository::{PlayerRecord, PlayerRepository, RepositoryError, Result};

/// Serializes actions per player and hands out transactions.
///
/// Actions of different players never wait on each other. Two actions of
/// the same player run strictly one after the other, so the "already has an
/// active session" check and the write that follows cannot interleave.
pub struct CombatStore {
    repo: Arc<dyn PlayerRepository>,
    locks: Mutex<HashMap<PlayerId, Arc<AsyncMutex<()>>>>,
    next_session: Arc<AtomicU64>,
    next_run: Arc<AtomicU64>,
}

impl CombatStore {
    /// Wraps a repository, continuing id sequences from what it already holds.
    pub fn new(repo: Arc<dyn PlayerRepository>) -> Result<Self> {
        let mut max_session = 0;
        let mut max_run = 0;
        for player in repo.list_players()? {
            if let Some(record) = repo.load(player)? {
                let (session, run) = record.max_ids();
                max_session = max_session.max(session);
                max_run = max_run.max(run);
            }
        }
        Ok(Self {
            repo,
            locks: Mutex::new(HashMap::new()),
            next_session: Arc::new(AtomicU64::new(max_session + 1)),
            next_run: Arc::new(AtomicU64::new(max_run + 1)),
        })
    }

    /// Hands out the player's lock, dropping locks nobody holds or awaits.
    ///
    /// Clones only happen under the map lock, so an entry whose only
    /// reference is the map itself cannot be in use.
    fn player_lock(&self, player: PlayerId) -> Result<Arc<AsyncMutex<()>>> {
        let mut locks = self.locks.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        Ok(Arc::clone(locks.entry(player).or_default()))
    }

    #[cfg(test)]
    fn tracked_locks(&self) -> usize {
        self.locks
            .lock()
            .map(|locks| locks.len())
            .unwrap_or_default()
    }

    /// Locks the player and loads a private working copy of their record.
    ///
    /// Returns `Ok(None)` for unknown players. The lock is held until the
    /// transaction is committed or dropped.
    pub async fn begin(&self, player: PlayerId) -> Result<Option<PlayerTx>> {
        let guard = self.player_lock(player)?.lock_owned().await;
        let Some(record) = self.repo.load(player)? else {
            return Ok(None);
        };
        Ok(Some(PlayerTx {
            record,
            repo: Arc::clone(&self.repo),
            next_session: Arc::clone(&self.next_session),
            next_run: Arc::clone(&self.next_run),
            _guard: guard,
        }))
    }

    /// Committed record, read without taking the player lock.
    pub fn read(&self, player: PlayerId) -> Result<Option<PlayerRecord>> {
        self.repo.load(player)
    }

    /// Creates or replaces a player record under the player lock.
    pub async fn put_player(&self, record: PlayerRecord) -> Result<()> {
        let _guard = self.player_lock(record.id())?.lock_owned().await;
        check_constraints(&record)?;
        self.repo.save(&record)
    }
}

/// Open transaction on one player.
///
/// Every change goes to the working copy. [`commit`](Self::commit) validates
/// and persists it in one write; dropping the transaction discards it.
pub struct PlayerTx {
    record: PlayerRecord,
    repo: Arc<dyn PlayerRepository>,
    next_session: Arc<AtomicU64>,
    next_run: Arc<AtomicU64>,
    _guard: OwnedMutexGuard<()>,
}

impl PlayerTx {
    pub fn player(&self) -> PlayerId {
        self.record.id()
    }

    pub fn record(&self) -> &PlayerRecord {
        &self.record
    }

    pub(crate) fn record_mut(&mut self) -> &mut PlayerRecord {
        &mut self.record
    }

    pub(crate) fn allocate_session_id(&self) -> SessionId {
        SessionId(self.next_session.fetch_add(1, Ordering::Relaxed))
    }

    pub(crate) fn allocate_run_id(&self) -> RunId {
        RunId(self.next_run.fetch_add(1, Ordering::Relaxed))
    }

    /// Validates the single-active constraint and persists the working copy.
    pub fn commit(self) -> Result<PlayerRecord> {
        check_constraints(&self.record)?;
        self.repo.save(&self.record)?;
        Ok(self.record)
    }
}

fn check_constraints(record: &PlayerRecord) -> Result<()> {
    if record.active_session_count() > 1 {
        return Err(RepositoryError::DuplicateActive {
            player: record.id(),
            kind: "encounter session",
        });
    }
    if record.active_run_count() > 1 {
        return Err(RepositoryError::DuplicateActive {
            player: record.id(),
            kind: "dungeon run",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryStore, PlayerProfile};

    fn store() -> CombatStore {
        let repo = InMemoryStore::with_players([PlayerRecord::new(PlayerProfile::new(
            PlayerId(1),
            "Ann",
        ))]);
        CombatStore::new(Arc::new(repo)).unwrap()
    }

    #[tokio::test]
    async fn dropped_transaction_discards_changes() {
        let store = store();
        {
            let mut tx = store.begin(PlayerId(1)).await.unwrap().unwrap();
            tx.record_mut().profile.energy = 0;
        }
        let record = store.read(PlayerId(1)).unwrap().unwrap();
        assert_eq!(record.profile.energy, 100);
    }

    #[tokio::test]
    async fn committed_changes_are_visible() {
        let store = store();
        let mut tx = store.begin(PlayerId(1)).await.unwrap().unwrap();
        tx.record_mut().profile.gold = 42;
        tx.commit().unwrap();

        assert_eq!(store.read(PlayerId(1)).unwrap().unwrap().profile.gold, 42);
    }

    #[tokio::test]
    async fn unknown_player_has_no_transaction() {
        assert!(store().begin(PlayerId(9)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn idle_player_locks_are_released() {
        let repo = InMemoryStore::with_players(
            (1..=3).map(|id| PlayerRecord::new(PlayerProfile::new(PlayerId(id), "Ann"))),
        );
        let store = CombatStore::new(Arc::new(repo)).unwrap();

        let held = store.begin(PlayerId(1)).await.unwrap().unwrap();
        for id in 2..=3 {
            drop(store.begin(PlayerId(id)).await.unwrap());
        }
        assert!(store.tracked_locks() <= 2);

        drop(store.begin(PlayerId(2)).await.unwrap());
        assert_eq!(store.tracked_locks(), 2, "held lock must survive pruning");
        held.commit().unwrap();

        drop(store.begin(PlayerId(3)).await.unwrap());
        assert_eq!(store.tracked_locks(), 1);
    }

    #[tokio::test]
    async fn ids_are_unique_across_transactions() {
        let store = store();
        let tx = store.begin(PlayerId(1)).await.unwrap().unwrap();
        let a = tx.allocate_session_id();
        let b = tx.allocate_session_id();
        drop(tx);
        let tx = store.begin(PlayerId(1)).await.unwrap().unwrap();
        let c = tx.allocate_session_id();
        assert!(a < b && b < c);
    }
}
