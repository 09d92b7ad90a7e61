//! Combat engine wiring and the two action services.
//!
//! [`CombatEngine`] owns the shared pieces (store, oracles, tunables, event
//! bus) and hands out cheap, cloneable [`EncounterService`] and
//! [`DungeonService`] handles. Use [`CombatEngine::builder`] to assemble one.
mod context;
mod dungeon;
mod encounter;

use std::sync::Arc;

use combat_core::{CombatConfig, GameError, PlayerId};
use tracing::{debug, error};

pub use dungeon::DungeonService;
pub use encounter::EncounterService;

use crate::api::{Rejection, Result, RuntimeError};
use crate::events::EventBus;
use crate::oracle::OracleManager;
use crate::repository::{CombatStore, PlayerTx};

/// Shared state behind both services.
#[derive(Clone)]
pub struct CombatEngine {
    store: Arc<CombatStore>,
    oracles: OracleManager,
    config: Arc<CombatConfig>,
    events: EventBus,
}

impl CombatEngine {
    pub fn builder() -> CombatEngineBuilder {
        CombatEngineBuilder::new()
    }

    pub fn encounters(&self) -> EncounterService {
        EncounterService::new(
            Arc::clone(&self.store),
            self.oracles.clone(),
            Arc::clone(&self.config),
            self.events.clone(),
        )
    }

    pub fn dungeons(&self) -> DungeonService {
        DungeonService::new(
            Arc::clone(&self.store),
            self.oracles.clone(),
            Arc::clone(&self.config),
            self.events.clone(),
        )
    }

    pub fn store(&self) -> &CombatStore {
        &self.store
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }
}

/// Builder for [`CombatEngine`].
///
/// The store and oracles are required; tunables default to
/// [`CombatConfig::default`] and the bus to [`EventBus::new`].
#[derive(Default)]
pub struct CombatEngineBuilder {
    store: Option<Arc<CombatStore>>,
    oracles: Option<OracleManager>,
    config: Option<CombatConfig>,
    events: Option<EventBus>,
}

impl CombatEngineBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Set required player store
    pub fn store(mut self, store: Arc<CombatStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Override combat tunables
    pub fn config(mut self, config: CombatConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Share an existing event bus
    pub fn events(mut self, events: EventBus) -> Self {
        self.events = Some(events);
        self
    }

    pub fn build(self) -> Result<CombatEngine> {
        let store = self
            .store
            .ok_or(RuntimeError::MissingComponent("a player store"))?;
        let oracles = self
            .oracles
            .ok_or(RuntimeError::MissingComponent("an oracle manager"))?;
        Ok(CombatEngine {
            store,
            oracles,
            config: Arc::new(self.config.unwrap_or_default()),
            events: self.events.unwrap_or_default(),
        })
    }
}

/// Opens the player's transaction, rejecting unknown players.
pub(crate) async fn with_player(store: &CombatStore, player: PlayerId) -> Result<PlayerTx> {
    match store.begin(player).await? {
        Some(tx) => Ok(tx),
        None => Err(trace_failure(
            player,
            "begin",
            Rejection::UnknownPlayer(player).into(),
        )),
    }
}

/// Persists the transaction, tracing a failed write like a failed action.
pub(crate) fn commit(tx: PlayerTx, action: &'static str) -> Result<()> {
    let player = tx.player();
    match tx.commit() {
        Ok(_) => Ok(()),
        Err(err) => Err(trace_failure(player, action, err.into())),
    }
}

/// Logs a failed action at the level its severity deserves and hands it back.
pub(crate) fn trace_failure(
    player: PlayerId,
    action: &'static str,
    err: RuntimeError,
) -> RuntimeError {
    match &err {
        RuntimeError::Rejected(reason) => {
            debug!(%player, action, code = reason.error_code(), %reason, "action rejected");
        }
        other => {
            error!(%player, action, code = other.error_code(), error = %other, "action failed");
        }
    }
    err
}
