//! Runtime wrappers around static combat content oracles.
//!
//! These implementations expose `combat-core` oracle traits and bundle them
//! into an [`OracleManager`] so the services can build a [`CombatEnv`] on
//! demand. The data is immutable at runtime; dynamic state lives in the
//! player repository.
mod dungeons;
mod items;
mod monsters;
mod rng;

use combat_content::ContentBundle;
use combat_core::{
    CombatEnv, DungeonOracle, Env, ItemOracle, MonsterOracle, PcgRng, RngOracle, StyleOracle,
    StyleTable,
};
use std::sync::Arc;

pub use dungeons::DungeonOracleImpl;
pub use items::ItemOracleImpl;
pub use monsters::MonsterOracleImpl;
pub use rng::ThreadRngOracle;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) items: Arc<ItemOracleImpl>,
    pub(crate) monsters: Arc<MonsterOracleImpl>,
    pub(crate) dungeons: Arc<DungeonOracleImpl>,
    pub(crate) styles: Arc<StyleTable>,
    pub(crate) rng: Arc<dyn RngOracle>,
}

impl OracleManager {
    /// Creates a new oracle manager drawing from the thread rng.
    pub fn new(
        items: Arc<ItemOracleImpl>,
        monsters: Arc<MonsterOracleImpl>,
        dungeons: Arc<DungeonOracleImpl>,
        styles: Arc<StyleTable>,
    ) -> Self {
        Self {
            items,
            monsters,
            dungeons,
            styles,
            rng: Arc::new(ThreadRngOracle),
        }
    }

    /// Wraps a loaded content bundle.
    pub fn from_bundle(bundle: ContentBundle) -> Self {
        Self::new(
            Arc::new(ItemOracleImpl::from_definitions(bundle.items)),
            Arc::new(MonsterOracleImpl::from_definitions(bundle.monsters)),
            Arc::new(DungeonOracleImpl::from_definitions(bundle.dungeons)),
            Arc::new(bundle.styles),
        )
    }

    /// Replaces the rng, e.g. with a seeded [`PcgRng`] or a scripted one in tests.
    pub fn with_rng(mut self, rng: Arc<dyn RngOracle>) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(Arc::new(PcgRng::new(seed)))
    }

    /// Borrows every oracle as the trait-object environment the rules consume.
    pub fn as_combat_env(&self) -> CombatEnv<'_> {
        let items: &dyn ItemOracle = self.items.as_ref();
        let monsters: &dyn MonsterOracle = self.monsters.as_ref();
        let dungeons: &dyn DungeonOracle = self.dungeons.as_ref();
        let styles: &dyn StyleOracle = self.styles.as_ref();
        Env::with_all(items, monsters, dungeons, styles, self.rng.as_ref())
    }
}
