//! Traits describing read-only combat content.
//!
//! Oracles expose item definitions, monster templates, dungeon layouts, the
//! attack-style table and randomness. The [`Env`] aggregate bundles them so
//! the combat rules can reach everything they need without hard coupling to
//! concrete implementations; tests substitute fixtures per oracle.
mod dungeons;
mod error;
mod items;
mod monsters;
mod rng;
mod styles;

pub use dungeons::{DungeonDefinition, DungeonOracle, FloorDefinition, SpawnEntry};
pub use error::OracleError;
pub use items::{
    ConsumableData, EquipmentBonuses, ItemDefinition, ItemKind, ItemOracle, WeaponData,
};
pub use monsters::{LootEntry, MonsterDefinition, MonsterFamily, MonsterOracle, TypedDefenses};
pub use rng::{PcgRng, RngOracle, ScriptedRng};
pub use styles::{StyleOracle, StyleTable};

/// Aggregates read-only oracles required by the combat rules.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, I, M, D, S, R>
where
    I: ItemOracle + ?Sized,
    M: MonsterOracle + ?Sized,
    D: DungeonOracle + ?Sized,
    S: StyleOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    items: Option<&'a I>,
    monsters: Option<&'a M>,
    dungeons: Option<&'a D>,
    styles: Option<&'a S>,
    rng: Option<&'a R>,
}

pub type CombatEnv<'a> = Env<
    'a,
    dyn ItemOracle + 'a,
    dyn MonsterOracle + 'a,
    dyn DungeonOracle + 'a,
    dyn StyleOracle + 'a,
    dyn RngOracle + 'a,
>;

impl<'a, I, M, D, S, R> Env<'a, I, M, D, S, R>
where
    I: ItemOracle + ?Sized,
    M: MonsterOracle + ?Sized,
    D: DungeonOracle + ?Sized,
    S: StyleOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(
        items: Option<&'a I>,
        monsters: Option<&'a M>,
        dungeons: Option<&'a D>,
        styles: Option<&'a S>,
        rng: Option<&'a R>,
    ) -> Self {
        Self {
            items,
            monsters,
            dungeons,
            styles,
            rng,
        }
    }

    pub fn with_all(
        items: &'a I,
        monsters: &'a M,
        dungeons: &'a D,
        styles: &'a S,
        rng: &'a R,
    ) -> Self {
        Self::new(
            Some(items),
            Some(monsters),
            Some(dungeons),
            Some(styles),
            Some(rng),
        )
    }

    /// Returns the ItemOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no item oracle was provided.
    pub fn items(&self) -> Result<&'a I, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the MonsterOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::MonstersNotAvailable` if no monster oracle was provided.
    pub fn monsters(&self) -> Result<&'a M, OracleError> {
        self.monsters.ok_or(OracleError::MonstersNotAvailable)
    }

    /// Returns the DungeonOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::DungeonsNotAvailable` if no dungeon oracle was provided.
    pub fn dungeons(&self) -> Result<&'a D, OracleError> {
        self.dungeons.ok_or(OracleError::DungeonsNotAvailable)
    }

    /// Returns the StyleOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::StylesNotAvailable` if no style oracle was provided.
    pub fn styles(&self) -> Result<&'a S, OracleError> {
        self.styles.ok_or(OracleError::StylesNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}
