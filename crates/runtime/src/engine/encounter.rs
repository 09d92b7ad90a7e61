//! Interactive encounter service.
//!
//! Every public method is one unit of work: it locks the player, runs the
//! action against the transaction's collaborators, commits, and only then
//! publishes events. A rejection or fault drops the transaction, so nothing
//! the action staged (energy, HP, logs, rewards) survives.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use combat_core::{
    CombatConfig, CombatEnv, EncounterLogEntry, EncounterSession, EncounterStatus, ItemId,
    MonsterDefinition, MonsterId, PlayerId, SessionId, StrikeInput, combat_level, heal_amount,
    resolve_strike,
};
use tracing::{debug, info};

use super::context::{Loadout, dangling, session_view};
use super::{commit, trace_failure, with_player};
use crate::api::{ExchangeReport, Rejection, Result, SessionView, VictoryRewards};
use crate::events::{EncounterEvent, EventBus};
use crate::oracle::OracleManager;
use crate::repository::CombatStore;
use crate::services::Collaborators;

/// Start, attack, eat and flee for interactive fights.
#[derive(Clone)]
pub struct EncounterService {
    store: Arc<CombatStore>,
    oracles: OracleManager,
    config: Arc<CombatConfig>,
    events: EventBus,
}

impl EncounterService {
    pub(crate) fn new(
        store: Arc<CombatStore>,
        oracles: OracleManager,
        config: Arc<CombatConfig>,
        events: EventBus,
    ) -> Self {
        Self {
            store,
            oracles,
            config,
            events,
        }
    }

    /// Opens a session against `monster` using style `style_index` of the
    /// player's current weapon.
    pub async fn start_combat(
        &self,
        player: PlayerId,
        monster: MonsterId,
        style_index: usize,
    ) -> Result<SessionView> {
        let mut tx = with_player(&self.store, player).await?;
        let env = self.oracles.as_combat_env();
        let now = Utc::now();
        let view = match start(&mut tx, &env, &self.config, monster, style_index, now).await {
            Ok(view) => view,
            Err(err) => return Err(trace_failure(player, "start_combat", err)),
        };
        commit(tx, "start_combat")?;

        info!(%player, session = %view.session, monster = %view.monster, "encounter started");
        self.events.publish(EncounterEvent::EncounterStarted {
            player,
            session: view.session,
            monster: view.monster,
        });
        Ok(view)
    }

    /// One exchange: the player strikes, then the monster retaliates unless it died.
    pub async fn attack(&self, player: PlayerId) -> Result<ExchangeReport> {
        let mut tx = with_player(&self.store, player).await?;
        let env = self.oracles.as_combat_env();
        let report = match attack(&mut tx, &env, &self.config, Utc::now()).await {
            Ok(report) => report,
            Err(err) => return Err(trace_failure(player, "attack", err)),
        };
        commit(tx, "attack")?;
        self.finish(player, &report);
        Ok(report)
    }

    /// Eats one unit of `item`; the monster still takes its turn.
    pub async fn eat(&self, player: PlayerId, item: ItemId) -> Result<ExchangeReport> {
        let mut tx = with_player(&self.store, player).await?;
        let env = self.oracles.as_combat_env();
        let report = match eat(&mut tx, &env, &self.config, item, Utc::now()).await {
            Ok(report) => report,
            Err(err) => return Err(trace_failure(player, "eat", err)),
        };
        commit(tx, "eat")?;
        self.finish(player, &report);
        Ok(report)
    }

    /// Tries to escape; a failed attempt gives the monster a free hit.
    pub async fn flee(&self, player: PlayerId) -> Result<ExchangeReport> {
        let mut tx = with_player(&self.store, player).await?;
        let env = self.oracles.as_combat_env();
        let report = match flee(&mut tx, &env, &self.config, Utc::now()).await {
            Ok(report) => report,
            Err(err) => return Err(trace_failure(player, "flee", err)),
        };
        commit(tx, "flee")?;
        self.finish(player, &report);
        Ok(report)
    }

    /// The player's active session, if any.
    pub async fn current(&self, player: PlayerId) -> Result<Option<SessionView>> {
        let record = self
            .store
            .read(player)?
            .ok_or(Rejection::UnknownPlayer(player))?;
        let Some(session) = record.active_session() else {
            return Ok(None);
        };
        let env = self.oracles.as_combat_env();
        let monster = env
            .monsters()?
            .monster(session.monster)
            .ok_or_else(|| {
                dangling(format!("{} fights unknown {}", session.id, session.monster))
            })?;
        let loadout = Loadout::from_record(&record, env.items()?)?;
        let view = session_view(session, &monster, loadout.snapshot.max_hp());
        Ok(Some(view))
    }

    /// Full log of one of the player's sessions, oldest entry first.
    pub async fn log(
        &self,
        player: PlayerId,
        session: SessionId,
    ) -> Result<Vec<EncounterLogEntry>> {
        let record = self
            .store
            .read(player)?
            .ok_or(Rejection::UnknownPlayer(player))?;
        Ok(record.logs.get(&session).cloned().unwrap_or_default())
    }

    fn finish(&self, player: PlayerId, report: &ExchangeReport) {
        if report.status.is_terminal() {
            info!(
                %player,
                session = %report.session.session,
                status = %report.status,
                "encounter ended"
            );
            self.events.publish(EncounterEvent::EncounterEnded {
                player,
                session: report.session.session,
                status: report.status,
            });
        }
    }
}

async fn start<T: Collaborators>(
    tx: &mut T,
    env: &CombatEnv<'_>,
    config: &CombatConfig,
    monster: MonsterId,
    style_index: usize,
    now: DateTime<Utc>,
) -> Result<SessionView> {
    let profile = tx.profile().await;
    if profile.traveling {
        return Err(Rejection::Traveling.into());
    }
    if profile.in_infirmary {
        return Err(Rejection::InInfirmary.into());
    }
    let levels = tx.levels().await;
    let loadout = Loadout::resolve(&profile, levels, &tx.equipped_items().await, env.items()?)?;
    if !loadout.snapshot.is_alive() {
        return Err(Rejection::PlayerDead.into());
    }
    if tx.active_session().await.is_some() {
        return Err(Rejection::EncounterInProgress.into());
    }
    if tx.active_run().await.is_some() {
        return Err(Rejection::DungeonInProgress.into());
    }

    let monster = env
        .monsters()?
        .monster(monster)
        .ok_or(Rejection::UnknownMonster(monster))?;
    let style = loadout.style(env.styles()?, style_index)?;
    let level = combat_level(&levels);
    if level < monster.level_requirement {
        return Err(Rejection::LevelTooLow {
            required: monster.level_requirement,
            actual: level,
        }
        .into());
    }

    tx.consume_energy(config.encounter_energy_cost).await?;
    let id = tx.next_session_id().await;
    let session = EncounterSession::start(
        id,
        profile.id,
        &monster,
        loadout.snapshot.current_hp(),
        style_index,
        style,
        profile.location.clone(),
        now,
    );
    tx.save_session(&session).await?;
    Ok(session_view(&session, &monster, loadout.snapshot.max_hp()))
}

/// Session, monster and player loadout for an action on the active session.
struct Exchange {
    session: EncounterSession,
    monster: MonsterDefinition,
    loadout: Loadout,
    player: StrikeInput,
    retaliation: StrikeInput,
    logs: Vec<EncounterLogEntry>,
}

impl Exchange {
    async fn load<T: Collaborators>(tx: &T, env: &CombatEnv<'_>) -> Result<Self> {
        let session = tx
            .active_session()
            .await
            .ok_or(Rejection::NoActiveEncounter)?;
        let monster = env
            .monsters()?
            .monster(session.monster)
            .ok_or_else(|| {
                dangling(format!("{} fights unknown {}", session.id, session.monster))
            })?;
        let profile = tx.profile().await;
        let loadout = Loadout::resolve(
            &profile,
            tx.levels().await,
            &tx.equipped_items().await,
            env.items()?,
        )?;
        // Interactive strikes are single hits; weapon speed only matters in dungeons.
        let (player, retaliation) = loadout.strikes(env.styles()?, &session.style, &monster, 1.0);
        Ok(Self {
            session,
            monster,
            loadout,
            player,
            retaliation,
            logs: Vec::with_capacity(2),
        })
    }

    fn retaliate(
        &mut self,
        env: &CombatEnv<'_>,
        config: &CombatConfig,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let strike = resolve_strike(&self.retaliation, env.rng()?, config);
        debug!(
            session = %self.session.id,
            hit = strike.hit,
            damage = strike.damage,
            roll = strike.roll,
            chance = strike.hit_chance,
            "monster strike"
        );
        self.logs.push(self.session.monster_strike(strike, now));
        Ok(())
    }

    /// Syncs HP, settles a terminal status and persists the session and its log.
    async fn settle<T: Collaborators>(
        mut self,
        tx: &mut T,
        env: &CombatEnv<'_>,
        config: &CombatConfig,
        now: DateTime<Utc>,
        message: String,
    ) -> Result<ExchangeReport> {
        let mut rewards = None;
        let message = match self.session.status {
            EncounterStatus::Victory => {
                let xp = self.monster.xp_reward(config) as u64;
                let gain = tx.add_xp(self.session.training_style, xp).await?;
                let loot = tx.roll_and_give_loot(&self.monster, env.rng()?).await?;
                rewards = Some(VictoryRewards {
                    xp: gain,
                    gold: loot.gold,
                    items: loot.items,
                });
                format!("{message} You defeated the {}!", self.monster.name)
            }
            EncounterStatus::Defeat => {
                self.session.defeat(now);
                tx.set_energy_on_death().await?;
                format!("{message} You were defeated by the {}.", self.monster.name)
            }
            EncounterStatus::Fled => message,
            EncounterStatus::Active => message,
        };
        tx.set_hp(self.session.player_hp).await?;
        tx.save_session(&self.session).await?;
        tx.append_log(self.session.id, &self.logs).await?;

        Ok(ExchangeReport {
            status: self.session.status,
            session: session_view(&self.session, &self.monster, self.loadout.snapshot.max_hp()),
            logs: self.logs,
            rewards,
            message,
        })
    }
}

async fn attack<T: Collaborators>(
    tx: &mut T,
    env: &CombatEnv<'_>,
    config: &CombatConfig,
    now: DateTime<Utc>,
) -> Result<ExchangeReport> {
    let mut exchange = Exchange::load(tx, env).await?;
    let strike = resolve_strike(&exchange.player, env.rng()?, config);
    debug!(
        session = %exchange.session.id,
        hit = strike.hit,
        damage = strike.damage,
        roll = strike.roll,
        chance = strike.hit_chance,
        "player strike"
    );
    let entry = exchange.session.player_strike(strike, now);
    exchange.logs.push(entry);

    let mut message = if strike.hit {
        format!(
            "You hit the {} for {}.",
            exchange.monster.name, strike.damage
        )
    } else {
        format!("You miss the {}.", exchange.monster.name)
    };
    if exchange.session.is_active() {
        exchange.retaliate(env, config, now)?;
        message = describe_retaliation(message, &exchange);
    }
    exchange.settle(tx, env, config, now, message).await
}

async fn eat<T: Collaborators>(
    tx: &mut T,
    env: &CombatEnv<'_>,
    config: &CombatConfig,
    item: ItemId,
    now: DateTime<Utc>,
) -> Result<ExchangeReport> {
    let mut exchange = Exchange::load(tx, env).await?;
    let definition = env
        .items()?
        .definition(item)
        .ok_or(Rejection::UnknownItem(item))?;
    let hp_bonus = definition.healing().ok_or(Rejection::NotFood(item))?;
    if !tx.has_item(item, 1).await {
        return Err(Rejection::ItemNotOwned(item).into());
    }
    let max_hp = exchange.loadout.snapshot.max_hp();
    if exchange.session.player_hp >= max_hp {
        return Err(Rejection::AlreadyFullHealth.into());
    }

    let heal = heal_amount(exchange.session.player_hp, max_hp, hp_bonus);
    tx.remove_item(item, 1).await?;
    let entry = exchange.session.eat(item, heal, now);
    exchange.logs.push(entry);

    // Eating never skips the monster's turn.
    exchange.retaliate(env, config, now)?;
    let message = format!(
        "You eat the {} and heal {} HP.",
        definition.name, heal.restored
    );
    let message = describe_retaliation(message, &exchange);
    exchange.settle(tx, env, config, now, message).await
}

async fn flee<T: Collaborators>(
    tx: &mut T,
    env: &CombatEnv<'_>,
    config: &CombatConfig,
    now: DateTime<Utc>,
) -> Result<ExchangeReport> {
    let mut exchange = Exchange::load(tx, env).await?;
    let roll = env.rng()?.roll_d100();
    let escaped = roll <= config.flee_chance;
    debug!(session = %exchange.session.id, roll, escaped, "flee attempt");

    let entry = exchange.session.flee(escaped, now);
    exchange.logs.push(entry);
    let message = if escaped {
        format!("You escaped from the {}.", exchange.monster.name)
    } else {
        exchange.retaliate(env, config, now)?;
        describe_retaliation("You failed to escape.".to_string(), &exchange)
    };
    exchange.settle(tx, env, config, now, message).await
}

fn describe_retaliation(message: String, exchange: &Exchange) -> String {
    match exchange.logs.last() {
        Some(entry) if entry.hit => format!(
            "{message} The {} hits you for {}.",
            exchange.monster.name, entry.damage
        ),
        _ => format!("{message} The {} misses you.", exchange.monster.name),
    }
}
