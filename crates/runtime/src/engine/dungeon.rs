//! Batch dungeon service.
//!
//! Fights run through the unlogged loop in `combat-core`; only the per-fight
//! outcome and the pending ledger on the run are persisted. Rewards reach the
//! player only when the final floor is cleared.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use combat_core::{
    CombatConfig, CombatEnv, DungeonDefinition, DungeonId, DungeonRun, ItemId, KingdomId,
    OracleError, PlayerId, RngOracle, combat_level, distribute_xp, fight_xp, heal_amount,
    roll_gold, roll_loot, select_monster, simulate_fight,
};
use tracing::{debug, info, warn};

use super::context::{Loadout, dangling, forfeiture, ledger_drops, run_view};
use super::{commit, trace_failure, with_player};
use crate::api::{
    CompletionRewards, EatReport, FightReport, FightRewards, Forfeiture, Rejection, Result,
    RunEndReport, RunView,
};
use crate::events::{DungeonEvent, EventBus};
use crate::oracle::OracleManager;
use crate::repository::CombatStore;
use crate::services::Collaborators;

/// Enter, fight, advance, abandon and eat for dungeon runs.
#[derive(Clone)]
pub struct DungeonService {
    store: Arc<CombatStore>,
    oracles: OracleManager,
    config: Arc<CombatConfig>,
    events: EventBus,
}

impl DungeonService {
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

    /// Starts a run on floor 1, fixing the attack style for the whole run.
    pub async fn enter_dungeon(
        &self,
        player: PlayerId,
        dungeon: DungeonId,
        style_index: usize,
    ) -> Result<RunView> {
        let mut tx = with_player(&self.store, player).await?;
        let env = self.oracles.as_combat_env();
        let view = match enter(&mut tx, &env, dungeon, style_index, Utc::now()).await {
            Ok(view) => view,
            Err(err) => return Err(trace_failure(player, "enter_dungeon", err)),
        };
        commit(tx, "enter_dungeon")?;

        info!(%player, run = %view.run, dungeon = %view.dungeon, "run started");
        self.events.publish(DungeonEvent::RunStarted {
            player,
            run: view.run,
            dungeon: view.dungeon,
        });
        Ok(view)
    }

    /// Fights the next monster of the current floor to the end.
    pub async fn fight_monster(&self, player: PlayerId) -> Result<FightReport> {
        let mut tx = with_player(&self.store, player).await?;
        let env = self.oracles.as_combat_env();
        let report = match fight(&mut tx, &env, &self.config, Utc::now()).await {
            Ok(report) => report,
            Err(err) => return Err(trace_failure(player, "fight_monster", err)),
        };
        commit(tx, "fight_monster")?;

        if report.floor_cleared {
            info!(
                %player,
                run = %report.run.run,
                floor = report.run.current_floor,
                "floor cleared"
            );
            self.events.publish(DungeonEvent::FloorCleared {
                player,
                run: report.run.run,
                floor: report.run.current_floor,
            });
        }
        self.finish(player, &report.run);
        Ok(report)
    }

    /// Moves to the next floor once the current one is cleared.
    pub async fn next_floor(&self, player: PlayerId) -> Result<RunView> {
        let mut tx = with_player(&self.store, player).await?;
        let env = self.oracles.as_combat_env();
        let view = match advance(&mut tx, &env).await {
            Ok(view) => view,
            Err(err) => return Err(trace_failure(player, "next_floor", err)),
        };
        commit(tx, "next_floor")?;

        info!(%player, run = %view.run, floor = view.current_floor, "floor advanced");
        self.events.publish(DungeonEvent::FloorAdvanced {
            player,
            run: view.run,
            floor: view.current_floor,
        });
        Ok(view)
    }

    /// Leaves the dungeon, forfeiting every pending reward.
    pub async fn abandon(&self, player: PlayerId) -> Result<RunEndReport> {
        let mut tx = with_player(&self.store, player).await?;
        let env = self.oracles.as_combat_env();
        let report = match abandon(&mut tx, &env, Utc::now()).await {
            Ok(report) => report,
            Err(err) => return Err(trace_failure(player, "abandon", err)),
        };
        commit(tx, "abandon")?;
        self.finish(player, &report.run);
        Ok(report)
    }

    /// Eats between fights; no monster is present to retaliate.
    pub async fn eat_food(&self, player: PlayerId, item: ItemId) -> Result<EatReport> {
        let mut tx = with_player(&self.store, player).await?;
        let env = self.oracles.as_combat_env();
        let report = match eat_food(&mut tx, &env, item).await {
            Ok(report) => report,
            Err(err) => return Err(trace_failure(player, "eat_food", err)),
        };
        commit(tx, "eat_food")?;
        debug!(%player, item = %item, restored = report.hp_restored, "ate between fights");
        Ok(report)
    }

    /// The player's active run, if any.
    pub async fn current(&self, player: PlayerId) -> Result<Option<RunView>> {
        let record = self
            .store
            .read(player)?
            .ok_or(Rejection::UnknownPlayer(player))?;
        let Some(run) = record.active_run() else {
            return Ok(None);
        };
        let env = self.oracles.as_combat_env();
        let dungeon = lookup_dungeon(&env, run)?;
        let loadout = Loadout::from_record(&record, env.items()?)?;
        Ok(Some(run_view(run, &dungeon, &loadout.snapshot)))
    }

    /// Committed dungeon loot the player holds in `kingdom`.
    pub async fn stored_loot(
        &self,
        player: PlayerId,
        kingdom: KingdomId,
    ) -> Result<Vec<(ItemId, u32)>> {
        let record = self
            .store
            .read(player)?
            .ok_or(Rejection::UnknownPlayer(player))?;
        Ok(record.stored_loot(kingdom))
    }

    fn finish(&self, player: PlayerId, run: &RunView) {
        if run.status.is_terminal() {
            info!(%player, run = %run.run, status = %run.status, "run ended");
            self.events.publish(DungeonEvent::RunEnded {
                player,
                run: run.run,
                status: run.status,
            });
        }
    }
}

fn lookup_dungeon(env: &CombatEnv<'_>, run: &DungeonRun) -> Result<DungeonDefinition> {
    let dungeon = env
        .dungeons()?
        .dungeon(run.dungeon)
        .ok_or_else(|| dangling(format!("{} is in unknown {}", run.id, run.dungeon)))?;
    Ok(dungeon)
}

async fn loadout<T: Collaborators>(tx: &T, env: &CombatEnv<'_>) -> Result<Loadout> {
    let profile = tx.profile().await;
    Loadout::resolve(
        &profile,
        tx.levels().await,
        &tx.equipped_items().await,
        env.items()?,
    )
}

async fn active_run<T: Collaborators>(tx: &T) -> Result<DungeonRun> {
    let run = tx.active_run().await.ok_or(Rejection::NoActiveRun)?;
    Ok(run)
}

async fn enter<T: Collaborators>(
    tx: &mut T,
    env: &CombatEnv<'_>,
    dungeon: DungeonId,
    style_index: usize,
    now: DateTime<Utc>,
) -> Result<RunView> {
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

    let dungeon = env
        .dungeons()?
        .dungeon(dungeon)
        .ok_or(Rejection::UnknownDungeon(dungeon))?;
    if dungeon.floor(1).is_none() {
        return Err(OracleError::FloorNotFound {
            dungeon: dungeon.id,
            floor: 1,
        }
        .into());
    }
    let level = combat_level(&levels);
    if level < dungeon.level_requirement {
        return Err(Rejection::LevelTooLow {
            required: dungeon.level_requirement,
            actual: level,
        }
        .into());
    }
    let style = loadout.style(env.styles()?, style_index)?;

    tx.consume_energy(dungeon.energy_cost).await?;
    let id = tx.next_run_id().await;
    let run = DungeonRun::enter(
        id,
        profile.id,
        &dungeon,
        style_index,
        style,
        profile.location.clone(),
        now,
    );
    tx.save_run(&run).await?;
    Ok(run_view(&run, &dungeon, &loadout.snapshot))
}

async fn fight<T: Collaborators>(
    tx: &mut T,
    env: &CombatEnv<'_>,
    config: &CombatConfig,
    now: DateTime<Utc>,
) -> Result<FightReport> {
    let mut run = active_run(tx).await?;
    let dungeon = lookup_dungeon(env, &run)?;
    if run.floor_cleared() {
        return Err(Rejection::FloorAlreadyCleared.into());
    }
    let loadout = loadout(tx, env).await?;
    let rng = env.rng()?;

    if !loadout.snapshot.is_alive() {
        let forfeited = fail_run(tx, &mut run, now).await?;
        return Ok(FightReport {
            status: run.status,
            monster: None,
            monster_name: None,
            outcome: None,
            rewards: None,
            floor_cleared: false,
            completion: None,
            forfeiture: Some(forfeited),
            run: run_view(&run, &dungeon, &loadout.snapshot),
            message: "You have no strength left to fight and are carried out of the dungeon."
                .to_string(),
        });
    }

    let floor = dungeon
        .floor(run.current_floor)
        .ok_or(OracleError::FloorNotFound {
            dungeon: dungeon.id,
            floor: run.current_floor,
        })?;
    let monster_id = select_monster(&dungeon, floor, run.monsters_defeated, rng).ok_or_else(|| {
        dangling(format!(
            "{} floor {} has no spawns",
            dungeon.id, run.current_floor
        ))
    })?;
    let monster = env
        .monsters()?
        .monster(monster_id)
        .ok_or_else(|| dangling(format!("{} spawns unknown {monster_id}", dungeon.id)))?;

    let styles = env.styles()?;
    let speed = styles.speed_profile(styles.speed_class(loadout.subtype()));
    let (player, retaliation) =
        loadout.strikes(styles, &run.style, &monster, speed.damage_multiplier);
    let outcome = simulate_fight(
        &monster,
        loadout.snapshot.current_hp(),
        &player,
        &retaliation,
        speed,
        rng,
        config,
    );
    debug!(
        run = %run.id,
        monster = %monster.id,
        rounds = outcome.rounds,
        dealt = outcome.damage_dealt,
        taken = outcome.damage_taken,
        "fight resolved"
    );
    if outcome.stalemate {
        warn!(run = %run.id, monster = %monster.id, rounds = outcome.rounds, "round cap reached");
    }
    tx.set_hp(outcome.player_hp).await?;
    let snapshot = loadout.snapshot.with_current_hp(outcome.player_hp);

    if !outcome.player_won {
        let forfeited = fail_run(tx, &mut run, now).await?;
        let message = if outcome.stalemate {
            format!("The {} outlasted you and you collapse.", monster.name)
        } else {
            format!("You were slain by the {}.", monster.name)
        };
        return Ok(FightReport {
            status: run.status,
            monster: Some(monster.id),
            monster_name: Some(monster.name),
            outcome: Some(outcome),
            rewards: None,
            floor_cleared: false,
            completion: None,
            forfeiture: Some(forfeited),
            run: run_view(&run, &dungeon, &snapshot),
            message,
        });
    }

    let xp = fight_xp(outcome.damage_dealt, config);
    let gold = roll_gold(monster.gold, rng);
    let loot = roll_loot(&monster.loot, floor.loot_multiplier, rng);
    let floor_cleared = run.record_victory(xp, gold as u64, &loot);
    let rewards = FightRewards { xp, gold, loot };

    let mut completion = None;
    let message = if floor_cleared && dungeon.is_final_floor(run.current_floor) {
        let report = complete_run(tx, &dungeon, &mut run, config, rng, now).await?;
        completion = Some(report);
        format!(
            "You defeated the {} and conquered {}!",
            monster.name, dungeon.name
        )
    } else if floor_cleared {
        format!(
            "You defeated the {}. Floor {} is clear.",
            monster.name, run.current_floor
        )
    } else {
        format!("You defeated the {}.", monster.name)
    };
    tx.save_run(&run).await?;

    Ok(FightReport {
        status: run.status,
        monster: Some(monster.id),
        monster_name: Some(monster.name),
        outcome: Some(outcome),
        rewards: Some(rewards),
        floor_cleared,
        completion,
        forfeiture: None,
        run: run_view(&run, &dungeon, &snapshot),
        message,
    })
}

/// Adds the completion bonus and commits the whole ledger to the player.
async fn complete_run<T: Collaborators>(
    tx: &mut T,
    dungeon: &DungeonDefinition,
    run: &mut DungeonRun,
    config: &CombatConfig,
    rng: &dyn RngOracle,
    now: DateTime<Utc>,
) -> Result<CompletionRewards> {
    let bonus_xp = dungeon.completion_xp as u64;
    let bonus_gold = roll_gold(dungeon.completion_gold, rng);
    run.complete(bonus_xp, bonus_gold as u64, now);

    let mut gains = Vec::new();
    for share in distribute_xp(run.xp_accumulated, &run.style.xp_skills, config) {
        gains.push(tx.add_xp(share.skill, share.amount).await?);
    }
    tx.credit_gold(run.gold_accumulated).await?;
    for (item, quantity) in run.loot_accumulated.iter() {
        tx.add_loot(run.kingdom, item, quantity).await?;
    }
    info!(
        run = %run.id,
        xp = run.xp_accumulated,
        gold = run.gold_accumulated,
        items = run.loot_accumulated.len(),
        "run completed"
    );

    Ok(CompletionRewards {
        bonus_xp,
        bonus_gold,
        xp: gains,
        gold: run.gold_accumulated,
        kingdom: run.kingdom,
        loot: ledger_drops(run),
    })
}

/// Death path: the ledger is dropped, energy is lost and the infirmary takes over.
async fn fail_run<T: Collaborators>(
    tx: &mut T,
    run: &mut DungeonRun,
    now: DateTime<Utc>,
) -> Result<Forfeiture> {
    run.fail(now);
    tx.set_energy_on_death().await?;
    tx.admit_player().await?;
    tx.save_run(run).await?;
    Ok(forfeiture(run))
}

async fn advance<T: Collaborators>(tx: &mut T, env: &CombatEnv<'_>) -> Result<RunView> {
    let mut run = active_run(tx).await?;
    let dungeon = lookup_dungeon(env, &run)?;
    if !run.floor_cleared() {
        return Err(Rejection::FloorNotCleared.into());
    }
    if dungeon.is_final_floor(run.current_floor) {
        return Err(Rejection::FinalFloor.into());
    }
    let next = run.current_floor + 1;
    let floor = dungeon.floor(next).ok_or(OracleError::FloorNotFound {
        dungeon: dungeon.id,
        floor: next,
    })?;
    run.advance_floor(floor.monster_count);
    tx.save_run(&run).await?;

    let loadout = loadout(tx, env).await?;
    Ok(run_view(&run, &dungeon, &loadout.snapshot))
}

async fn abandon<T: Collaborators>(
    tx: &mut T,
    env: &CombatEnv<'_>,
    now: DateTime<Utc>,
) -> Result<RunEndReport> {
    let mut run = active_run(tx).await?;
    let dungeon = lookup_dungeon(env, &run)?;
    run.abandon(now);
    tx.save_run(&run).await?;

    let loadout = loadout(tx, env).await?;
    Ok(RunEndReport {
        status: run.status,
        forfeiture: forfeiture(&run),
        run: run_view(&run, &dungeon, &loadout.snapshot),
        message: format!("You leave {} empty-handed.", dungeon.name),
    })
}

async fn eat_food<T: Collaborators>(
    tx: &mut T,
    env: &CombatEnv<'_>,
    item: ItemId,
) -> Result<EatReport> {
    active_run(tx).await?;
    let definition = env
        .items()?
        .definition(item)
        .ok_or(Rejection::UnknownItem(item))?;
    let hp_bonus = definition.healing().ok_or(Rejection::NotFood(item))?;
    if !tx.has_item(item, 1).await {
        return Err(Rejection::ItemNotOwned(item).into());
    }
    let snapshot = loadout(tx, env).await?.snapshot;
    if !snapshot.is_alive() {
        return Err(Rejection::PlayerDead.into());
    }
    if snapshot.current_hp() >= snapshot.max_hp() {
        return Err(Rejection::AlreadyFullHealth.into());
    }

    let heal = heal_amount(snapshot.current_hp(), snapshot.max_hp(), hp_bonus);
    tx.remove_item(item, 1).await?;
    tx.set_hp(heal.hp_after).await?;
    Ok(EatReport {
        item,
        hp_restored: heal.restored,
        player_hp: heal.hp_after,
        player_max_hp: snapshot.max_hp(),
    })
}
