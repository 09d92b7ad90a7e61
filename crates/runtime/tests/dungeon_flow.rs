//! Dungeon run scenarios driven through the public service API.
//!
//! Each won rat fight below takes three rolls: the player's d100, the damage
//! roll (5 kills a rat outright) and the bones drop chance. Floor spawn picks
//! with a single spawn entry draw nothing.
mod common;

use combat_core::{CombatConfig, DungeonId, RunStatus, SkillKind};
use combat_runtime::{DungeonEvent, Event, Rejection, Topic};
use common::*;

const RAT_KILL: [u32; 3] = [1, 5, 1];

#[tokio::test]
async fn clearing_every_floor_commits_the_ledger() {
    let harness = Harness::new(player());
    let dungeons = harness.engine.dungeons();
    let mut events = harness.engine.events().subscribe(Topic::Dungeon);

    let view = dungeons
        .enter_dungeon(PLAYER, CELLAR, CONTROLLED)
        .await
        .expect("enter should succeed");
    assert_eq!(view.current_floor, 1);
    assert_eq!(view.floor_count, 2);
    assert_eq!(view.total_monsters_on_floor, 2);
    assert_eq!(harness.record().profile.energy, 90);

    harness.script(RAT_KILL);
    let first = dungeons.fight_monster(PLAYER).await.expect("fight");
    assert_eq!(first.status, RunStatus::Active);
    assert!(!first.floor_cleared);
    let rewards = first.rewards.expect("a won fight banks rewards");
    assert_eq!(rewards.xp, 20);
    assert_eq!(rewards.gold, 3);

    // nothing reaches the player before completion
    let record = harness.record();
    assert_eq!(record.profile.gold, 0);
    assert_eq!(record.skill_xp(SkillKind::Attack), 0);

    harness.script(RAT_KILL);
    let second = dungeons.fight_monster(PLAYER).await.expect("fight");
    assert!(second.floor_cleared);
    assert!(second.completion.is_none());
    assert_eq!(second.run.xp_accumulated, 40);

    let next = dungeons.next_floor(PLAYER).await.expect("advance");
    assert_eq!(next.current_floor, 2);
    assert_eq!(next.monsters_defeated, 0);
    assert_eq!(next.total_monsters_on_floor, 1);

    harness.script(RAT_KILL);
    let last = dungeons.fight_monster(PLAYER).await.expect("fight");
    assert_eq!(last.status, RunStatus::Completed);
    assert!(last.floor_cleared);

    let completion = last.completion.expect("final floor completes the run");
    assert_eq!(completion.bonus_xp, 40);
    assert_eq!(completion.bonus_gold, 10);
    assert_eq!(completion.gold, 19);
    assert_eq!(completion.kingdom, CELLAR_KINGDOM);
    assert_eq!(last.run.xp_accumulated, 100);

    // 100 XP over three trained skills, remainder dropped, plus 100 / 3 Hit Points
    let record = harness.record();
    assert_eq!(record.skill_xp(SkillKind::Attack), 33);
    assert_eq!(record.skill_xp(SkillKind::Strength), 33);
    assert_eq!(record.skill_xp(SkillKind::Defense), 33);
    assert_eq!(record.skill_xp(SkillKind::HitPoints), 33);
    assert_eq!(record.profile.gold, 19);
    assert_eq!(
        record.item_quantity(BONES),
        0,
        "dungeon loot is stored, not carried"
    );
    assert!(record.active_run().is_none());

    let stored = dungeons
        .stored_loot(PLAYER, CELLAR_KINGDOM)
        .await
        .expect("stored loot");
    assert_eq!(stored, vec![(BONES, 3)]);
    assert!(dungeons.current(PLAYER).await.expect("read").is_none());

    let mut seen = Vec::new();
    while let Ok(event) = events.try_recv() {
        seen.push(event);
    }
    assert_eq!(
        seen,
        vec![
            Event::Dungeon(DungeonEvent::RunStarted {
                player: PLAYER,
                run: view.run,
                dungeon: CELLAR,
            }),
            Event::Dungeon(DungeonEvent::FloorCleared {
                player: PLAYER,
                run: view.run,
                floor: 1,
            }),
            Event::Dungeon(DungeonEvent::FloorAdvanced {
                player: PLAYER,
                run: view.run,
                floor: 2,
            }),
            Event::Dungeon(DungeonEvent::FloorCleared {
                player: PLAYER,
                run: view.run,
                floor: 2,
            }),
            Event::Dungeon(DungeonEvent::RunEnded {
                player: PLAYER,
                run: view.run,
                status: RunStatus::Completed,
            }),
        ]
    );
}

#[tokio::test]
async fn boss_floor_ends_with_the_dungeon_boss() {
    let harness = Harness::new(player());
    let dungeons = harness.engine.dungeons();
    dungeons
        .enter_dungeon(PLAYER, DEN, ACCURATE)
        .await
        .expect("enter should succeed");

    harness.script(RAT_KILL);
    let first = dungeons.fight_monster(PLAYER).await.expect("fight");
    assert_eq!(first.monster, Some(RAT));

    // the king drops nothing, so no loot roll
    harness.script([1, 5]);
    let boss = dungeons.fight_monster(PLAYER).await.expect("fight");
    assert_eq!(boss.monster, Some(RAT_KING));
    assert_eq!(boss.status, RunStatus::Completed);

    // dungeon XP comes from damage dealt, not the monster's interactive reward
    let record = harness.record();
    assert_eq!(record.skill_xp(SkillKind::Attack), 40);
    assert_eq!(record.skill_xp(SkillKind::HitPoints), 13);
}

#[tokio::test]
async fn boss_floor_without_boss_uses_spawn_table() {
    let harness = Harness::new(player());
    let dungeons = harness.engine.dungeons();
    dungeons
        .enter_dungeon(PLAYER, WARREN, ACCURATE)
        .await
        .expect("enter should succeed");

    harness.script(RAT_KILL);
    dungeons.fight_monster(PLAYER).await.expect("fight");
    harness.script(RAT_KILL);
    let last = dungeons.fight_monster(PLAYER).await.expect("fight");
    assert_eq!(last.monster, Some(RAT));
    assert_eq!(last.status, RunStatus::Completed);
}

#[tokio::test]
async fn death_forfeits_everything_and_admits_to_infirmary() {
    let mut record = player();
    record.profile.current_hp = 2;
    let harness = Harness::new(record);
    let dungeons = harness.engine.dungeons();
    let mut events = harness.engine.events().subscribe(Topic::Dungeon);
    let view = dungeons
        .enter_dungeon(PLAYER, CELLAR, ACCURATE)
        .await
        .expect("enter should succeed");

    harness.script(RAT_KILL);
    dungeons.fight_monster(PLAYER).await.expect("fight");

    // two rounds of player misses and rat hits
    harness.script([100, 1, 100, 1]);
    let report = dungeons.fight_monster(PLAYER).await.expect("fight");
    assert_eq!(report.status, RunStatus::Failed);
    let outcome = report.outcome.expect("the fight took place");
    assert!(!outcome.player_won);
    assert!(!outcome.stalemate);
    assert_eq!(outcome.rounds, 2);
    assert_eq!(outcome.player_hp, 0);

    let forfeited = report.forfeiture.expect("death forfeits the ledger");
    assert_eq!(forfeited.xp, 20);
    assert_eq!(forfeited.gold, 3);
    assert_eq!(forfeited.loot.len(), 1);

    let record = harness.record();
    assert_eq!(record.profile.gold, 0);
    assert_eq!(record.skill_xp(SkillKind::Attack), 0);
    assert_eq!(record.profile.energy, 0);
    assert_eq!(record.profile.current_hp, 0);
    assert!(record.profile.in_infirmary);
    assert!(record.stored_loot(CELLAR_KINGDOM).is_empty());

    // the failed run keeps its ledger for auditing
    let run = record.runs.last().expect("run should be recorded");
    assert_eq!(run.status, RunStatus::Failed);
    assert_eq!(run.xp_accumulated, 20);

    let err = dungeons
        .enter_dungeon(PLAYER, CELLAR, ACCURATE)
        .await
        .expect_err("recovering players cannot enter");
    assert_eq!(err.rejection(), Some(&Rejection::InInfirmary));

    let ended = std::iter::from_fn(|| events.try_recv().ok()).last();
    assert_eq!(
        ended,
        Some(Event::Dungeon(DungeonEvent::RunEnded {
            player: PLAYER,
            run: view.run,
            status: RunStatus::Failed,
        }))
    );
}

#[tokio::test]
async fn round_cap_counts_as_a_loss() {
    let harness = Harness::with_config(player(), CombatConfig::default().with_round_cap(2));
    let dungeons = harness.engine.dungeons();
    dungeons
        .enter_dungeon(PLAYER, CELLAR, ACCURATE)
        .await
        .expect("enter should succeed");

    harness.script([100, 100, 100, 100]);
    let report = dungeons.fight_monster(PLAYER).await.expect("fight");
    let outcome = report.outcome.expect("the fight took place");
    assert!(outcome.stalemate);
    assert_eq!(outcome.rounds, 2);
    assert_eq!(report.status, RunStatus::Failed);

    let record = harness.record();
    assert_eq!(record.profile.current_hp, 10);
    assert!(record.profile.in_infirmary);
    assert_eq!(record.profile.energy, 0);
}

#[tokio::test]
async fn fighting_at_zero_hp_fails_the_run_without_a_fight() {
    let harness = Harness::new(player());
    let dungeons = harness.engine.dungeons();
    dungeons
        .enter_dungeon(PLAYER, CELLAR, ACCURATE)
        .await
        .expect("enter should succeed");

    let mut record = harness.record();
    record.profile.current_hp = 0;
    harness.store.put_player(record).await.expect("put player");

    let err = dungeons
        .eat_food(PLAYER, SHRIMP)
        .await
        .expect_err("the dead cannot eat");
    assert_eq!(err.rejection(), Some(&Rejection::PlayerDead));

    let report = dungeons.fight_monster(PLAYER).await.expect("fight");
    assert_eq!(report.status, RunStatus::Failed);
    assert!(report.outcome.is_none());
    assert!(report.monster.is_none());
    assert!(harness.record().profile.in_infirmary);
    assert_eq!(harness.rng.remaining(), 0);
}

#[tokio::test]
async fn abandoning_forfeits_without_penalty() {
    let harness = Harness::new(player());
    let dungeons = harness.engine.dungeons();
    dungeons
        .enter_dungeon(PLAYER, CELLAR, ACCURATE)
        .await
        .expect("enter should succeed");
    harness.script(RAT_KILL);
    dungeons.fight_monster(PLAYER).await.expect("fight");

    let report = dungeons.abandon(PLAYER).await.expect("abandon");
    assert_eq!(report.status, RunStatus::Abandoned);
    assert_eq!(report.forfeiture.xp, 20);
    assert_eq!(report.forfeiture.gold, 3);

    let record = harness.record();
    assert_eq!(record.profile.energy, 90);
    assert!(!record.profile.in_infirmary);
    assert_eq!(record.profile.gold, 0);
    assert!(record.stored_loot(CELLAR_KINGDOM).is_empty());

    let err = dungeons
        .fight_monster(PLAYER)
        .await
        .expect_err("run is over");
    assert_eq!(err.rejection(), Some(&Rejection::NoActiveRun));
    let err = dungeons.abandon(PLAYER).await.expect_err("run is over");
    assert_eq!(err.rejection(), Some(&Rejection::NoActiveRun));
}

#[tokio::test]
async fn floor_progression_is_guarded() {
    let harness = Harness::new(player());
    let dungeons = harness.engine.dungeons();

    let err = dungeons.next_floor(PLAYER).await.expect_err("no run");
    assert_eq!(err.rejection(), Some(&Rejection::NoActiveRun));

    dungeons
        .enter_dungeon(PLAYER, CELLAR, ACCURATE)
        .await
        .expect("enter should succeed");
    let err = dungeons
        .next_floor(PLAYER)
        .await
        .expect_err("floor not clear");
    assert_eq!(err.rejection(), Some(&Rejection::FloorNotCleared));

    harness.script(RAT_KILL);
    dungeons.fight_monster(PLAYER).await.expect("fight");
    harness.script(RAT_KILL);
    dungeons.fight_monster(PLAYER).await.expect("fight");

    let err = dungeons
        .fight_monster(PLAYER)
        .await
        .expect_err("floor already clear");
    assert_eq!(err.rejection(), Some(&Rejection::FloorAlreadyCleared));

    dungeons.next_floor(PLAYER).await.expect("advance");

    // a cleared final floor that was never completed cannot advance
    let mut record = harness.record();
    let run = record
        .runs
        .iter_mut()
        .find(|run| run.is_active())
        .expect("active run");
    run.monsters_defeated = run.total_monsters_on_floor;
    harness.store.put_player(record).await.expect("put player");

    let err = dungeons.next_floor(PLAYER).await.expect_err("final floor");
    assert_eq!(err.rejection(), Some(&Rejection::FinalFloor));
}

#[tokio::test]
async fn eating_between_fights_heals_without_retaliation() {
    let mut record = player();
    record.profile.current_hp = 4;
    let harness = Harness::new(record);
    let dungeons = harness.engine.dungeons();

    let err = dungeons.eat_food(PLAYER, SHRIMP).await.expect_err("no run");
    assert_eq!(err.rejection(), Some(&Rejection::NoActiveRun));

    dungeons
        .enter_dungeon(PLAYER, CELLAR, ACCURATE)
        .await
        .expect("enter should succeed");

    let shrimp = dungeons.eat_food(PLAYER, SHRIMP).await.expect("eat");
    assert_eq!(shrimp.hp_restored, 3);
    assert_eq!(shrimp.player_hp, 7);

    let lobster = dungeons.eat_food(PLAYER, LOBSTER).await.expect("eat");
    assert_eq!(lobster.hp_restored, 3);
    assert_eq!(lobster.player_hp, 10);
    assert_eq!(lobster.player_max_hp, 10);

    let err = dungeons.eat_food(PLAYER, SHRIMP).await.expect_err("full");
    assert_eq!(err.rejection(), Some(&Rejection::AlreadyFullHealth));
    let err = dungeons
        .eat_food(PLAYER, BONES)
        .await
        .expect_err("inedible");
    assert_eq!(err.rejection(), Some(&Rejection::NotFood(BONES)));

    let record = harness.record();
    assert_eq!(record.item_quantity(SHRIMP), 1);
    assert_eq!(record.item_quantity(LOBSTER), 0);
    assert_eq!(record.profile.current_hp, 10);
    assert_eq!(harness.rng.remaining(), 0);
}

#[tokio::test]
async fn entry_rejects_unmet_preconditions() {
    let harness = Harness::new(player());
    let dungeons = harness.engine.dungeons();

    let err = dungeons
        .enter_dungeon(PLAYER, DungeonId(99), ACCURATE)
        .await
        .expect_err("unknown dungeon");
    assert_eq!(
        err.rejection(),
        Some(&Rejection::UnknownDungeon(DungeonId(99)))
    );

    let err = dungeons
        .enter_dungeon(PLAYER, PIT, ACCURATE)
        .await
        .expect_err("level gate");
    assert_eq!(
        err.rejection(),
        Some(&Rejection::LevelTooLow {
            required: 30,
            actual: 1
        })
    );

    let err = dungeons
        .enter_dungeon(PLAYER, CELLAR, 7)
        .await
        .expect_err("unknown style");
    assert!(matches!(
        err.rejection(),
        Some(Rejection::UnknownStyle { index: 7, .. })
    ));
    assert_eq!(harness.record().profile.energy, 100);

    dungeons
        .enter_dungeon(PLAYER, CELLAR, ACCURATE)
        .await
        .expect("enter should succeed");
    let err = dungeons
        .enter_dungeon(PLAYER, DEN, ACCURATE)
        .await
        .expect_err("one run at a time");
    assert_eq!(err.rejection(), Some(&Rejection::DungeonInProgress));
    assert_eq!(harness.record().profile.energy, 90);

    let mut tired = player();
    tired.profile.energy = 9;
    let harness = Harness::new(tired);
    let err = harness
        .engine
        .dungeons()
        .enter_dungeon(PLAYER, CELLAR, ACCURATE)
        .await
        .expect_err("not enough energy");
    assert_eq!(
        err.rejection(),
        Some(&Rejection::NotEnoughEnergy {
            required: 10,
            available: 9
        })
    );
}

#[tokio::test]
async fn style_is_fixed_for_the_run() {
    let harness = Harness::new(player());
    let dungeons = harness.engine.dungeons();
    let view = dungeons
        .enter_dungeon(PLAYER, CELLAR, CONTROLLED)
        .await
        .expect("enter should succeed");
    assert_eq!(view.attack_style_index, CONTROLLED);
    assert_eq!(view.training_style, SkillKind::Attack);

    let run = harness.record().runs.pop().expect("run should be recorded");
    assert_eq!(
        run.style.xp_skills,
        vec![SkillKind::Attack, SkillKind::Strength, SkillKind::Defense]
    );
    assert_eq!(run.dungeon, CELLAR);
}
