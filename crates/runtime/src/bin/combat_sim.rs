//! Headless dungeon simulator.
//!
//! Loads content, seeds a demo adventurer and drives one Rat Warren run to
//! completion or death, printing every report as JSON on stdout. Logs go to
//! stderr; tune them with `RUST_LOG`.
use std::sync::Arc;

use anyhow::Result;
use combat_content::ContentFactory;
use combat_core::{DungeonId, ItemId, KingdomId, PlayerId, SkillKind};
use combat_runtime::{
    CombatEngine, CombatStore, EngineConfig, EventBus, FileStore, InMemoryStore, OracleManager,
    PlayerProfile, PlayerRecord, PlayerRepository,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const DEMO_PLAYER: PlayerId = PlayerId(1);
const DEMO_DUNGEON: DungeonId = DungeonId(1);
const DEMO_KINGDOM: KingdomId = KingdomId(1);
const BRONZE_DAGGER: ItemId = ItemId(1);
const LEATHER_BODY: ItemId = ItemId(10);
const FOOD: [ItemId; 3] = [ItemId(22), ItemId(21), ItemId(20)];

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = EngineConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting combat simulator");
    tracing::info!("Content: {}", config.data_dir.display());

    let bundle = ContentFactory::new(&config.data_dir).load_all()?;
    let tunables = bundle.config.clone();
    let mut oracles = OracleManager::from_bundle(bundle);
    if let Some(seed) = config.rng_seed {
        tracing::info!(seed, "Using seeded rng");
        oracles = oracles.with_seed(seed);
    }

    let repository: Arc<dyn PlayerRepository> = match &config.save_dir {
        Some(dir) => {
            tracing::info!("Saving players to {}", dir.display());
            Arc::new(FileStore::new(dir)?)
        }
        None => Arc::new(InMemoryStore::new()),
    };
    let store = Arc::new(CombatStore::new(repository)?);

    let engine = CombatEngine::builder()
        .store(Arc::clone(&store))
        .oracles(oracles)
        .config(tunables)
        .events(EventBus::with_capacity(config.event_buffer))
        .build()?;

    if store.read(DEMO_PLAYER)?.is_none() {
        store.put_player(demo_player()).await?;
    }

    let dungeons = engine.dungeons();
    let run = dungeons.enter_dungeon(DEMO_PLAYER, DEMO_DUNGEON, 0).await?;
    print_json("enter", &run)?;

    while let Some(view) = dungeons.current(DEMO_PLAYER).await? {
        if view.floor_cleared {
            let next = dungeons.next_floor(DEMO_PLAYER).await?;
            print_json("next_floor", &next)?;
            continue;
        }

        if view.player_hp * 2 < view.player_max_hp {
            for food in FOOD {
                match dungeons.eat_food(DEMO_PLAYER, food).await {
                    Ok(report) => {
                        print_json("eat", &report)?;
                        break;
                    }
                    Err(err) if err.rejection().is_some() => continue,
                    Err(err) => return Err(err.into()),
                }
            }
        }

        let report = dungeons.fight_monster(DEMO_PLAYER).await?;
        print_json("fight", &report)?;
    }

    if let Some(record) = store.read(DEMO_PLAYER)? {
        print_json("player", &record.profile)?;
    }
    let stored = dungeons.stored_loot(DEMO_PLAYER, DEMO_KINGDOM).await?;
    print_json("stored_loot", &stored)?;

    tracing::info!("Simulation finished");
    Ok(())
}

fn demo_player() -> PlayerRecord {
    let mut profile = PlayerProfile::new(DEMO_PLAYER, "Adventurer");
    profile.base_max_hp = 30;
    profile.current_hp = 30;

    PlayerRecord::new(profile)
        .with_skill(SkillKind::Attack, 8)
        .with_skill(SkillKind::Strength, 8)
        .with_skill(SkillKind::Defense, 6)
        .with_skill(SkillKind::HitPoints, 12)
        .with_item(BRONZE_DAGGER, 1)
        .with_equipped(BRONZE_DAGGER)
        .with_item(LEATHER_BODY, 1)
        .with_equipped(LEATHER_BODY)
        .with_item(FOOD[0], 2)
        .with_item(FOOD[1], 4)
        .with_item(FOOD[2], 6)
}

fn print_json(label: &str, value: &impl Serialize) -> Result<()> {
    println!("# {label}\n{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
