//! Shared fixtures for the runtime integration tests.
//!
//! Content is built in code so each test controls every number it asserts
//! on, and rolls come from a [`ScriptedRng`] the test feeds as it goes.
#![allow(dead_code)]

use std::sync::Arc;

use combat_core::{
    CombatConfig, ConsumableData, DungeonDefinition, DungeonId, EquipmentBonuses, FloorDefinition,
    GoldRange, ItemDefinition, ItemId, ItemKind, KingdomId, LootEntry, MonsterDefinition,
    MonsterFamily, MonsterId, PlayerId, ScriptedRng, SpawnEntry, StyleTable, WeaponData,
    WeaponSubtype,
};
use combat_runtime::{
    CombatEngine, CombatStore, DungeonOracleImpl, EventBus, InMemoryStore, ItemOracleImpl,
    MonsterOracleImpl, OracleManager, PlayerProfile, PlayerRecord, PlayerRepository,
};

pub const PLAYER: PlayerId = PlayerId(1);

pub const SWORD: ItemId = ItemId(1);
/// Fast weapon, effective against goblinoids.
pub const DAGGER: ItemId = ItemId(2);
/// Slow weapon, weak against goblinoids.
pub const WARHAMMER: ItemId = ItemId(3);
pub const SHRIMP: ItemId = ItemId(20);
pub const LOBSTER: ItemId = ItemId(22);
pub const BONES: ItemId = ItemId(30);
pub const GEM: ItemId = ItemId(31);

/// 5 HP, always drops 3 gold and one bones.
pub const RAT: MonsterId = MonsterId(1);
/// Hits for up to 10 and is almost impossible to hit.
pub const BRUTE: MonsterId = MonsterId(2);
pub const RAT_KING: MonsterId = MonsterId(3);
/// Gated at combat level 20.
pub const OGRE: MonsterId = MonsterId(4);
/// Goblinoid with 10 HP and a 60% gem drop.
pub const GOBLIN: MonsterId = MonsterId(5);

/// Two floors of rats: two on floor 1, one on floor 2.
pub const CELLAR: DungeonId = DungeonId(1);
/// One boss floor of two encounters ending in the Rat King.
pub const DEN: DungeonId = DungeonId(2);
/// Gated at combat level 30.
pub const PIT: DungeonId = DungeonId(3);
/// Boss floor without a configured boss.
pub const WARREN: DungeonId = DungeonId(4);
/// One goblin on a floor that doubles drop chances.
pub const VAULT: DungeonId = DungeonId(5);

pub const CELLAR_KINGDOM: KingdomId = KingdomId(7);
pub const VAULT_KINGDOM: KingdomId = KingdomId(11);

/// Accurate stab; trains Attack.
pub const ACCURATE: usize = 0;
/// Slash; trains Attack, Strength and Defense.
pub const CONTROLLED: usize = 2;

pub fn items() -> Vec<ItemDefinition> {
    vec![
        ItemDefinition::new(
            SWORD,
            "Training Sword",
            ItemKind::Weapon(WeaponData::new(WeaponSubtype::Sword)),
        )
        .with_bonuses(EquipmentBonuses::new(0, 9, 0, 0)),
        ItemDefinition::new(
            DAGGER,
            "Goblin Bane",
            ItemKind::Weapon(WeaponData {
                effective_against: vec![MonsterFamily::Goblinoid],
                ..WeaponData::new(WeaponSubtype::Dagger)
            }),
        )
        .with_bonuses(EquipmentBonuses::new(0, 9, 0, 0)),
        ItemDefinition::new(
            WARHAMMER,
            "Blunt Warhammer",
            ItemKind::Weapon(WeaponData {
                weak_against: vec![MonsterFamily::Goblinoid],
                ..WeaponData::new(WeaponSubtype::Warhammer)
            }),
        )
        .with_bonuses(EquipmentBonuses::new(0, 9, 0, 0)),
        ItemDefinition::new(
            SHRIMP,
            "Shrimp",
            ItemKind::Consumable(ConsumableData { hp_bonus: 3 }),
        ),
        ItemDefinition::new(
            LOBSTER,
            "Lobster",
            ItemKind::Consumable(ConsumableData { hp_bonus: 12 }),
        ),
        ItemDefinition::new(BONES, "Bones", ItemKind::Material),
        ItemDefinition::new(GEM, "Rough Gem", ItemKind::Material),
    ]
}

pub fn monsters() -> Vec<MonsterDefinition> {
    vec![
        MonsterDefinition::new(RAT, "Rat", 1, 2, 1, 5)
            .with_family(MonsterFamily::Beast)
            .with_gold(GoldRange::fixed(3))
            .with_loot(vec![LootEntry::new(BONES, 1, 1, 100.0)]),
        MonsterDefinition::new(BRUTE, "Brute", 40, 20, 40, 50),
        MonsterDefinition::new(RAT_KING, "Rat King", 1, 2, 1, 5).with_experience(100),
        MonsterDefinition::new(OGRE, "Ogre", 30, 30, 30, 80).with_level_requirement(20),
        MonsterDefinition::new(GOBLIN, "Goblin", 1, 2, 1, 10)
            .with_family(MonsterFamily::Goblinoid)
            .with_loot(vec![LootEntry::new(GEM, 1, 1, 60.0)]),
    ]
}

pub fn dungeons() -> Vec<DungeonDefinition> {
    let rats = || vec![SpawnEntry::new(RAT, 1)];
    vec![
        DungeonDefinition {
            id: CELLAR,
            name: "Cellar".into(),
            kingdom: CELLAR_KINGDOM,
            level_requirement: 0,
            energy_cost: 10,
            floors: vec![FloorDefinition::new(2, rats()), FloorDefinition::new(1, rats())],
            boss: None,
            completion_xp: 40,
            completion_gold: GoldRange::fixed(10),
        },
        DungeonDefinition {
            id: DEN,
            name: "Rat Den".into(),
            kingdom: KingdomId(8),
            level_requirement: 0,
            energy_cost: 10,
            floors: vec![FloorDefinition::new(2, rats()).with_boss()],
            boss: Some(RAT_KING),
            completion_xp: 0,
            completion_gold: GoldRange::NONE,
        },
        DungeonDefinition {
            id: PIT,
            name: "Deep Pit".into(),
            kingdom: KingdomId(9),
            level_requirement: 30,
            energy_cost: 20,
            floors: vec![FloorDefinition::new(1, rats())],
            boss: None,
            completion_xp: 0,
            completion_gold: GoldRange::NONE,
        },
        DungeonDefinition {
            id: WARREN,
            name: "Warren".into(),
            kingdom: KingdomId(10),
            level_requirement: 0,
            energy_cost: 10,
            floors: vec![FloorDefinition::new(2, rats()).with_boss()],
            boss: None,
            completion_xp: 0,
            completion_gold: GoldRange::NONE,
        },
        DungeonDefinition {
            id: VAULT,
            name: "Goblin Vault".into(),
            kingdom: VAULT_KINGDOM,
            level_requirement: 0,
            energy_cost: 10,
            floors: vec![
                FloorDefinition::new(1, vec![SpawnEntry::new(GOBLIN, 1)]).with_loot_multiplier(2.0),
            ],
            boss: None,
            completion_xp: 0,
            completion_gold: GoldRange::NONE,
        },
    ]
}

/// Level 1 everywhere, 10/10 HP, 100 energy, a sword and some food.
pub fn player() -> PlayerRecord {
    PlayerRecord::new(PlayerProfile::new(PLAYER, "Tester"))
        .with_item(SWORD, 1)
        .with_equipped(SWORD)
        .with_item(SHRIMP, 2)
        .with_item(LOBSTER, 1)
}

/// Same adventurer wielding `weapon` instead of the sword.
pub fn wielding(weapon: ItemId) -> PlayerRecord {
    PlayerRecord::new(PlayerProfile::new(PLAYER, "Tester"))
        .with_item(weapon, 1)
        .with_equipped(weapon)
        .with_item(SHRIMP, 2)
}

pub struct Harness {
    pub engine: CombatEngine,
    pub store: Arc<CombatStore>,
    pub rng: Arc<ScriptedRng>,
}

impl Harness {
    pub fn new(record: PlayerRecord) -> Self {
        Self::with_repository(
            Arc::new(InMemoryStore::with_players([record])),
            CombatConfig::default(),
        )
    }

    pub fn with_config(record: PlayerRecord, config: CombatConfig) -> Self {
        Self::with_repository(Arc::new(InMemoryStore::with_players([record])), config)
    }

    pub fn with_repository(repo: Arc<dyn PlayerRepository>, config: CombatConfig) -> Self {
        let rng = Arc::new(ScriptedRng::new([]));
        let oracles = OracleManager::new(
            Arc::new(ItemOracleImpl::from_definitions(items())),
            Arc::new(MonsterOracleImpl::from_definitions(monsters())),
            Arc::new(DungeonOracleImpl::from_definitions(dungeons())),
            Arc::new(StyleTable::standard()),
        )
        .with_rng(rng.clone());
        let store = Arc::new(CombatStore::new(repo).expect("store should open"));
        let engine = CombatEngine::builder()
            .store(Arc::clone(&store))
            .oracles(oracles)
            .config(config)
            .events(EventBus::new())
            .build()
            .expect("engine should build");
        Self { engine, store, rng }
    }

    /// Queues the next raw rolls: d100s, damage rolls and loot chances in
    /// the order the rules draw them.
    pub fn script(&self, rolls: impl IntoIterator<Item = u32>) {
        self.rng.push(rolls);
    }

    pub fn record(&self) -> PlayerRecord {
        self.store
            .read(PLAYER)
            .expect("store should read")
            .expect("player should exist")
    }
}
