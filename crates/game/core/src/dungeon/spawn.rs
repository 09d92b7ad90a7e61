use crate::env::{DungeonDefinition, FloorDefinition, RngOracle};
use crate::state::MonsterId;

/// Chooses the next monster of a floor.
///
/// On a boss floor the last encounter spawns the dungeon boss when one is
/// configured; otherwise (and on every other encounter) a weighted pick from
/// the floor's spawn table. `None` when the table has no positive weight.
pub fn select_monster<R>(
    dungeon: &DungeonDefinition,
    floor: &FloorDefinition,
    monsters_defeated: u32,
    rng: &R,
) -> Option<MonsterId>
where
    R: RngOracle + ?Sized,
{
    let last_encounter = monsters_defeated + 1 == floor.monster_count;
    if floor.boss_floor && last_encounter {
        if let Some(boss) = dungeon.boss {
            return Some(boss);
        }
    }

    let total: u64 = floor.spawns.iter().map(|s| s.weight as u64).sum();
    if total == 0 {
        return None;
    }
    let mut pick = rng.range(0, (total - 1).min(u32::MAX as u64) as u32) as u64;
    for spawn in &floor.spawns {
        let weight = spawn.weight as u64;
        if pick < weight {
            return Some(spawn.monster);
        }
        pick -= weight;
    }
    floor.spawns.last().map(|s| s.monster)
}
