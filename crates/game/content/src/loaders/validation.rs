//! Cross-reference checks over loaded content.

use std::collections::HashSet;

use combat_core::{ItemId, MonsterId, StyleOracle};

use crate::loaders::{ContentBundle, LoadResult};

/// Fails with every problem found, one per line.
pub fn validate(bundle: &ContentBundle) -> LoadResult<()> {
    let issues = issues(bundle);
    if issues.is_empty() {
        return Ok(());
    }
    anyhow::bail!("invalid content:\n  {}", issues.join("\n  "))
}

/// Lists content problems without failing.
pub fn issues(bundle: &ContentBundle) -> Vec<String> {
    let mut issues = Vec::new();

    let mut item_ids = HashSet::new();
    for item in &bundle.items {
        if !item_ids.insert(item.id) {
            issues.push(format!("duplicate item id {}", item.id));
        }
    }
    let mut monster_ids = HashSet::new();
    for monster in &bundle.monsters {
        if !monster_ids.insert(monster.id) {
            issues.push(format!("duplicate monster id {}", monster.id));
        }
    }

    for monster in &bundle.monsters {
        if monster.max_hp == 0 {
            issues.push(format!("{} ({}) has zero max_hp", monster.name, monster.id));
        }
        if monster.gold.min > monster.gold.max {
            issues.push(format!("{} has an inverted gold range", monster.name));
        }
        for entry in &monster.loot {
            check_item(&item_ids, entry.item, &monster.name, &mut issues);
            if entry.min_quantity > entry.max_quantity {
                issues.push(format!(
                    "{} loot {} has min_quantity > max_quantity",
                    monster.name, entry.item
                ));
            }
        }
    }

    for dungeon in &bundle.dungeons {
        if dungeon.floors.is_empty() {
            issues.push(format!("dungeon {} has no floors", dungeon.name));
        }
        if let Some(boss) = dungeon.boss {
            check_monster(&monster_ids, boss, &dungeon.name, &mut issues);
        }
        for (index, floor) in dungeon.floors.iter().enumerate() {
            let context = format!("{} floor {}", dungeon.name, index + 1);
            if floor.monster_count == 0 {
                issues.push(format!("{context} has zero monsters"));
            }
            if floor.spawns.iter().all(|s| s.weight == 0) {
                issues.push(format!("{context} has no spawnable monsters"));
            }
            for spawn in &floor.spawns {
                check_monster(&monster_ids, spawn.monster, &context, &mut issues);
            }
        }
    }

    let styles = &bundle.styles;
    for item in &bundle.items {
        if let Some(weapon) = item.weapon() {
            if styles.styles(weapon.subtype).is_empty() {
                issues.push(format!(
                    "{} uses {} which has no styles",
                    item.name, weapon.subtype
                ));
            }
        }
    }
    for (subtype, profiles) in &styles.styles {
        if profiles.is_empty() {
            issues.push(format!("weapon subtype {subtype} has no styles"));
        }
        for (index, profile) in profiles.iter().enumerate() {
            if profile.xp_skills.is_empty() {
                issues.push(format!("style {subtype}#{index} has no xp_skills"));
            }
        }
    }
    for (class, profile) in &styles.speed_profiles {
        if profile.hits_per_round == 0 {
            issues.push(format!("speed class {class} has zero hits_per_round"));
        }
    }

    issues
}

fn check_item(known: &HashSet<ItemId>, id: ItemId, context: &str, issues: &mut Vec<String>) {
    if !known.contains(&id) {
        issues.push(format!("{context} references unknown {id}"));
    }
}

fn check_monster(
    known: &HashSet<MonsterId>,
    id: MonsterId,
    context: &str,
    issues: &mut Vec<String>,
) {
    if !known.contains(&id) {
        issues.push(format!("{context} references unknown {id}"));
    }
}
