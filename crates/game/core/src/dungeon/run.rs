use chrono::{DateTime, Utc};

use crate::env::DungeonDefinition;
use crate::loot::LootDrop;
use crate::state::{DungeonId, KingdomId, PlayerId, RunId};
use crate::stats::SkillKind;
use crate::style::StyleProfile;

use super::ledger::LootLedger;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum RunStatus {
    Active,
    Completed,
    Failed,
    Abandoned,
}

impl RunStatus {
    pub fn is_terminal(self) -> bool {
        self != Self::Active
    }

    /// Whether pending rewards were discarded.
    pub fn forfeits_rewards(self) -> bool {
        matches!(self, Self::Failed | Self::Abandoned)
    }
}

/// Persisted multi-floor dungeon run with a pending reward ledger.
///
/// The accumulated XP, gold and loot stay on the record after the run ends
/// for auditing; only a `Completed` run ever has them committed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DungeonRun {
    pub id: RunId,
    pub player: PlayerId,
    pub dungeon: DungeonId,
    pub kingdom: KingdomId,
    /// 1-based.
    pub current_floor: u32,
    pub monsters_defeated: u32,
    pub total_monsters_on_floor: u32,
    pub status: RunStatus,
    pub xp_accumulated: u64,
    pub gold_accumulated: u64,
    pub loot_accumulated: LootLedger,
    pub training_style: SkillKind,
    pub attack_style_index: usize,
    pub style: StyleProfile,
    pub entry_location: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl DungeonRun {
    pub fn enter(
        id: RunId,
        player: PlayerId,
        dungeon: &DungeonDefinition,
        attack_style_index: usize,
        style: StyleProfile,
        entry_location: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let total = dungeon.floor(1).map(|f| f.monster_count).unwrap_or(0);
        Self {
            id,
            player,
            dungeon: dungeon.id,
            kingdom: dungeon.kingdom,
            current_floor: 1,
            monsters_defeated: 0,
            total_monsters_on_floor: total,
            status: RunStatus::Active,
            xp_accumulated: 0,
            gold_accumulated: 0,
            loot_accumulated: LootLedger::new(),
            training_style: style.primary_skill(),
            attack_style_index,
            style,
            entry_location: entry_location.into(),
            started_at: now,
            ended_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == RunStatus::Active
    }

    pub fn floor_cleared(&self) -> bool {
        self.monsters_defeated >= self.total_monsters_on_floor
    }

    /// Banks the rewards of a won fight; returns whether the floor is now clear.
    pub fn record_victory(&mut self, xp: u64, gold: u64, drops: &[LootDrop]) -> bool {
        self.xp_accumulated = self.xp_accumulated.saturating_add(xp);
        self.gold_accumulated = self.gold_accumulated.saturating_add(gold);
        self.loot_accumulated.extend(drops);
        self.monsters_defeated += 1;
        self.floor_cleared()
    }

    /// Moves to the next floor with its configured monster count.
    pub fn advance_floor(&mut self, monster_count: u32) {
        self.current_floor += 1;
        self.monsters_defeated = 0;
        self.total_monsters_on_floor = monster_count;
    }

    /// Adds the completion bonus and marks the run completed.
    pub fn complete(&mut self, bonus_xp: u64, bonus_gold: u64, now: DateTime<Utc>) {
        self.xp_accumulated = self.xp_accumulated.saturating_add(bonus_xp);
        self.gold_accumulated = self.gold_accumulated.saturating_add(bonus_gold);
        self.finish(RunStatus::Completed, now);
    }

    pub fn fail(&mut self, now: DateTime<Utc>) {
        self.finish(RunStatus::Failed, now);
    }

    pub fn abandon(&mut self, now: DateTime<Utc>) {
        self.finish(RunStatus::Abandoned, now);
    }

    fn finish(&mut self, status: RunStatus, now: DateTime<Utc>) {
        self.status = status;
        self.ended_at = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{FloorDefinition, SpawnEntry};
    use crate::loot::GoldRange;
    use crate::state::{ItemId, MonsterId};
    use crate::style::{AttackType, WeaponStyle};

    fn definition() -> DungeonDefinition {
        DungeonDefinition {
            id: DungeonId(4),
            name: "Barrows".into(),
            kingdom: KingdomId(2),
            level_requirement: 0,
            energy_cost: 10,
            floors: vec![
                FloorDefinition::new(2, vec![SpawnEntry::new(MonsterId(1), 1)]),
                FloorDefinition::new(1, vec![SpawnEntry::new(MonsterId(1), 1)]),
            ],
            boss: None,
            completion_xp: 100,
            completion_gold: GoldRange::fixed(50),
        }
    }

    fn run() -> DungeonRun {
        let style = StyleProfile::new(
            AttackType::Stab,
            WeaponStyle::Controlled,
            vec![SkillKind::Attack, SkillKind::Strength, SkillKind::Defense],
        );
        DungeonRun::enter(
            RunId(1),
            PlayerId(1),
            &definition(),
            2,
            style,
            "Canifis",
            Utc::now(),
        )
    }

    #[test]
    fn enters_first_floor() {
        let run = run();
        assert_eq!(run.current_floor, 1);
        assert_eq!(run.total_monsters_on_floor, 2);
        assert_eq!(run.kingdom, KingdomId(2));
        assert_eq!(run.training_style, SkillKind::Attack);
        assert!(!run.floor_cleared());
    }

    #[test]
    fn victories_accumulate_until_floor_clear() {
        let mut run = run();
        let drop = LootDrop {
            item: ItemId(7),
            quantity: 2,
        };
        assert!(!run.record_victory(40, 5, &[drop]));
        assert!(run.record_victory(20, 5, &[drop]));
        assert_eq!(run.xp_accumulated, 60);
        assert_eq!(run.gold_accumulated, 10);
        assert_eq!(run.loot_accumulated.quantity(ItemId(7)), 4);

        run.advance_floor(1);
        assert_eq!(run.current_floor, 2);
        assert_eq!(run.monsters_defeated, 0);
        assert!(!run.floor_cleared());
    }

    #[test]
    fn terminal_states() {
        let mut run = run();
        run.complete(100, 50, Utc::now());
        assert_eq!(run.status, RunStatus::Completed);
        assert_eq!(run.xp_accumulated, 100);
        assert!(!run.status.forfeits_rewards());
        assert!(RunStatus::Abandoned.forfeits_rewards());
        assert!(RunStatus::Failed.is_terminal());
    }
}
