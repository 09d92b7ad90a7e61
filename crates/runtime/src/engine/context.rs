//! Per-action player context and view builders shared by both services.

use combat_core::{
    CombatantSnapshot, DungeonDefinition, DungeonRun, Effectiveness, EncounterSession,
    EquipmentBonuses, ItemId, ItemOracle, LootDrop, MonsterDefinition, OracleError, SkillLevels,
    StrikeInput, StyleOracle, StyleProfile, WeaponData, WeaponSubtype, aggregate,
};

use crate::api::{Forfeiture, Rejection, Result, RunView, SessionView};
use crate::repository::{PlayerProfile, PlayerRecord};

/// A player's snapshot plus the weapon that decides style and speed.
#[derive(Clone, Debug)]
pub(crate) struct Loadout {
    pub snapshot: CombatantSnapshot,
    pub weapon: Option<WeaponData>,
}

impl Loadout {
    /// Sums the bonuses of every equipped item; the first equipped weapon wins.
    pub fn resolve(
        profile: &PlayerProfile,
        levels: SkillLevels,
        equipped: &[ItemId],
        items: &dyn ItemOracle,
    ) -> Result<Self> {
        let mut bonuses = EquipmentBonuses::NONE;
        let mut weapon = None;
        for id in equipped {
            let definition = items.definition(*id).ok_or_else(|| {
                OracleError::DanglingReference(format!("{} equips unknown {id}", profile.id))
            })?;
            bonuses = bonuses + definition.bonuses;
            if weapon.is_none() {
                weapon = definition.weapon().cloned();
            }
        }
        let snapshot = CombatantSnapshot::new(
            levels,
            profile.current_hp,
            profile.base_max_hp,
            bonuses,
        );
        Ok(Self { snapshot, weapon })
    }

    pub fn from_record(record: &PlayerRecord, items: &dyn ItemOracle) -> Result<Self> {
        Self::resolve(
            &record.profile,
            record.skill_levels(),
            &record.equipped_items(),
            items,
        )
    }

    pub fn subtype(&self) -> WeaponSubtype {
        self.weapon
            .as_ref()
            .map(|weapon| weapon.subtype)
            .unwrap_or_default()
    }

    /// Looks up the chosen style for the current weapon.
    pub fn style(&self, styles: &dyn StyleOracle, index: usize) -> Result<StyleProfile> {
        let subtype = self.subtype();
        styles
            .style(subtype, index)
            .ok_or_else(|| Rejection::UnknownStyle { subtype, index }.into())
    }

    /// Player strike against `monster` and the monster's retaliation.
    pub fn strikes(
        &self,
        styles: &dyn StyleOracle,
        style: &StyleProfile,
        monster: &MonsterDefinition,
        speed_multiplier: f64,
    ) -> (StrikeInput, StrikeInput) {
        let stats = aggregate(&self.snapshot, styles.stance_bonus(style.weapon_style));
        let effectiveness = Effectiveness::for_weapon(self.weapon.as_ref(), monster.family);
        let player = StrikeInput::player(
            &stats,
            monster.typed_defense(style.attack_type),
            effectiveness,
            speed_multiplier,
        );
        let retaliation = StrikeInput::monster(monster, stats.defense);
        (player, retaliation)
    }
}

pub(crate) fn dangling(what: impl std::fmt::Display) -> OracleError {
    OracleError::DanglingReference(what.to_string())
}

pub(crate) fn session_view(
    session: &EncounterSession,
    monster: &MonsterDefinition,
    player_max_hp: u32,
) -> SessionView {
    SessionView {
        session: session.id,
        monster: session.monster,
        monster_name: monster.name.clone(),
        status: session.status,
        round: session.round,
        player_hp: session.player_hp,
        player_max_hp,
        monster_hp: session.monster_hp,
        monster_max_hp: monster.max_hp,
        training_style: session.training_style,
        style: session.style.clone(),
    }
}

pub(crate) fn run_view(
    run: &DungeonRun,
    dungeon: &DungeonDefinition,
    snapshot: &CombatantSnapshot,
) -> RunView {
    RunView {
        run: run.id,
        dungeon: run.dungeon,
        dungeon_name: dungeon.name.clone(),
        kingdom: run.kingdom,
        status: run.status,
        current_floor: run.current_floor,
        floor_count: dungeon.floor_count(),
        monsters_defeated: run.monsters_defeated,
        total_monsters_on_floor: run.total_monsters_on_floor,
        floor_cleared: run.floor_cleared(),
        player_hp: snapshot.current_hp(),
        player_max_hp: snapshot.max_hp(),
        xp_accumulated: run.xp_accumulated,
        gold_accumulated: run.gold_accumulated,
        loot_accumulated: ledger_drops(run),
        training_style: run.training_style,
        attack_style_index: run.attack_style_index,
    }
}

pub(crate) fn ledger_drops(run: &DungeonRun) -> Vec<LootDrop> {
    run.loot_accumulated
        .iter()
        .map(|(item, quantity)| LootDrop { item, quantity })
        .collect()
}

/// What a failed or abandoned run leaves behind unapplied.
pub(crate) fn forfeiture(run: &DungeonRun) -> Forfeiture {
    Forfeiture {
        xp: run.xp_accumulated,
        gold: run.gold_accumulated,
        loot: ledger_drops(run),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::ItemOracleImpl;
    use combat_core::{ItemDefinition, ItemKind, PlayerId, StyleTable};

    fn items() -> ItemOracleImpl {
        ItemOracleImpl::from_definitions([
            ItemDefinition::new(
                ItemId(1),
                "Dagger",
                ItemKind::Weapon(WeaponData::new(WeaponSubtype::Dagger)),
            )
            .with_bonuses(EquipmentBonuses::new(4, 3, 0, 0)),
            ItemDefinition::new(ItemId(2), "Shield", ItemKind::Armor)
                .with_bonuses(EquipmentBonuses::new(0, 0, 5, 2)),
        ])
    }

    #[test]
    fn equipped_bonuses_are_summed() {
        let profile = PlayerProfile::new(PlayerId(1), "Ann");
        let loadout = Loadout::resolve(
            &profile,
            SkillLevels::new(10, 10, 10, 10),
            &[ItemId(1), ItemId(2)],
            &items(),
        )
        .unwrap();
        assert_eq!(
            loadout.snapshot.equipment,
            EquipmentBonuses::new(4, 3, 5, 2)
        );
        assert_eq!(loadout.snapshot.max_hp(), 12);
        assert_eq!(loadout.subtype(), WeaponSubtype::Dagger);
    }

    #[test]
    fn unarmed_without_weapon() {
        let profile = PlayerProfile::new(PlayerId(1), "Ann");
        let loadout =
            Loadout::resolve(&profile, SkillLevels::default(), &[ItemId(2)], &items()).unwrap();
        assert_eq!(loadout.subtype(), WeaponSubtype::Unarmed);
        let err = loadout.style(&StyleTable::new(), 0).unwrap_err();
        assert_eq!(
            err.rejection(),
            Some(&Rejection::UnknownStyle {
                subtype: WeaponSubtype::Unarmed,
                index: 0
            })
        );
    }

    #[test]
    fn unknown_equipped_item_is_dangling() {
        let profile = PlayerProfile::new(PlayerId(1), "Ann");
        let err = Loadout::resolve(&profile, SkillLevels::default(), &[ItemId(9)], &items())
            .unwrap_err();
        assert!(err.rejection().is_none());
    }
}
