//! Combatant snapshot and effective stat aggregation.

use super::bonus::{EquipmentBonuses, StanceBonus};
use super::skills::SkillLevels;

/// Point-in-time view of a player for one strike or exchange.
///
/// Not persisted; rebuilt from skills, HP and equipped items on every action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantSnapshot {
    pub skills: SkillLevels,
    current_hp: u32,
    base_max_hp: u32,
    pub equipment: EquipmentBonuses,
}

impl CombatantSnapshot {
    /// Builds a snapshot, clamping current HP into `[0, max_hp]`.
    pub fn new(
        skills: SkillLevels,
        current_hp: u32,
        base_max_hp: u32,
        equipment: EquipmentBonuses,
    ) -> Self {
        let mut snapshot = Self {
            skills,
            current_hp,
            base_max_hp,
            equipment,
        };
        snapshot.current_hp = snapshot.current_hp.min(snapshot.max_hp());
        snapshot
    }

    /// Base max HP plus equipment HP bonus, never below 1.
    pub fn max_hp(&self) -> u32 {
        (self.base_max_hp as i64 + self.equipment.hp as i64).max(1) as u32
    }

    /// Same combatant at a different HP, clamped like [`new`](Self::new).
    pub fn with_current_hp(mut self, hp: u32) -> Self {
        self.current_hp = hp.min(self.max_hp());
        self
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }
}

/// Numbers the strike resolver consumes for the player side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectiveStats {
    /// Attack level + stance.
    pub attack: i32,
    /// Strength level + stance.
    pub strength: i32,
    /// Defense level + equipment defense + stance.
    pub defense: i32,
    /// Equipment attack bonus (hit-chance term).
    pub attack_bonus: i32,
    /// Equipment strength bonus (max-hit term).
    pub strength_bonus: i32,
}

/// Aggregates a combatant's effective stats under a stance. Pure read.
pub fn aggregate(snapshot: &CombatantSnapshot, stance: StanceBonus) -> EffectiveStats {
    let skills = &snapshot.skills;
    let equipment = &snapshot.equipment;
    EffectiveStats {
        attack: skills.attack as i32 + stance.attack,
        strength: skills.strength as i32 + stance.strength,
        defense: skills.defense as i32 + equipment.defense + stance.defense,
        attack_bonus: equipment.attack,
        strength_bonus: equipment.strength,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::WeaponStyle;

    #[test]
    fn aggregates_levels_equipment_and_stance() {
        let snapshot = CombatantSnapshot::new(
            SkillLevels::new(20, 15, 10, 12),
            100,
            120,
            EquipmentBonuses::new(8, 6, 12, 0),
        );
        let stats = aggregate(&snapshot, StanceBonus::for_style(WeaponStyle::Accurate));

        assert_eq!(stats.attack, 23);
        assert_eq!(stats.strength, 15);
        assert_eq!(stats.defense, 22);
        assert_eq!(stats.attack_bonus, 8);
        assert_eq!(stats.strength_bonus, 6);
    }

    #[test]
    fn current_hp_is_clamped_to_max() {
        let snapshot = CombatantSnapshot::new(
            SkillLevels::default(),
            500,
            100,
            EquipmentBonuses::new(0, 0, 0, 10),
        );
        assert_eq!(snapshot.max_hp(), 110);
        assert_eq!(snapshot.current_hp(), 110);
    }

    #[test]
    fn negative_hp_bonus_keeps_max_positive() {
        let snapshot = CombatantSnapshot::new(
            SkillLevels::default(),
            5,
            10,
            EquipmentBonuses::new(0, 0, 0, -50),
        );
        assert_eq!(snapshot.max_hp(), 1);
        assert_eq!(snapshot.current_hp(), 1);
    }
}
