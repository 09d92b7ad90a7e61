use crate::config::CombatConfig;
use crate::stats::SkillKind;

/// XP granted to one skill when a run is committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XpShare {
    pub skill: SkillKind,
    pub amount: u64,
}

/// Dungeon XP for one won fight.
pub fn fight_xp(damage_dealt: u32, config: &CombatConfig) -> u64 {
    damage_dealt as u64 * config.dungeon_xp_per_damage as u64
}

/// Splits combat XP evenly across `xp_skills` (floor division, remainder
/// dropped) and adds Hit Points XP of `total / divisor`.
///
/// Shares for the same skill are merged, preserving first-seen order.
pub fn distribute_xp(total: u64, xp_skills: &[SkillKind], config: &CombatConfig) -> Vec<XpShare> {
    let mut shares: Vec<XpShare> = Vec::with_capacity(xp_skills.len() + 1);
    let mut credit = |skill: SkillKind, amount: u64| {
        match shares.iter_mut().find(|share| share.skill == skill) {
            Some(share) => share.amount += amount,
            None => shares.push(XpShare { skill, amount }),
        }
    };

    if !xp_skills.is_empty() {
        let each = total / xp_skills.len() as u64;
        for skill in xp_skills {
            credit(*skill, each);
        }
    }
    let divisor = config.hit_points_xp_divisor.max(1) as u64;
    credit(SkillKind::HitPoints, total / divisor);

    shares.retain(|share| share.amount > 0);
    shares
}
