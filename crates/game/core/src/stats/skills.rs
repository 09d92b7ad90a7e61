//! Combat skills and level bookkeeping views.

/// Skills that combat reads or rewards.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SkillKind {
    Attack,
    Strength,
    Defense,
    HitPoints,
}

impl SkillKind {
    /// Level a skill record starts at when first created.
    pub const STARTING_LEVEL: u32 = 1;
}

/// Base levels of the combat skills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillLevels {
    pub attack: u32,
    pub strength: u32,
    pub defense: u32,
    pub hit_points: u32,
}

impl SkillLevels {
    pub const fn new(attack: u32, strength: u32, defense: u32, hit_points: u32) -> Self {
        Self {
            attack,
            strength,
            defense,
            hit_points,
        }
    }

    pub fn level(&self, skill: SkillKind) -> u32 {
        match skill {
            SkillKind::Attack => self.attack,
            SkillKind::Strength => self.strength,
            SkillKind::Defense => self.defense,
            SkillKind::HitPoints => self.hit_points,
        }
    }

    pub fn set_level(&mut self, skill: SkillKind, level: u32) {
        let slot = match skill {
            SkillKind::Attack => &mut self.attack,
            SkillKind::Strength => &mut self.strength,
            SkillKind::Defense => &mut self.defense,
            SkillKind::HitPoints => &mut self.hit_points,
        };
        *slot = level;
    }
}

impl Default for SkillLevels {
    fn default() -> Self {
        let start = SkillKind::STARTING_LEVEL;
        Self::new(start, start, start, start)
    }
}

/// Combat level used by monster and dungeon level gates.
///
/// `floor((attack + strength + defense + hit_points) / 4)`
pub fn combat_level(levels: &SkillLevels) -> u32 {
    (levels.attack + levels.strength + levels.defense + levels.hit_points) / 4
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn skill_names_are_snake_case() {
        assert_eq!(SkillKind::HitPoints.to_string(), "hit_points");
        assert_eq!(
            SkillKind::from_str("Strength").unwrap(),
            SkillKind::Strength
        );
    }

    #[test]
    fn combat_level_floors_average() {
        let levels = SkillLevels::new(10, 11, 12, 10);
        assert_eq!(combat_level(&levels), 10);
        assert_eq!(combat_level(&SkillLevels::default()), 1);
    }

    #[test]
    fn set_level_targets_one_skill() {
        let mut levels = SkillLevels::default();
        levels.set_level(SkillKind::Defense, 40);
        assert_eq!(levels.level(SkillKind::Defense), 40);
        assert_eq!(levels.level(SkillKind::Attack), 1);
    }
}
