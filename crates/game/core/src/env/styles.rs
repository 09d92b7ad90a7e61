//! Attack-style table oracle.
//!
//! Maps a weapon subtype to its ordered list of selectable style profiles
//! and to a speed class, and a speed class to hits per round plus damage
//! multiplier. The table is injected, never global, so tests can swap it.

use std::collections::HashMap;

use crate::stats::{SkillKind, StanceBonus};
use crate::style::{
    AttackType, SpeedClass, SpeedProfile, StyleProfile, WeaponStyle, WeaponSubtype,
};

pub trait StyleOracle: Send + Sync {
    /// Profile at `index` for a subtype, if the subtype offers that many.
    fn style(&self, subtype: WeaponSubtype, index: usize) -> Option<StyleProfile>;

    /// All profiles for a subtype, in selection order.
    fn styles(&self, subtype: WeaponSubtype) -> Vec<StyleProfile>;

    fn speed_class(&self, subtype: WeaponSubtype) -> SpeedClass;

    fn speed_profile(&self, class: SpeedClass) -> SpeedProfile;

    fn stance_bonus(&self, style: WeaponStyle) -> StanceBonus {
        StanceBonus::for_style(style)
    }
}

/// In-memory attack-style table.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleTable {
    pub styles: HashMap<WeaponSubtype, Vec<StyleProfile>>,
    pub speed_classes: HashMap<WeaponSubtype, SpeedClass>,
    pub speed_profiles: HashMap<SpeedClass, SpeedProfile>,
    /// Overrides for the default stance deltas.
    pub stances: HashMap<WeaponStyle, StanceBonus>,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_styles(mut self, subtype: WeaponSubtype, profiles: Vec<StyleProfile>) -> Self {
        self.styles.insert(subtype, profiles);
        self
    }

    pub fn with_speed_class(mut self, subtype: WeaponSubtype, class: SpeedClass) -> Self {
        self.speed_classes.insert(subtype, class);
        self
    }

    pub fn with_speed_profile(mut self, class: SpeedClass, profile: SpeedProfile) -> Self {
        self.speed_profiles.insert(class, profile);
        self
    }

    /// Standard speed profiles plus a four-style melee table for every subtype.
    pub fn standard() -> Self {
        use AttackType::*;
        use SkillKind::*;
        use WeaponStyle::*;

        let melee = |primary: AttackType, secondary: AttackType| {
            vec![
                StyleProfile::new(primary, Accurate, vec![Attack]),
                StyleProfile::new(primary, Aggressive, vec![Strength]),
                StyleProfile::new(secondary, Controlled, vec![Attack, Strength, Defense]),
                StyleProfile::new(primary, Defensive, vec![Defense]),
            ]
        };

        let layout = [
            (WeaponSubtype::Unarmed, Crush, Crush, SpeedClass::Normal),
            (WeaponSubtype::Dagger, Stab, Slash, SpeedClass::Fast),
            (WeaponSubtype::Sword, Stab, Slash, SpeedClass::Normal),
            (WeaponSubtype::Scimitar, Slash, Stab, SpeedClass::Fast),
            (WeaponSubtype::Longsword, Slash, Stab, SpeedClass::Normal),
            (WeaponSubtype::Mace, Crush, Stab, SpeedClass::Normal),
            (WeaponSubtype::Warhammer, Crush, Crush, SpeedClass::Slow),
            (WeaponSubtype::Battleaxe, Slash, Crush, SpeedClass::Slow),
            (WeaponSubtype::Spear, Stab, Slash, SpeedClass::Normal),
            (WeaponSubtype::TwoHandedSword, Slash, Crush, SpeedClass::Slow),
        ];

        let mut table = Self::new()
            .with_speed_profile(SpeedClass::Fast, SpeedProfile::new(2, 0.6))
            .with_speed_profile(SpeedClass::Normal, SpeedProfile::NORMAL)
            .with_speed_profile(SpeedClass::Slow, SpeedProfile::new(1, 0.85));
        for (subtype, primary, secondary, speed) in layout {
            table = table
                .with_styles(subtype, melee(primary, secondary))
                .with_speed_class(subtype, speed);
        }
        table
    }
}

impl StyleOracle for StyleTable {
    fn style(&self, subtype: WeaponSubtype, index: usize) -> Option<StyleProfile> {
        self.styles.get(&subtype)?.get(index).cloned()
    }

    fn styles(&self, subtype: WeaponSubtype) -> Vec<StyleProfile> {
        self.styles.get(&subtype).cloned().unwrap_or_default()
    }

    fn speed_class(&self, subtype: WeaponSubtype) -> SpeedClass {
        self.speed_classes
            .get(&subtype)
            .copied()
            .unwrap_or_default()
    }

    fn speed_profile(&self, class: SpeedClass) -> SpeedProfile {
        self.speed_profiles.get(&class).copied().unwrap_or_default()
    }

    fn stance_bonus(&self, style: WeaponStyle) -> StanceBonus {
        self.stances
            .get(&style)
            .copied()
            .unwrap_or_else(|| StanceBonus::for_style(style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn standard_table_covers_every_subtype() {
        let table = StyleTable::standard();
        for subtype in WeaponSubtype::iter() {
            let styles = table.styles(subtype);
            assert_eq!(styles.len(), 4, "{subtype}");
            assert!(styles.iter().all(|s| !s.xp_skills.is_empty()));
        }
    }

    #[test]
    fn out_of_range_index_is_none() {
        let table = StyleTable::standard();
        assert!(table.style(WeaponSubtype::Sword, 4).is_none());
    }

    #[test]
    fn unknown_subtype_defaults_to_normal_speed() {
        let table = StyleTable::new();
        let class = table.speed_class(WeaponSubtype::Dagger);
        assert_eq!(class, SpeedClass::Normal);
        assert_eq!(table.speed_profile(class), SpeedProfile::NORMAL);
    }

    #[test]
    fn stance_overrides_take_precedence() {
        let mut table = StyleTable::new();
        table
            .stances
            .insert(WeaponStyle::Accurate, StanceBonus::new(8, 0, 0));
        assert_eq!(table.stance_bonus(WeaponStyle::Accurate).attack, 8);
        assert_eq!(table.stance_bonus(WeaponStyle::Aggressive).strength, 3);
    }
}
