//! Max hit, damage multipliers and HP application.

use crate::config::CombatConfig;
use crate::env::{MonsterFamily, WeaponData};

/// Weapon-versus-family modifier. Player strikes only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Effectiveness {
    #[default]
    Neutral,
    Effective,
    Weak,
}

impl Effectiveness {
    /// Looks the family up in the weapon's lists; "effective" wins over "weak".
    pub fn for_weapon(weapon: Option<&WeaponData>, family: MonsterFamily) -> Self {
        match weapon {
            Some(w) if w.effective_against.contains(&family) => Self::Effective,
            Some(w) if w.weak_against.contains(&family) => Self::Weak,
            _ => Self::Neutral,
        }
    }

    pub fn multiplier(self, config: &CombatConfig) -> f64 {
        match self {
            Self::Neutral => 1.0,
            Self::Effective => config.effective_multiplier,
            Self::Weak => config.weak_multiplier,
        }
    }

    /// Applies the multiplier with floor rounding, keeping at least 1 damage.
    pub fn apply(self, damage: u32, config: &CombatConfig) -> u32 {
        if self == Self::Neutral {
            return damage;
        }
        ((damage as f64 * self.multiplier(config)).floor() as u32).max(1)
    }
}

/// Highest damage a single hit can roll before multipliers.
pub fn calculate_max_hit(strength: i32, strength_bonus: i32, config: &CombatConfig) -> u32 {
    let base = (strength as i64 + strength_bonus as i64).max(0) as f64;
    (base * config.max_hit_factor).floor() as u32
}

/// Applies a weapon speed multiplier with rounding; 1.0 is a no-op.
pub fn apply_speed(damage: u32, multiplier: f64) -> u32 {
    if multiplier == 1.0 {
        return damage;
    }
    ((damage as f64 * multiplier).round() as u32).max(1)
}

/// Remaining HP after taking damage, saturating at zero.
pub fn apply_damage(hp: u32, damage: u32) -> u32 {
    hp.saturating_sub(damage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::WeaponSubtype;

    #[test]
    fn strength_twenty_caps_at_ten() {
        let config = CombatConfig::default();
        assert_eq!(calculate_max_hit(20, 0, &config), 10);
        assert_eq!(calculate_max_hit(21, 0, &config), 10);
        assert_eq!(calculate_max_hit(1, 0, &config), 0);
    }

    #[test]
    fn effectiveness_prefers_effective_list() {
        let mut weapon = WeaponData::new(WeaponSubtype::Mace);
        weapon.effective_against.push(MonsterFamily::Undead);
        weapon.weak_against.push(MonsterFamily::Undead);
        weapon.weak_against.push(MonsterFamily::Beast);

        assert_eq!(
            Effectiveness::for_weapon(Some(&weapon), MonsterFamily::Undead),
            Effectiveness::Effective
        );
        assert_eq!(
            Effectiveness::for_weapon(Some(&weapon), MonsterFamily::Beast),
            Effectiveness::Weak
        );
        assert_eq!(
            Effectiveness::for_weapon(None, MonsterFamily::Beast),
            Effectiveness::Neutral
        );
    }

    #[test]
    fn multipliers_floor_and_round() {
        let config = CombatConfig::default();
        assert_eq!(Effectiveness::Effective.apply(5, &config), 7);
        assert_eq!(Effectiveness::Weak.apply(5, &config), 2);
        assert_eq!(Effectiveness::Weak.apply(1, &config), 1);
        assert_eq!(apply_speed(5, 0.85), 4);
        assert_eq!(apply_speed(3, 0.5), 2);
        assert_eq!(apply_speed(1, 0.1), 1);
    }

    #[test]
    fn damage_saturates() {
        assert_eq!(apply_damage(5, 9), 0);
        assert_eq!(apply_damage(9, 5), 4);
    }
}
