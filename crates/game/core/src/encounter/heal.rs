/// Result of eating one unit of food.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealOutcome {
    pub restored: u32,
    pub hp_after: u32,
}

/// Heals toward `max_hp`; the restored amount is capped at the deficit.
pub fn heal_amount(current_hp: u32, max_hp: u32, hp_bonus: u32) -> HealOutcome {
    let deficit = max_hp.saturating_sub(current_hp);
    let restored = hp_bonus.min(deficit);
    HealOutcome {
        restored,
        hp_after: current_hp + restored,
    }
}
