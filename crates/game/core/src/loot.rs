//! Gold and loot-table rolls.

use crate::env::{LootEntry, RngOracle};
use crate::state::ItemId;

/// Inclusive gold drop range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoldRange {
    pub min: u32,
    pub max: u32,
}

impl GoldRange {
    pub const NONE: Self = Self { min: 0, max: 0 };

    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub const fn fixed(amount: u32) -> Self {
        Self::new(amount, amount)
    }
}

/// One rolled drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootDrop {
    pub item: ItemId,
    pub quantity: u32,
}

pub fn roll_gold<R>(range: GoldRange, rng: &R) -> u32
where
    R: RngOracle + ?Sized,
{
    if range.max == 0 {
        return 0;
    }
    rng.range(range.min, range.max)
}

/// Rolls every entry independently.
///
/// Each entry's chance is scaled by `multiplier` and capped at 100%. Zero
/// quantities are dropped from the result.
pub fn roll_loot<R>(entries: &[LootEntry], multiplier: f64, rng: &R) -> Vec<LootDrop>
where
    R: RngOracle + ?Sized,
{
    entries
        .iter()
        .filter_map(|entry| {
            let chance = (entry.chance * multiplier).min(100.0);
            if !rng.percent_chance(chance) {
                return None;
            }
            let quantity = rng.range(entry.min_quantity, entry.max_quantity);
            (quantity > 0).then_some(LootDrop {
                item: entry.item,
                quantity,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, ScriptedRng};

    #[test]
    fn empty_gold_range_never_rolls() {
        let rng = ScriptedRng::new([]);
        assert_eq!(roll_gold(GoldRange::NONE, &rng), 0);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn multiplier_caps_at_certain_drop() {
        let rng = PcgRng::new(11);
        let entries = [LootEntry::new(ItemId(4), 1, 1, 60.0)];
        for _ in 0..100 {
            let drops = roll_loot(&entries, 2.0, &rng);
            assert_eq!(
                drops,
                vec![LootDrop {
                    item: ItemId(4),
                    quantity: 1,
                }]
            );
        }
    }

    #[test]
    fn entries_roll_independently() {
        // d100 rolls: first entry 30 ≤ 50 drops, second 80 > 50 misses.
        let rng = ScriptedRng::new([30, 3, 80]);
        let entries = [
            LootEntry::new(ItemId(1), 1, 5, 50.0),
            LootEntry::new(ItemId(2), 1, 1, 50.0),
        ];
        let drops = roll_loot(&entries, 1.0, &rng);
        assert_eq!(
            drops,
            vec![LootDrop {
                item: ItemId(1),
                quantity: 3,
            }]
        );
    }
}
