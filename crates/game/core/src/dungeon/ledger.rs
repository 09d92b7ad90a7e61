use std::collections::BTreeMap;

use crate::loot::LootDrop;
use crate::state::ItemId;

/// Pending loot of a run: item → quantity. Quantities only grow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LootLedger(BTreeMap<ItemId, u32>);

impl LootLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: ItemId, quantity: u32) {
        if quantity == 0 {
            return;
        }
        let slot = self.0.entry(item).or_insert(0);
        *slot = slot.saturating_add(quantity);
    }

    pub fn extend(&mut self, drops: &[LootDrop]) {
        for drop in drops {
            self.add(drop.item, drop.quantity);
        }
    }

    pub fn quantity(&self, item: ItemId) -> u32 {
        self.0.get(&item).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, u32)> + '_ {
        self.0.iter().map(|(item, qty)| (*item, *qty))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantities_accumulate() {
        let mut ledger = LootLedger::new();
        ledger.add(ItemId(1), 2);
        ledger.extend(&[
            LootDrop {
                item: ItemId(1),
                quantity: 3,
            },
            LootDrop {
                item: ItemId(2),
                quantity: 1,
            },
        ]);
        ledger.add(ItemId(3), 0);

        assert_eq!(ledger.quantity(ItemId(1)), 5);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.quantity(ItemId(3)), 0);
    }
}
