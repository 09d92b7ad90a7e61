//! Collaborator contracts backed by the transaction's working copy.

use async_trait::async_trait;
use combat_core::{
    DungeonRun, EncounterLogEntry, EncounterSession, ItemId, KingdomId, MonsterDefinition,
    RngOracle, RunId, SessionId, SkillKind, SkillLevels, roll_gold, roll_loot,
};

use super::{
    CombatRecords, DungeonLootStore, EnergyService, InfirmaryService, InventoryService,
    LootGrant, LootService, PlayerRecords, SkillService,
};
use crate::api::{Rejection, Result, RuntimeError, SkillGain};
use crate::repository::{InventorySlot, PlayerProfile, PlayerTx, level_for_xp};

#[async_trait]
impl EnergyService for PlayerTx {
    async fn has_energy(&self, amount: u32) -> bool {
        self.record().profile.energy >= amount
    }

    async fn consume_energy(&mut self, amount: u32) -> Result<()> {
        let profile = &mut self.record_mut().profile;
        if profile.energy < amount {
            return Err(Rejection::NotEnoughEnergy {
                required: amount,
                available: profile.energy,
            }
            .into());
        }
        profile.energy -= amount;
        Ok(())
    }

    async fn set_energy_on_death(&mut self) -> Result<()> {
        self.record_mut().profile.energy = 0;
        Ok(())
    }
}

#[async_trait]
impl InventoryService for PlayerTx {
    async fn has_item(&self, item: ItemId, quantity: u32) -> bool {
        self.record().item_quantity(item) >= quantity
    }

    async fn remove_item(&mut self, item: ItemId, quantity: u32) -> Result<()> {
        let inventory = &mut self.record_mut().inventory;
        let Some(slot) = inventory.get_mut(&item) else {
            return Err(Rejection::ItemNotOwned(item).into());
        };
        if slot.quantity < quantity {
            return Err(Rejection::ItemNotOwned(item).into());
        }
        slot.quantity -= quantity;
        if slot.quantity == 0 {
            inventory.remove(&item);
        }
        Ok(())
    }

    async fn add_item(&mut self, item: ItemId, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Ok(());
        }
        let slot = self
            .record_mut()
            .inventory
            .entry(item)
            .or_insert(InventorySlot {
                quantity: 0,
                equipped: false,
            });
        slot.quantity = slot.quantity.saturating_add(quantity);
        Ok(())
    }

    async fn equipped_items(&self) -> Vec<ItemId> {
        self.record().equipped_items()
    }
}

#[async_trait]
impl LootService for PlayerTx {
    async fn roll_and_give_loot(
        &mut self,
        monster: &MonsterDefinition,
        rng: &dyn RngOracle,
    ) -> Result<LootGrant> {
        let gold = roll_gold(monster.gold, rng);
        let items = roll_loot(&monster.loot, 1.0, rng);

        self.credit_gold(gold as u64).await?;
        for drop in &items {
            self.add_item(drop.item, drop.quantity).await?;
        }
        Ok(LootGrant { gold, items })
    }
}

#[async_trait]
impl SkillService for PlayerTx {
    async fn add_xp(&mut self, skill: SkillKind, amount: u64) -> Result<SkillGain> {
        let record = self.record_mut().skills.entry(skill).or_default();
        let before = record.level;
        record.xp = record.xp.saturating_add(amount);
        record.level = record.level.max(level_for_xp(record.xp));
        Ok(SkillGain {
            skill,
            xp: amount,
            levels_gained: record.level - before,
            new_level: record.level,
        })
    }

    async fn level(&self, skill: SkillKind) -> u32 {
        self.record().skill_level(skill)
    }

    async fn levels(&self) -> SkillLevels {
        self.record().skill_levels()
    }
}

#[async_trait]
impl InfirmaryService for PlayerTx {
    async fn admit_player(&mut self) -> Result<()> {
        self.record_mut().profile.in_infirmary = true;
        Ok(())
    }
}

#[async_trait]
impl DungeonLootStore for PlayerTx {
    async fn add_loot(&mut self, kingdom: KingdomId, item: ItemId, quantity: u32) -> Result<()> {
        let stored = self
            .record_mut()
            .dungeon_loot
            .entry(kingdom)
            .or_default()
            .entry(item)
            .or_insert(0);
        *stored = stored.saturating_add(quantity);
        Ok(())
    }
}

#[async_trait]
impl PlayerRecords for PlayerTx {
    async fn profile(&self) -> PlayerProfile {
        self.record().profile.clone()
    }

    async fn set_hp(&mut self, hp: u32) -> Result<()> {
        self.record_mut().profile.current_hp = hp;
        Ok(())
    }

    async fn credit_gold(&mut self, amount: u64) -> Result<()> {
        let profile = &mut self.record_mut().profile;
        profile.gold = profile.gold.saturating_add(amount);
        Ok(())
    }
}

#[async_trait]
impl CombatRecords for PlayerTx {
    async fn active_session(&self) -> Option<EncounterSession> {
        self.record().active_session().cloned()
    }

    async fn active_run(&self) -> Option<DungeonRun> {
        self.record().active_run().cloned()
    }

    async fn next_session_id(&mut self) -> SessionId {
        self.allocate_session_id()
    }

    async fn next_run_id(&mut self) -> RunId {
        self.allocate_run_id()
    }

    async fn save_session(&mut self, session: &EncounterSession) -> Result<()> {
        if session.player != self.player() {
            return Err(RuntimeError::invariant(format!(
                "{} written through the transaction of {}",
                session.id,
                self.player()
            )));
        }
        let sessions = &mut self.record_mut().sessions;
        match sessions.iter_mut().find(|s| s.id == session.id) {
            Some(existing) => *existing = session.clone(),
            None => sessions.push(session.clone()),
        }
        Ok(())
    }

    async fn append_log(
        &mut self,
        session: SessionId,
        entries: &[EncounterLogEntry],
    ) -> Result<()> {
        self.record_mut()
            .logs
            .entry(session)
            .or_default()
            .extend_from_slice(entries);
        Ok(())
    }

    async fn save_run(&mut self, run: &DungeonRun) -> Result<()> {
        if run.player != self.player() {
            return Err(RuntimeError::invariant(format!(
                "{} written through the transaction of {}",
                run.id,
                self.player()
            )));
        }
        let runs = &mut self.record_mut().runs;
        match runs.iter_mut().find(|r| r.id == run.id) {
            Some(existing) => *existing = run.clone(),
            None => runs.push(run.clone()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use combat_core::PlayerId;

    use super::*;
    use crate::repository::{CombatStore, InMemoryStore, PlayerRecord};

    async fn tx() -> (CombatStore, PlayerTx) {
        let record = PlayerRecord::new(PlayerProfile::new(PlayerId(1), "Ann"))
            .with_skill(SkillKind::Attack, 3)
            .with_item(ItemId(5), 2);
        let store = CombatStore::new(Arc::new(InMemoryStore::with_players([record]))).unwrap();
        let tx = store.begin(PlayerId(1)).await.unwrap().unwrap();
        (store, tx)
    }

    #[tokio::test]
    async fn add_xp_creates_missing_skill_at_level_one() {
        let (_store, mut tx) = tx().await;
        let gain = tx.add_xp(SkillKind::Defense, 150).await.unwrap();
        assert_eq!(gain.levels_gained, 1);
        assert_eq!(gain.new_level, 2);
        assert_eq!(tx.level(SkillKind::Defense).await, 2);
    }

    #[tokio::test]
    async fn add_xp_reports_level_ups() {
        let (_store, mut tx) = tx().await;
        // level 3 starts at 400 XP; 900 reaches level 4.
        let gain = tx.add_xp(SkillKind::Attack, 500).await.unwrap();
        assert_eq!(gain.levels_gained, 1);
        assert_eq!(gain.new_level, 4);
    }

    #[tokio::test]
    async fn removing_last_unit_drops_the_slot() {
        let (_store, mut tx) = tx().await;
        tx.remove_item(ItemId(5), 2).await.unwrap();
        assert!(!tx.has_item(ItemId(5), 1).await);
        let err = tx.remove_item(ItemId(5), 1).await.unwrap_err();
        assert_eq!(err.rejection(), Some(&Rejection::ItemNotOwned(ItemId(5))));
    }

    #[tokio::test]
    async fn dungeon_loot_is_additive_per_kingdom() {
        let (_store, mut tx) = tx().await;
        tx.add_loot(KingdomId(1), ItemId(7), 2).await.unwrap();
        tx.add_loot(KingdomId(1), ItemId(7), 3).await.unwrap();
        tx.add_loot(KingdomId(2), ItemId(7), 1).await.unwrap();
        assert_eq!(tx.record().stored_loot(KingdomId(1)), vec![(ItemId(7), 5)]);
        assert_eq!(tx.record().stored_loot(KingdomId(2)), vec![(ItemId(7), 1)]);
    }

    #[tokio::test]
    async fn energy_cannot_go_negative() {
        let (_store, mut tx) = tx().await;
        assert!(tx.has_energy(100).await);
        assert!(tx.consume_energy(101).await.is_err());
        tx.set_energy_on_death().await.unwrap();
        assert!(!tx.has_energy(1).await);
    }
}
