use chrono::{DateTime, Utc};

use crate::combat::{StrikeResult, apply_damage};
use crate::env::MonsterDefinition;
use crate::state::{ItemId, MonsterId, PlayerId, SessionId};
use crate::stats::SkillKind;
use crate::style::StyleProfile;

use super::heal::HealOutcome;
use super::log::{EncounterLogEntry, LogAction, LogActor};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum EncounterStatus {
    Active,
    Victory,
    Defeat,
    Fled,
}

impl EncounterStatus {
    pub fn is_terminal(self) -> bool {
        self != Self::Active
    }
}

/// Persisted interactive fight between one player and one monster.
///
/// Transitions are pure; callers resolve strikes and pass the results in.
/// Methods assume the session is active and callers check [`is_active`]
/// before applying an action.
///
/// [`is_active`]: EncounterSession::is_active
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterSession {
    pub id: SessionId,
    pub player: PlayerId,
    pub monster: MonsterId,
    pub player_hp: u32,
    pub monster_hp: u32,
    /// Starts at 1; increments after each full exchange.
    pub round: u32,
    pub training_style: SkillKind,
    pub style_index: usize,
    pub style: StyleProfile,
    pub status: EncounterStatus,
    pub location: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl EncounterSession {
    #[allow(clippy::too_many_arguments)]
    pub fn start(
        id: SessionId,
        player: PlayerId,
        monster: &MonsterDefinition,
        player_hp: u32,
        style_index: usize,
        style: StyleProfile,
        location: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            player,
            monster: monster.id,
            player_hp,
            monster_hp: monster.max_hp,
            round: 1,
            training_style: style.primary_skill(),
            style_index,
            style,
            status: EncounterStatus::Active,
            location: location.into(),
            started_at: now,
            ended_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == EncounterStatus::Active
    }

    /// Applies the player's strike; a killing blow ends in victory.
    pub fn player_strike(
        &mut self,
        strike: StrikeResult,
        now: DateTime<Utc>,
    ) -> EncounterLogEntry {
        self.monster_hp = apply_damage(self.monster_hp, strike.damage);
        if self.monster_hp == 0 {
            self.finish(EncounterStatus::Victory, now);
        }
        self.entry(
            LogActor::Player,
            LogAction::Attack,
            strike.hit,
            strike.damage,
            now,
        )
    }

    /// Applies the monster's retaliation and closes the exchange.
    ///
    /// Defeat when player HP reaches zero, otherwise the round advances.
    pub fn monster_strike(
        &mut self,
        strike: StrikeResult,
        now: DateTime<Utc>,
    ) -> EncounterLogEntry {
        self.player_hp = apply_damage(self.player_hp, strike.damage);
        let entry = self.entry(
            LogActor::Monster,
            LogAction::Attack,
            strike.hit,
            strike.damage,
            now,
        );
        if self.player_hp == 0 {
            self.finish(EncounterStatus::Defeat, now);
        } else {
            self.round += 1;
        }
        entry
    }

    pub fn eat(
        &mut self,
        item: ItemId,
        heal: HealOutcome,
        now: DateTime<Utc>,
    ) -> EncounterLogEntry {
        self.player_hp = heal.hp_after;
        let mut entry = self.entry(LogActor::Player, LogAction::Eat, false, 0, now);
        entry.item = Some(item);
        entry.hp_restored = Some(heal.restored);
        entry
    }

    /// Records a flee attempt; success ends the session.
    pub fn flee(&mut self, success: bool, now: DateTime<Utc>) -> EncounterLogEntry {
        if success {
            self.finish(EncounterStatus::Fled, now);
        }
        self.entry(LogActor::Player, LogAction::Flee, success, 0, now)
    }

    /// Forces a defeat with zero HP regardless of the current state.
    pub fn defeat(&mut self, now: DateTime<Utc>) {
        self.player_hp = 0;
        self.finish(EncounterStatus::Defeat, now);
    }

    fn finish(&mut self, status: EncounterStatus, now: DateTime<Utc>) {
        self.status = status;
        self.ended_at = Some(now);
    }

    fn entry(
        &self,
        actor: LogActor,
        action: LogAction,
        hit: bool,
        damage: u32,
        now: DateTime<Utc>,
    ) -> EncounterLogEntry {
        EncounterLogEntry {
            round: self.round,
            actor,
            action,
            hit,
            damage,
            player_hp: self.player_hp,
            monster_hp: self.monster_hp,
            item: None,
            hp_restored: None,
            at: now,
        }
    }
}
