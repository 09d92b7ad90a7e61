use crate::combat::{StrikeInput, apply_damage, resolve_strike};
use crate::config::CombatConfig;
use crate::env::{MonsterDefinition, RngOracle};
use crate::state::MonsterId;
use crate::style::SpeedProfile;

/// Aggregate result of one unlogged dungeon fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FightOutcome {
    pub monster: MonsterId,
    pub player_won: bool,
    /// Round cap reached with both sides alive; counts as a loss.
    pub stalemate: bool,
    pub rounds: u32,
    /// Damage credited for rewards, capped at the monster's max HP.
    pub damage_dealt: u32,
    pub damage_taken: u32,
    pub player_hp: u32,
    pub monster_hp: u32,
}

/// Runs the round loop until one side drops or the round cap is hit.
///
/// Each round the player strikes `hits_per_round` times (stopping early on a
/// kill), then the monster strikes once. `player` must already carry the
/// typed defense and speed multiplier; `monster` is the retaliation input.
pub fn simulate_fight<R>(
    monster: &MonsterDefinition,
    player_hp: u32,
    player: &StrikeInput,
    retaliation: &StrikeInput,
    speed: SpeedProfile,
    rng: &R,
    config: &CombatConfig,
) -> FightOutcome
where
    R: RngOracle + ?Sized,
{
    let cap = config.dungeon_round_cap.max(1);
    let mut player_hp = player_hp;
    let mut monster_hp = monster.max_hp;
    let mut dealt: u64 = 0;
    let mut taken: u64 = 0;
    let mut rounds = 0;

    while rounds < cap && player_hp > 0 && monster_hp > 0 {
        rounds += 1;

        for _ in 0..speed.hits_per_round.max(1) {
            let strike = resolve_strike(player, rng, config);
            dealt += strike.damage as u64;
            monster_hp = apply_damage(monster_hp, strike.damage);
            if monster_hp == 0 {
                break;
            }
        }
        if monster_hp == 0 {
            break;
        }

        let strike = resolve_strike(retaliation, rng, config);
        taken += strike.damage as u64;
        player_hp = apply_damage(player_hp, strike.damage);
    }

    let player_won = monster_hp == 0 && player_hp > 0;
    FightOutcome {
        monster: monster.id,
        player_won,
        stalemate: player_hp > 0 && monster_hp > 0,
        rounds,
        damage_dealt: dealt.min(monster.max_hp as u64) as u32,
        damage_taken: taken.min(u32::MAX as u64) as u32,
        player_hp,
        monster_hp,
    }
}
