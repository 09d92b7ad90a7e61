//! Types surfaced to callers of the combat runtime.
mod errors;
mod views;

pub use errors::{Rejection, Result, RuntimeError};
pub use views::{
    CompletionRewards, EatReport, ExchangeReport, FightReport, FightRewards, Forfeiture,
    RunEndReport, RunView, SessionView, SkillGain, VictoryRewards,
};
