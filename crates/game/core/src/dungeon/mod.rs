//! Batch dungeon run.
//!
//! A run drives many fights through an unlogged round loop and keeps every
//! reward in a pending ledger until the final floor is cleared. Death or
//! abandonment forfeits the ledger.
//!
//! ```text
//! Active ──fight (win, floor left)──▶ Active
//!   ├─ final floor cleared ──▶ Completed  (ledger committed)
//!   ├─ fight lost / stalemate ──▶ Failed  (ledger forfeited)
//!   └─ abandon ──▶ Abandoned             (ledger forfeited)
//! ```

mod fight;
mod ledger;
mod rewards;
mod run;
mod spawn;

pub use fight::{FightOutcome, simulate_fight};
pub use ledger::LootLedger;
pub use rewards::{XpShare, distribute_xp, fight_xp};
pub use run::{DungeonRun, RunStatus};
pub use spawn::select_monster;
