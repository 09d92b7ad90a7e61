//! Interactive encounter session.
//!
//! One exchange per player action: the player acts (attack, eat, flee) and,
//! unless the session ended, the monster retaliates once. Every half of an
//! exchange appends an immutable [`EncounterLogEntry`].
//!
//! ```text
//! Active ──attack/eat/flee──▶ Active
//!   │                           │
//!   ├─ monster hp 0 ──▶ Victory │
//!   ├─ player hp 0  ──▶ Defeat  │
//!   └─ flee success ──▶ Fled    ┘
//! ```

mod heal;
mod log;
mod session;

pub use heal::{HealOutcome, heal_amount};
pub use log::{EncounterLogEntry, LogAction, LogActor};
pub use session::{EncounterSession, EncounterStatus};
