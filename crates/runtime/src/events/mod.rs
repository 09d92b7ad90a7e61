//! Topic-based event bus for runtime events.
//!
//! Services publish lifecycle events here once an action has committed, and
//! consumers subscribe only to the topics they need.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{DungeonEvent, EncounterEvent};
