//! Identifier types shared by content, state machines and persistence.
//!
//! Dynamic state (sessions, runs) lives in [`crate::encounter`] and
//! [`crate::dungeon`]; this module only names things.
mod ids;

pub use ids::{DungeonId, ItemId, KingdomId, MonsterId, PlayerId, RunId, SessionId};
