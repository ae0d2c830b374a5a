//! Deterministic match rules and data types shared across clients.
//!
//! `ringside-core` defines the canonical rules of a match (combatants, moves,
//! turn resolution) and the player profile that survives between matches. All
//! state mutation flows through [`engine::MatchEngine`]; supporting crates
//! depend on the types re-exported here. The crate performs no I/O and no
//! rendering.
pub mod combat;
pub mod combatant;
pub mod engine;
pub mod moves;
pub mod profile;
pub mod rng;

pub use combat::{MoveOutcome, resolve_move};
pub use combatant::Combatant;
pub use engine::{
    ENEMY_FALLBACK_MOVE, EngineError, MatchEngine, MatchResult, Side, TurnReport, choose_enemy_move,
    roll_enemy_max_hp,
};
pub use moves::{CatalogError, MoveCatalog, MoveDef, MoveKind, ValueRange};
pub use profile::{EMPTY_SLOT, EQUIP_SLOTS, EquipChange, EquippedMoves, Profile};
pub use rng::{Dice, Pcg32};
