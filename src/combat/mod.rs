//! Turn-based combat: the monster model and the per-turn resolution logic.

pub mod logic;
pub mod monster;

pub use logic::{resolve_turn, TurnOutcome, TurnReport};
pub use monster::Monster;

/// Anything that can stand in melee: exposes the stats the mitigation
/// formulas read. Implemented by both `Character` and `Monster` so either
/// side's damage math can target the other.
pub trait Combatant {
    fn strength(&self) -> i32;
    fn agility(&self) -> i32;
}
