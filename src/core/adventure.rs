//! The adventure state machine.
//!
//! A single state machine advanced by the one scheduler tick, with
//! accumulating timers for the 3 s exploration step and the 1.5 s combat
//! turn. Only one of the two can elapse per phase, so steps can never
//! double-fire.

use crate::combat::Monster;
use crate::core::constants::{ADVENTURE_STEP_SECONDS, COMBAT_TURN_SECONDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdventurePhase {
    Idle,
    Exploring,
    InCombat,
}

/// Transient adventure-loop state. Never persisted: a reload always comes
/// back idle.
#[derive(Debug, Clone)]
pub struct Adventure {
    pub phase: AdventurePhase,
    /// The live opponent while `phase == InCombat`.
    pub monster: Option<Monster>,
    /// Free-text narration for the adventure panel.
    pub narration: String,
    step_timer: f64,
    turn_timer: f64,
}

impl Default for Adventure {
    fn default() -> Self {
        Self::new()
    }
}

impl Adventure {
    pub fn new() -> Self {
        Self {
            phase: AdventurePhase::Idle,
            monster: None,
            narration: "You are in a safe place.".to_string(),
            step_timer: 0.0,
            turn_timer: 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase != AdventurePhase::Idle
    }

    /// Idle -> Exploring. Timers start from zero.
    pub fn begin(&mut self) {
        self.phase = AdventurePhase::Exploring;
        self.step_timer = 0.0;
        self.turn_timer = 0.0;
        self.narration = "You set out on an adventure...".to_string();
    }

    /// Any phase -> Idle. Drops the pending monster and clears both timers
    /// so nothing fires after the stop. Idempotent.
    pub fn halt(&mut self) {
        self.phase = AdventurePhase::Idle;
        self.monster = None;
        self.step_timer = 0.0;
        self.turn_timer = 0.0;
        self.narration = "You returned to a safe place.".to_string();
    }

    /// Exploring -> InCombat against `monster`.
    pub fn enter_combat(&mut self, monster: Monster) {
        self.narration = format!("{} You encountered a {}!", monster.icon, monster.name);
        self.monster = Some(monster);
        self.phase = AdventurePhase::InCombat;
        self.turn_timer = 0.0;
    }

    /// InCombat -> Exploring after a victory.
    pub fn resume_exploring(&mut self) {
        self.monster = None;
        self.phase = AdventurePhase::Exploring;
        self.step_timer = 0.0;
        self.narration = "You continue your journey...".to_string();
    }

    /// Accumulates `delta` seconds onto the exploration step timer.
    /// Returns true when a step is due (timer wraps, keeping overshoot).
    pub fn step_elapsed(&mut self, delta: f64) -> bool {
        self.step_timer += delta;
        if self.step_timer >= ADVENTURE_STEP_SECONDS {
            self.step_timer -= ADVENTURE_STEP_SECONDS;
            return true;
        }
        false
    }

    /// Accumulates `delta` seconds onto the combat turn timer.
    pub fn turn_elapsed(&mut self, delta: f64) -> bool {
        self.turn_timer += delta;
        if self.turn_timer >= COMBAT_TURN_SECONDS {
            self.turn_timer -= COMBAT_TURN_SECONDS;
            return true;
        }
        false
    }
}
