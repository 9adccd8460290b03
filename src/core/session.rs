//! The game session: one player character, the adventure loop, and the
//! capped combat/event log, behind the intents the presentation layer
//! forwards (create, start, stop, reset) and the single scheduler tick.

use std::collections::VecDeque;

use rand::Rng;

use crate::catalog::{ClassKind, EXPLORE_EVENTS};
use crate::character::traits::TraitSelection;
use crate::character::Character;
use crate::combat::logic::{resolve_turn, TurnOutcome};
use crate::combat::Monster;
use crate::core::adventure::{Adventure, AdventurePhase};
use crate::core::constants::{COMBAT_LOG_CAPACITY, ENCOUNTER_CHANCE, EXPLORE_HEAL_AMOUNT};

/// What one scheduler tick did, for the caller to react to (saving,
/// mostly). The log and narration are updated in place.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    /// A monster was spawned this tick.
    pub encounter_started: bool,
    /// A combat turn was resolved this tick.
    pub turn_resolved: bool,
    /// The fight ended in victory this tick.
    pub victory: bool,
    /// The character fell this tick; the loop has stopped.
    pub defeat: bool,
    /// Levels reached this tick.
    pub levels_gained: Vec<u32>,
    /// Progress worth persisting happened this tick.
    pub save_requested: bool,
}

/// All mutable state of a running game, owned by the application and
/// passed explicitly instead of living in a global.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    pub character: Option<Character>,
    pub adventure: Adventure,
    pub combat_log: VecDeque<String>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a session from persisted state. The adventure loop always
    /// comes back idle.
    pub fn restore(character: Character, combat_log: Vec<String>) -> Self {
        let mut log = VecDeque::with_capacity(COMBAT_LOG_CAPACITY);
        for message in combat_log {
            if log.len() >= COMBAT_LOG_CAPACITY {
                log.pop_front();
            }
            log.push_back(message);
        }
        Self {
            character: Some(character),
            adventure: Adventure::new(),
            combat_log: log,
        }
    }

    /// Create-character intent. Replaces any existing character.
    pub fn create_character(
        &mut self,
        name: String,
        class: ClassKind,
        advantages: Vec<TraitSelection>,
        disadvantages: Vec<TraitSelection>,
    ) {
        self.adventure.halt();
        self.character = Some(Character::new(name, class, advantages, disadvantages));
    }

    /// Start-adventure intent. Refused without a character or while
    /// already running. Returns whether the loop started.
    pub fn start_adventure(&mut self) -> bool {
        if self.character.is_none() || self.adventure.is_active() {
            return false;
        }
        self.adventure.begin();
        self.push_log("🚶 The adventure begins!".to_string());
        true
    }

    /// Stop-adventure intent. Safe to call in any state.
    pub fn stop_adventure(&mut self) {
        if !self.adventure.is_active() {
            return;
        }
        self.adventure.halt();
        self.push_log("🏠 The adventure is over.".to_string());
    }

    /// Reset-game intent: discard the character and all progress.
    pub fn reset(&mut self) {
        self.adventure.halt();
        self.character = None;
        self.combat_log.clear();
    }

    /// Appends to the combat/event log, evicting the oldest entry past the
    /// 20-message cap.
    pub fn push_log(&mut self, message: String) {
        if self.combat_log.len() >= COMBAT_LOG_CAPACITY {
            self.combat_log.pop_front();
        }
        self.combat_log.push_back(message);
    }

    /// Advances the simulation by `delta` seconds of wall time.
    ///
    /// Re-checks the active-state preconditions first: if the character is
    /// gone while the loop runs, the loop stops itself, so a stale tick can
    /// never act on missing state.
    pub fn tick(&mut self, delta: f64, rng: &mut impl Rng) -> TickResult {
        let mut result = TickResult::default();

        if !self.adventure.is_active() {
            return result;
        }
        if self.character.is_none() {
            self.stop_adventure();
            return result;
        }

        match self.adventure.phase {
            AdventurePhase::Idle => {}
            AdventurePhase::Exploring => {
                if self.adventure.step_elapsed(delta) {
                    self.explore_step(rng, &mut result);
                }
            }
            AdventurePhase::InCombat => {
                if self.adventure.turn_elapsed(delta) {
                    self.combat_turn(rng, &mut result);
                }
            }
        }
        result
    }

    /// One exploration step: 30% encounter, otherwise a flavor event and a
    /// trickle heal (the heal is deliberately not logged).
    fn explore_step(&mut self, rng: &mut impl Rng, result: &mut TickResult) {
        if rng.gen_bool(ENCOUNTER_CHANCE) {
            let monster = Monster::spawn_random(rng);
            self.push_log(format!(
                "{} A {} appears! (HP: {})",
                monster.icon, monster.name, monster.current_hp
            ));
            self.adventure.enter_combat(monster);
            result.encounter_started = true;
        } else {
            let event = EXPLORE_EVENTS[rng.gen_range(0..EXPLORE_EVENTS.len())];
            self.adventure.narration = event.to_string();
            if let Some(character) = self.character.as_mut() {
                if character.is_wounded() {
                    character.heal(EXPLORE_HEAL_AMOUNT);
                }
            }
        }
    }

    /// One combat turn against the current monster.
    fn combat_turn(&mut self, rng: &mut impl Rng, result: &mut TickResult) {
        let (Some(character), Some(monster)) =
            (self.character.as_mut(), self.adventure.monster.as_mut())
        else {
            // Stale turn after a state transition; self-cancel.
            self.adventure.halt();
            return;
        };

        let report = resolve_turn(character, monster, rng);
        for message in report.messages {
            self.push_log(message);
        }
        result.turn_resolved = true;
        result.save_requested = true;
        result.levels_gained = report.levels_gained;

        match report.outcome {
            TurnOutcome::Continue => {}
            TurnOutcome::Victory => {
                self.adventure.resume_exploring();
                result.victory = true;
            }
            TurnOutcome::Defeat => {
                self.stop_adventure();
                result.defeat = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MonsterKind;
    use crate::core::constants::{ADVENTURE_STEP_SECONDS, COMBAT_TURN_SECONDS};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn session_with_warrior() -> GameSession {
        let mut session = GameSession::new();
        session.create_character("Hero".to_string(), ClassKind::Warrior, vec![], vec![]);
        session
    }

    #[test]
    fn test_start_requires_character() {
        let mut session = GameSession::new();
        assert!(!session.start_adventure());
        assert!(!session.adventure.is_active());
    }

    #[test]
    fn test_start_and_stop_log_messages() {
        let mut session = session_with_warrior();
        assert!(session.start_adventure());
        assert!(session.adventure.is_active());
        session.stop_adventure();
        assert!(!session.adventure.is_active());
        assert_eq!(session.combat_log.len(), 2);
    }

    #[test]
    fn test_double_start_is_refused() {
        let mut session = session_with_warrior();
        assert!(session.start_adventure());
        assert!(!session.start_adventure());
    }

    #[test]
    fn test_stop_when_idle_logs_nothing() {
        let mut session = session_with_warrior();
        session.stop_adventure();
        assert!(session.combat_log.is_empty());
    }

    #[test]
    fn test_tick_noop_while_idle() {
        let mut session = session_with_warrior();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result = session.tick(10.0, &mut rng);
        assert!(!result.turn_resolved);
        assert!(!result.encounter_started);
    }

    #[test]
    fn test_character_vanishing_stops_the_loop() {
        let mut session = session_with_warrior();
        session.start_adventure();
        session.character = None;
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        session.tick(ADVENTURE_STEP_SECONDS, &mut rng);
        assert!(!session.adventure.is_active());
    }

    #[test]
    fn test_log_caps_at_twenty_fifo() {
        let mut session = session_with_warrior();
        for i in 0..25 {
            session.push_log(format!("message {}", i));
        }
        assert_eq!(session.combat_log.len(), 20);
        assert_eq!(session.combat_log.front().unwrap(), "message 5");
        assert_eq!(session.combat_log.back().unwrap(), "message 24");
    }

    #[test]
    fn test_explore_heals_wounded_character() {
        let mut session = session_with_warrior();
        session.start_adventure();
        if let Some(c) = session.character.as_mut() {
            c.take_damage(50);
        }
        // Run many exploration steps directly; at least some will be
        // non-encounter steps that trickle-heal.
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..50 {
            let mut result = TickResult::default();
            session.explore_step(&mut rng, &mut result);
        }
        let hp = session.character.as_ref().unwrap().current_hp;
        assert!(hp > 50);
    }

    #[test]
    fn test_exploration_eventually_encounters() {
        let mut session = session_with_warrior();
        session.start_adventure();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut encountered = false;
        for _ in 0..200 {
            let result = session.tick(ADVENTURE_STEP_SECONDS, &mut rng);
            if result.encounter_started {
                encountered = true;
                break;
            }
        }
        assert!(encountered, "no encounter in 200 exploration steps");
        assert_eq!(session.adventure.phase, AdventurePhase::InCombat);
        assert!(session.adventure.monster.is_some());
    }

    #[test]
    fn test_combat_turns_request_saves() {
        let mut session = session_with_warrior();
        session.start_adventure();
        session
            .adventure
            .enter_combat(Monster::spawn(MonsterKind::Orc));
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let result = session.tick(COMBAT_TURN_SECONDS, &mut rng);
        assert!(result.turn_resolved);
        assert!(result.save_requested);
    }

    #[test]
    fn test_victory_returns_to_exploring() {
        let mut session = session_with_warrior();
        session.start_adventure();
        let mut weakling = Monster::spawn(MonsterKind::Goblin);
        weakling.current_hp = 1;
        session.adventure.enter_combat(weakling);

        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let result = session.tick(COMBAT_TURN_SECONDS, &mut rng);

        assert!(result.victory);
        assert_eq!(session.adventure.phase, AdventurePhase::Exploring);
        assert!(session.adventure.monster.is_none());
        assert_eq!(session.character.as_ref().unwrap().exp, 25);
    }

    #[test]
    fn test_defeat_goes_idle_with_soft_respawn() {
        let mut session = session_with_warrior();
        session.start_adventure();
        if let Some(c) = session.character.as_mut() {
            c.current_hp = 1;
        }
        session
            .adventure
            .enter_combat(Monster::spawn(MonsterKind::Orc));

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let result = session.tick(COMBAT_TURN_SECONDS, &mut rng);

        assert!(result.defeat);
        assert_eq!(session.adventure.phase, AdventurePhase::Idle);
        let character = session.character.as_ref().unwrap();
        assert_eq!(character.current_hp, character.max_hp / 2);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = session_with_warrior();
        session.start_adventure();
        session.push_log("something".to_string());
        session.reset();
        assert!(session.character.is_none());
        assert!(session.combat_log.is_empty());
        assert!(!session.adventure.is_active());
    }

    #[test]
    fn test_restore_truncates_oversized_log() {
        let character = Character::new("Hero".to_string(), ClassKind::Mage, vec![], vec![]);
        let log: Vec<String> = (0..30).map(|i| format!("m{}", i)).collect();
        let session = GameSession::restore(character, log);
        assert_eq!(session.combat_log.len(), 20);
        assert_eq!(session.combat_log.front().unwrap(), "m10");
        assert!(!session.adventure.is_active());
    }
}
