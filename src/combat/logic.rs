//! One turn of combat: player strike (with a random flavor ability), then
//! the monster's counter-attack, with victory/defeat detection.

use rand::Rng;

use crate::character::Character;
use crate::combat::Monster;
use crate::core::constants::DEFEAT_RESPAWN_HP_FRACTION;

/// How a resolved turn left the fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Both sides still standing; another turn will follow.
    Continue,
    /// Monster defeated; its XP reward has already been granted.
    Victory,
    /// Character defeated; HP already reset to the respawn fraction.
    Defeat,
}

/// Everything one combat turn produced, for the log and the caller's
/// control flow. Messages are ordered as the events happened.
#[derive(Debug, Clone)]
pub struct TurnReport {
    pub outcome: TurnOutcome,
    pub messages: Vec<String>,
    /// Levels the character reached from a victory XP grant.
    pub levels_gained: Vec<u32>,
}

/// Resolves one full turn against `monster`.
///
/// Player turn: roll damage, fire one ability picked uniformly from the
/// character's set (flavor only; it never alters the damage roll), apply
/// damage. On a kill the monster's XP reward is granted, cascading
/// level-ups included. Otherwise the monster strikes back; a downed
/// character soft-respawns at half max HP.
pub fn resolve_turn(
    character: &mut Character,
    monster: &mut Monster,
    rng: &mut impl Rng,
) -> TurnReport {
    let mut messages = Vec::new();

    // Player turn
    let damage = character.calculate_damage(&*monster, rng);
    let ability = character.abilities[rng.gen_range(0..character.abilities.len())].ability;
    if let Some(new_level) = character.use_ability(ability) {
        messages.push(format!(
            "✨ \"{}\" advanced to level {}!",
            ability.display_name(),
            new_level
        ));
    }
    let monster_defeated = monster.take_damage(damage);
    messages.push(format!(
        "⚔️ You use \"{}\" and deal {} damage!",
        ability.display_name(),
        damage
    ));

    if monster_defeated {
        let levels_gained = character.gain_exp(monster.exp_reward);
        for level in &levels_gained {
            messages.push(format!("🎉 Level up! You are now level {}!", level));
        }
        messages.push(format!(
            "🎉 {} defeated! Gained {} XP!",
            monster.name, monster.exp_reward
        ));
        return TurnReport {
            outcome: TurnOutcome::Victory,
            messages,
            levels_gained,
        };
    }

    // Monster turn
    let monster_damage = monster.calculate_damage(&*character, rng);
    let character_defeated = character.take_damage(monster_damage);
    messages.push(format!(
        "{} {} hits you for {} damage!",
        monster.icon, monster.name, monster_damage
    ));

    if character_defeated {
        messages.push("💀 You have fallen! The adventure is over.".to_string());
        character.current_hp = (character.max_hp as f64 * DEFEAT_RESPAWN_HP_FRACTION).floor() as i32;
        return TurnReport {
            outcome: TurnOutcome::Defeat,
            messages,
            levels_gained: Vec::new(),
        };
    }

    TurnReport {
        outcome: TurnOutcome::Continue,
        messages,
        levels_gained: Vec::new(),
    }
}
