//! The player character: stat derivation from class and traits, XP and
//! level-up curves, ability tracking, and damage math.

pub mod abilities;
pub mod attributes;
pub mod traits;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{Ability, ClassKind};
use crate::character::abilities::AbilityProgress;
use crate::character::attributes::{AttributeType, Attributes};
use crate::character::traits::{apply_trait, TraitSelection};
use crate::combat::Combatant;
use crate::core::constants::*;

/// XP required to go from `level` to `level + 1`.
pub fn xp_to_next(level: u32) -> u64 {
    (XP_CURVE_BASE * XP_CURVE_MULTIPLIER.powi(level as i32 - 1)).floor() as u64
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub class: ClassKind,
    pub level: u32,
    pub exp: u64,
    pub exp_to_next: u64,
    pub attributes: Attributes,
    pub max_hp: i32,
    pub current_hp: i32,
    pub advantages: Vec<TraitSelection>,
    pub disadvantages: Vec<TraitSelection>,
    pub abilities: Vec<AbilityProgress>,
    pub equipment: Vec<String>,
}

impl Character {
    /// Builds a fresh level-1 character.
    ///
    /// Traits apply in list order, at most [`MAX_TRAITS_PER_KIND`] per list;
    /// extras are dropped. A selection placed in the wrong list (a
    /// disadvantage among advantages, or vice versa) is silently ignored,
    /// mirroring the unknown-key policy. Attributes and max HP are floored
    /// at 1 after all traits apply.
    pub fn new(
        name: String,
        class: ClassKind,
        advantages: Vec<TraitSelection>,
        disadvantages: Vec<TraitSelection>,
    ) -> Self {
        let advantages: Vec<TraitSelection> = advantages
            .into_iter()
            .filter(|t| t.kind.is_advantage())
            .take(MAX_TRAITS_PER_KIND)
            .collect();
        let disadvantages: Vec<TraitSelection> = disadvantages
            .into_iter()
            .filter(|t| !t.kind.is_advantage())
            .take(MAX_TRAITS_PER_KIND)
            .collect();

        let mut attributes = Attributes::new();
        let mut max_hp = BASE_HP;
        for selection in advantages.iter().chain(disadvantages.iter()) {
            apply_trait(selection, &mut attributes, &mut max_hp);
        }
        attributes.clamp_min(ATTRIBUTE_FLOOR);
        max_hp = max_hp.max(MAX_HP_FLOOR);

        let abilities = class.abilities().iter().map(|&a| AbilityProgress::new(a)).collect();
        let equipment = class
            .starting_equipment()
            .iter()
            .map(|s| s.to_string())
            .collect();

        Self {
            name,
            class,
            level: 1,
            exp: 0,
            exp_to_next: xp_to_next(1),
            attributes,
            max_hp,
            current_hp: max_hp,
            advantages,
            disadvantages,
            abilities,
            equipment,
        }
    }

    /// Adds experience and resolves level-ups until `exp < exp_to_next`
    /// again, so one large grant can gain several levels. Each level-up
    /// grants 3 points to the class primaries and fully restores HP.
    /// Returns every level reached, in order, for the caller to log.
    pub fn gain_exp(&mut self, amount: u64) -> Vec<u32> {
        let mut new_levels = Vec::new();
        self.exp += amount;

        while self.exp >= self.exp_to_next {
            self.exp -= self.exp_to_next;
            self.level += 1;
            self.exp_to_next = xp_to_next(self.level);
            self.distribute_attribute_points();
            self.current_hp = self.max_hp;
            new_levels.push(self.level);
        }
        new_levels
    }

    /// Grants the level-up points to the class primary stats: a single
    /// primary takes all 3; with several, each gets an even share and the
    /// first-listed stats absorb the remainder.
    fn distribute_attribute_points(&mut self) {
        let primaries = self.class.primary_stats();
        let share = LEVEL_UP_ATTRIBUTE_POINTS / primaries.len() as i32;
        let remainder = LEVEL_UP_ATTRIBUTE_POINTS as usize % primaries.len();

        for (i, &stat) in primaries.iter().enumerate() {
            let bonus = if i < remainder { 1 } else { 0 };
            self.attributes.add(stat, share + bonus);
        }
    }

    /// Records one use of `ability`: +10 exp, possibly an ability level-up.
    /// Returns the new level when it leveled, `None` otherwise. Using an
    /// ability this class does not own is a no-op.
    pub fn use_ability(&mut self, ability: Ability) -> Option<u32> {
        let entry = self.abilities.iter_mut().find(|a| a.ability == ability)?;
        if entry.record_use() {
            Some(entry.level)
        } else {
            None
        }
    }

    /// Attack damage against `target`. Mages scale on intelligence, every
    /// other class on strength + agility; the target's strength and agility
    /// provide mitigation. Never below 1.
    pub fn calculate_damage(&self, target: &impl Combatant, rng: &mut impl Rng) -> i32 {
        let base = if self.class == ClassKind::Mage {
            self.attributes.get(AttributeType::Intelligence) as f64 * 2.0
                + rng.gen_range(0.0..10.0)
        } else {
            (self.attributes.get(AttributeType::Strength)
                + self.attributes.get(AttributeType::Agility)) as f64
                + rng.gen_range(0.0..15.0)
        };
        let defense = (target.strength() + target.agility()) as f64 * 0.3;
        ((base - defense).floor() as i32).max(1)
    }

    /// Applies damage, clamping at 0. Returns true when the character is
    /// defeated.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.current_hp = (self.current_hp - amount).max(0);
        self.current_hp == 0
    }

    pub fn heal(&mut self, amount: i32) {
        self.current_hp = (self.current_hp + amount).min(self.max_hp);
    }

    pub fn is_wounded(&self) -> bool {
        self.current_hp < self.max_hp
    }

    pub fn hp_fraction(&self) -> f64 {
        if self.max_hp <= 0 {
            return 0.0;
        }
        self.current_hp as f64 / self.max_hp as f64
    }

    pub fn exp_fraction(&self) -> f64 {
        if self.exp_to_next == 0 {
            return 0.0;
        }
        (self.exp as f64 / self.exp_to_next as f64).min(1.0)
    }

    /// Validates and repairs a character deserialized from a save file:
    /// HP back into range, degenerate level/XP fields restored, and any
    /// class ability missing from the save reseeded. Loading is the only
    /// path that can produce such states.
    pub fn repair(&mut self) {
        if self.level == 0 {
            self.level = 1;
        }
        if self.exp_to_next == 0 {
            self.exp_to_next = xp_to_next(self.level);
        }
        self.attributes.clamp_min(ATTRIBUTE_FLOOR);
        self.max_hp = self.max_hp.max(MAX_HP_FLOOR);
        self.current_hp = self.current_hp.clamp(0, self.max_hp);

        for &ability in self.class.abilities() {
            if !self.abilities.iter().any(|a| a.ability == ability) {
                self.abilities.push(AbilityProgress::new(ability));
            }
        }
    }
}

impl Combatant for Character {
    fn strength(&self) -> i32 {
        self.attributes.get(AttributeType::Strength)
    }

    fn agility(&self) -> i32 {
        self.attributes.get(AttributeType::Agility)
    }
}
