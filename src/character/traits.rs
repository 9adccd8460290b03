//! Creation-time character traits.
//!
//! Each trait is a closed enum tag mapped to a pure effect on attributes or
//! max HP, applied exactly once when the character is built. Advantages and
//! disadvantages are the same tag space split by [`TraitKind::is_advantage`].

use serde::{Deserialize, Serialize};

use crate::character::attributes::{AttributeType, Attributes};
use crate::core::constants::{TRAIT_LEVEL_MAX, TRAIT_LEVEL_MIN};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TraitKind {
    // Advantages
    Strong,
    Agile,
    Smart,
    Tough,
    // Disadvantages
    Weak,
    Clumsy,
    Dull,
    Frail,
}

impl TraitKind {
    pub fn advantages() -> [TraitKind; 4] {
        [
            TraitKind::Strong,
            TraitKind::Agile,
            TraitKind::Smart,
            TraitKind::Tough,
        ]
    }

    pub fn disadvantages() -> [TraitKind; 4] {
        [
            TraitKind::Weak,
            TraitKind::Clumsy,
            TraitKind::Dull,
            TraitKind::Frail,
        ]
    }

    pub fn is_advantage(&self) -> bool {
        matches!(
            self,
            TraitKind::Strong | TraitKind::Agile | TraitKind::Smart | TraitKind::Tough
        )
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TraitKind::Strong => "Strong",
            TraitKind::Agile => "Agile",
            TraitKind::Smart => "Smart",
            TraitKind::Tough => "Tough",
            TraitKind::Weak => "Weak",
            TraitKind::Clumsy => "Clumsy",
            TraitKind::Dull => "Dull",
            TraitKind::Frail => "Frail",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TraitKind::Strong => "+2 STR per level",
            TraitKind::Agile => "+2 AGI per level",
            TraitKind::Smart => "+2 INT per level",
            TraitKind::Tough => "+20 max HP per level",
            TraitKind::Weak => "-1 STR per level",
            TraitKind::Clumsy => "-1 AGI per level",
            TraitKind::Dull => "-1 INT per level",
            TraitKind::Frail => "-10 max HP per level",
        }
    }
}

/// A trait the player picked at creation, with its intensity level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TraitSelection {
    pub kind: TraitKind,
    pub level: u32,
}

impl TraitSelection {
    pub fn new(kind: TraitKind, level: u32) -> Self {
        Self { kind, level }
    }

    /// The level the model actually applies. The creation UI offers 1-3;
    /// anything outside that range is clamped rather than rejected.
    pub fn effective_level(&self) -> i32 {
        self.level.clamp(TRAIT_LEVEL_MIN, TRAIT_LEVEL_MAX) as i32
    }
}

/// Applies one trait selection to a stat block. Returns the max-HP delta so
/// the caller can reset current HP when the pool changes.
pub fn apply_trait(selection: &TraitSelection, attributes: &mut Attributes, max_hp: &mut i32) {
    let level = selection.effective_level();
    match selection.kind {
        TraitKind::Strong => attributes.add(AttributeType::Strength, 2 * level),
        TraitKind::Agile => attributes.add(AttributeType::Agility, 2 * level),
        TraitKind::Smart => attributes.add(AttributeType::Intelligence, 2 * level),
        TraitKind::Tough => *max_hp += 20 * level,
        TraitKind::Weak => attributes.add(AttributeType::Strength, -level),
        TraitKind::Clumsy => attributes.add(AttributeType::Agility, -level),
        TraitKind::Dull => attributes.add(AttributeType::Intelligence, -level),
        TraitKind::Frail => *max_hp -= 10 * level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::BASE_HP;

    fn apply(kind: TraitKind, level: u32) -> (Attributes, i32) {
        let mut attrs = Attributes::new();
        let mut max_hp = BASE_HP;
        apply_trait(&TraitSelection::new(kind, level), &mut attrs, &mut max_hp);
        (attrs, max_hp)
    }

    #[test]
    fn test_strong_adds_two_per_level() {
        let (attrs, _) = apply(TraitKind::Strong, 2);
        assert_eq!(attrs.get(AttributeType::Strength), 14);
    }

    #[test]
    fn test_tough_adds_twenty_hp_per_level() {
        let (_, max_hp) = apply(TraitKind::Tough, 3);
        assert_eq!(max_hp, 160);
    }

    #[test]
    fn test_weak_subtracts_one_per_level() {
        let (attrs, _) = apply(TraitKind::Weak, 2);
        assert_eq!(attrs.get(AttributeType::Strength), 8);
    }

    #[test]
    fn test_frail_subtracts_ten_hp_per_level() {
        let (_, max_hp) = apply(TraitKind::Frail, 2);
        assert_eq!(max_hp, 80);
    }

    #[test]
    fn test_level_is_clamped_into_accepted_range() {
        // Level 0 applies as level 1
        let (attrs, _) = apply(TraitKind::Agile, 0);
        assert_eq!(attrs.get(AttributeType::Agility), 12);

        // Level 99 applies as level 3
        let (attrs, _) = apply(TraitKind::Smart, 99);
        assert_eq!(attrs.get(AttributeType::Intelligence), 16);
    }

    #[test]
    fn test_advantage_disadvantage_split() {
        for kind in TraitKind::advantages() {
            assert!(kind.is_advantage());
        }
        for kind in TraitKind::disadvantages() {
            assert!(!kind.is_advantage());
        }
    }
}
