//! Static game catalog: classes, abilities, monster templates, and the
//! exploration flavor events.
//!
//! These tables are read-only; all mutable progression state lives in the
//! character and monster models.

use serde::{Deserialize, Serialize};

use crate::character::attributes::AttributeType;

/// Player character class.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    Warrior,
    Mage,
}

impl ClassKind {
    pub fn all() -> [ClassKind; 2] {
        [ClassKind::Warrior, ClassKind::Mage]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ClassKind::Warrior => "Warrior",
            ClassKind::Mage => "Mage",
        }
    }

    /// Attributes favored on level-up, in priority order. The first-listed
    /// stat receives the remainder when the point grant doesn't divide
    /// evenly.
    pub fn primary_stats(&self) -> &'static [AttributeType] {
        match self {
            ClassKind::Warrior => &[AttributeType::Strength, AttributeType::Agility],
            ClassKind::Mage => &[AttributeType::Intelligence],
        }
    }

    /// Starting equipment. Cosmetic only; never enters damage math.
    pub fn starting_equipment(&self) -> &'static [&'static str] {
        match self {
            ClassKind::Warrior => &["Iron Sword", "Leather Armor", "Shield"],
            ClassKind::Mage => &["Wooden Staff", "Apprentice Robe", "Spellbook"],
        }
    }

    pub fn abilities(&self) -> &'static [Ability] {
        match self {
            ClassKind::Warrior => &[
                Ability::SwordStrike,
                Ability::DefensiveStance,
                Ability::Berserk,
            ],
            ClassKind::Mage => &[Ability::Fireball, Ability::Heal, Ability::MagicShield],
        }
    }
}

/// Every ability any class can own. Abilities are flavor during combat:
/// which one fires is independent of the damage roll.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    SwordStrike,
    DefensiveStance,
    Berserk,
    Fireball,
    Heal,
    MagicShield,
}

impl Ability {
    pub fn display_name(&self) -> &'static str {
        match self {
            Ability::SwordStrike => "Sword Strike",
            Ability::DefensiveStance => "Defensive Stance",
            Ability::Berserk => "Berserk",
            Ability::Fireball => "Fireball",
            Ability::Heal => "Heal",
            Ability::MagicShield => "Magic Shield",
        }
    }
}

/// Monster species key into the catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MonsterKind {
    Goblin,
    Orc,
    Skeleton,
}

/// Stat block a monster instance is stamped from.
#[derive(Debug, Clone, Copy)]
pub struct MonsterTemplate {
    pub name: &'static str,
    pub hp: i32,
    pub strength: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub exp_reward: u64,
    pub icon: &'static str,
}

impl MonsterKind {
    pub fn all() -> [MonsterKind; 3] {
        [MonsterKind::Goblin, MonsterKind::Orc, MonsterKind::Skeleton]
    }

    pub fn template(&self) -> MonsterTemplate {
        match self {
            MonsterKind::Goblin => MonsterTemplate {
                name: "Goblin",
                hp: 50,
                strength: 8,
                agility: 12,
                intelligence: 5,
                exp_reward: 25,
                icon: "👺",
            },
            MonsterKind::Orc => MonsterTemplate {
                name: "Orc",
                hp: 80,
                strength: 15,
                agility: 8,
                intelligence: 6,
                exp_reward: 40,
                icon: "👹",
            },
            MonsterKind::Skeleton => MonsterTemplate {
                name: "Skeleton",
                hp: 60,
                strength: 10,
                agility: 10,
                intelligence: 8,
                exp_reward: 30,
                icon: "💀",
            },
        }
    }
}

/// Flavor lines shown while exploring without an encounter.
pub const EXPLORE_EVENTS: [&str; 4] = [
    "You walk along the trail...",
    "You rest by the campfire.",
    "You scout the surroundings.",
    "You find a safe place to rest.",
];
