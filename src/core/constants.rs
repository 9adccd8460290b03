// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;
pub const ADVENTURE_STEP_SECONDS: f64 = 3.0;
pub const COMBAT_TURN_SECONDS: f64 = 1.5;
pub const AUTOSAVE_INTERVAL_SECONDS: u64 = 30;

// Encounters
pub const ENCOUNTER_CHANCE: f64 = 0.30;
pub const EXPLORE_HEAL_AMOUNT: i32 = 2;

// XP and leveling
pub const XP_CURVE_BASE: f64 = 100.0;
pub const XP_CURVE_MULTIPLIER: f64 = 1.2;
pub const LEVEL_UP_ATTRIBUTE_POINTS: i32 = 3;

// Character attributes
pub const BASE_ATTRIBUTE_VALUE: i32 = 10;
pub const NUM_ATTRIBUTES: usize = 3;
pub const BASE_HP: i32 = 100;
// Heavy disadvantage stacking can push stats or max HP to zero or below;
// both are floored at 1 instead. See DESIGN.md.
pub const ATTRIBUTE_FLOOR: i32 = 1;
pub const MAX_HP_FLOOR: i32 = 1;

// Traits
pub const MAX_TRAITS_PER_KIND: usize = 2;
pub const TRAIT_LEVEL_MIN: u32 = 1;
pub const TRAIT_LEVEL_MAX: u32 = 3;

// Abilities
pub const ABILITY_BASE_EXP_TO_NEXT: u64 = 50;
pub const ABILITY_EXP_PER_USE: u64 = 10;
pub const ABILITY_EXP_MULTIPLIER: f64 = 1.5;

// Combat
pub const DEFEAT_RESPAWN_HP_FRACTION: f64 = 0.5;
pub const COMBAT_LOG_CAPACITY: usize = 20;

// Character management
pub const CHARACTER_NAME_MAX_LENGTH: usize = 16;
pub const SAVE_FILE_VERSION: u32 = 1;
