use serde::{Deserialize, Serialize};

use crate::catalog::Ability;
use crate::core::constants::{
    ABILITY_BASE_EXP_TO_NEXT, ABILITY_EXP_MULTIPLIER, ABILITY_EXP_PER_USE,
};

/// Per-ability progression record. Seeded once per class ability at
/// character creation and advanced every time combat fires the ability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbilityProgress {
    pub ability: Ability,
    pub level: u32,
    pub exp: u64,
    pub exp_to_next: u64,
    pub times_used: u64,
}

impl AbilityProgress {
    pub fn new(ability: Ability) -> Self {
        Self {
            ability,
            level: 1,
            exp: 0,
            exp_to_next: ABILITY_BASE_EXP_TO_NEXT,
            times_used: 0,
        }
    }

    /// Records one use: +1 use count, +10 exp. On reaching the threshold the
    /// ability levels up (exp resets to 0, threshold grows 1.5x floored).
    /// Returns true when that happened.
    pub fn record_use(&mut self) -> bool {
        self.times_used += 1;
        self.exp += ABILITY_EXP_PER_USE;

        if self.exp >= self.exp_to_next {
            self.level += 1;
            self.exp = 0;
            self.exp_to_next = (self.exp_to_next as f64 * ABILITY_EXP_MULTIPLIER).floor() as u64;
            return true;
        }
        false
    }

    /// Progress toward the next ability level, for the abilities panel.
    pub fn progress_fraction(&self) -> f64 {
        if self.exp_to_next == 0 {
            return 0.0;
        }
        self.exp as f64 / self.exp_to_next as f64
    }
}
