use rand::Rng;

use crate::catalog::MonsterKind;
use crate::combat::Combatant;

/// One live monster, stamped from its catalog template at encounter time
/// and discarded when combat ends. Never persisted.
#[derive(Debug, Clone)]
pub struct Monster {
    pub kind: MonsterKind,
    pub name: String,
    pub max_hp: i32,
    pub current_hp: i32,
    pub strength: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub exp_reward: u64,
    pub icon: String,
}

impl Monster {
    pub fn spawn(kind: MonsterKind) -> Self {
        let template = kind.template();
        Self {
            kind,
            name: template.name.to_string(),
            max_hp: template.hp,
            current_hp: template.hp,
            strength: template.strength,
            agility: template.agility,
            intelligence: template.intelligence,
            exp_reward: template.exp_reward,
            icon: template.icon.to_string(),
        }
    }

    /// Spawns a monster of a kind chosen uniformly from the catalog.
    pub fn spawn_random(rng: &mut impl Rng) -> Self {
        let kinds = MonsterKind::all();
        let kind = kinds[rng.gen_range(0..kinds.len())];
        Self::spawn(kind)
    }

    /// Attack damage against `target`: strength plus a random swing, less a
    /// fifth of the target's agility. Never below 1.
    pub fn calculate_damage(&self, target: &impl Combatant, rng: &mut impl Rng) -> i32 {
        let base = self.strength as f64 + rng.gen_range(0.0..10.0);
        let defense = target.agility() as f64 * 0.2;
        ((base - defense).floor() as i32).max(1)
    }

    /// Applies damage, clamping at 0. Returns true when the monster is
    /// defeated.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.current_hp = (self.current_hp - amount).max(0);
        self.current_hp == 0
    }

    pub fn hp_fraction(&self) -> f64 {
        if self.max_hp <= 0 {
            return 0.0;
        }
        self.current_hp as f64 / self.max_hp as f64
    }
}

impl Combatant for Monster {
    fn strength(&self) -> i32 {
        self.strength
    }

    fn agility(&self) -> i32 {
        self.agility
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ClassKind;
    use crate::character::Character;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_spawn_copies_template() {
        let goblin = Monster::spawn(MonsterKind::Goblin);
        assert_eq!(goblin.name, "Goblin");
        assert_eq!(goblin.max_hp, 50);
        assert_eq!(goblin.current_hp, 50);
        assert_eq!(goblin.strength, 8);
        assert_eq!(goblin.agility, 12);
        assert_eq!(goblin.exp_reward, 25);
    }

    #[test]
    fn test_spawn_random_yields_catalog_monsters() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..20 {
            let monster = Monster::spawn_random(&mut rng);
            assert!(MonsterKind::all().contains(&monster.kind));
            assert_eq!(monster.current_hp, monster.max_hp);
        }
    }

    #[test]
    fn test_take_damage_clamps_and_reports() {
        let mut orc = Monster::spawn(MonsterKind::Orc);
        assert!(!orc.take_damage(79));
        assert_eq!(orc.current_hp, 1);
        assert!(orc.take_damage(999));
        assert_eq!(orc.current_hp, 0);
    }

    #[test]
    fn test_damage_bounds_against_baseline_target() {
        // Orc STR 15 vs AGI 10 target: base in [15, 25), defense 2,
        // damage in [13, 22].
        let orc = Monster::spawn(MonsterKind::Orc);
        let target = Character::new("Test".to_string(), ClassKind::Warrior, vec![], vec![]);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..500 {
            let damage = orc.calculate_damage(&target, &mut rng);
            assert!((13..=22).contains(&damage), "damage {} out of range", damage);
        }
    }

    #[test]
    fn test_monster_mitigates_player_damage_as_a_target() {
        // Warrior STR+AGI 20 vs goblin STR 8 / AGI 12: base in [20, 35),
        // defense 6, damage in [14, 28].
        let goblin = Monster::spawn(MonsterKind::Goblin);
        let attacker = Character::new("Test".to_string(), ClassKind::Warrior, vec![], vec![]);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let damage = attacker.calculate_damage(&goblin, &mut rng);
            assert!((14..=28).contains(&damage), "damage {} out of range", damage);
        }
    }

    #[test]
    fn test_damage_floors_at_one() {
        let goblin = Monster::spawn(MonsterKind::Goblin);
        let mut nimble = Character::new("Test".to_string(), ClassKind::Warrior, vec![], vec![]);
        nimble
            .attributes
            .set(crate::character::attributes::AttributeType::Agility, 1000);

        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..100 {
            assert_eq!(goblin.calculate_damage(&nimble, &mut rng), 1);
        }
    }
}
