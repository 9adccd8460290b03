use crate::core::constants::{BASE_ATTRIBUTE_VALUE, NUM_ATTRIBUTES};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AttributeType {
    Strength,
    Agility,
    Intelligence,
}

impl AttributeType {
    pub fn all() -> [AttributeType; NUM_ATTRIBUTES] {
        [
            AttributeType::Strength,
            AttributeType::Agility,
            AttributeType::Intelligence,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AttributeType::Strength => "Strength",
            AttributeType::Agility => "Agility",
            AttributeType::Intelligence => "Intelligence",
        }
    }

    pub fn abbrev(&self) -> &str {
        match self {
            AttributeType::Strength => "STR",
            AttributeType::Agility => "AGI",
            AttributeType::Intelligence => "INT",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            AttributeType::Strength => 0,
            AttributeType::Agility => 1,
            AttributeType::Intelligence => 2,
        }
    }
}

/// The three character attributes. Values are signed: disadvantages
/// subtract and the floor is applied by the character constructor, not
/// here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attributes {
    values: [i32; NUM_ATTRIBUTES],
}

impl Default for Attributes {
    fn default() -> Self {
        Self::new()
    }
}

impl Attributes {
    pub fn new() -> Self {
        Self {
            values: [BASE_ATTRIBUTE_VALUE; NUM_ATTRIBUTES],
        }
    }

    pub fn get(&self, attr: AttributeType) -> i32 {
        self.values[attr.index()]
    }

    pub fn set(&mut self, attr: AttributeType, value: i32) {
        self.values[attr.index()] = value;
    }

    pub fn add(&mut self, attr: AttributeType, delta: i32) {
        self.values[attr.index()] += delta;
    }

    /// Raises any attribute below `min` up to `min`.
    pub fn clamp_min(&mut self, min: i32) {
        for value in &mut self.values {
            if *value < min {
                *value = min;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_attributes() {
        let attrs = Attributes::new();
        for attr_type in AttributeType::all() {
            assert_eq!(attrs.get(attr_type), 10);
        }
    }

    #[test]
    fn test_get_set() {
        let mut attrs = Attributes::new();
        attrs.set(AttributeType::Strength, 16);
        assert_eq!(attrs.get(AttributeType::Strength), 16);
        assert_eq!(attrs.get(AttributeType::Agility), 10);
    }

    #[test]
    fn test_add_positive_and_negative() {
        let mut attrs = Attributes::new();
        attrs.add(AttributeType::Intelligence, 4);
        assert_eq!(attrs.get(AttributeType::Intelligence), 14);
        attrs.add(AttributeType::Intelligence, -6);
        assert_eq!(attrs.get(AttributeType::Intelligence), 8);
    }

    #[test]
    fn test_add_can_go_below_zero() {
        let mut attrs = Attributes::new();
        attrs.add(AttributeType::Strength, -15);
        assert_eq!(attrs.get(AttributeType::Strength), -5);
    }

    #[test]
    fn test_clamp_min_raises_only_low_values() {
        let mut attrs = Attributes::new();
        attrs.set(AttributeType::Strength, -5);
        attrs.set(AttributeType::Agility, 0);
        attrs.set(AttributeType::Intelligence, 12);
        attrs.clamp_min(1);
        assert_eq!(attrs.get(AttributeType::Strength), 1);
        assert_eq!(attrs.get(AttributeType::Agility), 1);
        assert_eq!(attrs.get(AttributeType::Intelligence), 12);
    }

    #[test]
    fn test_index_returns_unique_values() {
        for (i, attr) in AttributeType::all().iter().enumerate() {
            assert_eq!(attr.index(), i);
        }
    }

    #[test]
    fn test_default_equals_new() {
        assert_eq!(Attributes::default(), Attributes::new());
    }
}
