//! Module and effect slot types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of effect slots on every module.
pub const SLOTS_PER_MODULE: usize = 3;

/// Level cap for the two primary slots.
pub const MAX_PRIMARY_LEVEL: u32 = 10;

/// Level cap for the bonus (third) slot.
pub const MAX_BONUS_LEVEL: u32 = 5;

/// One named attribute assignment on a module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EffectSlot {
    /// Effect name. Empty when the slot is unused.
    pub name: String,
    /// Effect level. Zero when the slot is unused.
    pub level: u32,
}

impl EffectSlot {
    /// Creates a slot with the given effect name and level.
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }

    /// Creates an unused slot.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if this slot carries a named effect with a non-zero level.
    pub fn is_active(&self) -> bool {
        !self.name.is_empty() && self.level > 0
    }

    /// Level cap of the slot at `position`.
    pub fn max_level(position: usize) -> u32 {
        if position < 2 {
            MAX_PRIMARY_LEVEL
        } else {
            MAX_BONUS_LEVEL
        }
    }
}

/// A game item carrying up to three effects.
///
/// # Examples
///
/// ```
/// use u_loadout::model::Module;
///
/// let m = Module::new("Module 1").with_effect(0, "Strength Boost", 8);
/// assert!(m.is_valid());
/// assert_eq!(m.level_of("Strength Boost"), 8);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Module {
    /// Caller-assigned identifier.
    pub id: String,
    /// The three effect slots.
    pub effects: [EffectSlot; SLOTS_PER_MODULE],
}

impl Module {
    /// Creates a module with all slots unused.
    ///
    /// The result is not valid until an effect is set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            effects: Default::default(),
        }
    }

    /// Sets slot `position` and returns the module.
    ///
    /// Positions outside `0..3` are ignored.
    pub fn with_effect(mut self, position: usize, name: impl Into<String>, level: u32) -> Self {
        if let Some(slot) = self.effects.get_mut(position) {
            *slot = EffectSlot::new(name, level);
        }
        self
    }

    /// Iterates over slots with a non-empty name and non-zero level.
    pub fn active_effects(&self) -> impl Iterator<Item = &EffectSlot> {
        self.effects.iter().filter(|e| e.is_active())
    }

    /// Returns `true` if at least one slot is active.
    pub fn is_valid(&self) -> bool {
        self.effects.iter().any(EffectSlot::is_active)
    }

    /// Total level this module carries for `name`, summed over its slots.
    pub fn level_of(&self, name: &str) -> u64 {
        self.active_effects()
            .filter(|e| e.name == name)
            .map(|e| u64::from(e.level))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_module_is_invalid() {
        let m = Module::new("Module 1");
        assert!(!m.is_valid());
        assert_eq!(m.active_effects().count(), 0);
    }

    #[test]
    fn test_named_zero_level_slot_is_inactive() {
        let m = Module::new("m").with_effect(0, "Agility Boost", 0);
        assert!(!m.is_valid());
    }

    #[test]
    fn test_level_without_name_is_inactive() {
        let m = Module::new("m").with_effect(1, "", 7);
        assert!(!m.is_valid());
    }

    #[test]
    fn test_with_effect_out_of_range_ignored() {
        let m = Module::new("m").with_effect(5, "Luck Focus", 3);
        assert_eq!(m, Module::new("m"));
    }

    #[test]
    fn test_level_of_sums_repeated_slots() {
        let m = Module::new("m")
            .with_effect(0, "Crit Focus", 4)
            .with_effect(2, "Crit Focus", 2);
        assert_eq!(m.level_of("Crit Focus"), 6);
        assert_eq!(m.level_of("Missing"), 0);
    }

    #[test]
    fn test_slot_caps() {
        assert_eq!(EffectSlot::max_level(0), 10);
        assert_eq!(EffectSlot::max_level(1), 10);
        assert_eq!(EffectSlot::max_level(2), 5);
    }
}
