//! Priority multipliers, combined effects and combination scoring.

use super::tier::tier_score;
use crate::model::Module;
use std::collections::{BTreeMap, HashMap};

/// Multiplier by priority position. Positions past the end weigh 1.
pub const PRIORITY_MULTIPLIERS: [u64; 5] = [10, 7, 5, 3, 2];

/// Effect name to summed level across a set of modules.
pub type CombinedEffects = BTreeMap<String, u64>;

/// Sums each active effect's level across `combination`.
///
/// Values are exact integer sums with no clamping.
pub fn combined_effects<'a, I>(combination: I) -> CombinedEffects
where
    I: IntoIterator<Item = &'a Module>,
{
    let mut combined = CombinedEffects::new();
    for module in combination {
        for effect in module.active_effects() {
            *combined.entry(effect.name.clone()).or_insert(0) += u64::from(effect.level);
        }
    }
    combined
}

/// Scores `combination` against `priority_effects`.
///
/// Convenience wrapper that builds a [`PriorityWeights`] for one call.
/// Search loops build the weights once and call [`PriorityWeights::score`].
///
/// # Examples
///
/// ```
/// use u_loadout::model::Module;
/// use u_loadout::scoring::calculate_score;
///
/// let a = Module::new("a").with_effect(0, "Str", 10);
/// let b = Module::new("b").with_effect(0, "Str", 8).with_effect(1, "Agi", 9);
///
/// // Str 18 -> tier 16, Agi 9 -> tier 8
/// assert_eq!(calculate_score([&a, &b], &[] as &[&str]), 24);
/// // Str weighted x10 at priority position 0
/// assert_eq!(calculate_score([&a, &b], &["Str"]), 168);
/// ```
pub fn calculate_score<'a, I, S>(combination: I, priority_effects: &[S]) -> u64
where
    I: IntoIterator<Item = &'a Module>,
    S: AsRef<str>,
{
    PriorityWeights::new(priority_effects).score(combination)
}

/// Lookup from effect name to its priority multiplier.
///
/// When a name appears more than once in the priority list, its first
/// position wins.
#[derive(Debug, Clone, Default)]
pub struct PriorityWeights {
    order: Vec<String>,
    multipliers: HashMap<String, u64>,
}

impl PriorityWeights {
    /// Builds the lookup from an ordered priority list.
    pub fn new<S: AsRef<str>>(priority_effects: &[S]) -> Self {
        let mut order = Vec::with_capacity(priority_effects.len());
        let mut multipliers = HashMap::with_capacity(priority_effects.len());
        for (position, name) in priority_effects.iter().enumerate() {
            let name = name.as_ref();
            if multipliers.contains_key(name) {
                continue;
            }
            let multiplier = PRIORITY_MULTIPLIERS.get(position).copied().unwrap_or(1);
            multipliers.insert(name.to_string(), multiplier);
            order.push(name.to_string());
        }
        Self { order, multipliers }
    }

    /// Returns the multiplier for `name`, or `None` if it is not prioritized.
    pub fn multiplier(&self, name: &str) -> Option<u64> {
        self.multipliers.get(name).copied()
    }

    /// Returns `true` if `name` is on the priority list.
    pub fn contains(&self, name: &str) -> bool {
        self.multipliers.contains_key(name)
    }

    /// Returns `true` if no effect is prioritized.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Prioritized effect names in priority order, without duplicates.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Returns `true` if `module` has an active slot whose effect is prioritized.
    pub fn touches(&self, module: &Module) -> bool {
        module.active_effects().any(|e| self.contains(&e.name))
    }

    /// Greedy ranking weight of a single module.
    ///
    /// Sum over its active slots of `level * multiplier`, where effects
    /// off the priority list contribute nothing.
    pub fn module_weight(&self, module: &Module) -> u64 {
        module
            .active_effects()
            .map(|e| u64::from(e.level) * self.multiplier(&e.name).unwrap_or(0))
            .sum()
    }

    /// Tiered, priority-weighted score of a set of modules.
    pub fn score<'a, I>(&self, combination: I) -> u64
    where
        I: IntoIterator<Item = &'a Module>,
    {
        let mut levels: HashMap<&'a str, u64> = HashMap::new();
        for module in combination {
            for effect in module.active_effects() {
                *levels.entry(effect.name.as_str()).or_insert(0) += u64::from(effect.level);
            }
        }
        levels
            .into_iter()
            .map(|(name, level)| tier_score(level) * self.multiplier(name).unwrap_or(1))
            .sum()
    }

    /// Restricts `combined` to the prioritized effects.
    pub fn prioritized(&self, combined: &CombinedEffects) -> CombinedEffects {
        combined
            .iter()
            .filter(|(name, _)| self.contains(name))
            .map(|(name, &level)| (name.clone(), level))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn str_agi() -> (Module, Module, Module) {
        (
            Module::new("A").with_effect(0, "Str", 10),
            Module::new("B")
                .with_effect(0, "Str", 8)
                .with_effect(1, "Agi", 9),
            Module::new("C").with_effect(0, "Agi", 10),
        )
    }

    #[test]
    fn test_combined_effects_exact_sums() {
        let (a, b, c) = str_agi();
        let combined = combined_effects([&a, &b, &c]);
        assert_eq!(combined.get("Str"), Some(&18));
        assert_eq!(combined.get("Agi"), Some(&19));
        assert_eq!(combined.len(), 2);
    }

    #[test]
    fn test_combined_effects_skip_inactive_slots() {
        let m = Module::new("m")
            .with_effect(0, "Str", 3)
            .with_effect(1, "Agi", 0)
            .with_effect(2, "", 4);
        let combined = combined_effects([&m]);
        assert_eq!(combined.len(), 1);
        assert_eq!(combined["Str"], 3);
    }

    #[test]
    fn test_combined_effects_past_u32_range() {
        let a = Module::new("a").with_effect(0, "Str", 3_000_000_000);
        let b = Module::new("b").with_effect(0, "Str", 3_000_000_000);
        let combined = combined_effects([&a, &b]);
        assert_eq!(combined["Str"], 6_000_000_000);
        assert_eq!(calculate_score([&a, &b], &["Str"]), 200);
    }

    #[test]
    fn test_module_weight_past_u32_range() {
        let a = Module::new("a").with_effect(0, "Str", 500_000_000);
        let w = PriorityWeights::new(&["Str"]);
        assert_eq!(w.module_weight(&a), 5_000_000_000);
    }

    #[test]
    fn test_unweighted_scores() {
        let (a, b, c) = str_agi();
        let none: [&str; 0] = [];
        assert_eq!(calculate_score([&a, &c], &none), 8 + 8);
        assert_eq!(calculate_score([&a, &b], &none), 16 + 8);
        assert_eq!(calculate_score([&b, &c], &none), 8 + 16);
    }

    #[test]
    fn test_priority_positions() {
        let w = PriorityWeights::new(&["a", "b", "c", "d", "e", "f"]);
        assert_eq!(w.multiplier("a"), Some(10));
        assert_eq!(w.multiplier("b"), Some(7));
        assert_eq!(w.multiplier("c"), Some(5));
        assert_eq!(w.multiplier("d"), Some(3));
        assert_eq!(w.multiplier("e"), Some(2));
        assert_eq!(w.multiplier("f"), Some(1));
        assert_eq!(w.multiplier("g"), None);
    }

    #[test]
    fn test_duplicate_priority_first_position_wins() {
        let w = PriorityWeights::new(&["x", "y", "x"]);
        assert_eq!(w.multiplier("x"), Some(10));
        assert_eq!(w.names(), &["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_module_weight_ignores_unprioritized() {
        let (_, b, _) = str_agi();
        let w = PriorityWeights::new(&["Agi"]);
        assert_eq!(w.module_weight(&b), 90);
        assert_eq!(PriorityWeights::default().module_weight(&b), 0);
    }

    #[test]
    fn test_prioritized_restriction() {
        let (a, b, _) = str_agi();
        let w = PriorityWeights::new(&["Str", "Luck"]);
        let combined = combined_effects([&a, &b]);
        let prioritized = w.prioritized(&combined);
        assert_eq!(prioritized.len(), 1);
        assert_eq!(prioritized["Str"], 18);
    }

    #[test]
    fn test_score_is_pure() {
        let (a, b, c) = str_agi();
        let first = calculate_score([&a, &b, &c], &["Agi", "Str"]);
        for _ in 0..5 {
            assert_eq!(calculate_score([&a, &b, &c], &["Agi", "Str"]), first);
        }
        // Agi 19 -> 16 * 10, Str 18 -> 16 * 7
        assert_eq!(first, 160 + 112);
    }

    #[test]
    fn test_score_order_independent() {
        let (a, b, c) = str_agi();
        assert_eq!(
            calculate_score([&a, &b, &c], &["Str"]),
            calculate_score([&c, &a, &b], &["Str"])
        );
    }
}
