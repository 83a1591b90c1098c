//! Per-effect top-K prefilter.

use crate::model::Module;
use std::collections::BTreeMap;
use tracing::debug;

/// Result of [`prefilter`].
#[derive(Debug, Clone)]
pub struct PrefilterOutcome {
    /// Surviving candidates, in their original relative order.
    pub candidates: Vec<Module>,
    /// Whether the pool exceeded the ceiling and was actually reduced.
    pub applied: bool,
}

/// Reduces `modules` to the union of every effect's top `top_k` modules.
///
/// Only applied when `modules.len() > ceiling`; otherwise the input is
/// returned as-is. For each distinct effect name the modules carrying it
/// are ranked by their level for that effect (descending, ties broken by
/// input order) and the first `top_k` are kept. The union is taken by
/// module position, so a module that ranks for several effects appears
/// once.
///
/// # Examples
///
/// ```
/// use u_loadout::filter::prefilter;
/// use u_loadout::model::Module;
///
/// let modules: Vec<Module> = (0..5)
///     .map(|i| Module::new(format!("m{i}")).with_effect(0, "Str", i + 1))
///     .collect();
///
/// let out = prefilter(modules, 3, 2);
/// assert!(out.applied);
/// let ids: Vec<_> = out.candidates.iter().map(|m| m.id.as_str()).collect();
/// assert_eq!(ids, ["m3", "m4"]);
/// ```
pub fn prefilter(modules: Vec<Module>, ceiling: usize, top_k: usize) -> PrefilterOutcome {
    if modules.len() <= ceiling {
        return PrefilterOutcome {
            candidates: modules,
            applied: false,
        };
    }

    // effect name -> (module position, level for that effect)
    let mut by_effect: BTreeMap<&str, Vec<(usize, u64)>> = BTreeMap::new();
    for (idx, module) in modules.iter().enumerate() {
        for effect in module.active_effects() {
            let entries = by_effect.entry(effect.name.as_str()).or_default();
            match entries.last_mut() {
                Some((last, level)) if *last == idx => *level += u64::from(effect.level),
                _ => entries.push((idx, u64::from(effect.level))),
            }
        }
    }

    let mut keep = vec![false; modules.len()];
    for entries in by_effect.values_mut() {
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        for &(idx, _) in entries.iter().take(top_k) {
            keep[idx] = true;
        }
    }
    let effect_count = by_effect.len();

    let before = modules.len();
    let candidates: Vec<Module> = modules
        .into_iter()
        .zip(keep)
        .filter_map(|(module, kept)| kept.then_some(module))
        .collect();

    debug!(
        before,
        after = candidates.len(),
        effects = effect_count,
        top_k,
        "attribute prefilter applied"
    );

    PrefilterOutcome {
        candidates,
        applied: true,
    }
}
