//! Inventory editing helpers.
//!
//! Pure functions over a module list: each returns a new list and leaves
//! the input untouched, so a caller can swap inventories atomically and
//! never mutates a list an optimization run is still reading.

use super::types::{EffectSlot, Module};

/// Prefix used when renumbering module ids.
pub const DEFAULT_NAME_PREFIX: &str = "Module";

/// Sets the effect name of one slot.
///
/// A module never carries the same effect twice: any other slot of the
/// same module already holding `name` is cleared. Out-of-range indices
/// return the list unchanged.
pub fn set_effect_name(
    modules: &[Module],
    module_index: usize,
    slot_index: usize,
    name: &str,
) -> Vec<Module> {
    modules
        .iter()
        .enumerate()
        .map(|(i, module)| {
            if i != module_index || slot_index >= module.effects.len() {
                return module.clone();
            }
            let mut edited = module.clone();
            if !name.is_empty() {
                for (idx, slot) in edited.effects.iter_mut().enumerate() {
                    if idx != slot_index && slot.name == name {
                        slot.name.clear();
                    }
                }
            }
            edited.effects[slot_index].name = name.to_string();
            edited
        })
        .collect()
}

/// Sets the level of one slot, clamped to that slot's rarity cap.
pub fn set_effect_level(
    modules: &[Module],
    module_index: usize,
    slot_index: usize,
    level: u32,
) -> Vec<Module> {
    modules
        .iter()
        .enumerate()
        .map(|(i, module)| {
            let mut edited = module.clone();
            if i == module_index {
                if let Some(slot) = edited.effects.get_mut(slot_index) {
                    slot.level = level.min(EffectSlot::max_level(slot_index));
                }
            }
            edited
        })
        .collect()
}

/// Removes the module at `index` and renumbers the rest as `"Module N"`.
///
/// The last remaining module is never removed.
pub fn remove_module(modules: &[Module], index: usize) -> Vec<Module> {
    if modules.len() <= 1 || index >= modules.len() {
        return modules.to_vec();
    }
    modules
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .enumerate()
        .map(|(n, (_, module))| Module {
            id: format!("{DEFAULT_NAME_PREFIX} {}", n + 1),
            effects: module.effects.clone(),
        })
        .collect()
}

/// Catalogue effects not already on the priority list, in catalogue order.
pub fn available_effects<'a, S: AsRef<str>>(catalog: &'a [S], priority: &[S]) -> Vec<&'a str> {
    catalog
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| !priority.iter().any(|p| p.as_ref() == *name))
        .collect()
}
