//! Module validation.

use crate::model::Module;

/// Keeps modules with at least one slot that has a name and a non-zero level.
///
/// Order-preserving and idempotent. The input is not modified.
pub fn valid_modules(modules: &[Module]) -> Vec<Module> {
    modules.iter().filter(|m| m.is_valid()).cloned().collect()
}
