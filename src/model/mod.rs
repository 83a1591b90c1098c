//! Module inventory data model.
//!
//! A [`Module`] is a game item with exactly three effect slots. The first
//! two slots hold levels up to [`MAX_PRIMARY_LEVEL`]; the third (bonus)
//! slot, present only on higher-rarity modules, holds levels up to
//! [`MAX_BONUS_LEVEL`]. An unused slot has an empty name and level 0.
//!
//! Rarity is a convention of the data, not a separate type: a two-effect
//! module is simply one whose third slot is empty.

mod edit;
mod types;

pub use edit::{
    available_effects, remove_module, set_effect_level, set_effect_name, DEFAULT_NAME_PREFIX,
};
pub use types::{EffectSlot, Module, MAX_BONUS_LEVEL, MAX_PRIMARY_LEVEL, SLOTS_PER_MODULE};
