//! WebAssembly entry point.
//!
//! Exposes the optimizer to JavaScript hosts. Inputs and outputs use the
//! JSON wire shape: modules are `{ id, effects: [{ name, level } x 3] }`,
//! results are `{ totalScore, optimalModules, combinedEffects,
//! prioritizedEffects, stats }`.
//!
//! The call runs to completion synchronously; a browser host should run it
//! inside a Web Worker rather than on the UI thread.

use crate::model::Module;
use crate::optimizer::{OptimizerConfig, OptimizerRunner};
use wasm_bindgen::prelude::*;

/// Optimizes a loadout.
///
/// `seed` makes the run reproducible; omit it for a random seed.
#[wasm_bindgen(js_name = optimize)]
pub fn optimize_js(
    modules: JsValue,
    num_slots: usize,
    priority_effects: Vec<String>,
    seed: Option<u64>,
) -> Result<JsValue, JsError> {
    let modules: Vec<Module> = serde_wasm_bindgen::from_value(modules)?;

    let mut config = OptimizerConfig::default();
    config.seed = seed;

    let result = OptimizerRunner::run(&modules, num_slots, &priority_effects, &config)?;
    Ok(serde_wasm_bindgen::to_value(&result)?)
}
