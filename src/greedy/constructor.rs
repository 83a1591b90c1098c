//! Greedy construction of a single loadout.

use super::config::GreedyConfig;
use crate::model::Module;
use crate::scoring::PriorityWeights;
use rand::Rng;

/// Builds complete loadouts from a fixed candidate slice.
///
/// Loadouts are returned as positions into the candidate slice. The
/// working pool is ranked once at construction time; each call to
/// [`construct`](Self::construct) only draws a new random seed module and
/// runs the greedy completion.
pub struct GreedyConstructor<'a> {
    modules: &'a [Module],
    weights: &'a PriorityWeights,
    working_pool: Vec<usize>,
}

impl<'a> GreedyConstructor<'a> {
    /// Ranks `modules` by priority weight and keeps the working pool.
    ///
    /// Ranking is descending by weight; ties keep input order.
    pub fn new(modules: &'a [Module], weights: &'a PriorityWeights, config: &GreedyConfig) -> Self {
        let mut ranked: Vec<(usize, u64)> = modules
            .iter()
            .enumerate()
            .map(|(i, m)| (i, weights.module_weight(m)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let working_pool = ranked
            .into_iter()
            .take(config.working_pool_size)
            .map(|(i, _)| i)
            .collect();

        Self {
            modules,
            weights,
            working_pool,
        }
    }

    /// Positions of the working-pool modules, best-weighted first.
    pub fn working_pool(&self) -> &[usize] {
        &self.working_pool
    }

    /// Builds one loadout of exactly `num_slots` distinct modules.
    ///
    /// Returns `None` when the working pool cannot fill every slot; the
    /// caller treats that as a failed attempt.
    pub fn construct<R: Rng>(&self, num_slots: usize, rng: &mut R) -> Option<Vec<usize>> {
        if num_slots == 0 || self.working_pool.is_empty() {
            return None;
        }

        let first = self.working_pool[rng.random_range(0..self.working_pool.len())];
        let mut selected = Vec::with_capacity(num_slots);
        selected.push(first);

        for _ in 1..num_slots {
            let mut best: Option<(usize, u64)> = None;
            for &candidate in &self.working_pool {
                if selected.contains(&candidate) {
                    continue;
                }
                let score = self.weights.score(
                    selected
                        .iter()
                        .chain(std::iter::once(&candidate))
                        .map(|&i| &self.modules[i]),
                );
                if best.map_or(true, |(_, s)| score > s) {
                    best = Some((candidate, score));
                }
            }
            let (chosen, _) = best?;
            selected.push(chosen);
        }

        Some(selected)
    }
}
