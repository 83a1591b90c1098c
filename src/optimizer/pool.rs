//! Deduplicated store of discovered loadouts.

use super::config::TieBreaker;
use crate::model::Module;
use std::collections::HashSet;

/// A complete loadout and its score.
///
/// Identity is the sorted list of member ids, so the same modules in a
/// different slot order are the same solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    members: Vec<usize>,
    key: Vec<String>,
    score: u64,
}

impl Solution {
    /// Positions of the members in the candidate slice.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Sorted member ids.
    pub fn key(&self) -> &[String] {
        &self.key
    }

    /// Tiered, priority-weighted score.
    pub fn score(&self) -> u64 {
        self.score
    }
}

/// Builds the order-independent identity of a loadout.
pub(crate) fn solution_key(members: &[usize], modules: &[Module]) -> Vec<String> {
    let mut key: Vec<String> = members.iter().map(|&i| modules[i].id.clone()).collect();
    key.sort_unstable();
    key
}

/// Distinct loadouts discovered by one optimization call, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct SolutionPool {
    solutions: Vec<Solution>,
    keys: HashSet<Vec<String>>,
}

impl SolutionPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct loadouts.
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// Returns `true` if nothing has been pooled.
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Returns `true` if a loadout with this sorted-id key is pooled.
    pub fn contains_key(&self, key: &[String]) -> bool {
        self.keys.contains(key)
    }

    /// Inserts a loadout unless one with the same members is already pooled.
    ///
    /// `score` is only evaluated for new loadouts. Returns `true` if the
    /// loadout was inserted.
    pub fn insert_with<F>(&mut self, members: Vec<usize>, modules: &[Module], score: F) -> bool
    where
        F: FnOnce(&[usize]) -> u64,
    {
        let key = solution_key(&members, modules);
        if self.keys.contains(&key) {
            return false;
        }
        let score = score(&members);
        self.keys.insert(key.clone());
        self.solutions.push(Solution {
            members,
            key,
            score,
        });
        true
    }

    /// Iterates over pooled loadouts in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Solution> {
        self.solutions.iter()
    }

    /// Highest score pooled so far.
    pub fn best_score(&self) -> Option<u64> {
        self.solutions.iter().map(Solution::score).max()
    }

    /// Returns the best loadout under `tie_breaker`.
    pub fn best(&self, tie_breaker: TieBreaker) -> Option<&Solution> {
        let mut best: Option<&Solution> = None;
        for candidate in &self.solutions {
            let replace = match best {
                None => true,
                Some(current) => match tie_breaker {
                    TieBreaker::DiscoveryOrder => candidate.score > current.score,
                    TieBreaker::LowestKey => {
                        candidate.score > current.score
                            || (candidate.score == current.score && candidate.key < current.key)
                    }
                },
            };
            if replace {
                best = Some(candidate);
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modules() -> Vec<Module> {
        ["c", "a", "b", "d"]
            .iter()
            .map(|id| Module::new(*id).with_effect(0, "Str", 1))
            .collect()
    }

    #[test]
    fn test_dedup_is_order_independent() {
        let modules = modules();
        let mut pool = SolutionPool::new();
        assert!(pool.insert_with(vec![0, 1], &modules, |_| 5));
        assert!(!pool.insert_with(vec![1, 0], &modules, |_| 5));
        assert_eq!(pool.len(), 1);
        assert!(pool.contains_key(&["a".to_string(), "c".to_string()]));
    }

    #[test]
    fn test_duplicate_skips_scoring() {
        let modules = modules();
        let mut pool = SolutionPool::new();
        pool.insert_with(vec![0, 1], &modules, |_| 5);
        let mut scored = false;
        pool.insert_with(vec![1, 0], &modules, |_| {
            scored = true;
            0
        });
        assert!(!scored);
    }

    #[test]
    fn test_best_discovery_order_first_wins() {
        let modules = modules();
        let mut pool = SolutionPool::new();
        pool.insert_with(vec![0, 3], &modules, |_| 7);
        pool.insert_with(vec![1, 2], &modules, |_| 7);
        pool.insert_with(vec![2, 3], &modules, |_| 3);

        let best = pool.best(TieBreaker::DiscoveryOrder).unwrap();
        assert_eq!(best.members(), &[0, 3]);
        assert_eq!(pool.best_score(), Some(7));
    }

    #[test]
    fn test_best_lowest_key() {
        let modules = modules();
        let mut pool = SolutionPool::new();
        pool.insert_with(vec![0, 3], &modules, |_| 7);
        pool.insert_with(vec![1, 2], &modules, |_| 7);

        let best = pool.best(TieBreaker::LowestKey).unwrap();
        assert_eq!(best.key(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_higher_score_beats_tie_rule() {
        let modules = modules();
        let mut pool = SolutionPool::new();
        pool.insert_with(vec![1, 2], &modules, |_| 4);
        pool.insert_with(vec![0, 3], &modules, |_| 9);

        for tb in [TieBreaker::DiscoveryOrder, TieBreaker::LowestKey] {
            assert_eq!(pool.best(tb).unwrap().score(), 9);
        }
    }

    #[test]
    fn test_empty_pool() {
        let pool = SolutionPool::new();
        assert!(pool.is_empty());
        assert!(pool.best(TieBreaker::DiscoveryOrder).is_none());
        assert_eq!(pool.best_score(), None);
    }
}
