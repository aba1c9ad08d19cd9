//! Memoization of corpus projections
//!
//! The calculator is pure, so a result can be reused for any goal with the
//! same inputs. The goal name is not part of the key: two goals with identical
//! numbers share one entry.

use super::engine::{project_corpus, GrowthModel};
use super::goals::FinancialGoal;
use std::collections::HashMap;

/// Full input tuple of a projection, floats keyed by bit pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GoalKey {
    model: GrowthModel,
    years: u64,
    monthly_contribution: u64,
    initial_amount: u64,
    annual_growth_rate: u64,
    annual_contribution_escalation: u64,
}

impl GoalKey {
    pub fn new(goal: &FinancialGoal, model: GrowthModel) -> Self {
        Self {
            model,
            years: float_key(goal.years),
            monthly_contribution: float_key(goal.monthly_contribution),
            initial_amount: float_key(goal.initial_amount),
            annual_growth_rate: float_key(goal.annual_growth_rate),
            annual_contribution_escalation: float_key(goal.annual_contribution_escalation),
        }
    }
}

// -0.0 and 0.0 project identically
fn float_key(value: f64) -> u64 {
    (value + 0.0).to_bits()
}

/// Hit/miss counters for a cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Caller-owned projection cache
#[derive(Debug, Clone, Default)]
pub struct ProjectionCache {
    entries: HashMap<GoalKey, f64>,
    hits: u64,
    misses: u64,
}

impl ProjectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Projected corpus for a goal, computed at most once per input tuple
    pub fn project(&mut self, goal: &FinancialGoal, model: GrowthModel) -> f64 {
        let key = GoalKey::new(goal, model);
        if let Some(&value) = self.entries.get(&key) {
            self.hits += 1;
            return value;
        }

        self.misses += 1;
        let value = project_corpus(goal, model);
        self.entries.insert(key, value);
        value
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}
