//! Per-opening drop odds.
//!
//! An [`OddsSchedule`] lists the "1 in N" odds of each treasure opening in
//! order. Entry `k` applies to trial `k` (the `k+1`th opening). Once the list
//! runs out, its last entry repeats forever; that entry is the *tail*.
//!
//! A single-entry schedule is the memoryless case: every opening has the same
//! chance. Longer schedules model escalating ("pity") odds, where each miss
//! makes the next opening more likely to drop the item.

pub mod preset;

use serde::{Deserialize, Serialize};

use crate::error::{OddsError, OddsResult};

/// Per-trial odds for one rarity tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct OddsSchedule {
    one_in: Vec<f64>,
}

impl OddsSchedule {
    /// A memoryless schedule where every trial succeeds with probability `p`.
    ///
    /// `p` must lie strictly between 0 and 1.
    pub fn constant(p: f64) -> OddsResult<Self> {
        if !(p.is_finite() && p > 0.0 && p < 1.0) {
            return Err(OddsError::InvalidSchedule(format!(
                "probability {p} is not strictly between 0 and 1"
            )));
        }
        Ok(Self {
            one_in: vec![1.0 / p],
        })
    }

    /// Build a schedule from "1 in N" odds, one per opening.
    ///
    /// The list must be non-empty and every `N` finite and at least 1.
    pub fn from_one_in(one_in: Vec<f64>) -> OddsResult<Self> {
        if one_in.is_empty() {
            return Err(OddsError::InvalidSchedule(
                "schedule has no entries".to_string(),
            ));
        }
        if let Some((i, n)) = one_in
            .iter()
            .enumerate()
            .find(|(_, n)| !(n.is_finite() && **n >= 1.0))
        {
            return Err(OddsError::InvalidSchedule(format!(
                "entry {i} is 1 in {n}; odds must be at least 1 in 1"
            )));
        }
        Ok(Self { one_in })
    }

    /// The raw "1 in N" odds.
    pub fn one_in(&self) -> &[f64] {
        &self.one_in
    }

    /// Number of explicit entries, including the tail entry.
    pub fn len(&self) -> usize {
        self.one_in.len()
    }

    /// Always false: a schedule holds at least one entry.
    pub fn is_empty(&self) -> bool {
        self.one_in.is_empty()
    }

    /// Index of the entry that repeats once the list runs out.
    pub fn tail_start(&self) -> usize {
        self.one_in.len() - 1
    }

    /// Success probability of the trial at `trial` (0-based).
    pub fn probability_at(&self, trial: usize) -> f64 {
        1.0 / self.one_in[trial.min(self.tail_start())]
    }

    /// Success probability of the very first opening.
    pub fn base_probability(&self) -> f64 {
        self.probability_at(0)
    }

    /// Success probability of every opening at or past [`tail_start`](Self::tail_start).
    pub fn tail_probability(&self) -> f64 {
        self.probability_at(self.tail_start())
    }

    /// The first trial whose drop is certain, if the schedule reaches one.
    pub fn guaranteed_at(&self) -> Option<usize> {
        self.one_in.iter().position(|&n| n <= 1.0)
    }

    /// Returns true if every trial has the same odds.
    pub fn is_memoryless(&self) -> bool {
        let tail = self.one_in[self.tail_start()];
        self.one_in.iter().all(|&n| n == tail)
    }
}

impl TryFrom<Vec<f64>> for OddsSchedule {
    type Error = OddsError;

    fn try_from(one_in: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_one_in(one_in)
    }
}

impl From<OddsSchedule> for Vec<f64> {
    fn from(schedule: OddsSchedule) -> Self {
        schedule.one_in
    }
}
