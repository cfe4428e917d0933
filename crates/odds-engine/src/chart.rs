//! Tabulated results produced by
//! [`OddsEngine::generate_table`](crate::OddsEngine::generate_table).

use serde::{Deserialize, Serialize};

use crate::tier::RarityTier;

/// One cell of the start × additional grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    /// Openings already made without a drop.
    pub start_trial: usize,
    /// Further openings considered.
    pub additional_trials: usize,
    /// Expected further openings from `start_trial` (same for the whole group).
    pub expected_value: f64,
    /// Probability of a drop within `additional_trials` openings.
    pub probability: f64,
}

/// A full chart for one tier.
///
/// Rows are ordered by ascending `start_trial`, then ascending
/// `additional_trials`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsChart {
    /// The tier that was charted.
    pub tier: RarityTier,
    /// Largest start trial in the chart.
    pub max_start_trial: usize,
    /// Largest additional-trial count in the chart.
    pub max_additional_trials: usize,
    /// All rows, in chart order.
    pub rows: Vec<ChartRow>,
}

impl OddsChart {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the chart has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows grouped by start trial, one slice per group.
    pub fn by_start_trial(&self) -> impl Iterator<Item = &[ChartRow]> {
        self.rows.chunk_by(|a, b| a.start_trial == b.start_trial)
    }
}
