//! Query shapes accepted by [`OddsEngine::run`](crate::OddsEngine::run).
//!
//! Counts arrive from users as signed integers. The constructors here are the
//! boundary where negative values are rejected, so the engine itself only
//! ever sees `usize`.

use serde::{Deserialize, Serialize};

use crate::chart::OddsChart;
use crate::error::{OddsError, OddsResult};
use crate::tier::RarityTier;

/// Expected openings needed from a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedValueQuery {
    /// The tier being opened for.
    pub tier: RarityTier,
    /// Openings already made without a drop.
    pub start_trial: usize,
}

impl ExpectedValueQuery {
    /// Validate and build the query.
    pub fn new(tier: RarityTier, start_trial: i64) -> OddsResult<Self> {
        Ok(Self {
            tier,
            start_trial: non_negative("start_trial", start_trial)?,
        })
    }
}

/// Drop probability within a number of further openings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbabilityQuery {
    /// The tier being opened for.
    pub tier: RarityTier,
    /// Openings already made without a drop.
    pub start_trial: usize,
    /// Openings still to make.
    pub additional_trials: usize,
}

impl ProbabilityQuery {
    /// Validate and build the query.
    pub fn new(tier: RarityTier, start_trial: i64, additional_trials: i64) -> OddsResult<Self> {
        Ok(Self {
            tier,
            start_trial: non_negative("start_trial", start_trial)?,
            additional_trials: non_negative("additional_trials", additional_trials)?,
        })
    }
}

/// A full start × additional table for charting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartQuery {
    /// The tier being opened for.
    pub tier: RarityTier,
    /// Largest start trial to tabulate (inclusive).
    pub max_start_trial: usize,
    /// Largest number of additional openings to tabulate (inclusive).
    pub max_additional_trials: usize,
}

impl ChartQuery {
    /// Validate and build the query.
    pub fn new(
        tier: RarityTier,
        max_start_trial: i64,
        max_additional_trials: i64,
    ) -> OddsResult<Self> {
        Ok(Self {
            tier,
            max_start_trial: non_negative("max_start_trial", max_start_trial)?,
            max_additional_trials: non_negative("max_additional_trials", max_additional_trials)?,
        })
    }
}

/// Any request the engine can answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Query {
    /// See [`ExpectedValueQuery`].
    ExpectedValue(ExpectedValueQuery),
    /// See [`ProbabilityQuery`].
    Probability(ProbabilityQuery),
    /// See [`ChartQuery`].
    Chart(ChartQuery),
}

impl Query {
    /// The tier this query is about.
    pub fn tier(&self) -> RarityTier {
        match self {
            Self::ExpectedValue(q) => q.tier,
            Self::Probability(q) => q.tier,
            Self::Chart(q) => q.tier,
        }
    }
}

/// The answer to a [`Query`].
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutput {
    /// Expected number of further openings.
    ExpectedValue(f64),
    /// Probability in `[0, 1]`.
    Probability(f64),
    /// A tabulated chart.
    Chart(OddsChart),
}

fn non_negative(field: &'static str, value: i64) -> OddsResult<usize> {
    if value < 0 {
        return Err(OddsError::negative(field, value));
    }
    usize::try_from(value).map_err(|_| OddsError::InvalidArgument {
        field,
        value: value.to_string(),
        reason: "too large for this platform",
    })
}
