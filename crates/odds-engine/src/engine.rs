//! The odds engine: expected openings, success probabilities, and charts.
//!
//! Every query is a pure function of the engine's [`OddsTable`]. Let `p_k`
//! be the success probability of trial `k` and `s` the number of trials
//! already opened. The chance to still be empty-handed after `j` more
//! openings is
//!
//! ```text
//! S_j = ∏_{i<j} (1 − p_{s+i})
//! ```
//!
//! and the expected number of further openings is `Σ_j S_j`. The sum is
//! finite in closed form because the schedule is constant from its tail
//! entry on: `E = Σ_{j<m} S_j + S_m / p_tail`, where `m` counts the explicit
//! entries still ahead of the tail.

use tracing::{debug, trace};

use crate::chart::{ChartRow, OddsChart};
use crate::error::OddsResult;
use crate::query::{Query, QueryOutput};
use crate::schedule::OddsSchedule;
use crate::table::OddsTable;
use crate::tier::RarityTier;

/// Answers odds queries against a fixed table.
#[derive(Debug, Clone)]
pub struct OddsEngine {
    table: OddsTable,
}

impl Default for OddsEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl OddsEngine {
    /// Create an engine over the given table.
    pub fn new(table: OddsTable) -> Self {
        Self { table }
    }

    /// Create an engine over the game's built-in tables.
    pub fn standard() -> Self {
        Self::new(OddsTable::standard())
    }

    /// The table this engine answers from.
    pub fn table(&self) -> &OddsTable {
        &self.table
    }

    /// The schedule for a tier, or [`OddsError::UnknownTier`](crate::OddsError::UnknownTier).
    pub fn schedule(&self, tier: RarityTier) -> OddsResult<&OddsSchedule> {
        self.table.get(tier)
    }

    /// Expected number of additional openings until the item drops, given
    /// that `start_trial` openings have already missed.
    ///
    /// For a memoryless schedule (or once `start_trial` reaches the tail)
    /// this is exactly `1/p`.
    pub fn expected_value(&self, tier: RarityTier, start_trial: usize) -> OddsResult<f64> {
        let schedule = self.schedule(tier)?;
        let expected = expected_openings(schedule, start_trial);
        debug!(%tier, start_trial, expected, "computed expected value");
        Ok(expected)
    }

    /// Probability that the item drops within `additional_trials` more
    /// openings, given that `start_trial` openings have already missed.
    ///
    /// Returns exactly 0 when `additional_trials` is 0. Runs in
    /// O(`additional_trials`).
    pub fn probability(
        &self,
        tier: RarityTier,
        start_trial: usize,
        additional_trials: usize,
    ) -> OddsResult<f64> {
        let probability = self
            .probability_curve(tier, start_trial)?
            .nth(additional_trials)
            // The curve never ends.
            .unwrap_or(1.0);
        debug!(
            %tier,
            start_trial, additional_trials, probability, "computed probability"
        );
        Ok(probability)
    }

    /// Cumulative drop probability after 0, 1, 2, … more openings.
    ///
    /// The iterator is infinite and non-decreasing, starting at exactly 0.
    pub fn probability_curve(
        &self,
        tier: RarityTier,
        start_trial: usize,
    ) -> OddsResult<ProbabilityCurve<'_>> {
        Ok(ProbabilityCurve::new(self.schedule(tier)?, start_trial))
    }

    /// Tabulate every combination of start trial in `0..=max_start_trial`
    /// and additional trials in `0..=max_additional_trials`.
    ///
    /// Rows are ordered by ascending `start_trial`, then ascending
    /// `additional_trials`. The table holds
    /// `(max_start_trial + 1) * (max_additional_trials + 1)` rows; keeping
    /// that within memory is the caller's responsibility.
    pub fn generate_table(
        &self,
        tier: RarityTier,
        max_start_trial: usize,
        max_additional_trials: usize,
    ) -> OddsResult<OddsChart> {
        let schedule = self.schedule(tier)?;

        let mut rows = Vec::new();
        for start_trial in 0..=max_start_trial {
            let expected_value = expected_openings(schedule, start_trial);
            let curve = ProbabilityCurve::new(schedule, start_trial);
            rows.extend((0..=max_additional_trials).zip(curve).map(
                |(additional_trials, probability)| ChartRow {
                    start_trial,
                    additional_trials,
                    expected_value,
                    probability,
                },
            ));
            trace!(%tier, start_trial, expected_value, "tabulated start trial");
        }

        debug!(
            %tier,
            max_start_trial,
            max_additional_trials,
            rows = rows.len(),
            "generated chart"
        );
        Ok(OddsChart {
            tier,
            max_start_trial,
            max_additional_trials,
            rows,
        })
    }

    /// Answer any [`Query`].
    pub fn run(&self, query: Query) -> OddsResult<QueryOutput> {
        match query {
            Query::ExpectedValue(q) => self
                .expected_value(q.tier, q.start_trial)
                .map(QueryOutput::ExpectedValue),
            Query::Probability(q) => self
                .probability(q.tier, q.start_trial, q.additional_trials)
                .map(QueryOutput::Probability),
            Query::Chart(q) => self
                .generate_table(q.tier, q.max_start_trial, q.max_additional_trials)
                .map(QueryOutput::Chart),
        }
    }
}

/// Closed-form expectation of the non-identical geometric sum.
fn expected_openings(schedule: &OddsSchedule, start_trial: usize) -> f64 {
    let mut survival = 1.0;
    let mut expected = 0.0;
    for trial in start_trial..schedule.tail_start() {
        expected += survival;
        survival *= 1.0 - schedule.probability_at(trial);
    }
    // From the tail on, every opening has the same odds: a geometric
    // distribution with mean N.
    expected + survival * schedule.one_in()[schedule.tail_start()]
}

/// Iterator over cumulative drop probabilities, one per additional opening.
///
/// Created by [`OddsEngine::probability_curve`].
#[derive(Debug, Clone)]
pub struct ProbabilityCurve<'a> {
    schedule: &'a OddsSchedule,
    trial: usize,
    survival: f64,
}

impl<'a> ProbabilityCurve<'a> {
    fn new(schedule: &'a OddsSchedule, start_trial: usize) -> Self {
        Self {
            schedule,
            trial: start_trial,
            survival: 1.0,
        }
    }
}

impl Iterator for ProbabilityCurve<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let probability = (1.0 - self.survival).clamp(0.0, 1.0);
        self.survival *= 1.0 - self.schedule.probability_at(self.trial);
        self.trial = self.trial.saturating_add(1);
        Some(probability)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl std::iter::FusedIterator for ProbabilityCurve<'_> {}
