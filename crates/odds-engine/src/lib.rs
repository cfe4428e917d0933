//! Drop-odds engine for treasure openings.
//!
//! Given a rarity tier and how many treasures have already been opened
//! without a drop, computes the expected number of further openings and
//! the chance of a drop within N openings. The game's odds escalate with
//! every opening, so each tier carries a per-opening [`OddsSchedule`]
//! rather than a single probability. Charts of both values can be
//! tabulated and serialized for plotting.

pub mod chart;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod query;
pub mod schedule;
pub mod table;
pub mod tier;

pub use chart::{ChartRow, OddsChart};
pub use config::OutputConfig;
pub use engine::{OddsEngine, ProbabilityCurve};
pub use error::{OddsError, OddsResult};
pub use export::{ChartFormat, ChartLayout, write_chart};
pub use query::{ChartQuery, ExpectedValueQuery, ProbabilityQuery, Query, QueryOutput};
pub use schedule::OddsSchedule;
pub use table::OddsTable;
pub use tier::RarityTier;
