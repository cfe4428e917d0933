//! Chart serialization.
//!
//! Charts are written to any [`io::Write`] only after they are fully
//! computed, so a failed query never leaves a partial file behind.
//!
//! Two CSV layouts are supported:
//! - **Long**: one row per chart cell, with the header
//!   `start_trial,additional_trials,expected_value,probability`.
//! - **Wide**: one row per start trial, with the expected value followed by
//!   one probability column per additional-opening count.

use std::io;
use std::str::FromStr;

use crate::chart::OddsChart;
use crate::config::OutputConfig;
use crate::error::{OddsError, OddsResult};

/// Header of the long CSV layout.
pub const LONG_HEADER: [&str; 4] = [
    "start_trial",
    "additional_trials",
    "expected_value",
    "probability",
];

/// Row layout for CSV charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartLayout {
    /// One line per (start, additional) pair.
    #[default]
    Long,
    /// One line per start trial, probabilities spread across columns.
    Wide,
}

impl FromStr for ChartLayout {
    type Err = OddsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "long" => Ok(Self::Long),
            "wide" | "matrix" => Ok(Self::Wide),
            _ => Err(OddsError::InvalidArgument {
                field: "layout",
                value: s.to_string(),
                reason: "expected long or wide",
            }),
        }
    }
}

impl std::fmt::Display for ChartLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Long => write!(f, "long"),
            Self::Wide => write!(f, "wide"),
        }
    }
}

/// Serialization format for charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartFormat {
    /// Comma-separated values.
    #[default]
    Csv,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for ChartFormat {
    type Err = OddsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(OddsError::InvalidArgument {
                field: "format",
                value: s.to_string(),
                reason: "expected csv or json",
            }),
        }
    }
}

impl std::fmt::Display for ChartFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Write a chart in the format, layout and precision given by `config`.
pub fn write_chart<W: io::Write>(
    chart: &OddsChart,
    config: &OutputConfig,
    writer: W,
) -> OddsResult<()> {
    match config.format {
        ChartFormat::Csv => write_csv(chart, config, writer),
        ChartFormat::Json => write_json(chart, writer),
    }
}

/// Write a chart as CSV.
pub fn write_csv<W: io::Write>(
    chart: &OddsChart,
    config: &OutputConfig,
    writer: W,
) -> OddsResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    match config.layout {
        ChartLayout::Long => {
            wtr.write_record(LONG_HEADER)?;
            for row in &chart.rows {
                wtr.write_record([
                    row.start_trial.to_string(),
                    row.additional_trials.to_string(),
                    config.format_value(row.expected_value),
                    config.format_value(row.probability),
                ])?;
            }
        }
        ChartLayout::Wide => {
            wtr.write_record(
                ["start_trial".to_string(), "expected_value".to_string()]
                    .into_iter()
                    .chain((0..=chart.max_additional_trials).map(|n| n.to_string())),
            )?;
            for group in chart.by_start_trial() {
                let Some(first) = group.first() else {
                    continue;
                };
                wtr.write_record(
                    [
                        first.start_trial.to_string(),
                        config.format_value(first.expected_value),
                    ]
                    .into_iter()
                    .chain(group.iter().map(|r| config.format_value(r.probability))),
                )?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Write a chart as pretty-printed JSON.
pub fn write_json<W: io::Write>(chart: &OddsChart, mut writer: W) -> OddsResult<()> {
    serde_json::to_writer_pretty(&mut writer, chart).map_err(io::Error::from)?;
    writeln!(writer)?;
    Ok(())
}
