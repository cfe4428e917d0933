//! Output configuration for serialized charts and printed values.

use crate::export::{ChartFormat, ChartLayout};

/// Largest precision an `f64` can meaningfully show.
pub const MAX_PRECISION: usize = 17;

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Decimal places for every printed or serialized number.
    pub precision: usize,
    /// Row layout for CSV output.
    pub layout: ChartLayout,
    /// Serialization format for charts.
    pub format: ChartFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: 6,
            layout: ChartLayout::Long,
            format: ChartFormat::Csv,
        }
    }
}

impl OutputConfig {
    /// Set the decimal precision (clamped to 0-17).
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision.min(MAX_PRECISION);
        self
    }

    /// Set the CSV row layout.
    pub fn with_layout(mut self, layout: ChartLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the chart serialization format.
    pub fn with_format(mut self, format: ChartFormat) -> Self {
        self.format = format;
        self
    }

    /// Render a number at the configured precision.
    pub fn format_value(&self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.precision)
    }
}
