use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use odds_engine::{ChartQuery, OddsEngine, OutputConfig, write_chart};
use tracing::info;

pub fn run(
    engine: &OddsEngine,
    tier: &str,
    max_start: i64,
    max_additional: i64,
    output: Option<&Path>,
    config: &OutputConfig,
) -> Result<(), String> {
    let tier = super::parse_tier(tier)?;
    let query = ChartQuery::new(tier, max_start, max_additional).map_err(|e| e.to_string())?;

    // Compute everything before touching the output.
    let chart = engine
        .generate_table(query.tier, query.max_start_trial, query.max_additional_trials)
        .map_err(|e| e.to_string())?;

    if let Some(path) = output {
        let file = File::create(path)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        let mut writer = BufWriter::new(file);
        write_chart(&chart, config, &mut writer).map_err(|e| e.to_string())?;
        writer
            .flush()
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        info!(path = %path.display(), format = %config.format, "chart written");
        println!("  Wrote {} rows to {}", chart.len(), path.display());
    } else {
        let stdout = io::stdout();
        write_chart(&chart, config, stdout.lock()).map_err(|e| e.to_string())?;
    }

    Ok(())
}
