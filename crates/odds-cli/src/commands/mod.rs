pub mod chart;
pub mod expected_value;
pub mod probability;
pub mod tiers;

use std::path::Path;

use odds_engine::{OddsEngine, OddsTable, RarityTier};
use tracing::info;

/// Build the engine from a custom odds file, or the built-in tables.
pub fn load_engine(odds: Option<&Path>) -> Result<OddsEngine, String> {
    let table = match odds {
        Some(path) => {
            let table = OddsTable::from_path(path).map_err(|e| e.to_string())?;
            info!(path = %path.display(), tiers = table.len(), "loaded custom odds table");
            table
        }
        None => OddsTable::standard(),
    };
    Ok(OddsEngine::new(table))
}

/// Parse a tier name, reporting the valid names on failure.
fn parse_tier(name: &str) -> Result<RarityTier, String> {
    name.parse().map_err(|e: odds_engine::OddsError| e.to_string())
}
