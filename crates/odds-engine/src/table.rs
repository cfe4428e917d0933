//! The rarity → odds mapping an engine is built from.
//!
//! Use [`OddsTable::standard`] for the game's own odds, or load a custom
//! table from JSON. A custom file maps tier names to "1 in N" lists:
//!
//! ```json
//! { "rare": [50.0], "very-rare": [200.0, 120.0, 80.0] }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{OddsError, OddsResult};
use crate::schedule::{OddsSchedule, preset};
use crate::tier::RarityTier;

/// An immutable mapping from rarity tier to its odds schedule.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OddsTable {
    schedules: BTreeMap<RarityTier, OddsSchedule>,
}

impl OddsTable {
    /// The game's built-in escalating tables for every tier.
    pub fn standard() -> Self {
        RarityTier::all()
            .iter()
            .map(|&tier| (tier, preset::standard(tier)))
            .collect()
    }

    /// Return a copy of this table with `tier` mapped to `schedule`.
    pub fn with_schedule(mut self, tier: RarityTier, schedule: OddsSchedule) -> Self {
        self.schedules.insert(tier, schedule);
        self
    }

    /// Look up the schedule for a tier.
    pub fn get(&self, tier: RarityTier) -> OddsResult<&OddsSchedule> {
        self.schedules
            .get(&tier)
            .ok_or_else(|| OddsError::UnknownTier {
                name: tier.to_string(),
                valid: self.tiers().map(|t| t.to_string()).collect(),
            })
    }

    /// Tiers present in this table, in tier order.
    pub fn tiers(&self) -> impl Iterator<Item = RarityTier> {
        self.schedules.keys().copied()
    }

    /// Iterate over every tier and its schedule.
    pub fn iter(&self) -> impl Iterator<Item = (RarityTier, &OddsSchedule)> {
        self.schedules.iter().map(|(t, s)| (*t, s))
    }

    /// Number of tiers in the table.
    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    /// Returns true if the table has no tiers.
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    /// Parse a custom table from JSON.
    pub fn from_json(json: &str) -> OddsResult<Self> {
        let raw: BTreeMap<String, Vec<f64>> =
            serde_json::from_str(json).map_err(|e| OddsError::Config(e.to_string()))?;

        if raw.is_empty() {
            return Err(OddsError::Config("table defines no tiers".to_string()));
        }

        let mut table = Self::default();
        for (name, one_in) in raw {
            let tier: RarityTier = name.parse()?;
            if table.schedules.contains_key(&tier) {
                return Err(OddsError::Config(format!(
                    "tier '{tier}' is defined more than once"
                )));
            }
            let schedule = OddsSchedule::from_one_in(one_in).map_err(|e| {
                OddsError::Config(format!("tier '{tier}': {e}"))
            })?;
            table.schedules.insert(tier, schedule);
        }
        Ok(table)
    }

    /// Read and parse a custom table from a JSON file.
    pub fn from_path(path: &Path) -> OddsResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            OddsError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }
}

impl FromIterator<(RarityTier, OddsSchedule)> for OddsTable {
    fn from_iter<I: IntoIterator<Item = (RarityTier, OddsSchedule)>>(iter: I) -> Self {
        Self {
            schedules: iter.into_iter().collect(),
        }
    }
}
