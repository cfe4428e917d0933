//! Rarity tiers.
//!
//! A tier is the category of reward being hunted. Each tier maps to an
//! [`OddsSchedule`](crate::schedule::OddsSchedule) in the active
//! [`OddsTable`](crate::table::OddsTable).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OddsError;

/// The rarity of the item being opened for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum RarityTier {
    /// Rare drop.
    Rare,
    /// Very rare drop.
    VeryRare,
    /// Ultra rare drop.
    UltraRare,
}

impl RarityTier {
    /// All tiers, from most to least common.
    pub fn all() -> &'static [Self] {
        &[Self::Rare, Self::VeryRare, Self::UltraRare]
    }

    /// The canonical name used on the command line and in odds files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rare => "rare",
            Self::VeryRare => "very-rare",
            Self::UltraRare => "ultra-rare",
        }
    }

    /// Canonical names of every tier, in [`RarityTier::all`] order.
    pub fn names() -> Vec<String> {
        Self::all().iter().map(|t| t.name().to_string()).collect()
    }
}

impl FromStr for RarityTier {
    type Err = OddsError;

    /// Parse a tier name. Case and separators (`-`, `_`, space) are ignored,
    /// so `very-rare`, `VeryRare` and `very_rare` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "rare" => Ok(Self::Rare),
            "veryrare" => Ok(Self::VeryRare),
            "ultrarare" => Ok(Self::UltraRare),
            _ => Err(OddsError::UnknownTier {
                name: s.to_string(),
                valid: Self::names(),
            }),
        }
    }
}

impl std::fmt::Display for RarityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonical_names() {
        assert_eq!("rare".parse::<RarityTier>().unwrap(), RarityTier::Rare);
        assert_eq!(
            "very-rare".parse::<RarityTier>().unwrap(),
            RarityTier::VeryRare
        );
        assert_eq!(
            "ultra-rare".parse::<RarityTier>().unwrap(),
            RarityTier::UltraRare
        );
    }

    #[test]
    fn parse_ignores_case_and_separators() {
        assert_eq!(
            "VeryRare".parse::<RarityTier>().unwrap(),
            RarityTier::VeryRare
        );
        assert_eq!(
            "ultra_rare".parse::<RarityTier>().unwrap(),
            RarityTier::UltraRare
        );
        assert_eq!(
            " Very Rare ".parse::<RarityTier>().unwrap(),
            RarityTier::VeryRare
        );
    }

    #[test]
    fn parse_unknown_lists_valid_tiers() {
        let err = "mythic".parse::<RarityTier>().unwrap_err();
        match err {
            OddsError::UnknownTier { name, valid } => {
                assert_eq!(name, "mythic");
                assert_eq!(valid, vec!["rare", "very-rare", "ultra-rare"]);
            }
            other => panic!("expected UnknownTier, got {other:?}"),
        }
    }

    #[test]
    fn display_round_trips() {
        for tier in RarityTier::all() {
            assert_eq!(tier.to_string().parse::<RarityTier>().unwrap(), *tier);
        }
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&RarityTier::VeryRare).unwrap();
        assert_eq!(json, "\"very-rare\"");
    }
}
