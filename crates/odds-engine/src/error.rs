//! Error types for the odds engine.

/// Errors that can occur during odds operations.
#[derive(Debug, thiserror::Error)]
pub enum OddsError {
    /// A rarity tier was not recognized, or is missing from the active table.
    #[error("unknown rarity tier '{name}' (valid tiers: {})", .valid.join(", "))]
    UnknownTier {
        /// The name that was supplied.
        name: String,
        /// Every tier the caller could have used instead.
        valid: Vec<String>,
    },

    /// A numeric input violated its constraint.
    #[error("invalid {field}: {value} ({reason})")]
    InvalidArgument {
        /// The offending field, as the user knows it.
        field: &'static str,
        /// The rejected value, rendered for display.
        value: String,
        /// What the value should have been.
        reason: &'static str,
    },

    /// An odds schedule failed validation.
    #[error("invalid odds schedule: {0}")]
    InvalidSchedule(String),

    /// A custom odds table could not be loaded.
    #[error("invalid odds table: {0}")]
    Config(String),

    /// Writing serialized output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV writer failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl OddsError {
    /// Build an [`OddsError::InvalidArgument`] for a value that must not be negative.
    pub fn negative(field: &'static str, value: i64) -> Self {
        Self::InvalidArgument {
            field,
            value: value.to_string(),
            reason: "must be 0 or greater",
        }
    }
}

/// Convenience result type for odds operations.
pub type OddsResult<T> = Result<T, OddsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tier_lists_valid_names() {
        let err = OddsError::UnknownTier {
            name: "mythic".to_string(),
            valid: vec!["rare".to_string(), "very-rare".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown rarity tier 'mythic' (valid tiers: rare, very-rare)"
        );
    }

    #[test]
    fn negative_names_field() {
        let err = OddsError::negative("additional_trials", -3);
        assert_eq!(
            err.to_string(),
            "invalid additional_trials: -3 (must be 0 or greater)"
        );
    }
}
