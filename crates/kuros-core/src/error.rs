//! Configuration errors.

/// Errors raised while loading or validating an enemy profile.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Profile JSON could not be parsed.
    #[error("failed to parse profile: {0}")]
    Parse(#[from] serde_json::Error),

    /// A numeric field is negative, NaN or infinite.
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidValue { field: String, value: f32 },

    /// A numeric field that may be negative is NaN or infinite.
    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: String, value: f32 },

    /// A numeric field that must be strictly positive is not.
    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: String, value: f32 },

    /// Attack radius larger than the detection radius.
    #[error("attack range {attack} exceeds detection range {detection}")]
    AttackRangeExceedsDetection { attack: f32, detection: f32 },

    /// Two templates share a name.
    #[error("duplicate attack template name '{0}'")]
    DuplicateTemplate(String),

    /// Profile has no attack templates.
    #[error("profile '{0}' defines no attack templates")]
    NoTemplates(String),
}
