//! Error types for settings resolution

use thiserror::Error;

/// Reasons a settings source could not be applied.
///
/// None of these are fatal: the resolver logs them and keeps the values of the
/// previous precedence level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The user settings blob is not valid JSON for the expected record
    #[error("malformed settings: {0}")]
    MalformedSettings(String),

    /// The mission description does not contain a `[Phosphorescence] a,b` tag
    #[error("mission description has no Phosphorescence tag")]
    MissingMissionPattern,

    /// The tag was found but one of its values is unusable
    #[error("value {value} out of range for {field}")]
    OutOfRangeValue { field: &'static str, value: String },
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::MalformedSettings(err.to_string())
    }
}
