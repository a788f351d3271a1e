//! Phosphorescence overrides from user mod settings and mission descriptions

use crate::error::SettingsError;
use log::{debug, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Stream delay units are scaled by this to get seconds of extra time
pub const STREAM_DELAY_MULTIPLIER: i32 = 15;

/// Mission-specific values: `[Phosphorescence] <cruel>,<delay>`
pub const MISSION_PATTERN: &str = r"\[Phosphorescence\] (\d+),(-*\d+)";

static MISSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MISSION_PATTERN).expect("mission pattern is a valid regex"));

/// Resolved tunables for a Phosphorescence module
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationOverride {
    pub cruel_mode: bool,
    /// Extra time in seconds, already multiplied
    pub stream_delay: i32,
}

/// The user settings blob as stored by the mod selector.
///
/// The prefixed keys win when both spellings are present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ModSettingsJson {
    #[serde(rename = "Phosphorescence -> CruelMode")]
    cruel_mode: Option<bool>,
    #[serde(rename = "CruelMode")]
    bare_cruel_mode: Option<bool>,
    #[serde(rename = "Phosphorescence -> StreamDelay")]
    stream_delay: Option<i32>,
    #[serde(rename = "StreamDelay")]
    bare_stream_delay: Option<i32>,
}

impl ModSettingsJson {
    fn cruel_mode(&self) -> bool {
        self.cruel_mode.or(self.bare_cruel_mode).unwrap_or_default()
    }

    fn stream_delay(&self) -> i32 {
        self.stream_delay.or(self.bare_stream_delay).unwrap_or_default()
    }
}

impl ConfigurationOverride {
    fn scaled(cruel_mode: bool, stream_delay: i32) -> Self {
        Self {
            cruel_mode,
            stream_delay: stream_delay.saturating_mul(STREAM_DELAY_MULTIPLIER),
        }
    }

    /// Parse the user settings blob.
    ///
    /// A JSON `null` yields the defaults. Anything that is not a settings
    /// object is [`SettingsError::MalformedSettings`].
    pub fn from_user_settings(json: &str) -> Result<Self, SettingsError> {
        let settings: Option<ModSettingsJson> = serde_json::from_str(json)?;
        Ok(settings
            .map(|s| Self::scaled(s.cruel_mode(), s.stream_delay()))
            .unwrap_or_default())
    }

    /// Parse mission-specific values from a mission description.
    ///
    /// Looks for `[Phosphorescence] <a>,<b>` where `a` is digits and `b` is
    /// digits preceded by any number of minus signs. The first such match is
    /// used; `a` must be 0 or 1 and both numbers must fit in an `i32`.
    pub fn from_mission(description: &str) -> Result<Self, SettingsError> {
        let captures = MISSION_REGEX
            .captures(description)
            .ok_or(SettingsError::MissingMissionPattern)?;
        let (_, [first, second]) = captures.extract();

        let cruel = first
            .parse::<i32>()
            .ok()
            .filter(|value| (0..=1).contains(value))
            .ok_or_else(|| SettingsError::OutOfRangeValue {
                field: "CruelMode",
                value: first.to_string(),
            })?;

        let delay = second
            .parse::<i32>()
            .map_err(|_| SettingsError::OutOfRangeValue {
                field: "StreamDelay",
                value: second.to_string(),
            })?;

        Ok(Self::scaled(cruel == 1, delay))
    }

    /// Resolve the effective values for module `module_id`.
    ///
    /// Starts from the defaults, applies the user settings if they parse, then
    /// the mission values if present and valid. Failures are logged and the
    /// previous values kept.
    pub fn resolve(module_id: u32, user_settings: Option<&str>, mission: Option<&str>) -> Self {
        let mut resolved = Self::default();

        if let Some(json) = user_settings {
            match Self::from_user_settings(json) {
                Ok(settings) => resolved = settings,
                Err(e) => warn!(
                    "[Phosphorescence #{}]: JSON error: \"{}\", resorting to default values.",
                    module_id, e
                ),
            }
        }

        if let Some(description) = mission {
            match Self::from_mission(description) {
                Ok(settings) => {
                    debug!("[Phosphorescence #{}]: Mission-specific data found.", module_id);
                    resolved = settings;
                }
                Err(SettingsError::MissingMissionPattern) => {}
                Err(e) => {
                    debug!("[Phosphorescence #{}]: Ignoring mission data: {}", module_id, e)
                }
            }
        }

        resolved
    }
}

impl fmt::Display for ConfigurationOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cruel mode: {}", self.cruel_mode)?;
        write!(f, "Stream delay: {}s", self.stream_delay)
    }
}
