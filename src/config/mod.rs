//! Configuration: command line session settings and Phosphorescence overrides

pub mod mod_settings;
pub mod settings;

pub use mod_settings::{ConfigurationOverride, MISSION_PATTERN, STREAM_DELAY_MULTIPLIER};
pub use settings::{
    CliOverrides, OutputConfig, OutputFormat, PhosphorescenceConfig, PuzzleConfig, Settings,
};
