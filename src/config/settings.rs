//! Session settings for the command line driver

use super::ConfigurationOverride;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub puzzle: PuzzleConfig,
    pub phosphorescence: PhosphorescenceConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Rule seed; 1 selects the default rules
    pub rule_seed: i32,
    /// Seed for per-instance randomness; drawn at random when absent
    pub module_seed: Option<i32>,
    /// Number shown in log lines
    pub module_id: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhosphorescenceConfig {
    /// JSON file holding the user's mod settings
    pub settings_file: Option<PathBuf>,
    /// Description of the current mission, if playing one
    pub mission_description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            puzzle: PuzzleConfig {
                rule_seed: 1,
                module_seed: None,
                module_id: 1,
            },
            phosphorescence: PhosphorescenceConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Text,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.puzzle.module_id == 0 {
            anyhow::bail!("Module id must be positive");
        }

        if let Some(ref file) = self.phosphorescence.settings_file {
            if !file.exists() {
                anyhow::bail!("Mod settings file does not exist: {}", file.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rule_seed) = cli_overrides.rule_seed {
            self.puzzle.rule_seed = rule_seed;
        }
        if let Some(module_seed) = cli_overrides.module_seed {
            self.puzzle.module_seed = Some(module_seed);
        }
        if let Some(module_id) = cli_overrides.module_id {
            self.puzzle.module_id = module_id;
        }
        if let Some(ref settings_file) = cli_overrides.settings_file {
            self.phosphorescence.settings_file = Some(settings_file.clone());
        }
        if let Some(ref mission) = cli_overrides.mission_description {
            self.phosphorescence.mission_description = Some(mission.clone());
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }

    /// Read the mod settings file, if one is configured
    pub fn user_settings(&self) -> Result<Option<String>> {
        self.phosphorescence
            .settings_file
            .as_ref()
            .map(|path| {
                std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read mod settings: {}", path.display()))
            })
            .transpose()
    }

    /// Resolve the Phosphorescence overrides these settings describe
    pub fn resolve_override(&self) -> Result<ConfigurationOverride> {
        let user_settings = self.user_settings()?;
        Ok(ConfigurationOverride::resolve(
            self.puzzle.module_id,
            user_settings.as_deref(),
            self.phosphorescence.mission_description.as_deref(),
        ))
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rule_seed: Option<i32>,
    pub module_seed: Option<i32>,
    pub module_id: Option<u32>,
    pub settings_file: Option<PathBuf>,
    pub mission_description: Option<String>,
    pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config/session.yaml");

        let mut settings = Settings::default();
        settings.puzzle.rule_seed = 42;
        settings.phosphorescence.mission_description = Some("[Phosphorescence] 1,2".into());
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.puzzle.rule_seed, 42);
        assert_eq!(loaded.output.format, OutputFormat::Text);
        assert_eq!(
            loaded.phosphorescence.mission_description.as_deref(),
            Some("[Phosphorescence] 1,2")
        );
    }

    #[test]
    fn test_validate_rejects_missing_settings_file() {
        let mut settings = Settings::default();
        settings.phosphorescence.settings_file =
            Some(PathBuf::from("/nonexistent/modsettings.json"));
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.puzzle.module_id = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            rule_seed: Some(9),
            module_seed: Some(3),
            format: Some(OutputFormat::Json),
            ..Default::default()
        });
        assert_eq!(settings.puzzle.rule_seed, 9);
        assert_eq!(settings.puzzle.module_seed, Some(3));
        assert_eq!(settings.puzzle.module_id, 1);
        assert_eq!(settings.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_resolve_override_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("modsettings.json");
        std::fs::write(&path, r#"{"CruelMode": true, "StreamDelay": 3}"#).unwrap();

        let mut settings = Settings::default();
        settings.phosphorescence.settings_file = Some(path);
        let resolved = settings.resolve_override().unwrap();
        assert!(resolved.cruel_mode);
        assert_eq!(resolved.stream_delay, 45);

        settings.phosphorescence.mission_description = Some("[Phosphorescence] 0,1".into());
        let resolved = settings.resolve_override().unwrap();
        assert!(!resolved.cruel_mode);
        assert_eq!(resolved.stream_delay, 15);
    }
}
