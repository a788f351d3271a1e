//! Naming Conventions and Phosphorescence puzzle logic
//!
//! This library derives rule-seeded solution tables, runs Naming Conventions
//! puzzle instances against host-provided collaborators, and resolves the
//! Phosphorescence settings overrides.

pub mod config;
pub mod error;
pub mod puzzle;
pub mod rules;
pub mod utils;

pub use config::{ConfigurationOverride, Settings};
pub use error::SettingsError;
pub use puzzle::{NamingConventions, SubmissionValidator, VariantSelector};
pub use rules::{DataType, MonoRandom, SolutionGenerator, SolutionTable};

use rayon::prelude::*;

/// One surveyed rule seed: the seed, its distinct solution count and the data
/// types sharing a solution
pub type SurveyEntry = (i32, usize, Vec<(DataType, DataType)>);

/// Generate the tables for every seed in `seeds` and report their collisions
pub fn survey_rule_seeds(seeds: std::ops::RangeInclusive<i32>) -> Vec<SurveyEntry> {
    seeds
        .into_par_iter()
        .map(|seed| {
            let table = SolutionGenerator::generate(seed);
            (seed, table.distinct_count(), table.collisions())
        })
        .collect()
}
