//! Rule-seeded solution tables

use super::{DataType, MonoRandom, DATA_TYPE_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule seed that selects the hand-written default rules
pub const UNSEEDED_SENTINEL: i32 = 1;

/// Number of toggle buttons compared on submission
pub const SOLUTION_LENGTH: usize = 6;

/// The expected state of each toggle button for one data type
pub type SolutionVector = [bool; SOLUTION_LENGTH];

const T: bool = true;
const F: bool = false;

/// Default rules, in `DataType::ALL` order
const DEFAULT_SOLUTIONS: [SolutionVector; DATA_TYPE_COUNT] = [
    [T, F, T, F, T, F], // Class
    [T, F, T, F, T, F], // Constructor
    [T, T, F, F, T, F], // Method
    [F, T, F, T, T, F], // Argument
    [F, T, F, T, T, F], // Local
    [T, F, F, F, T, F], // Constant
    [F, T, F, T, T, T], // Field
    [T, T, F, T, T, F], // Property
    [T, F, T, T, F, F], // Delegate
    [T, T, F, F, F, F], // Enum
];

/// One solution vector per data type, fully populated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionTable {
    rule_seed: i32,
    solutions: [SolutionVector; DATA_TYPE_COUNT],
}

impl SolutionTable {
    /// The rule seed the table was derived from
    pub fn rule_seed(&self) -> i32 {
        self.rule_seed
    }

    /// Whether this table holds the default rules
    pub fn is_default(&self) -> bool {
        self.rule_seed == UNSEEDED_SENTINEL
    }

    /// Solution for a data type
    pub fn get(&self, data_type: DataType) -> &SolutionVector {
        &self.solutions[data_type.index()]
    }

    /// Iterate over `(data type, solution)` pairs in generation order
    pub fn iter(&self) -> impl Iterator<Item = (DataType, &SolutionVector)> + '_ {
        DataType::ALL.iter().copied().zip(self.solutions.iter())
    }

    /// Number of distinct vectors among all data types
    pub fn distinct_count(&self) -> usize {
        let mut seen: Vec<&SolutionVector> = Vec::with_capacity(DATA_TYPE_COUNT);
        for solution in &self.solutions {
            if !seen.contains(&solution) {
                seen.push(solution);
            }
        }
        seen.len()
    }

    /// Pairs of data types that share the same solution
    pub fn collisions(&self) -> Vec<(DataType, DataType)> {
        let mut pairs = Vec::new();
        for (i, a) in DataType::ALL.iter().enumerate() {
            for b in &DataType::ALL[i + 1..] {
                if self.get(*a) == self.get(*b) {
                    pairs.push((*a, *b));
                }
            }
        }
        pairs
    }
}

/// Derives solution tables from rule seeds
pub struct SolutionGenerator;

impl SolutionGenerator {
    /// Build the solution table for a rule seed.
    ///
    /// The sentinel seed returns the default rules. Any other seed draws six
    /// bits per data type from a [`MonoRandom`], data type by data type, where
    /// a drawn zero means `true`.
    pub fn generate(rule_seed: i32) -> SolutionTable {
        if rule_seed == UNSEEDED_SENTINEL {
            return SolutionTable {
                rule_seed,
                solutions: DEFAULT_SOLUTIONS,
            };
        }

        let mut rng = MonoRandom::new(rule_seed);
        let mut solutions = [[false; SOLUTION_LENGTH]; DATA_TYPE_COUNT];
        for solution in solutions.iter_mut() {
            for bit in solution.iter_mut() {
                *bit = rng.next_bool();
            }
        }

        SolutionTable {
            rule_seed,
            solutions,
        }
    }
}

impl fmt::Display for SolutionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rule seed {}:", self.rule_seed)?;
        for (data_type, solution) in self.iter() {
            write!(f, "  {:<12}", data_type.name())?;
            for bit in solution {
                write!(f, "{}", if *bit { 'T' } else { 'F' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
