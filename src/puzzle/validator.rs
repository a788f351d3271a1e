//! Submission validation for Naming Conventions

use crate::rules::{SolutionVector, SOLUTION_LENGTH};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of buttons on the module, the submit button included
pub const BUTTON_COUNT: usize = SOLUTION_LENGTH + 1;

/// Index of the submit button
pub const SUBMIT_BUTTON: usize = 0;

/// State of every button; index 0 is the submit button and is never compared
pub type InputVector = [bool; BUTTON_COUNT];

/// Outcome of checking one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// 1-based button numbers (2..=7) whose state differs from the solution
    pub failing_positions: Vec<usize>,
}

impl ValidationResult {
    /// Message reported to the host when the submission is wrong
    pub fn strike_message(&self) -> String {
        format!(
            "The incorrect option was submitted for button(s) {}, that's 1 strike please!",
            self.failing_positions.iter().join(", ")
        )
    }
}

/// Compares submitted button states against a solution
pub struct SubmissionValidator;

impl SubmissionValidator {
    /// Compare `input[1..]` element-wise with `solution`.
    ///
    /// The submission passes only when every toggle matches; any mismatch is a
    /// single failure regardless of how many buttons are wrong.
    pub fn validate(input: &InputVector, solution: &SolutionVector) -> ValidationResult {
        let failing_positions: Vec<usize> = input[SUBMIT_BUTTON + 1..]
            .iter()
            .zip(solution.iter())
            .enumerate()
            .filter(|(_, (given, expected))| given != expected)
            .map(|(i, _)| i + 2)
            .collect();

        ValidationResult {
            is_valid: failing_positions.is_empty(),
            failing_positions,
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            write!(f, "Validation Result: VALID")
        } else {
            write!(
                f,
                "Validation Result: INVALID (button(s) {})",
                self.failing_positions.iter().join(", ")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{DataType, SolutionGenerator, UNSEEDED_SENTINEL};

    fn class_solution() -> SolutionVector {
        *SolutionGenerator::generate(UNSEEDED_SENTINEL).get(DataType::Class)
    }

    #[test]
    fn test_correct_submission() {
        let input = [false, true, false, true, false, true, false];
        let result = SubmissionValidator::validate(&input, &class_solution());
        assert!(result.is_valid);
        assert!(result.failing_positions.is_empty());
    }

    #[test]
    fn test_single_wrong_button() {
        let input = [false, false, false, true, false, true, false];
        let result = SubmissionValidator::validate(&input, &class_solution());
        assert!(!result.is_valid);
        assert_eq!(result.failing_positions, vec![2]);
    }

    #[test]
    fn test_submit_position_is_ignored() {
        let solution = class_solution();
        for tail in 0..64u8 {
            let mut input = [false; BUTTON_COUNT];
            for (i, state) in input[1..].iter_mut().enumerate() {
                *state = tail & (1 << i) != 0;
            }
            let off = SubmissionValidator::validate(&input, &solution);
            input[0] = true;
            let on = SubmissionValidator::validate(&input, &solution);
            assert_eq!(off, on);
            assert_eq!(on.is_valid, on.failing_positions.is_empty());
        }
    }

    #[test]
    fn test_all_wrong_lists_every_button() {
        let solution = class_solution();
        let mut input = [true; BUTTON_COUNT];
        for (state, expected) in input[1..].iter_mut().zip(solution.iter()) {
            *state = !expected;
        }
        let result = SubmissionValidator::validate(&input, &solution);
        assert_eq!(result.failing_positions, vec![2, 3, 4, 5, 6, 7]);
        assert_eq!(
            result.strike_message(),
            "The incorrect option was submitted for button(s) 2, 3, 4, 5, 6, 7, that's 1 strike please!"
        );
    }
}
