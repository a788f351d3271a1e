//! Display and output formatting utilities

use crate::puzzle::labels::{toggle_label, Glyph, GlyphRows, ALPHABET};
use crate::puzzle::{DisplaySink, ReportSink};
use crate::rules::{DataType, SolutionTable, SolutionVector};
use itertools::Itertools;

/// Format solution tables and puzzle frames for the console
pub struct SolutionFormatter;

impl SolutionFormatter {
    /// Format one solution as the labels the buttons must show
    pub fn format_solution(data_type: DataType, solution: &SolutionVector) -> String {
        format!(
            "{}: {}",
            data_type,
            solution
                .iter()
                .enumerate()
                .map(|(i, &state)| toggle_label(i + 1, state))
                .join(", ")
        )
    }

    /// Format every entry of a table, one per line
    pub fn format_table(table: &SolutionTable) -> String {
        let mut output = String::new();

        let kind = if table.is_default() { "default" } else { "seeded" };
        output.push_str(&format!("=== Rule seed {} ({}) ===\n", table.rule_seed(), kind));
        for (data_type, solution) in table.iter() {
            output.push_str(&Self::format_solution(data_type, solution));
            output.push('\n');
        }

        output
    }

    /// Format a display frame as text, one row per button
    pub fn format_frame(rows: &GlyphRows, states: &[bool]) -> String {
        let mut output = String::new();
        for (i, row) in rows.iter().enumerate() {
            let marker = match states.get(i) {
                Some(true) => '■',
                Some(false) => '□',
                None => ' ',
            };
            output.push_str(&format!("{} {} | ", i + 1, marker));
            output.extend(row.iter().map(|glyph| match glyph {
                Glyph::Letter(letter) => ALPHABET[usize::from(*letter)],
                Glyph::Blank => '·',
            }));
            output.push('\n');
        }
        output
    }

    /// Format the result of surveying a range of rule seeds
    pub fn format_survey(entries: &[(i32, usize, Vec<(DataType, DataType)>)]) -> String {
        let mut output = String::new();

        output.push_str("Seed        | Distinct | Collisions\n");
        output.push_str("------------|----------|-----------\n");
        for (seed, distinct, collisions) in entries {
            let pairs = if collisions.is_empty() {
                "-".to_string()
            } else {
                collisions
                    .iter()
                    .map(|(a, b)| format!("{a}={b}"))
                    .join(" ")
            };
            output.push_str(&format!("{:11} | {:8} | {}\n", seed, distinct, pairs));
        }

        let clean = entries.iter().filter(|(_, _, c)| c.is_empty()).count();
        output.push_str(&format!(
            "\n{} of {} seeds give every data type a unique solution\n",
            clean,
            entries.len()
        ));

        output
    }
}

/// Shows frames on stdout when verbose, and always remembers the latest
#[derive(Debug, Default)]
pub struct ConsoleDisplay {
    pub verbose: bool,
    pub last_frame: Option<(GlyphRows, usize)>,
    pub frames_rendered: usize,
}

impl ConsoleDisplay {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            ..Default::default()
        }
    }
}

impl DisplaySink for ConsoleDisplay {
    fn render(&mut self, rows: &GlyphRows, font_offset: usize) {
        self.frames_rendered += 1;
        self.last_frame = Some((*rows, font_offset));
        if self.verbose {
            println!("{}", SolutionFormatter::format_frame(rows, &[]));
        }
    }
}

/// Prints submission outcomes and counts strikes
#[derive(Debug, Default)]
pub struct ConsoleReport {
    pub solved: bool,
    pub strikes: usize,
}

impl ReportSink for ConsoleReport {
    fn solve(&mut self, message: &str) {
        self.solved = true;
        println!("{}", ColorOutput::success(&format!("✅ {}", message)));
    }

    fn strike(&mut self, message: &str) {
        self.strikes += 1;
        println!("{}", ColorOutput::error(&format!("❌ {}", message)));
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::labels::glyph_rows;
    use crate::puzzle::Selection;
    use crate::rules::{SolutionGenerator, UNSEEDED_SENTINEL};

    #[test]
    fn test_format_solution() {
        let table = SolutionGenerator::generate(UNSEEDED_SENTINEL);
        let line =
            SolutionFormatter::format_solution(DataType::Method, table.get(DataType::Method));
        assert_eq!(line, "Method: PascalCase, True, False, False, Alphameric, False");

        let full = SolutionFormatter::format_table(&table);
        assert!(full.contains("(default)"));
        assert_eq!(full.lines().count(), 11);
    }

    #[test]
    fn test_format_frame() {
        let selection = Selection {
            data_type: DataType::Local,
            index: 0,
        };
        let states = [true; 7];
        let rows = glyph_rows(&states, &selection, false);
        let frame = SolutionFormatter::format_frame(&rows, &states);
        let first = frame.lines().next().unwrap();
        assert_eq!(first, "1 ■ | local·····");
        assert!(frame.contains("alphameric"));
    }

    #[test]
    fn test_format_survey() {
        let entries = vec![
            (1, 8, vec![(DataType::Class, DataType::Constructor)]),
            (2, 10, vec![]),
        ];
        let survey = SolutionFormatter::format_survey(&entries);
        assert!(survey.contains("Class=Constructor"));
        assert!(survey.contains("1 of 2 seeds"));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));
        assert!(ColorOutput::success("OK").contains("OK"));
    }
}
