//! A single Naming Conventions puzzle instance

use super::collaborators::{DisplaySink, InputEvent, InputSource, ReportSink};
use super::labels::{glyph_rows, row_text};
use super::{
    InputVector, JiggleAnimation, Selection, SubmissionValidator, ValidationResult,
    VariantSelector, BUTTON_COUNT, SUBMIT_BUTTON,
};
use crate::rules::{DataType, RandomSource, SolutionGenerator, SolutionTable, SolutionVector};
use log::info;

/// Message reported when the submission is correct
pub const SOLVE_MESSAGE: &str = "The submission was correct, solved!";

/// What a button press did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PressOutcome {
    /// A toggle button changed state
    Toggled,
    /// The submission matched; the module is solved
    Solved,
    /// The submission did not match
    Strike(ValidationResult),
}

/// One puzzle instance wired to its host collaborators
pub struct NamingConventions<D: DisplaySink, S: ReportSink> {
    module_id: u32,
    table: SolutionTable,
    selector: VariantSelector,
    /// Last value handed out by `selector`
    selection: Selection,
    states: InputVector,
    solved: bool,
    animation: JiggleAnimation,
    display: D,
    report: S,
}

impl<D: DisplaySink, S: ReportSink> NamingConventions<D, S> {
    /// Start a puzzle instance.
    ///
    /// `random` supplies the initial button states, then the letter index and
    /// data type. The solution table comes from `rule_seed`.
    pub fn new<R: RandomSource + ?Sized>(
        module_id: u32,
        rule_seed: i32,
        random: &mut R,
        display: D,
        report: S,
    ) -> Self {
        let mut states = [false; BUTTON_COUNT];
        for state in states.iter_mut() {
            *state = random.next(2) == 0;
        }

        let mut selector = VariantSelector::new();
        let selection = selector.choose(random);
        let table = SolutionGenerator::generate(rule_seed);

        let mut module = Self {
            module_id,
            table,
            selector,
            selection,
            states,
            solved: false,
            animation: JiggleAnimation::new(),
            display,
            report,
        };

        module.render();
        module.log(&format!(
            "The solution for {} in rule seed {} is {}.",
            selection.data_type,
            rule_seed,
            module.solution_labels().join(", ")
        ));
        module
    }

    pub fn module_id(&self) -> u32 {
        self.module_id
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selector(&self) -> &VariantSelector {
        &self.selector
    }

    /// Draw the data type and index again.
    ///
    /// The selector keeps the values chosen at start-up, so this only
    /// returns them.
    pub fn choose<R: RandomSource + ?Sized>(&mut self, random: &mut R) -> Selection {
        self.selection = self.selector.choose(random);
        self.selection
    }

    /// Assign the data type and index explicitly, subject to the same guard
    pub fn assign(&mut self, data_type: DataType, index: usize) -> Option<Selection> {
        let selection = self.selector.assign(data_type, index)?;
        self.selection = selection;
        Some(selection)
    }

    pub fn states(&self) -> &InputVector {
        &self.states
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn table(&self) -> &SolutionTable {
        &self.table
    }

    /// Solution of the active data type
    pub fn solution(&self) -> &SolutionVector {
        self.table.get(self.selection.data_type)
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn report(&self) -> &S {
        &self.report
    }

    pub fn animation(&self) -> &JiggleAnimation {
        &self.animation
    }

    /// Labels the six toggle buttons must show when submitted
    pub fn solution_labels(&self) -> Vec<String> {
        self.solution()
            .iter()
            .enumerate()
            .map(|(i, &state)| {
                row_text(i + 1, state, &self.selection, false)
                    .trim()
                    .to_string()
            })
            .collect()
    }

    /// Handle a press of button `button`.
    ///
    /// Returns `None` once solved or for a button that does not exist. The
    /// submit button checks the current states first; every press, the
    /// submit button included, then toggles the pressed button.
    pub fn press(&mut self, button: usize) -> Option<PressOutcome> {
        if self.solved || button >= BUTTON_COUNT {
            return None;
        }

        let outcome = if button == SUBMIT_BUTTON {
            self.submit()
        } else {
            PressOutcome::Toggled
        };

        self.states[button] = !self.states[button];
        self.render();
        Some(outcome)
    }

    fn submit(&mut self) -> PressOutcome {
        let result = SubmissionValidator::validate(&self.states, self.solution());
        if result.is_valid {
            self.solved = true;
            self.log(SOLVE_MESSAGE);
            self.report.solve(SOLVE_MESSAGE);
            PressOutcome::Solved
        } else {
            let message = result.strike_message();
            self.log(&message);
            self.report.strike(&message);
            PressOutcome::Strike(result)
        }
    }

    /// Invert every button, once per bomb timer tick, until solved
    pub fn on_timer_tick(&mut self) {
        if self.solved {
            return;
        }
        for state in self.states.iter_mut() {
            *state = !*state;
        }
        self.render();
    }

    /// Advance the font animation by `elapsed_ms`
    pub fn on_elapsed(&mut self, elapsed_ms: u32) {
        if self.animation.advance(elapsed_ms) > 0 {
            self.render();
        }
    }

    /// Dispatch one host event
    pub fn handle_event(&mut self, event: InputEvent) -> Option<PressOutcome> {
        match event {
            InputEvent::Press(button) => self.press(button),
            InputEvent::TimerTick => {
                self.on_timer_tick();
                None
            }
            InputEvent::Elapsed(ms) => {
                self.on_elapsed(ms);
                None
            }
        }
    }

    /// Drain `input`, returning the outcome of every press that did something
    pub fn run<I: InputSource + ?Sized>(&mut self, input: &mut I) -> Vec<PressOutcome> {
        let mut outcomes = Vec::new();
        while let Some(event) = input.poll() {
            if let Some(outcome) = self.handle_event(event) {
                outcomes.push(outcome);
            }
        }
        outcomes
    }

    /// Stop the animation; the host is tearing the module down
    pub fn teardown(&mut self) {
        self.animation.cancel();
    }

    fn render(&mut self) {
        let rows = glyph_rows(&self.states, &self.selection, self.solved);
        self.display.render(&rows, self.animation.font_offset());
    }

    fn log(&self, message: &str) {
        info!("[Naming Conventions #{}] {}", self.module_id, message);
    }
}

impl<D: DisplaySink, S: ReportSink> Drop for NamingConventions<D, S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::labels::{Glyph, GlyphRows};
    use crate::rules::{MonoRandom, UNSEEDED_SENTINEL};

    #[derive(Default)]
    struct Frames(Vec<(GlyphRows, usize)>);

    impl DisplaySink for Frames {
        fn render(&mut self, rows: &GlyphRows, font_offset: usize) {
            self.0.push((*rows, font_offset));
        }
    }

    #[derive(Default)]
    struct Reports {
        solves: Vec<String>,
        strikes: Vec<String>,
    }

    impl ReportSink for Reports {
        fn solve(&mut self, message: &str) {
            self.solves.push(message.to_string());
        }

        fn strike(&mut self, message: &str) {
            self.strikes.push(message.to_string());
        }
    }

    /// Hands out `states` as coin flips, then `index` and `data_type`
    struct Scripted(Vec<u32>);

    impl RandomSource for Scripted {
        fn next(&mut self, _bound: u32) -> u32 {
            self.0.remove(0)
        }
    }

    fn class_module(initial: [bool; BUTTON_COUNT]) -> NamingConventions<Frames, Reports> {
        let mut draws: Vec<u32> = initial.iter().map(|&s| if s { 0 } else { 1 }).collect();
        draws.extend([3, DataType::Class.index() as u32]);
        NamingConventions::new(
            1,
            UNSEEDED_SENTINEL,
            &mut Scripted(draws),
            Frames::default(),
            Reports::default(),
        )
    }

    #[test]
    fn test_initial_state_and_render() {
        let initial = [true, false, true, false, true, false, true];
        let module = class_module(initial);
        assert_eq!(module.states(), &initial);
        assert_eq!(module.selection().data_type, DataType::Class);
        assert_eq!(module.selection().index, 3);
        assert_eq!(module.display().0.len(), 1);
        assert_eq!(module.display().0[0].0[0][0], Glyph::from_char('C'));
    }

    #[test]
    fn test_solution_labels() {
        let module = class_module([false; BUTTON_COUNT]);
        assert_eq!(
            module.solution_labels(),
            vec!["PascalCase", "False", "True", "False", "Alphameric", "False"]
        );
    }

    #[test]
    fn test_correct_submission_solves() {
        let mut module = class_module([false, true, false, true, false, true, false]);
        assert_eq!(module.press(SUBMIT_BUTTON), Some(PressOutcome::Solved));
        assert!(module.is_solved());
        assert_eq!(module.report().solves, vec![SOLVE_MESSAGE.to_string()]);
        assert!(module.report().strikes.is_empty());

        // Solved modules ignore input and timer ticks
        let states = *module.states();
        assert_eq!(module.press(3), None);
        module.on_timer_tick();
        assert_eq!(module.states(), &states);
    }

    #[test]
    fn test_wrong_submission_strikes_and_continues() {
        let mut module = class_module([false, false, false, true, false, true, false]);
        let outcome = module.press(SUBMIT_BUTTON);
        match outcome {
            Some(PressOutcome::Strike(result)) => assert_eq!(result.failing_positions, vec![2]),
            other => panic!("expected strike, got {:?}", other),
        }
        assert_eq!(module.report().strikes.len(), 1);
        assert!(module.report().strikes[0].contains("button(s) 2,"));
        assert!(!module.is_solved());

        // The submit press also toggled button 0; fix button 2 and resubmit
        assert_eq!(module.press(1), Some(PressOutcome::Toggled));
        assert_eq!(module.press(SUBMIT_BUTTON), Some(PressOutcome::Solved));
    }

    #[test]
    fn test_timer_tick_inverts_all_buttons() {
        let initial = [true, false, true, false, true, false, true];
        let mut module = class_module(initial);
        module.on_timer_tick();
        assert_eq!(module.states(), &initial.map(|state| !state));
    }

    #[test]
    fn test_out_of_range_button_is_ignored() {
        let mut module = class_module([false; BUTTON_COUNT]);
        assert_eq!(module.press(BUTTON_COUNT), None);
        assert_eq!(module.display().0.len(), 1);
    }

    #[test]
    fn test_events_drive_animation() {
        let mut module = class_module([false; BUTTON_COUNT]);
        let mut events = vec![
            InputEvent::Elapsed(150),
            InputEvent::Press(2),
            InputEvent::TimerTick,
            InputEvent::Elapsed(100),
        ]
        .into_iter();
        let outcomes = module.run(&mut events);
        assert_eq!(outcomes, vec![PressOutcome::Toggled]);
        assert_eq!(module.display().0.last().map(|f| f.1), Some(22));

        module.teardown();
        assert!(module.animation().is_cancelled());
        let frames = module.display().0.len();
        module.on_elapsed(1_000);
        assert_eq!(module.display().0.len(), frames);
    }

    #[test]
    fn test_selection_is_frozen_on_live_instance() {
        let mut module = class_module([false; BUTTON_COUNT]);
        let chosen = module.selection();
        assert_eq!(module.selector().selection(), Some(chosen));

        assert_eq!(module.choose(&mut Scripted(vec![9, 9])), chosen);
        assert_eq!(module.assign(DataType::Enum, 7), Some(chosen));
        assert_eq!(module.assign(DataType::Enum, 10), None);

        assert_eq!(module.selection(), chosen);
        assert_eq!(module.selection().data_type, DataType::Class);
        assert_eq!(module.selection().index, 3);
        assert_eq!(module.selector().selection(), Some(chosen));
    }

    #[test]
    fn test_seeded_module_is_reproducible() {
        let a = NamingConventions::new(
            1,
            7,
            &mut MonoRandom::new(99),
            Frames::default(),
            Reports::default(),
        );
        let b = NamingConventions::new(
            2,
            7,
            &mut MonoRandom::new(99),
            Frames::default(),
            Reports::default(),
        );
        assert_eq!(a.selection(), b.selection());
        assert_eq!(a.states(), b.states());
        assert_eq!(a.solution(), b.solution());
    }
}
