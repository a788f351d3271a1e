//! Interfaces to the host game that a puzzle instance depends on

use super::labels::GlyphRows;

/// Receives every frame the module wants shown
pub trait DisplaySink {
    /// Show `rows`, drawing letters from the font at `font_offset`
    fn render(&mut self, rows: &GlyphRows, font_offset: usize);
}

/// Receives the outcome of each submission
pub trait ReportSink {
    fn solve(&mut self, message: &str);
    fn strike(&mut self, message: &str);
}

/// Events the host delivers to a puzzle instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Button `i` was pressed; button 0 submits
    Press(usize),
    /// The bomb timer ticked once
    TimerTick,
    /// Real time passed, in milliseconds
    Elapsed(u32),
}

/// A queue of host events
pub trait InputSource {
    fn poll(&mut self) -> Option<InputEvent>;
}

impl<I: Iterator<Item = InputEvent>> InputSource for I {
    fn poll(&mut self) -> Option<InputEvent> {
        self.next()
    }
}
