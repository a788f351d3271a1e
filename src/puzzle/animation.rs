//! Font-cycling animation driven by host timer ticks

use super::labels::{ALPHABET, FONT_COUNT};

/// Time each font stays on screen
pub const FRAME_INTERVAL_MS: u32 = 150;

/// Cycles the font offset through every font, forever, until cancelled.
///
/// The host calls [`JiggleAnimation::advance`] with the elapsed time; nothing
/// here owns a thread or timer, so cancelling is just a flag.
#[derive(Debug, Clone)]
pub struct JiggleAnimation {
    frame: usize,
    timer_ms: u32,
    cancelled: bool,
}

impl Default for JiggleAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl JiggleAnimation {
    pub fn new() -> Self {
        Self {
            frame: 0,
            timer_ms: 0,
            cancelled: false,
        }
    }

    /// Offset of the current font into the texture list
    pub fn font_offset(&self) -> usize {
        self.frame * ALPHABET.len()
    }

    /// Advance by `elapsed_ms` and return how many frames were stepped
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if self.cancelled {
            return 0;
        }

        self.timer_ms = self.timer_ms.saturating_add(elapsed_ms);
        let steps = self.timer_ms / FRAME_INTERVAL_MS;
        self.timer_ms %= FRAME_INTERVAL_MS;
        self.frame = (self.frame + steps as usize) % FONT_COUNT;
        steps
    }

    /// Stop the animation permanently
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_through_fonts() {
        let mut animation = JiggleAnimation::new();
        assert_eq!(animation.font_offset(), 0);

        assert_eq!(animation.advance(100), 0);
        assert_eq!(animation.font_offset(), 0);

        assert_eq!(animation.advance(50), 1);
        assert_eq!(animation.font_offset(), 22);

        assert_eq!(animation.advance(150), 1);
        assert_eq!(animation.font_offset(), 44);

        assert_eq!(animation.advance(150), 1);
        assert_eq!(animation.font_offset(), 0);
    }

    #[test]
    fn test_large_elapsed_steps_multiple_frames() {
        let mut animation = JiggleAnimation::new();
        assert_eq!(animation.advance(460), 3);
        assert_eq!(animation.font_offset(), 0);
        assert_eq!(animation.advance(140), 1);
        assert_eq!(animation.font_offset(), 22);
    }

    #[test]
    fn test_cancel_stops_stepping() {
        let mut animation = JiggleAnimation::new();
        animation.advance(150);
        animation.cancel();
        assert!(animation.is_cancelled());
        assert_eq!(animation.advance(10_000), 0);
        assert_eq!(animation.font_offset(), 22);
    }
}
