//! Frame tables for the decorative animations.
//!
//! Frames are picked from elapsed time, so nothing here holds state and a
//! redraw at any moment shows the right frame.

use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct FrameSet {
    frames: &'static [&'static str],
    interval: Duration,
}

impl FrameSet {
    pub const fn new(frames: &'static [&'static str], interval: Duration) -> Self {
        Self { frames, interval }
    }

    pub fn index_at(&self, elapsed: Duration) -> usize {
        if self.frames.is_empty() || self.interval.is_zero() {
            return 0;
        }
        ((elapsed.as_millis() / self.interval.as_millis()) % self.frames.len() as u128) as usize
    }

    pub fn frame_at(&self, elapsed: Duration) -> &'static str {
        self.frames.get(self.index_at(elapsed)).copied().unwrap_or("")
    }

    /// Frame `offset` steps ahead of the current one.
    pub fn frame_offset(&self, elapsed: Duration, offset: usize) -> &'static str {
        if self.frames.is_empty() {
            return "";
        }
        self.frames[(self.index_at(elapsed) + offset) % self.frames.len()]
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

pub const SPINNER: FrameSet = FrameSet::new(
    &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
    Duration::from_millis(150),
);

pub const WAVE: FrameSet = FrameSet::new(
    &["~", "~~", "~~~", "~~~~", "~~~~~", "~~~~~~", "~~~~~~~"],
    Duration::from_millis(200),
);

pub const PULSE: FrameSet = FrameSet::new(&["◇", "◆", "◇", "◈"], Duration::from_millis(200));

pub const CURSOR_BLINK: Duration = Duration::from_millis(500);

/// Block cursor on for the first half of each blink period.
pub fn cursor_visible(elapsed: Duration) -> bool {
    (elapsed.as_millis() / CURSOR_BLINK.as_millis()) % 2 == 0
}

/// Shortest interval among running animations; bounds the redraw timeout.
pub fn frame_interval() -> Duration {
    SPINNER.interval().min(WAVE.interval()).min(PULSE.interval())
}
