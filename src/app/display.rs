//! Non-interactive display mode.
//!
//! When there is no terminal to read keys from, sections are printed one
//! after another on a fixed timer. Nothing is persisted in this mode.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::model::Section;
use crate::services::time_source::TimeSource;
use crate::view::plain;

use super::timer::Ticker;

/// Rotates through the sections, one per period.
#[derive(Debug, Clone)]
pub struct DisplayCycler {
    index: usize,
    ticker: Ticker,
}

impl DisplayCycler {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            index: 0,
            ticker: Ticker::new(interval, now),
        }
    }

    pub fn current(&self) -> Section {
        Section::at(self.index)
    }

    /// Advance once per elapsed period. Returns how many periods fired.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while self.ticker.poll(now).is_some() {
            self.index = (self.index + 1) % Section::ALL.len();
            fired += 1;
        }
        fired
    }

    pub fn next_due(&self) -> Instant {
        self.ticker.next_due()
    }
}

/// Print sections to `out` until `menu.display_passes` full passes are done
/// (forever when 0). Returns the number of sections printed.
pub fn run_display_only<W: Write>(
    config: &Config,
    out: &mut W,
    time: &dyn TimeSource,
) -> io::Result<usize> {
    let passes = config.menu.display_passes as usize;
    let limit = (passes > 0).then(|| passes * Section::ALL.len());
    tracing::info!(passes, interval_ms = config.menu.display_cycle_ms, "display-only mode");

    let mut cycler = DisplayCycler::new(config.menu.display_cycle(), time.now());
    let mut printed = 0;

    for line in plain::header() {
        writeln!(out, "{line}")?;
    }

    loop {
        for line in plain::section(cycler.current()) {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        printed += 1;

        if limit.is_some_and(|limit| printed >= limit) {
            break;
        }

        time.sleep(cycler.next_due().saturating_duration_since(time.now()));
        cycler.tick(time.now());
    }

    Ok(printed)
}
