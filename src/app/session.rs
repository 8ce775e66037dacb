//! Visitor session lifecycle
//!
//! `booting → banner → name input → welcome → menu`, strictly forward. The
//! transition table lives in [`SessionState::next`]; the controller owns the
//! timer for the current state and the name buffer, and performs the visitor
//! store write when the welcome screen hands over to the menu.
//!
//! Timer-driven transitions use the instant the timer was due, not the
//! instant it was polled, so the schedule does not drift with redraw
//! latency.

use std::time::{Duration, Instant};

use crate::config::{SessionConfig, WelcomeExit};
use crate::input::Key;
use crate::services::visitor_store::{StoreError, VisitorRecord, VisitorStore};

use super::timer::{Deadline, StateTimer, Ticker};

pub const BOOT_MESSAGES: &[&str] = &[
    "Initializing kernel modules...",
    "Loading device drivers...",
    "Starting network services...",
    "Mounting filesystems...",
    "Loading development environment...",
    "Initializing package managers...",
    "Starting code servers...",
    "System ready for development!",
];

pub const GUEST_NAME: &str = "Guest User";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Booting,
    Banner,
    NameInput,
    Welcome,
    Menu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    BootExhausted,
    BannerElapsed,
    NameSubmitted,
    WelcomeElapsed,
    WelcomeKey,
}

impl SessionState {
    /// Transition table. Pairs not listed here do not move.
    pub fn next(self, trigger: Trigger, capture_name: bool) -> Option<SessionState> {
        use SessionState::*;
        use Trigger::*;

        match (self, trigger) {
            (Booting, BootExhausted) => Some(Banner),
            (Banner, BannerElapsed) if capture_name => Some(NameInput),
            (Banner, BannerElapsed) => Some(Welcome),
            (NameInput, NameSubmitted) => Some(Welcome),
            (Welcome, WelcomeElapsed | WelcomeKey) => Some(Menu),
            _ => None,
        }
    }
}

/// Result of feeding the controller a tick or a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Unchanged,
    Changed,
    /// Welcome is over; the caller should run [`SessionController::complete`].
    Complete,
    Quit,
}

/// What the menu shows about the visitor once the session completes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitorSummary {
    pub visitor: Option<VisitorRecord>,
    /// `None` when nothing could be read from the store.
    pub total_visitors: Option<i64>,
}

impl VisitorSummary {
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn count_label(&self) -> String {
        match self.total_visitors {
            Some(n) => n.to_string(),
            None => "unknown".to_string(),
        }
    }
}

#[derive(Debug)]
pub struct SessionController {
    state: SessionState,
    entered_at: Instant,
    timer: StateTimer,
    config: SessionConfig,
    messages: &'static [&'static str],
    shown: usize,
    buffer: String,
    name: Option<String>,
    pending: Option<Trigger>,
}

impl SessionController {
    pub fn new(messages: &'static [&'static str], config: SessionConfig, now: Instant) -> Self {
        let mut session = Self {
            state: SessionState::Booting,
            entered_at: now,
            timer: StateTimer::Ticker(Ticker::new(config.boot_interval(), now)),
            config,
            messages,
            shown: messages.len().min(1),
            buffer: String::new(),
            name: None,
            pending: None,
        };
        if messages.is_empty() {
            session.transition(Trigger::BootExhausted, now);
        }
        session
    }

    /// Advance timers to `now`.
    pub fn tick(&mut self, now: Instant) -> Step {
        let mut changed = false;

        loop {
            match (self.state, self.timer) {
                (SessionState::Booting, StateTimer::Ticker(mut ticker)) => {
                    let Some(due) = ticker.poll(now) else { break };
                    self.timer = StateTimer::Ticker(ticker);
                    if self.shown < self.messages.len() {
                        self.shown += 1;
                    } else {
                        self.transition(Trigger::BootExhausted, due);
                    }
                }
                (SessionState::Banner, StateTimer::Deadline(deadline)) if deadline.expired(now) => {
                    self.transition(Trigger::BannerElapsed, deadline.at());
                }
                (SessionState::Welcome, StateTimer::Deadline(deadline)) if deadline.expired(now) => {
                    self.request_completion(Trigger::WelcomeElapsed);
                    return Step::Complete;
                }
                _ => break,
            }
            changed = true;
        }

        if changed {
            Step::Changed
        } else {
            Step::Unchanged
        }
    }

    pub fn handle_key(&mut self, key: Key, now: Instant) -> Step {
        if key.is_interrupt() {
            tracing::info!(state = ?self.state, "session interrupted");
            return Step::Quit;
        }

        match self.state {
            SessionState::NameInput => match key {
                Key::Char(c) => {
                    self.buffer.push(c);
                    Step::Changed
                }
                Key::Backspace => {
                    if self.buffer.pop().is_some() {
                        Step::Changed
                    } else {
                        Step::Unchanged
                    }
                }
                Key::Enter => {
                    let trimmed = self.buffer.trim();
                    self.name = (!trimmed.is_empty()).then(|| trimmed.to_string());
                    self.transition(Trigger::NameSubmitted, now);
                    Step::Changed
                }
                _ => Step::Unchanged,
            },
            SessionState::Welcome if self.pending.is_none() && self.config.welcome_exit.on_key() => {
                self.request_completion(Trigger::WelcomeKey);
                Step::Complete
            }
            _ => Step::Unchanged,
        }
    }

    /// Record the visit and enter the menu.
    ///
    /// The write happens only once, from the welcome state. With no store the
    /// session completes with an unknown count. On a write failure the state
    /// stays at welcome and the error is returned.
    pub fn complete(
        &mut self,
        store: Option<&dyn VisitorStore>,
    ) -> Result<VisitorSummary, StoreError> {
        let Some(trigger) = self.pending else {
            tracing::warn!(state = ?self.state, "completion requested outside of welcome");
            return Ok(VisitorSummary::unknown());
        };

        let summary = match store {
            Some(store) => {
                let visitor = store.upsert(self.name.as_deref())?;
                let total_visitors = match store.count() {
                    Ok(n) => Some(n),
                    Err(e) => {
                        tracing::warn!("Visit recorded but count failed: {}", e);
                        None
                    }
                };
                VisitorSummary {
                    visitor: Some(visitor),
                    total_visitors,
                }
            }
            None => {
                tracing::info!("No visitor store; session not recorded");
                VisitorSummary::unknown()
            }
        };

        self.pending = None;
        self.transition(trigger, self.entered_at);
        Ok(summary)
    }

    fn request_completion(&mut self, trigger: Trigger) {
        self.timer = StateTimer::None;
        self.pending = Some(trigger);
    }

    fn transition(&mut self, trigger: Trigger, at: Instant) {
        let Some(next) = self.state.next(trigger, self.config.capture_name) else {
            tracing::debug!(state = ?self.state, ?trigger, "ignored trigger");
            return;
        };

        tracing::debug!(from = ?self.state, to = ?next, ?trigger, "session transition");
        self.state = next;
        self.entered_at = at;
        self.timer = match next {
            SessionState::Banner => {
                StateTimer::Deadline(Deadline::after(self.config.banner_timeout(), at))
            }
            SessionState::Welcome if self.config.welcome_exit.on_timeout() => {
                StateTimer::Deadline(Deadline::after(self.config.welcome_timeout(), at))
            }
            _ => StateTimer::None,
        };
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// When the current state was entered.
    pub fn entered_at(&self) -> Instant {
        self.entered_at
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.timer.next_due()
    }

    pub fn welcome_exit(&self) -> WelcomeExit {
        self.config.welcome_exit
    }

    pub fn is_completion_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Boot messages revealed so far.
    pub fn visible_messages(&self) -> &'static [&'static str] {
        &self.messages[..self.shown]
    }

    pub fn progress_percent(&self) -> u16 {
        if self.messages.is_empty() {
            return 100;
        }
        ((self.shown * 100) / self.messages.len()).min(100) as u16
    }

    pub fn name_buffer(&self) -> &str {
        &self.buffer
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn display_name(&self) -> &str {
        self.name().unwrap_or(GUEST_NAME)
    }

    pub fn elapsed_in_state(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.entered_at)
    }
}
