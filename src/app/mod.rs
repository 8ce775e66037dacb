//! Top-level application controller.
//!
//! `App` routes keys and ticks to the session lifecycle and then to the menu,
//! owns the visitor store handle, and is the only place that shows the error
//! screen or decides the process should exit.

pub mod display;
pub mod menu;
pub mod session;
pub mod timer;

use std::time::{Duration, Instant};

use ratatui::Frame;

use crate::config::Config;
use crate::input::Key;
use crate::services::visitor_store::{StoreError, VisitorStore};
use crate::view::animation;
use crate::view::menu::{render_menu, MenuView};
use crate::view::screens::{render_error, render_session};
use crate::view::theme::Theme;

use self::menu::{MenuAction, MenuNavigator};
use self::session::{SessionController, Step, VisitorSummary, BOOT_MESSAGES};

/// How the process should present itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    Interactive,
    DisplayOnly,
}

impl LaunchMode {
    /// Interactive only when both ends are terminals and nobody asked for
    /// display mode.
    pub fn detect(stdin_is_tty: bool, stdout_is_tty: bool, force_display: bool) -> Self {
        if force_display || !stdin_is_tty || !stdout_is_tty {
            LaunchMode::DisplayOnly
        } else {
            LaunchMode::Interactive
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Session,
    Menu,
    Error { message: String },
}

pub struct App {
    theme: Theme,
    session: SessionController,
    menu: MenuNavigator,
    store: Option<Box<dyn VisitorStore>>,
    summary: VisitorSummary,
    screen: Screen,
    menu_opened_at: Instant,
    should_quit: bool,
}

impl App {
    /// Build the app around the outcome of opening the store.
    ///
    /// A store that failed to open is tolerated unless
    /// `storage.required` is set, in which case the app opens on the error
    /// screen.
    pub fn new(
        config: &Config,
        store: Result<Box<dyn VisitorStore>, StoreError>,
        now: Instant,
    ) -> Self {
        let (store, screen) = match store {
            Ok(store) => (Some(store), Screen::Session),
            Err(e) if config.storage.required => {
                tracing::error!("Visitor store required but unavailable: {}", e);
                (
                    None,
                    Screen::Error {
                        message: e.to_string(),
                    },
                )
            }
            Err(e) => {
                tracing::warn!("Running without visitor store: {}", e);
                (None, Screen::Session)
            }
        };

        Self {
            theme: Theme::from_name(&config.theme),
            session: SessionController::new(BOOT_MESSAGES, config.session.clone(), now),
            menu: MenuNavigator::new(),
            store,
            summary: VisitorSummary::unknown(),
            screen,
            menu_opened_at: now,
            should_quit: false,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Advance timers. Returns true when something visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.screen {
            Screen::Session => {
                let step = self.session.tick(now);
                self.apply(step, now)
            }
            // Animations still need redraws
            Screen::Menu => true,
            Screen::Error { .. } => false,
        }
    }

    pub fn handle_key(&mut self, key: Key, now: Instant) {
        match self.screen {
            Screen::Session => {
                let step = self.session.handle_key(key, now);
                self.apply(step, now);
            }
            Screen::Menu => {
                if self.menu.handle_key(key) == MenuAction::Quit {
                    tracing::info!("Quit from menu");
                    self.should_quit = true;
                }
            }
            Screen::Error { .. } => {
                if key.is_interrupt() {
                    self.should_quit = true;
                }
            }
        }
    }

    fn apply(&mut self, step: Step, now: Instant) -> bool {
        match step {
            Step::Unchanged => false,
            Step::Changed => true,
            Step::Quit => {
                self.should_quit = true;
                true
            }
            Step::Complete => {
                self.finish_session(now);
                true
            }
        }
    }

    fn finish_session(&mut self, now: Instant) {
        match self.session.complete(self.store.as_deref()) {
            Ok(summary) => {
                tracing::info!(
                    visitors = ?summary.total_visitors,
                    anonymous = self.session.name().is_none(),
                    "session complete"
                );
                self.summary = summary;
                self.screen = Screen::Menu;
                self.menu_opened_at = now;
            }
            Err(e) => {
                tracing::error!("Failed to record visit: {}", e);
                self.screen = Screen::Error {
                    message: e.to_string(),
                };
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, now: Instant) {
        let area = frame.area();
        match &self.screen {
            Screen::Session => render_session(frame, area, &self.theme, &self.session, now),
            Screen::Menu => render_menu(
                frame,
                area,
                &MenuView {
                    theme: &self.theme,
                    nav: &self.menu,
                    summary: &self.summary,
                    display_name: self.session.display_name(),
                    elapsed: now.saturating_duration_since(self.menu_opened_at),
                },
            ),
            Screen::Error { message } => render_error(frame, area, &self.theme, message),
        }
    }

    /// How long the event loop may block waiting for input.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let frame = animation::frame_interval();
        match self.screen {
            Screen::Session => self
                .session
                .next_due()
                .map(|due| due.saturating_duration_since(now).min(frame))
                .unwrap_or(frame),
            Screen::Menu => frame,
            Screen::Error { .. } => Duration::from_millis(250),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// 1 after leaving from the error screen, 0 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self.screen {
            Screen::Error { .. } => 1,
            _ => 0,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    pub fn menu(&self) -> &MenuNavigator {
        &self.menu
    }

    pub fn summary(&self) -> &VisitorSummary {
        &self.summary
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }
}
