//! Menu navigation state.
//!
//! Rendering reads `(current, selected, search_mode, buffer)` and nothing
//! else, so every key handled here is a pure state update.

use crate::input::Key;
use crate::model::portfolio;
use crate::model::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNavigator {
    current: Section,
    selected: usize,
    search_mode: bool,
    buffer: String,
}

impl Default for MenuNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuNavigator {
    pub fn new() -> Self {
        Self {
            current: Section::Home,
            selected: 0,
            search_mode: false,
            buffer: String::new(),
        }
    }

    pub fn handle_key(&mut self, key: Key) -> MenuAction {
        // Global keys first
        match key {
            Key::Interrupt => return MenuAction::Quit,
            Key::Esc if self.search_mode => {
                self.leave_search();
                return MenuAction::None;
            }
            Key::Esc => return MenuAction::Quit,
            Key::Char('q' | 'Q') if !self.search_mode => return MenuAction::Quit,
            _ => {}
        }

        if self.search_mode {
            self.handle_search_key(key);
        } else {
            self.handle_nav_key(key);
        }
        MenuAction::None
    }

    fn handle_search_key(&mut self, key: Key) {
        match key {
            Key::Char(c) => self.buffer.push(c),
            Key::Backspace => {
                self.buffer.pop();
            }
            Key::Enter => {
                match portfolio::search(&self.buffer) {
                    Some(section) => self.jump_to(section),
                    None => tracing::debug!(query = %self.buffer, "search found nothing"),
                }
                self.leave_search();
            }
            _ => {}
        }
    }

    fn handle_nav_key(&mut self, key: Key) {
        let len = Section::ALL.len();
        match key {
            Key::Up => self.selected = (self.selected + len - 1) % len,
            Key::Down => self.selected = (self.selected + 1) % len,
            Key::Enter => self.current = Section::at(self.selected),
            Key::Char('/') => self.search_mode = true,
            Key::Char(c) => {
                if let Some(section) = Section::from_hotkey(c) {
                    self.jump_to(section);
                }
            }
            _ => {}
        }
    }

    fn jump_to(&mut self, section: Section) {
        self.current = section;
        self.selected = section.index();
    }

    fn leave_search(&mut self) {
        self.search_mode = false;
        self.buffer.clear();
    }

    pub fn current(&self) -> Section {
        self.current
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_search_mode(&self) -> bool {
        self.search_mode
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}
