use crate::common::fixtures::MemoryStore;
use crate::common::harness::AppTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use termfolio::app::session::SessionState;
use termfolio::app::Screen;
use termfolio::config::{Config, WelcomeExit};
use termfolio::view::banner::BANNER_TAGLINE;

const W: u16 = 120;
const H: u16 = 60;

/// Boot messages are revealed one per interval with a progress readout
#[test]
fn test_boot_reveals_messages_progressively() {
    let mut harness = AppTestHarness::new(W, H).unwrap();

    harness.assert_screen_contains("Initializing kernel modules...");
    harness.assert_screen_contains("System Loading: 12%");
    harness.assert_screen_not_contains("Loading device drivers...");

    harness.advance_ms(599);
    harness.assert_screen_not_contains("Loading device drivers...");

    harness.advance_ms(1);
    harness.assert_screen_contains("Loading device drivers...");
    harness.assert_screen_contains("System Loading: 25%");
}

/// Eight messages at 600ms: the last appears at 4.2s, banner at 4.8s
#[test]
fn test_banner_follows_boot() {
    let mut harness = AppTestHarness::new(W, H).unwrap();

    harness.advance_ms(4200);
    assert_eq!(harness.session_state(), SessionState::Booting);
    harness.assert_screen_contains("System ready for development!");
    // The progress readout is gone once every message is shown
    harness.assert_screen_not_contains("System Loading");

    harness.advance_ms(600);
    assert_eq!(harness.session_state(), SessionState::Banner);
    harness.assert_screen_contains(BANNER_TAGLINE);

    harness.advance_ms(2999);
    assert_eq!(harness.session_state(), SessionState::Banner);
    harness.advance_ms(1);
    assert_eq!(harness.session_state(), SessionState::NameInput);
}

/// Keys other than interrupts don't skip the boot sequence
#[test]
fn test_keys_during_boot_are_ignored() {
    let mut harness = AppTestHarness::new(W, H).unwrap();
    harness.press(KeyCode::Enter);
    harness.type_text("hello");
    assert_eq!(harness.session_state(), SessionState::Booting);
    assert!(!harness.should_quit());
}

#[test]
fn test_name_input_echoes_and_edits() {
    let mut harness = AppTestHarness::new(W, H).unwrap();
    harness.skip_to_name_input();
    harness.assert_screen_contains("Enter your username");

    harness.type_text("adax");
    harness.press(KeyCode::Backspace);
    harness.assert_screen_contains("$ ada");
    harness.assert_screen_not_contains("$ adax");
}

/// `q` is an ordinary character while typing a name
#[test]
fn test_q_is_typed_during_name_input() {
    let mut harness = AppTestHarness::new(W, H).unwrap();
    harness.skip_to_name_input();
    harness.type_text("quinn");
    assert!(!harness.should_quit());
    assert_eq!(harness.app().session().name_buffer(), "quinn");
}

#[test]
fn test_named_visitor_reaches_menu_after_welcome_timeout() {
    let mut harness = AppTestHarness::new(W, H).unwrap();
    harness.skip_to_name_input();
    harness.type_text("  Ada  ");
    harness.press(KeyCode::Enter);

    assert_eq!(harness.session_state(), SessionState::Welcome);
    harness.assert_screen_contains("Welcome, Ada!");

    harness.advance_ms(2499);
    assert_eq!(harness.screen(), &Screen::Session);
    harness.advance_ms(1);
    assert_eq!(harness.screen(), &Screen::Menu);

    harness.assert_screen_contains("Hello, Ada!");
    harness.assert_screen_contains("Visitors: 1");
}

#[test]
fn test_empty_name_is_guest() {
    let mut harness = AppTestHarness::new(W, H).unwrap();
    harness.skip_to_name_input();
    harness.type_text("   ");
    harness.press(KeyCode::Enter);

    harness.assert_screen_contains("Welcome, Guest User!");
    assert_eq!(harness.app().session().name(), None);

    harness.press(KeyCode::Char('x'));
    assert_eq!(harness.screen(), &Screen::Menu);
    let visitor = harness.app().summary().visitor.clone().unwrap();
    assert!(visitor.is_anonymous());
}

#[test]
fn test_disabled_name_prompt_goes_straight_to_welcome() {
    let mut config = Config::default();
    config.session.capture_name = false;
    let mut harness = AppTestHarness::with_config(W, H, config).unwrap();

    harness.advance_ms(4800 + 3000);
    assert_eq!(harness.session_state(), SessionState::Welcome);
    harness.assert_screen_contains("Welcome, Guest User!");
}

/// With a timeout-only policy, keys on the welcome screen do nothing
#[test]
fn test_timeout_only_welcome_ignores_keys() {
    let mut config = Config::default();
    config.session.welcome_exit = WelcomeExit::Timeout;
    let mut harness = AppTestHarness::with_config(W, H, config).unwrap();

    harness.skip_to_name_input();
    harness.press(KeyCode::Enter);
    harness.press(KeyCode::Char('x'));
    harness.press(KeyCode::Enter);
    assert_eq!(harness.session_state(), SessionState::Welcome);
    harness.assert_screen_contains("Starting shortly...");

    harness.advance_ms(2500);
    assert_eq!(harness.screen(), &Screen::Menu);
}

/// With a key-only policy, welcome waits indefinitely
#[test]
fn test_any_key_welcome_has_no_timeout() {
    let mut config = Config::default();
    config.session.welcome_exit = WelcomeExit::AnyKey;
    let mut harness = AppTestHarness::with_config(W, H, config).unwrap();

    harness.skip_to_name_input();
    harness.press(KeyCode::Enter);
    harness.advance_ms(60_000);
    assert_eq!(harness.session_state(), SessionState::Welcome);
    harness.assert_screen_contains("Press any key to continue...");

    harness.press(KeyCode::Char('z'));
    assert_eq!(harness.screen(), &Screen::Menu);
}

#[test]
fn test_escape_quits_during_boot() {
    let mut harness = AppTestHarness::new(W, H).unwrap();
    harness.press(KeyCode::Esc);
    assert!(harness.should_quit());
    assert_eq!(harness.app().exit_code(), 0);
}

#[test]
fn test_ctrl_c_quits_during_name_input_without_recording() {
    let store = MemoryStore::new();
    let calls = store.calls.clone();
    let mut harness =
        AppTestHarness::with_store(W, H, Config::default(), Ok(Box::new(store))).unwrap();

    harness.skip_to_name_input();
    harness.type_text("ada");
    harness.send_key(KeyCode::Char('c'), KeyModifiers::CONTROL);

    assert!(harness.should_quit());
    assert_eq!(calls.upserts(), 0);
}

/// The visit is written once, when welcome hands over to the menu
#[test]
fn test_visit_recorded_exactly_once() {
    let store = MemoryStore::new();
    let calls = store.calls.clone();
    let mut harness =
        AppTestHarness::with_store(W, H, Config::default(), Ok(Box::new(store))).unwrap();

    harness.skip_to_name_input();
    harness.type_text("ada");
    harness.press(KeyCode::Enter);
    assert_eq!(calls.upserts(), 0);

    harness.press(KeyCode::Char(' '));
    harness.press(KeyCode::Char(' '));
    harness.advance_ms(10_000);

    assert_eq!(calls.upserts(), 1);
    assert_eq!(calls.counts(), 1);
}
