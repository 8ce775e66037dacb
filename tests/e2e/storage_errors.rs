use crate::common::fixtures::{FailOn, FailingStore};
use crate::common::harness::AppTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use termfolio::app::session::SessionState;
use termfolio::app::Screen;
use termfolio::config::Config;
use termfolio::services::visitor_store::{SqliteVisitorStore, StoreError, VisitorStore};

const W: u16 = 120;
const H: u16 = 60;

fn sqlite(path: &std::path::Path) -> Result<Box<dyn VisitorStore>, StoreError> {
    SqliteVisitorStore::open(path).map(|s| Box::new(s) as Box<dyn VisitorStore>)
}

#[test]
fn test_write_failure_shows_error_screen() {
    let store = FailingStore::new(FailOn::Upsert);
    let calls = store.calls.clone();
    let mut harness =
        AppTestHarness::with_store(W, H, Config::default(), Ok(Box::new(store))).unwrap();

    harness.enter_menu_as("ada");

    assert!(matches!(harness.screen(), Screen::Error { .. }));
    assert_eq!(calls.upserts(), 1);
    // Never reached the menu
    assert_eq!(harness.session_state(), SessionState::Welcome);
    harness.assert_screen_contains("SESSION ERROR");
    harness.assert_screen_contains("failed to record visit: disk I/O error");
}

#[test]
fn test_error_screen_only_exits_on_interrupt() {
    let mut harness = AppTestHarness::with_store(
        W,
        H,
        Config::default(),
        Ok(Box::new(FailingStore::new(FailOn::Upsert))),
    )
    .unwrap();
    harness.enter_menu_as("ada");

    harness.press(KeyCode::Enter);
    harness.type_text("q");
    harness.advance_ms(60_000);
    assert!(!harness.should_quit());

    harness.send_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(harness.should_quit());
    assert_eq!(harness.app().exit_code(), 1);
}

#[test]
fn test_count_failure_degrades_to_unknown() {
    let mut harness = AppTestHarness::with_store(
        W,
        H,
        Config::default(),
        Ok(Box::new(FailingStore::new(FailOn::Count))),
    )
    .unwrap();
    harness.enter_menu_as("ada");

    assert_eq!(harness.screen(), &Screen::Menu);
    assert_eq!(harness.app().summary().total_visitors, None);
    assert!(harness.app().summary().visitor.is_some());
    harness.assert_screen_contains("Visitors: unknown");
}

#[test]
fn test_unavailable_store_runs_without_counter() {
    let mut harness = AppTestHarness::with_store(
        W,
        H,
        Config::default(),
        Err(StoreError::Init("unable to open database file".into())),
    )
    .unwrap();
    assert!(!harness.app().has_store());

    harness.enter_menu_as("ada");
    assert_eq!(harness.screen(), &Screen::Menu);
    harness.assert_screen_contains("Hello, ada!");
    harness.assert_screen_contains("Visitors: unknown");
}

#[test]
fn test_required_store_failure_starts_on_error_screen() {
    let mut config = Config::default();
    config.storage.required = true;
    let mut harness = AppTestHarness::with_store(
        W,
        H,
        config,
        Err(StoreError::Init("unable to open database file".into())),
    )
    .unwrap();

    harness.assert_screen_contains("visitor store unavailable");
    harness.advance_ms(10_000);
    assert!(matches!(harness.screen(), Screen::Error { .. }));

    harness.press(KeyCode::Esc);
    assert!(harness.should_quit());
    assert_eq!(harness.app().exit_code(), 1);
}

/// A returning visitor is matched by name across runs
#[test]
fn test_returning_visitor_persists_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("nested").join("visitors.db");

    let mut first = AppTestHarness::with_store(W, H, Config::default(), sqlite(&db)).unwrap();
    first.enter_menu_as("ada");
    first.assert_screen_contains("Visitors: 1");
    first.assert_screen_not_contains("Visit #");
    drop(first);

    let mut second = AppTestHarness::with_store(W, H, Config::default(), sqlite(&db)).unwrap();
    second.enter_menu_as("ada");
    second.assert_screen_contains("Visitors: 1");
    second.assert_screen_contains("Visit #2");
    drop(second);

    let mut guest = AppTestHarness::with_store(W, H, Config::default(), sqlite(&db)).unwrap();
    guest.enter_menu_as("");
    guest.assert_screen_contains("Hello, Guest User!");
    guest.assert_screen_contains("Visitors: 2");
}
