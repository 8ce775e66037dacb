use crate::common::harness::AppTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use termfolio::app::Screen;
use termfolio::model::Section;

fn menu_harness() -> AppTestHarness {
    let mut harness = AppTestHarness::new(120, 60).unwrap();
    harness.enter_menu_as("ada");
    assert_eq!(harness.screen(), &Screen::Menu);
    harness
}

#[test]
fn test_menu_opens_on_home() {
    let mut harness = menu_harness();
    assert_eq!(harness.app().menu().current(), Section::Home);
    harness.assert_screen_contains("Welcome to My Digital Portfolio");
    harness.assert_screen_contains("[h] Home");
    harness.assert_screen_contains("[c] Contact");
    harness.assert_screen_contains("Search: /");
}

#[test]
fn test_hotkeys_jump_to_sections() {
    let mut harness = menu_harness();

    harness.press(KeyCode::Char('p'));
    assert_eq!(harness.app().menu().current(), Section::Projects);
    harness.assert_screen_contains("Featured Projects");

    // Uppercase works too
    harness.send_key(KeyCode::Char('S'), KeyModifiers::SHIFT);
    assert_eq!(harness.app().menu().current(), Section::Skills);
    assert_eq!(harness.app().menu().selected(), Section::Skills.index());
    harness.assert_screen_contains("Technical Skills");
}

#[test]
fn test_arrows_select_and_enter_commits() {
    let mut harness = menu_harness();

    harness.press(KeyCode::Down);
    assert_eq!(harness.app().menu().current(), Section::Home);
    harness.assert_screen_contains("Welcome to My Digital Portfolio");

    harness.press(KeyCode::Enter);
    assert_eq!(harness.app().menu().current(), Section::About);
    harness.assert_screen_contains("Education");
}

#[test]
fn test_up_from_first_wraps_to_last() {
    let mut harness = menu_harness();
    harness.press(KeyCode::Up);
    harness.press(KeyCode::Enter);
    assert_eq!(harness.app().menu().current(), Section::Contact);
    harness.assert_screen_contains("Get In Touch");
}

#[test]
fn test_search_shows_buffer_and_jumps() {
    let mut harness = menu_harness();

    harness.press(KeyCode::Char('/'));
    harness.type_text("skil");
    assert!(harness.app().menu().is_search_mode());
    harness.assert_screen_contains("Search: skil_");
    // Typed letters are not hotkeys while searching
    assert_eq!(harness.app().menu().current(), Section::Home);

    harness.press(KeyCode::Enter);
    assert!(!harness.app().menu().is_search_mode());
    assert_eq!(harness.app().menu().current(), Section::Skills);
    harness.assert_screen_contains("Technical Skills");
    harness.assert_screen_not_contains("Search: skil_");
}

#[test]
fn test_search_matches_section_content() {
    let mut harness = menu_harness();
    harness.press(KeyCode::Char('/'));
    harness.type_text("kumamoto");
    harness.press(KeyCode::Enter);
    assert_eq!(harness.app().menu().current(), Section::About);
}

#[test]
fn test_escape_cancels_search_then_quits() {
    let mut harness = menu_harness();
    harness.press(KeyCode::Char('/'));
    harness.type_text("q");

    harness.press(KeyCode::Esc);
    assert!(!harness.should_quit());
    assert!(!harness.app().menu().is_search_mode());
    assert_eq!(harness.app().menu().buffer(), "");

    harness.press(KeyCode::Esc);
    assert!(harness.should_quit());
    assert_eq!(harness.app().exit_code(), 0);
}

#[test]
fn test_q_quits_from_menu() {
    let mut harness = menu_harness();
    harness.press(KeyCode::Char('q'));
    assert!(harness.should_quit());
}

#[test]
fn test_menu_animates_without_input() {
    let mut harness = menu_harness();
    harness.render().unwrap();
    let before = harness.screen_to_string();

    // Long enough for the pulse and wave frames to move on
    harness.advance_ms(250);
    harness.render().unwrap();
    let after = harness.screen_to_string();

    assert_ne!(before, after);
    assert_eq!(harness.app().menu().current(), Section::Home);
}
