use std::time::Duration;

use termfolio::app::display::run_display_only;
use termfolio::config::Config;
use termfolio::model::Section;
use termfolio::services::time_source::TestTimeSource;

fn config_with_db(dir: &std::path::Path) -> Config {
    let mut config = Config::default();
    config.storage.path = Some(dir.join("visitors.db"));
    config.menu.display_passes = 1;
    config
}

/// Display mode prints every section and never touches the visitor store
#[test]
fn test_display_only_prints_everything_and_records_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_with_db(dir.path());
    let time = TestTimeSource::new();
    let mut out = Vec::new();

    let printed = run_display_only(&config, &mut out, &time).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(printed, Section::ALL.len());
    for section in Section::ALL {
        let header = format!("[{}] {}", section.hotkey(), section.title().to_uppercase());
        assert_eq!(text.matches(&header).count(), 1, "{header} missing");
    }
    assert!(text.contains("mohilg@outlook.com"));
    assert!(!config.storage.resolved_path().exists());
}

#[test]
fn test_display_only_follows_cycle_interval() {
    let time = TestTimeSource::new();
    let mut config = Config::default();
    config.menu.display_cycle_ms = 1000;
    config.menu.display_passes = 2;
    let mut out = Vec::new();

    let printed = run_display_only(&config, &mut out, &time).unwrap();

    assert_eq!(printed, 12);
    // Eleven waits between twelve sections
    assert_eq!(time.elapsed(), Duration::from_millis(11_000));
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("[h] HOME").count(), 2);
}

#[test]
fn test_display_only_write_error_propagates() {
    struct Closed;
    impl std::io::Write for Closed {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let time = TestTimeSource::new();
    let err = run_display_only(&Config::default(), &mut Closed, &time).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    assert_eq!(time.elapsed(), Duration::ZERO);
}
