use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{poll as event_poll, read as event_read, Event as CrosstermEvent};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use termfolio::app::{display, App, LaunchMode};
use termfolio::config::Config;
use termfolio::input::Key;
use termfolio::services::terminal_modes::{self, TerminalModes};
use termfolio::services::time_source::{RealTimeSource, TimeSource};
use termfolio::services::visitor_store::{SqliteVisitorStore, VisitorStore};
use termfolio::services::{log_dirs, tracing_setup};
use termfolio::view::theme::Theme;

/// An interactive terminal portfolio
#[derive(Parser, Debug)]
#[command(name = "termfolio")]
#[command(about = "An interactive terminal portfolio", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to the visitor database
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Path to log file (default: XDG state dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Colour theme name
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Skip the name prompt; every session is a guest
    #[arg(long)]
    no_name_prompt: bool,

    /// Exit with an error screen if the visitor database cannot be opened
    #[arg(long)]
    require_store: bool,

    /// Cycle through sections as plain text instead of running interactively
    #[arg(long)]
    display_only: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Print the directories used by termfolio and exit
    #[arg(long)]
    show_paths: bool,

    /// List available themes and exit
    #[arg(long)]
    list_themes: bool,
}

fn load_config(args: &Args) -> AnyhowResult<Config> {
    let mut config = Config::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;

    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
    }
    if let Some(db) = &args.db {
        config.storage.path = Some(db.clone());
    }
    if args.no_name_prompt {
        config.session.capture_name = false;
    }
    if args.require_store {
        config.storage.required = true;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn print_all_paths(config: &Config) {
    let show = |label: &str, path: Option<PathBuf>| match path {
        Some(p) => println!("{label:<10} {}", p.display()),
        None => println!("{label:<10} (unavailable)"),
    };
    show("config", Config::default_path());
    show("themes", Config::themes_dir());
    show("database", Some(config.storage.resolved_path()));
    show("logs", Some(log_dirs::log_dir().clone()));
}

fn main() -> AnyhowResult<ExitCode> {
    let args = Args::parse();

    // Handle informational flags early (no terminal setup needed)
    if args.list_themes {
        for name in Theme::available_themes() {
            println!("{name}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&args)?;

    if args.show_paths {
        print_all_paths(&config);
        return Ok(ExitCode::SUCCESS);
    }

    if args.dump_config {
        println!("{}", config.to_json()?);
        return Ok(ExitCode::SUCCESS);
    }

    let log_file = args.log_file.clone().unwrap_or_else(log_dirs::main_log_path);
    if let Err(e) = tracing_setup::init_global(&log_file) {
        eprintln!("Warning: could not open log file {}: {}", log_file.display(), e);
    }
    log_dirs::cleanup_stale_logs();
    tracing::info!("termfolio starting");

    let mode = LaunchMode::detect(
        io::stdin().is_terminal(),
        io::stdout().is_terminal(),
        args.display_only,
    );
    tracing::info!(?mode, "launch mode");

    match mode {
        LaunchMode::DisplayOnly => run_display(&config),
        LaunchMode::Interactive => run_interactive(&config),
    }
}

fn run_display(config: &Config) -> AnyhowResult<ExitCode> {
    let mut out = io::stdout().lock();
    match display::run_display_only(config, &mut out, &RealTimeSource::new()) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        // Reader went away (e.g. piped into `head`)
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(ExitCode::SUCCESS),
        Err(e) => Err(e).context("Display output failed"),
    }
}

fn run_interactive(config: &Config) -> AnyhowResult<ExitCode> {
    let time = RealTimeSource::new();
    let store = SqliteVisitorStore::open(&config.storage.resolved_path())
        .map(|store| Box::new(store) as Box<dyn VisitorStore>);
    let mut app = App::new(config, store, time.now());

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));

    let mut modes = TerminalModes::enable().context("Failed to set up terminal")?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to create terminal")?;
    terminal.clear()?;

    let result = run_event_loop(&mut app, &mut terminal, &time, |timeout| {
        if event_poll(timeout)? {
            Ok(Some(event_read()?))
        } else {
            Ok(None)
        }
    });

    modes.undo();
    result.context("Event loop returned an error")?;

    let code = app.exit_code();
    tracing::info!(exit_code = code, "termfolio exiting");
    Ok(ExitCode::from(code))
}

fn run_event_loop<F>(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    time: &dyn TimeSource,
    mut poll_event: F,
) -> AnyhowResult<()>
where
    F: FnMut(Duration) -> AnyhowResult<Option<CrosstermEvent>>,
{
    let mut needs_render = true;

    loop {
        if app.tick(time.now()) {
            needs_render = true;
        }

        if app.should_quit() {
            break;
        }

        if needs_render {
            let now = time.now();
            terminal.draw(|frame| app.render(frame, now))?;
            needs_render = false;
        }

        let Some(event) = poll_event(app.poll_timeout(time.now()))? else {
            continue;
        };

        match event {
            CrosstermEvent::Key(key_event) => {
                if let Some(key) = Key::from_event(key_event) {
                    app.handle_key(key, time.now());
                    needs_render = true;
                }
            }
            CrosstermEvent::Resize(_, _) => needs_render = true,
            _ => {}
        }
    }

    Ok(())
}
