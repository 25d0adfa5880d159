use anyhow::{Context, Result};
use clap::Parser;
use dirchooser::app::App;
use dirchooser::chooser::SelectionResult;
use dirchooser::cli::Cli;
use dirchooser::config::Config;
use dirchooser::styles::{init_theme, ThemeType};
use std::io::Write;
use tracing::{info, warn};

/// Exit status when something other than the user's choice ended the run
const EXIT_INTERNAL_ERROR: i32 = 2;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stderr(),
            crossterm::event::DisableFocusChange,
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));
}

/// Log to `<cache dir>/dirchooser/dirchooser.log`; the terminal belongs to the UI
fn init_logging() -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = dirchooser::utils::get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "dirchooser.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    Ok(guard)
}

fn theme_type(config: &Config) -> ThemeType {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    if no_color {
        ThemeType::NoColor
    } else {
        config.theme.parse().unwrap_or_default()
    }
}

fn print_selection(result: &SelectionResult, print0: bool) -> Result<()> {
    let Some(path) = result.path() else {
        return Ok(());
    };
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(path.as_os_str().as_encoded_bytes())?;
    stdout.write_all(if print0 { b"\0" } else { b"\n" })?;
    stdout.flush().context("Failed to write selection")?;
    Ok(())
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    if cli.execute()? {
        return Ok(0);
    }

    setup_panic_hook();
    let _guard = init_logging()?;

    let config_path = dirchooser::utils::get_config_path();
    let mut config = Config::load_or_create(&config_path)
        .with_context(|| format!("Failed to load configuration from {:?}", config_path))?;
    cli.apply_overrides(&mut config)?;

    for (key, error) in config.keymap.invalid_overrides() {
        warn!("Ignoring key binding {:?}: {}", key, error);
    }

    init_theme(theme_type(&config));

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let start_dir = cli.start_dir(&config, &cwd);
    info!(
        "Starting in {:?} (theme {}, keymap {})",
        start_dir,
        config.theme,
        config.keymap.preset.name()
    );

    let mut app = App::new(config, start_dir, cli.new_dir_name.clone())?;
    let result = app.run()?;
    drop(app);

    print_selection(&result, cli.print0)?;
    Ok(result.exit_code())
}

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            EXIT_INTERNAL_ERROR
        }
    };
    std::process::exit(code);
}
