//! Showcase TUI Entry Point
//!
//! Launches the Pycoder landing page in the terminal.
//!
//! Usage:
//!   showcase-tui [OPTIONS]
//!
//! Options:
//!   --config <FILE>         Config file (default: XDG config dir)
//!   --no-autoplay           Keep the testimonial carousel manual
//!   --interval-ms <MS>      Testimonial autoplay interval
//!   --transition-ms <MS>    Testimonial cross-fade duration
//!   --log-file <FILE>       Write logs here (filtered by RUST_LOG)

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use showcase_core::{load_config_from_path, ConfigOverrides, ShowcaseConfig};
use showcase_tui::App;

/// Pycoder landing page in the terminal
#[derive(Debug, Parser)]
#[command(name = "showcase-tui", version, about)]
struct Args {
    /// Config file path
    #[arg(long, env = "SHOWCASE_CONFIG")]
    config: Option<PathBuf>,

    /// Disable testimonial autoplay
    #[arg(long)]
    no_autoplay: bool,

    /// Testimonial autoplay interval in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Testimonial cross-fade duration in milliseconds
    #[arg(long)]
    transition_ms: Option<u64>,

    /// Log file (the terminal is taken by the UI)
    #[arg(long, env = "SHOWCASE_LOG_FILE")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides::new();
        if self.no_autoplay {
            overrides = overrides.with_autoplay(false);
        }
        if let Some(ms) = self.interval_ms {
            overrides = overrides.with_autoplay_interval_ms(ms);
        }
        if let Some(ms) = self.transition_ms {
            overrides = overrides.with_transition_ms(ms);
        }
        overrides
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let config = load(&args)?;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: showcase-tui requires a terminal (TTY)");
        eprintln!("Run it interactively, or over SSH with -t.");
        std::process::exit(1);
    }

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Load config from file and environment, then apply CLI overrides
fn load(args: &Args) -> anyhow::Result<ShowcaseConfig> {
    let mut config = load_config_from_path(args.config.clone()).context("failed to load config")?;
    args.overrides()
        .apply(&mut config)
        .context("invalid command-line override")?;
    tracing::info!(source = %config.source(), "Configuration ready");
    Ok(config)
}

fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &ShowcaseConfig,
) -> anyhow::Result<()> {
    let mut app = App::new(config)?;
    app.run(terminal).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides() {
        let args = Args::parse_from(["showcase-tui", "--no-autoplay", "--interval-ms", "9000"]);
        let mut config = ShowcaseConfig::default();
        args.overrides().apply(&mut config).unwrap();

        assert!(!config.testimonials.autoplay);
        assert_eq!(config.testimonials.autoplay_interval.as_millis(), 9000);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let args = Args::parse_from(["showcase-tui", "--interval-ms", "0"]);
        let mut config = ShowcaseConfig::default();
        assert!(args.overrides().apply(&mut config).is_err());
    }
}
