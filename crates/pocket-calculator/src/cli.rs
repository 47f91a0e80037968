//! Command-line front-end
//!
//! ```bash
//! pocket-calculator                       # interactive terminal UI
//! pocket-calculator --script "12+3="      # replay keys, print each display
//! pocket-calculator -c display.json -vv   # custom thresholds, debug logs
//! pocket-calculator -vv --log-file calc.log   # logs while the terminal UI runs
//! ```

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use clap::{ArgAction, Parser};
use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::info;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, EnvFilter};

use crate::config::DisplayConfig;
use crate::core::{CalcResult, Calculator, Render};
use crate::keypad::KeypadAction;
use crate::tui::{hit_test, keypad_area, render, CalculatorApp, InputHandler};

/// Pocket calculator with comma-decimal display
#[derive(Parser, Debug)]
#[command(name = "pocket-calculator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Display configuration file (JSON)
    #[arg(short, long, value_name = "PATH", env = "POCKET_CALCULATOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Replay a key script instead of starting the terminal UI
    #[arg(short, long, value_name = "KEYS")]
    pub script: Option<String>,

    /// Write logs to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// Appended to a file
    File(PathBuf),
    /// Discarded
    Off,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is unset
    #[must_use]
    pub const fn default_log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Log destination; stderr would draw over the terminal UI
    #[must_use]
    pub fn log_target(&self) -> LogTarget {
        match (&self.log_file, &self.script) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, Some(_)) => LogTarget::Stderr,
            (None, None) => LogTarget::Off,
        }
    }

    /// Loads the configured display settings, or the defaults
    pub fn load_config(&self) -> CalcResult<DisplayConfig> {
        match &self.config {
            Some(path) => DisplayConfig::from_path(path),
            None => Ok(DisplayConfig::default()),
        }
    }
}

/// Installs the log subscriber for [`Cli::log_target`]
pub fn init_tracing(cli: &Cli) -> CalcResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));
    let (writer, ansi) = match cli.log_target() {
        LogTarget::Stderr => (BoxMakeWriter::new(io::stderr), true),
        LogTarget::File(path) => {
            let file = File::options().create(true).append(true).open(path)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        LogTarget::Off => (BoxMakeWriter::new(io::sink), false),
    };
    // A second install (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .try_init();
    Ok(())
}

/// Runs the binary
pub fn run(cli: &Cli) -> CalcResult<()> {
    let config = cli.load_config()?;
    match &cli.script {
        Some(script) => {
            let stdout = io::stdout();
            run_script(script, config, &mut stdout.lock())?;
            Ok(())
        }
        None => run_interactive(config),
    }
}

/// Replays a key script, writing each key label and the display after it
pub fn run_script<W: Write>(script: &str, config: DisplayConfig, out: &mut W) -> CalcResult<Render> {
    let actions = KeypadAction::parse_script(script)?;
    info!(keys = actions.len(), "replaying script");

    let mut calculator = Calculator::with_config(config);
    let mut render = calculator.render();
    for action in actions {
        render = action.apply(&mut calculator);
        writeln!(out, "{}\t{}", action.label(), render.display_text)?;
    }
    Ok(render)
}

fn run_interactive(config: DisplayConfig) -> CalcResult<()> {
    enable_raw_mode()?;
    with_restore(
        || {
            execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
            let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
            event_loop(&mut terminal, CalculatorApp::with_config(config))
        },
        restore_terminal,
    )
}

/// Runs `session`, then `restore` whether or not the session failed.
/// The session error wins over a restore error.
fn with_restore<T>(
    session: impl FnOnce() -> CalcResult<T>,
    restore: impl FnOnce() -> CalcResult<()>,
) -> CalcResult<T> {
    let result = session();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

fn restore_terminal() -> CalcResult<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
    raw?;
    screen?;
    Ok(())
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: CalculatorApp,
) -> CalcResult<()> {
    let input_handler = InputHandler::new();
    let mut frame_area = Rect::default();

    while !app.should_quit() {
        terminal.draw(|frame| {
            frame_area = frame.area();
            render(&app, frame);
        })?;

        match event::read()? {
            Event::Key(key) => app.handle(input_handler.handle_key(key)),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                if let Some(action) = hit_test(app.keypad(), keypad_area(frame_area), column, row)
                {
                    app.press(action);
                }
            }
            _ => {}
        }
    }

    Ok(())
}
