//! Top-level CLI definition and session wiring.

use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use colored::{Colorize, control};
use thiserror::Error;

use client_menu::core::config::{Config, ConfigOverrides};
use client_menu::core::errors::MenuError;
use client_menu::logger::activity::ActivityLog;
use client_menu::menu::controller::MenuController;
use client_menu::menu::input::TokenReader;
use client_menu::menu::permission::AdminFlag;
use client_menu::menu::session::SessionSummary;
use client_menu::menu::theme::{PlainTheme, Theme, Tone};

/// Client Menu — interactive client-management console.
#[derive(Debug, Parser)]
#[command(
    name = "client-menu",
    author,
    version,
    about = "Client Management Console",
    long_about = None
)]
pub struct Cli {
    /// Load settings from a TOML file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Treat the operator as an administrator (grants Display Info).
    #[arg(long)]
    admin: bool,
    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
    /// Append a JSONL activity log to this file.
    #[arg(long, value_name = "PATH")]
    activity_log: Option<PathBuf>,
    /// Print diagnostics to stderr.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,
    /// Suppress everything on stderr except errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

/// CLI error type with explicit exit-code mapping.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad flags or configuration.
    #[error("{0}")]
    User(String),
    /// Environment/runtime failure.
    #[error("{0}")]
    Runtime(String),
    /// Internal bug or invariant violation.
    #[error("{0}")]
    Internal(String),
    /// JSON serialization failed.
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code contract for the CLI.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::User(_) => 1,
            Self::Runtime(_) => 2,
            Self::Internal(_) | Self::Json(_) => 3,
        }
    }
}

impl From<MenuError> for CliError {
    fn from(err: MenuError) -> Self {
        match err {
            MenuError::InvalidConfig { .. }
            | MenuError::MissingConfig { .. }
            | MenuError::ConfigParse { .. } => Self::User(err.to_string()),
            MenuError::Io { .. } | MenuError::Console { .. } => Self::Runtime(err.to_string()),
            MenuError::Serialization { .. }
            | MenuError::MalformedInput { .. }
            | MenuError::OutOfRange { .. }
            | MenuError::EndOfInput => Self::Internal(err.to_string()),
        }
    }
}

/// Colors by tone when stdout is a terminal.
struct TerminalTheme;

impl Theme for TerminalTheme {
    fn paint(&self, tone: Tone, text: &str) -> String {
        match tone {
            Tone::Banner => text.bold().to_string(),
            Tone::Heading => text.cyan().to_string(),
            Tone::Success => text.green().to_string(),
            Tone::Warning => text.red().to_string(),
        }
    }
}

/// Run one interactive session on stdin/stdout.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    let verbosity = verbosity(cli);
    let config = build_config(cli)?;

    if verbosity == Verbosity::Verbose {
        match &cli.config {
            Some(path) => eprintln!("[CMU-CONFIG] loaded {}", path.display()),
            None => eprintln!("[CMU-CONFIG] no config file, using defaults"),
        }
        eprint!("[CMU-CONFIG] effective config:\n{}", config.to_toml_string()?);
    }

    let color = use_color(config.display.color, io::stdout().is_terminal());
    if !color {
        control::set_override(false);
    }
    let theme: Box<dyn Theme> = if color {
        Box::new(TerminalTheme)
    } else {
        Box::new(PlainTheme)
    };

    let quiet = verbosity == Verbosity::Quiet;
    let activity = ActivityLog::from_config(&config.activity, quiet);
    if !quiet
        && let Some(state) = activity.writer_state()
        && state != "normal"
    {
        eprintln!("[CMU-JSONL] activity log degraded: {state}");
    }

    let mut controller = MenuController::new(AdminFlag::from_config(&config.access))
        .with_banner(config.display.banner.clone())
        .with_theme(theme)
        .with_activity_log(activity);

    let mut input = TokenReader::new(BufReader::new(io::stdin()));
    let mut stdout = io::stdout().lock();
    let summary = controller.run(&mut input, &mut stdout)?;

    if verbosity == Verbosity::Verbose {
        eprintln!("[CMU-MENU] session summary: {}", summary_json(&summary)?);
    }
    Ok(())
}

fn verbosity(cli: &Cli) -> Verbosity {
    if cli.quiet {
        Verbosity::Quiet
    } else if cli.verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

fn build_config(cli: &Cli) -> Result<Config, CliError> {
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_overrides(&ConfigOverrides {
        admin: cli.admin,
        no_color: cli.no_color,
        activity_log: cli.activity_log.clone(),
    });
    Ok(config)
}

fn use_color(configured: bool, stdout_is_terminal: bool) -> bool {
    configured && stdout_is_terminal
}

fn summary_json(summary: &SessionSummary) -> Result<String, CliError> {
    Ok(serde_json::to_string(summary)?)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use client_menu::menu::command::CustomerChoice;
    use client_menu::menu::session::EndReason;

    use super::*;

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "client-menu",
            "--config",
            "/etc/menu.toml",
            "--admin",
            "--no-color",
            "--activity-log",
            "/tmp/menu.jsonl",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.config.as_deref(), Some(Path::new("/etc/menu.toml")));
        assert!(cli.admin);
        assert!(cli.no_color);
        assert_eq!(
            cli.activity_log.as_deref(),
            Some(Path::new("/tmp/menu.jsonl"))
        );
        assert_eq!(verbosity(&cli), Verbosity::Verbose);
    }

    #[test]
    fn no_flags_is_valid() {
        let cli = Cli::try_parse_from(["client-menu"]).unwrap();
        assert_eq!(verbosity(&cli), Verbosity::Normal);
        let config = build_config(&cli).unwrap();
        assert!(!config.access.admin);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["client-menu", "-v", "-q"]).is_err());
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.toml");
        fs::write(&path, "[display]\nbanner = \"Branch 7\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "client-menu",
            "--config",
            path.to_str().unwrap(),
            "--admin",
        ])
        .unwrap();
        let config = build_config(&cli).unwrap();
        assert!(config.access.admin);
        assert_eq!(config.display.banner, "Branch 7");
    }

    #[test]
    fn missing_config_is_user_error() {
        let cli =
            Cli::try_parse_from(["client-menu", "--config", "/nonexistent/menu.toml"]).unwrap();
        let err = build_config(&cli).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("CMU-1002"));
    }

    #[test]
    fn exit_codes_follow_error_class() {
        let io_err: CliError = MenuError::Console {
            source: io::Error::other("broken pipe"),
        }
        .into();
        assert_eq!(io_err.exit_code(), 2);

        let internal: CliError = MenuError::EndOfInput.into();
        assert_eq!(internal.exit_code(), 3);
    }

    #[test]
    fn color_requires_terminal_and_config() {
        assert!(use_color(true, true));
        assert!(!use_color(true, false));
        assert!(!use_color(false, true));
    }

    #[test]
    fn terminal_theme_keeps_text() {
        control::set_override(true);
        let painted = TerminalTheme.paint(Tone::Warning, "Permission denied.");
        assert!(painted.contains("Permission denied."));
        assert_ne!(painted, "Permission denied.");
        control::unset_override();
    }

    #[test]
    fn summary_renders_as_json() {
        let summary = SessionSummary {
            commands_processed: 2,
            invalid_inputs: 0,
            last_choice: Some(CustomerChoice::new(5).unwrap()),
            ended_by: Some(EndReason::ExitCommand),
        };
        let json = summary_json(&summary).unwrap();
        assert!(json.contains("\"last_choice\":5"));
        assert!(json.contains("\"ended_by\":\"exit_command\""));
    }
}
