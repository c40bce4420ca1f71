//! AssetDesk CLI entry point.
//!
//! `run` is the interactive loop: every stdin line is one JSON-encoded UI
//! action, applied to the seeded store and followed by a re-render.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use assetdesk_app::view::DashboardView;
use assetdesk_app::{Action, AppConfig, AppState, JsonFilePreferences, Theme, View};
use assetdesk_core::UuidV7Generator;
use assetdesk_dashboard::compute_stats;
use assetdesk_inventory::EntityStore;
use assetdesk_observability::LogFormat;

/// Departments, their assets and inventory checks.
#[derive(Parser, Debug)]
#[command(name = "assetdesk", version, about)]
struct Cli {
    /// Preference file (overrides ASSETDESK_PREFERENCES_PATH).
    #[arg(long, global = true)]
    preferences: Option<PathBuf>,

    /// Log format (overrides ASSETDESK_LOG_FORMAT).
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print dashboard statistics for the seed data.
    Dashboard {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Show or change the persisted theme.
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommand>,
    },
    /// Apply JSON action lines from stdin, re-rendering after each.
    Run {
        /// Emit a JSON snapshot per action instead of the text view.
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Subcommand, Debug)]
enum ThemeCommand {
    /// Print the current theme.
    Show,
    /// Switch between light and dark.
    Toggle,
    /// Set an explicit theme.
    Set {
        #[arg(value_parser = parse_theme)]
        theme: Theme,
    },
}

fn parse_theme(s: &str) -> Result<Theme, String> {
    match s {
        "dark" => Ok(Theme::Dark),
        "light" => Ok(Theme::Light),
        other => Err(format!("unknown theme `{other}` (expected `dark` or `light`)")),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env().context("invalid configuration")?;
    if let Some(path) = cli.preferences {
        config.preferences_path = path;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }

    assetdesk_observability::init(config.log_format);
    tracing::debug!(?config, "configuration loaded");

    let state = AppState::load(
        EntityStore::seeded(UuidV7Generator),
        JsonFilePreferences::new(&config.preferences_path),
        config.prefers_dark,
    );

    match cli.command {
        Commands::Dashboard { json } => dashboard(&state, json),
        Commands::Theme { command } => theme(state, command.unwrap_or(ThemeCommand::Show)),
        Commands::Run { json } => run(state, json),
    }
}

fn dashboard(state: &AppState, json: bool) -> anyhow::Result<()> {
    let store = state.store();
    let stats = compute_stats(store.departments(), store.properties(), store.inventory_records());

    let mut out = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &stats).context("failed to serialize stats")?;
        writeln!(out)?;
    } else {
        write!(out, "{}", DashboardView::new(&stats, store))?;
    }
    Ok(())
}

fn theme(mut state: AppState, command: ThemeCommand) -> anyhow::Result<()> {
    let theme = match command {
        ThemeCommand::Show => state.theme(),
        ThemeCommand::Toggle => state.toggle_theme().with_context(|| {
            format!("failed to save theme to {:?}", state.preferences().path())
        })?,
        ThemeCommand::Set { theme } => state.set_theme(theme).with_context(|| {
            format!("failed to save theme to {:?}", state.preferences().path())
        })?,
    };
    println!("{theme}");
    Ok(())
}

fn run(mut state: AppState, json: bool) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut out = std::io::stdout().lock();

    render(&mut out, &state, json)?;

    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line.context("failed to read stdin")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let action: Action = match serde_json::from_str(line) {
            Ok(action) => action,
            Err(err) => {
                tracing::warn!(line = index + 1, error = %err, "skipping malformed action");
                eprintln!("line {}: malformed action: {err}", index + 1);
                continue;
            }
        };

        let name = action.name();
        if let Err(err) = state.dispatch(action) {
            tracing::warn!(line = index + 1, action = name, error = %err, "action rejected");
            eprintln!("line {}: {name} rejected: {err}", index + 1);
            continue;
        }

        render(&mut out, &state, json)?;
    }
    Ok(())
}

fn render(out: &mut impl Write, state: &AppState, json: bool) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer(&mut *out, &state.snapshot()).context("failed to serialize snapshot")?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", View::new(state))?;
    }
    out.flush()?;
    Ok(())
}
