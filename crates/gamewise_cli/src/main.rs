//! Terminal viewer for the game theory guide.
//!
//! Examples:
//!   gamewise
//!   gamewise list
//!   gamewise show --scenario salary
//!   gamewise show --section scenarios --format markdown
//!   gamewise show --scenario teamwork --format html > teamwork.html
//!   gamewise principles --format json
//!
//! Logs go to stderr so exports on stdout stay clean. `-v` raises the log
//! level; `RUST_LOG` overrides it.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use gamewise::content;
use gamewise::output::{render_as, Format};
use gamewise::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "gamewise", version)]
#[command(about = "Game Theory for Your Future, in the terminal")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the guide for a section and optional scenario (default)
    Show(ShowArgs),
    /// List scenario keys with their titles
    List,
    /// Render the key principles
    Principles {
        /// Output format: text, markdown, html or json
        #[arg(long, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Args, Debug, Default)]
struct ShowArgs {
    /// Section to show: principles or scenarios
    #[arg(long)]
    section: Option<Section>,

    /// Scenario to expand; implies `--section scenarios` when no section is given
    #[arg(long)]
    scenario: Option<ScenarioId>,

    /// Output format: text, markdown, html or json
    #[arg(long, default_value_t = Format::Text)]
    format: Format,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("gamewise={level},gamewise_cli={level}"))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Replays the command-line selection through the view state controller.
fn build_state(section: Option<Section>, scenario: Option<ScenarioId>) -> ViewState {
    let mut state = ViewState::new();

    let section = match (section, scenario) {
        (Some(section), _) => Some(section),
        (None, Some(_)) => Some(Section::Scenarios),
        (None, None) => None,
    };
    if let Some(section) = section {
        state.select_section(section);
    }
    if let Some(id) = scenario {
        state.select_scenario(id);
    }
    state
}

fn write_list(out: &mut impl Write) -> io::Result<()> {
    for entry in content::scenarios() {
        writeln!(out, "{:<12} {} {}", entry.key(), entry.id.icon(), entry.title)?;
    }
    Ok(())
}

fn write_page(out: &mut impl Write, state: &ViewState, format: Format) -> Result<()> {
    let page = render(state);
    let mut text = render_as(&page, format)
        .with_context(|| format!("failed to render page as {format}"))?;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    out.write_all(text.as_bytes())?;
    Ok(())
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command.unwrap_or(Command::Show(ShowArgs::default())) {
        Command::List => write_list(out).context("failed to write scenario list")?,
        Command::Principles { format } => {
            let state = build_state(Some(Section::Principles), None);
            write_page(out, &state, format)?;
        }
        Command::Show(args) => {
            let state = build_state(args.section, args.scenario);
            debug!(?state, format = %args.format, "rendering");
            write_page(out, &state, args.format)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    info!("gamewise {}", env!("CARGO_PKG_VERSION"));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn run_args(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut buf = Vec::new();
        run(cli, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn defaults_to_principles_text() {
        let out = run_args(&["gamewise"]);
        assert!(out.contains("[Key Principles]"));
        assert!(out.contains("Think Beyond Yourself"));
        assert!(!out.contains("The Situation"));
    }

    #[test]
    fn scenario_flag_opens_the_scenarios_section() {
        let state = build_state(None, Some(ScenarioId::Salary));
        assert_eq!(state.active_section(), Section::Scenarios);
        assert_eq!(state.selected_scenario(), Some(ScenarioId::Salary));

        let out = run_args(&["gamewise", "show", "--scenario", "salary"]);
        assert!(out.contains("[Real Scenarios]"));
        assert!(out.contains(
            "You got a job offer! Should you negotiate the salary or accept what's offered?"
        ));
    }

    #[test]
    fn explicit_section_wins_over_scenario() {
        let state = build_state(Some(Section::Principles), Some(ScenarioId::College));
        assert_eq!(state.active_section(), Section::Principles);
        assert_eq!(state.selected_scenario(), Some(ScenarioId::College));
        assert!(render(&state).detail().is_none());
    }

    #[test]
    fn list_prints_every_scenario_in_order() {
        let out = run_args(&["gamewise", "list"]);
        let keys: Vec<&str> = out
            .lines()
            .filter_map(|l| l.split_whitespace().next())
            .collect();
        assert_eq!(keys, ["college", "internship", "salary", "teamwork", "networking"]);
    }

    #[test]
    fn markdown_and_html_formats() {
        let md = run_args(&["gamewise", "show", "--scenario", "teamwork", "--format", "md"]);
        assert!(md.contains("### Game Theory Insight"));
        assert!(md.contains("free rider problem"));

        let html = run_args(&["gamewise", "principles", "--format", "html"]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h3>Information is Power</h3>"));
    }

    #[test]
    fn unknown_keys_are_usage_errors() {
        let err = Cli::try_parse_from(["gamewise", "show", "--scenario", "poker"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);

        let err = Cli::try_parse_from(["gamewise", "show", "--section", "stats"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn verbosity_is_counted() {
        let cli = Cli::try_parse_from(["gamewise", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
