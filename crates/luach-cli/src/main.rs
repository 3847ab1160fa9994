//! `luach` CLI: render one month of the dual Gregorian/Hebrew calendar as HTML.
//!
//! ## Usage
//!
//! ```sh
//! # Current month, Tel Aviv, Hebrew labels
//! luach
//!
//! # A specific month in English, with events
//! luach --year 2024 --month 10 --locale en --events events.json
//!
//! # Another location, wrapped in a page shell containing "{body}"
//! luach --config jerusalem.toml --template base.html -o calendar.html
//! ```

mod config;
mod events_file;
mod logging;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate, Utc};
use clap::Parser;
use luach::{render_month, CalendarConfig, Locale};
use tracing::info;

use crate::config::ConfigFile;

/// Placeholder replaced by the fragment in `--template` files.
const BODY_PLACEHOLDER: &str = "{body}";

#[derive(Parser)]
#[command(
    name = "luach",
    version,
    about = "Render a dual Gregorian/Hebrew calendar month as an HTML fragment"
)]
struct Cli {
    /// Gregorian year (defaults to the current year)
    #[arg(long)]
    year: Option<i32>,

    /// Gregorian month, 1-12 (defaults to the current month)
    #[arg(long)]
    month: Option<u32>,

    /// Date to mark as today, YYYY-MM-DD (defaults to the current date)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// JSON file with the events to place on the grid
    #[arg(short, long)]
    events: Option<PathBuf>,

    /// TOML file with location, timezone, offsets and locale
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Label language: "he" or "en" (overrides the config file)
    #[arg(long)]
    locale: Option<Locale>,

    /// Use the Land of Israel holiday schedule
    #[arg(long)]
    israel: bool,

    /// Page template; its "{body}" placeholder receives the fragment
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => ConfigFile::load(path)?.into_config()?,
        None => CalendarConfig::default(),
    };
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    if cli.israel {
        config.israel = true;
    }

    let today = cli
        .today
        .unwrap_or_else(|| Utc::now().with_timezone(&config.timezone).date_naive());
    let year = cli.year.unwrap_or(today.year());
    let month = cli.month.unwrap_or(today.month());

    let events = match &cli.events {
        Some(path) => events_file::load(path, &config)?,
        None => Vec::new(),
    };

    info!(
        year,
        month,
        events = events.len(),
        location = %config.location.name,
        "rendering month"
    );

    let fragment = render_month(&config, year, month, today, events)
        .with_context(|| format!("Failed to render {:04}-{:02}", year, month))?;

    let content = match &cli.template {
        Some(path) => wrap_in_template(path, &fragment)?,
        None => fragment,
    };

    write_output(cli.output.as_deref(), &content)
}

fn wrap_in_template(path: &Path, fragment: &str) -> Result<String> {
    let template = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read template: {}", path.display()))?;
    if !template.contains(BODY_PLACEHOLDER) {
        bail!(
            "Template {} has no {} placeholder",
            path.display(),
            BODY_PLACEHOLDER
        );
    }
    Ok(template.replace(BODY_PLACEHOLDER, fragment))
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
