use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::info;

use rent_core::Locale;
use rent_data::{PolicyTable, PolicyTableLoader, bundled_table};
use rent_ui::i18n::Catalog;
use rent_ui::{EstimatorApp, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Rent-increase estimator.
///
/// Opens the estimator window with the bundled policy tables, or with a
/// user-supplied coefficient table.
#[derive(Debug, Parser)]
struct Cli {
    /// Interface language (en or fr).
    #[arg(long, default_value = "en")]
    lang: String,

    /// Policy year active at startup.
    /// Defaults to the most recent year in the table.
    #[arg(long)]
    year: Option<i32>,

    /// Path to a policy table CSV replacing the bundled rule sets.
    #[arg(long)]
    policy_file: Option<PathBuf>,

    /// Append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let locale = Locale::parse(&cli.lang)
        .with_context(|| format!("unsupported language '{}' (expected en or fr)", cli.lang))?;

    let table = match &cli.policy_file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open policy file: {}", path.display()))?;
            let records = PolicyTableLoader::parse(file)
                .with_context(|| format!("failed to parse policy file: {}", path.display()))?;
            PolicyTable::from_records(records)
                .with_context(|| format!("policy file is invalid: {}", path.display()))?
        }
        None => bundled_table().context("bundled policy table is invalid")?,
    };

    let year = match cli.year {
        Some(year) => {
            if table.get(year).is_none() {
                let known: Vec<i32> = table.years().collect();
                bail!("policy year {year} is not defined (known years: {known:?})");
            }
            year
        }
        None => table
            .latest()
            .map(|config| config.policy_year)
            .context("policy table is empty")?,
    };

    info!(year, lang = locale.as_str(), "starting estimator");

    let title = Catalog::for_locale(locale).app_title;
    let app = EstimatorApp::new(locale, table, year);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([840.0, 920.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(title, options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("failed to start UI: {e}"))
}
