//! FundLens CLI: startup funding analytics over a CSV dataset.
//!
//! Commands:
//! - `overview`: totals, max/average funding, startup count, MoM series
//! - `startup <NAME>`: drill-down for one startup
//! - `investor <NAME>`: drill-down for one investor
//! - `list startups|investors`: sorted entity names
//! - `export-trend`: write the MoM series as CSV
//! - `export-sectors startups|investors <NAME>`: write a sector breakdown as CSV

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use fundlens_core::aggregate::Share;
use fundlens_core::{load_csv_path, DataSet, TrendMode};
use fundlens_report::{
    export_json, export_shares_csv, export_trend_csv, write_file, Dashboard, EntityKind,
    MarkdownReportGenerator, Panel, ReportConfig,
};

#[derive(Parser)]
#[command(
    name = "fundlens",
    about = "FundLens CLI: startup funding analytics"
)]
struct Cli {
    /// Funding CSV. Overrides `data_path` from the config file.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Path to a TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format for views.
    #[arg(long, global = true, value_enum, default_value_t = Format::Markdown)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Markdown,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum ListKind {
    Startups,
    Investors,
}

impl From<ListKind> for EntityKind {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::Startups => EntityKind::Startups,
            ListKind::Investors => EntityKind::Investors,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Overall market summary with the month-over-month series.
    Overview {
        /// total or count. Defaults to the config's trend_mode.
        #[arg(long)]
        mode: Option<TrendMode>,
    },
    /// Drill-down for one startup (exact name).
    Startup { name: String },
    /// Drill-down for one investor (substring of the investor list).
    Investor { name: String },
    /// List distinct startup or investor names.
    List {
        #[arg(value_enum)]
        kind: ListKind,
    },
    /// Write the month-over-month series as CSV.
    ExportTrend {
        /// total or count. Defaults to the config's trend_mode.
        #[arg(long)]
        mode: Option<TrendMode>,

        /// Destination CSV file.
        #[arg(long)]
        out: PathBuf,
    },
    /// Write one startup's or investor's sector breakdown as CSV.
    ExportSectors {
        #[arg(value_enum)]
        kind: ListKind,

        /// Startup (exact) or investor (substring) name.
        name: String,

        /// Destination CSV file.
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let data_path = match cli.data.as_ref().or(config.data_path.as_ref()) {
        Some(path) => path.clone(),
        None => bail!("no funding CSV given: pass --data or set data_path in the config"),
    };
    let data = load_data(&data_path)?;
    let dashboard = Dashboard::new(&data, &config);
    let markdown = MarkdownReportGenerator::new(config.currency_label.clone());

    match cli.command {
        Commands::Overview { mode } => {
            let view = dashboard.overview(mode.unwrap_or(config.trend_mode));
            emit(cli.format, &data, &view, || markdown.overview(&view))
        }
        Commands::Startup { name } => {
            let view = dashboard.startup(&name);
            emit(cli.format, &data, &view, || markdown.startup(&view))
        }
        Commands::Investor { name } => {
            let view = dashboard.investor(&name);
            emit(cli.format, &data, &view, || markdown.investor(&view))
        }
        Commands::List { kind } => {
            let list = dashboard.entities(kind.into());
            emit(cli.format, &data, &list, || markdown.entities(&list))
        }
        Commands::ExportTrend { mode, out } => {
            let view = dashboard.overview(mode.unwrap_or(config.trend_mode));
            let csv = export_trend_csv(exported_rows("monthly trend", &view.trend))?;
            write_file(&out, &csv)?;
            println!("Trend exported to: {}", out.display());
            Ok(())
        }
        Commands::ExportSectors { kind, name, out } => {
            let sectors = sector_panel(&dashboard, kind, &name);
            let csv = export_shares_csv(exported_rows("sector breakdown", &sectors))?;
            write_file(&out, &csv)?;
            println!("Sectors for {name} exported to: {}", out.display());
            Ok(())
        }
    }
}

fn init_logging() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<ReportConfig> {
    match path {
        Some(path) => ReportConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(ReportConfig::default()),
    }
}

fn load_data(path: &Path) -> Result<DataSet> {
    let loaded = load_csv_path(path)
        .with_context(|| format!("failed to load funding data from {}", path.display()))?;
    let report = &loaded.report;
    if report.null_dates > 0 || report.null_amounts > 0 {
        info!(
            null_dates = report.null_dates,
            null_amounts = report.null_amounts,
            "some fields could not be parsed and were left empty"
        );
    }
    Ok(loaded.dataset)
}

fn emit<V, F>(format: Format, data: &DataSet, view: &V, markdown: F) -> Result<()>
where
    V: serde::Serialize,
    F: FnOnce() -> String,
{
    match format {
        Format::Markdown => print!("{}", markdown()),
        Format::Json => println!("{}", export_json(data, view)?),
    }
    Ok(())
}

/// The sector breakdown of one entity. A name that matches nothing
/// carries the not-found reason through.
fn sector_panel(dashboard: &Dashboard<'_>, kind: ListKind, name: &str) -> Panel<Vec<Share>> {
    match kind {
        ListKind::Startups => dashboard.startup(name).body.and_then(|p| p.sector_breakdown),
        ListKind::Investors => dashboard.investor(name).body.and_then(|p| p.sector_breakdown),
    }
}

/// Rows to export from a panel. Empty and failed panels export no rows, so
/// the file still gets its header.
fn exported_rows<'a, T>(what: &str, panel: &'a Panel<Vec<T>>) -> &'a [T] {
    match panel {
        Panel::Ready(rows) => rows.as_slice(),
        Panel::Empty(reason) => {
            warn!(reason = reason.message(), "{what} is empty; writing header only");
            &[]
        }
        Panel::Failed { message } => {
            warn!(%message, "{what} unavailable; writing header only");
            &[]
        }
    }
}
