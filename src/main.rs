//! Atlas Analytics CLI
//!
//! Runs the mock analytics pipeline over the built-in property catalog
//! and prints per-property metrics (table) or full histories (JSON).
//!
//! # Configuration
//!
//! Environment variables:
//! - `ATLAS_TOKENS_PER_PROPERTY`: Token supply per property (default: 1000)
//! - `ATLAS_WINDOW_DAYS`: History window in days (default: 90)
//! - `ATLAS_LOG_LEVEL`: Log level (default: info)
//! - `ATLAS_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Overrides the log filter entirely

use atlas_analytics::analytics::ValueHistoryBuilder;
use atlas_analytics::catalog::demo_catalog;
use atlas_analytics::config::{generate_default_config, Config};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "atlas-analytics")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Mock token value analytics for the Atlas demo")]
struct Cli {
    /// Config file path (default: standard locations, then environment)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the history window in days
    #[arg(long)]
    days: Option<u32>,

    /// Only output the property with this id
    #[arg(long)]
    property: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    format: String,

    /// Print a default config file and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.init_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(days) = cli.days {
        config.model.window_days = days;
    }

    init_tracing(&config);

    tracing::info!("Atlas Analytics v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        tokens_per_property = config.model.tokens_per_property,
        window_days = config.model.window_days,
        "Model configuration"
    );

    let mut catalog = demo_catalog();
    if let Some(id) = &cli.property {
        catalog.retain(|p| &p.id == id);
        if catalog.is_empty() {
            anyhow::bail!("No property with id '{}' in the catalog", id);
        }
    }

    let builder = ValueHistoryBuilder::new(config.model.clone());
    let histories = builder.build_all(&catalog)?;

    match cli.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&histories)?),
        "table" => print_table(&histories),
        other => anyhow::bail!("Unknown output format '{}' (expected table or json)", other),
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("atlas_analytics={}", config.logging.level))
    });

    // Logs go to stderr; stdout is reserved for command output.
    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_table(histories: &[atlas_analytics::PropertyValueHistory]) {
    println!(
        "{:<10} {:<24} {:>8} {:>6} {:>9} {:>8} {:>8} {:>9} {:>9}",
        "ID", "PROPERTY", "VOL%", "CORR", "AVGPREM%", "P/NAV", "SHARPE", "PROP.APP%", "TOK.APP%"
    );
    for history in histories {
        let m = &history.metrics;
        println!(
            "{:<10} {:<24} {:>8.2} {:>6.2} {:>9.2} {:>8.2} {:>8.2} {:>9.2} {:>9.2}",
            history.property_id,
            truncate(&history.property_name, 24),
            m.volatility,
            m.value_correlation,
            m.average_premium,
            m.price_to_nav,
            m.sharpe_ratio,
            m.property_appreciation,
            m.token_appreciation
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max - 1).collect();
        format!("{}~", cut)
    }
}
