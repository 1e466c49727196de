use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use report_gen::{analyzer, report};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generate a maintainability report record for one package version
#[derive(Debug, Parser)]
#[command(name = "report-gen")]
struct Cli {
    /// Package version (e.g., 1.2.3)
    #[arg(long)]
    version: String,

    /// Replace existing version entry instead of appending
    #[arg(long)]
    replace: bool,

    /// Directory handed to the analyzer
    #[arg(long, default_value = "src")]
    source_dir: String,

    /// Report file to maintain
    #[arg(long, default_value = "reports/maintainability.json")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let data = analyzer::run_analyzer(&cli.source_dir).await?;

    let mut reports = report::load_reports(&cli.output);
    report::append_or_replace(
        &mut reports,
        report::Report {
            version: cli.version.clone(),
            timestamp: Utc::now(),
            data,
        },
        cli.replace,
    );
    report::save_reports(&cli.output, &reports)?;

    info!(
        version = %cli.version,
        mode = if cli.replace { "replaced" } else { "appended" },
        report_file = %cli.output.display(),
        "✅ Report saved"
    );

    Ok(())
}
