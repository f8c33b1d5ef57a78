// src/main.rs

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use hclreport::report::image_data_uri;
use hclreport::{ReportConfig, build_dataset, render_report};

#[derive(Parser)]
#[command(name = "hclreport")]
#[command(author, version, about = "Hardware compatibility snapshot reports for upgrade planning", long_about = None)]
struct Cli {
    /// Base directory: inventory search root and default output location
    #[arg(long, default_value = ".")]
    base_dir: PathBuf,

    /// Explicit HCL export (skips Systems*.csv discovery)
    #[arg(long)]
    hcl: Option<PathBuf>,

    /// Directory scanned for a Systems*.csv export (default: base dir)
    #[arg(long)]
    hcl_dir: Option<PathBuf>,

    /// Explicit host inventory CSV (skips discovery)
    #[arg(long)]
    inventory: Option<PathBuf>,

    /// Release marker that classifies an entry as OK
    #[arg(long, default_value = hclreport::DEFAULT_TARGET_MARKER)]
    target: String,

    /// Banner image embedded at the top of the report
    #[arg(long)]
    banner: Option<PathBuf>,

    /// Output HTML path (default: dated file under the base dir)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the reconciled dataset as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Attribution line for the report footer
    #[arg(long)]
    generated_by: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ReportConfig {
        base_dir: cli.base_dir,
        hcl_path: cli.hcl,
        hcl_dir: cli.hcl_dir,
        inventory_path: cli.inventory,
        target_marker: cli.target,
        banner_path: cli.banner,
        output_path: cli.output,
        json_path: cli.json,
        generated_by: cli.generated_by,
    };

    let dataset = build_dataset(&config)?;

    if let Some(json_path) = &config.json_path {
        let json = serde_json::to_string_pretty(&dataset)?;
        std::fs::write(json_path, json)
            .with_context(|| format!("writing JSON export to {}", json_path.display()))?;
        info!(file = %json_path.display(), "dataset exported");
    }

    let banner = config.banner_path.as_deref().and_then(image_data_uri);
    let html = render_report(&dataset, banner.as_deref(), config.generated_by.as_deref());

    let output = config.output_path();
    std::fs::write(&output, html)
        .with_context(|| format!("writing report to {}", output.display()))?;
    info!(file = %output.display(), "report written");
    println!("Report written to:\n  {}", output.display());

    Ok(())
}
