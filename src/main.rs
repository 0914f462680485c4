use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use hub_trade_scanner::app;
use hub_trade_scanner::config::ScanConfig;
use hub_trade_scanner::util::version::{version_label, APP_NAME};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML config file. Defaults to the per-user config when present.
    #[arg(long, env("HUB_SCANNER_CONFIG"))]
    config: Option<PathBuf>,
    /// Directory holding the catalog and order files.
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Result CSV path, relative to the data directory unless absolute.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Number of opportunities printed to the console.
    #[arg(long)]
    top: Option<usize>,
    /// Print opportunities without colour bands.
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn apply(&self, config: &mut ScanConfig) {
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(output) = &self.output {
            config.output_file = output.clone();
        }
        if let Some(top) = self.top {
            config.top_n = top;
        }
        if self.no_color {
            config.color = false;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let (mut config, source) =
        ScanConfig::discover(cli.config.as_deref()).context("failed to load configuration")?;
    cli.apply(&mut config);
    config.validate()?;

    info!(
        app = APP_NAME,
        version = %version_label(),
        config = ?source,
        data_dir = %config.data_dir.display(),
        "starting scan"
    );

    let stdout = io::stdout();
    app::run(&config, &mut stdout.lock()).context("scan aborted")?;
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hub_trade_scanner=info"));

    if std::env::var("HUB_SCANNER_LOG_JSON").is_ok() {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(io::stderr)
            .with_target(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_writer(io::stderr)
            .with_target(true)
            .init();
    }
}
