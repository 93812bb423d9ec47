use clap::Parser;
use tracing_subscriber::EnvFilter;

use truth_sifter::cli::{self, Cli};
use truth_sifter::config::{Config, LogFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_tracing(config.output.log_format);

    cli::run(cli, config).await
}

/// Logs go to stderr so stdout carries only reports.
fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("truth_sifter=warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}
