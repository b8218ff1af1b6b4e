use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use unit_converter::{ConverterConfig, logging, web};

/// Web form for converting values between units of length, weight and temperature
#[derive(Debug, Parser)]
#[command(name = "unit-converter", version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on, overrides the configuration
    #[arg(short, long)]
    port: Option<u16>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Layer command line flags over the loaded configuration
    fn apply(&self, config: &mut ConverterConfig) -> Result<()> {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if self.verbose {
            config.logging.level = "debug".to_string();
        }
        config.validate()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ConverterConfig::load_from_path(cli.config.clone())?;
    cli.apply(&mut config)?;

    logging::init(&config.logging)?;
    tracing::debug!(?config, "Loaded configuration");

    web::run(&config.server).await
}
