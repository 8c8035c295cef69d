//! Writes a QR code for the join form's endpoint to an SVG file.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "generate-qr",
    about = "Render the join URL from config.toml as a QR code",
    version
)]
struct Cli {
    /// Where to write the SVG.
    #[arg(short, long, default_value = "crates/app/assets/qrcode.svg")]
    output: PathBuf,

    /// Encode this URL instead of `join.action` from config.toml.
    #[arg(long)]
    url: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let url = match cli.url {
        Some(url) => url,
        None => client::config::load_config().join.action.clone(),
    };

    let svg = client::qr::join_qr_svg(&url)?;
    std::fs::write(&cli.output, svg)?;
    tracing::info!(url = %url, output = %cli.output.display(), "QR code written");

    Ok(())
}
