//! Zotero library exporter CLI.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zotman::commands::export::{self, ExportFormat};
use zotman::{ZoteroClient, ZoteroConfig};

#[derive(Parser)]
#[command(name = "zotman-export", version, about = "Zotero library exporter")]
struct Cli {
    /// Export format
    #[arg(value_enum)]
    format: ExportFormat,

    /// Collection name (exports top-level items if not specified)
    #[arg(short, long)]
    collection: Option<String>,

    /// Output file path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let client = match ZoteroConfig::from_env().and_then(|config| ZoteroClient::new(&config)) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    if let Err(e) = export::run(
        &client,
        cli.format,
        cli.collection.as_deref(),
        cli.output,
    )
    .await
    {
        eprintln!("Error: {}", e);
    }
}
