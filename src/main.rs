//! Zotero collection manager CLI.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zotman::{commands, ZoteroClient, ZoteroConfig};

#[derive(Parser)]
#[command(name = "zotman", version, about = "Zotero collection manager")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the collection tree
    Tree {
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Output as Markdown
        #[arg(long)]
        markdown: bool,
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List items in a collection
    List {
        /// Collection name
        collection: String,
    },
    /// Create a new collection
    Create {
        /// Collection name
        name: String,
        /// Parent collection name
        #[arg(long)]
        parent: Option<String>,
    },
    /// Organize a collection's items by year
    Organize {
        /// Collection name
        collection: String,
    },
    /// Test the Zotero connection
    Test,
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

    let result = match cli.command {
        Commands::Tree {
            json,
            markdown,
            output,
        } => commands::tree::run(&client, json, markdown, output).await,
        Commands::List { collection } => commands::list::run(&client, &collection).await,
        Commands::Create { name, parent } => {
            commands::create::run(&client, &name, parent.as_deref()).await
        }
        Commands::Organize { collection } => {
            commands::organize::run(&client, &collection).await
        }
        Commands::Test => commands::test::run(&client).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }
}
