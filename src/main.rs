//! Contactbook CLI - serve the contact API and inspect its database

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use contactbook::config::{self, ContactbookConfig};
use contactbook::storage::ContactStore;
use contactbook::ui::{self, Icons};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "contactbook")]
#[command(version)]
#[command(about = "Contact book backend - JSON CRUD API over SQLite")]
#[command(long_about = r#"
Contactbook serves a small JSON API for managing contacts:
  GET    /api/contacts         list contacts
  POST   /api/contacts         create a contact
  PUT    /api/contacts/{id}    update a contact
  DELETE /api/contacts/{id}    delete a contact

Example usage:
  contactbook init
  contactbook serve --port 5000
  contactbook list
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Path to the config file (defaults to contactbook.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Origin allowed to make cross-origin requests
        #[arg(short, long)]
        origin: Option<String>,
    },

    /// Write a config file with the default settings
    Init {
        /// Where to write the config file
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Print every stored contact
    List {
        /// Path to the config file (defaults to contactbook.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    if let Err(e) = run(cli.command) {
        ui::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Serve { config, database, host, port, origin } => {
            let file = config::load_config(config.as_deref())?.unwrap_or_default();
            let flags = ContactbookConfig {
                database: database.map(|p| p.to_string_lossy().to_string()),
                host,
                port,
                allowed_origin: origin,
            };
            let settings = file.resolve(&flags);

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(contactbook::server::start_server(&settings))?;
        }

        Commands::Init { path, force } => {
            let path = path.unwrap_or_else(config::default_config_path);
            config::write_config(&path, &ContactbookConfig::with_defaults(), force)?;
            ui::success(&format!("Wrote config to {}", path.display()));
        }

        Commands::List { config, database } => {
            let file = config::load_config(config.as_deref())?.unwrap_or_default();
            let flags = ContactbookConfig {
                database: database.map(|p| p.to_string_lossy().to_string()),
                ..Default::default()
            };
            let settings = file.resolve(&flags);

            if !settings.database.exists() {
                ui::warn(&format!("No database at {}", settings.database.display()));
                return Ok(());
            }

            let store = ContactStore::open(&settings.database)?;
            let contacts = store.list_all()?;

            ui::info(
                &format!("{} Database", Icons::DATABASE),
                &settings.database.display().to_string(),
            );
            ui::info(&format!("{} Contacts", Icons::PERSON), &contacts.len().to_string());

            if !contacts.is_empty() {
                println!("{}", ui::contacts_table(&contacts));
            }
        }
    }

    Ok(())
}
