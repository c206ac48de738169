//! WigHub CLI - store seeding and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Load the sample wig catalog
//! wighub seed
//!
//! # Create admin user (password from WIGHUB_ADMIN_PASSWORD)
//! WIGHUB_ADMIN_PASSWORD=... wighub admin create -e admin@example.com -n "Admin Name" -r super_admin
//!
//! # Print dashboard figures
//! wighub stats
//! wighub stats --json
//! ```
//!
//! # Commands
//!
//! - `seed` - Bulk-load the sample catalog
//! - `admin create` - Create admin users
//! - `stats` - Dashboard aggregates

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wighub_admin::AdminConfig;

mod commands;

use commands::CommandError;

#[derive(Parser)]
#[command(name = "wighub")]
#[command(author, version, about = "WigHub store tools")]
struct Cli {
    /// Data directory (overrides `WIGHUB_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bulk-load the sample wig catalog
    Seed,
    /// Manage admin users
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Print dashboard figures
    Stats {
        /// Print as JSON instead of log lines
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new admin user
    Create {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin display name
        #[arg(short, long)]
        name: String,

        /// Admin role (`super_admin`, `admin`, `viewer`)
        #[arg(short, long, default_value = "admin")]
        role: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CommandError> {
    let mut config = AdminConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    let store = commands::open_store(&config)?;

    match cli.command {
        Commands::Seed => {
            commands::seed::sample_catalog(&store)?;
        }
        Commands::Admin { action } => match action {
            AdminAction::Create { email, name, role } => {
                let password = commands::admin::password_from_env()?;
                commands::admin::create_user(&store, &email, &name, &role, &password)?;
            }
        },
        Commands::Stats { json } => {
            let stats = commands::stats::collect(&store, &config);
            if json {
                commands::stats::write_json(&stats, &mut std::io::stdout().lock())?;
            } else {
                commands::stats::log(&stats, &config);
            }
        }
    }
    Ok(())
}
