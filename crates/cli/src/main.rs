//! Santalena CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! santalena migrate
//!
//! # Seed the database with starter content
//! santalena seed
//!
//! # Create (or replace) an admin account
//! santalena admin create -u admin -p 'a strong password'
//!
//! # Rotate an admin password
//! santalena admin set-password -u admin -p 'a new password'
//! ```
//!
//! All commands read `SANTALENA_DATABASE_URL` (or `DATABASE_URL`) from the
//! environment, with `.env` support.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "santalena")]
#[command(author, version, about = "Santalena site CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations (schema and session store)
    Migrate,
    /// Seed the database with starter services
    Seed,
    /// Manage the admin account
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create an admin account (replaces the password if it exists)
    Create {
        /// Admin username
        #[arg(short, long)]
        username: String,

        /// Admin password
        #[arg(short, long)]
        password: String,
    },
    /// Set a new password for an existing admin account
    SetPassword {
        /// Admin username
        #[arg(short, long)]
        username: String,

        /// New password
        #[arg(short, long)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed => commands::seed::run().await?,
        Commands::Admin { action } => match action {
            AdminAction::Create { username, password } => {
                commands::admin::create(&username, &password).await?;
            }
            AdminAction::SetPassword { username, password } => {
                commands::admin::set_password(&username, &password).await?;
            }
        },
    }
    Ok(())
}
