//! # Trackwise Admin
//!
//! Administrative actions on the datastore. The API server never creates or
//! changes the schema itself.
//!
//! ```bash
//! trackwise-admin create-tables
//! trackwise-admin status
//! trackwise-admin drop-database --yes
//! ```

use clap::{Parser, Subcommand};
use trackwise_api::{config::Config, telemetry};
use trackwise_shared::db::{migrations, pool};

#[derive(Debug, Parser)]
#[command(name = "trackwise-admin", version, about = "Trackwise datastore administration")]
struct Cli {
    /// Database URL (overrides DATABASE_URL)
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the database if needed and apply all migrations
    CreateTables,

    /// Show applied migrations
    Status,

    /// Delete the database and all of its data
    DropDatabase {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;
    telemetry::init_tracing();

    let url = cli.database_url.unwrap_or_else(|| config.database.url.clone());
    let pool_config = pool::DatabaseConfig {
        url: url.clone(),
        max_connections: 1,
        ..config.pool_config()
    };

    match cli.command {
        Command::CreateTables => {
            migrations::ensure_database_exists(&url).await?;
            let db = pool::create_pool(pool_config).await?;
            migrations::run_migrations(&db).await?;
            pool::close_pool(db).await;
            println!("Database tables created.");
        }
        Command::Status => {
            let db = pool::create_pool(pool_config).await?;
            let status = migrations::get_migration_status(&db).await?;
            pool::close_pool(db).await;

            println!("Database:           {}", url);
            println!("Applied migrations: {}", status.applied_migrations);
            match status.latest_version {
                Some(version) => println!("Latest version:     {}", version),
                None => println!("Latest version:     none"),
            }
            println!("Up to date:         {}", status.is_up_to_date);
        }
        Command::DropDatabase { yes } => {
            if !yes {
                anyhow::bail!("Refusing to drop {} without --yes", url);
            }
            migrations::drop_database(&url).await?;
            println!("Database dropped.");
        }
    }

    Ok(())
}
