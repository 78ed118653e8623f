//! Runtime configuration shared by the binaries: command-line/environment
//! settings, database connection and logging setup.

use clap::Args;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::Result;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://mealcart.db";

#[derive(Debug, Clone, Args)]
pub struct DatabaseArgs {
    /// SQLite database URL
    #[arg(long, env = "MEALCART_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum number of pooled connections
    #[arg(long, default_value_t = 5)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Open the database, creating it if missing, and apply migrations
    pub async fn connect(&self) -> Result<SqlitePool> {
        if !sqlx::Sqlite::database_exists(&self.database_url).await? {
            info!(url = %self.database_url, "creating database");
            sqlx::Sqlite::create_database(&self.database_url).await?;
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .connect(&self.database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        info!(url = %self.database_url, "database ready");

        Ok(pool)
    }
}

/// Install the global stderr subscriber
///
/// `RUST_LOG` wins over `default_directive` when set.
pub fn init_logging(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
