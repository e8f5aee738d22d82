use anyhow::Result;
use sqlx::{mysql::MySqlPoolOptions, MySql, Pool};
use std::time::Duration;
use tracing::info;

use crate::config::Config;

pub mod repository;

pub type DatabasePool = Pool<MySql>;

/// Connect to MySQL and verify the connection.
///
/// Every pooled connection is switched to UTF-8 before it serves a query, so
/// accented student names survive the round trip to the recognition client.
pub async fn setup_database(config: &Config) -> Result<DatabasePool> {
    info!("Connecting to database");

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                sqlx::query("SET NAMES 'utf8'").execute(&mut *conn).await?;
                Ok(())
            })
        })
        .connect(&config.database_url)
        .await?;

    // Test the connection
    sqlx::query("SELECT 1").execute(&pool).await?;

    info!("Database connection established");
    Ok(pool)
}
