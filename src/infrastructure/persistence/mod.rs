//! Storage backend implementations of the domain repository traits.
//!
//! # Repositories
//!
//! - [`PgCustomerRepository`] - PostgreSQL storage; predicates are rendered
//!   into parameterized SQL and evaluated by the database
//! - [`InMemoryCustomerRepository`] - self-contained in-process store used
//!   for hermetic tests and database-free development

use anyhow::Result;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use crate::config::Config;

pub mod memory_customer_repository;
pub mod pg_customer_repository;
mod sql;

pub use memory_customer_repository::InMemoryCustomerRepository;
pub use pg_customer_repository::PgCustomerRepository;

/// Builds a PostgreSQL connection pool from the configuration and applies
/// pending migrations.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the database is
/// unreachable, or a migration fails.
pub async fn connect(config: &Config) -> Result<PgPool> {
    config.validate()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
