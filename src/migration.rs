//! Database migrations using refinery
//!
//! Versioned schema for the price history and wallet tables, applied on
//! startup and tracked in `refinery_schema_history`.

use refinery::{embed_migrations, Target};
use tokio_postgres::{Client, NoTls};

use crate::error::Error;

embed_migrations!("migrations");

/// Apply all pending migrations in version order.
pub async fn run_migrations(database_url: &str) -> Result<(), Error> {
    tracing::info!("Running database migrations...");

    let mut client = connect(database_url).await?;
    let report = migrations::runner().run_async(&mut client).await?;

    let applied = report.applied_migrations();
    if applied.is_empty() {
        tracing::info!("No new migrations to apply");
    } else {
        for migration in applied {
            tracing::info!(
                "Applied migration: V{:03}__{} (checksum: {})",
                migration.version(),
                migration.name(),
                migration.checksum()
            );
        }
        tracing::info!("Successfully applied {} migration(s)", applied.len());
    }

    Ok(())
}

/// Record migrations as applied without executing them, for databases whose
/// tables were created by hand.
///
/// - `up_to_version: None` - fake all migrations
/// - `up_to_version: Some(N)` - fake only up to version N
pub async fn run_migrations_fake(
    database_url: &str,
    up_to_version: Option<u32>,
) -> Result<(), Error> {
    let mut client = connect(database_url).await?;

    let target = match up_to_version {
        None => Target::Fake,
        Some(v) => Target::FakeVersion(v),
    };

    let report = migrations::runner()
        .set_target(target)
        .run_async(&mut client)
        .await?;

    let applied = report.applied_migrations();
    if applied.is_empty() {
        tracing::info!("No migrations to mark as applied");
    } else {
        for migration in applied {
            tracing::info!(
                "Marked as applied: V{:03}__{}",
                migration.version(),
                migration.name()
            );
        }
        tracing::info!("Marked {} migration(s) as applied", applied.len());
    }

    Ok(())
}

async fn connect(database_url: &str) -> Result<Client, Error> {
    let config: tokio_postgres::Config = database_url.parse().map_err(|e| {
        Error::ConfigurationError(format!("Invalid database URL: {}", e))
    })?;

    let (client, connection) = config.connect(NoTls).await.map_err(|e| {
        Error::ConfigurationError(format!(
            "Failed to connect for migrations: {}",
            e
        ))
    })?;

    tokio::spawn(async move {
        if let Err(e) = connection.await {
            tracing::error!("Migration connection error: {}", e);
        }
    });

    Ok(client)
}
