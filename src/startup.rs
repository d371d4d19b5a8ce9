//! Process startup: environment, logging, database, and catalog wiring.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{
    catalog::CatalogStore, config::Config, error::Error, service::catalog::CatalogSyncService,
};

/// Loads `.env` and initializes the tracing subscriber.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init() {
    dotenvy::dotenv().ok();

    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Connects to the database and runs pending migrations.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Opens the catalog directory and syncs its character records into the
/// template table, returning the store for the services that read it at
/// runtime.
pub async fn load_catalog(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<CatalogStore, Error> {
    let catalog = CatalogStore::new(&config.catalog_path);

    CatalogSyncService::new(db, &catalog)
        .sync_templates()
        .await?;

    Ok(catalog)
}
