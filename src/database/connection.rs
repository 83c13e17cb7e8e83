use crate::config::DatabaseConfig;
use crate::error::AppResult;
use log::info;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;

pub async fn create_pool(config: &DatabaseConfig) -> AppResult<DatabaseConnection> {
    let mut opts = ConnectOptions::new(config.url.clone());
    opts.max_connections(config.max_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let db = Database::connect(opts).await?;
    info!("Database connection established");
    Ok(db)
}

pub async fn run_migrations(db: &DatabaseConnection) -> AppResult<()> {
    Migrator::up(db, None).await?;
    info!("Database migrations applied");
    Ok(())
}
