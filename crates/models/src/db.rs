use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::errors::ModelError;

/// Open a pooled connection using the externally supplied configuration.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, ModelError> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(cfg.connect_timeout())
        .acquire_timeout(cfg.acquire_timeout())
        .sqlx_logging(cfg.sqlx_logging);
    if let Some(idle) = cfg.idle_timeout() {
        opt.idle_timeout(idle);
    }
    if let Some(lifetime) = cfg.max_lifetime() {
        opt.max_lifetime(lifetime);
    }
    let db = Database::connect(opt).await?;
    info!(max_connections = cfg.max_connections, min_connections = cfg.min_connections, "database connected");
    Ok(db)
}
