#![cfg(test)]
use configs::DatabaseConfig;
use models::PizzaContext;

use crate::pizza::{repository::SeaOrmPizzaRepository, service::PizzaService};

/// Fresh, empty in-memory database with the schema created.
pub async fn memory_context() -> Result<PizzaContext, anyhow::Error> {
    let ctx = PizzaContext::connect(&DatabaseConfig::in_memory()).await?;
    ctx.ensure_created().await?;
    Ok(ctx)
}

/// Service over a fresh in-memory database, plus the context for direct checks.
pub async fn memory_service() -> Result<(PizzaService<SeaOrmPizzaRepository>, PizzaContext), anyhow::Error> {
    let ctx = memory_context().await?;
    Ok((PizzaService::from_context(ctx.clone()), ctx))
}

/// SQLite file under the temp dir, removed on drop.
pub struct TempDb {
    pub path: std::path::PathBuf,
}

impl TempDb {
    pub fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("pizza-{}-{}.db", name, std::process::id()));
        let db = Self { path };
        db.remove_files();
        db
    }

    /// Default pool settings against this file.
    pub fn config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: format!("sqlite://{}?mode=rwc", self.path.display()),
            ..DatabaseConfig::default()
        }
    }

    fn remove_files(&self) {
        for suffix in ["", "-journal", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{}", self.path.display(), suffix));
        }
    }
}

impl Drop for TempDb {
    fn drop(&mut self) { self.remove_files(); }
}

/// Service over a file-backed database with the default pool size.
pub async fn file_service(db: &TempDb) -> Result<(PizzaService<SeaOrmPizzaRepository>, PizzaContext), anyhow::Error> {
    let ctx = PizzaContext::connect(&db.config()).await?;
    ctx.ensure_created().await?;
    Ok((PizzaService::from_context(ctx.clone()), ctx))
}
