//! Persistence context over the pizza database.
//!
//! Owns the connection pool and exposes one typed query view per table.
//! Reads go through [`PizzaContext::begin`], writes through
//! [`PizzaContext::begin_write`]. A transaction that is dropped without
//! `commit` is rolled back.
//!
//! SQLite has a single writer. Two deferred transactions that both read and
//! then try to write fail with `database is locked` instead of waiting, so
//! write transactions queue on a lock shared by every clone of the context.
use std::sync::Arc;

use configs::DatabaseConfig;
use sea_orm::{DatabaseConnection, DatabaseTransaction, EntityTrait, Select, TransactionTrait};
use tokio::sync::{Mutex, MutexGuard};

use crate::{db, errors::ModelError, pizza, sauce, schema, topping};

#[derive(Clone, Debug)]
pub struct PizzaContext {
    db: DatabaseConnection,
    writer: Arc<Mutex<()>>,
}

/// Held for as long as a write transaction is open.
pub type WriteGuard<'a> = MutexGuard<'a, ()>;

impl PizzaContext {
    pub async fn connect(cfg: &DatabaseConfig) -> Result<Self, ModelError> {
        let db = db::connect_with_config(cfg).await?;
        Ok(Self { db, writer: Arc::new(Mutex::new(())) })
    }

    pub fn connection(&self) -> &DatabaseConnection { &self.db }

    pub fn pizzas(&self) -> Select<pizza::Entity> { pizza::Entity::find() }

    pub fn toppings(&self) -> Select<topping::Entity> { topping::Entity::find() }

    pub fn sauces(&self) -> Select<sauce::Entity> { sauce::Entity::find() }

    pub async fn begin(&self) -> Result<DatabaseTransaction, ModelError> {
        Ok(self.db.begin().await?)
    }

    /// Wait for the writer lock, then begin. Keep the guard alive until the
    /// transaction is committed or dropped.
    pub async fn begin_write(&self) -> Result<(WriteGuard<'_>, DatabaseTransaction), ModelError> {
        let guard = self.writer.lock().await;
        let txn = self.db.begin().await?;
        Ok((guard, txn))
    }

    /// Create the schema if it is missing. No migration history is kept.
    pub async fn ensure_created(&self) -> Result<(), ModelError> {
        schema::create_tables(&self.db).await
    }
}
