use std::sync::Arc;

use tracing::{info, instrument, warn};

use models::pizza::{self, Pizza};
use models::PizzaContext;

use crate::errors::ServiceError;
use crate::pizza::repository::{PizzaRepository, SeaOrmPizzaRepository};

/// Application service exposing the pizza operations to the HTTP layer.
/// Holds no state of its own beyond the repository handle.
pub struct PizzaService<R: PizzaRepository> {
    repo: Arc<R>,
}

impl<R: PizzaRepository> Clone for PizzaService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl PizzaService<SeaOrmPizzaRepository> {
    pub fn from_context(ctx: PizzaContext) -> Self {
        Self::new(Arc::new(SeaOrmPizzaRepository::new(ctx)))
    }
}

impl<R: PizzaRepository> PizzaService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// All pizza rows, without toppings or sauce.
    pub async fn list(&self) -> Result<Vec<pizza::Model>, ServiceError> {
        self.repo.list().await
    }

    /// One pizza with toppings and sauce loaded; `None` when the id is unknown.
    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Option<Pizza>, ServiceError> {
        let found = self.repo.get(id).await;
        if let Err(ServiceError::Integrity(msg)) = &found {
            warn!(pizza_id = id, error = %msg, "pizza_id_not_unique");
        }
        found
    }

    /// Insert the pizza and everything nested in it. No validation is applied.
    #[instrument(skip(self, pizza), fields(name = %pizza.name))]
    pub async fn create(&self, pizza: Pizza) -> Result<Pizza, ServiceError> {
        let created = self.repo.create(pizza).await?;
        info!(pizza_id = created.id, toppings = created.toppings.len(), "pizza_created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn add_topping(&self, pizza_id: i32, topping_id: i32) -> Result<(), ServiceError> {
        self.repo.add_topping(pizza_id, topping_id).await?;
        info!(pizza_id, topping_id, "topping_added");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn update_sauce(&self, pizza_id: i32, sauce_id: i32) -> Result<(), ServiceError> {
        self.repo.update_sauce(pizza_id, sauce_id).await?;
        info!(pizza_id, sauce_id, "sauce_updated");
        Ok(())
    }

    /// Idempotent: deleting an unknown id is not an error. Returns whether a row was removed.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let deleted = self.repo.delete(id).await?;
        info!(pizza_id = id, deleted, "pizza_delete");
        Ok(deleted)
    }
}
