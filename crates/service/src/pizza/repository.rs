use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, QuerySelect, Set};

use models::pizza::{self, Pizza};
use models::{pizza_topping, sauce, topping, PizzaContext};

use crate::errors::ServiceError;

#[async_trait]
pub trait PizzaRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<pizza::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Pizza>, ServiceError>;
    async fn create(&self, pizza: Pizza) -> Result<Pizza, ServiceError>;
    async fn add_topping(&self, pizza_id: i32, topping_id: i32) -> Result<(), ServiceError>;
    async fn update_sauce(&self, pizza_id: i32, sauce_id: i32) -> Result<(), ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmPizzaRepository {
    pub ctx: PizzaContext,
}

impl SeaOrmPizzaRepository {
    pub fn new(ctx: PizzaContext) -> Self { Self { ctx } }
}

#[async_trait]
impl PizzaRepository for SeaOrmPizzaRepository {
    async fn list(&self) -> Result<Vec<pizza::Model>, ServiceError> {
        let rows = self
            .ctx
            .pizzas()
            .order_by_asc(pizza::Column::Id)
            .all(self.ctx.connection())
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<Pizza>, ServiceError> {
        let txn = self.ctx.begin().await?;
        let mut rows = self
            .ctx
            .pizzas()
            .filter(pizza::Column::Id.eq(id))
            .limit(2u64)
            .all(&txn)
            .await?;
        if rows.len() > 1 {
            return Err(ServiceError::Integrity(format!("more than one pizza with id {}", id)));
        }
        let Some(row) = rows.pop() else { return Ok(None); };

        let toppings = pizza_topping::toppings_of(&txn, row.id).await?;
        let sauce = match row.sauce_id {
            Some(sauce_id) => sauce::Entity::find_by_id(sauce_id).one(&txn).await?,
            None => None,
        };
        txn.commit().await?;
        Ok(Some(Pizza::from_parts(row, toppings, sauce)))
    }

    async fn create(&self, pizza: Pizza) -> Result<Pizza, ServiceError> {
        let (_writer, txn) = self.ctx.begin_write().await?;
        let sauce = match &pizza.sauce {
            Some(s) => Some(sauce::insert(&txn, s).await?),
            None => None,
        };
        let row = pizza::insert(&txn, pizza.id, &pizza.name, sauce.as_ref().map(|s| s.id)).await?;

        let mut toppings = Vec::with_capacity(pizza.toppings.len());
        for t in &pizza.toppings {
            let created = topping::insert(&txn, t).await?;
            pizza_topping::link(&txn, row.id, created.id).await?;
            toppings.push(created);
        }
        txn.commit().await?;
        Ok(Pizza::from_parts(row, toppings, sauce))
    }

    async fn add_topping(&self, pizza_id: i32, topping_id: i32) -> Result<(), ServiceError> {
        let (_writer, txn) = self.ctx.begin_write().await?;
        let pizza = pizza::Entity::find_by_id(pizza_id).one(&txn).await?;
        let topping = topping::Entity::find_by_id(topping_id).one(&txn).await?;
        if pizza.is_none() || topping.is_none() {
            return Err(ServiceError::missing("pizza or topping"));
        }
        pizza_topping::link(&txn, pizza_id, topping_id).await?;
        txn.commit().await?;
        Ok(())
    }

    async fn update_sauce(&self, pizza_id: i32, sauce_id: i32) -> Result<(), ServiceError> {
        let (_writer, txn) = self.ctx.begin_write().await?;
        let pizza = pizza::Entity::find_by_id(pizza_id).one(&txn).await?;
        let sauce = sauce::Entity::find_by_id(sauce_id).one(&txn).await?;
        let (Some(pizza), Some(_)) = (pizza, sauce) else {
            return Err(ServiceError::missing("pizza or sauce"));
        };
        let mut am: pizza::ActiveModel = pizza.into();
        am.sauce_id = Set(Some(sauce_id));
        am.update(&txn).await?;
        txn.commit().await?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let (_writer, txn) = self.ctx.begin_write().await?;
        let Some(row) = pizza::Entity::find_by_id(id).one(&txn).await? else { return Ok(false); };
        pizza_topping::unlink_all(&txn, row.id).await?;
        row.delete(&txn).await?;
        txn.commit().await?;
        Ok(true)
    }
}
