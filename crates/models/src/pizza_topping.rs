//! Join rows between pizzas and toppings.
//!
//! Each row has its own surrogate key, so one topping can be linked to the
//! same pizza repeatedly. A pizza's toppings are ordered by ascending row id.
use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, pizza, topping};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "pizza_toppings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pizza_id: i32,
    pub topping_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Pizza, Topping }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Pizza => Entity::belongs_to(pizza::Entity)
                .from(Column::PizzaId)
                .to(pizza::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade)
                .into(),
            Relation::Topping => Entity::belongs_to(topping::Entity)
                .from(Column::ToppingId)
                .to(topping::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<pizza::Entity> for Entity {
    fn to() -> RelationDef { Relation::Pizza.def() }
}

impl Related<topping::Entity> for Entity {
    fn to() -> RelationDef { Relation::Topping.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Append `topping_id` to the end of the pizza's topping list.
pub async fn link<C: ConnectionTrait>(conn: &C, pizza_id: i32, topping_id: i32) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        pizza_id: Set(pizza_id),
        topping_id: Set(topping_id),
        ..Default::default()
    };
    Ok(am.insert(conn).await?)
}

/// Toppings of a pizza in link order, repeats included.
pub async fn toppings_of<C: ConnectionTrait>(conn: &C, pizza_id: i32) -> Result<Vec<topping::Model>, errors::ModelError> {
    let rows = Entity::find()
        .filter(Column::PizzaId.eq(pizza_id))
        .order_by_asc(Column::Id)
        .find_also_related(topping::Entity)
        .all(conn)
        .await?;
    Ok(rows.into_iter().filter_map(|(_, t)| t).collect())
}

/// Remove every link of a pizza; returns the number of rows removed.
pub async fn unlink_all<C: ConnectionTrait>(conn: &C, pizza_id: i32) -> Result<u64, errors::ModelError> {
    let res = Entity::delete_many()
        .filter(Column::PizzaId.eq(pizza_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
