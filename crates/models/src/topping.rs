use sea_orm::{entity::prelude::*, ConnectionTrait, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, pizza, pizza_topping};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "toppings")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub calories: f64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { PizzaTopping }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::PizzaTopping => Entity::has_many(pizza_topping::Entity).into(),
        }
    }
}

impl Related<pizza_topping::Entity> for Entity {
    fn to() -> RelationDef { Relation::PizzaTopping.def() }
}

impl Related<pizza::Entity> for Entity {
    fn to() -> RelationDef { pizza_topping::Relation::Pizza.def() }

    fn via() -> Option<RelationDef> { Some(pizza_topping::Relation::Topping.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a topping as a new row. An `id` of `0` lets storage assign one.
pub async fn insert<C: ConnectionTrait>(conn: &C, topping: &Model) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: if topping.id == 0 { NotSet } else { Set(topping.id) },
        name: Set(topping.name.clone()),
        calories: Set(topping.calories),
    };
    Ok(am.insert(conn).await?)
}
