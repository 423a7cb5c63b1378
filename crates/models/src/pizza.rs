use sea_orm::{entity::prelude::*, ConnectionTrait, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, pizza_topping, sauce, topping};

/// Row of the `pizzas` table. Toppings live in `pizza_toppings`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "pizzas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub sauce_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Sauce, PizzaTopping }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Sauce => Entity::belongs_to(sauce::Entity)
                .from(Column::SauceId)
                .to(sauce::Column::Id)
                .on_delete(ForeignKeyAction::SetNull)
                .on_update(ForeignKeyAction::Cascade)
                .into(),
            Relation::PizzaTopping => Entity::has_many(pizza_topping::Entity).into(),
        }
    }
}

impl Related<sauce::Entity> for Entity {
    fn to() -> RelationDef { Relation::Sauce.def() }
}

impl Related<pizza_topping::Entity> for Entity {
    fn to() -> RelationDef { Relation::PizzaTopping.def() }
}

impl Related<topping::Entity> for Entity {
    fn to() -> RelationDef { pizza_topping::Relation::Topping.def() }

    fn via() -> Option<RelationDef> { Some(pizza_topping::Relation::Pizza.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

/// A pizza together with its toppings and sauce.
///
/// This is the request body for create and the response body for
/// get-by-id. `id == 0` on input means unassigned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pizza {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub toppings: Vec<topping::Model>,
    #[serde(default)]
    pub sauce: Option<sauce::Model>,
}

impl Pizza {
    pub fn new(name: impl Into<String>) -> Self {
        Self { id: 0, name: name.into(), toppings: Vec::new(), sauce: None }
    }

    pub fn from_parts(row: Model, toppings: Vec<topping::Model>, sauce: Option<sauce::Model>) -> Self {
        Self { id: row.id, name: row.name, toppings, sauce }
    }
}

/// Insert the pizza row only; nested toppings and sauce are the caller's job.
pub async fn insert<C: ConnectionTrait>(conn: &C, id: i32, name: &str, sauce_id: Option<i32>) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: if id == 0 { NotSet } else { Set(id) },
        name: Set(name.to_string()),
        sauce_id: Set(sauce_id),
    };
    Ok(am.insert(conn).await?)
}
