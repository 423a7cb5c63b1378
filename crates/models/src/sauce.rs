use sea_orm::{entity::prelude::*, ConnectionTrait, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, pizza};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "sauces")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub is_vegan: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Pizza }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Pizza => Entity::has_many(pizza::Entity).into(),
        }
    }
}

impl Related<pizza::Entity> for Entity {
    fn to() -> RelationDef { Relation::Pizza.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a sauce as a new row. An `id` of `0` lets storage assign one.
pub async fn insert<C: ConnectionTrait>(conn: &C, sauce: &Model) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: if sauce.id == 0 { NotSet } else { Set(sauce.id) },
        name: Set(sauce.name.clone()),
        is_vegan: Set(sauce.is_vegan),
    };
    Ok(am.insert(conn).await?)
}
