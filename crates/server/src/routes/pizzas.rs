use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::info;

use models::pizza::{self, Pizza};

use crate::{errors::JsonApiError, state::ServerState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToppingQuery { pub topping_id: i32 }

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSauceQuery { pub sauce_id: i32 }

/// `GET /pizza`
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<pizza::Model>>, JsonApiError> {
    let list = state.pizzas.list().await?;
    info!(count = list.len(), "list pizzas");
    Ok(Json(list))
}

/// `GET /pizza/:id`
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Pizza>, JsonApiError> {
    match state.pizzas.get(id).await? {
        Some(p) => Ok(Json(p)),
        None => Err(JsonApiError::not_found(format!("pizza {} not found", id))),
    }
}

/// `POST /pizza`, answering 201 with a `Location` header.
pub async fn create(State(state): State<ServerState>, Json(input): Json<Pizza>) -> Result<impl IntoResponse, JsonApiError> {
    let created = state.pizzas.create(input).await?;
    let location = format!("/pizza/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

/// `PUT /pizza/:id/addtopping?toppingId=N`
pub async fn add_topping(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Query(q): Query<AddToppingQuery>,
) -> Result<StatusCode, JsonApiError> {
    state.pizzas.add_topping(id, q.topping_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `PUT /pizza/:id/updatesauce?sauceId=N`
pub async fn update_sauce(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Query(q): Query<UpdateSauceQuery>,
) -> Result<StatusCode, JsonApiError> {
    state.pizzas.update_sauce(id, q.sauce_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /pizza/:id`. The service call is idempotent; the route still
/// reports 404 when there was nothing to delete.
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    if state.pizzas.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found(format!("pizza {} not found", id)))
    }
}
