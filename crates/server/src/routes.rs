pub mod pizzas;

use axum::{
    routing::{get, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::Health;

use crate::state::ServerState;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let pizza_routes = Router::new()
        .route("/pizza", get(pizzas::list).post(pizzas::create))
        .route("/pizza/:id", get(pizzas::get).delete(pizzas::delete))
        .route("/pizza/:id/addtopping", put(pizzas::add_topping))
        .route("/pizza/:id/updatesauce", put(pizzas::update_sauce));

    Router::new()
        .route("/health", get(health))
        .merge(pizza_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use configs::DatabaseConfig;
    use models::PizzaContext;
    use tower::ServiceExt;

    async fn app() -> Router {
        let ctx = PizzaContext::connect(&DatabaseConfig::in_memory()).await.expect("connect");
        ctx.ensure_created().await.expect("schema");
        build_router(ServerState::new(ctx), CorsLayer::very_permissive())
    }

    async fn body_json(res: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.expect("body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn health_is_ok() {
        let res = app().await
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await["status"], "ok");
    }

    #[tokio::test]
    async fn unknown_pizza_is_404_with_json_body() {
        let res = app().await
            .oneshot(Request::get("/pizza/12").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(res).await["error"], "Not Found");
    }

    #[tokio::test]
    async fn create_sets_location_header() {
        let req = Request::post("/pizza")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"Margherita"}"#))
            .unwrap();
        let res = app().await.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        assert_eq!(res.headers()["location"], "/pizza/1");
        let body = body_json(res).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["toppings"], serde_json::json!([]));
        assert!(body["sauce"].is_null());
    }

    #[tokio::test]
    async fn add_topping_without_query_is_rejected() {
        let req = Request::put("/pizza/1/addtopping").body(Body::empty()).unwrap();
        let res = app().await.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
