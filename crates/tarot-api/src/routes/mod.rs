//! Route handlers and the application router.

/// `/api/v1/cards/...` handlers.
pub mod cards;
/// `/api/v1/readings/...` handlers.
pub mod readings;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use crate::error::NOT_FOUND_DETAIL;
use crate::models::HealthResponse;

/// Crate version reported by `/` and `/health`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The full application router.
pub fn router() -> Router {
    let readings = Router::new()
        .route("/single", get(readings::single_card))
        .route("/three", get(readings::three))
        .route("/celtic-cross", get(readings::celtic))
        .route("/random", get(readings::random));

    let cards = Router::new()
        .route("/deck-info", get(cards::deck_info))
        .route("/major-arcana", get(cards::major))
        .route("/minor-arcana", get(cards::minor))
        .route("/suit/{name}", get(cards::suit))
        .route("/search/{query}", get(cards::find));

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .nest("/api/v1/readings", readings)
        .nest("/api/v1/cards", cards)
        .fallback(not_found)
}

/// Service index with the endpoint map.
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Tarot Reader API",
        "version": VERSION,
        "endpoints": {
            "readings": {
                "single": "/api/v1/readings/single",
                "three_card": "/api/v1/readings/three",
                "celtic_cross": "/api/v1/readings/celtic-cross",
                "random": "/api/v1/readings/random?count=5",
            },
            "cards": {
                "deck_info": "/api/v1/cards/deck-info",
                "major_arcana": "/api/v1/cards/major-arcana",
                "minor_arcana": "/api/v1/cards/minor-arcana",
                "by_suit": "/api/v1/cards/suit/wands",
                "search": "/api/v1/cards/search/fool",
            },
        },
        "disclaimer": "For entertainment purposes only",
    }))
}

/// Liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: VERSION,
    })
}

/// JSON 404 for unknown routes.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": NOT_FOUND_DETAIL }))).into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = router()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn names(cards: &Value) -> Vec<&str> {
        cards
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect()
    }

    // -----------------------------------------------------------------------
    // handlers
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn index_lists_endpoints() {
        let Json(body) = index().await;
        assert_eq!(body["version"], VERSION);
        assert_eq!(body["endpoints"]["readings"]["single"], "/api/v1/readings/single");
        assert_eq!(body["endpoints"]["cards"]["search"], "/api/v1/cards/search/fool");
    }

    #[tokio::test]
    async fn health_reports_version() {
        let Json(body) = health().await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, VERSION);
    }

    // -----------------------------------------------------------------------
    // routing
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn service_routes() {
        let (status, body) = get_json("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["disclaimer"], "For entertainment purposes only");

        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        for uri in ["/api/v1/nope", "/api/v1/readings/five", "/docs"] {
            let (status, body) = get_json(uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(body["detail"], NOT_FOUND_DETAIL);
        }
    }

    #[tokio::test]
    async fn reading_routes() {
        let (status, body) = get_json("/api/v1/readings/single?seed=INFP").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["spread_type"], "single_card");
        assert_eq!(body["seed"], "INFP");
        assert_eq!(body["cards"].as_array().unwrap().len(), 1);

        let (status, body) = get_json("/api/v1/readings/three").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["spread_type"], "three_card");
        assert!(body["seed"].is_null());
        assert_eq!(body["cards"][0]["position"], "Past");

        let (status, body) = get_json("/api/v1/readings/celtic-cross?seed=x").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["spread_type"], "celtic_cross");
        assert_eq!(body["cards"].as_array().unwrap().len(), 10);
        assert_eq!(body["cards"][9]["position"], "Final Outcome");
    }

    #[tokio::test]
    async fn random_route_counts() {
        let (status, body) = get_json("/api/v1/readings/random").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["spread_type"], "random_drop");
        assert_eq!(body["cards"].as_array().unwrap().len(), 1);

        let (status, body) = get_json("/api/v1/readings/random?count=5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cards"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn random_route_rejects_bad_counts() {
        let (status, body) = get_json("/api/v1/readings/random?count=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().starts_with("invalid query"));

        for count in ["0", "-1", "79"] {
            let (status, body) = get_json(&format!("/api/v1/readings/random?count={count}")).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "count={count}");
            assert!(body["detail"].as_str().unwrap().contains("between 1 and 78"));
        }
    }

    #[tokio::test]
    async fn card_listing_routes() {
        let (status, body) = get_json("/api/v1/cards/deck-info").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_cards"], 78);
        assert_eq!(body["suits"][3], "Pentacles");

        let (status, body) = get_json("/api/v1/cards/major-arcana").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 22);

        let (status, body) = get_json("/api/v1/cards/minor-arcana").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 56);
    }

    #[tokio::test]
    async fn suit_route() {
        let (status, body) = get_json("/api/v1/cards/suit/wands").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 14);
        assert_eq!(body[0]["name"], "Ace of Wands");

        let (status, body) = get_json("/api/v1/cards/suit/coins").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["detail"].as_str().unwrap().contains("coins"));
    }

    #[tokio::test]
    async fn search_route() {
        let (status, body) = get_json("/api/v1/cards/search/s1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), ["Ace of Swords"]);

        let (status, body) = get_json("/api/v1/cards/search/the%20fool").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), ["The Fool"]);

        let (status, body) = get_json("/api/v1/cards/search/zzz").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "no card found matching 'zzz'");
    }
}
