// =============================================================================
// DreamArchitect API - Routes
// =============================================================================

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use dream_architect::{GenerationRequest, SceneGenerator, SceneGraph};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::ApiError;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<SceneGenerator>,
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/generate-scene", post(generate_scene))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// POST `/generate-scene` - Builds a scene graph from a narrative and mood.
///
/// # Response
/// - `200 OK` with the scene graph
/// - `422 UNPROCESSABLE_ENTITY` naming every mood field out of range
async fn generate_scene(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<SceneGraph>, ApiError> {
    info!(
        narrative_chars = request.narrative.chars().count(),
        seeded = request.seed.is_some(),
        style = request.style.name(),
        "Generate scene request"
    );
    let scene = state.generator.generate_validated(&request)?;
    Ok(Json(scene))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState {
            generator: Arc::new(SceneGenerator::default()),
        })
    }

    async fn post_json(body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/generate-scene")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn health_check() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn generates_a_scene() {
        let (status, scene) = post_json(json!({
            "narrative": "a temple by a lake",
            "mood": { "valence": 0.1, "arousal": 0.0, "warmth": 0.5, "nostalgia": 0.0 },
            "seed": 3
        }))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(scene["description"], "a temple by a lake");
        assert_eq!(scene["style"], "stylized");
        assert_eq!(scene["sky"]["time_of_day"], "day");
        // totem + 6 orbs + 6 pillars + water
        assert_eq!(scene["objects"].as_array().map(Vec::len), Some(14));
        assert!(scene["camera"]["look_at"].is_array());
    }

    #[tokio::test]
    async fn same_seed_same_response() {
        let body = json!({
            "narrative": "stars",
            "mood": { "arousal": 0.9 },
            "seed": 11
        });
        let (_, a) = post_json(body.clone()).await;
        let (_, b) = post_json(body).await;
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn out_of_range_mood_is_rejected() {
        let (status, body) = post_json(json!({
            "narrative": "x",
            "mood": { "valence": 3.0, "warmth": -1.0 }
        }))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let fields: Vec<_> = body["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["field"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(fields, ["mood.valence", "mood.warmth"]);
    }

    #[tokio::test]
    async fn malformed_body_is_a_client_error() {
        let (status, _) = post_json(json!({ "narrative": 5 })).await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/generate-scene")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let allow = response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok());
        assert_eq!(allow, Some("*"));
    }
}
