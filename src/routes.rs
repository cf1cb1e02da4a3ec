use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::services::ServeDir;

use crate::roundtrip::{run_round_trip, RoundTripSession, RunOutcome};
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router<AppState> {
    let system_config = &state.config.system_config;

    Router::new()
        // REST API routes
        .route("/api/health", get(health_check))
        .route("/api/translate", post(translate_round_trip))
        // The front-end page itself
        .fallback_service(ServeDir::new(&system_config.static_dir))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[derive(Debug, Deserialize)]
struct TranslatePayload {
    text: String,
}

/// One run of the two-hop workflow. Each request owns its session, so
/// overlapping triggers proceed independently (last write wins on the page).
async fn translate_round_trip(
    State(state): State<AppState>,
    Json(payload): Json<TranslatePayload>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mut session = RoundTripSession::default();

    match run_round_trip(&payload.text, state.translator.as_ref(), &mut session).await {
        RunOutcome::Succeeded => Ok(Json(json!({
            "original": session.original,
            "german": session.german,
            "final_english": session.final_english,
        }))),
        RunOutcome::RejectedEmptyInput => Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": session.error })),
        )),
        // Slots written before the failure are returned so the page can
        // keep showing them.
        RunOutcome::TranslationFailed => Err((
            StatusCode::BAD_GATEWAY,
            Json(json!({
                "error": session.error,
                "original": session.original,
                "german": session.german,
            })),
        )),
    }
}
