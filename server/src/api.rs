use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{header, Method};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use connect4_core::{best_move, Level};
use shared::{ErrorKind, HealthResponse, MoveQuery, MoveResponse};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub fn app_router(state: Arc<AppState>, static_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/move", get(handle_move))
        .route("/health", get(health));

    let mut app = Router::new().nest("/api", api);
    if let Some(dir) = static_dir {
        let index = ServeFile::new(dir.join("index.html"));
        app = app.fallback_service(ServeDir::new(dir).not_found_service(index));
    }

    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE]);

    app.layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /api/move?position=<history>&level=<1-15>`
pub async fn handle_move(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(pairs) = query.map_err(|rejection| ApiError::BadQuery {
        kind: ErrorKind::BadRequest,
        message: rejection.body_text(),
    })?;
    let query = decode_move_query(pairs)?;

    // Cheap rejection before waiting for a search slot.
    Level::try_from(query.level)?;

    let permit = state
        .search_slots
        .clone()
        .acquire_owned()
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;
    let config = state.engine_config.clone();
    let MoveQuery { position, level } = query;

    let result = tokio::task::spawn_blocking(move || {
        let _permit = permit;
        best_move(&position, level, config)
    })
    .await
    .map_err(|err| ApiError::Internal(format!("search task failed: {err}")))??;

    tracing::info!(
        column = result.column,
        score = result.score,
        depth = result.stats.depth,
        nodes = result.stats.nodes,
        time_ms = result.stats.time_ms,
        "move chosen"
    );

    Ok((
        [(header::CACHE_CONTROL, "no-store")],
        Json(MoveResponse::from(&result)),
    )
        .into_response())
}

/// Builds a [`MoveQuery`] from raw parameters so that every failure names the
/// parameter at fault. Unknown parameters are ignored; a missing `position`
/// is the empty board.
fn decode_move_query(pairs: Vec<(String, String)>) -> Result<MoveQuery, ApiError> {
    let mut position: Option<String> = None;
    let mut level: Option<String> = None;

    for (key, value) in pairs {
        let (slot, kind) = match key.as_str() {
            "position" => (&mut position, ErrorKind::InvalidHistory),
            "level" => (&mut level, ErrorKind::InvalidLevel),
            _ => continue,
        };
        if slot.replace(value).is_some() {
            return Err(ApiError::BadQuery {
                kind,
                message: format!("duplicate `{key}` parameter"),
            });
        }
    }

    let bad_level = |message: String| ApiError::BadQuery {
        kind: ErrorKind::InvalidLevel,
        message,
    };
    let level = level.ok_or_else(|| bad_level("missing `level` parameter".to_owned()))?;
    let level = level
        .trim()
        .parse::<u8>()
        .map_err(|err| bad_level(format!("`level` must be an integer in 1-15: {err}")))?;

    Ok(MoveQuery {
        position: position.unwrap_or_default(),
        level,
    })
}

#[allow(clippy::unused_async)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
    })
}
