use axum::{
    extract::{Request, State},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

use super::{ApiError, AppState};

/// Router fallback: anything under `/products` that no route matched is an
/// API 404; every other path is served from the static frontend build, with
/// `index.html` as the single-page-app entry document for client routes.
pub(super) async fn spa_fallback(State(state): State<AppState>, req: Request) -> Response {
    if req.uri().path().starts_with("/products") {
        return ApiError::not_found("API route not found").into_response();
    }

    let index = state.config.static_dir.join("index.html");
    let serve = ServeDir::new(&state.config.static_dir).fallback(ServeFile::new(index));

    match serve.oneshot(req).await {
        Ok(res) => res.into_response(),
        Err(infallible) => match infallible {},
    }
}
