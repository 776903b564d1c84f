use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use std::sync::Arc;

use crate::state::AppState;

/// Serves the raw history log as a download. Before the first generated
/// certificate there is no file yet; mirror the form's behavior and send
/// the operator back home.
pub async fn download_history(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let path = &state.config.history_path;

    match std::fs::read(path) {
        Ok(content) => {
            let mime = mime_guess::from_path(path)
                .first_raw()
                .unwrap_or("text/plain");
            axum::response::Response::builder()
                .header("Content-Type", mime)
                .header(
                    "Content-Disposition",
                    "attachment; filename=\"historial.csv\"",
                )
                .body(axum::body::Body::from(content))
                .unwrap()
                .into_response()
        }
        Err(_) => Redirect::to("/").into_response(),
    }
}
