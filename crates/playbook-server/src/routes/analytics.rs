use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;
use playbook_core::analytics::EventLog;

/// GET /api/analytics — the local interaction log.
pub async fn list_events(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let log = EventLog::load(&root)?;
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!(log.events))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct RecordBody {
    pub kind: String,
    #[serde(default)]
    pub detail: String,
}

/// POST /api/analytics — record an event.
pub async fn record_event(
    State(app): State<AppState>,
    Json(body): Json<RecordBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        playbook_core::analytics::record(&root, &body.kind, &body.detail)?;
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!({
            "kind": body.kind,
            "detail": body.detail,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// DELETE /api/analytics — clear the log.
pub async fn clear_events(
    State(app): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let mut log = EventLog::load(&root)?;
        let cleared = log.events.len();
        log.clear();
        log.save(&root)?;
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!({ "cleared": cleared }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
