use axum::extract::{Path, State};
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;
use playbook_core::lists::Lists;
use playbook_core::types::ListKind;

/// GET /api/lists — all three vocabularies.
pub async fn get_lists(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let lists = Lists::load(&root)?;
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!(lists))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct ValueBody {
    pub value: String,
}

/// POST /api/lists/:kind — add a value to a vocabulary.
pub async fn add_value(
    State(app): State<AppState>,
    Path(kind): Path<String>,
    Json(body): Json<ValueBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let kind: ListKind = kind.parse()?;
        let mut lists = Lists::load(&root)?;
        let added = lists.add(kind, &body.value);
        lists.save(&root)?;
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!({
            "kind": kind,
            "value": body.value,
            "added": added,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// DELETE /api/lists/:kind/:value — remove a value from a vocabulary.
pub async fn remove_value(
    State(app): State<AppState>,
    Path((kind, value)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let kind: ListKind = kind.parse()?;
        let mut lists = Lists::load(&root)?;
        let removed = lists.remove(kind, &value);
        lists.save(&root)?;
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!({
            "kind": kind,
            "value": value,
            "removed": removed,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
