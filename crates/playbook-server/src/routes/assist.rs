use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;
use playbook_core::assist::{self, AssistClient};
use playbook_core::config::Config;

#[derive(serde::Deserialize)]
pub struct AssistBody {
    pub prompt: String,
}

/// POST /api/assist — one-shot chat completion. The blocking HTTP client
/// runs inside spawn_blocking with the rest of the call.
pub async fn complete(
    State(app): State<AppState>,
    Json(body): Json<AssistBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let key = assist::load_key(&root)?;
        let config = Config::load(&root)?;
        let client = AssistClient::new(&config.assist, key);
        let answer = client.complete(&body.prompt)?;
        let _ = playbook_core::analytics::record(&root, "assist", &body.prompt);
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!({
            "prompt": body.prompt,
            "answer": answer,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct KeyBody {
    pub key: String,
}

/// PUT /api/assist/key — store the provider API key.
pub async fn set_key(
    State(app): State<AppState>,
    Json(body): Json<KeyBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    if body.key.trim().is_empty() {
        return Err(AppError::bad_request("key must not be blank"));
    }

    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        assist::store_key(&root, body.key.trim())?;
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!({ "stored": true }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// DELETE /api/assist/key — forget the stored key.
pub async fn clear_key(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        assist::clear_key(&root)?;
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!({ "cleared": true }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
