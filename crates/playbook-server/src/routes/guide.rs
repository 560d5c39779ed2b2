use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/guide — the whole guide in one payload.
pub async fn get_guide(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let state = playbook_core::guide::GuideState::load(&root)?;
        let library = playbook_core::resource::ResourceLibrary::load(&root)?;
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!({
            "version": state.version,
            "personas": state.personas,
            "stages": state.stages,
            "resources": library.items,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
