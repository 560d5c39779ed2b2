use axum::extract::{Path, State};
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;
use playbook_core::guide::GuideState;
use playbook_core::resource::ResourceLibrary;
use playbook_core::types::StageKey;

fn parse_key(key: &str) -> Result<StageKey, playbook_core::PlaybookError> {
    key.parse()
}

/// GET /api/stages — list all stages.
pub async fn list_stages(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let state = GuideState::load(&root)?;
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!(state.stages))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// GET /api/stages/:key — one stage.
pub async fn get_stage(
    State(app): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let key = parse_key(&key)?;
        let state = GuideState::load(&root)?;
        let _ = playbook_core::analytics::record(&root, "stage_viewed", key.as_str());
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!(state.stage(key)?))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct QuestionBody {
    pub text: String,
}

/// POST /api/stages/:key/questions — append a discovery question.
pub async fn add_question(
    State(app): State<AppState>,
    Path(key): Path<String>,
    Json(body): Json<QuestionBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let key = parse_key(&key)?;
        let mut state = GuideState::load(&root)?;
        state.stage_mut(key)?.add_question(&body.text);
        state.save(&root)?;
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!(state.stage(key)?))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct ObjectionBody {
    pub objection: String,
    pub response: String,
}

/// POST /api/stages/:key/objections — append an objection + response pair.
pub async fn add_objection(
    State(app): State<AppState>,
    Path(key): Path<String>,
    Json(body): Json<ObjectionBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let key = parse_key(&key)?;
        let mut state = GuideState::load(&root)?;
        state
            .stage_mut(key)?
            .add_objection(&body.objection, &body.response);
        state.save(&root)?;
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!(state.stage(key)?))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct LinkBody {
    pub id: String,
}

/// POST /api/stages/:key/resources — link a library resource to a stage.
pub async fn link_resource(
    State(app): State<AppState>,
    Path(key): Path<String>,
    Json(body): Json<LinkBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let key = parse_key(&key)?;
        // The id must exist in the library before it can be linked
        let library = ResourceLibrary::load(&root)?;
        library.get(&body.id)?;

        let mut state = GuideState::load(&root)?;
        state.stage_mut(key)?.link_resource(&body.id);
        state.save(&root)?;
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!(state.stage(key)?))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// DELETE /api/stages/:key/resources/:id — unlink a resource from a stage.
pub async fn unlink_resource(
    State(app): State<AppState>,
    Path((key, id)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let key = parse_key(&key)?;
        let mut state = GuideState::load(&root)?;
        state.stage_mut(key)?.unlink_resource(&id);
        state.save(&root)?;
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!(state.stage(key)?))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
