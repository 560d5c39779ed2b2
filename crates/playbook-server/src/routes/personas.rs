use axum::extract::{Path, State};
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;
use playbook_core::guide::GuideState;
use playbook_core::persona::Persona;

/// GET /api/personas — list all personas.
pub async fn list_personas(
    State(app): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let state = GuideState::load(&root)?;
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!(state.personas))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// GET /api/personas/:slug — one persona.
pub async fn get_persona(
    State(app): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let state = GuideState::load(&root)?;
        let persona = state.persona(&slug)?.clone();
        let _ = playbook_core::analytics::record(&root, "persona_viewed", &slug);
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!(persona))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct CreatePersonaBody {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub role_summary: Option<String>,
    #[serde(default)]
    pub lob: Option<String>,
}

/// POST /api/personas — create a persona.
pub async fn create_persona(
    State(app): State<AppState>,
    Json(body): Json<CreatePersonaBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let mut state = GuideState::load(&root)?;
        let mut persona = Persona::new(&body.slug, &body.title);
        persona.role_summary = body.role_summary;
        persona.lob = body.lob;
        state.add_persona(persona.clone())?;
        state.save(&root)?;
        let _ = playbook_core::analytics::record(&root, "persona_created", &body.slug);
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!(persona))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct UpdatePersonaBody {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub role_summary: Option<String>,
    #[serde(default)]
    pub lob: Option<String>,
}

/// PUT /api/personas/:slug — update title, summary, or line of business.
pub async fn update_persona(
    State(app): State<AppState>,
    Path(slug): Path<String>,
    Json(body): Json<UpdatePersonaBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let mut state = GuideState::load(&root)?;
        let persona = state.persona_mut(&slug)?;
        if let Some(title) = body.title {
            persona.set_title(title);
        }
        if let Some(summary) = body.role_summary {
            persona.set_role_summary(Some(summary));
        }
        if let Some(lob) = body.lob {
            persona.set_lob(Some(lob));
        }
        state.save(&root)?;
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!(state.persona(&slug)?))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct EntryBody {
    pub text: String,
}

/// POST /api/personas/:slug/concerns — append a concern.
pub async fn add_concern(
    State(app): State<AppState>,
    Path(slug): Path<String>,
    Json(body): Json<EntryBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let mut state = GuideState::load(&root)?;
        state.persona_mut(&slug)?.add_concern(&body.text);
        state.save(&root)?;
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!(state.persona(&slug)?))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// POST /api/personas/:slug/talking-points — append a talking point.
pub async fn add_talking_point(
    State(app): State<AppState>,
    Path(slug): Path<String>,
    Json(body): Json<EntryBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let mut state = GuideState::load(&root)?;
        state.persona_mut(&slug)?.add_talking_point(&body.text);
        state.save(&root)?;
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!(state.persona(&slug)?))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// DELETE /api/personas/:slug — remove a persona.
pub async fn delete_persona(
    State(app): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let mut state = GuideState::load(&root)?;
        let removed = state.remove_persona(&slug)?;
        state.save(&root)?;
        let _ = playbook_core::analytics::record(&root, "persona_removed", &slug);
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!(removed))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
