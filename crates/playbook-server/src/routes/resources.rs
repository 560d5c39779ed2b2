use axum::extract::{Path, State};
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;
use playbook_core::resource::{Resource, ResourceLibrary};
use playbook_core::types::ResourceType;

/// GET /api/resources — list the resource library.
pub async fn list_resources(
    State(app): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let library = ResourceLibrary::load(&root)?;
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!(library.items))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct CreateResourceBody {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    /// Omitted tags trigger keyword-based suggestion from the title.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// POST /api/resources — add a resource.
pub async fn create_resource(
    State(app): State<AppState>,
    Json(body): Json<CreateResourceBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let resource_type: ResourceType = body
            .resource_type
            .as_deref()
            .unwrap_or("link")
            .parse()?;

        let mut resource = Resource::new(&body.title, &body.url, resource_type);
        resource.industry = body.industry;
        resource.tags = match body.tags {
            Some(tags) => tags,
            None => playbook_core::tags::suggest(&body.title),
        };

        let mut library = ResourceLibrary::load(&root)?;
        let id = library.add(resource);
        library.save(&root)?;
        let _ = playbook_core::analytics::record(&root, "resource_added", &id);
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!(library.get(&id)?))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct TagsBody {
    pub tags: Vec<String>,
}

/// PUT /api/resources/:id/tags — replace a resource's tags.
pub async fn set_tags(
    State(app): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<TagsBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let mut library = ResourceLibrary::load(&root)?;
        library.set_tags(&id, body.tags)?;
        library.save(&root)?;
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!(library.get(&id)?))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// DELETE /api/resources/:id — remove a resource.
pub async fn delete_resource(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let mut library = ResourceLibrary::load(&root)?;
        let removed = library.remove(&id)?;
        library.save(&root)?;
        let _ = playbook_core::analytics::record(&root, "resource_removed", &id);
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!(removed))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
