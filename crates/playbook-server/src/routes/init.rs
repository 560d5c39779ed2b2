use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

#[derive(serde::Deserialize, Default)]
pub struct InitBody {
    #[serde(default)]
    pub name: Option<String>,
}

/// POST /api/init — scaffold the playbook, seeding any missing blobs.
pub async fn init_project(
    State(app): State<AppState>,
    body: Option<Json<InitBody>>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let name = body
            .and_then(|Json(b)| b.name)
            .or_else(|| {
                root.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| "playbook".to_string());
        let report = playbook_core::init::init(&root, &name)?;
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!({
            "created": report.created,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
