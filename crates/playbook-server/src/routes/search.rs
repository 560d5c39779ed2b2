use axum::extract::{Query, State};
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;
use playbook_core::guide::GuideState;
use playbook_core::resource::ResourceLibrary;
use playbook_core::search;

#[derive(serde::Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub threshold: Option<f64>,
}

/// GET /api/search?q=<query>&threshold=<min score>
pub async fn search(
    State(app): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let config = playbook_core::config::Config::load(&root)?;
        let threshold = params.threshold.unwrap_or(config.search.threshold);

        let state = GuideState::load(&root)?;
        let library = ResourceLibrary::load(&root)?;

        let items = search::guide_candidates(&state, &library)?;
        let hits = search::search_many_scored(&params.q, items, search::GUIDE_FIELDS, threshold);
        let _ = playbook_core::analytics::record(&root, "search", &params.q);

        let out: Vec<serde_json::Value> = hits
            .iter()
            .map(|h| serde_json::json!({ "score": h.score, "item": h.item }))
            .collect();
        Ok::<_, playbook_core::PlaybookError>(serde_json::json!({ "results": out }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
