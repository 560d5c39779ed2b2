use axum::extract::State;
use axum::response::Html;

use crate::error::AppError;
use crate::state::AppState;

/// Fallback handler: any non-API path serves the rendered guide page.
pub async fn guide_page(State(app): State<AppState>) -> Result<Html<String>, AppError> {
    let root = app.root.clone();
    let html = tokio::task::spawn_blocking(move || {
        let config = playbook_core::config::Config::load(&root)?;
        let state = playbook_core::guide::GuideState::load(&root)?;
        let library = playbook_core::resource::ResourceLibrary::load(&root)?;
        Ok::<_, playbook_core::PlaybookError>(playbook_core::render::guide_page(
            &config.project.name,
            &state,
            &library.items,
        ))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Html(html))
}
