use axum::extract::Query;
use axum::Json;

#[derive(serde::Deserialize)]
pub struct SuggestParams {
    pub text: String,
}

/// GET /api/tags/suggest?text=<free text> — keyword-based tag suggestions.
/// Pure lookup, no project state involved.
pub async fn suggest(Query(params): Query<SuggestParams>) -> Json<serde_json::Value> {
    let suggestions = playbook_core::tags::suggest(&params.text);
    Json(serde_json::json!({ "suggestions": suggestions }))
}
