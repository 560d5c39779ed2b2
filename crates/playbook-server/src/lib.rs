pub mod error;
pub mod pages;
pub mod routes;
pub mod state;

use axum::routing::{delete, get, post, put};
use axum::Router;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(root: PathBuf) -> Router {
    let app_state = state::AppState::new(root);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Events (SSE)
        .route("/api/events", get(routes::events::sse_events))
        // Guide
        .route("/api/guide", get(routes::guide::get_guide))
        // Personas
        .route("/api/personas", get(routes::personas::list_personas))
        .route("/api/personas", post(routes::personas::create_persona))
        .route("/api/personas/{slug}", get(routes::personas::get_persona))
        .route(
            "/api/personas/{slug}",
            put(routes::personas::update_persona),
        )
        .route(
            "/api/personas/{slug}",
            delete(routes::personas::delete_persona),
        )
        .route(
            "/api/personas/{slug}/concerns",
            post(routes::personas::add_concern),
        )
        .route(
            "/api/personas/{slug}/talking-points",
            post(routes::personas::add_talking_point),
        )
        // Stages
        .route("/api/stages", get(routes::stages::list_stages))
        .route("/api/stages/{key}", get(routes::stages::get_stage))
        .route(
            "/api/stages/{key}/questions",
            post(routes::stages::add_question),
        )
        .route(
            "/api/stages/{key}/objections",
            post(routes::stages::add_objection),
        )
        .route(
            "/api/stages/{key}/resources",
            post(routes::stages::link_resource),
        )
        .route(
            "/api/stages/{key}/resources/{id}",
            delete(routes::stages::unlink_resource),
        )
        // Resources
        .route("/api/resources", get(routes::resources::list_resources))
        .route("/api/resources", post(routes::resources::create_resource))
        .route(
            "/api/resources/{id}",
            delete(routes::resources::delete_resource),
        )
        .route("/api/resources/{id}/tags", put(routes::resources::set_tags))
        // Lists
        .route("/api/lists", get(routes::lists::get_lists))
        .route("/api/lists/{kind}", post(routes::lists::add_value))
        .route(
            "/api/lists/{kind}/{value}",
            delete(routes::lists::remove_value),
        )
        // Search + tags
        .route("/api/search", get(routes::search::search))
        .route("/api/tags/suggest", get(routes::tags::suggest))
        // Analytics
        .route("/api/analytics", get(routes::analytics::list_events))
        .route("/api/analytics", post(routes::analytics::record_event))
        .route("/api/analytics", delete(routes::analytics::clear_events))
        // Config
        .route("/api/config", get(routes::config::get_config))
        // Init
        .route("/api/init", post(routes::init::init_project))
        // Assist
        .route("/api/assist", post(routes::assist::complete))
        .route("/api/assist/key", put(routes::assist::set_key))
        .route("/api/assist/key", delete(routes::assist::clear_key))
        .fallback(get(pages::guide_page))
        .layer(cors)
        .with_state(app_state)
}

/// Start the admin panel server.
pub async fn serve(root: PathBuf, port: u16, open_browser: bool) -> anyhow::Result<()> {
    let addr = format!("127.0.0.1:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    serve_on(root, listener, open_browser).await
}

/// Start the admin panel server on a pre-bound listener.
///
/// Unlike `serve`, this accepts a `TcpListener` that was already bound so the
/// caller can read the actual port before starting (useful when `port = 0` and
/// the OS picks a free port).
pub async fn serve_on(
    root: PathBuf,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(root);

    tracing::info!("Playbook UI listening on http://localhost:{actual_port}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}");
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}
