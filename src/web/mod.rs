//! HTTP surface: routing, request handlers and page templates.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::SiteError;
use crate::i18n::TranslationCatalog;
use crate::rsvp::RsvpDesk;

pub mod handlers;
pub mod middleware;
pub mod pages;

/// Everything a handler needs. Built once at startup, read-only afterwards.
pub struct AppState {
    pub catalog: TranslationCatalog,
    pub config: Config,
    pub rsvp: RsvpDesk,
}

impl AppState {
    pub fn new(catalog: TranslationCatalog, config: Config) -> Self {
        let rsvp = RsvpDesk::new(config.rsvp_delay);
        Self {
            catalog,
            config,
            rsvp,
        }
    }
}

/// Build the full app: routes, request tracing and optional static images.
///
/// Every request passes the locale redirect first, so
/// `/` and `/admin` land on `/{lang}` and `/{lang}/admin`.
pub fn build_app(state: Arc<AppState>) -> Router {
    let assets_dir = state.config.assets_dir.clone();

    let mut app = Router::new()
        .route("/health", get(handlers::health))
        .route("/locales/:lang/content.json", get(handlers::locale_bundle))
        .route("/:lang", get(handlers::home))
        .route("/:lang/rsvp", axum::routing::post(handlers::rsvp))
        .route("/:lang/admin", get(handlers::admin).post(handlers::admin_links))
        .route("/:lang/admin/links.csv", axum::routing::post(handlers::admin_csv))
        .route("/:lang/admin/qr.svg", get(handlers::admin_qr))
        .fallback(not_found)
        .with_state(state);

    if let Some(dir) = assets_dir {
        app = app.nest_service("/images", ServeDir::new(dir));
    }

    app.layer(axum::middleware::from_fn(middleware::locale_redirect))
        .layer(TraceLayer::new_for_http())
}

async fn not_found(uri: axum::http::Uri) -> SiteError {
    SiteError::NotFound(uri.path().to_string())
}
