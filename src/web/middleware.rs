use axum::extract::Request;
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::debug;

use crate::i18n::{locale_from_path, prefixed_path, resolve_locale};

/// Served without a language segment.
const UNLOCALIZED_PATHS: &[&str] = &["/health", "/favicon.ico"];
const UNLOCALIZED_PREFIXES: &[&str] = &["/images/", "/locales/"];

fn with_query(path: &str, query: Option<&str>) -> String {
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{}?{}", path, q),
        None => path.to_string(),
    }
}

/// Where a request has to go before it can be served, if anywhere.
///
/// A path without a supported language segment is moved under the resolved
/// language (`/admin` → `/ru/admin`). A localized path with a trailing slash
/// loses it (`/en/` → `/en`). Everything else is served where it is.
pub fn locale_redirect_target(
    path: &str,
    query: Option<&str>,
    accept_language: Option<&str>,
) -> Option<String> {
    if UNLOCALIZED_PATHS.contains(&path)
        || UNLOCALIZED_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
    {
        return None;
    }

    if locale_from_path(path).is_some() {
        let trimmed = path.trim_end_matches('/');
        return (trimmed.len() < path.len()).then(|| with_query(trimmed, query));
    }

    let language = resolve_locale(path, accept_language);
    Some(prefixed_path(path, query, language))
}

pub async fn locale_redirect(req: Request, next: Next) -> Response {
    let accept_language = req
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());

    match locale_redirect_target(req.uri().path(), req.uri().query(), accept_language) {
        Some(target) => {
            debug!("Redirecting {} to {}", req.uri(), target);
            Redirect::temporary(&target).into_response()
        }
        None => next.run(req).await,
    }
}
