use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::{debug, error};

use crate::web::pages::not_found_page;

/// Errors a request handler can end with.
#[derive(Debug, Error)]
pub enum SiteError {
    /// First path segment is not a published language.
    #[error("Unsupported language: '{0}'")]
    UnsupportedLanguage(String),

    #[error("No such page: {0}")]
    NotFound(String),

    #[error("Missing '{0}' query parameter")]
    MissingParameter(&'static str),

    #[error("Cannot encode QR code: {0}")]
    Qr(#[from] qrcode::types::QrError),

    #[error("Cannot write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to render page: {0}")]
    Render(String),
}

impl From<horrorshow::Error> for SiteError {
    fn from(e: horrorshow::Error) -> Self {
        SiteError::Render(e.to_string())
    }
}

impl SiteError {
    pub fn status(&self) -> StatusCode {
        match self {
            SiteError::UnsupportedLanguage(_) | SiteError::NotFound(_) => StatusCode::NOT_FOUND,
            SiteError::MissingParameter(_) | SiteError::Qr(_) => StatusCode::BAD_REQUEST,
            SiteError::Csv(_) | SiteError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status == StatusCode::NOT_FOUND {
            debug!("{}", self);
            return (status, Html(not_found_page())).into_response();
        }

        if status.is_server_error() {
            error!("{}", self);
        } else {
            debug!("{}", self);
        }
        (status, self.to_string()).into_response()
    }
}

pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            SiteError::UnsupportedLanguage("de".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            SiteError::MissingParameter("guests").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            SiteError::Csv(csv::Error::from(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk full"
            )))
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            SiteError::Render("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_renders_html() {
        let response = SiteError::UnsupportedLanguage("de".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("text/html")));
    }
}
