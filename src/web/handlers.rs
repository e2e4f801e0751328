use std::sync::Arc;

use axum::extract::{Path, RawQuery, State};
use axum::http::{header, HeaderMap};
use axum::response::{Html, IntoResponse};
use axum::Form;
use horrorshow::Template;
use serde::Deserialize;
use tracing::info;

use super::pages::{AdminPage, HomePage, Layout, RsvpNotice};
use super::AppState;
use crate::countdown::Countdown;
use crate::error::{SiteError, SiteResult};
use crate::guests::{guest_names, guest_url, guest_values};
use crate::i18n::Language;
use crate::invitations::{generate_links, links_to_csv, qr_svg, CSV_FILENAME};
use crate::rsvp::{RsvpForm, RsvpOutcome};

/// Body of the admin forms: one guest name per line.
#[derive(Debug, Default, Deserialize)]
pub struct NamesForm {
    #[serde(default)]
    pub names: String,
}

fn parse_language(code: &str) -> SiteResult<Language> {
    Language::from_code(code).map_err(|_| SiteError::UnsupportedLanguage(code.to_string()))
}

/// Scheme and host that absolute invitation links start with.
fn request_origin(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(site_url) = &state.config.site_url {
        return site_url.clone();
    }

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| state.config.bind_addr());
    format!("http://{}", host)
}

fn render_home(
    state: &AppState,
    language: Language,
    query: Option<&str>,
    rsvp_notice: Option<RsvpNotice>,
) -> SiteResult<Html<String>> {
    let content = state.catalog.get(language).content();
    let names = guest_names(query);
    let countdown = Countdown::until(chrono::Utc::now(), state.config.wedding.datetime);
    let path = format!("/{}", language.code());

    let page = Layout {
        language,
        content,
        path: &path,
        query,
        body: HomePage {
            language,
            content,
            guest_names: names.as_deref(),
            countdown,
            rsvp_notice,
            query,
        },
    }
    .into_string()?;

    Ok(Html(page))
}

pub async fn home(
    State(state): State<Arc<AppState>>,
    Path(lang): Path<String>,
    RawQuery(query): RawQuery,
) -> SiteResult<Html<String>> {
    let language = parse_language(&lang)?;
    render_home(&state, language, query.as_deref(), None)
}

pub async fn rsvp(
    State(state): State<Arc<AppState>>,
    Path(lang): Path<String>,
    RawQuery(query): RawQuery,
    Form(form): Form<RsvpForm>,
) -> SiteResult<Html<String>> {
    let language = parse_language(&lang)?;

    let notice = match state.rsvp.submit(&form).await {
        RsvpOutcome::Accepted => RsvpNotice::Success,
        RsvpOutcome::Rejected(_) => RsvpNotice::Error,
    };

    render_home(&state, language, query.as_deref(), Some(notice))
}

pub async fn admin(
    State(state): State<Arc<AppState>>,
    Path(lang): Path<String>,
) -> SiteResult<Html<String>> {
    let language = parse_language(&lang)?;

    let page = AdminPage {
        language,
        couple_names: &state.config.wedding.couple_names,
        names_text: "",
        links: &[],
    }
    .into_string()?;

    Ok(Html(page))
}

pub async fn admin_links(
    State(state): State<Arc<AppState>>,
    Path(lang): Path<String>,
    headers: HeaderMap,
    Form(form): Form<NamesForm>,
) -> SiteResult<Html<String>> {
    let language = parse_language(&lang)?;
    let links = generate_links(&request_origin(&state, &headers), language, &form.names);
    info!("Generated {} invitation link(s) for '{}'", links.len(), language);

    let page = AdminPage {
        language,
        couple_names: &state.config.wedding.couple_names,
        names_text: &form.names,
        links: &links,
    }
    .into_string()?;

    Ok(Html(page))
}

pub async fn admin_csv(
    State(state): State<Arc<AppState>>,
    Path(lang): Path<String>,
    headers: HeaderMap,
    Form(form): Form<NamesForm>,
) -> SiteResult<impl IntoResponse> {
    let language = parse_language(&lang)?;
    let links = generate_links(&request_origin(&state, &headers), language, &form.names);
    let csv = links_to_csv(&links)?;
    info!("Exporting {} invitation link(s) as CSV", links.len());

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", CSV_FILENAME),
            ),
        ],
        csv,
    ))
}

/// `GET /{lang}/admin/qr.svg?guests=...`: QR code for the invitation link
/// naming the same guests.
pub async fn admin_qr(
    State(state): State<Arc<AppState>>,
    Path(lang): Path<String>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> SiteResult<impl IntoResponse> {
    let language = parse_language(&lang)?;

    let guests = guest_values(query.as_deref());
    if guests.iter().all(|g| g.is_empty()) {
        return Err(SiteError::MissingParameter("guests"));
    }

    let link = format!(
        "{}{}",
        request_origin(&state, &headers),
        guest_url(&format!("/{}", language.code()), &guests)
    );
    let svg = qr_svg(&link)?;

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}

/// Raw translation bundle, for clients that render on their own.
pub async fn locale_bundle(
    State(state): State<Arc<AppState>>,
    Path(lang): Path<String>,
) -> impl IntoResponse {
    let bundle = state.catalog.get_by_code(&lang);
    (
        [(header::CONTENT_TYPE, "application/json")],
        bundle.raw().to_string(),
    )
}

pub async fn health() -> &'static str {
    "OK"
}
