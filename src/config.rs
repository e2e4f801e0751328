use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use std::path::PathBuf;
use std::time::Duration;

/// Ceremony start at the venue, Moldova summer time.
const DEFAULT_WEDDING_DATETIME: &str = "2026-05-30T17:00:00+03:00";

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    /// Origin used for absolute invitation links. When unset, links are built
    /// from the request's Host header.
    pub site_url: Option<String>,

    // Content
    pub locales_dir: Option<PathBuf>,
    pub assets_dir: Option<PathBuf>,

    // RSVP
    pub rsvp_delay: Duration,

    pub wedding: WeddingDetails,
}

/// Facts about the day that are the same in every language.
#[derive(Debug, Clone)]
pub struct WeddingDetails {
    pub couple_names: String,
    /// Ceremony start, with the venue's UTC offset.
    pub datetime: DateTime<FixedOffset>,
}

impl Default for WeddingDetails {
    fn default() -> Self {
        Self {
            couple_names: "Ion & Tatiana".to_string(),
            datetime: default_wedding_datetime(),
        }
    }
}

fn default_wedding_datetime() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(DEFAULT_WEDDING_DATETIME).unwrap_or_default()
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = WeddingDetails::default();

        let datetime = match non_empty_var("WEDDING_DATETIME") {
            Some(raw) => DateTime::parse_from_rfc3339(raw.trim()).with_context(|| {
                format!(
                    "WEDDING_DATETIME must be RFC 3339 with the venue offset, like {}, got '{}'",
                    DEFAULT_WEDDING_DATETIME, raw
                )
            })?,
            None => defaults.datetime,
        };

        Ok(Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            site_url: non_empty_var("SITE_URL").map(|u| u.trim_end_matches('/').to_string()),

            // Content
            locales_dir: non_empty_var("LOCALES_DIR").map(PathBuf::from),
            assets_dir: non_empty_var("ASSETS_DIR").map(PathBuf::from),

            // RSVP
            rsvp_delay: Duration::from_millis(
                std::env::var("RSVP_DELAY_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(1500),
            ),

            wedding: WeddingDetails {
                couple_names: non_empty_var("COUPLE_NAMES").unwrap_or(defaults.couple_names),
                datetime,
            },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            site_url: None,
            locales_dir: None,
            assets_dir: None,
            rsvp_delay: Duration::from_millis(1500),
            wedding: WeddingDetails::default(),
        }
    }
}
