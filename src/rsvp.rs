//! RSVP submissions.
//!
//! Submissions are not stored anywhere. The desk waits a short, configurable
//! delay to mimic a network round trip, checks the form and logs it.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

pub const MAX_PARTY_SIZE: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attending {
    #[default]
    Yes,
    No,
}

/// Fields posted by the RSVP form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RsvpForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub attending: Attending,
    /// Party size; only sent when attending.
    #[serde(default)]
    pub guests: Option<String>,
    #[serde(default)]
    pub dietary: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsvpError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
    #[error("'{0}' is not an email address")]
    InvalidEmail(String),
    #[error("party size must be between 1 and 5, got '{0}'")]
    InvalidPartySize(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RsvpOutcome {
    Accepted,
    Rejected(RsvpError),
}

impl RsvpForm {
    /// Number of people attending, 0 for a decline.
    pub fn party_size(&self) -> Result<u8, RsvpError> {
        if self.attending == Attending::No {
            return Ok(0);
        }

        match self.guests.as_deref().map(str::trim) {
            None | Some("") => Ok(1),
            Some(raw) => raw
                .parse::<u8>()
                .ok()
                .filter(|n| (1..=MAX_PARTY_SIZE).contains(n))
                .ok_or_else(|| RsvpError::InvalidPartySize(raw.to_string())),
        }
    }

    pub fn validate(&self) -> Result<(), RsvpError> {
        if self.name.trim().is_empty() {
            return Err(RsvpError::MissingName);
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(RsvpError::MissingEmail);
        }
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err(RsvpError::InvalidEmail(email.to_string()));
        }

        self.party_size().map(|_| ())
    }
}

/// Accepts RSVP forms.
#[derive(Debug, Clone)]
pub struct RsvpDesk {
    delay: Duration,
}

impl RsvpDesk {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn submit(&self, form: &RsvpForm) -> RsvpOutcome {
        tokio::time::sleep(self.delay).await;

        if let Err(e) = form.validate() {
            warn!("Rejected RSVP from '{}': {}", form.name.trim(), e);
            return RsvpOutcome::Rejected(e);
        }

        info!(
            name = %form.name.trim(),
            email = %form.email.trim(),
            attending = ?form.attending,
            party_size = form.party_size().unwrap_or(1),
            dietary = %form.dietary.trim(),
            has_message = !form.message.trim().is_empty(),
            "RSVP received"
        );
        RsvpOutcome::Accepted
    }
}

impl Default for RsvpDesk {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str) -> RsvpForm {
        RsvpForm {
            name: name.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_valid_minimal_form() {
        let f = form("Ana", "ana@example.com");
        assert_eq!(f.validate(), Ok(()));
        assert_eq!(f.party_size(), Ok(1));
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(form("  ", "a@b").validate(), Err(RsvpError::MissingName));
        assert_eq!(form("Ana", "").validate(), Err(RsvpError::MissingEmail));
    }

    #[test]
    fn test_invalid_email() {
        assert!(matches!(
            form("Ana", "ana.example.com").validate(),
            Err(RsvpError::InvalidEmail(_))
        ));
        assert!(matches!(
            form("Ana", "ana@").validate(),
            Err(RsvpError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_party_size_bounds() {
        let mut f = form("Ana", "ana@example.com");

        f.guests = Some("5".to_string());
        assert_eq!(f.party_size(), Ok(5));

        f.guests = Some("6".to_string());
        assert_eq!(f.party_size(), Err(RsvpError::InvalidPartySize("6".into())));

        f.guests = Some("0".to_string());
        assert!(f.validate().is_err());

        f.guests = Some("two".to_string());
        assert!(f.validate().is_err());
    }

    #[test]
    fn test_decline_ignores_party_size() {
        let mut f = form("Ana", "ana@example.com");
        f.attending = Attending::No;
        f.guests = Some("99".to_string());
        assert_eq!(f.party_size(), Ok(0));
        assert_eq!(f.validate(), Ok(()));
    }

    // ==================== Desk Tests ====================

    #[tokio::test]
    async fn test_desk_accepts_valid_form() {
        let desk = RsvpDesk::new(Duration::ZERO);
        assert_eq!(
            desk.submit(&form("Ana", "ana@example.com")).await,
            RsvpOutcome::Accepted
        );
    }

    #[tokio::test]
    async fn test_desk_rejects_invalid_form() {
        let desk = RsvpDesk::new(Duration::ZERO);
        assert_eq!(
            desk.submit(&form("", "ana@example.com")).await,
            RsvpOutcome::Rejected(RsvpError::MissingName)
        );
    }

    #[tokio::test]
    async fn test_desk_waits_for_delay() {
        let desk = RsvpDesk::new(Duration::from_millis(30));
        let start = tokio::time::Instant::now();
        desk.submit(&form("Ana", "ana@example.com")).await;
        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
