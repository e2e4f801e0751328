//! Time left until the ceremony, shown in the hero banner.

use chrono::{DateTime, FixedOffset, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Remaining time from `now` to `target`, or `None` once `target` is
    /// reached. `target` carries the venue's offset, so the server's own time
    /// zone does not matter.
    pub fn until(now: DateTime<Utc>, target: DateTime<FixedOffset>) -> Option<Self> {
        let total = target.signed_duration_since(now).num_seconds();
        if total <= 0 {
            return None;
        }

        Some(Self {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
        })
    }
}
