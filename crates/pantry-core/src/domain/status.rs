//! Expiry Status
//!
//! Coarse urgency tier for the colour badge on each group.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// How already-expired dates are classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ExpiryPolicy {
    /// Past dates are just `Urgent`
    #[default]
    FoldIntoUrgent,
    /// Past dates get their own `Expired` tier
    SeparateExpired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryStatus {
    Expired,
    /// Three days or fewer
    Urgent,
    /// Four to seven days
    Soon,
    Ok,
}

impl ExpiryStatus {
    pub fn classify(days: i64, policy: ExpiryPolicy) -> Self {
        if days < 0 && policy == ExpiryPolicy::SeparateExpired {
            return ExpiryStatus::Expired;
        }
        match days {
            d if d <= 3 => ExpiryStatus::Urgent,
            d if d <= 7 => ExpiryStatus::Soon,
            _ => ExpiryStatus::Ok,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "#8e44ad",
            ExpiryStatus::Urgent => "#ff4d4d",
            ExpiryStatus::Soon => "#ffa500",
            ExpiryStatus::Ok => "#2ecc71",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "status-expired",
            ExpiryStatus::Urgent => "status-urgent",
            ExpiryStatus::Soon => "status-soon",
            ExpiryStatus::Ok => "status-ok",
        }
    }
}

/// Whole days from `now` until midnight UTC of `expires_on`, rounded up
pub fn days_until(expires_on: NaiveDate, now: DateTime<Utc>) -> i64 {
    let target = expires_on.and_time(chrono::NaiveTime::MIN).and_utc();
    let diff = (target - now).num_milliseconds();

    // Integer division truncates toward zero, which already is the
    // ceiling for negative differences.
    let days = diff / MILLIS_PER_DAY;
    if diff % MILLIS_PER_DAY > 0 {
        days + 1
    } else {
        days
    }
}

pub fn status_for(expires_on: NaiveDate, now: DateTime<Utc>, policy: ExpiryPolicy) -> ExpiryStatus {
    ExpiryStatus::classify(days_until(expires_on, now), policy)
}

/// Status against the wall clock; recomputed on every render
pub fn status_now(expires_on: NaiveDate, policy: ExpiryPolicy) -> ExpiryStatus {
    status_for(expires_on, Utc::now(), policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn midnight(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_days_until_whole_days() {
        let now = midnight(2024, 1, 7);
        assert_eq!(days_until(date("2024-01-10"), now), 3);
        assert_eq!(days_until(date("2024-01-07"), now), 0);
        assert_eq!(days_until(date("2024-01-05"), now), -2);
    }

    #[test]
    fn test_days_until_rounds_up() {
        let now = Utc.with_ymd_and_hms(2024, 1, 6, 12, 0, 0).unwrap();
        assert_eq!(days_until(date("2024-01-10"), now), 4);
        // Half a day past midnight of the expiry date rounds up to zero
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        assert_eq!(days_until(date("2024-01-10"), now), 0);
        let now = Utc.with_ymd_and_hms(2024, 1, 11, 12, 0, 0).unwrap();
        assert_eq!(days_until(date("2024-01-10"), now), -1);
    }

    #[test]
    fn test_tier_boundaries() {
        let now = midnight(2024, 1, 7);
        let policy = ExpiryPolicy::default();
        assert_eq!(status_for(date("2024-01-10"), now, policy), ExpiryStatus::Urgent);
        assert_eq!(status_for(date("2024-01-11"), now, policy), ExpiryStatus::Soon);
        assert_eq!(status_for(date("2024-01-14"), now, policy), ExpiryStatus::Soon);
        assert_eq!(status_for(date("2024-01-15"), now, policy), ExpiryStatus::Ok);
    }

    #[test]
    fn test_past_date_folds_into_urgent() {
        let now = midnight(2024, 1, 7);
        assert_eq!(
            status_for(date("2024-01-01"), now, ExpiryPolicy::FoldIntoUrgent),
            ExpiryStatus::Urgent
        );
    }

    #[test]
    fn test_past_date_separate_expired() {
        let now = midnight(2024, 1, 7);
        assert_eq!(
            status_for(date("2024-01-01"), now, ExpiryPolicy::SeparateExpired),
            ExpiryStatus::Expired
        );
        // Today is not expired yet
        assert_eq!(
            status_for(date("2024-01-07"), now, ExpiryPolicy::SeparateExpired),
            ExpiryStatus::Urgent
        );
    }

    #[test]
    fn test_default_policy_folds() {
        assert_eq!(ExpiryPolicy::default(), ExpiryPolicy::FoldIntoUrgent);
        assert_eq!(ExpiryStatus::classify(-30, ExpiryPolicy::default()), ExpiryStatus::Urgent);
    }

    #[test]
    fn test_colors() {
        assert_eq!(ExpiryStatus::Urgent.color(), "#ff4d4d");
        assert_eq!(ExpiryStatus::Soon.color(), "#ffa500");
        assert_eq!(ExpiryStatus::Ok.color(), "#2ecc71");
        assert_eq!(ExpiryStatus::Expired.color(), "#8e44ad");
    }
}
