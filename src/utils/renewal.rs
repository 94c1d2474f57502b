use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Days-remaining window treated as "expiring soon". Inclusive on both
/// ends: a renewal due today is still ExpiringSoon, not Expired.
pub const EXPIRING_SOON_WINDOW_DAYS: i64 = 30;

/// Date entry formats accepted from request payloads, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y"];

/// Read-time classification of a renewal date. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStatus {
    Unknown,
    Active,
    ExpiringSoon,
    Expired,
}

impl std::fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LifecycleStatus::Unknown => write!(f, "Unknown"),
            LifecycleStatus::Active => write!(f, "Active"),
            LifecycleStatus::ExpiringSoon => write!(f, "Expiring Soon"),
            LifecycleStatus::Expired => write!(f, "Expired"),
        }
    }
}

/// Parse a date from any of the accepted entry formats. Blank or
/// unrecognized input yields `None` rather than an error.
pub fn parse_flexible_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Advance a date by whole calendar months, clamping to the last valid
/// day of the target month (Jan 31 + 1 month = Feb 28/29, not Mar 2/3).
/// Negative month counts move backwards. `None` only on chrono range
/// overflow.
pub fn add_calendar_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    }
}

/// Renewal date for a subscription: the activation date advanced by the
/// validity period. An absent, blank, or unparseable activation date
/// yields `None`; callers surface that as "unknown", not as a failure.
/// Non-positive validity is passed through unvalidated and may produce a
/// renewal date before activation.
pub fn compute_renewal_date(
    activation_date: Option<&str>,
    validity_months: i32,
) -> Option<NaiveDate> {
    let date = parse_flexible_date(activation_date?)?;
    add_calendar_months(date, validity_months)
}

/// Classify a renewal date against `today`. `today` is an explicit
/// parameter so classification is deterministic under test; production
/// callers pass the current local date.
pub fn classify_status(renewal_date: Option<NaiveDate>, today: NaiveDate) -> LifecycleStatus {
    let Some(renewal) = renewal_date else {
        return LifecycleStatus::Unknown;
    };
    let days_left = (renewal - today).num_days();
    if days_left < 0 {
        LifecycleStatus::Expired
    } else if days_left <= EXPIRING_SOON_WINDOW_DAYS {
        LifecycleStatus::ExpiringSoon
    } else {
        LifecycleStatus::Active
    }
}

/// String-level variant of [`classify_status`]: anything that does not
/// parse as a date degrades to `Unknown`.
pub fn classify_status_str(renewal_date: Option<&str>, today: NaiveDate) -> LifecycleStatus {
    classify_status(renewal_date.and_then(parse_flexible_date), today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_add_calendar_months_plain() {
        assert_eq!(add_calendar_months(d(2024, 1, 15), 12), Some(d(2025, 1, 15)));
        assert_eq!(add_calendar_months(d(2023, 6, 1), 6), Some(d(2023, 12, 1)));
        assert_eq!(add_calendar_months(d(2024, 11, 30), 3), Some(d(2025, 2, 28)));
        assert_eq!(add_calendar_months(d(2024, 5, 10), 0), Some(d(2024, 5, 10)));
    }

    #[test]
    fn test_add_calendar_months_clamps_to_month_end() {
        // leap year February keeps the 29th
        assert_eq!(add_calendar_months(d(2024, 1, 31), 1), Some(d(2024, 2, 29)));
        // non-leap February clamps to the 28th
        assert_eq!(add_calendar_months(d(2025, 1, 31), 1), Some(d(2025, 2, 28)));
        assert_eq!(add_calendar_months(d(2024, 8, 31), 1), Some(d(2024, 9, 30)));
    }

    #[test]
    fn test_add_calendar_months_negative() {
        assert_eq!(add_calendar_months(d(2024, 3, 31), -1), Some(d(2024, 2, 29)));
        assert_eq!(add_calendar_months(d(2024, 6, 15), -6), Some(d(2023, 12, 15)));
    }

    #[test]
    fn test_parse_flexible_date() {
        assert_eq!(parse_flexible_date("2024-01-15"), Some(d(2024, 1, 15)));
        assert_eq!(parse_flexible_date("2024/01/15"), Some(d(2024, 1, 15)));
        assert_eq!(parse_flexible_date("15-01-2024"), Some(d(2024, 1, 15)));
        assert_eq!(parse_flexible_date("  2024-01-15  "), Some(d(2024, 1, 15)));
        assert_eq!(parse_flexible_date(""), None);
        assert_eq!(parse_flexible_date("   "), None);
        assert_eq!(parse_flexible_date("not a date"), None);
        assert_eq!(parse_flexible_date("2024-13-01"), None);
    }

    #[test]
    fn test_compute_renewal_date() {
        assert_eq!(
            compute_renewal_date(Some("2024-01-15"), 12),
            Some(d(2025, 1, 15))
        );
        assert_eq!(
            compute_renewal_date(Some("2023-06-01"), 6),
            Some(d(2023, 12, 1))
        );
        // month-end clamp flows through from add_calendar_months
        assert_eq!(
            compute_renewal_date(Some("2024-01-31"), 1),
            Some(d(2024, 2, 29))
        );
    }

    #[test]
    fn test_compute_renewal_date_absent_input() {
        assert_eq!(compute_renewal_date(None, 12), None);
        assert_eq!(compute_renewal_date(Some(""), 12), None);
        assert_eq!(compute_renewal_date(Some("garbage"), 12), None);
    }

    #[test]
    fn test_compute_renewal_date_non_positive_validity() {
        // accepted unvalidated: zero and negative validity just move the date
        assert_eq!(
            compute_renewal_date(Some("2024-01-15"), 0),
            Some(d(2024, 1, 15))
        );
        assert_eq!(
            compute_renewal_date(Some("2024-01-15"), -2),
            Some(d(2023, 11, 15))
        );
    }

    #[test]
    fn test_classify_boundaries() {
        let today = d(2025, 3, 10);
        // due today is the boundary: still expiring, not expired
        assert_eq!(
            classify_status(Some(today), today),
            LifecycleStatus::ExpiringSoon
        );
        assert_eq!(
            classify_status(Some(today - Duration::days(1)), today),
            LifecycleStatus::Expired
        );
        // 30 days out is inclusive, 31 is not
        assert_eq!(
            classify_status(Some(today + Duration::days(30)), today),
            LifecycleStatus::ExpiringSoon
        );
        assert_eq!(
            classify_status(Some(today + Duration::days(31)), today),
            LifecycleStatus::Active
        );
    }

    #[test]
    fn test_classify_absent_is_unknown() {
        let today = d(2025, 3, 10);
        assert_eq!(classify_status(None, today), LifecycleStatus::Unknown);
        assert_eq!(classify_status_str(None, today), LifecycleStatus::Unknown);
        assert_eq!(classify_status_str(Some(""), today), LifecycleStatus::Unknown);
        assert_eq!(
            classify_status_str(Some("NaT"), today),
            LifecycleStatus::Unknown
        );
    }

    #[test]
    fn test_activation_to_status_end_to_end() {
        // activated 2024-01-15 for 12 months, checked on 2025-01-01:
        // 14 days left -> ExpiringSoon
        let renewal = compute_renewal_date(Some("2024-01-15"), 12);
        assert_eq!(renewal, Some(d(2025, 1, 15)));
        assert_eq!(
            classify_status(renewal, d(2025, 1, 1)),
            LifecycleStatus::ExpiringSoon
        );

        // activated 2023-06-01 for 6 months, checked on 2024-01-01:
        // 31 days past -> Expired
        let renewal = compute_renewal_date(Some("2023-06-01"), 6);
        assert_eq!(renewal, Some(d(2023, 12, 1)));
        assert_eq!(
            classify_status(renewal, d(2024, 1, 1)),
            LifecycleStatus::Expired
        );
    }
}
