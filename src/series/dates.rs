//! Date Series Generator
//!
//! Produces ordered sequences of ISO 8601 calendar dates ("YYYY-MM-DD"),
//! generated backward from an anchor date for a given day count.

use chrono::{Duration, NaiveDate, Utc};

/// Generate `days + 1` consecutive ISO date strings ending today
///
/// The first entry is `today - days`, the last is today, and each
/// consecutive pair differs by exactly one calendar day. Always succeeds
/// for non-negative input; pure apart from reading the current date.
pub fn generate_date_series(days: u32) -> Vec<String> {
    date_series_ending(Utc::now().date_naive(), days)
}

/// Generate `days + 1` consecutive ISO date strings ending at `end`
pub fn date_series_ending(end: NaiveDate, days: u32) -> Vec<String> {
    (0..=days)
        .map(|i| {
            (end - Duration::days(i64::from(days - i)))
                .format("%Y-%m-%d")
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_series_length() {
        assert_eq!(date_series_ending(anchor(), 0).len(), 1);
        assert_eq!(date_series_ending(anchor(), 90).len(), 91);
    }

    #[test]
    fn test_series_endpoints() {
        let series = date_series_ending(anchor(), 90);
        assert_eq!(series.first().unwrap(), "2023-12-16");
        assert_eq!(series.last().unwrap(), "2024-03-15");
    }

    #[test]
    fn test_series_strictly_increasing_by_one_day() {
        let series = date_series_ending(anchor(), 45);
        for pair in series.windows(2) {
            let a = NaiveDate::parse_from_str(&pair[0], "%Y-%m-%d").unwrap();
            let b = NaiveDate::parse_from_str(&pair[1], "%Y-%m-%d").unwrap();
            assert_eq!(b - a, Duration::days(1));
        }
    }

    #[test]
    fn test_series_crosses_month_boundary() {
        let end = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let series = date_series_ending(end, 3);
        assert_eq!(series, vec!["2024-02-28", "2024-02-29", "2024-03-01", "2024-03-02"]);
    }

    #[test]
    fn test_generate_ends_today() {
        let series = generate_date_series(7);
        assert_eq!(series.len(), 8);
        assert_eq!(
            series.last().unwrap(),
            &Utc::now().date_naive().format("%Y-%m-%d").to_string()
        );
    }
}
