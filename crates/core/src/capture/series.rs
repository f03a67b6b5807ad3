//! Weekly chart series transform
//!
//! Buckets raw captures into one point per calendar day over the last
//! seven days, oldest first, averaging each day's values.

use chrono::{Datelike, Days, NaiveDate};

use super::Capture;

const WINDOW_DAYS: u64 = 7;

/// One chart point: a day label and that day's average value
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    /// Short weekday label, e.g. "Mon"
    pub label: &'static str,
    /// Average of the day's capture values; `None` when no captures landed
    pub value: Option<f64>,
}

fn weekday_label(date: NaiveDate) -> &'static str {
    match date.weekday() {
        chrono::Weekday::Mon => "Mon",
        chrono::Weekday::Tue => "Tue",
        chrono::Weekday::Wed => "Wed",
        chrono::Weekday::Thu => "Thu",
        chrono::Weekday::Fri => "Fri",
        chrono::Weekday::Sat => "Sat",
        chrono::Weekday::Sun => "Sun",
    }
}

/// Build the 7-day series ending at `today`
///
/// Captures outside the window are ignored. The result always has
/// exactly seven points, oldest first.
pub fn daily_series(captures: &[Capture], today: NaiveDate) -> Vec<DailyPoint> {
    let start = today
        .checked_sub_days(Days::new(WINDOW_DAYS - 1))
        .unwrap_or(today);

    (0..WINDOW_DAYS)
        .map(|offset| {
            let date = start
                .checked_add_days(Days::new(offset))
                .unwrap_or(start);

            let mut sum = 0.0;
            let mut count = 0u32;
            for capture in captures {
                if capture.captured_at.date_naive() == date {
                    sum += capture.value;
                    count += 1;
                }
            }

            DailyPoint {
                date,
                label: weekday_label(date),
                value: (count > 0).then(|| sum / count as f64),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn capture_on(day: u32, value: f64) -> Capture {
        Capture {
            id: day as u64 * 100 + value as u64,
            value,
            captured_at: Utc.with_ymd_and_hms(2026, 8, day, 12, 0, 0).unwrap(),
            capture_type_id: 1,
        }
    }

    #[test]
    fn test_series_has_seven_points_oldest_first() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 20).unwrap();
        let series = daily_series(&[], today);
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2026, 8, 14).unwrap());
        assert_eq!(series[6].date, today);
        assert!(series.iter().all(|point| point.value.is_none()));
    }

    #[test]
    fn test_series_averages_per_day() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 20).unwrap();
        let captures = vec![
            capture_on(20, 20.0),
            capture_on(20, 24.0),
            capture_on(18, 18.5),
        ];
        let series = daily_series(&captures, today);
        assert_eq!(series[6].value, Some(22.0));
        assert_eq!(series[4].value, Some(18.5));
        assert_eq!(series[5].value, None);
    }

    #[test]
    fn test_captures_outside_window_ignored() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 20).unwrap();
        let captures = vec![capture_on(1, 99.0)];
        let series = daily_series(&captures, today);
        assert!(series.iter().all(|point| point.value.is_none()));
    }

    #[test]
    fn test_weekday_labels() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(); // a Thursday
        let series = daily_series(&[], today);
        assert_eq!(series[6].label, "Thu");
        assert_eq!(series[0].label, "Fri");
    }
}
