use std::sync::LazyLock;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::{Captures, Regex};

/// `H[:MM] [AM|PM] - H[:MM] [AM|PM]`, case-insensitive.
static TIME_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{1,2}):?(\d{2})?\s*(AM|PM)?\s*-\s*(\d{1,2}):?(\d{2})?\s*(AM|PM)?")
        .expect("time range pattern is valid")
});

/// A parsed window anchored to a calendar date, in local (IST) time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Parses a free-text range such as `"7:30 AM - 9:00 AM"` on `date`.
///
/// Minutes default to `00`. Without AM/PM the hour is read as 24-hour.
/// An end earlier than the start is taken to be on the following day.
/// Returns None for anything it cannot read; bad data is never an error.
pub fn parse_time_range(text: &str, date: NaiveDate) -> Option<TimeWindow> {
    let caps = TIME_RANGE.captures(text)?;
    let start = clock_time(&caps, 1, 2, 3)?;
    let end = clock_time(&caps, 4, 5, 6)?;

    let start = date.and_time(start);
    let mut end = date.and_time(end);
    if end == start {
        return None;
    }
    if end < start {
        end += Duration::days(1);
    }
    Some(TimeWindow { start, end })
}

fn clock_time(
    caps: &Captures<'_>,
    hour: usize,
    minute: usize,
    meridiem: usize,
) -> Option<NaiveTime> {
    let mut hour: u32 = caps.get(hour)?.as_str().parse().ok()?;
    let minute: u32 = match caps.get(minute) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    let meridiem = caps.get(meridiem).map(|m| m.as_str().to_ascii_uppercase());
    match meridiem.as_deref() {
        Some("PM") if hour != 12 => hour += 12,
        Some("AM") if hour == 12 => hour = 0,
        _ => {}
    }

    if hour > 23 || minute > 59 {
        return None;
    }
    NaiveTime::from_hms_opt(hour, minute, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 15).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        date().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_morning_range() {
        let window = parse_time_range("7:30 AM - 9:00 AM", date()).unwrap();
        assert_eq!(window.start, at(7, 30));
        assert_eq!(window.end, at(9, 0));
    }

    #[test]
    fn test_range_crossing_noon() {
        let window = parse_time_range("10:30 AM - 12:00 PM", date()).unwrap();
        assert_eq!(window.start, at(10, 30));
        assert_eq!(window.end, at(12, 0));

        let window = parse_time_range("11:48 AM - 12:36 PM", date()).unwrap();
        assert_eq!(window.start, at(11, 48));
        assert_eq!(window.end, at(12, 36));
    }

    #[test]
    fn test_afternoon_range() {
        let window = parse_time_range("1:30 PM - 3:00 PM", date()).unwrap();
        assert_eq!(window.start, at(13, 30));
        assert_eq!(window.end, at(15, 0));
    }

    #[test]
    fn test_lowercase_and_missing_minutes() {
        let window = parse_time_range("3 pm - 4:30pm", date()).unwrap();
        assert_eq!(window.start, at(15, 0));
        assert_eq!(window.end, at(16, 30));
    }

    #[test]
    fn test_twenty_four_hour_without_meridiem() {
        let window = parse_time_range("13:30 - 15:00", date()).unwrap();
        assert_eq!(window.start, at(13, 30));
        assert_eq!(window.end, at(15, 0));
    }

    #[test]
    fn test_midnight_am() {
        let window = parse_time_range("12:00 AM - 1:30 AM", date()).unwrap();
        assert_eq!(window.start, at(0, 0));
        assert_eq!(window.end, at(1, 30));
    }

    #[test]
    fn test_end_before_start_rolls_over() {
        let window = parse_time_range("11:00 PM - 1:00 AM", date()).unwrap();
        assert_eq!(window.start, at(23, 0));
        assert_eq!(
            window.end,
            NaiveDate::from_ymd_opt(2025, 9, 16)
                .unwrap()
                .and_hms_opt(1, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_unparseable_ranges() {
        assert_eq!(parse_time_range("unknown", date()), None);
        assert_eq!(parse_time_range("", date()), None);
        assert_eq!(parse_time_range("7:30 AM", date()), None);
        assert_eq!(parse_time_range("25:00 - 26:00", date()), None);
        assert_eq!(parse_time_range("7:75 AM - 9:00 AM", date()), None);
        assert_eq!(parse_time_range("9:00 AM - 9:00 AM", date()), None);
    }
}
