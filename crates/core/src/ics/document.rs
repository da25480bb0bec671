use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use icalendar::{Calendar, Component, Event, Property};
use rand::Rng;

use crate::almanac::DailyAlmanacEntry;

use super::event::{day_events, AlmanacEvent, EventTiming};
use super::options::IcsOptions;
use super::timezone::{TIMEZONE_ID, VTIMEZONE};
use super::uid::generate_uid;

pub const PRODUCT_ID: &str = "-//Tamil Jyotish//Panchangam Calendar//EN";
pub const CALENDAR_DESCRIPTION: &str =
    "Tamil Panchangam Calendar with auspicious and inauspicious times";

const CALENDAR_END: &str = "END:VCALENDAR\r\n";

/// Renders almanac entries as an iCalendar document.
///
/// `now` stamps every event and seeds its UID together with `rng`; with
/// both fixed the output is fully deterministic.
pub fn render_calendar<R: Rng + ?Sized>(
    entries: &[DailyAlmanacEntry],
    options: &IcsOptions,
    now: DateTime<Utc>,
    rng: &mut R,
) -> String {
    let mut calendar = Calendar::empty();
    calendar
        .append_property(Property::new("VERSION", "2.0"))
        .append_property(Property::new("PRODID", PRODUCT_ID))
        .append_property(Property::new("CALSCALE", "GREGORIAN"))
        .append_property(Property::new("METHOD", "PUBLISH"))
        .append_property(Property::new("X-WR-CALNAME", &options.calendar_name))
        .append_property(Property::new("X-WR-CALDESC", CALENDAR_DESCRIPTION))
        .append_property(Property::new("X-WR-TIMEZONE", TIMEZONE_ID));

    // The VTIMEZONE block goes between the header and the first event.
    let header_len = calendar.to_string().trim_end_matches(CALENDAR_END).len();

    for entry in entries {
        for event in day_events(entry, options) {
            calendar.push(to_vevent(&event, now, &generate_uid(now, rng)));
        }
    }

    let mut doc = calendar.to_string();
    doc.insert_str(header_len, &timezone_block());
    doc
}

/// Renders with the current time and thread-local randomness.
pub fn generate_calendar(entries: &[DailyAlmanacEntry], options: &IcsOptions) -> String {
    render_calendar(entries, options, Utc::now(), &mut rand::rng())
}

fn to_vevent(event: &AlmanacEvent, now: DateTime<Utc>, uid: &str) -> Event {
    let (start, end) = match event.timing {
        // DTEND is exclusive for all-day events.
        EventTiming::AllDay(date) => (
            date_property("DTSTART", date),
            date_property("DTEND", date + Duration::days(1)),
        ),
        EventTiming::Timed(window) => (
            local_property("DTSTART", window.start),
            local_property("DTEND", window.end),
        ),
    };

    Event::new()
        .uid(uid)
        .timestamp(now)
        .summary(&event.summary)
        .description(&event.description)
        .add_property("CATEGORIES", event.category.as_str())
        .append_property(start)
        .append_property(end)
        .add_property("COLOR", event.category.color())
        .done()
}

fn date_property(name: &str, date: NaiveDate) -> Property {
    Property::new(name, &date.format("%Y%m%d").to_string())
        .add_parameter("VALUE", "DATE")
        .done()
}

fn local_property(name: &str, at: NaiveDateTime) -> Property {
    Property::new(name, &at.format("%Y%m%dT%H%M%S").to_string())
        .add_parameter("TZID", TIMEZONE_ID)
        .done()
}

fn timezone_block() -> String {
    VTIMEZONE.iter().map(|line| format!("{line}\r\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::almanac::{generate_seed_entries, sample_entry};
    use chrono::{NaiveDate, TimeZone};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 1, 4, 30, 0).unwrap()
    }

    fn render(entries: &[DailyAlmanacEntry], options: &IcsOptions) -> String {
        render_calendar(entries, options, now(), &mut StdRng::seed_from_u64(42))
    }

    /// Counts unfolded content lines equal to `line`.
    fn count(doc: &str, line: &str) -> usize {
        doc.replace("\r\n ", "")
            .split("\r\n")
            .filter(|l| *l == line)
            .count()
    }

    #[test]
    fn test_header_and_footer() {
        let doc = render(&[], &IcsOptions::default());

        assert!(doc.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n"));
        assert!(doc.ends_with("END:VCALENDAR\r\n"));
        assert_eq!(count(&doc, "PRODID:-//Tamil Jyotish//Panchangam Calendar//EN"), 1);
        assert_eq!(count(&doc, "CALSCALE:GREGORIAN"), 1);
        assert_eq!(count(&doc, "METHOD:PUBLISH"), 1);
        assert_eq!(count(&doc, "X-WR-CALNAME:Tamil Panchangam"), 1);
        assert_eq!(count(&doc, "X-WR-TIMEZONE:Asia/Kolkata"), 1);
        assert_eq!(count(&doc, "TZID:Asia/Kolkata"), 1);
        assert_eq!(count(&doc, "BEGIN:VEVENT"), 0);
    }

    #[test]
    fn test_timezone_block_precedes_events() {
        let doc = render(&[sample_entry()], &IcsOptions::default());

        let tz = doc.find("BEGIN:VTIMEZONE").unwrap();
        let tz_end = doc.find("END:VTIMEZONE").unwrap();
        let first_event = doc.find("BEGIN:VEVENT").unwrap();
        assert!(doc.find("X-WR-TIMEZONE").unwrap() < tz);
        assert!(tz < tz_end && tz_end < first_event);
        assert_eq!(count(&doc, "BEGIN:VTIMEZONE"), 1);
    }

    #[test]
    fn test_balanced_blocks_over_many_days() {
        let start = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let entries = generate_seed_entries(start, 60);
        let doc = render(&entries, &IcsOptions::default());

        assert_eq!(count(&doc, "BEGIN:VCALENDAR"), 1);
        assert_eq!(count(&doc, "END:VCALENDAR"), 1);
        let begins = count(&doc, "BEGIN:VEVENT");
        assert!(begins > 60);
        assert_eq!(begins, count(&doc, "END:VEVENT"));
    }

    #[test]
    fn test_example_entry_events() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
        let mut entry = DailyAlmanacEntry::new(date);
        entry.is_navami = true;
        entry.rahu_kalam = Some("7:30 AM - 9:00 AM".to_string());
        entry.main_nakshatra = Some("Mrigasira".to_string());

        let doc = render(&[entry], &IcsOptions::default());

        assert_eq!(count(&doc, "BEGIN:VEVENT"), 3);
        assert_eq!(count(&doc, "SUMMARY:🕉️ நவமி (Navami)"), 1);
        assert_eq!(count(&doc, "CATEGORIES:SPECIAL_DAY"), 1);
        assert_eq!(count(&doc, "CATEGORIES:NAKSHATRA"), 1);
        assert_eq!(count(&doc, "CATEGORIES:INAUSPICIOUS"), 1);
        assert_eq!(count(&doc, "DTSTART;VALUE=DATE:20250915"), 2);
        assert_eq!(count(&doc, "DTEND;VALUE=DATE:20250916"), 2);
        assert_eq!(count(&doc, "DTSTART;TZID=Asia/Kolkata:20250915T073000"), 1);
        assert_eq!(count(&doc, "DTEND;TZID=Asia/Kolkata:20250915T090000"), 1);
        assert_eq!(count(&doc, "COLOR:red"), 1);
        assert_eq!(count(&doc, "DTSTAMP:20250901T043000Z"), 3);
    }

    #[test]
    fn test_description_is_escaped() {
        let doc = render(&[sample_entry()], &IcsOptions::default());

        assert_eq!(
            count(
                &doc,
                "DESCRIPTION:Inauspicious for: Vishakha\\, விசாகம்\\nAvoid important activities"
            ),
            1
        );
    }

    #[test]
    fn test_disabled_category_never_appears() {
        let start = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let entries = generate_seed_entries(start, 30);
        let options = IcsOptions {
            include_inauspicious: false,
            ..IcsOptions::default()
        };

        let doc = render(&entries, &options);

        assert_eq!(count(&doc, "CATEGORIES:INAUSPICIOUS"), 0);
        assert!(count(&doc, "CATEGORIES:AUSPICIOUS") > 0);
    }

    #[test]
    fn test_lines_are_folded() {
        let doc = render(
            &[sample_entry()],
            &IcsOptions::default().with_calendar_name("நட்சத்திரம் ".repeat(12)),
        );

        assert!(doc.contains("\r\n "));
        for line in doc.split("\r\n") {
            let content = line.strip_prefix(' ').unwrap_or(line);
            assert!(content.len() <= 75, "line too long: {line}");
        }
        assert_eq!(
            count(&doc, &format!("X-WR-CALNAME:{}", "நட்சத்திரம் ".repeat(12))),
            1
        );
    }

    #[test]
    fn test_same_clock_and_seed_is_deterministic() {
        let entries = [sample_entry()];
        let options = IcsOptions::default();

        assert_eq!(render(&entries, &options), render(&entries, &options));
    }

    #[test]
    fn test_uids_are_unique_within_document() {
        let start = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let doc = render(&generate_seed_entries(start, 10), &IcsOptions::default());

        let uids: Vec<&str> = doc
            .split("\r\n")
            .filter(|l| l.starts_with("UID:"))
            .collect();
        let unique: std::collections::HashSet<&&str> = uids.iter().collect();
        assert_eq!(uids.len(), unique.len());
    }
}
