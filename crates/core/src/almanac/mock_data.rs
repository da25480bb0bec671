//! Mock almanac data for testing and seeding.
//!
//! The seed generator produces plausible-looking rows, not astronomically
//! correct ones: it walks the nakshatra and tithi cycles one step per day and
//! uses the fixed weekday tables for the inauspicious windows.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Weekday};

use super::nakshatra::Nakshatra;
use super::types::{AlmanacPeriod, DailyAlmanacEntry, KRISHNA_PAKSHA, SHUKLA_PAKSHA};

const ABHIJIT_MUHURTA: &str = "11:48 AM - 12:36 PM";

const TITHI_NAMES: [&str; 14] = [
    "பிரதமை",
    "துவிதியை",
    "திருதியை",
    "சதுர்த்தி",
    "பஞ்சமி",
    "சஷ்டி",
    "சப்தமி",
    "அஷ்டமி",
    "நவமி",
    "தசமி",
    "ஏகாதசி",
    "துவாதசி",
    "திரயோதசி",
    "சதுர்த்தசி",
];

/// The almanac row for 2025-09-15, as stored.
pub fn sample_entry() -> DailyAlmanacEntry {
    let at = |s: &str| DateTime::parse_from_rfc3339(s).ok();
    let period = |name: &str, start: &str, end: &str| AlmanacPeriod {
        name: name.to_string(),
        start: at(start),
        end: at(end),
        paksha: None,
    };

    let mut entry = DailyAlmanacEntry::new(NaiveDate::from_ymd_opt(2025, 9, 15).unwrap_or_default());
    entry.vaara = Some("திங்கட்கிழமை".to_string());
    entry.sunrise = at("2025-09-15T00:31:25+00:00");
    entry.sunset = at("2025-09-15T12:36:38+00:00");
    entry.moonrise = at("2025-09-15T19:20:01+00:00");
    entry.moonset = at("2025-09-15T07:48:24+00:00");
    entry.nakshatra = vec![
        period(
            "மிருகசீரிடம்",
            "2025-09-14T08:41:04+05:30",
            "2025-09-15T07:31:44+05:30",
        ),
        period(
            "திருவாதிரை",
            "2025-09-15T07:31:45+05:30",
            "2025-09-16T06:46:10+05:30",
        ),
    ];
    entry.tithi = vec![
        period(
            "நவமி",
            "2025-09-15T03:06:36+05:30",
            "2025-09-16T01:31:50+05:30",
        )
        .with_paksha(KRISHNA_PAKSHA),
        period(
            "தசமி",
            "2025-09-16T01:31:51+05:30",
            "2025-09-17T00:22:37+05:30",
        )
        .with_paksha(KRISHNA_PAKSHA),
    ];
    entry.karana = vec![
        period(
            "சைதுளை",
            "2025-09-15T03:06:36+05:30",
            "2025-09-15T14:16:07+05:30",
        ),
        period(
            "கரசை",
            "2025-09-15T14:16:08+05:30",
            "2025-09-16T01:31:50+05:30",
        ),
    ];
    entry.yoga = vec![
        period(
            "வ்யதீபாதம்",
            "2025-09-15T04:55:12+05:30",
            "2025-09-16T02:34:17+05:30",
        ),
        period(
            "வரியான்",
            "2025-09-16T02:34:18+05:30",
            "2025-09-17T00:33:54+05:30",
        ),
    ];
    entry.main_nakshatra = Some("மிருகசீரிடம்".to_string());
    entry.cosmic_score = Some(7.0);
    entry.rahu_kalam = Some("7:30 AM - 9:00 AM".to_string());
    entry.yamagandam = Some("10:30 AM - 12:00 PM".to_string());
    entry.kuligai = Some("1:30 PM - 3:00 PM".to_string());
    entry.abhijit_muhurta = Some(ABHIJIT_MUHURTA.to_string());
    entry.is_navami = true;
    entry.is_thei_pirai = true;
    entry.chandrashtama_for = vec!["Vishakha".to_string(), "விசாகம்".to_string()];
    entry
}

/// Generate `days` consecutive mock rows starting at `start`.
///
/// # Example
///
/// ```
/// use panchangam_core::almanac::generate_seed_entries;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
/// let entries = generate_seed_entries(start, 30);
///
/// assert_eq!(entries.len(), 30);
/// ```
pub fn generate_seed_entries(start: NaiveDate, days: u32) -> Vec<DailyAlmanacEntry> {
    (0..days)
        .map(|offset| seed_entry(start + Duration::days(i64::from(offset)), offset as usize))
        .collect()
}

fn seed_entry(date: NaiveDate, offset: usize) -> DailyAlmanacEntry {
    let weekday = date.weekday();
    let nakshatra = Nakshatra::ALL[offset % Nakshatra::ALL.len()];
    let chandrashtama = Nakshatra::ALL[(offset + 11) % Nakshatra::ALL.len()];

    // Position in the 30-day lunar month: 0..15 waxing, 15..30 waning.
    let lunar_day = offset % 30;
    let waxing = lunar_day < 15;
    let position = lunar_day % 15 + 1;
    let (tithi_name, paksha) = match (position, waxing) {
        (15, true) => ("பௌர்ணமி", SHUKLA_PAKSHA),
        (15, false) => ("அமாவாசை", KRISHNA_PAKSHA),
        (n, true) => (TITHI_NAMES[n - 1], SHUKLA_PAKSHA),
        (n, false) => (TITHI_NAMES[n - 1], KRISHNA_PAKSHA),
    };

    let mut entry = DailyAlmanacEntry::new(date);
    entry.vaara = Some(tamil_weekday(weekday).to_string());
    entry.main_nakshatra = Some(nakshatra.english().to_string());
    entry.nakshatra = vec![AlmanacPeriod::named(nakshatra.tamil())];
    entry.tithi = vec![AlmanacPeriod::named(tithi_name).with_paksha(paksha)];
    entry.cosmic_score = Some(((offset * 7) % 10 + 1) as f64);
    entry.rahu_kalam = Some(rahu_kalam(weekday).to_string());
    entry.yamagandam = Some(yamagandam(weekday).to_string());
    entry.kuligai = Some(kuligai(weekday).to_string());
    entry.abhijit_muhurta = Some(ABHIJIT_MUHURTA.to_string());
    entry.is_pournami = position == 15 && waxing;
    entry.is_amavasai = position == 15 && !waxing;
    entry.is_sashti = position == 6;
    entry.is_ashtami = position == 8;
    entry.is_navami = position == 9;
    entry.is_ekadashi = position == 11;
    entry.is_dwadashi = position == 12;
    entry.is_trayodashi = position == 13;
    entry.is_valar_pirai = waxing;
    entry.is_thei_pirai = !waxing;
    entry.chandrashtama_for = vec![chandrashtama.english().to_string()];
    entry
}

fn tamil_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "ஞாயிற்றுக்கிழமை",
        Weekday::Mon => "திங்கட்கிழமை",
        Weekday::Tue => "செவ்வாய்க்கிழமை",
        Weekday::Wed => "புதன்கிழமை",
        Weekday::Thu => "வியாழக்கிழமை",
        Weekday::Fri => "வெள்ளிக்கிழமை",
        Weekday::Sat => "சனிக்கிழமை",
    }
}

fn rahu_kalam(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "7:30 AM - 9:00 AM",
        Weekday::Tue => "3:00 PM - 4:30 PM",
        Weekday::Wed => "12:00 PM - 1:30 PM",
        Weekday::Thu => "1:30 PM - 3:00 PM",
        Weekday::Fri => "10:30 AM - 12:00 PM",
        Weekday::Sat => "9:00 AM - 10:30 AM",
        Weekday::Sun => "4:30 PM - 6:00 PM",
    }
}

fn yamagandam(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "10:30 AM - 12:00 PM",
        Weekday::Tue => "9:00 AM - 10:30 AM",
        Weekday::Wed => "7:30 AM - 9:00 AM",
        Weekday::Thu => "6:00 AM - 7:30 AM",
        Weekday::Fri => "3:00 PM - 4:30 PM",
        Weekday::Sat => "1:30 PM - 3:00 PM",
        Weekday::Sun => "12:00 PM - 1:30 PM",
    }
}

fn kuligai(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "1:30 PM - 3:00 PM",
        Weekday::Tue => "12:00 PM - 1:30 PM",
        Weekday::Wed => "10:30 AM - 12:00 PM",
        Weekday::Thu => "9:00 AM - 10:30 AM",
        Weekday::Fri => "7:30 AM - 9:00 AM",
        Weekday::Sat => "6:00 AM - 7:30 AM",
        Weekday::Sun => "3:00 PM - 4:30 PM",
    }
}
