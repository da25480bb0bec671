use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Timezone every almanac time is expressed in.
pub const TIMEZONE_ID: &str = "Asia/Kolkata";

const IST_OFFSET_SECONDS: i32 = 5 * 3600 + 30 * 60;

/// VTIMEZONE definition for Asia/Kolkata. India has no daylight saving, so a
/// single STANDARD component covers every date.
pub(crate) const VTIMEZONE: [&str; 9] = [
    "BEGIN:VTIMEZONE",
    "TZID:Asia/Kolkata",
    "BEGIN:STANDARD",
    "DTSTART:19700101T000000",
    "TZOFFSETFROM:+0530",
    "TZOFFSETTO:+0530",
    "TZNAME:IST",
    "END:STANDARD",
    "END:VTIMEZONE",
];

/// India Standard Time, UTC+05:30.
pub fn india_standard_time() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECONDS).expect("IST offset is less than a day")
}

/// The calendar date in India at the given instant.
pub fn today_in_india(now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&india_standard_time()).date_naive()
}
