//! iCalendar (RFC 5545) export of almanac entries.
//!
//! Content lines are written by the `icalendar` crate, which escapes TEXT
//! values and folds long lines.
//!
//! [`render_calendar`] is a straight-line formatter: each entry is turned into
//! zero or more events independently, and malformed almanac data only ever
//! removes events, never fails the document.

mod document;
mod event;
mod options;
mod time_range;
mod timezone;
mod uid;

pub use document::{generate_calendar, render_calendar, CALENDAR_DESCRIPTION, PRODUCT_ID};
pub use event::{day_events, AlmanacEvent, EventCategory, EventTiming};
pub use options::{IcsOptions, DEFAULT_CALENDAR_NAME};
pub use time_range::{parse_time_range, TimeWindow};
pub use timezone::{india_standard_time, today_in_india, TIMEZONE_ID};
pub use uid::{generate_uid, UID_DOMAIN};
