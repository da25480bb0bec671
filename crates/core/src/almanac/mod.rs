mod mock_data;
mod nakshatra;
mod narration;
mod special_day;
mod summary;
mod types;

pub use mock_data::{generate_seed_entries, sample_entry};
pub use nakshatra::{
    affliction_info, is_afflicted, to_tamil, to_tamil_names, AfflictionInfo, Nakshatra,
    AFFLICTION_AVOID_SUMMARY, AFFLICTION_NAMES,
};
pub use narration::narration_chunks;
pub use special_day::SpecialDay;
pub use summary::{DayResponse, DaySummary, NOT_AVAILABLE};
pub use types::{AlmanacPeriod, DailyAlmanacEntry, MoonPhase, KRISHNA_PAKSHA, SHUKLA_PAKSHA};
