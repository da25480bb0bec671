use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::serde::{
    deserialize_lenient_list, deserialize_lenient_timestamp, deserialize_name_list,
    deserialize_null_as_false, deserialize_optional_string,
};

/// Paksha label for the waxing fortnight.
pub const SHUKLA_PAKSHA: &str = "சுக்ல பக்ஷ";
/// Paksha label for the waning fortnight.
pub const KRISHNA_PAKSHA: &str = "கிருஷ்ண பக்ஷ";

/// One segment of a named astrological period (tithi, nakshatra, yoga, karana).
///
/// A day usually spans two segments; the first is the one in effect at sunrise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlmanacPeriod {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_lenient_timestamp")]
    pub start: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "deserialize_lenient_timestamp")]
    pub end: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub paksha: Option<String>,
}

impl AlmanacPeriod {
    /// Creates a segment with just a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: None,
            end: None,
            paksha: None,
        }
    }

    /// Sets the lunar fortnight of this segment.
    pub fn with_paksha(mut self, paksha: impl Into<String>) -> Self {
        self.paksha = Some(paksha.into());
        self
    }
}

/// One day's almanac record.
///
/// Everything except the date is optional: an absent field suppresses the
/// matching calendar event and displays as "N/A".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyAlmanacEntry {
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub vaara: Option<String>,

    #[serde(default, deserialize_with = "deserialize_lenient_timestamp")]
    pub sunrise: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "deserialize_lenient_timestamp")]
    pub sunset: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "deserialize_lenient_timestamp")]
    pub moonrise: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "deserialize_lenient_timestamp")]
    pub moonset: Option<DateTime<FixedOffset>>,

    #[serde(default, deserialize_with = "deserialize_lenient_list")]
    pub tithi: Vec<AlmanacPeriod>,
    #[serde(default, deserialize_with = "deserialize_lenient_list")]
    pub nakshatra: Vec<AlmanacPeriod>,
    #[serde(default, deserialize_with = "deserialize_lenient_list")]
    pub yoga: Vec<AlmanacPeriod>,
    #[serde(default, deserialize_with = "deserialize_lenient_list")]
    pub karana: Vec<AlmanacPeriod>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub main_nakshatra: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub nakshatra_yogam: Option<String>,
    #[serde(default)]
    pub cosmic_score: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub tarabalam_type: Option<String>,

    /// Free-text windows such as "7:30 AM - 9:00 AM".
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub rahu_kalam: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub yamagandam: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub kuligai: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub abhijit_muhurta: Option<String>,

    #[serde(default, deserialize_with = "deserialize_null_as_false")]
    pub is_amavasai: bool,
    #[serde(default, deserialize_with = "deserialize_null_as_false")]
    pub is_pournami: bool,
    #[serde(default, deserialize_with = "deserialize_null_as_false")]
    pub is_ekadashi: bool,
    #[serde(default, deserialize_with = "deserialize_null_as_false")]
    pub is_dwadashi: bool,
    #[serde(default, deserialize_with = "deserialize_null_as_false")]
    pub is_ashtami: bool,
    #[serde(default, deserialize_with = "deserialize_null_as_false")]
    pub is_navami: bool,
    #[serde(default, deserialize_with = "deserialize_null_as_false")]
    pub is_trayodashi: bool,
    #[serde(default, deserialize_with = "deserialize_null_as_false")]
    pub is_sashti: bool,
    #[serde(default, deserialize_with = "deserialize_null_as_false")]
    pub is_valar_pirai: bool,
    #[serde(default, deserialize_with = "deserialize_null_as_false")]
    pub is_thei_pirai: bool,

    /// Nakshatras under chandrashtama on this day.
    #[serde(default, deserialize_with = "deserialize_name_list")]
    pub chandrashtama_for: Vec<String>,
}

impl DailyAlmanacEntry {
    /// Creates an entry for the given date with every other field absent.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            ..Self::default()
        }
    }

    /// The day's nakshatra: the explicit main nakshatra, or the first segment.
    pub fn primary_nakshatra(&self) -> Option<&str> {
        self.main_nakshatra
            .as_deref()
            .or_else(|| self.nakshatra.first().map(|p| p.name.as_str()))
            .filter(|name| !name.trim().is_empty())
    }

    /// Name of the tithi in effect at sunrise.
    pub fn tithi_name(&self) -> Option<&str> {
        first_name(&self.tithi)
    }

    /// Name of the yoga in effect at sunrise.
    pub fn yoga_name(&self) -> Option<&str> {
        first_name(&self.yoga)
    }

    /// Name of the karana in effect at sunrise.
    pub fn karana_name(&self) -> Option<&str> {
        first_name(&self.karana)
    }

    /// Phase of the moon, from the explicit flags or the tithi's paksha.
    pub fn moon_phase(&self) -> Option<MoonPhase> {
        if self.is_valar_pirai {
            return Some(MoonPhase::Waxing);
        }
        if self.is_thei_pirai {
            return Some(MoonPhase::Waning);
        }
        self.tithi
            .iter()
            .filter_map(|t| t.paksha.as_deref())
            .find_map(MoonPhase::from_paksha)
    }
}

fn first_name(periods: &[AlmanacPeriod]) -> Option<&str> {
    periods
        .first()
        .map(|p| p.name.as_str())
        .filter(|name| !name.trim().is_empty())
}

/// Waxing (valar pirai) or waning (thei pirai) moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    Waxing,
    Waning,
}

impl MoonPhase {
    /// Parses a tithi paksha label.
    pub fn from_paksha(paksha: &str) -> Option<Self> {
        match paksha.trim() {
            SHUKLA_PAKSHA => Some(MoonPhase::Waxing),
            KRISHNA_PAKSHA => Some(MoonPhase::Waning),
            _ => None,
        }
    }

    pub fn tamil(&self) -> &'static str {
        match self {
            MoonPhase::Waxing => "வளர்பிறை",
            MoonPhase::Waning => "தேய்பிறை",
        }
    }

    pub fn english(&self) -> &'static str {
        match self {
            MoonPhase::Waxing => "Waxing Moon",
            MoonPhase::Waning => "Waning Moon",
        }
    }

    /// Bilingual label, e.g. "வளர்பிறை (Waxing Moon)".
    pub fn label(&self) -> String {
        format!("{} ({})", self.tamil(), self.english())
    }
}
