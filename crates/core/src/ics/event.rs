use chrono::NaiveDate;

use crate::almanac::{is_afflicted, DailyAlmanacEntry, SpecialDay};

use super::options::IcsOptions;
use super::time_range::{parse_time_range, TimeWindow};

/// Category tag used by calendar clients for color hinting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    Auspicious,
    Inauspicious,
    SpecialDay,
    Nakshatra,
    Warning,
}

impl EventCategory {
    /// Value of the `CATEGORIES` property.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Auspicious => "AUSPICIOUS",
            EventCategory::Inauspicious => "INAUSPICIOUS",
            EventCategory::SpecialDay => "SPECIAL_DAY",
            EventCategory::Nakshatra => "NAKSHATRA",
            EventCategory::Warning => "WARNING",
        }
    }

    /// Value of the `COLOR` property.
    pub fn color(&self) -> &'static str {
        match self {
            EventCategory::Auspicious => "green",
            EventCategory::Inauspicious | EventCategory::Warning => "red",
            EventCategory::SpecialDay => "blue",
            EventCategory::Nakshatra => "purple",
        }
    }
}

/// When an event happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTiming {
    AllDay(NaiveDate),
    Timed(TimeWindow),
}

/// One calendar event derived from an almanac entry, before serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlmanacEvent {
    pub summary: String,
    /// Plain text; line breaks are escaped on output.
    pub description: String,
    pub category: EventCategory,
    pub timing: EventTiming,
}

impl AlmanacEvent {
    fn all_day(
        date: NaiveDate,
        summary: impl Into<String>,
        description: impl Into<String>,
        category: EventCategory,
    ) -> Self {
        Self {
            summary: summary.into(),
            description: description.into(),
            category,
            timing: EventTiming::AllDay(date),
        }
    }

    fn timed(
        window: TimeWindow,
        summary: &str,
        description: &str,
        category: EventCategory,
    ) -> Self {
        Self {
            summary: summary.to_string(),
            description: description.to_string(),
            category,
            timing: EventTiming::Timed(window),
        }
    }
}

const ABHIJIT: (&str, &str) = (
    "✅ அபிஜித் முகூர்த்தம் (Abhijit Muhurta)",
    "Most auspicious time of the day - Best for starting new ventures",
);
const RAHU_KALAM: (&str, &str) = (
    "⚠️ ராகு காலம் (Rahu Kalam)",
    "Inauspicious time - Avoid starting new activities",
);
const YAMAGANDAM: (&str, &str) = (
    "⏱️ எமகண்டம் (Yamagandam)",
    "Inauspicious time - Avoid important activities",
);
const KULIGAI: (&str, &str) = (
    "⏳ குளிகை (Kuligai)",
    "Inauspicious time - Avoid starting new activities",
);

/// Events for one almanac day, in fixed order: special days, nakshatra,
/// affliction warning, chandrashtama warning, Abhijit Muhurta, then Rahu
/// Kalam, Yamagandam and Kuligai.
///
/// Disabled categories and absent or unparseable fields produce no event.
pub fn day_events(entry: &DailyAlmanacEntry, options: &IcsOptions) -> Vec<AlmanacEvent> {
    let date = entry.date;
    let mut events = Vec::new();

    if options.include_special_days {
        events.extend(SpecialDay::flagged(entry).into_iter().map(|day| {
            AlmanacEvent::all_day(
                date,
                day.event_summary(),
                day.event_description(),
                EventCategory::SpecialDay,
            )
        }));
    }

    // Events key on the main nakshatra only, never on segment data.
    let nakshatra = entry
        .main_nakshatra
        .as_deref()
        .filter(|name| !name.trim().is_empty());

    if let Some(name) = nakshatra.filter(|_| options.include_nakshatra) {
        let mut description = format!("Today's Nakshatra: {name}");
        if let Some(yogam) = &entry.nakshatra_yogam {
            description.push_str(&format!("\nYogam: {yogam}"));
        }
        if let Some(phase) = entry.moon_phase() {
            description.push_str(&format!("\nMoon Phase: {}", phase.label()));
        }
        events.push(AlmanacEvent::all_day(
            date,
            format!("🌟 {name} நட்சத்திரம்"),
            description,
            EventCategory::Nakshatra,
        ));
    }

    if let Some(name) = nakshatra.filter(|n| options.include_affliction_warnings && is_afflicted(n))
    {
        events.push(AlmanacEvent::all_day(
            date,
            "⚠️ தீதுரு நட்சத்திரம் - RS Warning",
            format!("Avoid: Medical treatments, Travel, Financial transactions\nNakshatra: {name}"),
            EventCategory::Warning,
        ));
    }

    if options.include_moon_opposition && !entry.chandrashtama_for.is_empty() {
        events.push(AlmanacEvent::all_day(
            date,
            "🔄 சந்திராஷ்டமம் (Chandrashtama)",
            format!(
                "Inauspicious for: {}\nAvoid important activities",
                entry.chandrashtama_for.join(", ")
            ),
            EventCategory::Warning,
        ));
    }

    let mut push_timed = |text: &Option<String>, (summary, description): (&str, &str), category| {
        if let Some(window) = text.as_deref().and_then(|t| parse_time_range(t, date)) {
            events.push(AlmanacEvent::timed(window, summary, description, category));
        }
    };

    if options.include_auspicious {
        push_timed(&entry.abhijit_muhurta, ABHIJIT, EventCategory::Auspicious);
    }

    if options.include_inauspicious {
        push_timed(&entry.rahu_kalam, RAHU_KALAM, EventCategory::Inauspicious);
        push_timed(&entry.yamagandam, YAMAGANDAM, EventCategory::Inauspicious);
        push_timed(&entry.kuligai, KULIGAI, EventCategory::Inauspicious);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::almanac::{sample_entry, AlmanacPeriod};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 15).unwrap()
    }

    fn categories(events: &[AlmanacEvent]) -> Vec<EventCategory> {
        events.iter().map(|e| e.category).collect()
    }

    #[test]
    fn test_example_entry_yields_navami_nakshatra_and_rahu_kalam() {
        let mut entry = DailyAlmanacEntry::new(date());
        entry.is_navami = true;
        entry.rahu_kalam = Some("7:30 AM - 9:00 AM".to_string());
        entry.main_nakshatra = Some("Mrigasira".to_string());

        let events = day_events(&entry, &IcsOptions::default());

        assert_eq!(events.len(), 3);
        assert_eq!(events[0].summary, "🕉️ நவமி (Navami)");
        assert_eq!(events[0].timing, EventTiming::AllDay(date()));
        assert_eq!(events[1].summary, "🌟 Mrigasira நட்சத்திரம்");
        assert_eq!(events[1].timing, EventTiming::AllDay(date()));
        assert_eq!(events[2].category, EventCategory::Inauspicious);
        assert_eq!(
            events[2].timing,
            EventTiming::Timed(TimeWindow {
                start: date().and_hms_opt(7, 30, 0).unwrap(),
                end: date().and_hms_opt(9, 0, 0).unwrap(),
            })
        );
    }

    #[test]
    fn test_empty_entry_yields_nothing() {
        let events = day_events(&DailyAlmanacEntry::new(date()), &IcsOptions::default());
        assert!(events.is_empty());
    }

    #[test]
    fn test_unparseable_rahu_kalam_is_skipped() {
        let mut entry = DailyAlmanacEntry::new(date());
        entry.rahu_kalam = Some("unknown".to_string());
        entry.yamagandam = Some("10:30 AM - 12:00 PM".to_string());

        let events = day_events(&entry, &IcsOptions::default());

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].summary, YAMAGANDAM.0);
    }

    #[test]
    fn test_sample_entry_event_order() {
        let events = day_events(&sample_entry(), &IcsOptions::default());

        assert_eq!(
            categories(&events),
            vec![
                EventCategory::SpecialDay,
                EventCategory::Nakshatra,
                EventCategory::Warning,
                EventCategory::Auspicious,
                EventCategory::Inauspicious,
                EventCategory::Inauspicious,
                EventCategory::Inauspicious,
            ]
        );
        assert_eq!(
            events[2].description,
            "Inauspicious for: Vishakha, விசாகம்\nAvoid important activities"
        );
        assert!(events[1]
            .description
            .ends_with("Moon Phase: தேய்பிறை (Waning Moon)"));
    }

    #[test]
    fn test_affliction_warning() {
        let mut entry = DailyAlmanacEntry::new(date());
        entry.main_nakshatra = Some("சுவாதி".to_string());

        let events = day_events(&entry, &IcsOptions::default());

        assert_eq!(
            categories(&events),
            vec![EventCategory::Nakshatra, EventCategory::Warning]
        );
        assert_eq!(events[1].summary, "⚠️ தீதுரு நட்சத்திரம் - RS Warning");
        assert!(events[1].description.ends_with("Nakshatra: சுவாதி"));
    }

    #[test]
    fn test_segment_nakshatra_alone_yields_no_events() {
        let mut entry = DailyAlmanacEntry::new(date());
        entry.nakshatra = vec![AlmanacPeriod::named("Bharani")];

        assert!(day_events(&entry, &IcsOptions::default()).is_empty());

        entry.main_nakshatra = Some("  ".to_string());
        assert!(day_events(&entry, &IcsOptions::default()).is_empty());
    }

    #[test]
    fn test_disabled_categories_are_omitted() {
        let mut entry = sample_entry();
        entry.main_nakshatra = Some("Bharani".to_string());
        let all = IcsOptions::default();

        let no_special = IcsOptions {
            include_special_days: false,
            ..all.clone()
        };
        assert!(!categories(&day_events(&entry, &no_special)).contains(&EventCategory::SpecialDay));

        let no_nakshatra = IcsOptions {
            include_nakshatra: false,
            ..all.clone()
        };
        assert!(!categories(&day_events(&entry, &no_nakshatra)).contains(&EventCategory::Nakshatra));

        let no_warnings = IcsOptions {
            include_affliction_warnings: false,
            include_moon_opposition: false,
            ..all.clone()
        };
        assert!(!categories(&day_events(&entry, &no_warnings)).contains(&EventCategory::Warning));

        let no_auspicious = IcsOptions {
            include_auspicious: false,
            ..all.clone()
        };
        assert!(!categories(&day_events(&entry, &no_auspicious)).contains(&EventCategory::Auspicious));

        let no_inauspicious = IcsOptions {
            include_inauspicious: false,
            ..all
        };
        assert!(
            !categories(&day_events(&entry, &no_inauspicious)).contains(&EventCategory::Inauspicious)
        );
    }

    #[test]
    fn test_category_colors() {
        assert_eq!(EventCategory::Auspicious.color(), "green");
        assert_eq!(EventCategory::Warning.color(), "red");
        assert_eq!(EventCategory::SpecialDay.color(), "blue");
        assert_eq!(EventCategory::Nakshatra.color(), "purple");
    }
}
