use super::types::DailyAlmanacEntry;

/// Special lunar days flagged on an almanac entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialDay {
    Amavasai,
    Pournami,
    Ekadashi,
    Dwadashi,
    Ashtami,
    Navami,
    Trayodashi,
    Sashti,
}

impl SpecialDay {
    /// Every special day, in the order events and labels are produced.
    pub const ALL: [SpecialDay; 8] = [
        SpecialDay::Amavasai,
        SpecialDay::Pournami,
        SpecialDay::Ekadashi,
        SpecialDay::Dwadashi,
        SpecialDay::Ashtami,
        SpecialDay::Navami,
        SpecialDay::Trayodashi,
        SpecialDay::Sashti,
    ];

    /// Display priority when a day carries several flags.
    const DISPLAY_PRIORITY: [SpecialDay; 8] = [
        SpecialDay::Pournami,
        SpecialDay::Amavasai,
        SpecialDay::Ekadashi,
        SpecialDay::Dwadashi,
        SpecialDay::Ashtami,
        SpecialDay::Navami,
        SpecialDay::Trayodashi,
        SpecialDay::Sashti,
    ];

    /// Special days flagged on the entry, in [`SpecialDay::ALL`] order.
    pub fn flagged(entry: &DailyAlmanacEntry) -> Vec<SpecialDay> {
        Self::ALL
            .into_iter()
            .filter(|day| day.is_set(entry))
            .collect()
    }

    /// The one special day shown on the day view, if any.
    pub fn headline(entry: &DailyAlmanacEntry) -> Option<SpecialDay> {
        Self::DISPLAY_PRIORITY
            .into_iter()
            .find(|day| day.is_set(entry))
    }

    pub fn is_set(&self, entry: &DailyAlmanacEntry) -> bool {
        match self {
            SpecialDay::Amavasai => entry.is_amavasai,
            SpecialDay::Pournami => entry.is_pournami,
            SpecialDay::Ekadashi => entry.is_ekadashi,
            SpecialDay::Dwadashi => entry.is_dwadashi,
            SpecialDay::Ashtami => entry.is_ashtami,
            SpecialDay::Navami => entry.is_navami,
            SpecialDay::Trayodashi => entry.is_trayodashi,
            SpecialDay::Sashti => entry.is_sashti,
        }
    }

    pub fn english(&self) -> &'static str {
        match self {
            SpecialDay::Amavasai => "Amavasai",
            SpecialDay::Pournami => "Pournami",
            SpecialDay::Ekadashi => "Ekadashi",
            SpecialDay::Dwadashi => "Dwadashi",
            SpecialDay::Ashtami => "Ashtami",
            SpecialDay::Navami => "Navami",
            SpecialDay::Trayodashi => "Trayodashi",
            SpecialDay::Sashti => "Sashti",
        }
    }

    pub fn tamil(&self) -> &'static str {
        match self {
            SpecialDay::Amavasai => "அமாவாசை",
            SpecialDay::Pournami => "பௌர்ணமி",
            SpecialDay::Ekadashi => "ஏகாதசி",
            SpecialDay::Dwadashi => "துவாதசி",
            SpecialDay::Ashtami => "அஷ்டமி",
            SpecialDay::Navami => "நவமி",
            SpecialDay::Trayodashi => "திரயோதசி",
            SpecialDay::Sashti => "சஷ்டி",
        }
    }

    /// Day-view label, e.g. "பௌர்ணமி (Full Moon Day)".
    pub fn label(&self) -> String {
        let english = match self {
            SpecialDay::Amavasai => "New Moon Day",
            SpecialDay::Pournami => "Full Moon Day",
            other => other.english(),
        };
        format!("{} ({english})", self.tamil())
    }

    /// Calendar event title, e.g. "🕉️ நவமி (Navami)".
    pub fn event_summary(&self) -> String {
        let icon = match self {
            SpecialDay::Amavasai => "🌑",
            SpecialDay::Pournami => "🌕",
            _ => "🕉️",
        };
        let english = match self {
            SpecialDay::Amavasai => "New Moon",
            SpecialDay::Pournami => "Full Moon",
            other => other.english(),
        };
        format!("{icon} {} ({english})", self.tamil())
    }

    pub fn event_description(&self) -> &'static str {
        match self {
            SpecialDay::Amavasai => "New Moon Day - Considered auspicious for certain activities",
            SpecialDay::Pournami => "Full Moon Day - Considered auspicious for certain activities",
            SpecialDay::Ekadashi => "Ekadashi - Fasting day for spiritual purification",
            SpecialDay::Dwadashi => "Dwadashi - Day after Ekadashi",
            SpecialDay::Ashtami => "Ashtami - Eighth day of lunar cycle",
            SpecialDay::Navami => "Navami - Ninth day of lunar cycle",
            SpecialDay::Trayodashi => "Trayodashi - Thirteenth day of lunar cycle",
            SpecialDay::Sashti => "Sashti - Sixth day of lunar cycle",
        }
    }
}
