use serde::{Deserialize, Serialize};

/// Calendar name used when none is given.
pub const DEFAULT_CALENDAR_NAME: &str = "Tamil Panchangam";

/// Which event categories to export, and what to call the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcsOptions {
    pub include_auspicious: bool,
    pub include_inauspicious: bool,
    pub include_special_days: bool,
    pub include_nakshatra: bool,
    /// RS (தீதுரு) nakshatra warnings.
    pub include_affliction_warnings: bool,
    /// Chandrashtama warnings.
    pub include_moon_opposition: bool,
    pub calendar_name: String,
}

impl Default for IcsOptions {
    fn default() -> Self {
        Self {
            include_auspicious: true,
            include_inauspicious: true,
            include_special_days: true,
            include_nakshatra: true,
            include_affliction_warnings: true,
            include_moon_opposition: true,
            calendar_name: DEFAULT_CALENDAR_NAME.to_string(),
        }
    }
}

impl IcsOptions {
    /// Sets the calendar display name.
    pub fn with_calendar_name(mut self, name: impl Into<String>) -> Self {
        self.calendar_name = name.into();
        self
    }

    /// Suggested download filename, e.g. `Tamil Panchangam.ics`.
    ///
    /// Characters that would break a `Content-Disposition` header or a path
    /// are replaced with `_`.
    pub fn filename(&self) -> String {
        let stem: String = self
            .calendar_name
            .trim()
            .chars()
            .map(|c| match c {
                '"' | '\\' | '/' | ':' | '*' | '?' | '<' | '>' | '|' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect();
        if stem.is_empty() {
            format!("{DEFAULT_CALENDAR_NAME}.ics")
        } else {
            format!("{stem}.ics")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_includes_everything() {
        let options = IcsOptions::default();
        assert!(options.include_auspicious);
        assert!(options.include_inauspicious);
        assert!(options.include_special_days);
        assert!(options.include_nakshatra);
        assert!(options.include_affliction_warnings);
        assert!(options.include_moon_opposition);
        assert_eq!(options.calendar_name, "Tamil Panchangam");
    }

    #[test]
    fn test_filename() {
        assert_eq!(IcsOptions::default().filename(), "Tamil Panchangam.ics");
        assert_eq!(
            IcsOptions::default()
                .with_calendar_name("My \"Family\" / Temple")
                .filename(),
            "My _Family_ _ Temple.ics"
        );
        assert_eq!(
            IcsOptions::default().with_calendar_name("  ").filename(),
            "Tamil Panchangam.ics"
        );
    }
}
