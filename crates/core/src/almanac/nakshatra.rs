//! The 27 nakshatras and every spelling the almanac store uses for them.
//!
//! Names arrive in English transliteration (several variants per star) or in
//! Tamil script. All lookups go through one static alias table so that the
//! affliction check, the Tamil display name, and narration agree.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// One of the 27 lunar mansions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigasira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

impl Nakshatra {
    pub const ALL: [Nakshatra; 27] = [
        Nakshatra::Ashwini,
        Nakshatra::Bharani,
        Nakshatra::Krittika,
        Nakshatra::Rohini,
        Nakshatra::Mrigasira,
        Nakshatra::Ardra,
        Nakshatra::Punarvasu,
        Nakshatra::Pushya,
        Nakshatra::Ashlesha,
        Nakshatra::Magha,
        Nakshatra::PurvaPhalguni,
        Nakshatra::UttaraPhalguni,
        Nakshatra::Hasta,
        Nakshatra::Chitra,
        Nakshatra::Swati,
        Nakshatra::Vishakha,
        Nakshatra::Anuradha,
        Nakshatra::Jyeshtha,
        Nakshatra::Mula,
        Nakshatra::PurvaAshadha,
        Nakshatra::UttaraAshadha,
        Nakshatra::Shravana,
        Nakshatra::Dhanishta,
        Nakshatra::Shatabhisha,
        Nakshatra::PurvaBhadrapada,
        Nakshatra::UttaraBhadrapada,
        Nakshatra::Revati,
    ];

    /// Canonical English transliteration.
    pub fn english(&self) -> &'static str {
        match self {
            Nakshatra::Ashwini => "Ashwini",
            Nakshatra::Bharani => "Bharani",
            Nakshatra::Krittika => "Krittika",
            Nakshatra::Rohini => "Rohini",
            Nakshatra::Mrigasira => "Mrigasira",
            Nakshatra::Ardra => "Ardra",
            Nakshatra::Punarvasu => "Punarvasu",
            Nakshatra::Pushya => "Pushya",
            Nakshatra::Ashlesha => "Ashlesha",
            Nakshatra::Magha => "Magha",
            Nakshatra::PurvaPhalguni => "Purva Phalguni",
            Nakshatra::UttaraPhalguni => "Uttara Phalguni",
            Nakshatra::Hasta => "Hasta",
            Nakshatra::Chitra => "Chitra",
            Nakshatra::Swati => "Swati",
            Nakshatra::Vishakha => "Vishakha",
            Nakshatra::Anuradha => "Anuradha",
            Nakshatra::Jyeshtha => "Jyeshtha",
            Nakshatra::Mula => "Mula",
            Nakshatra::PurvaAshadha => "Purva Ashadha",
            Nakshatra::UttaraAshadha => "Uttara Ashadha",
            Nakshatra::Shravana => "Shravana",
            Nakshatra::Dhanishta => "Dhanishta",
            Nakshatra::Shatabhisha => "Shatabhisha",
            Nakshatra::PurvaBhadrapada => "Purva Bhadrapada",
            Nakshatra::UttaraBhadrapada => "Uttara Bhadrapada",
            Nakshatra::Revati => "Revati",
        }
    }

    /// Tamil name as used in the almanac rows.
    pub fn tamil(&self) -> &'static str {
        match self {
            Nakshatra::Ashwini => "அசுவினி",
            Nakshatra::Bharani => "பரணி",
            Nakshatra::Krittika => "கார்த்திகை",
            Nakshatra::Rohini => "ரோகிணி",
            Nakshatra::Mrigasira => "மிருகசீரிடம்",
            Nakshatra::Ardra => "திருவாதிரை",
            Nakshatra::Punarvasu => "புனர்பூசம்",
            Nakshatra::Pushya => "பூசம்",
            Nakshatra::Ashlesha => "ஆயில்யம்",
            Nakshatra::Magha => "மகம்",
            Nakshatra::PurvaPhalguni => "பூரம்",
            Nakshatra::UttaraPhalguni => "உத்திரம்",
            Nakshatra::Hasta => "ஹஸ்தம்",
            Nakshatra::Chitra => "சித்திரை",
            Nakshatra::Swati => "சுவாதி",
            Nakshatra::Vishakha => "விசாகம்",
            Nakshatra::Anuradha => "அனுஷம்",
            Nakshatra::Jyeshtha => "கேட்டை",
            Nakshatra::Mula => "மூலம்",
            Nakshatra::PurvaAshadha => "பூராடம்",
            Nakshatra::UttaraAshadha => "உத்திராடம்",
            Nakshatra::Shravana => "திருவோணம்",
            Nakshatra::Dhanishta => "அவிட்டம்",
            Nakshatra::Shatabhisha => "சதயம்",
            Nakshatra::PurvaBhadrapada => "பூரட்டாதி",
            Nakshatra::UttaraBhadrapada => "உத்திரட்டாதி",
            Nakshatra::Revati => "ரேவதி",
        }
    }

    /// Resolves any known spelling, English (case-insensitive) or Tamil.
    pub fn resolve(name: &str) -> Option<Self> {
        ALIASES.get(&normalize(name)).copied()
    }

    /// Whether this star belongs to the affliction (RS) group.
    pub fn is_afflicted(&self) -> bool {
        AFFLICTED.contains(self)
    }
}

impl fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english())
    }
}

/// Alternate spellings seen in almanac rows, beyond the canonical names.
const ALTERNATE_SPELLINGS: &[(&str, Nakshatra)] = &[
    ("Mrigashira", Nakshatra::Mrigasira),
    ("Mrigashirsha", Nakshatra::Mrigasira),
    ("மிருகசீரிஷம்", Nakshatra::Mrigasira),
    ("Arudra", Nakshatra::Ardra),
    ("Punarpusam", Nakshatra::Punarvasu),
    ("Pushyami", Nakshatra::Pushya),
    ("Ayilyam", Nakshatra::Ashlesha),
    ("Makha", Nakshatra::Magha),
    ("Pooram", Nakshatra::PurvaPhalguni),
    ("Uthiram", Nakshatra::UttaraPhalguni),
    ("Hastam", Nakshatra::Hasta),
    ("Chithira", Nakshatra::Chitra),
    ("Chithirai", Nakshatra::Chitra),
    ("Swathi", Nakshatra::Swati),
    ("ஸ்வாதி", Nakshatra::Swati),
    ("Visakha", Nakshatra::Vishakha),
    ("Vishakam", Nakshatra::Vishakha),
    ("Anusham", Nakshatra::Anuradha),
    ("Jyeshta", Nakshatra::Jyeshtha),
    ("Kettai", Nakshatra::Jyeshtha),
    ("Moolam", Nakshatra::Mula),
    ("Pooradam", Nakshatra::PurvaAshadha),
    ("Uthiradam", Nakshatra::UttaraAshadha),
    ("Thiruvonam", Nakshatra::Shravana),
    ("Avittam", Nakshatra::Dhanishta),
    ("Sadayam", Nakshatra::Shatabhisha),
    ("Poorattadhi", Nakshatra::PurvaBhadrapada),
    ("Uthirattadhi", Nakshatra::UttaraBhadrapada),
    ("Revathi", Nakshatra::Revati),
];

/// The affliction (RS, தீதுரு) group as it is written in the almanac.
/// Swati appears under both of its common spellings.
pub const AFFLICTION_NAMES: [&str; 13] = [
    "Bharani",
    "Krittika",
    "Ardra",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Chitra",
    "Swati",
    "Swathi",
    "Vishakha",
    "Jyeshtha",
    "Purva Ashadha",
    "Purva Bhadrapada",
];

/// Tamil summary of what to avoid on an afflicted day.
pub const AFFLICTION_AVOID_SUMMARY: &str =
    "தவிர்க்க வேண்டியவை: மருத்துவ சிகிச்சை, பயணம், நிதி பரிவர்த்தனைகள்";

static ALIASES: LazyLock<HashMap<String, Nakshatra>> = LazyLock::new(|| {
    let mut aliases = HashMap::new();
    for nakshatra in Nakshatra::ALL {
        aliases.insert(normalize(nakshatra.english()), nakshatra);
        aliases.insert(normalize(nakshatra.tamil()), nakshatra);
    }
    for (name, nakshatra) in ALTERNATE_SPELLINGS {
        aliases.insert(normalize(name), *nakshatra);
    }
    aliases
});

static AFFLICTED: LazyLock<HashSet<Nakshatra>> = LazyLock::new(|| {
    AFFLICTION_NAMES
        .iter()
        .filter_map(|name| Nakshatra::resolve(name))
        .collect()
});

fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Whether a nakshatra name, in any spelling, belongs to the affliction group.
/// Unknown names are not afflicted.
pub fn is_afflicted(name: &str) -> bool {
    Nakshatra::resolve(name).is_some_and(|n| n.is_afflicted())
}

/// Tamil name for any known spelling; unknown names are returned unchanged.
pub fn to_tamil(name: &str) -> String {
    Nakshatra::resolve(name)
        .map(|n| n.tamil().to_string())
        .unwrap_or_else(|| name.trim().to_string())
}

/// Tamil names for a list of nakshatras, keeping first-seen order and
/// dropping duplicates (rows often list a star in both scripts).
pub fn to_tamil_names(names: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .iter()
        .map(|name| to_tamil(name))
        .filter(|name| !name.is_empty() && seen.insert(name.clone()))
        .collect()
}

/// What the day view shows for an afflicted nakshatra.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AfflictionInfo {
    pub nakshatra_name: String,
    pub nakshatra_name_tamil: String,
    pub avoid_medical: bool,
    pub avoid_travel: bool,
    pub avoid_financial: bool,
    pub short_description: String,
}

/// Affliction details for a nakshatra name, or None if it is not afflicted.
pub fn affliction_info(name: &str) -> Option<AfflictionInfo> {
    let nakshatra = Nakshatra::resolve(name).filter(|n| n.is_afflicted())?;
    Some(AfflictionInfo {
        nakshatra_name: name.trim().to_string(),
        nakshatra_name_tamil: nakshatra.tamil().to_string(),
        avoid_medical: true,
        avoid_travel: true,
        avoid_financial: true,
        short_description: AFFLICTION_AVOID_SUMMARY.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_canonical_name_resolves_to_itself() {
        for nakshatra in Nakshatra::ALL {
            assert_eq!(Nakshatra::resolve(nakshatra.english()), Some(nakshatra));
            assert_eq!(Nakshatra::resolve(nakshatra.tamil()), Some(nakshatra));
        }
    }

    #[test]
    fn test_resolve_is_case_and_space_insensitive() {
        assert_eq!(
            Nakshatra::resolve("  purva   PHALGUNI "),
            Some(Nakshatra::PurvaPhalguni)
        );
        assert_eq!(Nakshatra::resolve("MRIGASHIRSHA"), Some(Nakshatra::Mrigasira));
    }

    #[test]
    fn test_alternate_spellings() {
        assert_eq!(Nakshatra::resolve("Kettai"), Some(Nakshatra::Jyeshtha));
        assert_eq!(Nakshatra::resolve("Chithirai"), Some(Nakshatra::Chitra));
        assert_eq!(Nakshatra::resolve("மிருகசீரிஷம்"), Some(Nakshatra::Mrigasira));
        assert_eq!(
            Nakshatra::resolve("Uthirattadhi"),
            Some(Nakshatra::UttaraBhadrapada)
        );
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(Nakshatra::resolve("Pluto"), None);
        assert!(!is_afflicted("Pluto"));
        assert_eq!(to_tamil("Pluto"), "Pluto");
    }

    #[test]
    fn test_affliction_group_has_twelve_stars() {
        assert_eq!(AFFLICTED.len(), 12);
    }

    #[test]
    fn test_affliction_membership_in_both_scripts() {
        assert!(is_afflicted("Swati"));
        assert!(is_afflicted("Swathi"));
        assert!(is_afflicted("ஸ்வாதி"));
        assert!(is_afflicted("பரணி"));
        assert!(is_afflicted("Purva Bhadrapada"));
        assert!(!is_afflicted("Mrigasira"));
        assert!(!is_afflicted("மிருகசீரிடம்"));
        assert!(!is_afflicted("Rohini"));
    }

    #[test]
    fn test_tamil_names_deduplicates() {
        let names = vec!["Vishakha".to_string(), "விசாகம்".to_string()];
        assert_eq!(to_tamil_names(&names), vec!["விசாகம்"]);
    }

    #[test]
    fn test_affliction_info() {
        let info = affliction_info("Bharani").unwrap();
        assert_eq!(info.nakshatra_name, "Bharani");
        assert_eq!(info.nakshatra_name_tamil, "பரணி");
        assert!(info.avoid_medical && info.avoid_travel && info.avoid_financial);
        assert_eq!(info.short_description, AFFLICTION_AVOID_SUMMARY);

        assert!(affliction_info("Rohini").is_none());
    }
}
