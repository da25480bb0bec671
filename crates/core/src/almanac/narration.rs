//! Spoken summary of a day, as a sequence of short Tamil sentences.
//!
//! Speech itself is not done here; callers hand the chunks to whatever voice
//! they have.

use chrono::Datelike;

use super::nakshatra::{affliction_info, to_tamil_names};
use super::special_day::SpecialDay;
use super::types::DailyAlmanacEntry;

/// Builds the narration for one day, one sentence per chunk.
pub fn narration_chunks(entry: &DailyAlmanacEntry) -> Vec<String> {
    let date = entry.date;
    let mut chunks = vec![
        format!(
            "இன்றைய பஞ்சாங்கம் {} {} {}.",
            date.day(),
            date.month(),
            date.year()
        ),
        format!("கிழமை: {}.", entry.vaara.as_deref().unwrap_or_default()),
        format!(
            "நட்சத்திரம்: {}.",
            entry.main_nakshatra.as_deref().unwrap_or_default()
        ),
        format!(
            "நட்சத்திர யோகம்: {}.",
            entry.nakshatra_yogam.as_deref().unwrap_or_default()
        ),
        format!("திதி: {}.", entry.tithi_name().unwrap_or_default()),
    ];

    if let Some(phase) = entry.moon_phase() {
        chunks.push(format!("சந்திரன் நிலை: {}.", phase.tamil()));
    }

    let special_day = SpecialDay::headline(entry)
        .map(|day| day.label())
        .unwrap_or_else(|| "Normal Day".to_string());

    chunks.extend([
        format!(
            "ராகு காலம்: {}.",
            entry.rahu_kalam.as_deref().unwrap_or_default()
        ),
        format!(
            "எமகண்டம்: {}.",
            entry.yamagandam.as_deref().unwrap_or_default()
        ),
        format!(
            "சந்திராஷ்டமம்: {}.",
            to_tamil_names(&entry.chandrashtama_for).join(", ")
        ),
        format!("விசேஷ நாள்: {special_day}."),
    ]);

    if let Some(info) = entry.primary_nakshatra().and_then(affliction_info) {
        chunks.push(format!(
            "கவனம்! இன்று {} தீதுரு நட்சத்திரம்.",
            info.nakshatra_name_tamil
        ));
        chunks.push(
            "இந்த நட்சத்திரத்தில் மருத்துவ சிகிச்சை, பயணம், மற்றும் பண பரிவர்த்தனை தவிர்க்க வேண்டும்."
                .to_string(),
        );
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::almanac::sample_entry;
    use chrono::NaiveDate;

    #[test]
    fn test_sample_narration() {
        let chunks = narration_chunks(&sample_entry());

        assert_eq!(chunks[0], "இன்றைய பஞ்சாங்கம் 15 9 2025.");
        assert_eq!(chunks[1], "கிழமை: திங்கட்கிழமை.");
        assert_eq!(chunks[2], "நட்சத்திரம்: மிருகசீரிடம்.");
        assert_eq!(chunks[4], "திதி: நவமி.");
        assert_eq!(chunks[5], "சந்திரன் நிலை: தேய்பிறை.");
        assert_eq!(chunks[6], "ராகு காலம்: 7:30 AM - 9:00 AM.");
        assert_eq!(chunks[8], "சந்திராஷ்டமம்: விசாகம்.");
        assert_eq!(chunks[9], "விசேஷ நாள்: நவமி (Navami).");
        assert_eq!(chunks.len(), 10);
    }

    #[test]
    fn test_afflicted_day_adds_warning() {
        let mut entry = DailyAlmanacEntry::new(NaiveDate::from_ymd_opt(2025, 9, 20).unwrap());
        entry.main_nakshatra = Some("Bharani".to_string());

        let chunks = narration_chunks(&entry);

        assert!(chunks.contains(&"கவனம்! இன்று பரணி தீதுரு நட்சத்திரம்.".to_string()));
        assert!(chunks.last().unwrap().contains("தவிர்க்க வேண்டும்"));
    }

    #[test]
    fn test_no_moon_phase_chunk_without_data() {
        let entry = DailyAlmanacEntry::new(NaiveDate::from_ymd_opt(2025, 9, 20).unwrap());
        let chunks = narration_chunks(&entry);

        assert!(!chunks.iter().any(|c| c.starts_with("சந்திரன் நிலை")));
        assert_eq!(chunks.len(), 9);
    }
}
