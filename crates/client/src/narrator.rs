//! Spoken narration of a day.
//!
//! The server only produces text. How it is voiced is up to the [`Narrator`]
//! handed in; the CLI ships a console narrator that prints one sentence per
//! line.

use std::io::Write;

use panchangam_core::almanac::{narration_chunks, DailyAlmanacEntry};

use crate::error::Result;

/// Something that can voice a sentence.
pub trait Narrator {
    fn speak(&mut self, sentence: &str) -> Result<()>;
}

/// Writes each sentence on its own line.
pub struct ConsoleNarrator<W: Write> {
    out: W,
}

impl<W: Write> ConsoleNarrator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Narrator for ConsoleNarrator<W> {
    fn speak(&mut self, sentence: &str) -> Result<()> {
        writeln!(self.out, "{sentence}")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Narrates `entry` sentence by sentence. Returns how many were spoken.
pub fn narrate<N: Narrator + ?Sized>(entry: &DailyAlmanacEntry, narrator: &mut N) -> Result<usize> {
    let chunks = narration_chunks(entry);
    for chunk in &chunks {
        narrator.speak(chunk)?;
    }
    Ok(chunks.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use panchangam_core::almanac::sample_entry;

    #[test]
    fn test_console_narrator_writes_one_line_per_chunk() {
        let entry = sample_entry();
        let mut narrator = ConsoleNarrator::new(Vec::new());

        let spoken = narrate(&entry, &mut narrator).unwrap();

        let text = String::from_utf8(narrator.into_inner()).unwrap();
        assert_eq!(spoken, narration_chunks(&entry).len());
        assert_eq!(text.lines().count(), spoken);
        assert!(text.starts_with("இன்றைய பஞ்சாங்கம் 15 9 2025."));
    }

    struct Recording(Vec<String>);

    impl Narrator for Recording {
        fn speak(&mut self, sentence: &str) -> Result<()> {
            self.0.push(sentence.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_custom_narrator() {
        let mut narrator = Recording(Vec::new());
        narrate(&sample_entry(), &mut narrator).unwrap();
        assert!(narrator.0.iter().any(|s| s.starts_with("திதி:")));
    }
}
