use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::map::{PARTY, WALL};

/// Entries kept in the event log and shown beneath the map.
pub const LOG_MAX_ENTRIES: usize = 8;

/// Emits one glyph at a time. Styling is presentation only.
pub trait GlyphWriter {
    fn write_glyph(&mut self, glyph: char, out: &mut dyn Write) -> io::Result<()>;
}

pub struct PlainGlyphWriter;

impl GlyphWriter for PlainGlyphWriter {
    fn write_glyph(&mut self, glyph: char, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{glyph}")
    }
}

/// Highlights the party in blue and rock in red.
pub struct AnsiGlyphWriter;

impl GlyphWriter for AnsiGlyphWriter {
    fn write_glyph(&mut self, glyph: char, out: &mut dyn Write) -> io::Result<()> {
        match glyph {
            PARTY => write!(out, "{}", glyph.blue().bold()),
            WALL => write!(out, "{}", glyph.red().bold()),
            _ => write!(out, "{glyph}"),
        }
    }
}

pub fn draw_canvas(
    lines: &[String],
    writer: &mut dyn GlyphWriter,
    out: &mut dyn Write,
) -> io::Result<()> {
    for line in lines {
        for glyph in line.chars() {
            writer.write_glyph(glyph, out)?;
        }
        writer.write_glyph('\n', out)?;
    }
    out.flush()
}

pub fn draw_log(log: &[String], out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "-- Event Log --")?;
    for entry in log.iter().take(LOG_MAX_ENTRIES) {
        writeln!(out, "  {entry}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_writer_passes_through() {
        let lines = vec!["#^@ ".to_string(), "*A1#".to_string()];
        let mut out = Vec::new();
        draw_canvas(&lines, &mut PlainGlyphWriter, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "#^@ \n*A1#\n");
    }

    #[test]
    fn test_ansi_writer_styles_party_and_rock_only() {
        let mut out = Vec::new();
        let mut writer = AnsiGlyphWriter;
        for glyph in ['@', '#', '^', 'A'] {
            writer.write_glyph(glyph, &mut out).unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('\u{1b}'));
        assert!(text.ends_with("^A"));
        assert_eq!(text.matches('@').count(), 1);
        assert_eq!(text.matches('#').count(), 1);
    }

    #[test]
    fn test_log_shows_newest_entries() {
        let log: Vec<String> = (0..10).map(|n| format!("entry {n}")).collect();
        let mut out = Vec::new();
        draw_log(&log, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1 + LOG_MAX_ENTRIES);
        assert!(text.contains("entry 7"));
        assert!(!text.contains("entry 8"));
    }
}
