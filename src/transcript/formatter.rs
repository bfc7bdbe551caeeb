use super::CaptionEntry;

/// Separator placed between formatted entries
pub const ENTRY_DELIMITER: &str = "|";

/// Render one entry as `"<start:.2> seconds: <text>"`
pub fn format_entry(entry: &CaptionEntry) -> String {
    format!("{:.2} seconds: {}", entry.start, entry.text)
}

/// Flatten entries into one string, keeping their order
///
/// No trailing delimiter; an empty slice yields an empty string.
pub fn format_transcript(entries: &[CaptionEntry]) -> String {
    entries
        .iter()
        .map(format_entry)
        .collect::<Vec<_>>()
        .join(ENTRY_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_entries() {
        let entries = vec![CaptionEntry::new(0.0, "Hi"), CaptionEntry::new(1.5, "there")];

        assert_eq!(
            format_transcript(&entries),
            "0.00 seconds: Hi|1.50 seconds: there"
        );
    }

    #[test]
    fn test_empty_is_empty_string() {
        assert_eq!(format_transcript(&[]), "");
    }

    #[test]
    fn test_single_entry_has_no_delimiter() {
        let entries = vec![CaptionEntry::new(3.0, "only one")];
        assert_eq!(format_transcript(&entries), "3.00 seconds: only one");
    }

    #[test]
    fn test_delimiter_count() {
        let entries: Vec<CaptionEntry> = (0..7)
            .map(|i| CaptionEntry::new(i as f64 * 2.5, format!("line {}", i)))
            .collect();

        let transcript = format_transcript(&entries);
        assert_eq!(transcript.matches('|').count(), entries.len() - 1);
    }

    #[test]
    fn test_two_decimal_places() {
        assert_eq!(format_entry(&CaptionEntry::new(5.0, "a")), "5.00 seconds: a");
        assert_eq!(format_entry(&CaptionEntry::new(12.345, "b")), "12.35 seconds: b");
        assert_eq!(format_entry(&CaptionEntry::new(61.1, "c")), "61.10 seconds: c");
    }

    #[test]
    fn test_order_is_preserved() {
        // Provider order wins even when start times are not sorted
        let entries = vec![CaptionEntry::new(9.0, "late"), CaptionEntry::new(1.0, "early")];
        assert_eq!(
            format_transcript(&entries),
            "9.00 seconds: late|1.00 seconds: early"
        );
    }
}
