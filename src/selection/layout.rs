//! Layout engine: maps each option to its first display line.
//!
//! Answers may contain embedded line breaks and may wrap at the buffer
//! width, so redraws need to know where every answer starts. Offsets are
//! relative to the prompt row: the prompt occupies line 0 and the first
//! answer starts at line 1.

use indexmap::IndexMap;

use super::undecorate;
use crate::error::{Error, Result};

/// Computes the starting display line of every entry at the given width.
///
/// Keys are the undecorated entry texts. Offsets are strictly increasing
/// in list order and account for the wrapped line count of every prior
/// entry.
///
/// # Errors
///
/// Fails with [`Error::DuplicateOption`] when two entries normalize to
/// the same undecorated text.
pub(crate) fn compute_offsets(entries: &[String], width: u16) -> Result<IndexMap<String, u16>> {
    let mut offsets = IndexMap::with_capacity(entries.len());
    let mut current_line: u16 = 0;

    for entry in entries {
        let key = undecorate(entry).to_string();
        if offsets.insert(key.clone(), current_line + 1).is_some() {
            return Err(Error::DuplicateOption(key));
        }

        current_line += line_span(entry, width);
    }

    Ok(offsets)
}

/// Number of display lines the entry occupies at the given width.
pub(crate) fn line_span(entry: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    entry
        .split('\n')
        .map(|line| (line.chars().count() / width) as u16 + 1)
        .sum()
}

/// Total display lines of all entries at the given width.
pub(crate) fn total_lines(entries: &[String], width: u16) -> u16 {
    entries.iter().map(|entry| line_span(entry, width)).sum()
}

/// Width needed to show every physical line without wrapping, plus one
/// trailing column.
pub(crate) fn content_width(entries: &[String]) -> u16 {
    let longest = entries
        .iter()
        .flat_map(|entry| entry.split('\n'))
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    u16::try_from(longest + 1).unwrap_or(u16::MAX - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(texts: &[&str]) -> Vec<String> {
        texts.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn offsets_start_below_the_prompt() {
        let offsets = compute_offsets(&entries(&["One", "Two"]), 80).unwrap();
        assert_eq!(offsets["One"], 1);
        assert_eq!(offsets["Two"], 2);
    }

    #[test]
    fn offsets_account_for_embedded_line_breaks() {
        let offsets = compute_offsets(&entries(&["One\nMore", "Two", "Three"]), 80).unwrap();
        assert_eq!(offsets["One\nMore"], 1);
        assert_eq!(offsets["Two"], 3);
        assert_eq!(offsets["Three"], 4);
    }

    #[test]
    fn offsets_account_for_wrapping() {
        // 10 chars at width 4 -> 3 display lines
        let offsets = compute_offsets(&entries(&["aaaaaaaaaa", "b"]), 4).unwrap();
        assert_eq!(offsets["aaaaaaaaaa"], 1);
        assert_eq!(offsets["b"], 4);
    }

    #[test]
    fn offsets_are_strictly_increasing() {
        for width in [1u16, 3, 10, 120] {
            let offsets =
                compute_offsets(&entries(&["short", "a longer entry", "x\ny", "last"]), width)
                    .unwrap();
            let values: Vec<u16> = offsets.values().copied().collect();
            assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn offsets_use_undecorated_keys() {
        let offsets = compute_offsets(&entries(&["Yes [ ]", "No [X]"]), 80).unwrap();
        assert_eq!(offsets["Yes"], 1);
        assert_eq!(offsets["No"], 2);
    }

    #[test]
    fn duplicate_entries_are_rejected() {
        let result = compute_offsets(&entries(&["Yes", "Yes"]), 80);
        assert!(matches!(result, Err(Error::DuplicateOption(text)) if text == "Yes"));
    }

    #[test]
    fn duplicate_after_undecoration_is_rejected() {
        let result = compute_offsets(&entries(&["Yes [ ]", "Yes [X]"]), 80);
        assert!(matches!(result, Err(Error::DuplicateOption(text)) if text == "Yes"));
    }

    #[test]
    fn line_span_counts_exact_multiples() {
        assert_eq!(line_span("abcd", 4), 2);
        assert_eq!(line_span("abc", 4), 1);
        assert_eq!(line_span("", 4), 1);
    }

    #[test]
    fn content_width_is_longest_physical_line_plus_one() {
        assert_eq!(content_width(&entries(&["ab", "abcde\nxy"])), 6);
        assert_eq!(content_width(&entries(&[])), 1);
    }
}
