//! Key handling: navigation and type-to-search.
//!
//! Pure state transitions over the entry list. Navigation keys move the
//! highlighted index; character keys feed the search buffer, which jumps
//! to the next entry whose undecorated text starts with the typed prefix.

use std::time::{Duration, Instant};

use super::undecorate;
use crate::console::Key;

/// Inactivity window after which the search buffer resets
const SEARCH_TIMEOUT: Duration = Duration::from_secs(1);

/// Rows jumped by PageUp/PageDown
const PAGE_JUMP: usize = 5;

/// Recently typed characters, expiring after [`SEARCH_TIMEOUT`] of
/// inactivity.
pub(crate) struct SearchBuffer {
    text: String,
    last_press: Option<Instant>,
}

impl SearchBuffer {
    pub(crate) fn new() -> Self {
        Self {
            text: String::new(),
            last_press: None,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.text.clear();
    }

    /// Registers a key press at `now`, dropping the buffer first if the
    /// previous press is too old.
    pub(crate) fn tick(&mut self, now: Instant) {
        if let Some(last_press) = self.last_press {
            if now.duration_since(last_press) > SEARCH_TIMEOUT {
                self.text.clear();
            }
        }

        self.last_press = Some(now);
    }
}

/// Computes the new highlighted index for a key press.
///
/// Up/Down wrap around the ends; PageUp/PageDown move by [`PAGE_JUMP`]
/// clamped to the list; Home/End jump to the ends. All navigation keys
/// and Enter clear the search buffer. A character key extends the buffer
/// and scans circularly (strictly after the current index, then strictly
/// before it); when nothing matches and the extended buffer no longer
/// prefixes the highlighted entry, the buffer resets to the single key
/// and the scan runs once more.
pub(crate) fn next_index(
    key: Key,
    index: usize,
    entries: &[String],
    search: &mut SearchBuffer,
) -> usize {
    let last = entries.len() - 1;

    match key {
        Key::Up => {
            search.clear();
            if index == 0 {
                last
            } else {
                index - 1
            }
        }
        Key::Down => {
            search.clear();
            if index >= last {
                0
            } else {
                index + 1
            }
        }
        Key::PageUp => {
            search.clear();
            index.saturating_sub(PAGE_JUMP)
        }
        Key::PageDown => {
            search.clear();
            (index + PAGE_JUMP).min(last)
        }
        Key::Home => {
            search.clear();
            0
        }
        Key::End => {
            search.clear();
            last
        }
        Key::Enter => {
            search.clear();
            index
        }
        Key::Char(c) => {
            let pressed: String = c.to_lowercase().collect();
            search.text.push_str(&pressed);

            if let Some(found) = find_matching(entries, index, &search.text) {
                return found;
            }

            if search.text.chars().count() > 1 && starts_with(&entries[index], &search.text) {
                return index;
            }

            search.text = pressed;
            find_matching(entries, index, &search.text).unwrap_or(index)
        }
    }
}

fn starts_with(entry: &str, prefix: &str) -> bool {
    undecorate(entry).to_lowercase().starts_with(prefix)
}

/// Circular prefix scan: strictly after `index`, then strictly before it.
fn find_matching(entries: &[String], index: usize, prefix: &str) -> Option<usize> {
    for (i, entry) in entries.iter().enumerate().skip(index + 1) {
        if starts_with(entry, prefix) {
            return Some(i);
        }
    }

    for (i, entry) in entries.iter().enumerate().take(index) {
        if starts_with(entry, prefix) {
            return Some(i);
        }
    }

    None
}
