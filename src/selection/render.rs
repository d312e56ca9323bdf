//! Drawing for the interactive selection list.
//!
//! The full list is painted once; afterwards only rows whose visual state
//! changed are cleared and reprinted. Highlighting is a foreground color
//! swap, with a neutral substitute when the surrounding text already uses
//! the highlight color.

use crossterm::style::Color;
use indexmap::IndexMap;

use super::{layout, undecorate};
use crate::console::Console;
use crate::error::Result;

const HIGHLIGHT: Color = Color::Cyan;

/// Substitute when the active foreground already equals [`HIGHLIGHT`]
const HIGHLIGHT_FALLBACK: Color = Color::Grey;

/// Paints every entry in order, highlighting `highlighted`.
///
/// Starts at the first answer row and writes sequentially, so multi-line
/// and wrapped entries flow naturally.
pub(crate) fn draw_all<C: Console>(
    console: &mut C,
    entries: &[String],
    offsets: &IndexMap<String, u16>,
    baseline: u16,
    highlighted: usize,
) -> Result<()> {
    console.move_to_row(baseline + 1)?;

    for (i, entry) in entries.iter().enumerate() {
        if i == highlighted {
            draw_entry(console, entries, offsets, baseline, i, true)?;
        } else {
            console.write_line(entry)?;
        }
    }

    Ok(())
}

/// Clears the rows of one entry's line span and reprints it, highlighted
/// or plain.
pub(crate) fn draw_entry<C: Console>(
    console: &mut C,
    entries: &[String],
    offsets: &IndexMap<String, u16>,
    baseline: u16,
    index: usize,
    highlighted: bool,
) -> Result<()> {
    let entry = &entries[index];
    let row = baseline + offsets[undecorate(entry)];

    let span = layout::line_span(entry, console.buffer_width()?);
    for cleared in row..row.saturating_add(span) {
        console.clear_row(cleared)?;
    }
    console.move_to_row(row)?;

    if highlighted {
        let previous = console.foreground();
        let color = if previous == HIGHLIGHT {
            HIGHLIGHT_FALLBACK
        } else {
            HIGHLIGHT
        };

        console.set_foreground(color)?;
        console.write_line(entry)?;
        console.set_foreground(previous)?;
    } else {
        console.write_line(entry)?;
    }

    Ok(())
}

/// Blanks `count` rows starting at `from` and parks the cursor at `from`.
pub(crate) fn blank_rows<C: Console>(console: &mut C, from: u16, count: u16) -> Result<()> {
    for row in from..from.saturating_add(count) {
        console.clear_row(row)?;
    }

    console.move_to_row(from)?;
    Ok(())
}
