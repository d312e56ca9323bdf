//! Selection controller: one interactive session per invocation.
//!
//! The session owns all mutable interaction state (offset map, search
//! buffer, cursor baseline, saved geometry) and discards it on every exit
//! path, restoring cursor visibility and the original buffer width first.
//! Terminal capability is probed once up front; a surface that cannot
//! report the cursor row is handed to the numbered fallback prompt for
//! the remainder of the call.

use std::collections::HashSet;
use std::time::Instant;

use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, warn};

use super::input::{self, SearchBuffer};
use super::{fallback, layout, render, EMPTY_CHECKBOX, FILLED_CHECKBOX};
use crate::console::{Console, Key};
use crate::error::{Error, Result};

/// Width applied while measuring content, wide enough that nothing wraps
const MEASUREMENT_WIDTH: u16 = u16::MAX - 1;

/// Runs a single-choice session and returns the confirmed index.
pub(crate) fn run_single<C: Console>(
    console: &mut C,
    prompt: &str,
    options: Vec<String>,
) -> Result<usize> {
    let selected = run(console, prompt, options, None)?;
    Ok(selected.first().copied().unwrap_or_default())
}

/// Runs a multi-choice session and returns the ascending, deduplicated
/// set of toggled indices, excluding the finish entry.
pub(crate) fn run_multi<C: Console>(
    console: &mut C,
    prompt: &str,
    finish_label: &str,
    options: Vec<String>,
) -> Result<Vec<usize>> {
    run(console, prompt, options, Some(finish_label))
}

fn run<C: Console>(
    console: &mut C,
    prompt: &str,
    options: Vec<String>,
    finish_label: Option<&str>,
) -> Result<Vec<usize>> {
    if options.is_empty() {
        return Err(Error::EmptyOptions);
    }
    validate_unique(&options)?;

    let multi = finish_label.is_some();
    let entries = build_entries(options, finish_label);

    // Capability probe; on failure the whole call runs line-oriented.
    if console.cursor_row().is_err() {
        warn!("terminal does not support cursor addressing, using the numbered fallback prompt");
        return fallback::run(console, prompt, &entries, multi);
    }

    SelectSession::start(console, prompt, entries, multi)
}

/// Builds the fresh owned display list: the caller's options, decorated
/// with unchecked boxes in multi-select, plus the undecorated finish
/// entry.
fn build_entries(options: Vec<String>, finish_label: Option<&str>) -> Vec<String> {
    match finish_label {
        None => options,
        Some(finish) => options
            .into_iter()
            .map(|option| format!("{option}{EMPTY_CHECKBOX}"))
            .chain(std::iter::once(finish.to_string()))
            .collect(),
    }
}

fn validate_unique(options: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for option in options {
        if !seen.insert(option.as_str()) {
            return Err(Error::DuplicateOption(option.clone()));
        }
    }

    Ok(())
}

struct SelectSession<'a, C: Console> {
    console: &'a mut C,
    prompt: &'a str,
    entries: Vec<String>,
    multi: bool,
    offsets: IndexMap<String, u16>,
    /// Row of the prompt; entry rows are `baseline + offset`
    baseline: u16,
    /// Width the offsets were computed at
    set_width: u16,
    /// Fixed content width used when re-applying the buffer width
    content_width: u16,
    start_buffer_width: u16,
}

impl<'a, C: Console> SelectSession<'a, C> {
    fn start(
        console: &'a mut C,
        prompt: &'a str,
        entries: Vec<String>,
        multi: bool,
    ) -> Result<Vec<usize>> {
        let start_buffer_width = console.buffer_width()?;

        let (set_width, content_width, offsets, baseline) =
            match Self::settle_geometry(console, &entries) {
                Ok(geometry) => geometry,
                Err(e) => {
                    // Setup failed part-way; hand the geometry back
                    // before surfacing the error
                    let _ = console.set_buffer_width(start_buffer_width);
                    let _ = console.set_cursor_visible(true);
                    return Err(e);
                }
            };

        let mut session = Self {
            console,
            prompt,
            entries,
            multi,
            offsets,
            baseline,
            set_width,
            content_width,
            start_buffer_width,
        };

        let result = session.interact();
        session.restore_terminal();
        result
    }

    /// Measures the content, settles the buffer width, and computes the
    /// offset map. Leaves the cursor hidden on success.
    fn settle_geometry(
        console: &mut C,
        entries: &[String],
    ) -> Result<(u16, u16, IndexMap<String, u16>, u16)> {
        // Measure at a width nothing wraps at, then settle on the larger
        // of the content width and the window.
        console.set_buffer_width(MEASUREMENT_WIDTH)?;
        let content_width = layout::content_width(entries);
        let window_width = console.window_width()?;
        console.set_buffer_width(content_width.max(window_width))?;

        let set_width = console.buffer_width()?;
        let offsets = layout::compute_offsets(entries, set_width)?;
        let baseline = console.cursor_row()?;
        console.set_cursor_visible(false)?;

        Ok((set_width, content_width, offsets, baseline))
    }

    fn interact(&mut self) -> Result<Vec<usize>> {
        self.console.write_line(self.prompt)?;
        render::draw_all(self.console, &self.entries, &self.offsets, self.baseline, 0)?;

        let finish_index = self.entries.len() - 1;
        let mut index = 0usize;
        let mut selected: Vec<usize> = Vec::new();
        let mut search = SearchBuffer::new();

        loop {
            let row_before = self.console.cursor_row()?;
            let key = self.console.read_key()?;
            search.tick(Instant::now());

            if self.monitor_viewport(row_before)? {
                render::draw_all(
                    self.console,
                    &self.entries,
                    &self.offsets,
                    self.baseline,
                    index,
                )?;
            }

            if key == Key::Enter {
                search.clear();

                if !self.multi {
                    selected.push(index);
                    break;
                }

                if index == finish_index {
                    break;
                }

                self.toggle(index, &mut selected)?;
                continue;
            }

            let new_index = input::next_index(key, index, &self.entries, &mut search);
            if new_index != index {
                render::draw_entry(
                    self.console,
                    &self.entries,
                    &self.offsets,
                    self.baseline,
                    index,
                    false,
                )?;
                index = new_index;
            }

            render::draw_entry(
                self.console,
                &self.entries,
                &self.offsets,
                self.baseline,
                index,
                true,
            )?;
        }

        if self.multi {
            selected.retain(|&i| i != finish_index);
            return Ok(selected.into_iter().sorted().dedup().collect());
        }

        Ok(selected)
    }

    /// Flips the checkbox for `index` and its membership in `selected`.
    fn toggle(&mut self, index: usize, selected: &mut Vec<usize>) -> Result<()> {
        if let Some(position) = selected.iter().position(|&i| i == index) {
            selected.remove(position);
            self.entries[index] = self.entries[index].replace(FILLED_CHECKBOX, EMPTY_CHECKBOX);
        } else {
            selected.push(index);
            self.entries[index] = self.entries[index].replace(EMPTY_CHECKBOX, FILLED_CHECKBOX);
        }

        render::draw_entry(
            self.console,
            &self.entries,
            &self.offsets,
            self.baseline,
            index,
            true,
        )
    }

    /// Detects scrolls and width changes that happened during the key
    /// wait. A cursor row delta not caused by our own writes shifts the
    /// baseline; a width change recomputes the offset map. Returns true
    /// when the caller must repaint the whole list.
    fn monitor_viewport(&mut self, row_before: u16) -> Result<bool> {
        let row_after = self.console.cursor_row()?;
        if row_after != row_before {
            let shifted =
                i32::from(self.baseline) + i32::from(row_after) - i32::from(row_before);
            self.baseline = u16::try_from(shifted.max(0)).unwrap_or(0);
            debug!(
                "cursor row moved from {row_before} to {row_after}, baseline now {}",
                self.baseline
            );
        }

        let window_width = self.console.window_width()?;
        self.console
            .set_buffer_width(self.content_width.max(window_width))?;

        let width = self.console.buffer_width()?;
        if width == self.set_width {
            return Ok(false);
        }

        debug!(
            "viewport width changed from {} to {width}, recomputing layout",
            self.set_width
        );

        // The new layout may span fewer rows than the old one; blank the
        // old extent so no stale lines survive the repaint
        let stale_rows = layout::total_lines(&self.entries, self.set_width);
        self.set_width = width;
        self.offsets = layout::compute_offsets(&self.entries, width)?;
        render::blank_rows(self.console, self.baseline + 1, stale_rows)?;
        Ok(true)
    }

    /// Best-effort cleanup, run on every exit path: blank the rendered
    /// rows, park the cursor on the prompt row, and hand the terminal
    /// back the way it was found.
    fn restore_terminal(&mut self) {
        let used_rows = 1 + layout::total_lines(&self.entries, self.set_width);
        let _ = render::blank_rows(self.console, self.baseline, used_rows);
        let _ = self.console.set_cursor_visible(true);
        let _ = self.console.set_buffer_width(self.start_buffer_width);
    }
}
