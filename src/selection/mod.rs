//! Interactive list selection.
//!
//! This module provides the terminal-based selection widget: a prompt
//! followed by a navigable option list with live highlighting, checkbox
//! decorations for multi-select, type-to-search, and a numbered fallback
//! prompt for terminals without cursor addressing.
//!
//! # Key Features
//!
//! - **Single and multi select**: confirm one index, or toggle a subset
//!   and finish with a trailing sentinel entry
//! - **Type-to-search**: jump to the next option matching recently typed
//!   characters
//! - **Resize recovery**: redraws stay aligned when the terminal scrolls
//!   or changes width mid-interaction
//! - **Degraded mode**: a numbered stdin prompt with the same selection
//!   semantics when cursor addressing is unavailable
//!
//! Every `select_*` operation has a `select_*_with` twin taking any
//! [`Console`] implementation; the plain variants drive the real terminal.

mod fallback;
mod input;
mod layout;
mod render;
mod session;

use crate::console::{Console, CrosstermConsole};
use crate::error::Result;

/// Checkbox suffix shown on a not-yet-selected answer in multi-select
pub(crate) const EMPTY_CHECKBOX: &str = " [ ]";

/// Checkbox suffix shown on a selected answer in multi-select
pub(crate) const FILLED_CHECKBOX: &str = " [X]";

/// Strips the checkbox decoration, if any, from a display entry.
///
/// Option identity and offset-map lookups always use the undecorated form.
pub(crate) fn undecorate(entry: &str) -> &str {
    entry
        .strip_suffix(EMPTY_CHECKBOX)
        .or_else(|| entry.strip_suffix(FILLED_CHECKBOX))
        .unwrap_or(entry)
}

fn owned_options<S: AsRef<str>>(options: &[S]) -> Vec<String> {
    options.iter().map(|o| o.as_ref().to_string()).collect()
}

/// Prompts the user to pick exactly one option, returning its index.
///
/// # Errors
///
/// Fails if the option list is empty or contains duplicate texts, or on a
/// terminal I/O error.
pub fn select_one<S: AsRef<str>>(prompt: &str, options: &[S]) -> Result<usize> {
    let mut console = CrosstermConsole::new();
    select_one_with(&mut console, prompt, options)
}

/// [`select_one`] against a caller-supplied console.
pub fn select_one_with<C: Console, S: AsRef<str>>(
    console: &mut C,
    prompt: &str,
    options: &[S],
) -> Result<usize> {
    session::run_single(console, prompt, owned_options(options))
}

/// Prompts the user to pick exactly one option, returning its text.
pub fn select_one_as_string<S: AsRef<str>>(prompt: &str, options: &[S]) -> Result<String> {
    let mut console = CrosstermConsole::new();
    select_one_as_string_with(&mut console, prompt, options)
}

/// [`select_one_as_string`] against a caller-supplied console.
pub fn select_one_as_string_with<C: Console, S: AsRef<str>>(
    console: &mut C,
    prompt: &str,
    options: &[S],
) -> Result<String> {
    let index = select_one_with(console, prompt, options)?;
    Ok(options[index].as_ref().to_string())
}

/// Prompts the user to pick any number of options, finishing when the
/// trailing `finish_label` entry is confirmed.
///
/// The returned indices are ascending, deduplicated, and never include
/// the finish entry.
pub fn select_many<S: AsRef<str>>(
    prompt: &str,
    finish_label: &str,
    options: &[S],
) -> Result<Vec<usize>> {
    let mut console = CrosstermConsole::new();
    select_many_with(&mut console, prompt, finish_label, options)
}

/// [`select_many`] against a caller-supplied console.
pub fn select_many_with<C: Console, S: AsRef<str>>(
    console: &mut C,
    prompt: &str,
    finish_label: &str,
    options: &[S],
) -> Result<Vec<usize>> {
    session::run_multi(console, prompt, finish_label, owned_options(options))
}

/// Prompts the user to pick any number of options, returning their texts
/// in list order.
pub fn select_many_as_strings<S: AsRef<str>>(
    prompt: &str,
    finish_label: &str,
    options: &[S],
) -> Result<Vec<String>> {
    let mut console = CrosstermConsole::new();
    select_many_as_strings_with(&mut console, prompt, finish_label, options)
}

/// [`select_many_as_strings`] against a caller-supplied console.
pub fn select_many_as_strings_with<C: Console, S: AsRef<str>>(
    console: &mut C,
    prompt: &str,
    finish_label: &str,
    options: &[S],
) -> Result<Vec<String>> {
    let indices = select_many_with(console, prompt, finish_label, options)?;
    Ok(indices
        .into_iter()
        .map(|i| options[i].as_ref().to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undecorate_strips_either_checkbox() {
        assert_eq!(undecorate("Alpha [ ]"), "Alpha");
        assert_eq!(undecorate("Alpha [X]"), "Alpha");
        assert_eq!(undecorate("Alpha"), "Alpha");
    }

    #[test]
    fn undecorate_only_strips_the_suffix() {
        assert_eq!(undecorate(" [ ] Alpha"), " [ ] Alpha");
        assert_eq!(undecorate("A [ ] B [X]"), "A [ ] B");
    }
}
