//! Numbered, line-oriented selection for terminals without cursor
//! addressing.
//!
//! Same selection semantics as the interactive path: single-select
//! accepts the first valid index, multi-select toggles until the finish
//! entry's index is entered, and the result is ascending and
//! deduplicated.

use itertools::Itertools;

use super::undecorate;
use crate::console::Console;
use crate::error::Result;

const EXPLANATION: &str = "This terminal does not support the interactive list view.\n\
Selection will use numbered input instead: type the number of an answer and press enter.";

pub(crate) fn run<C: Console>(
    console: &mut C,
    prompt: &str,
    entries: &[String],
    multi: bool,
) -> Result<Vec<usize>> {
    console.write_line(EXPLANATION)?;

    let entries: Vec<&str> = entries.iter().map(|entry| undecorate(entry)).collect();
    let finish_index = entries.len() - 1;
    let mut selected: Vec<usize> = Vec::new();

    loop {
        if multi {
            console.write_line("Selected answers:")?;
            for &i in &selected {
                console.write_line(entries[i])?;
            }
            console.write_line("")?;
        }

        console.write_line(prompt)?;
        for (i, entry) in entries.iter().enumerate() {
            console.write_line(&format!("Enter {i} for: {entry}"))?;
        }

        let choice = match console.read_line()?.trim().parse::<usize>() {
            Ok(choice) if choice < entries.len() => choice,
            _ => {
                console.write_line("Invalid choice, please enter one of the listed numbers.")?;
                continue;
            }
        };

        if !multi {
            return Ok(vec![choice]);
        }

        if choice == finish_index {
            return Ok(selected.into_iter().sorted().dedup().collect());
        }

        if let Some(position) = selected.iter().position(|&i| i == choice) {
            selected.remove(position);
        } else {
            selected.push(choice);
        }
    }
}
