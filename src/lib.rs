//! Quick Pick
//!
//! An interactive terminal list-selection widget: show a prompt and a
//! list of answers, let the user navigate with the keyboard (including
//! type-to-search), and get back the chosen index or indices.
//!
//! # Key Features
//!
//! - **Single choice**: highlight and confirm one answer
//! - **Multiple choice**: toggle checkboxes and finish with a sentinel
//!   entry
//! - **Multi-line answers**: wrapped and embedded-newline answers render
//!   and redraw correctly
//! - **Resize recovery**: the widget stays aligned when the terminal
//!   scrolls or changes width mid-interaction
//! - **Fallback mode**: terminals without cursor addressing get a
//!   numbered line-oriented prompt with the same semantics
//! - **Enum adapters**: select directly into an enum that derives
//!   `strum::VariantNames` and `strum::EnumString`
//!
//! # Examples
//!
//! ```no_run
//! use quick_pick::{select_one_as_string, select_many};
//!
//! let flavor = select_one_as_string("Pick a flavor:", &["Vanilla", "Chocolate"])?;
//!
//! let toppings = select_many(
//!     "Pick your toppings:",
//!     "Done",
//!     &["Sprinkles", "Fudge", "Cherries"],
//! )?;
//! # Ok::<(), quick_pick::Error>(())
//! ```

pub mod console;
pub mod enum_choice;
pub mod error;
pub mod selection;

pub use console::{Console, CrosstermConsole, Key};
pub use enum_choice::{
    select_enum_value, select_enum_value_with, select_many_enum_values,
    select_many_enum_values_with,
};
pub use error::{Error, Result};
pub use selection::{
    select_many, select_many_as_strings, select_many_as_strings_with, select_many_with,
    select_one, select_one_as_string, select_one_as_string_with, select_one_with,
};
