//! Enum-backed selection adapters.
//!
//! Thin wrappers that present an enum's variant names as the option list
//! and map the confirmed label back to a value. The enum supplies both
//! capabilities itself: `strum::VariantNames` for the names and `FromStr`
//! for the reverse mapping.

use std::str::FromStr;

use strum::VariantNames;

use crate::console::{Console, CrosstermConsole};
use crate::error::{Error, Result};
use crate::selection;

/// Prompts the user to pick one variant of `E`.
///
/// # Errors
///
/// Fails with [`Error::UnknownVariant`] when the confirmed label does not
/// parse back to a variant, which indicates the enum's `FromStr` does not
/// round-trip its variant names.
pub fn select_enum_value<E>(prompt: &str) -> Result<E>
where
    E: VariantNames + FromStr,
{
    let mut console = CrosstermConsole::new();
    select_enum_value_with(&mut console, prompt)
}

/// [`select_enum_value`] against a caller-supplied console.
pub fn select_enum_value_with<E, C>(console: &mut C, prompt: &str) -> Result<E>
where
    E: VariantNames + FromStr,
    C: Console,
{
    let label = selection::select_one_as_string_with(console, prompt, E::VARIANTS)?;
    E::from_str(&label).map_err(|_| Error::UnknownVariant(label))
}

/// Prompts the user to pick any number of variants of `E`, in declaration
/// order.
pub fn select_many_enum_values<E>(prompt: &str, finish_label: &str) -> Result<Vec<E>>
where
    E: VariantNames + FromStr,
{
    let mut console = CrosstermConsole::new();
    select_many_enum_values_with(&mut console, prompt, finish_label)
}

/// [`select_many_enum_values`] against a caller-supplied console.
pub fn select_many_enum_values_with<E, C>(
    console: &mut C,
    prompt: &str,
    finish_label: &str,
) -> Result<Vec<E>>
where
    E: VariantNames + FromStr,
    C: Console,
{
    let labels =
        selection::select_many_as_strings_with(console, prompt, finish_label, E::VARIANTS)?;

    labels
        .into_iter()
        .map(|label| E::from_str(&label).map_err(|_| Error::UnknownVariant(label)))
        .collect()
}

#[cfg(test)]
mod tests {
    use strum::{EnumString, VariantNames};

    #[derive(Debug, PartialEq, EnumString, VariantNames)]
    enum Gear {
        Park,
        Drive,
        Reverse,
    }

    #[test]
    fn variant_names_round_trip_through_from_str() {
        for name in Gear::VARIANTS {
            assert!(name.parse::<Gear>().is_ok());
        }

        assert_eq!("Drive".parse::<Gear>().unwrap(), Gear::Drive);
        assert!("NotAGear".parse::<Gear>().is_err());
    }
}
