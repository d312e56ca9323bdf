use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use serde::Deserialize;
use strum::{Display, EnumString, VariantNames};

use quick_pick::error::{Error, Result};
use quick_pick::{
    select_enum_value, select_many_as_strings, select_one_as_string,
};

/// Demo driver for the quick-pick selection widget.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// YAML file providing `prompt`, `options` and an optional `finish`
    /// label; omit to use the built-in list
    #[arg(short = 'f', long)]
    options_file: Option<String>,

    /// Offer the options as a multiple choice list
    #[arg(short, long)]
    multi: bool,

    /// Label of the entry that ends a multiple choice session
    #[arg(long, default_value = "Done")]
    finish: String,
}

#[derive(Deserialize, Debug)]
struct OptionList {
    prompt: String,
    options: Vec<String>,
    finish: Option<String>,
}

impl OptionList {
    fn built_in(multi: bool, finish: &str) -> Self {
        Self {
            prompt: "What would you like on your sandwich?".to_string(),
            options: ["Cheese", "Ham", "Pickles", "Mustard"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            finish: multi.then(|| finish.to_string()),
        }
    }
}

#[derive(Debug, Display, EnumString, VariantNames)]
enum NextAction {
    PickAgain,
    Quit,
}

fn load_option_list(path: &str) -> Result<OptionList> {
    let expanded = shellexpand::tilde(path).to_string();
    debug!("Loading option list from `{expanded}`");

    let reader = File::open(&expanded)
        .map_err(|e| Error::io_error("option list".to_string(), expanded.clone(), e))?;

    serde_yaml::from_reader(reader)
        .map_err(|e| Error::yaml_error("option list".to_string(), expanded, e))
}

fn execute(args: &Args) -> Result<()> {
    let option_list = match &args.options_file {
        Some(path) => load_option_list(path)?,
        None => OptionList::built_in(args.multi, &args.finish),
    };

    loop {
        match &option_list.finish {
            Some(finish) => {
                let picks =
                    select_many_as_strings(&option_list.prompt, finish, &option_list.options)?;
                println!("You picked: {}", picks.join(", "));
            }
            None => {
                let pick = select_one_as_string(&option_list.prompt, &option_list.options)?;
                println!("You picked: {pick}");
            }
        }

        if matches!(
            select_enum_value::<NextAction>("And now?")?,
            NextAction::Quit
        ) {
            return Ok(());
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
