use std::path::PathBuf;
use std::process::exit;
use std::str::FromStr;

use clap::Parser;
use rust_decimal::Decimal;

mod dto;
mod model;

use model::converter::AmountToWords;
use model::translator::Translator;

/// Print the English words for a dollars-and-cents amount
#[derive(Parser)]
#[command()]
struct Cli {
    /// Amount in dollars with 1-cent precision, e.g. 123.04
    amount: String,

    /// Location of a custom translation table
    #[arg(long = "translations")]
    translations: Option<PathBuf>,
}

fn load_translator(path: Option<&PathBuf>) -> anyhow::Result<Translator> {
    match path {
        Some(path) => {
            log::debug!("loading translation table from {}", path.display());
            dto::load_translations(path)
        }
        None => {
            log::debug!("using the embedded English translation table");
            dto::default_translations()
        }
    }
}

fn main() {
    env_logger::init();

    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    let amount = match Decimal::from_str(&args.amount) {
        Ok(amount) => amount,
        Err(_) => {
            eprintln!("amount must be a valid decimal number");
            exit(1);
        }
    };
    if amount < Decimal::ZERO {
        eprintln!("amount must be non-negative");
        exit(2);
    }

    let translator = match load_translator(args.translations.as_ref()) {
        Ok(translator) => translator,
        Err(err) => {
            eprintln!("{err:#}");
            exit(1);
        }
    };

    match AmountToWords::new(&translator).convert(amount) {
        Ok(words) => println!("{words}"),
        Err(err) => {
            eprintln!("{err}");
            exit(1);
        }
    }
}
