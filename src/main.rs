#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod error;
mod fmt;
mod journal;
mod logging;
mod prelude;
mod quantity;

use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use clap::{Parser, crate_version};
use itertools::Itertools;

use crate::{
    cli::Args,
    core::{
        convert::{ConversionTable, convert_energy},
        energy::calculate_energy,
    },
    error::Failure,
    fmt::format_energy,
    journal::{Journal, TracingJournal},
    prelude::*,
    quantity::{power::Watts, time::Seconds},
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    logging::init(&args.log_dir)?;
    info!(version = crate_version!(), "starting…");

    println!("🔋 Energy calculator\n");

    let table = ConversionTable::new();
    let journal = TracingJournal;
    match run(&mut std::io::stdin().lock(), &mut std::io::stdout(), &table, &journal) {
        Ok(()) => {}
        Err(Failure::Validation(error)) => {
            journal.error(format!("input error: {error}"));
            println!("❌ Error: {error}");
        }
        Err(Failure::Unexpected(error)) => {
            journal.error(format!("unexpected error: {error:#}"));
            println!("❌ An unexpected error occurred. Check the log file.");
        }
    }
    Ok(())
}

/// Run the pipeline: prompt, validate, calculate, convert, format, print.
#[instrument(skip_all)]
fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    table: &ConversionTable,
    journal: &dyn Journal,
) -> Result<(), Failure> {
    let power: Watts = prompt(input, output, "Enter power in Watts (W): ")?;
    let time: Seconds = prompt(input, output, "Enter time in seconds (s): ")?;

    let energy = calculate_energy(power, time, journal)?;
    writeln!(output, "\nComputed energy: {}", format_energy(energy.0, "J"))?;

    writeln!(output, "\nAvailable units: {}", table.units().join(", "))?;
    let target_unit: String = prompt(input, output, "Enter unit to convert to: ")?;

    let converted = convert_energy(table, energy, &target_unit, journal)?;
    writeln!(output, "Result: {}", format_energy(converted, &target_unit))?;
    Ok(())
}

/// Prompt for one line and parse it, trimmed of surrounding whitespace.
fn prompt<T: FromStr>(input: &mut impl BufRead, output: &mut impl Write, text: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    write!(output, "{text}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    line.trim().parse().with_context(|| format!("failed to parse `{}`", line.trim()))
}
