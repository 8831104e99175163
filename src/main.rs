//! PGN header extraction CLI.

use anyhow::Result;
use chess_headers::chess::{
    LoadOptions, LoadOutcome, load_games, log::init_logging, open_pgn, write_damaged_report,
    write_records,
};
use clap::Parser;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging(cli.log_level.into()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let compression = cli.compression.resolve(&cli.input_path);
    let source = open_pgn(&cli.input_path, compression)?;
    let options = LoadOptions {
        max_games: cli.max_games,
        report_every: cli.report_every,
    };

    let outcome = load_games(source, &options, |count: usize| {
        println!("Loaded {count} games so far...");
    })?;

    print_summary(&outcome);

    println!("Saving the data to {}...", cli.output_path.display());
    write_records(&cli.output_path, &outcome.records)?;

    if let Some(path) = &cli.damaged_out {
        write_damaged_report(path, &outcome.damaged, &outcome.causes)?;
        println!("Wrote damaged headers to {}.", path.display());
    }
    println!("Saved. Run finished.");
    Ok(())
}

fn print_summary(outcome: &LoadOutcome) {
    println!("Loaded {} games.", outcome.records.len());
    println!("Found {} damaged headers:", outcome.causes.len());
    for (cause, headers) in outcome.causes.iter().zip(&outcome.damaged) {
        println!("   Cause: {cause}\t Headers: {headers}.");
    }
}
