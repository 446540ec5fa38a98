//! Binary entry point: wires `Cli` into `Config`, opens the input/
//! output/extension streams, runs the pipeline, and reports fatal
//! errors on stderr with a non-zero exit code.

use clap::Parser;
use cnf2xnf::cli::Cli;
use cnf2xnf::journal::Journal;
use cnf2xnf::{dimacs, run_pipeline};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.into_config();

    let level = if config.quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new().filter_level(level).init();

    if let Err(err) = run(&config) {
        eprintln!("cnf2xnf: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(config: &cnf2xnf::config::Config) -> cnf2xnf::types::TransformResult<()> {
    let input_path = config
        .input_path
        .as_deref()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "-".to_string());
    let output_path = config
        .output_path
        .as_deref()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "-".to_string());

    let input = dimacs::open_input(&input_path)?;
    let mut output = dimacs::open_output(&output_path)?;

    match &config.extend_path {
        Some(path) => {
            let sink = std::fs::File::create(path)?;
            let mut journal = Journal::new(sink);
            run_pipeline(input, &mut output, &mut journal, config)
        }
        None => {
            let mut journal = Journal::discarding();
            run_pipeline(input, &mut output, &mut journal, config)
        }
    }
}
