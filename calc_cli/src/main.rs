//! # Material Estimator CLI
//!
//! Terminal interface for the material estimator.
//!
//! ```text
//! calc_cli walls --area 100
//! calc_cli flooring --area 100 --tile-length 18 --tile-width 18 --json
//! calc_cli                      # interactive prompts
//! ```

mod cli;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use calc_core::calculations::{EstimateResult, Task};
use calc_core::errors::{CalcError, CalcResult};
use calc_core::form::EstimatorForm;
use calc_core::settings::{self, OutputFormat};
use calc_core::sources::{DATA_SOURCES, INTRO};

use crate::cli::{exit_status, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match settings::load_or_default(cli.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&settings.log_filter);
    debug!(command = ?cli.command, json = cli.json, "arguments parsed");

    let output = if cli.json { OutputFormat::Json } else { settings.output };

    let outcome = match &cli.command {
        Some(command) => command.run(),
        None => run_interactive(),
    };

    match &outcome {
        Ok(result) => {
            if let Err(e) = print_result(result, output) {
                eprintln!("Error: failed to serialize result: {}", e);
                return ExitCode::FAILURE;
            }
        }
        Err(e) => print_error(e, output),
    }
    ExitCode::from(exit_status(&outcome))
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Print a prompt and read one line; I/O failures and EOF read as empty.
fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_string()
}

/// Walk the user through the form one field at a time.
fn run_interactive() -> CalcResult<EstimateResult> {
    println!("Material Estimator");
    println!("==================");
    println!();
    println!("{}", INTRO);
    for source in &DATA_SOURCES {
        println!("  - {}: {}", source.label, source.url);
    }
    println!();

    let mut form = EstimatorForm::new();

    let task = loop {
        let raw = prompt_line("Select Task (walls/flooring): ");
        if raw.is_empty() {
            return Err(CalcError::missing_field("task"));
        }
        match raw.parse::<Task>() {
            Ok(task) => break task,
            Err(_) => println!("Unknown task '{}'. Choose walls or flooring.", raw),
        }
    };
    form.set_task(task);

    form.set_area(prompt_line("Enter Area (sq ft) [e.g., 100]: "));
    if form.requires_tile_dimensions() {
        form.set_tile_length(prompt_line("Enter Tile Length (in) [e.g., 12]: "));
        form.set_tile_width(prompt_line("Enter Tile Width (in) [e.g., 12]: "));
    }
    println!();

    form.submit().cloned()
}

fn print_result(result: &EstimateResult, output: OutputFormat) -> Result<(), serde_json::Error> {
    match output {
        OutputFormat::Text => {
            println!("Estimated Materials:");
            for row in result.display_rows() {
                println!("  {}", row);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
    }
    Ok(())
}

fn print_error(error: &CalcError, output: OutputFormat) {
    eprintln!("{}", error.user_message());
    if error.is_invalid_input() {
        eprintln!("  {}", error);
    }
    if output == OutputFormat::Json {
        if let Ok(json) = serde_json::to_string_pretty(error) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::calculations::estimate_task;

    #[test]
    fn test_print_result_reports_success() {
        let result = estimate_task(Task::Walls, Some(100.0), None, None).unwrap();
        assert!(print_result(&result, OutputFormat::Text).is_ok());
        assert!(print_result(&result, OutputFormat::Json).is_ok());
    }
}
