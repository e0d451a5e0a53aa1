//! Command line definition
//!
//! Numeric options are taken as raw text so that bad values (`-5`, `abc`)
//! reach the estimator's own validation rather than clap's.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use calc_core::calculations::{estimate_task, EstimateResult, Task};
use calc_core::errors::CalcResult;
use calc_core::form::parse_positive;

#[derive(Parser, Debug)]
#[command(name = "calc_cli")]
#[command(about = "Material Estimator - bricks, cement, tiles and grout from a room's area", long_about = None)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Settings file (JSON)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Task to estimate; prompts interactively when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Bricks and cement for a wall
    Walls {
        /// Wall area in square feet
        #[arg(long, value_name = "SQFT", allow_hyphen_values = true)]
        area: Option<String>,
    },

    /// Tiles and grout for a floor (12" x 12" tiles when both dimensions are omitted)
    Flooring {
        /// Floor area in square feet
        #[arg(long, value_name = "SQFT", allow_hyphen_values = true)]
        area: Option<String>,

        /// Tile length in inches
        #[arg(long, value_name = "IN", allow_hyphen_values = true)]
        tile_length: Option<String>,

        /// Tile width in inches
        #[arg(long, value_name = "IN", allow_hyphen_values = true)]
        tile_width: Option<String>,
    },
}

impl Command {
    /// Parse the raw option values and run the estimate.
    pub fn run(&self) -> CalcResult<EstimateResult> {
        match self {
            Command::Walls { area } => {
                estimate_task(Task::Walls, parse_option("area_sqft", area)?, None, None)
            }
            Command::Flooring { area, tile_length, tile_width } => estimate_task(
                Task::Flooring,
                parse_option("area_sqft", area)?,
                parse_option("tile_length_in", tile_length)?,
                parse_option("tile_width_in", tile_width)?,
            ),
        }
    }
}

fn parse_option(field: &str, raw: &Option<String>) -> CalcResult<Option<f64>> {
    raw.as_deref().map(|value| parse_positive(field, value)).transpose()
}

/// Process exit status for an estimate outcome
pub fn exit_status<T, E>(outcome: &Result<T, E>) -> u8 {
    if outcome.is_ok() {
        0
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::calculations::Material;

    fn command(args: &[&str]) -> Command {
        let mut argv = vec!["calc_cli"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().command.unwrap()
    }

    #[test]
    fn test_parse_walls() {
        let cli = Cli::try_parse_from(["calc_cli", "walls", "--area", "100"]).unwrap();
        assert_eq!(cli.command, Some(Command::Walls { area: Some("100".to_string()) }));
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_flooring_with_global_flags() {
        let cli = Cli::try_parse_from([
            "calc_cli",
            "flooring",
            "--area",
            "100",
            "--tile-length",
            "18",
            "--tile-width",
            "18",
            "--json",
            "--config",
            "settings.json",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.config, Some(PathBuf::from("settings.json")));

        let result = cli.command.unwrap().run().unwrap();
        assert_eq!(result.get(Material::Tiles), Some(45));
        assert_eq!(result.get(Material::Grout), Some(2));
    }

    #[test]
    fn test_no_subcommand_is_interactive() {
        let cli = Cli::try_parse_from(["calc_cli"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_negative_area_is_invalid_input() {
        let outcome = command(&["walls", "--area", "-5"]).run();
        let err = outcome.as_ref().unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(err.field(), Some("area_sqft"));
        assert_eq!(exit_status(&outcome), 1);
    }

    #[test]
    fn test_non_numeric_values_are_invalid_input() {
        let err = command(&["walls", "--area", "lots"]).run().unwrap_err();
        assert!(err.is_invalid_input());

        let err = command(&["flooring", "--area", "100", "--tile-length", "-12", "--tile-width", "12"])
            .run()
            .unwrap_err();
        assert_eq!(err.field(), Some("tile_length_in"));
    }

    #[test]
    fn test_missing_area_is_invalid_input() {
        let outcome = command(&["walls"]).run();
        assert_eq!(outcome.as_ref().unwrap_err().field(), Some("area_sqft"));
        assert_eq!(exit_status(&outcome), 1);
    }

    #[test]
    fn test_flooring_default_tile() {
        let outcome = command(&["flooring", "--area", "100"]).run();
        assert_eq!(exit_status(&outcome), 0);
        assert_eq!(outcome.unwrap().get(Material::Tiles), Some(100));
    }
}
