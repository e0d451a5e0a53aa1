//! # Material Estimates
//!
//! Each estimate follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `calculate(input) -> Result<EstimateResult, CalcError>` - Pure calculation function
//!
//! [`EstimateInput`] wraps the per-task inputs so callers can dispatch with a
//! single [`estimate`] call. [`estimate_task`] accepts loose optional values
//! the way a form or command line supplies them.
//!
//! ## Available Estimates
//!
//! - [`walls`] - Bricks and cement for a wall area
//! - [`flooring`] - Tiles and grout for a floor area
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::{estimate_task, Material, Task};
//!
//! let result = estimate_task(Task::Flooring, Some(100.0), None, None).unwrap();
//! assert_eq!(result.get(Material::Tiles), Some(100));
//! ```

pub mod flooring;
pub mod result;
pub mod walls;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};

// Re-export commonly used types
pub use flooring::{FlooringInput, DEFAULT_TILE_IN};
pub use result::{EstimateResult, Material, MaterialQuantity};
pub use walls::WallsInput;

/// The construction activity being estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Task {
    Walls,
    Flooring,
}

impl Task {
    /// All tasks, in menu order
    pub const ALL: [Task; 2] = [Task::Walls, Task::Flooring];

    /// Lowercase identifier ("walls", "flooring")
    pub fn name(&self) -> &'static str {
        match self {
            Task::Walls => "walls",
            Task::Flooring => "flooring",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Task::Walls => "Walls",
            Task::Flooring => "Flooring",
        }
    }

    /// Whether this task needs tile length and width
    pub fn requires_tile_dimensions(&self) -> bool {
        matches!(self, Task::Flooring)
    }

    /// Materials this task produces, in output order
    pub fn materials(&self) -> [Material; 2] {
        match self {
            Task::Walls => [Material::Bricks, Material::Cement],
            Task::Flooring => [Material::Tiles, Material::Grout],
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Task {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "walls" => Ok(Task::Walls),
            "flooring" => Ok(Task::Flooring),
            _ => Err(CalcError::invalid_input(
                "task",
                s,
                "Expected 'walls' or 'flooring'",
            )),
        }
    }
}

/// Input for any estimate, tagged by task.
///
/// ## JSON Example
///
/// ```json
/// { "task": "walls", "area_sqft": 100.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "task", rename_all = "lowercase")]
pub enum EstimateInput {
    Walls(WallsInput),
    Flooring(FlooringInput),
}

impl EstimateInput {
    pub fn task(&self) -> Task {
        match self {
            EstimateInput::Walls(_) => Task::Walls,
            EstimateInput::Flooring(_) => Task::Flooring,
        }
    }

    pub fn area_sqft(&self) -> f64 {
        match self {
            EstimateInput::Walls(w) => w.area_sqft,
            EstimateInput::Flooring(f) => f.area_sqft,
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        match self {
            EstimateInput::Walls(w) => w.validate(),
            EstimateInput::Flooring(f) => f.validate(),
        }
    }
}

/// Run the estimate for a tagged input.
pub fn estimate(input: &EstimateInput) -> CalcResult<EstimateResult> {
    let result = match input {
        EstimateInput::Walls(w) => walls::calculate(w)?,
        EstimateInput::Flooring(f) => flooring::calculate(f)?,
    };
    debug!(task = input.task().name(), area_sqft = input.area_sqft(), ?result, "estimate computed");
    Ok(result)
}

/// Run an estimate from loosely supplied values.
///
/// `area` is always required. Tile dimensions only matter for
/// [`Task::Flooring`]: leaving both out selects a 12" x 12" tile, while
/// supplying only one of them is an error. Walls ignore tile dimensions.
///
/// # Errors
///
/// `CalcError::InvalidInput` naming the first missing or non-positive field.
pub fn estimate_task(
    task: Task,
    area: Option<f64>,
    tile_length: Option<f64>,
    tile_width: Option<f64>,
) -> CalcResult<EstimateResult> {
    let area_sqft = area.ok_or_else(|| CalcError::missing_field("area_sqft"))?;

    let input = match task {
        Task::Walls => EstimateInput::Walls(WallsInput { area_sqft }),
        Task::Flooring => {
            let (tile_length_in, tile_width_in) = match (tile_length, tile_width) {
                (None, None) => (DEFAULT_TILE_IN, DEFAULT_TILE_IN),
                (Some(length), Some(width)) => (length, width),
                (None, Some(_)) => return Err(CalcError::missing_field("tile_length_in")),
                (Some(_), None) => return Err(CalcError::missing_field("tile_width_in")),
            };
            EstimateInput::Flooring(FlooringInput { area_sqft, tile_length_in, tile_width_in })
        }
    };

    estimate(&input)
}

/// Reject values that are not finite positive numbers.
pub(crate) fn validate_positive(field: &str, value: f64, label: &str) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("{} must be a finite number", label),
        ));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("{} must be positive", label),
        ));
    }
    Ok(())
}
