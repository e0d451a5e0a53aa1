//! # Flooring Estimate
//!
//! Tile and grout quantities for a floor of a given area.
//!
//! - `tile_area = (tile_length * tile_width) / 144` (square feet per tile)
//! - `tiles = ceil(area / tile_area)`
//! - `grout = ceil(area * 0.02)`
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::flooring::{calculate, FlooringInput};
//! use calc_core::calculations::Material;
//!
//! let input = FlooringInput {
//!     area_sqft: 100.0,
//!     tile_length_in: 18.0,
//!     tile_width_in: 18.0,
//! };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.get(Material::Tiles), Some(45));
//! assert_eq!(result.get(Material::Grout), Some(2));
//! ```

use serde::{Deserialize, Serialize};

use super::result::{round_up, EstimateResult, Material, MaterialQuantity};
use super::validate_positive;
use crate::errors::{CalcError, CalcResult};
use crate::units::{Inches, SqFt};

/// Tile edge used when the caller leaves both dimensions out
pub const DEFAULT_TILE_IN: f64 = 12.0;

/// Grout units per square foot of floor
pub const GROUT_PER_SQFT: f64 = 0.02;

/// Input parameters for a flooring estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area_sqft": 100.0,
///   "tile_length_in": 12.0,
///   "tile_width_in": 12.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlooringInput {
    /// Floor area in square feet
    pub area_sqft: f64,

    /// Tile length in inches
    pub tile_length_in: f64,

    /// Tile width in inches
    pub tile_width_in: f64,
}

impl FlooringInput {
    /// Flooring input using the default 12" x 12" tile.
    pub fn with_default_tile(area_sqft: f64) -> Self {
        FlooringInput {
            area_sqft,
            tile_length_in: DEFAULT_TILE_IN,
            tile_width_in: DEFAULT_TILE_IN,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        validate_positive("area_sqft", self.area_sqft, "Area")?;
        validate_positive("tile_length_in", self.tile_length_in, "Tile length")?;
        validate_positive("tile_width_in", self.tile_width_in, "Tile width")?;

        let tile_area = self.tile_area().value();
        if !tile_area.is_finite() || tile_area <= 0.0 {
            return Err(CalcError::invalid_input(
                "tile_area_sqft",
                tile_area.to_string(),
                "Tile dimensions give an unusable tile area",
            ));
        }
        Ok(())
    }

    /// Area covered by one tile
    pub fn tile_area(&self) -> SqFt {
        (Inches(self.tile_length_in) * Inches(self.tile_width_in)).into()
    }
}

/// Calculate tile and grout quantities.
///
/// # Returns
///
/// * `Ok(EstimateResult)` - `tiles` then `grout`
/// * `Err(CalcError::InvalidInput)` - If any dimension is not a positive number,
///   the tile area is unusable, or a quantity cannot be counted
pub fn calculate(input: &FlooringInput) -> CalcResult<EstimateResult> {
    input.validate()?;

    let area = input.area_sqft;
    let tiles = round_up(Material::Tiles, area / input.tile_area().value())?;
    let grout = round_up(Material::Grout, area * GROUT_PER_SQFT)?;

    Ok(EstimateResult::new(vec![
        MaterialQuantity { material: Material::Tiles, quantity: tiles },
        MaterialQuantity { material: Material::Grout, quantity: grout },
    ]))
}
