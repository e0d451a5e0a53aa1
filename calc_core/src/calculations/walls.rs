//! # Wall Estimate
//!
//! Brick and cement quantities for a wall of a given face area.
//!
//! - `bricks = ceil(area * 7)`
//! - `cement = ceil((area * 0.75 * 0.2) / 7)`
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::walls::{calculate, WallsInput};
//! use calc_core::calculations::Material;
//!
//! let result = calculate(&WallsInput { area_sqft: 100.0 }).unwrap();
//! assert_eq!(result.get(Material::Bricks), Some(700));
//! assert_eq!(result.get(Material::Cement), Some(3));
//! ```

use serde::{Deserialize, Serialize};

use super::result::{round_up, EstimateResult, Material, MaterialQuantity};
use super::validate_positive;
use crate::errors::CalcResult;

/// Bricks laid per square foot of wall
pub const BRICKS_PER_SQFT: f64 = 7.0;

/// Mortar volume factor applied to the wall area
pub const MORTAR_FACTOR: f64 = 0.75;

/// Share of the mortar that is cement
pub const CEMENT_FRACTION: f64 = 0.2;

/// Divisor converting cement volume to bags
pub const CEMENT_PER_BAG: f64 = 7.0;

/// Input parameters for a wall estimate.
///
/// ## JSON Example
///
/// ```json
/// { "area_sqft": 100.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallsInput {
    /// Wall face area in square feet
    pub area_sqft: f64,
}

impl WallsInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        validate_positive("area_sqft", self.area_sqft, "Area")
    }
}

/// Calculate brick and cement quantities.
///
/// # Returns
///
/// * `Ok(EstimateResult)` - `bricks` then `cement`
/// * `Err(CalcError::InvalidInput)` - If the area is not a positive number,
///   or is so large a quantity cannot be counted
pub fn calculate(input: &WallsInput) -> CalcResult<EstimateResult> {
    input.validate()?;

    let area = input.area_sqft;
    let bricks = round_up(Material::Bricks, area * BRICKS_PER_SQFT)?;
    let cement = round_up(Material::Cement, (area * MORTAR_FACTOR * CEMENT_FRACTION) / CEMENT_PER_BAG)?;

    Ok(EstimateResult::new(vec![
        MaterialQuantity { material: Material::Bricks, quantity: bricks },
        MaterialQuantity { material: Material::Cement, quantity: cement },
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hundred_square_feet() {
        let result = calculate(&WallsInput { area_sqft: 100.0 }).unwrap();
        // 0.75 * 0.2 * 100 / 7 = 2.142..., rounds up to 3
        assert_eq!(result.get(Material::Bricks), Some(700));
        assert_eq!(result.get(Material::Cement), Some(3));
    }

    #[test]
    fn test_key_order() {
        let result = calculate(&WallsInput { area_sqft: 12.0 }).unwrap();
        let keys: Vec<_> = result.iter().map(|item| item.material.name()).collect();
        assert_eq!(keys, vec!["bricks", "cement"]);
    }

    #[test]
    fn test_matches_formula_across_areas() {
        for &area in &[0.1, 1.0, 3.3, 46.67, 100.0, 250.5, 1000.0, 12345.678] {
            let result = calculate(&WallsInput { area_sqft: area }).unwrap();
            assert_eq!(result.get(Material::Bricks), Some((area * 7.0).ceil() as u64));
            assert_eq!(
                result.get(Material::Cement),
                Some(((area * 0.75 * 0.2) / 7.0).ceil() as u64)
            );
        }
    }

    #[test]
    fn test_fractional_area_rounds_up() {
        // 0.5 * 7 = 3.5 bricks -> 4; cement 0.0107 -> 1
        let result = calculate(&WallsInput { area_sqft: 0.5 }).unwrap();
        assert_eq!(result.get(Material::Bricks), Some(4));
        assert_eq!(result.get(Material::Cement), Some(1));
    }

    #[test]
    fn test_huge_area_is_rejected() {
        let err = calculate(&WallsInput { area_sqft: 1e300 }).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(err.field(), Some("area_sqft"));
    }

    #[test]
    fn test_invalid_area() {
        assert!(calculate(&WallsInput { area_sqft: 0.0 }).is_err());
        assert!(calculate(&WallsInput { area_sqft: -10.0 }).is_err());
        assert!(calculate(&WallsInput { area_sqft: f64::NAN }).is_err());
    }
}
