//! # Estimate Results
//!
//! An [`EstimateResult`] is an ordered list of material quantities. Walls
//! produce `bricks` then `cement`; flooring produces `tiles` then `grout`.
//! Quantities are whole purchase units, always rounded up.
//!
//! ## JSON Example
//!
//! ```json
//! { "bricks": 700, "cement": 3 }
//! ```

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::errors::{CalcError, CalcResult};

/// A material the estimator can quantify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Bricks,
    Cement,
    Tiles,
    Grout,
}

impl Material {
    /// Key used in result mappings (lowercase)
    pub fn name(&self) -> &'static str {
        match self {
            Material::Bricks => "bricks",
            Material::Cement => "cement",
            Material::Tiles => "tiles",
            Material::Grout => "grout",
        }
    }

    /// Capitalized label for display rows
    pub fn display_name(&self) -> &'static str {
        match self {
            Material::Bricks => "Bricks",
            Material::Cement => "Cement",
            Material::Tiles => "Tiles",
            Material::Grout => "Grout",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialQuantity {
    pub material: Material,
    pub quantity: u64,
}

/// Ordered mapping from material to required whole-unit quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateResult {
    items: Vec<MaterialQuantity>,
}

impl EstimateResult {
    pub(crate) fn new(items: Vec<MaterialQuantity>) -> Self {
        EstimateResult { items }
    }

    /// Quantity for a material, if this estimate includes it
    pub fn get(&self, material: Material) -> Option<u64> {
        self.items
            .iter()
            .find(|item| item.material == material)
            .map(|item| item.quantity)
    }

    /// Quantity looked up by lowercase material name (e.g. "bricks")
    pub fn get_by_name(&self, name: &str) -> Option<u64> {
        self.items
            .iter()
            .find(|item| item.material.name() == name)
            .map(|item| item.quantity)
    }

    /// Rows in output order
    pub fn items(&self) -> &[MaterialQuantity] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialQuantity> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Display rows in the form `Bricks: 700`
    pub fn display_rows(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| format!("{}: {}", item.material.display_name(), item.quantity))
            .collect()
    }
}

impl Serialize for EstimateResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len()))?;
        for item in &self.items {
            map.serialize_entry(item.material.name(), &item.quantity)?;
        }
        map.end()
    }
}

/// Round a fractional quantity up to whole purchase units.
///
/// Quantities that are not finite or do not fit in a `u64` are `InvalidInput`.
pub(crate) fn round_up(material: Material, value: f64) -> CalcResult<u64> {
    let units = value.ceil();
    if !units.is_finite() || units < 0.0 || units >= u64::MAX as f64 {
        return Err(CalcError::invalid_input(
            "area_sqft",
            value.to_string(),
            format!("Estimated {} is out of range", material.name()),
        ));
    }
    Ok(units as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walls_result() -> EstimateResult {
        EstimateResult::new(vec![
            MaterialQuantity { material: Material::Bricks, quantity: 700 },
            MaterialQuantity { material: Material::Cement, quantity: 3 },
        ])
    }

    #[test]
    fn test_lookup() {
        let result = walls_result();
        assert_eq!(result.get(Material::Bricks), Some(700));
        assert_eq!(result.get_by_name("cement"), Some(3));
        assert_eq!(result.get(Material::Tiles), None);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_json_preserves_order() {
        let json = serde_json::to_string(&walls_result()).unwrap();
        assert_eq!(json, r#"{"bricks":700,"cement":3}"#);
    }

    #[test]
    fn test_display_rows() {
        assert_eq!(walls_result().display_rows(), vec!["Bricks: 700", "Cement: 3"]);
    }

    #[test]
    fn test_round_up() {
        assert_eq!(round_up(Material::Bricks, 2.0).unwrap(), 2);
        assert_eq!(round_up(Material::Bricks, 2.0000001).unwrap(), 3);
        assert_eq!(round_up(Material::Grout, 0.01).unwrap(), 1);
    }

    #[test]
    fn test_round_up_rejects_out_of_range() {
        assert!(round_up(Material::Tiles, f64::INFINITY).unwrap_err().is_invalid_input());
        assert!(round_up(Material::Tiles, f64::NAN).is_err());
        assert!(round_up(Material::Bricks, 1e300).is_err());
        assert!(round_up(Material::Bricks, u64::MAX as f64).is_err());
    }
}
