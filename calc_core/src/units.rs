//! # Unit Types
//!
//! Type-safe wrappers for the units the estimator deals in. These keep room
//! areas (square feet) apart from tile dimensions (inches) while serializing
//! as plain numbers.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Inches, SqFt, SqIn};
//!
//! let tile = Inches(12.0) * Inches(12.0);
//! assert_eq!(tile, SqIn(144.0));
//!
//! let tile_sqft: SqFt = tile.into();
//! assert_eq!(tile_sqft.0, 1.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// Square inches per square foot
pub const SQIN_PER_SQFT: f64 = 144.0;

// ============================================================================
// Length Units
// ============================================================================

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Inches x inches gives square inches
impl Mul for Inches {
    type Output = SqIn;
    fn mul(self, rhs: Self) -> SqIn {
        SqIn(self.0 * rhs.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqIn(pub f64);

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

impl From<SqIn> for SqFt {
    fn from(sqin: SqIn) -> Self {
        SqFt(sqin.0 / SQIN_PER_SQFT)
    }
}

impl SqFt {
    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }
}
