//! # calc_core - Material Estimation Engine
//!
//! `calc_core` turns a room's area (and, for flooring, tile dimensions) into
//! whole-unit material quantities. All inputs and outputs are
//! JSON-serializable so the same engine backs the CLI, the GUI and any
//! scripted use.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Round Up**: Every quantity is a ceiling, never truncated
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::{estimate, EstimateInput, WallsInput};
//!
//! let input = EstimateInput::Walls(WallsInput { area_sqft: 100.0 });
//! let result = estimate(&input).unwrap();
//!
//! let json = serde_json::to_string(&result).unwrap();
//! assert_eq!(json, r#"{"bricks":700,"cement":3}"#);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Walls and flooring estimates
//! - [`form`] - Form state shared by the front ends
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`settings`] - Front-end preferences
//! - [`sources`] - Reference data credits

pub mod calculations;
pub mod errors;
pub mod form;
pub mod settings;
pub mod sources;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{estimate, estimate_task, EstimateInput, EstimateResult, Material, Task};
pub use errors::{CalcError, CalcResult};
pub use form::{EstimatorForm, FormPhase, FORM_INCOMPLETE_MESSAGE};
pub use settings::{load_settings, OutputFormat, Settings};
