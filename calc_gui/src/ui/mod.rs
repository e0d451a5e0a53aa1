//! UI module for the Material Estimator GUI
//!
//! # Panel Structure
//! - `toolbar` - Title, Clear and theme buttons, data source links
//! - `input_panel` - Left: task picker, area and tile inputs, Estimate button
//! - `results_panel` - Right: estimated materials or the validation message
//! - `status_bar` - Bottom status messages and form phase

pub mod input_panel;
pub mod results_panel;
pub mod status_bar;
pub mod toolbar;
