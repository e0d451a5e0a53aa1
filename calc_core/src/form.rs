//! # Estimator Form
//!
//! Framework-agnostic state behind the estimator form. Front ends own an
//! [`EstimatorForm`], feed it raw text as the user types, and call
//! [`EstimatorForm::submit`] when the Estimate action fires.
//!
//! ```text
//! TaskUnset -> TaskSelected -> InputsEntered -> ResultDisplayed
//!                   ^                                  |
//!                   +---- task or input changed -------+
//! ```
//!
//! Any edit clears a displayed result; a failed submit never leaves a
//! partial or stale result behind.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::{Material, Task};
//! use calc_core::form::EstimatorForm;
//!
//! let mut form = EstimatorForm::new();
//! form.set_task(Task::Walls);
//! form.set_area("100");
//!
//! let result = form.submit().unwrap();
//! assert_eq!(result.get(Material::Bricks), Some(700));
//! ```

use tracing::{debug, warn};

use crate::calculations::{estimate, EstimateInput, EstimateResult, FlooringInput, Task, WallsInput};
use crate::errors::{CalcError, CalcResult};

/// Message shown when the form cannot be estimated
pub const FORM_INCOMPLETE_MESSAGE: &str = "Please fill in all required fields.";

/// Where the form currently sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// No task chosen yet
    TaskUnset,
    /// Task chosen, required fields not all filled in
    TaskSelected,
    /// Every required field has text; not yet estimated
    InputsEntered,
    /// A result is showing for the current inputs
    ResultDisplayed,
}

/// Raw form values plus the last successful estimate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EstimatorForm {
    task: Option<Task>,
    area: String,
    tile_length: String,
    tile_width: String,
    result: Option<EstimateResult>,
}

impl EstimatorForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn task(&self) -> Option<Task> {
        self.task
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    pub fn tile_length(&self) -> &str {
        &self.tile_length
    }

    pub fn tile_width(&self) -> &str {
        &self.tile_width
    }

    /// Last successful estimate, cleared by any edit
    pub fn result(&self) -> Option<&EstimateResult> {
        self.result.as_ref()
    }

    pub fn set_task(&mut self, task: Task) {
        if self.task != Some(task) {
            debug!(task = task.name(), "task selected");
        }
        self.task = Some(task);
        self.result = None;
    }

    pub fn set_area(&mut self, value: impl Into<String>) {
        self.area = value.into();
        self.result = None;
    }

    pub fn set_tile_length(&mut self, value: impl Into<String>) {
        self.tile_length = value.into();
        self.result = None;
    }

    pub fn set_tile_width(&mut self, value: impl Into<String>) {
        self.tile_width = value.into();
        self.result = None;
    }

    /// Tile fields are shown (and required) only for flooring
    pub fn requires_tile_dimensions(&self) -> bool {
        self.task.is_some_and(|t| t.requires_tile_dimensions())
    }

    pub fn phase(&self) -> FormPhase {
        let Some(task) = self.task else {
            return FormPhase::TaskUnset;
        };
        if self.result.is_some() {
            return FormPhase::ResultDisplayed;
        }
        let tiles_filled = !task.requires_tile_dimensions()
            || (!self.tile_length.trim().is_empty() && !self.tile_width.trim().is_empty());
        if !self.area.trim().is_empty() && tiles_filled {
            FormPhase::InputsEntered
        } else {
            FormPhase::TaskSelected
        }
    }

    /// Parse the raw fields into an estimate input.
    ///
    /// Unlike the direct engine API, the form never falls back to a default
    /// tile size: both dimensions must be filled in for flooring.
    pub fn to_input(&self) -> CalcResult<EstimateInput> {
        let task = self.task.ok_or_else(|| CalcError::missing_field("task"))?;
        let area_sqft = parse_positive("area_sqft", &self.area)?;

        Ok(match task {
            Task::Walls => EstimateInput::Walls(WallsInput { area_sqft }),
            Task::Flooring => EstimateInput::Flooring(FlooringInput {
                area_sqft,
                tile_length_in: parse_positive("tile_length_in", &self.tile_length)?,
                tile_width_in: parse_positive("tile_width_in", &self.tile_width)?,
            }),
        })
    }

    /// Estimate from the current fields.
    ///
    /// On failure the previous result is cleared and the error returned;
    /// [`CalcError::user_message`] gives the text to show.
    pub fn submit(&mut self) -> CalcResult<&EstimateResult> {
        self.result = None;
        let outcome = self.to_input().and_then(|input| estimate(&input));
        match outcome {
            Ok(result) => Ok(&*self.result.insert(result)),
            Err(e) => {
                warn!(field = e.field().unwrap_or("-"), error = %e, "estimate rejected");
                Err(e)
            }
        }
    }

    /// Reset every field and drop the result
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Parse a raw text field as a finite positive number.
pub fn parse_positive(field: &str, raw: &str) -> CalcResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CalcError::missing_field(field));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| CalcError::invalid_input(field, trimmed, "Not a number"))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(field, trimmed, "Must be a positive number"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::Material;

    fn flooring_form(area: &str, length: &str, width: &str) -> EstimatorForm {
        let mut form = EstimatorForm::new();
        form.set_task(Task::Flooring);
        form.set_area(area);
        form.set_tile_length(length);
        form.set_tile_width(width);
        form
    }

    #[test]
    fn test_walls_submit() {
        let mut form = EstimatorForm::new();
        form.set_task(Task::Walls);
        form.set_area(" 100 ");
        let result = form.submit().unwrap();
        assert_eq!(result.display_rows(), vec!["Bricks: 700", "Cement: 3"]);
        assert_eq!(form.phase(), FormPhase::ResultDisplayed);
    }

    #[test]
    fn test_flooring_submit() {
        let mut form = flooring_form("100", "18", "18");
        let result = form.submit().unwrap();
        assert_eq!(result.get(Material::Tiles), Some(45));
        assert_eq!(result.get(Material::Grout), Some(2));
    }

    #[test]
    fn test_missing_area() {
        for task in Task::ALL {
            let mut form = EstimatorForm::new();
            form.set_task(task);
            form.set_tile_length("12");
            form.set_tile_width("12");
            let err = form.submit().unwrap_err();
            assert!(err.is_invalid_input());
            assert_eq!(err.user_message(), FORM_INCOMPLETE_MESSAGE);
        }
    }

    #[test]
    fn test_flooring_requires_tile_length() {
        let mut form = flooring_form("100", "", "12");
        let err = form.submit().unwrap_err();
        assert_eq!(err.field(), Some("tile_length_in"));
        assert!(form.result().is_none());
    }

    #[test]
    fn test_no_task_selected() {
        let mut form = EstimatorForm::new();
        form.set_area("100");
        assert_eq!(form.phase(), FormPhase::TaskUnset);
        assert_eq!(form.submit().unwrap_err().field(), Some("task"));
    }

    #[test]
    fn test_rejects_non_numeric_and_non_positive() {
        assert!(flooring_form("abc", "12", "12").submit().is_err());
        assert!(flooring_form("100", "0", "12").submit().is_err());
        assert!(flooring_form("100", "12", "-4").submit().is_err());
        assert!(flooring_form("inf", "12", "12").submit().is_err());
    }

    #[test]
    fn test_phase_transitions() {
        let mut form = EstimatorForm::new();
        assert_eq!(form.phase(), FormPhase::TaskUnset);

        form.set_task(Task::Flooring);
        assert_eq!(form.phase(), FormPhase::TaskSelected);

        form.set_area("100");
        assert_eq!(form.phase(), FormPhase::TaskSelected);

        form.set_tile_length("12");
        form.set_tile_width("12");
        assert_eq!(form.phase(), FormPhase::InputsEntered);

        form.submit().unwrap();
        assert_eq!(form.phase(), FormPhase::ResultDisplayed);

        form.set_tile_width("24");
        assert_eq!(form.phase(), FormPhase::InputsEntered);
        assert!(form.result().is_none());
    }

    #[test]
    fn test_task_change_clears_result() {
        let mut form = flooring_form("100", "12", "12");
        form.submit().unwrap();
        form.set_task(Task::Walls);
        assert!(form.result().is_none());

        let result = form.submit().unwrap();
        assert_eq!(result.get(Material::Bricks), Some(700));
    }

    #[test]
    fn test_failed_submit_clears_stale_result() {
        let mut form = flooring_form("100", "12", "12");
        form.submit().unwrap();
        form.area = "oops".to_string();
        assert!(form.submit().is_err());
        assert!(form.result().is_none());
    }

    #[test]
    fn test_tile_fields_only_for_flooring() {
        let mut form = EstimatorForm::new();
        assert!(!form.requires_tile_dimensions());
        form.set_task(Task::Walls);
        assert!(!form.requires_tile_dimensions());
        form.set_task(Task::Flooring);
        assert!(form.requires_tile_dimensions());
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("area", "2.5").unwrap(), 2.5);
        assert_eq!(parse_positive("area", "").unwrap_err().field(), Some("area"));
        assert!(parse_positive("area", "NaN").is_err());
    }
}
